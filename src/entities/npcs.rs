//! Non-player characters
//!
//! NPCs are plain tiles; this enum names them so dialogue can dispatch on it.

/// Every character the player can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcKind {
    /// Skeleton archaeologist in the entrance cave
    IndianaBones,
    /// Shopkeeper behind the counter
    Rocky,
    /// Lore keeper of the volcanic field
    Magnus,
    /// Gives out hammers
    Chip,
    /// Sells the Arcane Eye behind a price puzzle
    MrArnold,
    /// Fossil enthusiast
    Rex,
}

impl NpcKind {
    pub fn name(&self) -> &'static str {
        match self {
            NpcKind::IndianaBones => "Indiana Bones",
            NpcKind::Rocky => "Rocky",
            NpcKind::Magnus => "Magnus Obsidia",
            NpcKind::Chip => "Chip",
            NpcKind::MrArnold => "Mr. Arnold",
            NpcKind::Rex => "Rex",
        }
    }
}
