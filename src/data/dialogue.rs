//! NPC dialogue content
//!
//! Lines, shop stock and Magnus's fact tables. Everything here is data; the
//! branching lives in `game::dialogue`.

use serde::{Deserialize, Serialize};

use crate::entities::ItemKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonesLines {
    pub greeting: String,
    pub give_shovel: String,
    pub trade_prompt: String,
    pub give_hat: String,
    pub already_traded: String,
}

/// An item Rocky sells for sediment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub item: ItemKind,
    pub cost: u32,
    /// Hidden until the player has reached the shrine
    #[serde(default)]
    pub requires_depth10: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockyLines {
    pub greeting: String,
    pub success: String,
    pub too_poor: String,
    pub stock: Vec<ShopItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipLines {
    pub greeting: String,
    pub already_has: String,
    pub give_hammer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArnoldLines {
    pub puzzle: String,
    pub already_has: String,
    pub success: String,
    pub generous: String,
    pub poor_calc: String,
    pub too_poor: String,
    pub offers: Vec<u32>,
    /// Answer to the puzzle; lower offers are refused
    pub fair_price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactTopic {
    pub label: String,
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnusLines {
    pub greeting: String,
    pub topics_prompt: String,
    pub topics: Vec<FactTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RexLines {
    pub excited: String,
    pub already_given: String,
    pub no_fossils: String,
}

/// All NPC text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueBook {
    pub bones: BonesLines,
    pub rocky: RockyLines,
    pub chip: ChipLines,
    pub arnold: ArnoldLines,
    pub magnus: MagnusLines,
    pub rex: RexLines,
}

impl Default for DialogueBook {
    fn default() -> Self {
        default_dialogue()
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_dialogue() -> DialogueBook {
    DialogueBook {
        bones: BonesLines {
            greeting: "Indiana Bones: Careful where you step. History is fragile, and so are my ribs.".into(),
            give_shovel: "Indiana Bones: You found some soft earth? Here, take this Shovel. I seem to have lost my fossils down there. If you find them, let me know!".into(),
            trade_prompt: "Indiana Bones: That... is an Index Fossil! Truly remarkable. I've been looking for one of those my whole career! Trade you my spare hat for it?".into(),
            give_hat: "Indiana Bones: It suits you! Wear it with pride, fellow explorer.".into(),
            already_traded: "Indiana Bones: How's the hat? Looking sharp!".into(),
        },
        rocky: RockyLines {
            greeting: "Rocky: Need some supplies for your journey? I've got items for sale for Sediment!".into(),
            success: "Rocky: Pleasure doing business with you!".into(),
            too_poor: "Rocky: You don't have enough Sediment for that!".into(),
            stock: vec![
                ShopItem { item: ItemKind::EchoPrism, cost: 2, requires_depth10: false },
                ShopItem { item: ItemKind::QuickEscape, cost: 25, requires_depth10: false },
                ShopItem { item: ItemKind::InstantTeleport, cost: 50, requires_depth10: true },
            ],
        },
        chip: ChipLines {
            greeting: "Chip: I love breaking stuff! Weathering is my passion. Ouch, my leg... I guess I weather easily too.".into(),
            already_has: "Chip: Keep up the good work weathering those rocks!".into(),
            give_hammer: "Chip gave you a Hammer! 'This will help you weather those rocks!'".into(),
        },
        arnold: ArnoldLines {
            puzzle: "Mr. Arnold: Greetings! I am Mr. Arnold, the Math Wizard. I have a spectacular item for you: The Arcane Eye! It can detect powerful magical energy in your vicinity. It's an essential tool for any serious explorer! I'll sell it for sediments. The price is hidden in this puzzle: (7 x 4) + (12 / 4) - 1. How many do you offer?".into(),
            already_has: "Mr. Arnold: I hope that Arcane Eye is serving you well! It's one of a kind, crafted with my finest mathematical magic!".into(),
            success: "Mr. Arnold: Excellent! A perfect calculation. The Arcane Eye is yours!".into(),
            generous: "Mr. Arnold: That is... quite generous! A deal is a deal. The Arcane Eye is yours!".into(),
            poor_calc: "Mr. Arnold: Hmm, no. That is a poor calculation. My magic is worth more than that paltry sum!".into(),
            too_poor: "Mr. Arnold: Alas, you simply cannot afford my brilliance. Come back when you have more sediment!".into(),
            offers: vec![20, 30, 45, 60],
            fair_price: 30,
        },
        magnus: MagnusLines {
            greeting: "Magnus Obsidia: Behold the power of the inner earth! Igneous rocks are born from fire itself.".into(),
            topics_prompt: "Magnus Obsidia: What rock wisdom do you seek?".into(),
            topics: vec![
                FactTopic {
                    label: "The Rock Cycle".into(),
                    facts: lines(&[
                        "Igneous = \"Fire Rock\": It’s made from cooled-down magma or lava. If it’s frozen fire, it’s igneous.",
                        "Sedimentary = \"Layer Rock\": It’s made from tiny bits of sand, dirt, and shells glued together over a long time.",
                        "Metamorphic = \"Change Rock\": It’s a rock that got squished and baked by heat and pressure until it turned into something new.",
                        "Magma vs. Lava: If it’s inside the Earth, it’s magma. If it shoots out of a volcano, it’s lava. Same stuff, different name.",
                        "The Big Melt: Any rock—no matter what type—will turn back into liquid magma if it gets hot enough.",
                        "Super Slow: You won’t see a rock change in your lifetime. These changes usually take millions of years.",
                        "Pressure: Deep underground, the weight of the Earth is so heavy it can actually bend and change solid rock without melting it.",
                        "The Cycle Never Stops: Rocks are always moving, breaking, melting, and reforming. Earth never runs out of \"new\" rocks.",
                    ]),
                },
                FactTopic {
                    label: "Weathering, Erosion, & Deposition".into(),
                    facts: lines(&[
                        "Weathering = Breaking: This is when nature uses \"tools\" like ice, rain, and plant roots to crack and crumble big rocks into tiny pieces (sediment).",
                        "Erosion = Moving: This is the \"getaway car.\" It’s when water, wind, or ice picks up those tiny pieces and carries them away to a new spot.",
                        "Deposition = Dropping: This is when the wind or water slows down and \"deposits\" (drops) the sediment. It's like the rock bits finally finding a place to sit down.",
                        "Water is the Boss: Flowing water (like rivers and rain) is the #1 cause of erosion on Earth. It is way more powerful than wind!",
                        "Ice Can Move Mountains: Glaciers are giant \"ice rivers.\" As they crawl along, they act like giant bulldozers, scraping up rocks and moving them miles away.",
                        "Gravity Plays a Part: Gravity is the silent helper. It pulls rocks down hills (landslides) and makes sure sediment eventually settles at the bottom of lakes and oceans.",
                        "Roots are Stronger than Rock: Have you ever seen a sidewalk crack because of a tree root? That’s \"biological weathering.\" Plants can actually grow through solid stone!",
                        "Building New Land: Deposition isn't just \"dropping trash\"—it builds things! Beaches, sand dunes, and river deltas are all created because of deposition.",
                    ]),
                },
                FactTopic {
                    label: "The Law of Superposition".into(),
                    facts: lines(&[
                        "Fossils: Only sedimentary rocks have fossils. If you tried to put a fossil in the other two, it would either melt or get crushed!",
                        "Oldest at the Bottom: In a stack of rock layers, the oldest layer is always at the bottom and the youngest is at the top. It’s like a stack of pancakes—you had to put the first one down before you could stack others on top.",
                        "Relative Dating: This law doesn't tell us the exact \"birthday\" of a rock (like \"this rock is 50 million years old\"). Instead, it tells us the relative age (like \"this rock is older than the one above it\").",
                        "Index Fossils, the Short-Lived Stars: An index fossil comes from a creature that lived for a short time in Earth’s history. If it lived for billions of years, it wouldn't be helpful for telling time!",
                        "The \"One Layer\" Rule: In a perfect world, an index fossil shows up in only one specific layer of rock. If it shows up in every single layer from bottom to top, it’s not a good index fossil.",
                        "Easy to Recognize: A good index fossil has a unique shape. It needs to be easy for a scientist to look at and say, \"Aha! That’s definitely a Trilobite!\"",
                    ]),
                },
            ],
        },
        rex: RexLines {
            excited: "Rex: OH MY! Is that a real fossil? It's magnificent! Here, take this as a token of my appreciation. It's a very rare Index Fossil!".into(),
            already_given: "Rex: Thank you for showing me your fossils! That Index Fossil I gave you is very important for telling time in the rock layers!".into(),
            no_fossils: "Rex: You don't have any fossils yet? Keep digging in the caves! I'll be here waiting!".into(),
        },
    }
}
