//! Dialogue state machine
//!
//! Every modal is a [`Dialogue`]: some text and a list of options, each
//! carrying the [`Choice`] it triggers. NPCs only differ in how their opening
//! dialogue is built from the player's inventory; picking an option is
//! resolved by one function for all of them.

use rand::rngs::StdRng;
use rand::Rng;

use super::events::GameEvent;
use crate::audio::SoundId;
use crate::data::{DialogueBook, Question};
use crate::entities::{ItemKind, NpcKind, Player};
use crate::world::Position;

/// What an option does when picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Close,
    /// Buy the shop stock entry at this index
    Buy(usize),
    /// Offer this much sediment for the Arcane Eye
    Offer(u32),
    BorrowHammer,
    TradeIndexFossil,
    Topics,
    /// Another fact from the topic at this index
    Fact(usize),
    /// Answer the quiz crystal at `cell`
    Answer { cell: Position, correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOption {
    pub label: String,
    pub choice: Choice,
}

impl DialogueOption {
    fn new(label: impl Into<String>, choice: Choice) -> Self {
        Self { label: label.into(), choice }
    }
}

/// An open modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialogue {
    /// Who is talking; `None` for plain messages and quizzes
    pub speaker: Option<NpcKind>,
    pub text: String,
    /// Diagram for quiz questions
    pub image: Option<String>,
    pub options: Vec<DialogueOption>,
}

impl Dialogue {
    fn new(text: impl Into<String>, options: Vec<DialogueOption>) -> Self {
        Self { speaker: None, text: text.into(), image: None, options }
    }

    fn spoken_by(mut self, npc: NpcKind) -> Self {
        self.speaker = Some(npc);
        self
    }

    /// A message with a single close button
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(text, vec![DialogueOption::new("Close", Choice::Close)])
    }

    /// A quiz question for the crystal at `cell`
    pub fn quiz(question: &Question, cell: Position) -> Self {
        let options = question
            .options
            .iter()
            .map(|opt| DialogueOption::new(opt.clone(), Choice::Answer { cell, correct: *opt == question.answer }))
            .collect();
        Self {
            speaker: None,
            text: question.prompt.clone(),
            image: question.image.clone(),
            options,
        }
    }
}

/// Build the opening dialogue for an NPC; some characters hand out items
/// the moment they are spoken to
pub fn open(npc: NpcKind, player: &mut Player, book: &DialogueBook, events: &mut Vec<GameEvent>) -> Dialogue {
    greeting(npc, player, book, events).spoken_by(npc)
}

fn greeting(npc: NpcKind, player: &mut Player, book: &DialogueBook, events: &mut Vec<GameEvent>) -> Dialogue {
    let inv = &mut player.inventory;
    match npc {
        NpcKind::IndianaBones => {
            if player.found_dig_site && inv.shovel == 0 {
                inv.shovel = 1;
                Dialogue::message(book.bones.give_shovel.clone())
            } else if inv.explorer_hat > 0 {
                Dialogue::new(
                    book.bones.already_traded.clone(),
                    vec![DialogueOption::new("I love it!", Choice::Close)],
                )
            } else if inv.index_fossil > 0 {
                Dialogue::new(
                    book.bones.trade_prompt.clone(),
                    vec![
                        DialogueOption::new("Yes, let's trade!", Choice::TradeIndexFossil),
                        DialogueOption::new("Not right now.", Choice::Close),
                    ],
                )
            } else {
                Dialogue::new(
                    book.bones.greeting.clone(),
                    vec![DialogueOption::new("I'll be careful.", Choice::Close)],
                )
            }
        }
        NpcKind::Rocky => {
            let mut options: Vec<DialogueOption> = book
                .rocky
                .stock
                .iter()
                .enumerate()
                .filter(|(_, entry)| !entry.requires_depth10 || player.reached_depth10)
                .map(|(i, entry)| {
                    DialogueOption::new(format!("{} ({} Sediment)", entry.item.name(), entry.cost), Choice::Buy(i))
                })
                .collect();
            options.push(DialogueOption::new("Nothing, thanks.", Choice::Close));
            Dialogue::new(book.rocky.greeting.clone(), options)
        }
        NpcKind::Chip => {
            let mut options = Vec::new();
            let text = if inv.hammer == 0 {
                options.push(DialogueOption::new("Can I borrow a Hammer?", Choice::BorrowHammer));
                book.chip.greeting.clone()
            } else {
                book.chip.already_has.clone()
            };
            options.push(DialogueOption::new("Take care, Chip.", Choice::Close));
            Dialogue::new(text, options)
        }
        NpcKind::MrArnold => {
            if inv.arcane_eye > 0 {
                Dialogue::new(
                    book.arnold.already_has.clone(),
                    vec![DialogueOption::new("It sure is... something.", Choice::Close)],
                )
            } else {
                let mut options: Vec<DialogueOption> = book
                    .arnold
                    .offers
                    .iter()
                    .map(|v| DialogueOption::new(format!("{} Sediments", v), Choice::Offer(*v)))
                    .collect();
                options.push(DialogueOption::new("Maybe later.", Choice::Close));
                Dialogue::new(book.arnold.puzzle.clone(), options)
            }
        }
        NpcKind::Rex => {
            let text = if inv.fossils > 0 {
                if inv.index_fossil == 0 {
                    inv.index_fossil = 1;
                    events.push(GameEvent::Sound(SoundId::Success));
                    book.rex.excited.clone()
                } else {
                    book.rex.already_given.clone()
                }
            } else {
                book.rex.no_fossils.clone()
            };
            Dialogue::new(text, vec![DialogueOption::new("Rawr!", Choice::Close)])
        }
        NpcKind::Magnus => Dialogue::new(
            book.magnus.greeting.clone(),
            vec![DialogueOption::new("Cool, thanks.", Choice::Topics)],
        ),
    }
}

/// Apply a non-quiz choice; `None` closes the modal
pub fn resolve(
    choice: Choice,
    player: &mut Player,
    book: &DialogueBook,
    rng: &mut StdRng,
    events: &mut Vec<GameEvent>,
) -> Option<Dialogue> {
    let inv = &mut player.inventory;
    match choice {
        Choice::Close | Choice::Answer { .. } => None,
        Choice::Buy(index) => {
            let entry = book.rocky.stock.get(index)?;
            if inv.spend(ItemKind::Sediment, entry.cost) {
                inv.add(entry.item, 1);
                log::debug!("Bought {} for {} sediment", entry.item.name(), entry.cost);
                events.push(GameEvent::Sound(SoundId::Success));
                Some(Dialogue::message(format!("You bought an {}! {}", entry.item.name(), book.rocky.success)))
            } else {
                Some(Dialogue::message(book.rocky.too_poor.clone()))
            }
        }
        Choice::Offer(amount) => {
            let arnold = &book.arnold;
            if inv.sediment < amount {
                Some(Dialogue::message(arnold.too_poor.clone()))
            } else if amount < arnold.fair_price {
                Some(Dialogue::message(arnold.poor_calc.clone()))
            } else {
                inv.spend(ItemKind::Sediment, amount);
                inv.arcane_eye = 1;
                events.push(GameEvent::Sound(SoundId::Success));
                let text = if amount == arnold.fair_price { &arnold.success } else { &arnold.generous };
                Some(Dialogue::message(text.clone()))
            }
        }
        Choice::BorrowHammer => {
            inv.add(ItemKind::Hammer, 1);
            Some(Dialogue::message(book.chip.give_hammer.clone()))
        }
        Choice::TradeIndexFossil => {
            inv.index_fossil = 0;
            inv.explorer_hat = 1;
            events.push(GameEvent::Sound(SoundId::Success));
            Some(Dialogue::message(book.bones.give_hat.clone()))
        }
        Choice::Topics => {
            let mut options: Vec<DialogueOption> = book
                .magnus
                .topics
                .iter()
                .enumerate()
                .map(|(i, topic)| DialogueOption::new(topic.label.clone(), Choice::Fact(i)))
                .collect();
            options.push(DialogueOption::new("No thanks, bye.", Choice::Close));
            Some(Dialogue::new(book.magnus.topics_prompt.clone(), options).spoken_by(NpcKind::Magnus))
        }
        Choice::Fact(index) => {
            let facts = &book.magnus.topics.get(index)?.facts;
            if facts.is_empty() {
                return None;
            }
            let fact = &facts[rng.gen_range(0..facts.len())];
            Some(Dialogue::new(
                format!("Magnus Obsidia: {}", fact),
                vec![
                    DialogueOption::new("Tell me another fact.", Choice::Fact(index)),
                    DialogueOption::new("Back to topics", Choice::Topics),
                    DialogueOption::new("Thanks, see ya.", Choice::Close),
                ],
            )
            .spoken_by(NpcKind::Magnus))
        }
    }
}
