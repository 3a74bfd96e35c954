//! Game module - the rules of play
//!
//! The controller in `state` owns all live state; the other modules are the
//! pieces it delegates to.

pub mod action;
pub mod dialogue;
pub mod events;
pub mod interaction;
pub mod movement;
mod state;

pub use action::{Action, DirectionInput};
pub use dialogue::{Choice, Dialogue, DialogueOption};
pub use events::GameEvent;
pub use interaction::UseError;
pub use movement::StepOutcome;
pub use state::{GameController, LoadOutcome};
