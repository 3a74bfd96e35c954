//! Data loading and external game content
//!
//! Dialogue and quiz tables ship as built-in defaults and can be overridden
//! by RON files in the data directory.

pub mod dialogue;
pub mod loader;
pub mod questions;

pub use dialogue::DialogueBook;
pub use loader::DataManager;
pub use questions::{Question, QuestionBank};
