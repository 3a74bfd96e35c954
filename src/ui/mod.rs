//! User Interface module
//!
//! Terminal front end built on ratatui and crossterm.

pub mod app;
pub mod input;

pub use app::App;
