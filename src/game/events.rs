//! Events for outer layers
//!
//! The controller queues these while it mutates state; the front end drains
//! them once per frame to show messages, play sounds and shake the view.

use crate::audio::SoundId;
use crate::world::Mode;

/// Ticks the view shakes after the ritual
pub const RITUAL_SHAKE_TICKS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Plain text for the message log
    Message(String),
    Sound(SoundId),
    ScreenShake { ticks: u32 },
    ModeChanged { mode: Mode, depth: u8 },
    Won,
}
