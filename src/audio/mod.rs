//! Audio cues
//!
//! The game only names sounds and tracks; playback belongs to the front end.

pub mod sounds;

pub use sounds::{MusicTrack, SoundCategory, SoundId};
