//! Sound definitions and mappings
//!
//! Defines the sound cues the game raises and picks a music track from the
//! active mode. Synthesis lives outside the core.

use crate::world::Mode;

/// Sound event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    // === UI & Menu ===
    /// Menu navigation (cursor move)
    MenuMove,
    /// Menu selection confirmed
    MenuSelect,

    // === World ===
    /// Sediment collected
    Pickup,
    /// Hammer hit a boulder or wall
    Smash,
    /// Shovel found a fossil
    Dig,
    /// Something good happened
    Success,
    /// Ritual stones activated
    Earthquake,
    /// Finale reached
    Win,
}

impl SoundId {
    /// Cue name understood by the synthesizer
    pub fn name(&self) -> &'static str {
        match self {
            SoundId::MenuMove => "menu_move",
            SoundId::MenuSelect => "menu_select",
            SoundId::Pickup => "pickup",
            SoundId::Smash => "smash",
            SoundId::Dig => "dig",
            SoundId::Success => "success",
            SoundId::Earthquake => "earthquake",
            SoundId::Win => "win",
        }
    }

    /// Get the default volume for this sound (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundId::MenuMove => 0.4,
            SoundId::MenuSelect => 0.5,
            SoundId::Earthquake | SoundId::Win => 0.9,
            _ => 0.6,
        }
    }

    pub fn category(&self) -> SoundCategory {
        match self {
            SoundId::MenuMove | SoundId::MenuSelect => SoundCategory::UI,
            SoundId::Pickup | SoundId::Smash | SoundId::Dig => SoundCategory::Tools,
            SoundId::Success | SoundId::Earthquake | SoundId::Win => SoundCategory::Event,
        }
    }
}

/// Categories for organizing sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCategory {
    UI,
    Tools,
    Event,
}

/// Background music
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Silence,
    Overworld,
    Cave,
}

impl MusicTrack {
    /// The track the scheduler should loop for a mode
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Cave => MusicTrack::Cave,
            Mode::Overworld => MusicTrack::Overworld,
            Mode::Start | Mode::Interior => MusicTrack::Silence,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            MusicTrack::Silence => None,
            MusicTrack::Overworld => Some("Overworld Breeze"),
            MusicTrack::Cave => Some("Deep Cavern Echoes"),
        }
    }

    pub fn bpm(&self) -> Option<u32> {
        match self {
            MusicTrack::Silence => None,
            MusicTrack::Overworld => Some(110),
            MusicTrack::Cave => Some(85),
        }
    }
}
