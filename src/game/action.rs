//! Input vocabulary
//!
//! Whatever the device, input reduces to these actions plus the set of
//! direction keys currently held.

/// Discrete actions consumed by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Interact,
    OpenMenu,
    Confirm,
    Cancel,
}

/// Direction keys held during a tick; any subset may be set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Set the bit for a movement action; other actions are ignored
    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.up = true,
            Action::MoveDown => self.down = true,
            Action::MoveLeft => self.left = true,
            Action::MoveRight => self.right = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press() {
        let mut input = DirectionInput::default();
        assert!(!input.any());
        input.press(Action::Interact);
        assert!(!input.any());
        input.press(Action::MoveLeft);
        assert!(input.left && input.any());
    }
}
