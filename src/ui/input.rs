//! Keyboard input for the terminal front end

use crossterm::event::{KeyCode, KeyEvent};

use crate::game::{Action, DirectionInput};

/// Map a key to the action it triggers, if any
pub fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char('e') | KeyCode::Char(' ') => Some(Action::Interact),
        KeyCode::Tab | KeyCode::Char('m') => Some(Action::OpenMenu),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Cancel),
        _ => None,
    }
}

/// Direction keys as held state.
///
/// Terminals only report presses, so each press keeps its direction down for
/// a few ticks; key repeat refreshes it while the key stays pressed.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    hold_ticks: u32,
    up: u32,
    down: u32,
    left: u32,
    right: u32,
}

impl HeldKeys {
    pub fn new(hold_ticks: u32) -> Self {
        Self { hold_ticks, ..Default::default() }
    }

    pub fn press(&mut self, action: Action) {
        let slot = match action {
            Action::MoveUp => {
                self.down = 0;
                &mut self.up
            }
            Action::MoveDown => {
                self.up = 0;
                &mut self.down
            }
            Action::MoveLeft => {
                self.right = 0;
                &mut self.left
            }
            Action::MoveRight => {
                self.left = 0;
                &mut self.right
            }
            _ => return,
        };
        *slot = self.hold_ticks;
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.hold_ticks);
    }

    /// Directions held this tick; counts down every call
    pub fn tick(&mut self) -> DirectionInput {
        let input = DirectionInput {
            up: self.up > 0,
            down: self.down > 0,
            left: self.left > 0,
            right: self.right > 0,
        };
        for slot in [&mut self.up, &mut self.down, &mut self.left, &mut self.right] {
            *slot = slot.saturating_sub(1);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(action_for(key(KeyCode::Char('a'))), Some(Action::MoveLeft));
        assert_eq!(action_for(key(KeyCode::Char(' '))), Some(Action::Interact));
        assert_eq!(action_for(key(KeyCode::Tab)), Some(Action::OpenMenu));
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(action_for(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_press_holds_for_configured_ticks() {
        let mut held = HeldKeys::new(3);
        held.press(Action::MoveRight);
        held.press(Action::MoveUp);
        for _ in 0..3 {
            let input = held.tick();
            assert!(input.right && input.up && !input.left);
        }
        assert!(!held.tick().any());
    }

    #[test]
    fn test_opposite_press_cancels() {
        let mut held = HeldKeys::new(5);
        held.press(Action::MoveLeft);
        held.press(Action::MoveRight);
        let input = held.tick();
        assert!(input.right && !input.left);
        held.clear();
        assert!(!held.tick().any());
    }
}
