//! Keyboard state
//!
//! Key-down/key-up events set and clear four direction flags. The latest
//! event wins; the simulation reads the flags once at the top of each tick.

use crate::sim::TickInput;

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    input: TickInput,
}

impl KeyState {
    /// Record a key press; returns true if the key is a direction key
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Record a key release; returns true if the key is a direction key
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Release everything (focus loss, reset)
    pub fn clear(&mut self) {
        self.input = TickInput::default();
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        let flag = match key {
            "ArrowUp" => &mut self.input.up,
            "ArrowDown" => &mut self.input.down,
            "ArrowLeft" => &mut self.input.left,
            "ArrowRight" => &mut self.input.right,
            _ => return false,
        };
        *flag = held;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::default();
        assert!(keys.key_down("ArrowUp"));
        assert!(keys.key_down("ArrowLeft"));
        assert_eq!(
            keys.input(),
            TickInput {
                up: true,
                left: true,
                ..Default::default()
            }
        );

        assert!(keys.key_up("ArrowUp"));
        assert!(!keys.input().up);
        assert!(keys.input().left);
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut keys = KeyState::default();
        assert!(!keys.key_down("a"));
        assert!(!keys.key_down(" "));
        assert_eq!(keys.input(), TickInput::default());
    }

    #[test]
    fn test_repeat_presses_are_idempotent() {
        let mut keys = KeyState::default();
        keys.key_down("ArrowRight");
        keys.key_down("ArrowRight");
        keys.key_up("ArrowRight");
        assert!(!keys.input().right);
        keys.key_down("ArrowDown");
        keys.clear();
        assert_eq!(keys.input(), TickInput::default());
    }
}
