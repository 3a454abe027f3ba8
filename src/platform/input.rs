//! Keyboard tracking
//!
//! Browsers report `ArrowLeft`/`ArrowRight`; older engines report `Left`/
//! `Right`. Each direction keeps its own held flag so releasing one key does
//! not cancel the other.

use crate::sim::FrameInput;

/// A steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held state of the steering keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyTracker {
    left: bool,
    right: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns true if the key steers the paddle.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Record a key-up. Returns true if the key steers the paddle.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Drop all held keys (e.g. when the page loses focus)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Snapshot for the next frame
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left_held: self.left,
            right_held: self.right,
        }
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match Direction::from_key(key) {
            Some(Direction::Left) => self.left = held,
            Some(Direction::Right) => self.right = held,
            None => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Right"), Some(Direction::Right));
        assert_eq!(Direction::from_key("a"), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut keys = KeyTracker::new();
        assert!(keys.key_down("ArrowLeft"));
        assert!(keys.key_down("ArrowRight"));
        assert_eq!(
            keys.frame_input(),
            FrameInput {
                left_held: true,
                right_held: true
            }
        );

        keys.key_up("ArrowRight");
        assert_eq!(
            keys.frame_input(),
            FrameInput {
                left_held: true,
                right_held: false
            }
        );
    }

    #[test]
    fn test_legacy_and_modern_names_share_state() {
        let mut keys = KeyTracker::new();
        keys.key_down("Right");
        keys.key_up("ArrowRight");
        assert!(!keys.frame_input().right_held);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut keys = KeyTracker::new();
        keys.key_down("ArrowLeft");
        assert!(!keys.key_down(" "));
        assert!(!keys.key_up("Shift"));
        assert!(keys.frame_input().left_held);
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyTracker::new();
        keys.key_down("Left");
        keys.key_down("Right");
        keys.release_all();
        assert_eq!(keys.frame_input(), FrameInput::default());
    }
}
