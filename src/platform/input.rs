//! Keyboard handling
//!
//! Arrow keys are sampled as held state each frame. Pause and quit are
//! edge-triggered presses queued as control events.

use winit::keyboard::KeyCode;

use crate::sim::{ControlEvent, DirectionKeys, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Up,
    Down,
    Pause,
    Quit,
}

pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::ArrowLeft => Some(GameKey::Left),
        KeyCode::ArrowRight => Some(GameKey::Right),
        KeyCode::ArrowUp => Some(GameKey::Up),
        KeyCode::ArrowDown => Some(GameKey::Down),
        KeyCode::KeyP => Some(GameKey::Pause),
        KeyCode::Escape => Some(GameKey::Quit),
        _ => None,
    }
}

/// Accumulates window input between frames
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    held: DirectionKeys,
    pending: Vec<ControlEvent>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. `at` is the press time in seconds.
    pub fn key(&mut self, key: GameKey, pressed: bool, repeat: bool, at: f64) {
        match key {
            GameKey::Left => self.held.left = pressed,
            GameKey::Right => self.held.right = pressed,
            GameKey::Up => self.held.up = pressed,
            GameKey::Down => self.held.down = pressed,
            GameKey::Pause if pressed && !repeat => self.pending.push(ControlEvent::TogglePause),
            GameKey::Quit if pressed && !repeat => {
                self.pending.push(ControlEvent::QuitPressed { at })
            }
            GameKey::Pause | GameKey::Quit => {}
        }
    }

    /// Window lost focus: release events will not arrive, so drop held keys
    pub fn release_all(&mut self) {
        self.held = DirectionKeys::default();
    }

    /// Held keys plus everything queued since the last call
    pub fn take_frame(&mut self) -> TickInput {
        TickInput {
            keys: self.held,
            events: std::mem::take(&mut self.pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(GameKey::Up));
        assert_eq!(map_key(KeyCode::KeyP), Some(GameKey::Pause));
        assert_eq!(map_key(KeyCode::Escape), Some(GameKey::Quit));
        assert_eq!(map_key(KeyCode::KeyW), None);
        assert_eq!(map_key(KeyCode::Space), None);
    }

    #[test]
    fn test_held_keys_persist_across_frames() {
        let mut input = InputCollector::new();
        input.key(GameKey::Left, true, false, 0.0);
        input.key(GameKey::Up, true, false, 0.0);

        let first = input.take_frame();
        assert!(first.keys.left && first.keys.up);
        let second = input.take_frame();
        assert!(second.keys.left && second.keys.up);

        input.key(GameKey::Left, false, false, 0.1);
        let third = input.take_frame();
        assert!(!third.keys.left && third.keys.up);
    }

    #[test]
    fn test_presses_queue_once() {
        let mut input = InputCollector::new();
        input.key(GameKey::Pause, true, false, 1.0);
        input.key(GameKey::Pause, true, true, 1.1);
        input.key(GameKey::Pause, false, false, 1.2);
        input.key(GameKey::Quit, true, false, 1.3);

        let frame = input.take_frame();
        assert_eq!(
            frame.events,
            vec![
                ControlEvent::TogglePause,
                ControlEvent::QuitPressed { at: 1.3 }
            ]
        );
        assert!(input.take_frame().events.is_empty());
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut input = InputCollector::new();
        input.key(GameKey::Right, true, false, 0.0);
        input.key(GameKey::Quit, true, false, 0.5);
        input.release_all();

        let frame = input.take_frame();
        assert_eq!(frame.keys, DirectionKeys::default());
        assert_eq!(frame.events, vec![ControlEvent::QuitPressed { at: 0.5 }]);
    }
}
