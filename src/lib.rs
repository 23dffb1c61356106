//! Lane Hopper - A single-screen lane crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: wgpu sprite rendering
//! - `platform`: Native window input and frame pacing
//! - `assets`: Sprite loading and scaling
//! - `settings`: Runtime settings with environment overrides

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, StartupError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    pub const WINDOW_TITLE: &str = "Lane Hopper";

    /// Window dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Default frame rate; every speed below is per frame
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_SPEED: f32 = 4.0;
    /// Speed gained per crossing
    pub const PLAYER_SPEED_STEP: f32 = 1.0;

    /// Points awarded per crossing
    pub const CROSSING_SCORE: u64 = 10;
    /// Obstacle horizontal velocity multiplier per crossing
    pub const DIFFICULTY_RAMP: f32 = 1.1;

    /// Two quit presses closer than this (seconds) end the game
    pub const QUIT_DOUBLE_PRESS_WINDOW: f64 = 0.5;

    /// Pause overlay opacity (0-255, drawn in black)
    pub const PAUSE_OVERLAY_ALPHA: u8 = 150;
}

/// Screen size as a vector
#[inline]
pub fn screen_size() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}
