//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Per-frame constants only (no delta time)
//! - Timestamps arrive through input, never read from a clock
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    DirectionKeys, GameEvent, GamePhase, GameState, Obstacle, ObstacleSkin, Player,
    starting_roster,
};
pub use tick::{ControlEvent, TickInput, handle_control, tick};
