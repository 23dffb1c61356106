//! Platform layer
//!
//! Native glue between winit and the simulation:
//! - Keyboard state and key mapping
//! - Frame pacing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{GameKey, InputCollector, map_key};
