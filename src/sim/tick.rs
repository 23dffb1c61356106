//! Per-frame simulation step
//!
//! One call to [`tick`] is one frame: control events first, then gameplay
//! when the game is running. All speeds are per frame; there is no delta time.

use serde::{Deserialize, Serialize};

use super::state::{DirectionKeys, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Discrete inputs queued since the previous frame, applied in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Window close requested
    Close,
    /// Pause key pressed
    TogglePause,
    /// Quit key pressed at `at` seconds (any monotonic origin)
    QuitPressed { at: f64 },
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys held this frame
    pub keys: DirectionKeys,
    /// Key presses and window signals since the last frame
    pub events: Vec<ControlEvent>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    for event in &input.events {
        handle_control(state, *event);
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.frame += 1;

    let screen = crate::screen_size();
    state.player.move_with(input.keys, screen);

    if state.player.reached_top() {
        complete_crossing(state);
    }

    for i in 0..state.obstacles.len() {
        state.obstacles[i].advance(screen.x);

        // Later obstacles are tested against the already-reset player
        if state.obstacles[i].aabb().overlaps(&state.player.aabb()) {
            state.player.reset_position();
            state.events.push(GameEvent::Collision { obstacle: i });
        }
    }
}

/// Apply one control event. Ignored once the game has terminated.
pub fn handle_control(state: &mut GameState, event: ControlEvent) {
    if state.phase == GamePhase::Terminated {
        return;
    }

    match event {
        ControlEvent::Close => state.phase = GamePhase::Terminated,
        ControlEvent::TogglePause => {
            state.phase = match state.phase {
                GamePhase::Running => GamePhase::Paused,
                _ => GamePhase::Running,
            };
        }
        ControlEvent::QuitPressed { at } => {
            if let Some(last) = state.last_quit_press {
                if at - last < QUIT_DOUBLE_PRESS_WINDOW {
                    state.phase = GamePhase::Terminated;
                }
            }
            state.last_quit_press = Some(at);
        }
    }
}

/// Player reached the top: reward and speed everything up
fn complete_crossing(state: &mut GameState) {
    state.player.reset_position();
    state.player.speed += PLAYER_SPEED_STEP;
    state.score += CROSSING_SCORE;
    state.level += 1;
    state.crossings += 1;

    for obstacle in &mut state.obstacles {
        obstacle.vel.x *= DIFFICULTY_RAMP;
    }

    state.events.push(GameEvent::Crossing {
        level: state.level,
        score: state.score,
    });
}
