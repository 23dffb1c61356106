//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here; nothing in this file knows
//! about windows, clocks, or the GPU.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Gameplay advances every frame
    Running,
    /// Gameplay frozen, dimmed background shown
    Paused,
    /// Window closed or quit confirmed; terminal
    Terminated,
}

/// Notable things that happened during a frame (drained by the frame loop)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player reached the top edge
    Crossing { level: u32, score: u64 },
    /// Player was hit by the obstacle at this roster index
    Collision { obstacle: usize },
}

/// Sprite used by an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleSkin {
    Car1,
    Car2,
    Car3,
    Car4,
}

impl ObstacleSkin {
    pub fn file_name(&self) -> &'static str {
        match self {
            ObstacleSkin::Car1 => "car1.png",
            ObstacleSkin::Car2 => "car2.png",
            ObstacleSkin::Car3 => "car3.png",
            ObstacleSkin::Car4 => "car4.png",
        }
    }
}

/// Arrow keys held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame along each held axis
    pub speed: f32,
    /// Where the player returns to after a crossing or a hit
    pub start: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::splat(PLAYER_SIZE), crate::screen_size())
    }
}

impl Player {
    /// Player centered horizontally on the bottom edge of `screen`
    pub fn new(size: Vec2, screen: Vec2) -> Self {
        let start = Vec2::new(((screen.x - size.x) / 2.0).floor(), screen.y - size.y);
        Self {
            pos: start,
            size,
            speed: PLAYER_START_SPEED,
            start,
        }
    }

    /// Move by `speed` along every held direction, then clamp to `screen`.
    ///
    /// Diagonals are not normalized: holding up and left moves `speed` on
    /// both axes.
    pub fn move_with(&mut self, keys: DirectionKeys, screen: Vec2) {
        if keys.left {
            self.pos.x -= self.speed;
        }
        if keys.right {
            self.pos.x += self.speed;
        }
        if keys.up {
            self.pos.y -= self.speed;
        }
        if keys.down {
            self.pos.y += self.speed;
        }

        self.pos.x = self.pos.x.clamp(0.0, (screen.x - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (screen.y - self.size.y).max(0.0));
    }

    pub fn reset_position(&mut self) {
        self.pos = self.start;
    }

    /// True once the top edge has been reached
    pub fn reached_top(&self) -> bool {
        self.pos.y <= 0.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A car driving along its lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub skin: ObstacleSkin,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame. `y` is carried along but the roster never sets it.
    pub vel: Vec2,
}

impl Obstacle {
    pub fn new(skin: ObstacleSkin, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            skin,
            pos,
            size,
            vel,
        }
    }

    /// Advance one frame, wrapping horizontally around a screen `screen_width` wide
    pub fn advance(&mut self, screen_width: f32) {
        self.pos += self.vel;

        if self.pos.x < -self.size.x {
            self.pos.x = screen_width;
        } else if self.pos.x > screen_width {
            self.pos.x = -self.size.x;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Cars present when a session starts: (skin, x, y, vx, width, height)
const ROSTER: [(ObstacleSkin, f32, f32, f32, f32, f32); 15] = [
    (ObstacleSkin::Car4, 250.0, 50.0, 1.0, 60.0, 50.0),
    (ObstacleSkin::Car4, -350.0, 50.0, 1.0, 60.0, 50.0),
    (ObstacleSkin::Car4, 550.0, 50.0, 1.0, 60.0, 50.0),
    (ObstacleSkin::Car2, 600.0, 220.0, -2.0, 90.0, 80.0),
    (ObstacleSkin::Car3, 200.0, 250.0, -2.0, 60.0, 50.0),
    (ObstacleSkin::Car4, 400.0, 480.0, 2.0, 60.0, 50.0),
    (ObstacleSkin::Car3, 830.0, 125.0, -4.0, 60.0, 50.0),
    (ObstacleSkin::Car1, 350.0, 112.0, -4.0, 60.0, 50.0),
    (ObstacleSkin::Car1, 450.0, 170.0, -3.0, 60.0, 50.0),
    (ObstacleSkin::Car1, 700.0, 670.0, -3.0, 60.0, 50.0),
    (ObstacleSkin::Car1, 450.0, 670.0, -3.0, 60.0, 50.0),
    (ObstacleSkin::Car3, 200.0, 550.0, -2.0, 60.0, 50.0),
    (ObstacleSkin::Car2, 600.0, 530.0, -2.0, 90.0, 80.0),
    (ObstacleSkin::Car4, -350.0, 600.0, 2.0, 60.0, 50.0),
    (ObstacleSkin::Car4, 300.0, 600.0, 2.0, 60.0, 50.0),
];

/// Build the fixed startup roster
pub fn starting_roster() -> Vec<Obstacle> {
    ROSTER
        .iter()
        .map(|&(skin, x, y, vx, w, h)| {
            Obstacle::new(skin, Vec2::new(x, y), Vec2::new(vx, 0.0), Vec2::new(w, h))
        })
        .collect()
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Starts at 1
    pub level: u32,
    pub crossings: u32,
    /// Unpaused gameplay frames simulated so far
    pub frame: u64,
    /// Seconds timestamp of the previous quit press
    pub last_quit_press: Option<f64>,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_obstacles(starting_roster())
    }

    /// Fresh session with a custom set of obstacles
    pub fn with_obstacles(obstacles: Vec<Obstacle>) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles,
            score: 0,
            level: 1,
            crossings: 0,
            frame: 0,
            last_quit_press: None,
            events: Vec::new(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == GamePhase::Terminated
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
