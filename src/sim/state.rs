//! Game state and entity types
//!
//! `GameState` exclusively owns every entity; the renderer only ever sees
//! per-frame snapshots (see `frame`).

use glam::Vec2;

use super::geom::Rect;
use crate::consts::*;

/// Sprite colors, RGBA
pub mod palette {
    pub const PADDLE: [f32; 4] = [0.906, 0.984, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BRICK_PINK: [f32; 4] = [1.0, 0.439, 0.69, 1.0];
    pub const BRICK_GREEN: [f32; 4] = [0.541, 0.808, 0.0, 1.0];
}

/// The player's paddle. `y` never changes; `x` is moved by the input
/// adapter, with no clamp to the playfield (the sprite may leave the
/// screen).
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub color: [f32; 4],
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: PADDLE_Y,
            half_width: PADDLE_HALF_WIDTH,
            half_height: PADDLE_HALF_HEIGHT,
            color: palette::PADDLE,
        }
    }
}

impl Paddle {
    /// Sprite rect for rendering
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.x, self.y, self.half_width, self.half_height)
    }
}

/// The ball. Created once; position and velocity change every tick.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_size: f32,
    pub color: [f32; 4],
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            half_size: BALL_SPRITE_HALF,
            color: palette::BALL,
        }
    }
}

impl Ball {
    /// Sprite rect for rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.half_size))
    }

    /// Collision rect. Uses the fixed `BALL_HALF_SIZE` constant, not the
    /// sprite size.
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(BALL_HALF_SIZE))
    }

    /// Return to the origin with the default downward velocity (after a
    /// miss)
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1);
    }
}

/// A destructible brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Bricks remain; simulation is live
    Running,
    /// All bricks cleared. Terminal: the ball keeps moving but the win
    /// notification never repeats.
    Won,
}

/// One-shot notifications surfaced by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Emitted exactly once, when the last brick is destroyed
    GameWon { fails: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks, in layout order. Removal preserves order.
    pub bricks: Vec<Brick>,
    /// Number of times the ball was missed
    pub fails: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh game: ball at the origin, paddle centered, full brick wall
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            paddle: Paddle::default(),
            bricks: initial_bricks(),
            fails: 0,
            phase: GamePhase::Running,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the starting brick wall: 2 rows of 5, colors alternating starting
/// with green.
pub fn initial_bricks() -> Vec<Brick> {
    let colors = [palette::BRICK_PINK, palette::BRICK_GREEN];
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    let mut color_index = 1;

    for &row_y in &BRICK_ROW_Y {
        for col in 0..BRICK_COLS {
            let x = BRICK_START_X + col as f32 * BRICK_STEP_X;
            bricks.push(Brick {
                rect: Rect::from_center(x, row_y, BRICK_HALF_WIDTH, BRICK_HALF_HEIGHT),
                color: colors[color_index % 2],
            });
            color_index += 1;
        }
    }

    bricks
}
