//! Brickout - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `input`: Keyboard-to-paddle input adapter
//! - `renderer`: WebGPU rendering pipeline

pub mod input;
pub mod renderer;
pub mod sim;

pub use input::InputEvent;
pub use sim::{GameEvent, GamePhase, GameState};

/// Game configuration constants
///
/// The playfield is normalized device coordinates: x in [-1, 1] left to
/// right, y in [-1, 1] bottom to top. All positions and sizes live in that
/// space.
pub mod consts {
    /// Playfield bounds (both axes)
    pub const FIELD_MIN: f32 = -1.0;
    pub const FIELD_MAX: f32 = 1.0;

    /// Ball collision half-size. Fixed; collision checks use this constant
    /// rather than the ball's sprite size.
    pub const BALL_HALF_SIZE: f32 = 0.02;
    /// Ball sprite half-size
    pub const BALL_SPRITE_HALF: f32 = 0.02;
    /// Velocity the ball starts with (and resets to after a miss)
    pub const BALL_START_VEL: (f32, f32) = (0.0, -0.01);

    /// Paddle collision half-extents. Fixed; decoupled from the paddle
    /// entity's stored sprite size.
    pub const PADDLE_HALF_WIDTH: f32 = 0.2;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.025;
    /// Paddle resting row
    pub const PADDLE_Y: f32 = -0.85;
    /// Horizontal distance one key event moves the paddle
    pub const PADDLE_STEP: f32 = 0.04;
    /// Deflection scale: a hit at the paddle's edge sends the ball off at
    /// this horizontal speed
    pub const PADDLE_DEFLECT: f32 = 0.02;

    /// Brick layout: 2 rows of 5
    pub const BRICK_ROWS: usize = 2;
    pub const BRICK_COLS: usize = 5;
    pub const BRICK_HALF_WIDTH: f32 = 0.175;
    pub const BRICK_HALF_HEIGHT: f32 = 0.05;
    pub const BRICK_ROW_Y: [f32; BRICK_ROWS] = [0.85, 0.7];
    pub const BRICK_START_X: f32 = -0.8;
    pub const BRICK_STEP_X: f32 = 0.4;
}
