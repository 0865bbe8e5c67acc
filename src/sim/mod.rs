//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One tick per animation frame
//! - Stable brick iteration order (layout order)
//! - State owned by `GameState`, mutated only by `tick` and the input
//!   adapter

pub mod collision;
pub mod frame;
pub mod geom;
pub mod state;
pub mod tick;

pub use frame::{Frame, Renderer, Sprite};
pub use geom::{Rect, overlaps};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{run_frame, tick};
