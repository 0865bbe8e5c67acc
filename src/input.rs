//! Keyboard input adapter
//!
//! Discrete key events translate straight into paddle moves, applied the
//! moment the event arrives rather than batched into the next tick.

use crate::consts::PADDLE_STEP;
use crate::sim::Paddle;

/// The only input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
}

/// Apply a key event to the paddle. No bounds clamping; the paddle can be
/// driven off the playfield.
pub fn apply(event: InputEvent, paddle: &mut Paddle) {
    match event {
        InputEvent::MoveLeft => paddle.x -= PADDLE_STEP,
        InputEvent::MoveRight => paddle.x += PADDLE_STEP,
    }
}
