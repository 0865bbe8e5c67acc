//! Frame snapshots handed to the renderer
//!
//! The renderer collaborator gets a read-only copy of the current frame's
//! sprites once per tick. It never writes back into `GameState`.

use super::geom::Rect;
use super::state::GameState;

/// A rectangle plus its fill color
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Everything drawn in one frame. Bricks keep their layout order.
#[derive(Debug, Clone)]
pub struct Frame {
    pub paddle: Sprite,
    pub ball: Sprite,
    pub bricks: Vec<Sprite>,
}

/// Drawing contract consumed by the game loop
pub trait Renderer {
    type Error;

    fn draw_frame(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

impl GameState {
    /// Snapshot the current sprites for rendering
    pub fn frame(&self) -> Frame {
        Frame {
            paddle: Sprite {
                rect: self.paddle.rect(),
                color: self.paddle.color,
            },
            ball: Sprite {
                rect: self.ball.rect(),
                color: self.ball.color,
            },
            bricks: self
                .bricks
                .iter()
                .map(|b| Sprite {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
        }
    }
}
