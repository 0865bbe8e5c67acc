//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::{Frame, Rect};

/// Expand a rect into two triangles (TR, BR, BL / TR, TL, BL)
pub fn rect_vertices(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.min();
    let max = rect.max();

    [
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, min.y, color),
    ]
}

/// Assemble the vertex list for a whole frame: paddle, ball, then bricks in
/// layout order.
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((2 + frame.bricks.len()) * 6);
    vertices.extend_from_slice(&rect_vertices(&frame.paddle.rect, frame.paddle.color));
    vertices.extend_from_slice(&rect_vertices(&frame.ball.rect, frame.ball.color));
    for brick in &frame.bricks {
        vertices.extend_from_slice(&rect_vertices(&brick.rect, brick.color));
    }
    vertices
}
