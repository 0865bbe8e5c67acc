//! Collision detection and response
//!
//! Three independent checks run every tick, in a fixed order: paddle,
//! bricks, walls. Each can flip a velocity axis on its own, so two checks
//! flipping the same axis in one tick cancel out. That quirk is part of the
//! game's behavior and is kept.

use crate::consts::*;

use super::geom::{Rect, overlaps};
use super::state::{Ball, Brick, Paddle};

/// The collision rect the paddle presents to the ball. Fixed half-extents,
/// independent of the paddle's sprite size.
fn paddle_hitbox(paddle: &Paddle) -> Rect {
    Rect::from_center(paddle.x, paddle.y, PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT)
}

/// Ball vs paddle.
///
/// On a hit the vertical velocity flips and the horizontal velocity is set
/// proportional to where the ball struck: zero at the paddle's center,
/// `PADDLE_DEFLECT` at its edge, unclamped past that.
pub fn check_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let hit = overlaps(&ball.hitbox(), &paddle_hitbox(paddle));
    if hit {
        ball.vel.y = -ball.vel.y;
        let hit_position = (ball.pos.x - paddle.x) / PADDLE_HALF_WIDTH;
        ball.vel.x = hit_position * PADDLE_DEFLECT;
    }
    hit
}

/// Ball vs the live brick wall.
///
/// Scans bricks in order and destroys the first one the ball overlaps,
/// flipping the vertical velocity. At most one brick goes per tick. An
/// empty wall is a no-op.
pub fn check_bricks(ball: &mut Ball, bricks: &mut Vec<Brick>) -> bool {
    for i in 0..bricks.len() {
        if overlaps(&ball.hitbox(), &bricks[i].rect) {
            bricks.remove(i);
            ball.vel.y = -ball.vel.y;
            return true;
        }
    }
    false
}

/// Ball vs the playfield walls.
///
/// Side walls flip the horizontal velocity, the top wall flips the
/// vertical. Crossing the bottom is a miss: the ball resets to the origin
/// with the serve velocity, overriding anything the earlier checks did this
/// tick. Returns whether a miss happened. Boundary comparisons are strict,
/// so a ball sitting exactly on a wall does not bounce.
pub fn check_walls(ball: &mut Ball) -> bool {
    if ball.pos.x - BALL_HALF_SIZE < FIELD_MIN || ball.pos.x + BALL_HALF_SIZE > FIELD_MAX {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y + BALL_HALF_SIZE > FIELD_MAX {
        ball.vel.y = -ball.vel.y;
    }
    if ball.pos.y - BALL_HALF_SIZE < FIELD_MIN {
        ball.reset();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::initial_bricks;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::default();
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn paddle_center_hit_kills_horizontal_velocity() {
        let paddle = Paddle::default();
        let mut ball = ball_at(paddle.x, paddle.y, 0.015, -0.01);

        assert!(check_paddle(&mut ball, &paddle));
        assert_eq!(ball.vel.y, 0.01);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn paddle_edge_hit_deflects_at_full_scale() {
        let paddle = Paddle::default();
        let mut ball = ball_at(paddle.x + PADDLE_HALF_WIDTH, paddle.y, 0.0, -0.01);

        assert!(check_paddle(&mut ball, &paddle));
        assert!((ball.vel.x - PADDLE_DEFLECT).abs() < 1e-6);
    }

    #[test]
    fn paddle_overhang_hit_is_unclamped() {
        // Ball overlapping past the edge: deflection exceeds PADDLE_DEFLECT
        let paddle = Paddle::default();
        let mut ball = ball_at(paddle.x + PADDLE_HALF_WIDTH + 0.01, paddle.y, 0.0, -0.01);

        assert!(check_paddle(&mut ball, &paddle));
        assert!(ball.vel.x > PADDLE_DEFLECT);
    }

    #[test]
    fn paddle_collision_uses_fixed_extents_not_sprite_size() {
        let mut paddle = Paddle::default();
        paddle.half_width = 0.01; // shrink the sprite only
        let mut ball = ball_at(paddle.x + 0.15, paddle.y, 0.0, -0.01);

        // Still a hit: the hitbox is the 0.2-wide constant, not the sprite
        assert!(check_paddle(&mut ball, &paddle));
    }

    #[test]
    fn paddle_miss_leaves_velocity_alone() {
        let paddle = Paddle::default();
        let mut ball = ball_at(0.5, 0.5, 0.003, -0.01);

        assert!(!check_paddle(&mut ball, &paddle));
        assert_eq!(ball.vel, Vec2::new(0.003, -0.01));
    }

    #[test]
    fn first_overlapping_brick_goes_and_scan_stops() {
        let mut bricks = initial_bricks();
        // Sit the ball on the first brick of the top row
        let mut ball = ball_at(-0.8, 0.85, 0.0, 0.01);

        assert!(check_bricks(&mut ball, &mut bricks));
        assert_eq!(bricks.len(), 9);
        assert_eq!(ball.vel.y, -0.01);
        // The survivor at index 0 is the old second brick
        assert_eq!(bricks[0].rect.center.x, -0.4);
    }

    #[test]
    fn at_most_one_brick_per_tick_even_when_two_overlap() {
        use crate::sim::geom::Rect;
        use crate::sim::state::{Brick, palette};

        // Two bricks stacked on the same spot; only the first in order goes
        let brick = Brick {
            rect: Rect::from_center(0.0, 0.5, 0.175, 0.05),
            color: palette::BRICK_GREEN,
        };
        let mut bricks = vec![brick.clone(), brick];
        let mut ball = ball_at(0.0, 0.5, 0.0, 0.01);

        assert!(check_bricks(&mut ball, &mut bricks));
        assert_eq!(bricks.len(), 1);
        // A single y flip, not two
        assert_eq!(ball.vel.y, -0.01);
    }

    #[test]
    fn empty_brick_wall_is_a_noop() {
        let mut bricks = Vec::new();
        let mut ball = ball_at(0.0, 0.85, 0.0, 0.01);

        assert!(!check_bricks(&mut ball, &mut bricks));
        assert_eq!(ball.vel.y, 0.01);
    }

    #[test]
    fn side_walls_flip_horizontal_velocity() {
        let mut ball = ball_at(0.99, 0.0, 0.01, 0.005);
        assert!(!check_walls(&mut ball));
        assert_eq!(ball.vel.x, -0.01);

        let mut ball = ball_at(-0.99, 0.0, -0.01, 0.005);
        assert!(!check_walls(&mut ball));
        assert_eq!(ball.vel.x, 0.01);
    }

    #[test]
    fn top_wall_flips_vertical_velocity() {
        let mut ball = ball_at(0.0, 0.99, 0.0, 0.01);
        assert!(!check_walls(&mut ball));
        assert_eq!(ball.vel.y, -0.01);
    }

    #[test]
    fn exact_boundary_contact_does_not_bounce() {
        // y + 0.02 == 1.0 exactly; strict comparison means no flip
        let mut ball = ball_at(0.0, 0.98, 0.0, 0.01);
        assert!(!check_walls(&mut ball));
        assert_eq!(ball.vel.y, 0.01);
    }

    #[test]
    fn bottom_miss_resets_ball_regardless_of_velocity() {
        let mut ball = ball_at(0.3, -0.99, 0.017, -0.02);
        assert!(check_walls(&mut ball));
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::new(0.0, -0.01));
    }

    #[test]
    fn bottom_corner_miss_overrides_side_wall_flip() {
        // Ball out both left and bottom: the x flip happens, then the reset
        // wipes it
        let mut ball = ball_at(-0.99, -0.99, -0.01, -0.01);
        assert!(check_walls(&mut ball));
        assert_eq!(ball.vel, Vec2::new(0.0, -0.01));
    }
}
