//! Per-frame simulation step
//!
//! One `tick` per animation frame: advance the ball, resolve collisions in
//! a fixed order, then check for the win transition. Input is not part of
//! the tick; key events move the paddle asynchronously between ticks.

use super::collision;
use super::frame::Renderer;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one tick.
///
/// Returns the one-shot `GameWon` event on the tick the last brick dies,
/// `None` on every other tick. The `Won` phase is a latch: the ball keeps
/// moving afterward but the event never repeats.
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    state.ball.pos += state.ball.vel;

    // All three checks run every tick; none short-circuits the others
    collision::check_paddle(&mut state.ball, &state.paddle);
    collision::check_bricks(&mut state.ball, &mut state.bricks);
    if collision::check_walls(&mut state.ball) && state.phase == GamePhase::Running {
        // Misses after the win latch don't count; the emitted event already
        // carried the final tally
        state.fails += 1;
        log::debug!("ball missed, fails = {}", state.fails);
    }

    if state.phase == GamePhase::Running && state.bricks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("all bricks cleared with {} fails", state.fails);
        return Some(GameEvent::GameWon { fails: state.fails });
    }

    None
}

/// Run one full frame: tick the simulation, then hand the updated sprites
/// to the renderer.
///
/// The tick outcome and the draw outcome are independent: a draw error
/// must not swallow the one-shot `GameWon` event, which the latch would
/// never re-emit.
pub fn run_frame<R: Renderer>(
    state: &mut GameState,
    renderer: &mut R,
) -> (Option<GameEvent>, Result<(), R::Error>) {
    let event = tick(state);
    let drawn = renderer.draw_frame(&state.frame());
    (event, drawn)
}
