//! Per-frame simulation tick
//!
//! Advances the whole game by one frame: input mapping, integration, then
//! collision resolution. Collision sources are checked in fixed priority -
//! paddle one, paddle two, walls - and only the first hit is resolved, so a
//! ball geometrically touching two things in the same frame bounces off
//! exactly one of them.

use crate::consts::*;

use super::collision::{PaddleRegion, WallSide, ball_paddle_collision, ball_wall_collision};
use super::state::{GameState, Player};

/// Input intents for a single tick
///
/// The input collaborator maps real key state to these four booleans; the
/// sim never sees keycodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub paddle_one_up: bool,
    pub paddle_one_down: bool,
    pub paddle_two_up: bool,
    pub paddle_two_down: bool,
}

/// What happened this tick, for the driver's logging/sfx collaborators
///
/// At most one event per tick, by the single-contact rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PaddleHit { player: Player, region: PaddleRegion },
    WallBounce { side: WallSide },
    PointScored { scorer: Player },
}

/// Map up/down intents to a vertical paddle velocity. Up wins when both are
/// held.
fn paddle_axis(up: bool, down: bool) -> f32 {
    if up {
        -PADDLE_SPEED
    } else if down {
        PADDLE_SPEED
    } else {
        0.0
    }
}

/// Advance the game state by one frame
///
/// `dt` is in milliseconds and is supplied by the driver: wall-clock elapsed
/// time in the real game loop, a fixed step in tests.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameEvent> {
    state.time_ticks += 1;

    state.paddle_one.vel.y = paddle_axis(input.paddle_one_up, input.paddle_one_down);
    state.paddle_two.vel.y = paddle_axis(input.paddle_two_up, input.paddle_two_down);

    state.paddle_one.update(dt);
    state.paddle_two.update(dt);
    state.ball.update(dt);

    if let Some(contact) = ball_paddle_collision(&state.ball, &state.paddle_one) {
        state.ball.bounce_off_paddle(&contact);
        return Some(GameEvent::PaddleHit {
            player: Player::One,
            region: contact.region,
        });
    }

    if let Some(contact) = ball_paddle_collision(&state.ball, &state.paddle_two) {
        state.ball.bounce_off_paddle(&contact);
        return Some(GameEvent::PaddleHit {
            player: Player::Two,
            region: contact.region,
        });
    }

    if let Some(contact) = ball_wall_collision(&state.ball) {
        state.ball.bounce_off_wall(&contact);
        let event = match contact.side {
            // The ball crossing a goal line scores for the opponent
            WallSide::Left => {
                state.score.award(Player::Two);
                GameEvent::PointScored { scorer: Player::Two }
            }
            WallSide::Right => {
                state.score.award(Player::One);
                GameEvent::PointScored { scorer: Player::One }
            }
            side => GameEvent::WallBounce { side },
        };
        if let GameEvent::PointScored { scorer } = event {
            log::info!(
                "{:?} scores ({} - {})",
                scorer,
                state.score.player_one,
                state.score.player_two
            );
        }
        return Some(event);
    }

    None
}
