//! Collision detection between the ball, the paddles, and the playfield
//!
//! Detectors are pure functions over axis-aligned boxes. They report what was
//! hit and how deep; applying the result to the ball is the job of the
//! resolvers on [`Ball`](super::state::Ball). The two contact types are kept
//! distinct on purpose: a paddle contact carries a strike *region* (which
//! third of the face the ball landed on), a wall contact carries a *side*,
//! and only two of the four sides are scoring boundaries.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Which vertical third of the paddle face the ball struck
///
/// The region picks the deflection: top and bottom thirds send the ball away
/// steeply, the middle third returns it straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleRegion {
    Top,
    Middle,
    Bottom,
}

/// A detected ball-paddle overlap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleContact {
    pub region: PaddleRegion,
    /// Signed horizontal nudge that pushes the ball flush with the struck
    /// paddle face (positive when the ball travels leftward)
    pub penetration: f32,
}

/// Playfield boundary struck by the ball
///
/// `Top`/`Bottom` bounce; `Left`/`Right` are the scoring boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// A detected ball-boundary violation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallContact {
    pub side: WallSide,
    /// Signed vertical nudge back to the boundary; always 0 for the scoring
    /// sides, where the ball is re-centered instead of corrected
    pub penetration: f32,
}

/// Check for overlap between the ball and a paddle
///
/// Returns `None` as soon as the boxes are disjoint on either axis. On
/// overlap, penetration is taken from the ball's horizontal travel direction:
/// moving leftward it is pushed out to the paddle's right face, moving
/// rightward to the left face. A ball with exactly zero horizontal velocity
/// gets no correction (penetration stays 0 and it may overlap the paddle for
/// a frame); deliberate fidelity to the original game, not an oversight.
///
/// The strike region depends only on the ball's bottom edge against the two
/// boundaries that split the paddle face into thirds. Deep overlaps that put
/// the bottom edge outside both bands fall through to `Bottom`.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> Option<PaddleContact> {
    let ball_left = ball.pos.x;
    let ball_right = ball.pos.x + BALL_WIDTH;
    let ball_top = ball.pos.y;
    let ball_bottom = ball.pos.y + BALL_HEIGHT;

    let paddle_left = paddle.pos.x;
    let paddle_right = paddle.pos.x + PADDLE_WIDTH;
    let paddle_top = paddle.pos.y;
    let paddle_bottom = paddle.pos.y + PADDLE_HEIGHT;

    if ball_left >= paddle_right
        || ball_right <= paddle_left
        || ball_top >= paddle_bottom
        || ball_bottom <= paddle_top
    {
        return None;
    }

    let mut penetration = 0.0;
    if ball.vel.x < 0.0 {
        // Struck the left paddle; push the ball back out to the right
        penetration = paddle_right - ball_left;
    } else if ball.vel.x > 0.0 {
        // Struck the right paddle; push out to the left (negative)
        penetration = paddle_left - ball_right;
    }

    let range_upper = paddle_bottom - 2.0 * PADDLE_HEIGHT / 3.0;
    let range_middle = paddle_bottom - PADDLE_HEIGHT / 3.0;

    let region = if ball_bottom > paddle_top && ball_bottom < range_upper {
        PaddleRegion::Top
    } else if ball_bottom > range_upper && ball_bottom < range_middle {
        PaddleRegion::Middle
    } else {
        PaddleRegion::Bottom
    };

    Some(PaddleContact { region, penetration })
}

/// Check the ball against the playfield boundary
///
/// Strict priority order: left, then right, then top, then bottom. A corner
/// crossing that violates two boundaries at once resolves as the scoring
/// side only; round outcomes depend on this ordering.
pub fn ball_wall_collision(ball: &Ball) -> Option<WallContact> {
    let ball_left = ball.pos.x;
    let ball_right = ball.pos.x + BALL_WIDTH;
    let ball_top = ball.pos.y;
    let ball_bottom = ball.pos.y + BALL_HEIGHT;

    if ball_left < 0.0 {
        Some(WallContact {
            side: WallSide::Left,
            penetration: 0.0,
        })
    } else if ball_right > PLAYFIELD_WIDTH {
        Some(WallContact {
            side: WallSide::Right,
            penetration: 0.0,
        })
    } else if ball_top < 0.0 {
        Some(WallContact {
            side: WallSide::Top,
            penetration: -ball_top,
        })
    } else if ball_bottom > PLAYFIELD_HEIGHT {
        Some(WallContact {
            side: WallSide::Bottom,
            penetration: PLAYFIELD_HEIGHT - ball_bottom,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32) -> Ball {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, 0.0);
        ball
    }

    fn paddle_at(x: f32, y: f32) -> Paddle {
        let mut paddle = Paddle::new(x);
        paddle.pos.y = y;
        paddle
    }

    #[test]
    fn test_paddle_miss_on_each_axis() {
        let paddle = paddle_at(50.0, 300.0);

        // Fully right of the paddle
        assert!(ball_paddle_collision(&ball_at(60.0, 320.0, -1.0), &paddle).is_none());
        // Fully left
        assert!(ball_paddle_collision(&ball_at(20.0, 320.0, 1.0), &paddle).is_none());
        // Fully above
        assert!(ball_paddle_collision(&ball_at(50.0, 280.0, -1.0), &paddle).is_none());
        // Fully below
        assert!(ball_paddle_collision(&ball_at(50.0, 400.0, -1.0), &paddle).is_none());
    }

    #[test]
    fn test_paddle_edge_touch_is_a_miss() {
        let paddle = paddle_at(50.0, 300.0);

        // Ball's left edge exactly on the paddle's right edge
        let result = ball_paddle_collision(&ball_at(60.0, 320.0, -1.0), &paddle);
        assert!(result.is_none());
        // Ball's bottom edge exactly on the paddle's top edge
        let result = ball_paddle_collision(&ball_at(50.0, 285.0, -1.0), &paddle);
        assert!(result.is_none());
    }

    #[test]
    fn test_paddle_penetration_follows_travel_direction() {
        let paddle = paddle_at(50.0, 300.0);

        // Moving left into the left paddle, overlapping by 3: pushed right
        // out to the paddle's right face at x=60
        let contact = ball_paddle_collision(&ball_at(57.0, 340.0, -1.0), &paddle).unwrap();
        assert_eq!(contact.penetration, 3.0);

        // Same overlap but moving right: pushed out the other face
        let contact = ball_paddle_collision(&ball_at(48.0, 340.0, 1.0), &paddle).unwrap();
        assert_eq!(contact.penetration, 50.0 - (48.0 + BALL_WIDTH));
    }

    #[test]
    fn test_paddle_zero_vx_leaves_penetration_unset() {
        let paddle = paddle_at(50.0, 300.0);
        let contact = ball_paddle_collision(&ball_at(57.0, 340.0, 0.0), &paddle).unwrap();
        assert_eq!(contact.penetration, 0.0);
    }

    #[test]
    fn test_paddle_regions_by_thirds() {
        // Paddle spans y 300..400; thirds boundaries at 333.33 and 366.67,
        // measured against the ball's bottom edge (pos.y + 15)
        let paddle = paddle_at(50.0, 300.0);

        let contact = ball_paddle_collision(&ball_at(57.0, 305.0, -1.0), &paddle).unwrap();
        assert_eq!(contact.region, PaddleRegion::Top);

        let contact = ball_paddle_collision(&ball_at(57.0, 330.0, -1.0), &paddle).unwrap();
        assert_eq!(contact.region, PaddleRegion::Middle);

        let contact = ball_paddle_collision(&ball_at(57.0, 370.0, -1.0), &paddle).unwrap();
        assert_eq!(contact.region, PaddleRegion::Bottom);
    }

    #[test]
    fn test_paddle_region_ignores_horizontal_depth() {
        let paddle = paddle_at(50.0, 300.0);

        // Shallow and deep overlaps at the same height classify the same
        let shallow = ball_paddle_collision(&ball_at(59.0, 330.0, -1.0), &paddle).unwrap();
        let deep = ball_paddle_collision(&ball_at(51.0, 330.0, -1.0), &paddle).unwrap();
        assert_eq!(shallow.region, deep.region);
    }

    proptest! {
        #[test]
        fn prop_disjoint_boxes_never_collide(
            bx in 0.0f32..PLAYFIELD_WIDTH,
            by in 0.0f32..PLAYFIELD_HEIGHT,
            py in 0.0f32..(PLAYFIELD_HEIGHT - PADDLE_HEIGHT),
        ) {
            let paddle = paddle_at(50.0, py);
            let ball = ball_at(bx, by, -1.0);

            let disjoint = bx >= 60.0
                || bx + BALL_WIDTH <= 50.0
                || by >= py + PADDLE_HEIGHT
                || by + BALL_HEIGHT <= py;
            prop_assume!(disjoint);

            prop_assert!(ball_paddle_collision(&ball, &paddle).is_none());
        }

        #[test]
        fn prop_in_bounds_ball_hits_no_wall(
            bx in 0.0f32..=(PLAYFIELD_WIDTH - BALL_WIDTH),
            by in 0.0f32..=(PLAYFIELD_HEIGHT - BALL_HEIGHT),
        ) {
            let ball = ball_at(bx, by, 1.0);
            prop_assert!(ball_wall_collision(&ball).is_none());
        }
    }

    #[test]
    fn test_wall_sides_and_penetration() {
        let contact = ball_wall_collision(&ball_at(-2.0, 300.0, -1.0)).unwrap();
        assert_eq!(contact.side, WallSide::Left);
        assert_eq!(contact.penetration, 0.0);

        let contact = ball_wall_collision(&ball_at(PLAYFIELD_WIDTH - 10.0, 300.0, 1.0)).unwrap();
        assert_eq!(contact.side, WallSide::Right);

        let contact = ball_wall_collision(&ball_at(300.0, -4.0, 1.0)).unwrap();
        assert_eq!(contact.side, WallSide::Top);
        assert_eq!(contact.penetration, 4.0);

        let contact = ball_wall_collision(&ball_at(300.0, PLAYFIELD_HEIGHT - 10.0, 1.0)).unwrap();
        assert_eq!(contact.side, WallSide::Bottom);
        assert_eq!(contact.penetration, PLAYFIELD_HEIGHT - (PLAYFIELD_HEIGHT - 10.0 + BALL_HEIGHT));
    }

    #[test]
    fn test_wall_corner_scores_instead_of_bouncing() {
        // Violates both the left and top boundaries; the scoring side wins
        let contact = ball_wall_collision(&ball_at(-2.0, -2.0, -1.0)).unwrap();
        assert_eq!(contact.side, WallSide::Left);
    }
}
