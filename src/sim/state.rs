//! Game state and core simulation types
//!
//! Entities are plain position/velocity bodies with fixed box sizes. They are
//! created once at game start and mutated in place; a scoring rally re-centers
//! the ball rather than recreating it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{PaddleContact, PaddleRegion, WallContact, WallSide};
use crate::consts::*;

/// Player tag, used for score attribution and event reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// The ball, a 15x15 box
///
/// The ball is never clamped to the playfield; collision resolution is the
/// only thing that keeps it in bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Serve position: playfield center, moving toward the right goal
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel: Vec2::new(BALL_SPEED, 0.0),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Resolve a paddle hit
    ///
    /// The horizontal velocity always reverses and the penetration nudge
    /// pushes the ball flush with the paddle face. The strike region picks
    /// the outgoing vertical velocity: top third deflects steeply upward,
    /// bottom third steeply downward, middle third returns the ball with its
    /// incoming vertical velocity intact.
    pub fn bounce_off_paddle(&mut self, contact: &PaddleContact) {
        self.pos.x += contact.penetration;
        self.vel.x = -self.vel.x;

        match contact.region {
            PaddleRegion::Top => self.vel.y = -BALL_DEFLECT_SPEED,
            PaddleRegion::Bottom => self.vel.y = BALL_DEFLECT_SPEED,
            PaddleRegion::Middle => {}
        }
    }

    /// Resolve a wall hit
    ///
    /// Top/bottom walls are elastic bounces with a penetration correction.
    /// Left/right are the scoring boundaries: the ball is reset to center and
    /// re-served toward the side that conceded. Score attribution is the
    /// caller's job (see `tick`).
    pub fn bounce_off_wall(&mut self, contact: &WallContact) {
        match contact.side {
            WallSide::Top | WallSide::Bottom => {
                self.pos.y += contact.penetration;
                self.vel.y = -self.vel.y;
            }
            WallSide::Left => {
                self.reset_to_center();
                self.vel = Vec2::new(BALL_SPEED, BALL_DEFLECT_SPEED);
            }
            WallSide::Right => {
                self.reset_to_center();
                self.vel = Vec2::new(-BALL_SPEED, BALL_DEFLECT_SPEED);
            }
        }
    }

    fn reset_to_center(&mut self) {
        self.pos = Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, BALL_WIDTH, BALL_HEIGHT)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A paddle, a 10x100 box pinned to its lane
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, PLAYFIELD_HEIGHT / 2.0),
            vel: Vec2::ZERO,
        }
    }

    /// Integrate, then hard-clamp to the playfield
    ///
    /// The clamp only rewrites position; velocity is left as the input set
    /// it, so a paddle held against a wall sits there until the input
    /// reverses. Not a bounce.
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y > PLAYFIELD_HEIGHT - PADDLE_HEIGHT {
            self.pos.y = PLAYFIELD_HEIGHT - PADDLE_HEIGHT;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// Two independent rally counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_one: u32,
    pub player_two: u32,
}

impl Score {
    pub fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player_one + self.player_two
    }
}

/// Position/size rectangle handed to the renderer collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    fn new(pos: Vec2, w: f32, h: f32) -> Self {
        Self { x: pos.x, y: pos.y, w, h }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub ball: Rect,
    pub paddle_one: Rect,
    pub paddle_two: Rect,
    pub score_one: String,
    pub score_two: String,
}

/// Complete game state
///
/// There is no explicit round/serve mode: the serve is encoded entirely in
/// the ball's centered position and fixed serve velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Left paddle, defends the left goal
    pub paddle_one: Paddle,
    /// Right paddle, defends the right goal
    pub paddle_two: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            paddle_one: Paddle::new(PADDLE_INSET),
            paddle_two: Paddle::new(PLAYFIELD_WIDTH - PADDLE_INSET),
            score: Score::default(),
            time_ticks: 0,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            ball: self.ball.rect(),
            paddle_one: self.paddle_one.rect(),
            paddle_two: self.paddle_two.rect(),
            score_one: self.score.player_one.to_string(),
            score_two: self.score.player_two.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
