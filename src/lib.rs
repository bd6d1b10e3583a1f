//! Duel Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering, windowing, and real input devices are external collaborators:
//! the sim exposes a [`sim::FrameSnapshot`] for drawing and consumes a
//! [`sim::TickInput`] of abstract paddle intents, nothing more.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (fixed, not resolution-dependent)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Ball box
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;

    /// Paddle box
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Horizontal inset of each paddle from its side wall
    pub const PADDLE_INSET: f32 = 50.0;

    /// Speeds are in playfield units per millisecond; `dt` is measured in ms
    pub const PADDLE_SPEED: f32 = 1.0;
    pub const BALL_SPEED: f32 = 1.0;
    /// Vertical speed imparted by an off-center paddle hit
    pub const BALL_DEFLECT_SPEED: f32 = 0.75 * BALL_SPEED;
}
