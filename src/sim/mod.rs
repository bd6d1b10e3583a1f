//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - `dt` is injected by the driver, never measured here
//! - No rendering or platform dependencies
//! - Collision sources are evaluated in a fixed order (paddle one, paddle
//!   two, walls) and only the first hit is resolved each tick

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    PaddleContact, PaddleRegion, WallContact, WallSide, ball_paddle_collision, ball_wall_collision,
};
pub use state::{Ball, FrameSnapshot, GameState, Paddle, Player, Rect, Score};
pub use tick::{GameEvent, TickInput, tick};
