//! Slingshot - a drag-and-release projectile arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile, blocks, scoring, level flow)
//! - `tuning`: Data-driven physics constants and playfield geometry
//!
//! Rendering, windowing and input devices live outside this crate. A driver
//! feeds drag events into [`sim::Session`], calls [`sim::tick`] once per frame
//! and draws a [`sim::RenderSnapshot`].

pub mod sim;
pub mod tuning;

pub use tuning::{Playfield, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference tick rate of the driver loop
    pub const TICK_RATE: u32 = 60;
    /// Duration of one tick in seconds (physics itself is per-tick, not per-second)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Playfield dimensions (screen pixels, y grows downward)
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 600;
    pub const GROUND_THICKNESS: i32 = 50;

    /// Projectile defaults
    pub const PROJECTILE_START_X: f32 = 150.0;
    pub const PROJECTILE_START_Y: f32 = (SCREEN_HEIGHT - 100) as f32;
    pub const PROJECTILE_RADIUS: f32 = 15.0;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 0.5;
    /// Vertical speed kept (and reversed) on a ground bounce
    pub const RESTITUTION: f32 = 0.7;
    /// Horizontal speed kept on a ground bounce
    pub const HORIZONTAL_DAMPING: f32 = 0.8;
    /// Horizontal speed lost per tick while rolling
    pub const FRICTION_STEP: f32 = 0.2;
    /// Vertical speed under which a body counts as resting on the ground
    pub const REST_SPEED: f32 = 1.0;
    /// Horizontal speed kept by a block touching another block
    pub const STACK_DAMPING: f32 = 0.5;

    /// Share of projectile velocity handed to a block on first contact
    pub const IMPULSE_FRACTION: f32 = 0.2;
    /// Drag distance to launch power
    pub const POWER_SCALE: f32 = 0.2;
    /// Points per target knocked
    pub const SCORE_INCREMENT: u32 = 10;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
