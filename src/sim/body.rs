//! The launched projectile
//!
//! A circle that falls under gravity, bounces off the ground with energy loss
//! and rolls to a stop. Everything is per-tick: velocity is in units/tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Bounds;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Rest position restored by [`Projectile::reset`]
    pub start: Vec2,
    pub launched: bool,
}

impl Projectile {
    pub fn new(start: Vec2, radius: f32) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            radius,
            start,
            launched: false,
        }
    }

    /// Fire with `power` units/tick in direction `angle` (radians, y down).
    ///
    /// Calling this again while in flight overwrites the velocity; limiting
    /// the player to one throw is the session's job.
    pub fn launch(&mut self, power: f32, angle: f32) {
        self.vel = polar_to_cartesian(power, angle);
        self.launched = true;
    }

    /// Advance one tick: gravity, move, ground bounce, rolling friction.
    pub fn step(&mut self, tuning: &Tuning, ground: f32) {
        if self.launched {
            self.vel.y += tuning.gravity;
            self.pos += self.vel;
        }

        // Runs before launch too, but the start point sits above the ground
        if self.pos.y + self.radius > ground {
            self.pos.y = ground - self.radius;
            self.vel.y *= -tuning.restitution;
            self.vel.x *= tuning.horizontal_damping;
        }

        if self.vel.y.abs() < tuning.rest_speed && self.pos.y + self.radius >= ground {
            self.vel.y = 0.0;
            self.vel.x = apply_friction(self.vel.x, tuning.friction_step);
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel = Vec2::ZERO;
        self.launched = false;
    }

    /// Bounding square used for block hit tests
    pub fn bounds(&self) -> Bounds {
        Bounds::around_circle(self.pos, self.radius)
    }

    /// Touching the ground with no vertical motion
    pub fn is_rolling(&self, ground: f32) -> bool {
        self.vel.y == 0.0 && self.pos.y + self.radius >= ground
    }

    /// Launched and fully stopped on the ground
    pub fn is_at_rest(&self, ground: f32) -> bool {
        self.launched && self.is_rolling(ground) && self.vel.x == 0.0
    }
}

/// Move `vx` toward zero by `step` without crossing zero
#[inline]
fn apply_friction(vx: f32, step: f32) -> f32 {
    if vx > 0.0 {
        (vx - step).max(0.0)
    } else if vx < 0.0 {
        (vx + step).min(0.0)
    } else {
        vx
    }
}
