//! Physics tuning and playfield geometry
//!
//! Everything the simulation reads as a "constant" lives here so a driver can
//! override it from JSON. Defaults come from [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical bounce factor (velocity is negated and scaled)
    pub restitution: f32,
    /// Horizontal speed kept on a ground bounce
    pub horizontal_damping: f32,
    /// Rolling friction, subtracted from |vx| each tick on the ground
    pub friction_step: f32,
    /// |vy| below this counts as resting
    pub rest_speed: f32,
    /// Horizontal speed kept by a block overlapping another block
    pub stack_damping: f32,
    /// Share of projectile velocity transferred to a block on first hit
    pub impulse_fraction: f32,
    /// Drag length to launch power
    pub power_scale: f32,
    /// Points awarded per target
    pub score_increment: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            horizontal_damping: HORIZONTAL_DAMPING,
            friction_step: FRICTION_STEP,
            rest_speed: REST_SPEED,
            stack_damping: STACK_DAMPING,
            impulse_fraction: IMPULSE_FRACTION,
            power_scale: POWER_SCALE,
            score_increment: SCORE_INCREMENT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                Some(tuning)
            }
            Err(e) => {
                log::warn!("Rejected tuning JSON: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Screen and ground geometry plus the projectile's rest position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub ground_thickness: i32,
    /// Where the projectile sits before launch
    pub start: Vec2,
    pub projectile_radius: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ground_thickness: GROUND_THICKNESS,
            start: Vec2::new(PROJECTILE_START_X, PROJECTILE_START_Y),
            projectile_radius: PROJECTILE_RADIUS,
        }
    }
}

impl Playfield {
    /// The floor's y coordinate (blocks come to rest with their bottom here)
    #[inline]
    pub fn ground_line(&self) -> i32 {
        self.height - self.ground_thickness
    }

    #[inline]
    pub fn ground_line_f32(&self) -> f32 {
        self.ground_line() as f32
    }

    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(field) => Some(field),
            Err(e) => {
                log::warn!("Rejected playfield JSON: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ground_line() {
        let field = Playfield::default();
        assert_eq!(field.ground_line(), 550);
        assert_eq!(field.start, Vec2::new(150.0, 500.0));
    }

    #[test]
    fn test_partial_tuning_override() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.0, "score_increment": 25 }"#)
            .expect("valid json");
        assert_eq!(tuning.gravity, 1.0);
        assert_eq!(tuning.score_increment, 25);
        assert_eq!(tuning.restitution, RESTITUTION);
        assert_eq!(tuning.power_scale, POWER_SCALE);
    }

    #[test]
    fn test_bad_tuning_rejected() {
        assert!(Tuning::from_json("{ gravity: }").is_none());
        assert!(Tuning::from_json(r#"{ "gravity": "heavy" }"#).is_none());
    }

    #[test]
    fn test_tuning_json_round_trip() {
        let tuning = Tuning::default();
        assert_eq!(Tuning::from_json(&tuning.to_json()), Some(tuning));
    }

    #[test]
    fn test_playfield_override() {
        let field = Playfield::from_json(r#"{ "height": 800 }"#).expect("valid json");
        assert_eq!(field.ground_line(), 750);
        assert_eq!(field.width, SCREEN_WIDTH);
    }
}
