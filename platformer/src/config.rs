/*!
Movement tuning for one character.

The config is a flat record loaded once (normally from JSON) and shared read-only
by every tick. Every field is required: a missing key fails the load instead of
silently defaulting, and numeric fields are validated before a
[`MovementCore`](crate::MovementCore) can be built from them.

Notes
- Distances are in world units, time in seconds.
- `*_mult` fields scale either the base gravity scale or the run acceleration.
- JSON keys are the camelCase field names (`gravityScale`, `wallJumpForceX`, ...).
*/

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`MovementConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config field `{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("config field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovementConfig {
    // --- Gravity ---
    /// Base gravity scale handed to the physics body.
    pub gravity_scale: f32,
    /// Multiplier while falling.
    pub fall_gravity_mult: f32,
    /// Multiplier while falling and holding down.
    pub fast_fall_gravity_mult: f32,
    /// Multiplier after the jump button was released early.
    pub jump_cut_gravity_mult: f32,
    /// Multiplier near the apex of a jump.
    pub jump_hang_gravity_mult: f32,
    /// Vertical speed below which the character counts as being at the apex.
    pub jump_hang_time_threshold: f32,
    pub jump_hang_acceleration_mult: f32,
    pub jump_hang_max_speed_mult: f32,
    pub max_fall_speed: f32,
    pub max_fast_fall_speed: f32,

    // --- Assists ---
    /// Grace period after leaving the ground (or a wall) where a jump is still allowed.
    pub coyote_time: f32,
    /// How long a jump press stays buffered waiting for a valid jump.
    pub jump_input_buffer_time: f32,

    // --- Jump ---
    pub jump_force: f32,
    pub wall_jump_force_x: f32,
    pub wall_jump_force_y: f32,
    /// Duration of the wall jump state (seconds).
    pub wall_jump_time: f32,
    /// Run target smoothing while wall jumping (0 = keep velocity, 1 = full control).
    pub wall_jump_run_lerp: f32,
    pub do_turn_on_wall_jump: bool,

    // --- Run ---
    pub run_max_speed: f32,
    pub run_accel_amount: f32,
    pub run_deccel_amount: f32,
    pub run_decceleration: f32,
    pub accel_in_air: f32,
    pub deccel_in_air: f32,
    pub do_conserve_momentum: bool,
}

impl MovementConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MovementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field is finite and non-negative.
    ///
    /// This covers every numeric field, not only multipliers, times and max speeds:
    /// `gravityScale` and `wallJumpForceX`/`wallJumpForceY` are rejected when negative
    /// too. Wall jump direction comes from [`WallJumpDir`](crate::WallJumpDir), never
    /// from the sign of the force.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn wall_jump_force(&self) -> Vector2<f32> {
        Vector2::new(self.wall_jump_force_x, self.wall_jump_force_y)
    }

    fn numeric_fields(&self) -> [(&'static str, f32); 23] {
        [
            ("gravityScale", self.gravity_scale),
            ("fallGravityMult", self.fall_gravity_mult),
            ("fastFallGravityMult", self.fast_fall_gravity_mult),
            ("jumpCutGravityMult", self.jump_cut_gravity_mult),
            ("jumpHangGravityMult", self.jump_hang_gravity_mult),
            ("jumpHangTimeThreshold", self.jump_hang_time_threshold),
            ("jumpHangAccelerationMult", self.jump_hang_acceleration_mult),
            ("jumpHangMaxSpeedMult", self.jump_hang_max_speed_mult),
            ("maxFallSpeed", self.max_fall_speed),
            ("maxFastFallSpeed", self.max_fast_fall_speed),
            ("coyoteTime", self.coyote_time),
            ("jumpInputBufferTime", self.jump_input_buffer_time),
            ("jumpForce", self.jump_force),
            ("wallJumpForceX", self.wall_jump_force_x),
            ("wallJumpForceY", self.wall_jump_force_y),
            ("wallJumpTime", self.wall_jump_time),
            ("wallJumpRunLerp", self.wall_jump_run_lerp),
            ("runMaxSpeed", self.run_max_speed),
            ("runAccelAmount", self.run_accel_amount),
            ("runDeccelAmount", self.run_deccel_amount),
            ("runDecceleration", self.run_decceleration),
            ("accelInAir", self.accel_in_air),
            ("deccelInAir", self.deccel_in_air),
        ]
    }
}

/// Tuning used across the crate's unit tests.
#[cfg(test)]
pub(crate) fn test_config() -> MovementConfig {
    MovementConfig {
        gravity_scale: 3.0,
        fall_gravity_mult: 1.5,
        fast_fall_gravity_mult: 2.0,
        jump_cut_gravity_mult: 2.5,
        jump_hang_gravity_mult: 0.5,
        jump_hang_time_threshold: 1.0,
        jump_hang_acceleration_mult: 1.1,
        jump_hang_max_speed_mult: 1.3,
        max_fall_speed: 25.0,
        max_fast_fall_speed: 30.0,
        coyote_time: 0.1,
        jump_input_buffer_time: 0.1,
        jump_force: 10.0,
        wall_jump_force_x: 15.0,
        wall_jump_force_y: 20.0,
        wall_jump_time: 0.15,
        wall_jump_run_lerp: 0.5,
        do_turn_on_wall_jump: true,
        run_max_speed: 8.0,
        run_accel_amount: 9.0,
        run_deccel_amount: 7.0,
        run_decceleration: 5.0,
        accel_in_air: 0.65,
        deccel_in_air: 0.4,
        do_conserve_momentum: true,
    }
}
