/// Speeds at or below this magnitude (units/second) count as "no target speed".
///
/// Used by the horizontal motor to choose between accelerating and decelerating,
/// and to skip momentum conservation when the player is not steering.
pub const MIN_TARGET_SPEED: f32 = 0.01;

/// Default recoil magnitude applied per external impulse (impulse units).
pub const DEFAULT_RECOIL_SCALE: f32 = 30.0;

/// Squared length below which an external impulse direction is treated as zero.
pub const MIN_IMPULSE_DIRECTION_SQ: f32 = 1.0e-12;

/// Lerp factor used for the run target speed outside of a wall jump (no smoothing).
pub const DEFAULT_RUN_LERP: f32 = 1.0;

/// Gravity multiplier for the baseline branch (no jump/fall tuning active).
pub const BASELINE_GRAVITY_MULT: f32 = 1.0;
