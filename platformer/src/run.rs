use crate::{
    JumpPhase, MIN_TARGET_SPEED, MovementConfig, TimerBank,
    utils::{engine_sign, lerp},
};

/// Inputs to one horizontal motor evaluation.
#[derive(Clone, Copy, Debug)]
pub struct RunParams {
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Horizontal stick input in `[-1, 1]`.
    pub input_x: f32,
    /// Blend between current speed (0) and full target speed (1).
    pub lerp_amount: f32,
}

/// Continuous horizontal force that steers `velocity_x` toward the run target.
///
/// - Grounded uses the run accel/decel amounts directly; airborne scales them by
///   the air multipliers. Airborne acceleration is built from `run_deccel_amount`.
/// - Near a jump apex both the rate and the target speed get the hang multipliers.
/// - With momentum conservation on, an airborne character already moving faster
///   than the target in the same direction is not slowed down.
pub fn run_force(
    params: RunParams,
    phase: &JumpPhase,
    timers: &TimerBank,
    config: &MovementConfig,
) -> f32 {
    let RunParams {
        velocity_x,
        velocity_y,
        input_x,
        lerp_amount,
    } = params;

    let mut target_speed = lerp(velocity_x, input_x * config.run_max_speed, lerp_amount);
    let accelerating = target_speed.abs() > MIN_TARGET_SPEED;

    let mut accel_rate = if timers.ground.is_active() {
        if accelerating {
            config.run_accel_amount
        } else {
            config.run_decceleration
        }
    } else if accelerating {
        config.run_deccel_amount * config.accel_in_air
    } else {
        config.run_decceleration * config.deccel_in_air
    };

    if phase.is_airborne_jump() && velocity_y.abs() < config.jump_hang_time_threshold {
        accel_rate *= config.jump_hang_acceleration_mult;
        target_speed *= config.jump_hang_max_speed_mult;
    }

    // Ground timer must be strictly negative: the tick it hits exactly zero still decelerates.
    if config.do_conserve_momentum
        && velocity_x.abs() > target_speed.abs()
        && engine_sign(velocity_x) == engine_sign(target_speed)
        && target_speed.abs() > MIN_TARGET_SPEED
        && timers.ground.remaining() < 0.0
    {
        accel_rate = 0.0;
    }

    (target_speed - velocity_x) * accel_rate
}
