use crate::{BASELINE_GRAVITY_MULT, JumpPhase, MovementConfig};

/// Which gravity rule won for a tick, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GravityBranch {
    /// Falling while holding down.
    FastFall,
    /// Jump button released early.
    JumpCut,
    /// Near the apex of a jump.
    JumpHang,
    Fall,
    Baseline,
}

/// Output of [`select_gravity`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravitySelection {
    pub branch: GravityBranch,
    /// Multiplier applied to the configured gravity scale.
    pub multiplier: f32,
    /// Effective gravity scale: `gravity_scale * multiplier`.
    pub gravity_scale: f32,
    /// Vertical velocity after the fall speed cap (unchanged for hang/baseline).
    pub velocity_y: f32,
}

/// Pick this tick's gravity scale and fall speed cap.
///
/// First matching rule wins:
/// 1. moving down and holding down: fast fall, capped at `max_fast_fall_speed`
/// 2. jump cut: capped at `max_fall_speed`
/// 3. any jump phase with `|vy|` under the hang threshold: apex hang, uncapped
/// 4. moving down: fall, capped at `max_fall_speed`
/// 5. baseline scale, uncapped
pub fn select_gravity(
    phase: &JumpPhase,
    velocity_y: f32,
    input_y: f32,
    config: &MovementConfig,
) -> GravitySelection {
    let (branch, multiplier, velocity_y) = if velocity_y < 0.0 && input_y < 0.0 {
        (
            GravityBranch::FastFall,
            config.fast_fall_gravity_mult,
            velocity_y.max(-config.max_fast_fall_speed),
        )
    } else if phase.is_jump_cut() {
        (
            GravityBranch::JumpCut,
            config.jump_cut_gravity_mult,
            velocity_y.max(-config.max_fall_speed),
        )
    } else if phase.is_airborne_jump() && velocity_y.abs() < config.jump_hang_time_threshold {
        (
            GravityBranch::JumpHang,
            config.jump_hang_gravity_mult,
            velocity_y,
        )
    } else if velocity_y < 0.0 {
        (
            GravityBranch::Fall,
            config.fall_gravity_mult,
            velocity_y.max(-config.max_fall_speed),
        )
    } else {
        (GravityBranch::Baseline, BASELINE_GRAVITY_MULT, velocity_y)
    };

    GravitySelection {
        branch,
        multiplier,
        gravity_scale: config.gravity_scale * multiplier,
        velocity_y,
    }
}
