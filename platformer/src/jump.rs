//! Jump decisions and jump impulses.
//!
//! Predicates are pure reads of [`MovementState`]. The mutating helpers are only
//! called from [`MovementCore::tick`](crate::MovementCore::tick), in this order:
//! buffer/cut input, [`update_jump_phase`], then [`try_start_jump`].

use nalgebra::Vector2;

use crate::{JumpPhase, MovementConfig, MovementState, WallJumpDir, utils::engine_sign};

pub fn can_jump(state: &MovementState) -> bool {
    state.timers.ground.is_active() && !state.phase.is_jumping()
}

pub fn can_wall_jump(state: &MovementState) -> bool {
    let timers = &state.timers;

    // While already wall jumping, only the opposite wall allows another one.
    let fresh_wall = match state.phase.wall_jump_dir() {
        None => true,
        Some(WallJumpDir::AwayFromLeft) => timers.wall_right.is_active(),
        Some(WallJumpDir::AwayFromRight) => timers.wall_left.is_active(),
    };

    timers.jump_buffer.is_active()
        && timers.wall().is_active()
        && !timers.ground.is_active()
        && fresh_wall
}

pub fn can_jump_cut(state: &MovementState) -> bool {
    state.phase.is_jumping() && state.velocity.y > 0.0
}

pub fn can_wall_jump_cut(state: &MovementState) -> bool {
    state.phase.is_wall_jumping() && state.velocity.y > 0.0
}

/// Jump pressed: buffer it.
pub fn on_jump_input(state: &mut MovementState, config: &MovementConfig) {
    state.timers.jump_buffer.set(config.jump_input_buffer_time);
}

/// Jump released: cut the rise if still going up.
pub fn on_jump_up_input(state: &mut MovementState) {
    if can_jump_cut(state) || can_wall_jump_cut(state) {
        log::debug!("Jump cut at vy={}", state.velocity.y);
        state.phase.cut();
    }
}

/// Leave jump phases whose conditions no longer hold.
///
/// - a ground jump becomes a fall once moving down
/// - a wall jump ends once more than `wall_jump_time` has elapsed since it started
/// - touching ground outside a jump clears cut and fall tuning
pub fn update_jump_phase(state: &mut MovementState, dt: f32, config: &MovementConfig) {
    if state.phase.is_jumping() && state.velocity.y < 0.0 {
        state.phase.start_falling();
    }

    if let JumpPhase::WallJumping { elapsed, .. } = &mut state.phase {
        *elapsed += dt;
        if *elapsed > config.wall_jump_time {
            state.phase.end_wall_jump();
        }
    }

    if state.timers.ground.is_active()
        && !state.phase.is_jumping()
        && !state.phase.is_wall_jumping()
    {
        state.phase = JumpPhase::Idle;
    }
}

/// Fire a buffered ground or wall jump if one is allowed. Ground jumps win.
///
/// Returns the impulse to apply this tick.
pub fn try_start_jump(state: &mut MovementState, config: &MovementConfig) -> Option<Vector2<f32>> {
    if !state.timers.jump_buffer.is_active() {
        return None;
    }

    if can_jump(state) {
        state.phase = JumpPhase::Jumping { cut: false };
        return Some(jump(state, config));
    }

    if can_wall_jump(state) {
        // A right wall wins the tie when both sides are in contact.
        let dir = if state.timers.wall_right.is_active() {
            WallJumpDir::AwayFromRight
        } else {
            WallJumpDir::AwayFromLeft
        };

        state.phase = JumpPhase::WallJumping {
            dir,
            elapsed: 0.0,
            cut: false,
        };
        state.last_wall_jump_dir = Some(dir);
        return Some(wall_jump(state, dir, config));
    }

    None
}

/// Consume the buffered press and coyote window; returns the vertical impulse.
///
/// A falling character gets its downward speed cancelled on top of `jump_force`.
pub fn jump(state: &mut MovementState, config: &MovementConfig) -> Vector2<f32> {
    state.timers.jump_buffer.clear();
    state.timers.ground.clear();

    let mut force = config.jump_force;
    if state.velocity.y < 0.0 {
        force -= state.velocity.y;
    }

    log::debug!("Jump: impulse={force}");
    Vector2::new(0.0, force)
}

/// Consume the buffered press and all contact windows; returns the wall jump impulse.
pub fn wall_jump(
    state: &mut MovementState,
    dir: WallJumpDir,
    config: &MovementConfig,
) -> Vector2<f32> {
    let timers = &mut state.timers;
    timers.jump_buffer.clear();
    timers.ground.clear();
    timers.wall_right.clear();
    timers.wall_left.clear();

    let mut force = config.wall_jump_force();
    force.x *= dir.as_f32();

    // Cancel momentum that points back into the wall.
    if engine_sign(state.velocity.x) != engine_sign(force.x) {
        force.x -= state.velocity.x;
    }

    if state.velocity.y < 0.0 {
        force.y -= state.velocity.y;
    }

    if config.do_turn_on_wall_jump {
        state.facing = state.facing.flipped();
    }

    log::debug!("Wall jump {dir:?}: impulse={force:?}");
    force
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Facing, TimerKind, config::test_config};

    fn state_with(velocity: Vector2<f32>) -> MovementState {
        let mut state = MovementState::new(&test_config());
        state.velocity = velocity;
        state
    }

    #[test]
    fn jump_impulse_cancels_fall_speed() {
        let config = test_config();
        let mut state = state_with(Vector2::new(0.0, -3.0));

        let impulse = jump(&mut state, &config);
        assert_eq!(impulse, Vector2::new(0.0, 13.0));
    }

    #[test]
    fn jump_impulse_ignores_upward_speed() {
        let config = test_config();
        let mut state = state_with(Vector2::new(0.0, 4.0));

        let impulse = jump(&mut state, &config);
        assert_eq!(impulse, Vector2::new(0.0, 10.0));
    }

    #[test]
    fn jump_consumes_buffer_and_coyote_window() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::Ground, 0.08);
        state.timers.set(TimerKind::JumpBuffer, 0.05);

        jump(&mut state, &config);
        assert_eq!(state.timers.remaining(TimerKind::Ground), 0.0);
        assert_eq!(state.timers.remaining(TimerKind::JumpBuffer), 0.0);
    }

    #[test]
    fn cannot_jump_again_while_jumping() {
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::Ground, 0.1);
        assert!(can_jump(&state));

        state.phase = JumpPhase::Jumping { cut: false };
        assert!(!can_jump(&state));
    }

    #[test]
    fn wall_jump_requires_buffer_wall_and_air() {
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::WallLeft, 0.1);
        assert!(!can_wall_jump(&state));

        state.timers.set(TimerKind::JumpBuffer, 0.1);
        assert!(can_wall_jump(&state));

        state.timers.set(TimerKind::Ground, 0.1);
        assert!(!can_wall_jump(&state));
    }

    #[test]
    fn second_wall_jump_needs_the_opposite_wall() {
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::JumpBuffer, 0.1);
        state.phase = JumpPhase::WallJumping {
            dir: WallJumpDir::AwayFromLeft,
            elapsed: 0.0,
            cut: false,
        };

        state.timers.set(TimerKind::WallLeft, 0.1);
        assert!(!can_wall_jump(&state));

        state.timers.set(TimerKind::WallRight, 0.1);
        assert!(can_wall_jump(&state));
    }

    #[test]
    fn right_wall_wins_the_tie() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::JumpBuffer, 0.1);
        state.timers.set(TimerKind::WallRight, 0.07);
        state.timers.set(TimerKind::WallLeft, 0.07);

        let impulse = try_start_jump(&mut state, &config).unwrap();

        assert_eq!(state.phase.wall_jump_dir(), Some(WallJumpDir::AwayFromRight));
        assert_eq!(state.last_wall_jump_dir, Some(WallJumpDir::AwayFromRight));
        assert!(impulse.x < 0.0);
    }

    #[test]
    fn wall_jump_cancels_opposing_momentum_and_fall() {
        let config = test_config();
        // Sliding down a left wall while still pushing into it.
        let mut state = state_with(Vector2::new(-2.0, -4.0));

        let impulse = wall_jump(&mut state, WallJumpDir::AwayFromLeft, &config);

        assert_eq!(impulse, Vector2::new(17.0, 24.0));
    }

    #[test]
    fn wall_jump_keeps_momentum_in_push_direction() {
        let config = test_config();
        let mut state = state_with(Vector2::new(3.0, 2.0));

        let impulse = wall_jump(&mut state, WallJumpDir::AwayFromLeft, &config);
        assert_eq!(impulse, Vector2::new(15.0, 20.0));
    }

    #[test]
    fn wall_jump_zero_velocity_counts_as_positive() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());

        // sign(0) = +1 differs from the -X push, so 0 is subtracted.
        let impulse = wall_jump(&mut state, WallJumpDir::AwayFromRight, &config);
        assert_eq!(impulse, Vector2::new(-15.0, 20.0));
    }

    #[test]
    fn wall_jump_turns_when_configured() {
        let mut config = test_config();
        let mut state = state_with(Vector2::zeros());
        assert_eq!(state.facing, Facing::Right);

        wall_jump(&mut state, WallJumpDir::AwayFromRight, &config);
        assert_eq!(state.facing, Facing::Left);

        config.do_turn_on_wall_jump = false;
        wall_jump(&mut state, WallJumpDir::AwayFromLeft, &config);
        assert_eq!(state.facing, Facing::Left);
    }

    #[test]
    fn wall_jump_consumes_every_contact_timer() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        for kind in TimerKind::ALL {
            state.timers.set(kind, 0.1);
        }

        wall_jump(&mut state, WallJumpDir::AwayFromLeft, &config);

        for kind in TimerKind::ALL {
            assert_eq!(state.timers.remaining(kind), 0.0);
        }
    }

    #[test]
    fn ground_jump_takes_priority_over_wall_jump() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::JumpBuffer, 0.1);
        state.timers.set(TimerKind::Ground, 0.1);
        state.timers.set(TimerKind::WallRight, 0.1);

        try_start_jump(&mut state, &config);
        assert_eq!(state.phase, JumpPhase::Jumping { cut: false });
    }

    #[test]
    fn nothing_fires_without_buffered_press() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        state.timers.set(TimerKind::Ground, 0.1);

        assert!(try_start_jump(&mut state, &config).is_none());
        assert_eq!(state.phase, JumpPhase::Idle);
    }

    #[test]
    fn release_cuts_only_while_rising() {
        let mut state = state_with(Vector2::new(0.0, 5.0));
        state.phase = JumpPhase::Jumping { cut: false };
        on_jump_up_input(&mut state);
        assert_eq!(state.phase, JumpPhase::Jumping { cut: true });

        let mut state = state_with(Vector2::new(0.0, -1.0));
        state.phase = JumpPhase::Jumping { cut: false };
        on_jump_up_input(&mut state);
        assert_eq!(state.phase, JumpPhase::Jumping { cut: false });

        let mut state = state_with(Vector2::new(0.0, 5.0));
        state.phase = JumpPhase::WallJumping {
            dir: WallJumpDir::AwayFromRight,
            elapsed: 0.0,
            cut: false,
        };
        on_jump_up_input(&mut state);
        assert!(state.phase.is_jump_cut());
        assert!(state.phase.is_wall_jumping());
    }

    #[test]
    fn jump_becomes_fall_when_moving_down() {
        let config = test_config();
        let mut state = state_with(Vector2::new(0.0, -0.1));
        state.phase = JumpPhase::Jumping { cut: false };

        update_jump_phase(&mut state, 0.0, &config);
        assert_eq!(state.phase, JumpPhase::FallingNatural);
    }

    #[test]
    fn wall_jump_window_ends_strictly_after_wall_jump_time() {
        let config = test_config();
        let mut state = state_with(Vector2::new(0.0, 3.0));
        state.phase = JumpPhase::WallJumping {
            dir: WallJumpDir::AwayFromRight,
            elapsed: 0.0,
            cut: false,
        };

        update_jump_phase(&mut state, config.wall_jump_time, &config);
        assert!(state.phase.is_wall_jumping());

        update_jump_phase(&mut state, 0.001, &config);
        assert_eq!(state.phase, JumpPhase::Idle);
    }

    #[test]
    fn zero_dt_does_not_advance_wall_jump_window() {
        let config = test_config();
        let mut state = state_with(Vector2::new(0.0, 3.0));
        let phase = JumpPhase::WallJumping {
            dir: WallJumpDir::AwayFromLeft,
            elapsed: 0.1,
            cut: true,
        };
        state.phase = phase;

        update_jump_phase(&mut state, 0.0, &config);
        assert_eq!(state.phase, phase);
    }

    #[test]
    fn landing_clears_cut_and_fall() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());
        state.phase = JumpPhase::FallingCut { from_jump: true };
        state.timers.set(TimerKind::Ground, 0.1);

        update_jump_phase(&mut state, 0.0, &config);
        assert_eq!(state.phase, JumpPhase::Idle);
    }

    #[test]
    fn press_buffers_for_configured_time() {
        let config = test_config();
        let mut state = state_with(Vector2::zeros());

        on_jump_input(&mut state, &config);
        assert_eq!(
            state.timers.remaining(TimerKind::JumpBuffer),
            config.jump_input_buffer_time
        );
    }
}
