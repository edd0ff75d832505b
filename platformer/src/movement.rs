use nalgebra::Vector2;

use crate::{
    AnimationFlag, AnimationFlags, CollisionProbes, ConfigError, DEFAULT_RUN_LERP, Facing,
    GravityBranch, ImpulseQueue, JumpPhase, MovementConfig, MovementInput, RunParams, TimerBank,
    WallJumpDir, jump, run_force, select_gravity,
};

/// Mutable movement state of one character.
///
/// Created on spawn with every timer expired, facing right and no jump phase.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementState {
    /// Body velocity as last seen by the core (after this tick's fall speed cap).
    pub velocity: Vector2<f32>,
    pub facing: Facing,
    pub phase: JumpPhase,
    pub timers: TimerBank,
    /// Direction of the most recent wall jump, kept after the wall jump ends.
    pub last_wall_jump_dir: Option<WallJumpDir>,
    /// Gravity scale selected on the last tick.
    pub gravity_scale: f32,
    /// Simulation clock: sum of every ticked `dt` (seconds). Informational only,
    /// jump windows track their own elapsed time.
    pub clock: f64,
}

impl MovementState {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            velocity: Vector2::zeros(),
            facing: Facing::Right,
            phase: JumpPhase::Idle,
            timers: TimerBank::new(),
            last_wall_jump_dir: None,
            gravity_scale: config.gravity_scale,
            clock: 0.0,
        }
    }

    /// Refresh ground and wall timers from this tick's collision snapshot.
    ///
    /// Ground is ignored while rising from a jump; walls are ignored during a wall
    /// jump. Wall probes are mapped to world sides through the current facing.
    fn refresh_contacts(&mut self, probes: &CollisionProbes, config: &MovementConfig) {
        if !self.phase.is_jumping() && probes.grounded() {
            self.timers.ground.set(config.coyote_time);
        }

        if self.phase.is_wall_jumping() {
            return;
        }

        let facing_right = self.facing.is_right();
        let (front, back) = (probes.wall_front(), probes.wall_back());

        if (front && facing_right) || (back && !facing_right) {
            self.timers.wall_right.set(config.coyote_time);
        }
        if (front && !facing_right) || (back && facing_right) {
            self.timers.wall_left.set(config.coyote_time);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceMode {
    /// Applied over the physics step (scaled by dt by the physics collaborator).
    Continuous,
    /// Instantaneous change of momentum.
    Impulse,
}

/// A force the physics collaborator must apply to the body this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Force {
    pub mode: ForceMode,
    pub vector: Vector2<f32>,
}

impl Force {
    pub fn continuous(vector: Vector2<f32>) -> Self {
        Self {
            mode: ForceMode::Continuous,
            vector,
        }
    }

    pub fn impulse(vector: Vector2<f32>) -> Self {
        Self {
            mode: ForceMode::Impulse,
            vector,
        }
    }
}

/// Output of a single [`MovementCore::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    /// Run force first, then a jump impulse (if any), then external impulses in arrival order.
    pub forces: Vec<Force>,
    /// Velocity after the fall speed cap. Write it back to the body.
    pub velocity: Vector2<f32>,
    /// Effective gravity scale for the body.
    pub gravity_scale: f32,
    pub gravity_branch: GravityBranch,
    pub facing: Facing,
    pub flags: AnimationFlags,
}

impl TickOutput {
    #[inline]
    pub fn is_walking(&self) -> bool {
        self.flags.contains(AnimationFlag::Walking)
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.flags.contains(AnimationFlag::Grounded)
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.flags.contains(AnimationFlag::Falling)
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.flags.contains(AnimationFlag::Jumping)
    }

    /// Sum of the impulses in [`Self::forces`].
    pub fn total_impulse(&self) -> Vector2<f32> {
        self.forces
            .iter()
            .filter(|f| f.mode == ForceMode::Impulse)
            .fold(Vector2::zeros(), |acc, f| acc + f.vector)
    }

    /// Sum of the continuous forces in [`Self::forces`].
    pub fn total_continuous(&self) -> Vector2<f32> {
        self.forces
            .iter()
            .filter(|f| f.mode == ForceMode::Continuous)
            .fold(Vector2::zeros(), |acc, f| acc + f.vector)
    }
}

/// Deterministic per-tick movement for one character.
///
/// Owns the [`MovementState`], the validated [`MovementConfig`] and the receiving end
/// of the character's external impulse queue.
#[derive(Debug)]
pub struct MovementCore {
    config: MovementConfig,
    state: MovementState,
    impulses: ImpulseQueue,
}

impl MovementCore {
    /// Validate `config` and spawn a fresh movement state.
    pub fn new(config: MovementConfig, impulses: ImpulseQueue) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = MovementState::new(&config);

        Ok(Self {
            config,
            state,
            impulses,
        })
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Advance the character by `dt` seconds.
    ///
    /// Phase 1 (state): timers, facing, jump input, contacts, jump phase exits,
    /// jump decision, gravity.
    /// Phase 2 (forces): run force, this tick's jump impulse, queued external impulses.
    ///
    /// `velocity` is the body's current velocity from the physics collaborator.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &MovementInput,
        probes: &CollisionProbes,
        velocity: Vector2<f32>,
    ) -> TickOutput {
        let dt = sanitize_dt(dt);
        let config = &self.config;
        let state = &mut self.state;

        // --- Phase 1 ---
        state.clock += f64::from(dt);
        state.velocity = velocity;
        state.timers.decay(dt);

        if input.move_x != 0.0 {
            state.facing = Facing::from_input(input.move_x);
        }

        if input.jump_pressed {
            jump::on_jump_input(state, config);
        }
        if input.jump_released {
            jump::on_jump_up_input(state);
        }

        if probes.is_partial() {
            log::trace!("Partial collision probes {probes:?}, missing probes read as false");
        }
        state.refresh_contacts(probes, config);

        jump::update_jump_phase(state, dt, config);
        let jump_impulse = jump::try_start_jump(state, config);

        let gravity = select_gravity(&state.phase, state.velocity.y, input.move_y, config);
        log::trace!("Gravity {:?} scale={}", gravity.branch, gravity.gravity_scale);
        state.velocity.y = gravity.velocity_y;
        state.gravity_scale = gravity.gravity_scale;

        // --- Phase 2 ---
        let lerp_amount = if state.phase.is_wall_jumping() {
            config.wall_jump_run_lerp
        } else {
            DEFAULT_RUN_LERP
        };
        let run = run_force(
            RunParams {
                velocity_x: state.velocity.x,
                velocity_y: state.velocity.y,
                input_x: input.move_x,
                lerp_amount,
            },
            &state.phase,
            &state.timers,
            config,
        );

        let mut forces = vec![Force::continuous(Vector2::new(run, 0.0))];
        forces.extend(jump_impulse.map(Force::impulse));
        forces.extend(self.impulses.drain().map(Force::impulse));

        TickOutput {
            forces,
            velocity: state.velocity,
            gravity_scale: state.gravity_scale,
            gravity_branch: gravity.branch,
            facing: state.facing,
            flags: animation_flags(state, input),
        }
    }
}

fn animation_flags(state: &MovementState, input: &MovementInput) -> AnimationFlags {
    let grounded = state.timers.ground.is_active();

    let mut flags = AnimationFlags::default();
    flags.set(AnimationFlag::Walking, input.move_x != 0.0);
    flags.set(AnimationFlag::Grounded, grounded);
    flags.set(AnimationFlag::Falling, state.velocity.y < 0.0 && !grounded);
    flags.set(AnimationFlag::Jumping, state.phase.is_jumping());
    flags
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Invalid tick dt {dt}, using 0");
        0.0
    }
}
