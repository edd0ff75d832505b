//! Deterministic per-tick movement for a 2D platforming character.
//!
//! Coyote time, buffered and wall jumps, jump cut, apex hang and momentum-aware
//! running. The physics body, collision probing, input polling and rendering live
//! outside this crate: [`MovementCore::tick`] takes a snapshot of each and returns
//! the forces, gravity scale and animation flags to apply.

pub mod bitmask_flags;
pub mod config;
pub mod constants;
pub mod gravity;
pub mod impulse;
pub mod input;
pub mod jump;
pub mod movement;
pub mod phase;
pub mod run;
pub mod timer;
pub mod utils;

pub use bitmask_flags::{AnimationFlag, AnimationFlags, BitmaskFlags, FlagBit};
pub use config::{ConfigError, MovementConfig};
pub use constants::{
    BASELINE_GRAVITY_MULT, DEFAULT_RECOIL_SCALE, DEFAULT_RUN_LERP, MIN_IMPULSE_DIRECTION_SQ,
    MIN_TARGET_SPEED,
};
pub use gravity::{GravityBranch, GravitySelection, select_gravity};
pub use impulse::{
    ExternalImpulseHandler, ImpulseError, ImpulseQueue, impulse_channel,
    impulse_channel_with_scale,
};
pub use input::{CollisionProbes, MovementInput};
pub use movement::{Force, ForceMode, MovementCore, MovementState, TickOutput};
pub use phase::{Facing, JumpFlags, JumpPhase, WallJumpDir};
pub use run::{RunParams, run_force};
pub use timer::{Timer, TimerBank, TimerKind};
