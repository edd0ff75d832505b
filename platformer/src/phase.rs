//! Jump phase of a character and the facing direction.
//!
//! The four classic flags (`is_jumping`, `is_wall_jumping`, `is_jump_cut`,
//! `is_jump_falling`) are derived from a single [`JumpPhase`] value, so a
//! character can never be jumping and wall jumping at the same time.

/// Horizontal facing of the character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing implied by a non-zero horizontal input.
    #[inline]
    pub fn from_input(move_x: f32) -> Self {
        if move_x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// Horizontal push direction of a wall jump.
///
/// `AwayFromRight` pushes toward -X (jumping off a wall on the right),
/// `AwayFromLeft` pushes toward +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallJumpDir {
    AwayFromRight,
    AwayFromLeft,
}

impl WallJumpDir {
    /// Signed direction: `-1` or `1`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            WallJumpDir::AwayFromRight => -1,
            WallJumpDir::AwayFromLeft => 1,
        }
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.sign() as f32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum JumpPhase {
    /// No jump-related airborne flags. Standing, walking, walking off a ledge,
    /// or drifting after an uncut wall jump ran out.
    #[default]
    Idle,
    /// Rising from a ground jump.
    Jumping { cut: bool },
    /// Inside the wall jump window; `elapsed` is the time since the jump (seconds).
    WallJumping {
        dir: WallJumpDir,
        elapsed: f32,
        cut: bool,
    },
    /// Falling after a full (uncut) ground jump.
    FallingNatural,
    /// Still under jump-cut gravity after the rise ended.
    ///
    /// `from_jump` is true when the cut jump was a ground jump (which also counts
    /// as jump falling), false when a cut wall jump ran out.
    FallingCut { from_jump: bool },
}

impl JumpPhase {
    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self, JumpPhase::Jumping { .. })
    }

    #[inline]
    pub fn is_wall_jumping(&self) -> bool {
        matches!(self, JumpPhase::WallJumping { .. })
    }

    #[inline]
    pub fn is_jump_cut(&self) -> bool {
        match self {
            JumpPhase::Jumping { cut } | JumpPhase::WallJumping { cut, .. } => *cut,
            JumpPhase::FallingCut { .. } => true,
            JumpPhase::Idle | JumpPhase::FallingNatural => false,
        }
    }

    #[inline]
    pub fn is_jump_falling(&self) -> bool {
        matches!(
            self,
            JumpPhase::FallingNatural | JumpPhase::FallingCut { from_jump: true }
        )
    }

    /// Any of jumping, wall jumping or jump falling. Enables apex hang tuning.
    #[inline]
    pub fn is_airborne_jump(&self) -> bool {
        self.is_jumping() || self.is_wall_jumping() || self.is_jump_falling()
    }

    #[inline]
    pub fn wall_jump_dir(&self) -> Option<WallJumpDir> {
        match self {
            JumpPhase::WallJumping { dir, .. } => Some(*dir),
            _ => None,
        }
    }

    pub fn flags(&self) -> JumpFlags {
        JumpFlags {
            is_jumping: self.is_jumping(),
            is_wall_jumping: self.is_wall_jumping(),
            is_jump_cut: self.is_jump_cut(),
            is_jump_falling: self.is_jump_falling(),
        }
    }

    /// Build a phase from loose flags.
    ///
    /// Entry point for importing flag state kept outside the core (a save file, a
    /// replicated snapshot, an editor override). Assign the result to
    /// [`MovementState::phase`](crate::MovementState::phase).
    ///
    /// `wall_jump` supplies the direction and elapsed window time when `is_wall_jumping`
    /// is set. If both `is_jumping` and `is_wall_jumping` are set the state is
    /// inconsistent: both are dropped and the cut/falling flags alone decide the
    /// phase. A wall jump flag without `wall_jump` details is dropped the same way.
    pub fn from_flags(flags: JumpFlags, wall_jump: Option<(WallJumpDir, f32)>) -> Self {
        let JumpFlags {
            mut is_jumping,
            mut is_wall_jumping,
            is_jump_cut,
            is_jump_falling,
        } = flags;

        if is_jumping && is_wall_jumping {
            log::warn!("Jumping and wall jumping were both set, resetting both");
            is_jumping = false;
            is_wall_jumping = false;
        }

        if is_jumping {
            return JumpPhase::Jumping { cut: is_jump_cut };
        }

        if is_wall_jumping {
            match wall_jump {
                Some((dir, elapsed)) => {
                    return JumpPhase::WallJumping {
                        dir,
                        elapsed,
                        cut: is_jump_cut,
                    };
                }
                None => log::warn!("Wall jumping was set without a direction, dropping it"),
            }
        }

        match (is_jump_cut, is_jump_falling) {
            (true, from_jump) => JumpPhase::FallingCut { from_jump },
            (false, true) => JumpPhase::FallingNatural,
            (false, false) => JumpPhase::Idle,
        }
    }

    /// The rise is over: the character started moving down.
    pub(crate) fn start_falling(&mut self) {
        if let JumpPhase::Jumping { cut } = *self {
            *self = if cut {
                JumpPhase::FallingCut { from_jump: true }
            } else {
                JumpPhase::FallingNatural
            };
        }
    }

    /// The wall jump window is over. A cut carries over, jump falling does not.
    pub(crate) fn end_wall_jump(&mut self) {
        if let JumpPhase::WallJumping { cut, .. } = *self {
            *self = if cut {
                JumpPhase::FallingCut { from_jump: false }
            } else {
                JumpPhase::Idle
            };
        }
    }

    /// Mark the current rise as cut. Only jumping and wall jumping can be cut.
    pub(crate) fn cut(&mut self) {
        match self {
            JumpPhase::Jumping { cut } | JumpPhase::WallJumping { cut, .. } => *cut = true,
            _ => {}
        }
    }
}

/// The loose boolean view of a [`JumpPhase`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpFlags {
    pub is_jumping: bool,
    pub is_wall_jumping: bool,
    pub is_jump_cut: bool,
    pub is_jump_falling: bool,
}
