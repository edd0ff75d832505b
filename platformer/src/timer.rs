/// A countdown scalar in seconds.
///
/// The value keeps counting down past zero: a negative value encodes how long ago
/// the timer expired. It is never clamped, so comparisons such as "expired
/// strictly before this tick" (`remaining() < 0`) stay meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer {
    remaining: f32,
}

impl Timer {
    pub fn new(remaining: f32) -> Self {
        Self { remaining }
    }

    /// Raw remaining time. Positive while valid, zero or negative once expired.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Still valid this tick.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds since the timer expired, or `0.0` while it is still active.
    #[inline]
    pub fn expired_for(&self) -> f32 {
        (-self.remaining).max(0.0)
    }

    #[inline]
    pub fn set(&mut self, value: f32) {
        self.remaining = value;
    }

    /// Consume the timer: exactly zero, i.e. expired at this instant.
    #[inline]
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    #[inline]
    pub fn decay(&mut self, dt: f32) {
        self.remaining -= dt;
    }
}

/// The timers owned by a [`TimerBank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Coyote window since the character last touched the ground.
    Ground,
    WallRight,
    WallLeft,
    /// Buffered jump press.
    JumpBuffer,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Ground,
        TimerKind::WallRight,
        TimerKind::WallLeft,
        TimerKind::JumpBuffer,
    ];
}

/// Fixed set of countdown timers for one character.
///
/// All timers start at zero (expired) and decay together once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimerBank {
    pub ground: Timer,
    pub wall_right: Timer,
    pub wall_left: Timer,
    pub jump_buffer: Timer,
}

impl TimerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subtract `dt` from every timer unconditionally.
    pub fn decay(&mut self, dt: f32) {
        for kind in TimerKind::ALL {
            self.get_mut(kind).decay(dt);
        }
    }

    pub fn get(&self, kind: TimerKind) -> Timer {
        match kind {
            TimerKind::Ground => self.ground,
            TimerKind::WallRight => self.wall_right,
            TimerKind::WallLeft => self.wall_left,
            TimerKind::JumpBuffer => self.jump_buffer,
        }
    }

    pub fn get_mut(&mut self, kind: TimerKind) -> &mut Timer {
        match kind {
            TimerKind::Ground => &mut self.ground,
            TimerKind::WallRight => &mut self.wall_right,
            TimerKind::WallLeft => &mut self.wall_left,
            TimerKind::JumpBuffer => &mut self.jump_buffer,
        }
    }

    pub fn set(&mut self, kind: TimerKind, value: f32) {
        self.get_mut(kind).set(value);
    }

    pub fn remaining(&self, kind: TimerKind) -> f32 {
        self.get(kind).remaining()
    }

    /// Combined wall contact timer: the later of the two wall timers.
    pub fn wall(&self) -> Timer {
        Timer::new(self.wall_right.remaining().max(self.wall_left.remaining()))
    }
}
