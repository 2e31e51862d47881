//! Movement domain: countdown timers owned by a motion controller.

/// Remaining time below this snaps to zero so window boundaries land on whole
/// ticks instead of drifting with float error.
const TIMER_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionTimer {
    Coyote,
    JumpBuffer,
    WallJumpLock,
    DashCooldown,
    DashDuration,
    /// Damage immunity after a hit
    Invulnerability,
}

impl MotionTimer {
    pub const ALL: [MotionTimer; 6] = [
        MotionTimer::Coyote,
        MotionTimer::JumpBuffer,
        MotionTimer::WallJumpLock,
        MotionTimer::DashCooldown,
        MotionTimer::DashDuration,
        MotionTimer::Invulnerability,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Timers that ran out during a single [`TimerBank::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiredTimers(u8);

impl ExpiredTimers {
    pub fn contains(self, timer: MotionTimer) -> bool {
        self.0 & (1 << timer.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn insert(&mut self, timer: MotionTimer) {
        self.0 |= 1 << timer.index();
    }
}

/// Seconds remaining on every motion timer. Values never go below zero, so
/// `remaining(t) > 0` reads as "window open".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerBank {
    counters: [f32; 6],
}

impl TimerBank {
    /// Decrement every running timer by `dt` and report which reached zero.
    pub fn tick(&mut self, dt: f32) -> ExpiredTimers {
        let mut expired = ExpiredTimers::default();
        if dt.is_nan() || dt <= 0.0 {
            return expired;
        }

        for timer in MotionTimer::ALL {
            let counter = &mut self.counters[timer.index()];
            if *counter <= 0.0 {
                continue;
            }
            let next = *counter - dt;
            if next <= TIMER_EPSILON {
                *counter = 0.0;
                expired.insert(timer);
            } else {
                *counter = next;
            }
        }

        expired
    }

    /// Arm a timer. Negative values clamp to zero.
    pub fn set(&mut self, timer: MotionTimer, seconds: f32) {
        self.counters[timer.index()] = seconds.max(0.0);
    }

    /// Consume a timer without firing expiry.
    pub fn reset(&mut self, timer: MotionTimer) {
        self.counters[timer.index()] = 0.0;
    }

    pub fn remaining(&self, timer: MotionTimer) -> f32 {
        self.counters[timer.index()]
    }

    pub fn is_running(&self, timer: MotionTimer) -> bool {
        self.remaining(timer) > 0.0
    }
}
