//! Per-task countdown state machine
//!
//! A `Countdown` is pure state: ticks arrive from the owning view (fed by a
//! [`TickHandle`](super::TickHandle)), key presses arrive from the user,
//! and every mutation happens synchronously on the caller's thread. That
//! keeps the whole machine unit-testable without a runtime.

/// Lifecycle phase, derived from the stored fields rather than kept as a
/// separate discriminant that could drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started; the minutes entry is still editable.
    Idle,
    /// Counting down, one armed tick source.
    Running,
    /// Started but not counting; no tick source armed.
    Paused,
    /// Reached zero. Terminal: only deleting the task clears it.
    Expired,
}

/// Outcome of applying one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second consumed, still counting.
    Advanced,
    /// The countdown just reached zero (or was found already at zero while
    /// running). The caller must disarm the tick source.
    Expired,
    /// The timer was not running; nothing changed. Covers callbacks that
    /// were already in flight when their source was cancelled.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining_seconds: u32,
    active_elapsed_seconds: u32,
    configured_minutes: u32,
    is_running: bool,
    has_started: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configured duration. Ignored once started; the entry field
    /// is only live pre-start.
    pub fn set_minutes(&mut self, minutes: u32) {
        if !self.has_started {
            self.configured_minutes = minutes;
        }
    }

    /// Starts the countdown. Silently ignored (returns false) when the
    /// configured duration is zero or the countdown already started; there
    /// is no error to surface.
    pub fn start(&mut self) -> bool {
        if self.has_started || self.configured_minutes == 0 {
            return false;
        }
        self.remaining_seconds = self.configured_minutes * 60;
        self.active_elapsed_seconds = 0;
        self.has_started = true;
        self.is_running = true;
        true
    }

    /// Applies one tick. The only mutation source for `remaining_seconds`
    /// and `active_elapsed_seconds` after start.
    pub fn tick(&mut self) -> Tick {
        if !self.is_running {
            return Tick::Stale;
        }
        if self.remaining_seconds == 0 {
            // A tick source that outlived expiry. Force the transition
            // without accruing elapsed time.
            self.is_running = false;
            return Tick::Expired;
        }
        self.remaining_seconds -= 1;
        self.active_elapsed_seconds += 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            Tick::Expired
        } else {
            Tick::Advanced
        }
    }

    /// Flips pause/resume. Only meaningful while started with time left;
    /// returns whether anything changed.
    pub fn toggle(&mut self) -> bool {
        if self.has_started && self.remaining_seconds > 0 {
            self.is_running = !self.is_running;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.has_started {
            Phase::Idle
        } else if self.remaining_seconds == 0 {
            Phase::Expired
        } else if self.is_running {
            Phase::Running
        } else {
            Phase::Paused
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Seconds accrued while running; paused intervals contribute nothing.
    pub fn active_elapsed_seconds(&self) -> u32 {
        self.active_elapsed_seconds
    }

    pub fn configured_minutes(&self) -> u32 {
        self.configured_minutes
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(minutes: u32) -> Countdown {
        let mut c = Countdown::new();
        c.set_minutes(minutes);
        assert!(c.start());
        c
    }

    #[test]
    fn test_initial_state_is_idle() {
        let c = Countdown::new();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.remaining_seconds(), 0);
        assert_eq!(c.active_elapsed_seconds(), 0);
        assert!(!c.has_started());
        assert!(!c.is_running());
    }

    #[test]
    fn test_start_sets_full_duration() {
        let c = started(5);
        assert_eq!(c.remaining_seconds(), 300);
        assert_eq!(c.active_elapsed_seconds(), 0);
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_start_with_zero_minutes_is_ignored() {
        let mut c = Countdown::new();
        c.set_minutes(0);
        assert!(!c.start());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.has_started());
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let mut c = started(2);
        c.tick();
        assert!(!c.start());
        assert_eq!(c.remaining_seconds(), 119);
    }

    #[test]
    fn test_set_minutes_after_start_is_ignored() {
        let mut c = started(1);
        c.set_minutes(10);
        assert_eq!(c.configured_minutes(), 1);
    }

    #[test]
    fn test_tick_decrements_and_accrues() {
        let mut c = started(1);
        assert_eq!(c.tick(), Tick::Advanced);
        assert_eq!(c.remaining_seconds(), 59);
        assert_eq!(c.active_elapsed_seconds(), 1);
    }

    #[test]
    fn test_tick_while_paused_is_stale() {
        let mut c = started(1);
        c.tick();
        assert!(c.toggle());
        assert_eq!(c.tick(), Tick::Stale);
        assert_eq!(c.remaining_seconds(), 59);
        assert_eq!(c.active_elapsed_seconds(), 1);
    }

    #[test]
    fn test_tick_before_start_is_stale() {
        let mut c = Countdown::new();
        assert_eq!(c.tick(), Tick::Stale);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_toggle_flips_running() {
        let mut c = started(1);
        assert!(c.toggle());
        assert_eq!(c.phase(), Phase::Paused);
        assert!(c.toggle());
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_toggle_before_start_is_noop() {
        let mut c = Countdown::new();
        assert!(!c.toggle());
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_monotonicity_over_ticks() {
        let mut c = started(2);
        let mut last_remaining = c.remaining_seconds();
        let mut last_elapsed = c.active_elapsed_seconds();
        for _ in 0..120 {
            c.tick();
            assert!(c.remaining_seconds() <= last_remaining);
            assert!(c.active_elapsed_seconds() >= last_elapsed);
            last_remaining = c.remaining_seconds();
            last_elapsed = c.active_elapsed_seconds();
        }
    }

    #[test]
    fn test_expiry_after_full_run() {
        let mut c = started(1);
        for _ in 0..59 {
            assert_eq!(c.tick(), Tick::Advanced);
        }
        assert_eq!(c.remaining_seconds(), 1);

        assert_eq!(c.tick(), Tick::Expired);
        assert_eq!(c.remaining_seconds(), 0);
        assert_eq!(c.phase(), Phase::Expired);
        assert!(!c.is_running());
        // Uninterrupted run: active elapsed equals the configured duration
        assert_eq!(c.active_elapsed_seconds(), 60);
    }

    #[test]
    fn test_expired_is_terminal() {
        let mut c = started(1);
        for _ in 0..60 {
            c.tick();
        }
        assert_eq!(c.phase(), Phase::Expired);

        // No operation re-arms the countdown
        assert!(!c.toggle());
        assert!(!c.start());
        for _ in 0..10 {
            assert_eq!(c.tick(), Tick::Stale);
        }
        assert_eq!(c.remaining_seconds(), 0);
        assert_eq!(c.active_elapsed_seconds(), 60);
        assert_eq!(c.phase(), Phase::Expired);
    }

    #[test]
    fn test_pause_excludes_time_from_active_elapsed() {
        let mut c = started(2);
        for _ in 0..30 {
            c.tick();
        }
        assert!(c.toggle());

        // Ticks arriving while paused change nothing
        for _ in 0..10 {
            assert_eq!(c.tick(), Tick::Stale);
        }
        assert_eq!(c.remaining_seconds(), 90);

        assert!(c.toggle());
        for _ in 0..89 {
            assert_eq!(c.tick(), Tick::Advanced);
        }
        assert_eq!(c.tick(), Tick::Expired);

        assert_eq!(c.phase(), Phase::Expired);
        assert_eq!(c.active_elapsed_seconds(), 120);
    }

    #[test]
    fn test_active_elapsed_never_exceeds_initial_remaining() {
        let mut c = started(1);
        for _ in 0..200 {
            c.tick();
            assert!(c.active_elapsed_seconds() <= 60);
        }
    }

    #[test]
    fn test_running_tick_at_zero_forces_expiry() {
        // A stale source firing after remaining already hit zero must not
        // accrue elapsed time, just complete the transition.
        let mut c = Countdown {
            remaining_seconds: 0,
            active_elapsed_seconds: 42,
            configured_minutes: 1,
            is_running: true,
            has_started: true,
        };
        assert_eq!(c.tick(), Tick::Expired);
        assert_eq!(c.active_elapsed_seconds(), 42);
        assert!(!c.is_running());
        assert_eq!(c.phase(), Phase::Expired);
    }
}
