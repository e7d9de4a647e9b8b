//! Timing configuration and the auto-advance deadline.
//!
//! Everything here is deadline-based: a timer is an `Option<Instant>` that
//! the engine polls with the current time on every tick.  Disarming is
//! cancellation — there is nothing left to fire after `stop()`.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Default pause between forward steps.
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);
/// Default settle delay — how long the slide animation is given to finish
/// before the position is silently rewritten.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(700);
/// Default pause between the instant rewrite and re-enabling transitions.
pub const DEFAULT_REARM_DELAY: Duration = Duration::from_millis(50);

/// Invalid or inconsistent carousel timing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    #[error("advance interval must be non-zero")]
    ZeroInterval,
    #[error("settle delay must be non-zero")]
    ZeroSettle,
    #[error("settle delay {settle:?} does not match the renderer's transition duration {transition:?}")]
    SettleMismatch {
        settle: Duration,
        transition: Duration,
    },
}

/// The three timing constants driving a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between auto-advance steps.
    pub advance_interval: Duration,
    /// Delay between crossing detection and the position rewrite.  Must
    /// equal the renderer's animated-slide duration, or the rewrite fires
    /// mid-animation and the wrap becomes visible.
    pub settle_delay: Duration,
    /// Delay between the rewrite and transitions coming back on.
    pub rearm_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
            rearm_delay: DEFAULT_REARM_DELAY,
        }
    }
}

impl Timing {
    pub fn new(
        advance_interval: Duration,
        settle_delay: Duration,
        rearm_delay: Duration,
    ) -> Result<Self, TimingError> {
        if advance_interval.is_zero() {
            return Err(TimingError::ZeroInterval);
        }
        if settle_delay.is_zero() {
            return Err(TimingError::ZeroSettle);
        }
        Ok(Self {
            advance_interval,
            settle_delay,
            rearm_delay,
        })
    }

    /// Check the settle delay against the duration the renderer actually
    /// animates with.  The two must be the same value.
    pub fn validate_transition(&self, transition: Duration) -> Result<(), TimingError> {
        if self.settle_delay != transition {
            return Err(TimingError::SettleMismatch {
                settle: self.settle_delay,
                transition,
            });
        }
        Ok(())
    }
}

// ───────────────────────────────────────── auto-advance ──────

/// Recurring forward-step deadline.  Armed only while the carousel wraps.
#[derive(Debug, Clone, Copy)]
pub struct AutoAdvance {
    interval: Duration,
    next: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Arm (or re-arm) the deadline one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Disarm.  A stopped scheduler never fires.
    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Fire at most one step if the deadline has passed, re-arming from
    /// `now`.  Missed intervals are not replayed — a late poll yields one
    /// step and the next natural deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now >= due => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn timing_rejects_zero_values() {
        assert_eq!(
            Timing::new(Duration::ZERO, 700 * MS, 50 * MS),
            Err(TimingError::ZeroInterval)
        );
        assert_eq!(
            Timing::new(4000 * MS, Duration::ZERO, 50 * MS),
            Err(TimingError::ZeroSettle)
        );
    }

    #[test]
    fn settle_must_match_transition() {
        let timing = Timing::default();
        assert!(timing.validate_transition(DEFAULT_SETTLE_DELAY).is_ok());
        assert!(matches!(
            timing.validate_transition(300 * MS),
            Err(TimingError::SettleMismatch { .. })
        ));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut adv = AutoAdvance::new(100 * MS);
        adv.start(t0);

        assert!(!adv.poll(t0 + 50 * MS));
        assert!(adv.poll(t0 + 100 * MS));
        // Re-armed from the poll instant, not the original deadline.
        assert!(!adv.poll(t0 + 150 * MS));
        assert!(adv.poll(t0 + 200 * MS));
    }

    #[test]
    fn late_poll_does_not_catch_up() {
        let t0 = Instant::now();
        let mut adv = AutoAdvance::new(100 * MS);
        adv.start(t0);

        // Three intervals late — still a single step.
        assert!(adv.poll(t0 + 350 * MS));
        assert!(!adv.poll(t0 + 360 * MS));
    }

    #[test]
    fn stopped_scheduler_never_fires() {
        let t0 = Instant::now();
        let mut adv = AutoAdvance::new(100 * MS);
        adv.start(t0);
        adv.stop();
        assert!(!adv.is_running());
        assert!(!adv.poll(t0 + 1000 * MS));
    }
}
