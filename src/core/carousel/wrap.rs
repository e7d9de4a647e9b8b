//! Snap-back coordination for the wrap-around illusion.
//!
//! Once the view has scrolled one full copy past the middle copy's start,
//! the position must be pulled back by exactly one copy length — but only
//! after the in-flight slide animation has finished, and only with
//! transitions switched off, so the rewrite lands on a frame that renders
//! the same cards as the one just shown.  Transitions come back on a beat
//! later, once the instant rewrite has been painted.
//!
//! The whole dance is a three-phase machine polled with the current time;
//! there are no callbacks to leak and `cancel` makes any pending phase
//! inert.

use std::time::{Duration, Instant};

/// What the engine must do when a phase deadline fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    /// Disable transitions and pull the position back one copy length.
    Snap,
    /// Re-enable transitions; the rewrite has been painted.
    RestoreTransitions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Advancing normally; no rewrite pending.
    Idle,
    /// Crossing observed — waiting out the slide animation.
    SnapScheduled { at: Instant },
    /// Position rewritten with transitions off — waiting to re-arm them.
    Rearming { at: Instant },
}

/// The snap-back state machine for one carousel.
#[derive(Debug, Clone, Copy)]
pub struct WrapReset {
    settle_delay: Duration,
    rearm_delay: Duration,
    phase: Phase,
}

impl WrapReset {
    pub fn new(settle_delay: Duration, rearm_delay: Duration) -> Self {
        Self {
            settle_delay,
            rearm_delay,
            phase: Phase::Idle,
        }
    }

    /// Note that the position has crossed into the third copy.
    ///
    /// Idempotent: while a snap or rearm is already pending, further
    /// crossings are the same crossing and must not reschedule anything.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::SnapScheduled {
            at: now + self.settle_delay,
        };
        true
    }

    /// The single transition function: fire whichever phase deadline has
    /// passed.  At most one action per poll — snap and rearm are always at
    /// least `rearm_delay` apart.
    pub fn poll(&mut self, now: Instant) -> Option<ResetAction> {
        match self.phase {
            Phase::Idle => None,
            Phase::SnapScheduled { at } if now >= at => {
                self.phase = Phase::Rearming {
                    at: now + self.rearm_delay,
                };
                Some(ResetAction::Snap)
            }
            Phase::Rearming { at } if now >= at => {
                self.phase = Phase::Idle;
                Some(ResetAction::RestoreTransitions)
            }
            _ => None,
        }
    }

    /// Drop any pending phase.  Used on reconfiguration and teardown so a
    /// stale deadline can never rewrite a fresh position.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Whether a snap or rearm deadline is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.phase != Phase::Idle
    }
}
