//! Column-level slide animation with exponential ease-out.
//!
//! When the carousel position changes, a column displacement is injected
//! proportional to the number of cards moved × card width.  Each tick the
//! displacement decays toward zero, so cards glide into place with visible
//! deceleration.  Moves observed while the engine has transitions disabled
//! inject nothing — the reference position updates silently, which is what
//! keeps the wrap-around rewrite invisible.

use std::time::Duration;

/// Column-offset slide animator for one card rail.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    /// Current column displacement.  Positive = cards shifted right of
    /// their target (sliding left); negative = shifted left (sliding right).
    col_offset: f64,
    /// Previous carousel position (to detect changes).
    prev_position: Option<usize>,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
    /// The glide time this animator was calibrated for.
    duration: Duration,
}

impl SlideAnimator {
    /// Calibrate the decay so a displacement has visually settled after
    /// `duration`, given one `tick` call per `tick_rate`.
    pub fn with_duration(duration: Duration, tick_rate: Duration) -> Self {
        // Decay to 5% of the initial displacement across the duration.
        let ticks = (duration.as_secs_f64() / tick_rate.as_secs_f64()).max(1.0);
        let speed = 1.0 - 0.05_f64.powf(1.0 / ticks);
        Self {
            col_offset: 0.0,
            prev_position: None,
            speed: speed.clamp(0.05, 0.95),
            duration,
        }
    }

    /// The glide duration declared to the engine's timing validation.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Feed the current position and card width (in columns).
    ///
    /// A changed position injects displacement only while transitions are
    /// enabled; a transition-suppressed change snaps.
    pub fn observe(&mut self, position: usize, card_width: f64, transitions_enabled: bool) {
        let Some(prev) = self.prev_position else {
            self.prev_position = Some(position);
            return;
        };
        if position == prev {
            return;
        }
        if transitions_enabled {
            let delta = position as f64 - prev as f64;
            self.col_offset += delta * card_width;
        }
        self.prev_position = Some(position);
    }

    /// Decay the offset toward zero.  Call once per frame tick.
    pub fn tick(&mut self) {
        self.col_offset *= 1.0 - self.speed;
        if self.col_offset.abs() < 0.6 {
            self.col_offset = 0.0;
        }
    }

    /// Current column displacement (integer columns).
    pub fn col_offset(&self) -> i16 {
        self.col_offset.round() as i16
    }

    /// True while there is visible motion.
    pub fn is_animating(&self) -> bool {
        self.col_offset != 0.0
    }

    /// Forget displacement and reference position.  Called when the rail
    /// is reconfigured or the window is resized — those jumps are layout
    /// changes, not scrolls.
    pub fn reset(&mut self) {
        self.col_offset = 0.0;
        self.prev_position = None;
    }
}
