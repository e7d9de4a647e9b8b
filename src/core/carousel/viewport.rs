//! Viewport width → visible card count.
//!
//! The sampler is a pure table lookup; it carries no state, so callers may
//! re-run it on every resize event without debouncing.

/// Width thresholds mapping a viewport measure onto a visible card count.
///
/// The unit of `width` is whatever the host feeds in — the defaults speak
/// pixels, the TUI builds a column-based table from config.  Only the
/// ordering matters: `wide_min > medium_min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Minimum width for the widest window.
    pub wide_min: u32,
    /// Minimum width for the medium window.
    pub medium_min: u32,
    /// Cards shown at or above `wide_min`.
    pub wide: usize,
    /// Cards shown in `medium_min..wide_min`.
    pub medium: usize,
    /// Cards shown below `medium_min`.  Must be at least 1.
    pub narrow: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide_min: 1024,
            medium_min: 768,
            wide: 4,
            medium: 2,
            narrow: 1,
        }
    }
}

impl Breakpoints {
    /// A column-based table suited to terminal widths.
    pub fn columns(wide_min: u32, medium_min: u32) -> Self {
        Self {
            wide_min,
            medium_min,
            ..Self::default()
        }
    }

    /// Map a viewport width to the number of simultaneously visible cards.
    pub fn sample(&self, width: u32) -> usize {
        let count = if width >= self.wide_min {
            self.wide
        } else if width >= self.medium_min {
            self.medium
        } else {
            self.narrow
        };
        count.max(1)
    }
}
