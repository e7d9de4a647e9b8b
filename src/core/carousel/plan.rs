//! Loop plan — whether a collection wraps, and the tripled index space.
//!
//! A collection longer than the visible window is rendered as three
//! back-to-back copies; the carousel starts at the middle copy so there is
//! always a full copy of slack on either side of the viewport.  Shorter
//! collections render as a static grid with no extra copies.

/// Index-space layout for one carousel collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopPlan {
    /// Number of items in the underlying collection.
    pub len: usize,
    /// Cards visible at once.
    pub visible: usize,
    /// Whether the collection is long enough to scroll circularly.
    pub wrap: bool,
    /// Canonical start position — first index of the middle copy when
    /// wrapping, zero otherwise.
    pub start: usize,
}

impl LoopPlan {
    /// Build the plan for `len` items in a `visible`-card window.
    ///
    /// An empty collection never wraps, so no index arithmetic downstream
    /// ever divides by zero.
    pub fn build(len: usize, visible: usize) -> Self {
        let wrap = len > visible && len > 0;
        Self {
            len,
            visible,
            wrap,
            start: if wrap { len } else { 0 },
        }
    }

    /// Length of the rendered sequence — three copies when wrapping.
    pub fn render_len(&self) -> usize {
        if self.wrap {
            self.len * 3
        } else {
            self.len
        }
    }

    /// Map a render-sequence position back onto the source collection.
    pub fn source_index(&self, position: usize) -> usize {
        if self.len == 0 {
            0
        } else {
            position % self.len
        }
    }

    /// First position past the middle copy — reaching it means the view is
    /// drawing from the third copy and a snap-back is due.
    pub fn crossing(&self) -> usize {
        self.start + self.len
    }
}
