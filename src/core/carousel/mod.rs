//! Seamless infinite-carousel engine.
//!
//! Rotates a finite collection of opaque cards on a timer and fakes
//! unbounded circular scrolling: collections longer than the visible
//! window render as three back-to-back copies, the view starts at the
//! middle copy, and whenever it scrolls a full copy forward the position
//! is silently pulled back while transitions are suppressed.  A page
//! indicator folds the ever-growing position onto the original
//! collection.
//!
//! The engine is pure index/timer arithmetic: no rendering, no I/O.  All
//! deadlines are polled with an injected `Instant`, so every behaviour is
//! testable without a terminal.

pub mod indicator;
pub mod plan;
pub mod scheduler;
pub mod viewport;
pub mod wrap;

use std::time::Instant;

use tracing::{debug, trace};

use plan::LoopPlan;
use scheduler::AutoAdvance;
use wrap::{ResetAction, WrapReset};

pub use scheduler::{Timing, TimingError};
pub use viewport::Breakpoints;

/// One auto-rotating card collection.
///
/// The engine treats cards as opaque; it exposes the rendered sequence,
/// the current position, the transition flag, and the indicator state —
/// everything a renderer needs and nothing else.
#[derive(Debug)]
pub struct CarouselEngine<T> {
    items: Vec<T>,
    breakpoints: Breakpoints,
    /// Cards visible at once, from the latest viewport sample.
    visible: usize,
    plan: LoopPlan,
    /// Index into the render sequence.  Grows monotonically between
    /// resets; snaps subtract exactly one copy length.
    position: usize,
    transition_enabled: bool,
    advance: AutoAdvance,
    reset: WrapReset,
}

impl<T> CarouselEngine<T> {
    /// An engine with no cards yet.  `configure` supplies the collection;
    /// `on_viewport_change` supplies the window size.
    pub fn new(breakpoints: Breakpoints, timing: Timing) -> Self {
        let visible = breakpoints.sample(0);
        Self {
            items: Vec::new(),
            breakpoints,
            visible,
            plan: LoopPlan::build(0, visible),
            position: 0,
            transition_enabled: true,
            advance: AutoAdvance::new(timing.advance_interval),
            reset: WrapReset::new(timing.settle_delay, timing.rearm_delay),
        }
    }

    /// Replace the collection.  No state survives a swap: the position
    /// returns to the new start offset, transitions come back on, and any
    /// pending snap is cancelled before it can act on a stale position.
    pub fn configure(&mut self, items: Vec<T>, now: Instant) {
        self.items = items;
        self.rebuild(now);
        debug!(
            len = self.plan.len,
            visible = self.visible,
            wrap = self.plan.wrap,
            "carousel configured"
        );
    }

    /// Feed a new viewport width.  Only an actual change in the visible
    /// card count cascades into a reset.
    pub fn on_viewport_change(&mut self, width: u32, now: Instant) {
        let visible = self.breakpoints.sample(width);
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        self.rebuild(now);
        debug!(width, visible, "carousel window resized");
    }

    /// Fire whichever deadlines have passed: a pending snap/rearm first,
    /// then at most one auto-advance step, then the crossing check.
    pub fn tick(&mut self, now: Instant) {
        if !self.advance.is_running() && !self.reset.is_pending() {
            // Static grid, or shut down — nothing armed, nothing to do.
            return;
        }

        match self.reset.poll(now) {
            Some(ResetAction::Snap) => {
                // The slide has settled on the third copy; pull back one
                // copy length with transitions off.  The target frame
                // renders the same cards, so nothing moves on screen.
                self.transition_enabled = false;
                self.position -= self.plan.len;
                debug!(position = self.position, "carousel snapped to middle copy");
            }
            Some(ResetAction::RestoreTransitions) => {
                self.transition_enabled = true;
                trace!("carousel transitions restored");
            }
            None => {}
        }

        if self.advance.poll(now) {
            self.position += 1;
        }

        self.check_crossing(now);
    }

    /// Jump to the card behind dot `k`.  An ordinary animated move: the
    /// transition flag is left alone.  Ignored for static grids and
    /// out-of-range dots.
    pub fn select_dot(&mut self, dot: usize, now: Instant) {
        if !self.plan.wrap {
            return;
        }
        if let Some(position) = indicator::dot_position(dot, self.plan.start, self.plan.len) {
            self.position = position;
            self.check_crossing(now);
        }
    }

    /// Disarm every deadline.  Nothing fires after this — ticks become
    /// no-ops until the next `configure`.
    pub fn shutdown(&mut self) {
        self.advance.stop();
        self.reset.cancel();
    }

    // ── render-frame accessors ─────────────────────────────────

    /// The full rendered sequence — three copies of the collection when
    /// wrapping, the collection itself otherwise.
    pub fn render_sequence(&self) -> impl Iterator<Item = &T> {
        let copies = if self.plan.wrap { 3 } else { 1 };
        std::iter::repeat(self.items.iter()).take(copies).flatten()
    }

    /// The cards currently inside the visible window, in slot order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &T> {
        let end = (self.position + self.visible).min(self.plan.render_len());
        (self.position..end).map(move |p| &self.items[self.plan.source_index(p)])
    }

    /// The card rendered at a given render-sequence position.
    pub fn card_at(&self, position: usize) -> Option<&T> {
        if position >= self.plan.render_len() {
            return None;
        }
        self.items.get(self.plan.source_index(position))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn wrap_enabled(&self) -> bool {
        self.plan.wrap
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.plan.len
    }

    pub fn is_empty(&self) -> bool {
        self.plan.len == 0
    }

    /// Which indicator dot is lit, or `None` for an empty collection.
    pub fn active_dot(&self) -> Option<usize> {
        indicator::active_dot(self.position, self.plan.start, self.plan.len)
    }

    /// Whether any deadline is still armed.
    pub fn has_pending_deadlines(&self) -> bool {
        self.advance.is_running() || self.reset.is_pending()
    }

    // ── internals ──────────────────────────────────────────────

    /// Re-derive the plan and reset all per-collection state.
    fn rebuild(&mut self, now: Instant) {
        self.plan = LoopPlan::build(self.items.len(), self.visible);
        self.position = self.plan.start;
        self.transition_enabled = true;
        self.reset.cancel();
        if self.plan.wrap {
            self.advance.start(now);
        } else {
            self.advance.stop();
        }
    }

    /// Arm the snap-back once the position has entered the third copy.
    /// Arming is idempotent, so repeated checks before the snap fires are
    /// harmless.
    fn check_crossing(&mut self, now: Instant) {
        if self.plan.wrap && self.position >= self.plan.crossing() && self.reset.arm(now) {
            trace!(position = self.position, "carousel crossing detected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const MS: Duration = Duration::from_millis(1);

    /// Default-like timing, sized down so tests read in milliseconds.
    fn timing() -> Timing {
        Timing::new(4000 * MS, 700 * MS, 50 * MS).unwrap()
    }

    /// Engine showing one card at a time, loaded with `items`.
    fn narrow_engine(items: Vec<char>, t0: Instant) -> CarouselEngine<char> {
        let mut engine = CarouselEngine::new(Breakpoints::default(), timing());
        engine.on_viewport_change(500, t0);
        engine.configure(items, t0);
        engine
    }

    #[test]
    fn static_grid_has_no_timers() {
        let t0 = Instant::now();
        let mut engine = CarouselEngine::new(Breakpoints::default(), timing());
        engine.on_viewport_change(1200, t0); // 4 visible
        engine.configure(vec!['a', 'b', 'c'], t0);

        assert!(!engine.wrap_enabled());
        assert!(!engine.has_pending_deadlines());
        assert_eq!(engine.render_sequence().count(), 3);
        assert_eq!(engine.position(), 0);

        engine.tick(t0 + 60_000 * MS);
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn wrapping_collection_triples_and_starts_at_middle() {
        let t0 = Instant::now();
        let engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        assert!(engine.wrap_enabled());
        assert_eq!(engine.position(), 5);
        assert_eq!(engine.active_dot(), Some(0));

        let rendered: Vec<char> = engine.render_sequence().copied().collect();
        let expected: Vec<char> = "ABCDEABCDEABCDE".chars().collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn full_revolution_snaps_seamlessly() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        // Five steps land on the start of the third copy.
        for step in 1..=5u64 {
            engine.tick(t0 + Duration::from_millis(4000 * step));
        }
        let crossing_at = t0 + 20_000 * MS;
        assert_eq!(engine.position(), 10);
        assert_eq!(engine.active_dot(), Some(0));
        assert!(engine.transition_enabled());
        let before_snap = *engine.card_at(engine.position()).unwrap();

        // Settle delay elapses: instant rewrite, transitions off.
        engine.tick(crossing_at + 700 * MS);
        assert_eq!(engine.position(), 5);
        assert!(!engine.transition_enabled());
        let after_snap = *engine.card_at(engine.position()).unwrap();
        assert_eq!(before_snap, after_snap);
        assert_eq!(engine.active_dot(), Some(0));

        // Rearm delay elapses: transitions back on, still at the start.
        engine.tick(crossing_at + 750 * MS);
        assert!(engine.transition_enabled());
        assert_eq!(engine.position(), 5);
    }

    #[test]
    fn indicator_tracks_many_revolutions() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        let mut now = t0;
        for step in 0..37 {
            now += 4000 * MS;
            engine.tick(now);
            // Let any pending snap run its course between steps.
            engine.tick(now + 700 * MS);
            engine.tick(now + 750 * MS);
            now += 750 * MS;
            assert_eq!(engine.active_dot(), Some((step + 1) % 5));
        }
    }

    #[test]
    fn dot_selection_jumps_and_resumes() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        engine.select_dot(3, t0 + 100 * MS);
        assert_eq!(engine.position(), 8);
        assert_eq!(engine.active_dot(), Some(3));
        assert!(engine.transition_enabled());
        assert!(!engine.has_pending_snap());

        // The scheduler keeps its own cadence and advances from the jump.
        engine.tick(t0 + 4000 * MS);
        assert_eq!(engine.position(), 9);
        assert_eq!(engine.active_dot(), Some(4));

        // Out-of-range dots are ignored.
        engine.select_dot(9, t0 + 4100 * MS);
        assert_eq!(engine.position(), 9);
    }

    #[test]
    fn resize_resets_position_and_transitions() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D'], t0);

        engine.tick(t0 + 4000 * MS);
        engine.tick(t0 + 8000 * MS);
        assert_eq!(engine.position(), 6);

        // 2-visible window: still wrapping, fresh start.
        engine.on_viewport_change(800, t0 + 9000 * MS);
        assert!(engine.wrap_enabled());
        assert_eq!(engine.position(), 4);
        assert!(engine.transition_enabled());
        assert_eq!(engine.active_dot(), Some(0));

        // Same width band again — no reset.
        engine.tick(t0 + 13_000 * MS);
        assert_eq!(engine.position(), 5);
        engine.on_viewport_change(900, t0 + 13_500 * MS);
        assert_eq!(engine.position(), 5);

        // Wide window swallows the whole collection: wrap off, no timers.
        engine.on_viewport_change(1100, t0 + 14_000 * MS);
        assert!(!engine.wrap_enabled());
        assert_eq!(engine.position(), 0);
        assert!(!engine.has_pending_deadlines());
    }

    #[test]
    fn collection_swap_discards_pending_snap() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        for step in 1..=5u64 {
            engine.tick(t0 + Duration::from_millis(4000 * step));
        }
        assert_eq!(engine.position(), 10);
        assert!(engine.has_pending_snap());

        // Swap before the settle deadline: the stale snap must not fire
        // against the fresh position.
        engine.configure(vec!['x', 'y', 'z', 'w', 'v', 'u'], t0 + 20_100 * MS);
        assert_eq!(engine.position(), 6);
        assert!(engine.transition_enabled());

        engine.tick(t0 + 20_700 * MS);
        assert_eq!(engine.position(), 6);
        assert!(engine.transition_enabled());
    }

    #[test]
    fn shutdown_silences_every_deadline() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(vec!['A', 'B', 'C', 'D', 'E'], t0);

        for step in 1..=5u64 {
            engine.tick(t0 + Duration::from_millis(4000 * step));
        }
        assert!(engine.has_pending_deadlines());

        engine.shutdown();
        assert!(!engine.has_pending_deadlines());

        let position = engine.position();
        let transitions = engine.transition_enabled();
        engine.tick(t0 + 600_000 * MS);
        assert_eq!(engine.position(), position);
        assert_eq!(engine.transition_enabled(), transitions);
    }

    #[test]
    fn steps_inside_the_settle_window_survive_the_snap() {
        let t0 = Instant::now();
        // Interval shorter than the settle delay, so steps land while the
        // snap is pending.
        let timing = Timing::new(100 * MS, 250 * MS, 10 * MS).unwrap();
        let mut engine = CarouselEngine::new(Breakpoints::default(), timing);
        engine.on_viewport_change(500, t0);
        engine.configure(vec!['A', 'B', 'C', 'D', 'E'], t0);

        for step in 1..=5u64 {
            engine.tick(t0 + Duration::from_millis(100 * step));
        }
        assert_eq!(engine.position(), 10); // crossing; snap due at +750

        engine.tick(t0 + 600 * MS);
        engine.tick(t0 + 700 * MS);
        assert_eq!(engine.position(), 12);
        let before = *engine.card_at(engine.position()).unwrap();

        engine.tick(t0 + 750 * MS);
        assert_eq!(engine.position(), 7); // pulled back exactly one copy
        assert_eq!(*engine.card_at(engine.position()).unwrap(), before);
    }

    #[test]
    fn empty_collection_is_inert() {
        let t0 = Instant::now();
        let mut engine = narrow_engine(Vec::new(), t0);

        assert!(!engine.wrap_enabled());
        assert!(engine.is_empty());
        assert_eq!(engine.active_dot(), None);
        assert!(!engine.has_pending_deadlines());
        assert_eq!(engine.render_sequence().count(), 0);
        assert_eq!(engine.visible_cards().count(), 0);

        engine.tick(t0 + 10_000 * MS);
        engine.select_dot(0, t0 + 10_000 * MS);
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn visible_window_follows_the_position() {
        let t0 = Instant::now();
        let mut engine = CarouselEngine::new(Breakpoints::default(), timing());
        engine.on_viewport_change(800, t0); // 2 visible
        engine.configure(vec!['A', 'B', 'C', 'D', 'E'], t0);

        let window: Vec<char> = engine.visible_cards().copied().collect();
        assert_eq!(window, vec!['A', 'B']);

        engine.tick(t0 + 4000 * MS);
        let window: Vec<char> = engine.visible_cards().copied().collect();
        assert_eq!(window, vec!['B', 'C']);
    }

    impl<T> CarouselEngine<T> {
        /// Test-only view of the snap machine.
        fn has_pending_snap(&self) -> bool {
            self.reset.is_pending()
        }
    }
}
