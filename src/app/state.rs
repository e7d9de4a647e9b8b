//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).

use std::time::Instant;

use crate::config::AppConfig;
use crate::core::carousel::{Breakpoints, CarouselEngine, Timing};
use crate::core::catalog::{Catalog, Listing, Review, Suggestion};
use crate::core::feed::SuggestionFeed;
use crate::ui::slide::SlideAnimator;

/// The three card rails, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rail {
    #[default]
    Suggestions,
    Listings,
    Reviews,
}

impl Rail {
    pub const ALL: [Rail; 3] = [Rail::Suggestions, Rail::Listings, Rail::Reviews];

    pub fn next(self) -> Self {
        match self {
            Rail::Suggestions => Rail::Listings,
            Rail::Listings => Rail::Reviews,
            Rail::Reviews => Rail::Suggestions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Rail::Suggestions => Rail::Reviews,
            Rail::Listings => Rail::Suggestions,
            Rail::Reviews => Rail::Listings,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    /// AI-picked suggestions, fed by the TTL-cached feed.
    pub suggestions: CarouselEngine<Suggestion>,
    /// Farmhouse listings.
    pub listings: CarouselEngine<Listing>,
    /// Guest review excerpts.
    pub reviews: CarouselEngine<Review>,
    /// Per-rail slide animation state.
    pub suggestion_slide: SlideAnimator,
    pub listing_slide: SlideAnimator,
    pub review_slide: SlideAnimator,
    /// Rotating suggestion source.
    pub feed: SuggestionFeed,
    /// Which rail keyboard input addresses.
    pub focused: Rail,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Last known terminal size, for mouse hit testing between resizes.
    pub term_width: u16,
    pub term_height: u16,
    /// User configuration.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        catalog: Catalog,
        timing: Timing,
        slide: SlideAnimator,
        term_width: u16,
        term_height: u16,
        now: Instant,
    ) -> Self {
        let breakpoints = Breakpoints::columns(config.wide_cols, config.medium_cols);

        let mut suggestions = CarouselEngine::new(breakpoints, timing);
        let mut listings = CarouselEngine::new(breakpoints, timing);
        let mut reviews = CarouselEngine::new(breakpoints, timing);

        let width = u32::from(term_width);
        suggestions.on_viewport_change(width, now);
        listings.on_viewport_change(width, now);
        reviews.on_viewport_change(width, now);

        listings.configure(catalog.listings, now);
        reviews.configure(catalog.reviews, now);

        let mut state = Self {
            suggestions,
            listings,
            reviews,
            suggestion_slide: slide.clone(),
            listing_slide: slide.clone(),
            review_slide: slide,
            feed: SuggestionFeed::new(config.suggestion_ttl()),
            focused: Rail::default(),
            should_quit: false,
            status_message: None,
            term_width,
            term_height,
            config,
        };
        // First poll is a cold cache — fills the suggestions rail.
        state.poll_feed(now);
        state
    }

    /// Advance every deadline-driven piece: engines, feed, animations.
    pub fn on_tick(&mut self, now: Instant) {
        self.suggestions.tick(now);
        self.listings.tick(now);
        self.reviews.tick(now);
        self.poll_feed(now);
        self.suggestion_slide.tick();
        self.listing_slide.tick();
        self.review_slide.tick();
    }

    /// Feed every engine the new viewport width.  A changed card count
    /// resets that rail, so the animators forget their reference too.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.term_width = width;
        self.term_height = height;
        let w = u32::from(width);
        self.suggestions.on_viewport_change(w, now);
        self.listings.on_viewport_change(w, now);
        self.reviews.on_viewport_change(w, now);
        self.suggestion_slide.reset();
        self.listing_slide.reset();
        self.review_slide.reset();
    }

    /// Jump the focused rail to dot `dot`.
    pub fn jump_focused(&mut self, dot: usize, now: Instant) {
        self.jump_rail(self.focused, dot, now);
    }

    /// Jump a specific rail to dot `dot` and focus it.
    pub fn jump_rail(&mut self, rail: Rail, dot: usize, now: Instant) {
        self.focused = rail;
        match rail {
            Rail::Suggestions => self.suggestions.select_dot(dot, now),
            Rail::Listings => self.listings.select_dot(dot, now),
            Rail::Reviews => self.reviews.select_dot(dot, now),
        }
    }

    /// Card count of a rail (for hit testing).
    pub fn rail_len(&self, rail: Rail) -> usize {
        match rail {
            Rail::Suggestions => self.suggestions.len(),
            Rail::Listings => self.listings.len(),
            Rail::Reviews => self.reviews.len(),
        }
    }

    /// Invalidate the suggestion cache; the next tick swaps the rail.
    pub fn refresh_suggestions(&mut self) {
        self.feed.refresh();
        self.status_message = Some(format!(
            "Refreshing picks… (auto every {}s)",
            self.config.suggestion_ttl_secs
        ));
    }

    /// Disarm every engine deadline.  Called once on quit, before the
    /// terminal is torn down.
    pub fn shutdown(&mut self) {
        self.suggestions.shutdown();
        self.listings.shutdown();
        self.reviews.shutdown();
    }

    fn poll_feed(&mut self, now: Instant) {
        if let Some(batch) = self.feed.poll(now) {
            // A fresh batch is a collection swap: the engine resets and
            // the animator must not read the jump as a scroll.
            self.suggestions.configure(batch, now);
            self.suggestion_slide.reset();
            self.status_message = None;
        }
    }
}
