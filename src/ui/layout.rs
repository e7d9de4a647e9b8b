//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::state::Rail;

/// Primary screen layout: three stacked card rails and a bottom status bar.
pub struct AppLayout {
    pub suggestions_area: Rect,
    pub listings_area: Rect,
    pub reviews_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),   // AI picks
                Constraint::Fill(1),   // listings
                Constraint::Fill(1),   // guest reviews
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            suggestions_area: chunks[0],
            listings_area: chunks[1],
            reviews_area: chunks[2],
            status_area: chunks[3],
        }
    }

    /// The screen region of a given rail.
    pub fn rail_area(&self, rail: Rail) -> Rect {
        match rail {
            Rail::Suggestions => self.suggestions_area,
            Rail::Listings => self.listings_area,
            Rail::Reviews => self.reviews_area,
        }
    }
}
