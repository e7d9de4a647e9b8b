//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into pixels
//! on the terminal.  No timer or index arithmetic happens here.

pub mod carousel_view;
pub mod layout;
pub mod slide;
pub mod theme;

use ratatui::{
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::state::{AppState, Rail};
use carousel_view::CarouselView;
use layout::AppLayout;
use theme::Theme;

/// Draw one frame: the three card rails and the status bar.
///
/// Rendering also feeds each rail's slide animator with the engine's
/// current position — the animator must see every position change,
/// including the transition-suppressed ones, to know when to glide and
/// when to snap.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());

    for rail in Rail::ALL {
        let area = layout.rail_area(rail);
        match rail {
            Rail::Suggestions => {
                let view = CarouselView::new(&state.suggestions, "AI picks");
                let slot_w = view.slot_width(area.width);
                state.suggestion_slide.observe(
                    state.suggestions.position(),
                    slot_w as f64,
                    state.suggestions.transition_enabled(),
                );
                view.focused(state.focused == rail)
                    .slide_cols(state.suggestion_slide.col_offset())
                    .render(area, frame.buffer_mut());
            }
            Rail::Listings => {
                let view = CarouselView::new(&state.listings, "Farmhouse stays");
                let slot_w = view.slot_width(area.width);
                state.listing_slide.observe(
                    state.listings.position(),
                    slot_w as f64,
                    state.listings.transition_enabled(),
                );
                view.focused(state.focused == rail)
                    .slide_cols(state.listing_slide.col_offset())
                    .render(area, frame.buffer_mut());
            }
            Rail::Reviews => {
                let view = CarouselView::new(&state.reviews, "Guest reviews");
                let slot_w = view.slot_width(area.width);
                state.review_slide.observe(
                    state.reviews.position(),
                    slot_w as f64,
                    state.reviews.transition_enabled(),
                );
                view.focused(state.focused == rail)
                    .slide_cols(state.review_slide.col_offset())
                    .render(area, frame.buffer_mut());
            }
        }
    }

    let hint = "Tab: switch rail | 1-9: jump to card | r: refresh picks | q: quit";
    let status_text = state.status_message.as_deref().unwrap_or(hint);
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);
}
