//! Card rail widget — a bordered row of cards driven by a
//! [`CarouselEngine`], slid horizontally by the rail's animator, with a
//! page-indicator dot row when the rail wraps.
//!
//! The dot geometry is shared with the mouse handler through
//! [`dot_hitboxes`], so clicks and pixels can never disagree.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::core::carousel::CarouselEngine;
use crate::core::catalog::{Listing, Review, Suggestion};

use super::theme::Theme;

// ───────────────────────────────────────── card trait ────────

/// What a rail needs from a card: a heading and a few body lines.
pub trait Card {
    fn heading(&self) -> String;
    fn lines(&self) -> Vec<Line<'static>>;
}

impl Card for Suggestion {
    fn heading(&self) -> String {
        self.headline.clone()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        vec![Line::styled(self.blurb.clone(), Theme::card_body_style())]
    }
}

impl Card for Listing {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::styled(self.locale.clone(), Theme::card_body_style()),
            Line::from(vec![
                Span::styled(format!("₹{}/night", self.nightly_rate), Theme::price_style()),
                Span::styled(format!("  {:.1}★", self.rating), Theme::stars_style()),
            ]),
            Line::styled(format!("{} beds", self.beds), Theme::card_body_style()),
        ]
    }
}

impl Card for Review {
    fn heading(&self) -> String {
        self.guest.clone()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let stars: String = "★".repeat(self.stars as usize);
        vec![
            Line::from(vec![
                Span::styled(stars, Theme::stars_style()),
                Span::styled(
                    format!("  {}", self.stayed.format("%b %Y")),
                    Theme::card_body_style(),
                ),
            ]),
            Line::styled(format!("“{}”", self.quote), Theme::card_body_style()),
        ]
    }
}

// ───────────────────────────────────────── geometry ──────────

/// Screen rectangles for a rail's indicator dots, in dot order.
///
/// Computed from the rail's outer area so the renderer and the mouse
/// handler derive identical geometry.  Empty when the rail is too small
/// to show a dot row.
pub fn dot_hitboxes(rail_area: Rect, len: usize) -> Vec<Rect> {
    if len == 0 || rail_area.width < 4 || rail_area.height < 4 {
        return Vec::new();
    }
    let inner_w = rail_area.width - 2;
    let total = (len as u16) * 2 - 1;
    if total > inner_w {
        return Vec::new();
    }
    let start_x = rail_area.x + 1 + (inner_w - total) / 2;
    let y = rail_area.y + rail_area.height - 2;
    (0..len as u16)
        .map(|i| {
            let width = if i + 1 == len as u16 { 1 } else { 2 };
            Rect::new(start_x + i * 2, y, width, 1)
        })
        .collect()
}

// ───────────────────────────────────────── widget ────────────

/// One card rail — created fresh each frame.
pub struct CarouselView<'a, T> {
    engine: &'a CarouselEngine<T>,
    title: &'a str,
    focused: bool,
    /// Current slide displacement in columns.
    slide_cols: i16,
}

impl<'a, T: Card> CarouselView<'a, T> {
    pub fn new(engine: &'a CarouselEngine<T>, title: &'a str) -> Self {
        Self {
            engine,
            title,
            focused: false,
            slide_cols: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn slide_cols(mut self, cols: i16) -> Self {
        self.slide_cols = cols;
        self
    }

    /// Width of one card slot for a rail of this outer width.
    pub fn slot_width(&self, rail_width: u16) -> u16 {
        let inner_w = rail_width.saturating_sub(2);
        let slots = self.slot_count().max(1) as u16;
        (inner_w / slots).max(1)
    }

    fn slot_count(&self) -> usize {
        if self.engine.wrap_enabled() {
            self.engine.visible_count()
        } else {
            self.engine.len()
        }
    }

    fn render_card(card: &T, area: Rect, buf: &mut Buffer) {
        let boxed = Block::bordered().border_style(Theme::border_style());
        let inner = boxed.inner(area);
        boxed.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let heading = Line::styled(card.heading(), Theme::card_heading_style());
        buf.set_line(inner.x, inner.y, &heading, inner.width);

        for (i, line) in card.lines().iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}

impl<'a, T: Card> Widget for CarouselView<'a, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        };
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_style(Theme::title_style())
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 4 || inner.height < 2 {
            return;
        }

        if self.engine.is_empty() {
            let empty = Line::styled("nothing to show yet", Theme::card_body_style());
            buf.set_line(inner.x + 1, inner.y, &empty, inner.width);
            return;
        }

        let wrap = self.engine.wrap_enabled();
        // The bottom inner row belongs to the indicator when wrapping.
        let card_h = if wrap {
            inner.height - 1
        } else {
            inner.height
        };
        let slots = self.slot_count().max(1);
        let slot_w = (inner.width / slots as u16).max(1);

        // One extra slot on each side keeps cards visible mid-slide.
        for slot in -1..=(slots as i32) {
            let position = self.engine.position() as i64 + slot as i64;
            if position < 0 {
                continue;
            }
            let Some(card) = self.engine.card_at(position as usize) else {
                continue;
            };

            let x = inner.x as i32 + slot * slot_w as i32 + self.slide_cols as i32;
            if x < inner.x as i32 {
                continue;
            }
            let avail = inner.right() as i32 - x;
            let card_w = (slot_w as i32).min(avail);
            if card_w < 4 {
                continue;
            }
            // One-column gutter between slots.
            let card_area = Rect::new(x as u16, inner.y, card_w as u16 - 1, card_h);
            Self::render_card(card, card_area, buf);
        }

        if wrap {
            let active = self.engine.active_dot();
            for (i, hit) in dot_hitboxes(area, self.engine.len()).into_iter().enumerate() {
                let (glyph, style) = if Some(i) == active {
                    ("●", Theme::dot_active_style())
                } else {
                    ("○", Theme::dot_idle_style())
                };
                buf.set_line(hit.x, hit.y, &Line::styled(glyph, style), 1);
            }
        }
    }
}
