//! Input handling — maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::ui::carousel_view::dot_hitboxes;
use crate::ui::layout::AppLayout;

use super::state::{AppState, Rail};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Tab => state.focused = state.focused.next(),
        KeyCode::BackTab => state.focused = state.focused.prev(),
        KeyCode::Char('r') => state.refresh_suggestions(),
        KeyCode::Char(c @ '1'..='9') => {
            // Digit keys address the focused rail's dots, 1-based.
            let dot = (c as usize) - ('1' as usize);
            if dot < state.rail_len(state.focused) {
                state.jump_focused(dot, now);
            }
        }
        _ => {}
    }
}

/// Process a mouse event — left clicks on any rail's dot row jump that
/// rail to the clicked card.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }

    let screen = Rect::new(0, 0, state.term_width, state.term_height);
    let layout = AppLayout::from_area(screen);

    for rail in Rail::ALL {
        let area = layout.rail_area(rail);
        for (dot, hit) in dot_hitboxes(area, state.rail_len(rail)).into_iter().enumerate() {
            if hit.contains((mouse.column, mouse.row).into()) {
                state.jump_rail(rail, dot, now);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::catalog::Catalog;
    use crate::ui::slide::SlideAnimator;

    fn state() -> AppState {
        let config = AppConfig::default();
        let timing = config.timing().unwrap();
        let slide = SlideAnimator::with_duration(config.slide_duration(), config.tick_rate());
        AppState::new(config, Catalog::sample(), timing, slide, 60, 24, Instant::now())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('q')), Instant::now());
        assert!(s.should_quit);

        let mut s = state();
        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(s.should_quit);
    }

    #[test]
    fn tab_cycles_rail_focus() {
        let mut s = state();
        assert_eq!(s.focused, Rail::Suggestions);
        handle_key(&mut s, press(KeyCode::Tab), Instant::now());
        assert_eq!(s.focused, Rail::Listings);
        handle_key(&mut s, press(KeyCode::BackTab), Instant::now());
        assert_eq!(s.focused, Rail::Suggestions);
    }

    #[test]
    fn digits_jump_the_focused_rail() {
        let mut s = state();
        let now = Instant::now();
        handle_key(&mut s, press(KeyCode::Tab), now); // focus listings
        handle_key(&mut s, press(KeyCode::Char('3')), now);
        assert_eq!(s.listings.active_dot(), Some(2));

        // Out-of-range digits are ignored.
        handle_key(&mut s, press(KeyCode::Char('9')), now);
        assert_eq!(s.listings.active_dot(), Some(2));
    }

    #[test]
    fn clicking_a_dot_jumps_and_focuses_that_rail() {
        let mut s = state();
        let now = Instant::now();

        let screen = Rect::new(0, 0, s.term_width, s.term_height);
        let layout = AppLayout::from_area(screen);
        let hits = dot_hitboxes(layout.listings_area, s.listings.len());
        assert!(!hits.is_empty());

        let target = hits[2];
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x,
            row: target.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, mouse, now);

        assert_eq!(s.focused, Rail::Listings);
        assert_eq!(s.listings.active_dot(), Some(2));
    }

    #[test]
    fn clicks_outside_any_dot_row_change_nothing() {
        let mut s = state();
        let before = s.listings.position();
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, mouse, Instant::now());
        assert_eq!(s.listings.position(), before);
        assert_eq!(s.focused, Rail::Suggestions);
    }
}
