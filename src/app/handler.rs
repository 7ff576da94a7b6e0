//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::pager::Pager;
use crate::core::touch::PointerEvent;
use crate::ui::indicator_widget::{column_to_x, indicator_rows, layout_over};
use crate::ui::layout::{contains, AppLayout};

use super::state::{AppState, MouseTarget};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    let current = state.pager.current_index();
    let last = state.pager.page_count().saturating_sub(1);
    match action {
        Action::PrevPage => {
            if current > 0 {
                navigate(state, current - 1);
            }
        }
        Action::NextPage => {
            if current < last {
                navigate(state, current + 1);
            }
        }
        Action::FirstPage => navigate(state, 0),
        Action::LastPage => navigate(state, last),
        Action::ToggleNavigation => {
            let enabled = !state.indicator.options().page_navigation_enabled;
            state.indicator.set_page_navigation_enabled(enabled);
            state.status_message = Some(format!(
                "Tap-to-navigate {}",
                if enabled { "enabled" } else { "disabled" }
            ));
            state.dirty = true;
        }
        Action::Quit => state.should_quit = true,
    }
}

fn navigate(state: &mut AppState, index: usize) {
    if let Err(err) = state.pager.set_current_index(index, true) {
        tracing::warn!("navigation failed: {err}");
        state.status_message = Some(err.to_string());
        state.dirty = true;
    }
    state.pump_pager_events();
}

/// Process a mouse event: drags on the pages swipe them, clicks on the
/// indicator's dots jump to that page.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let layout = AppLayout::from_area(state.terminal_area, indicator_rows(&state.indicator));
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.indicator_area, col, row) {
                state.mouse_target = Some(MouseTarget::Indicator);
                layout_over(&mut state.indicator, layout.indicator_area);
                let x = column_to_x(layout.indicator_area, col);
                state
                    .indicator
                    .handle_touch(PointerEvent::Down { x }, &mut state.pager);
            } else if contains(layout.pager_area, col, row) {
                state.mouse_target = Some(MouseTarget::Pager { last_column: col });
                state.pager.set_page_width(layout.pager_area.width);
                state.pager.begin_drag();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(MouseTarget::Pager { last_column }) = state.mouse_target {
                let dx = f64::from(col) - f64::from(last_column);
                let width = f64::from(layout.pager_area.width.max(1));
                // Content follows the pointer: dragging left reveals the next page.
                state.pager.drag_by(-dx / width);
                state.mouse_target = Some(MouseTarget::Pager { last_column: col });
            }
        }
        MouseEventKind::Up(MouseButton::Left) => match state.mouse_target.take() {
            Some(MouseTarget::Indicator) => {
                let event = if contains(layout.indicator_area, col, row) {
                    PointerEvent::Up {
                        x: column_to_x(layout.indicator_area, col),
                    }
                } else {
                    PointerEvent::Cancel
                };
                layout_over(&mut state.indicator, layout.indicator_area);
                state.indicator.handle_touch(event, &mut state.pager);
            }
            Some(MouseTarget::Pager { .. }) => state.pager.end_drag(),
            None => {}
        },
        _ => {}
    }

    state.pump_pager_events();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pager::DemoPager;
    use crate::config::AppConfig;
    use crate::core::pager::ScrollState;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn state(pages: usize, start: usize) -> AppState {
        let mut s = AppState::new(DemoPager::new(pages, start, 0.5), AppConfig::default());
        s.terminal_area = Rect::new(0, 0, 80, 24);
        s
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn settle(s: &mut AppState) {
        for _ in 0..200 {
            if !s.pager.is_animating() {
                break;
            }
            s.tick();
        }
    }

    fn click(s: &mut AppState, column: u16, row: u16) {
        handle_mouse(s, mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        handle_mouse(s, mouse(MouseEventKind::Up(MouseButton::Left), column, row));
    }

    #[test]
    fn arrow_keys_page_through() {
        let mut s = state(20, 0);
        handle_key(&mut s, press(KeyCode::Right));
        assert_eq!(s.pager.current_index(), 1);
        assert_eq!(s.indicator.cursor().current(), 1);
        settle(&mut s);
        handle_key(&mut s, press(KeyCode::Left));
        settle(&mut s);
        assert_eq!(s.pager.current_index(), 0);
        assert_eq!(s.indicator.cursor().current(), 0);
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut s = state(3, 0);
        handle_key(&mut s, press(KeyCode::Left));
        assert_eq!(s.pager.scroll_state(), ScrollState::Idle);
        handle_key(&mut s, press(KeyCode::End));
        settle(&mut s);
        assert_eq!(s.pager.current_index(), 2);
        handle_key(&mut s, press(KeyCode::Right));
        assert_eq!(s.pager.current_index(), 2);
    }

    #[test]
    fn jump_to_far_page_moves_the_window() {
        let mut s = state(20, 0);
        handle_key(&mut s, press(KeyCode::End));
        settle(&mut s);
        assert_eq!(s.indicator.cursor().current(), 19);
        assert_eq!(s.indicator.cursor().stable_zone(), (17, 19));
    }

    #[test]
    fn clicking_a_dot_navigates() {
        let mut s = state(20, 0);
        // 80 columns -> 160 units; seven 10-unit slots start at x = 45.
        // Column 39 covers x = 79, slot 3, which holds page 1.
        click(&mut s, 39, 20);
        assert_eq!(s.pager.current_index(), 1);
        settle(&mut s);
        assert_eq!(s.indicator.cursor().current(), 1);
    }

    #[test]
    fn clicks_are_ignored_when_navigation_is_off() {
        let mut s = state(20, 0);
        handle_key(&mut s, press(KeyCode::Char('t')));
        assert!(s.status_message.is_some());
        click(&mut s, 39, 20);
        assert_eq!(s.pager.current_index(), 0);
    }

    #[test]
    fn release_outside_the_indicator_cancels_the_tap() {
        let mut s = state(20, 0);
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 39, 20));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 39, 5));
        assert_eq!(s.pager.current_index(), 0);
    }

    #[test]
    fn dragging_pages_flings_to_neighbour() {
        let mut s = state(20, 0);
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 40, 5));
        assert_eq!(s.pager.scroll_state(), ScrollState::Dragging);
        handle_mouse(&mut s, mouse(MouseEventKind::Drag(MouseButton::Left), 20, 5));
        assert_eq!(s.pager.position(), 0.25);
        assert_eq!(s.indicator.cursor().progress_ms(), 75);
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 20, 5));
        settle(&mut s);
        assert_eq!(s.pager.current_index(), 1);
        assert_eq!(s.indicator.cursor().current(), 1);
        assert_eq!(s.indicator.cursor().progress_ms(), 0);
    }

    #[test]
    fn quit_binding_and_ctrl_c() {
        let mut s = state(5, 0);
        handle_key(&mut s, press(KeyCode::Char('q')));
        assert!(s.should_quit);

        let mut s = state(5, 0);
        handle_key(
            &mut s,
            KeyEvent {
                modifiers: KeyModifiers::CONTROL,
                ..press(KeyCode::Char('c'))
            },
        );
        assert!(s.should_quit);
    }
}
