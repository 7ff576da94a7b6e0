//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::indicator::PageIndicator;
use crate::core::pager::PageChangeListener;

use super::pager::DemoPager;

/// What the left mouse button is currently holding on to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseTarget {
    /// Dragging the page strip; remembers the last column seen.
    Pager { last_column: u16 },
    /// Pressed on the indicator; the release decides whether it was a tap.
    Indicator,
}

/// Top-level application state.
pub struct AppState {
    pub pager: DemoPager,
    pub indicator: PageIndicator,
    /// User configuration (bindings, indicator options, swipe speed).
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Last known terminal size, used to map mouse positions to regions.
    pub terminal_area: Rect,
    pub mouse_target: Option<MouseTarget>,
    /// Set by anything that changes what is on screen outside the indicator.
    pub dirty: bool,
}

impl AppState {
    pub fn new(pager: DemoPager, config: AppConfig) -> Self {
        let mut indicator = PageIndicator::new(config.indicator.clone());
        indicator.bind(&pager);
        Self {
            pager,
            indicator,
            config,
            should_quit: false,
            status_message: None,
            terminal_area: Rect::default(),
            mouse_target: None,
            dirty: true,
        }
    }

    /// Forward everything the pager reported to the indicator.  Returns
    /// `true` when there was anything to forward.
    pub fn pump_pager_events(&mut self) -> bool {
        let events = self.pager.drain_events();
        if events.is_empty() {
            return false;
        }
        for event in events {
            tracing::trace!(?event, "pager event");
            self.indicator.dispatch(event);
        }
        self.dirty = true;
        true
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.pager.tick();
        self.pump_pager_events();
    }

    /// Does the next loop iteration need a repaint?
    pub fn take_redraw(&mut self) -> bool {
        let indicator = self.indicator.take_redraw();
        std::mem::take(&mut self.dirty) || indicator
    }
}
