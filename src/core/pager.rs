//! The pager collaborator: anything that presents linearly-indexed pages and
//! reports scroll and selection changes.
//!
//! The indicator never owns a pager.  The host binds the indicator to one,
//! forwards the pager's [`PagerEvent`]s to the indicator's
//! [`PageChangeListener`] implementation, and applies the navigation
//! commands the indicator hands back.

use thiserror::Error;

/// Scroll state reported by a pager, mirroring a drag/settle lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    /// The user is dragging the pages.
    Dragging,
    /// The pager is animating toward a final position.
    Settling,
}

/// One notification from a pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerEvent {
    ScrollStateChanged(ScrollState),
    /// `position` is the page the viewport is leaving, `offset` the fraction
    /// of a page scrolled past it (in `[0, 1)`), `offset_px` the same in
    /// pixels.
    Scrolled {
        position: usize,
        offset: f32,
        offset_px: i32,
    },
    Selected(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagerError {
    #[error("page {index} is out of range (pager has {count} pages)")]
    OutOfRange { index: usize, count: usize },
}

/// Read/write access to a pager.
pub trait Pager {
    fn page_count(&self) -> usize;
    fn current_index(&self) -> usize;
    /// Move to `index`, optionally animating the scroll.
    fn set_current_index(&mut self, index: usize, animated: bool) -> Result<(), PagerError>;
}

/// Callbacks a pager delivers to its listeners.
pub trait PageChangeListener {
    fn on_page_scroll_state_changed(&mut self, state: ScrollState);
    fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: i32);
    fn on_page_selected(&mut self, position: usize);

    /// Route one event to the matching callback.
    fn dispatch(&mut self, event: PagerEvent) {
        match event {
            PagerEvent::ScrollStateChanged(state) => self.on_page_scroll_state_changed(state),
            PagerEvent::Scrolled {
                position,
                offset,
                offset_px,
            } => self.on_page_scrolled(position, offset, offset_px),
            PagerEvent::Selected(position) => self.on_page_selected(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl PageChangeListener for Recorder {
        fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
            self.log.push(format!("state {state:?}"));
        }
        fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: i32) {
            self.log.push(format!("scrolled {position} {offset} {offset_px}"));
        }
        fn on_page_selected(&mut self, position: usize) {
            self.log.push(format!("selected {position}"));
        }
    }

    #[test]
    fn dispatch_routes_each_event_kind() {
        let mut r = Recorder::default();
        r.dispatch(PagerEvent::ScrollStateChanged(ScrollState::Settling));
        r.dispatch(PagerEvent::Selected(3));
        r.dispatch(PagerEvent::Scrolled {
            position: 2,
            offset: 0.5,
            offset_px: 40,
        });
        assert_eq!(
            r.log,
            vec!["state Settling", "selected 3", "scrolled 2 0.5 40"]
        );
    }

    #[test]
    fn out_of_range_error_names_the_page() {
        let err = PagerError::OutOfRange { index: 9, count: 4 };
        assert_eq!(err.to_string(), "page 9 is out of range (pager has 4 pages)");
    }
}
