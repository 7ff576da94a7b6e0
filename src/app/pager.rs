//! Demo pager: a strip of coloured pages that can be dragged, flung to a
//! neighbour, or animated to any index.
//!
//! It reports what it does as [`PagerEvent`]s in the order a touch pager
//! would: scroll-state change, then selection, then scroll frames, then the
//! return to idle.  The host drains them and forwards them to listeners.

use crate::core::color::Rgb;
use crate::core::pager::{Pager, PagerError, PagerEvent, ScrollState};
use crate::ui::smooth_scroll::SmoothScroll;

/// Drag distance (in pages) past which releasing moves to the neighbour.
const FLING_THRESHOLD: f64 = 0.2;

/// Rainbow palette the demo pages cycle through.
const PALETTE: &[(&str, Rgb)] = &[
    ("Red", Rgb::new(0xf4, 0x43, 0x36)),
    ("Orange", Rgb::new(0xff, 0x98, 0x00)),
    ("Yellow", Rgb::new(0xff, 0xeb, 0x3b)),
    ("Green", Rgb::new(0x4c, 0xaf, 0x50)),
    ("Blue", Rgb::new(0x21, 0x96, 0xf3)),
    ("Indigo", Rgb::new(0x3f, 0x51, 0xb5)),
    ("Violet", Rgb::new(0x9c, 0x27, 0xb0)),
    ("White", Rgb::new(0xfa, 0xfa, 0xfa)),
    ("Grey", Rgb::new(0x9e, 0x9e, 0x9e)),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub color: Rgb,
}

#[derive(Debug)]
pub struct DemoPager {
    pages: Vec<Page>,
    current: usize,
    scroll: SmoothScroll,
    state: ScrollState,
    /// Position when the current drag started.
    drag_origin: Option<f64>,
    /// Width of one page on screen, for pixel offsets.
    page_width: i32,
    events: Vec<PagerEvent>,
}

impl DemoPager {
    pub fn new(count: usize, start: usize, speed: f64) -> Self {
        let pages: Vec<Page> = (0..count)
            .map(|i| {
                let (name, color) = PALETTE[i % PALETTE.len()];
                Page {
                    title: format!("{name} · page {}", i + 1),
                    color,
                }
            })
            .collect();
        let current = start.min(count.saturating_sub(1));
        Self {
            pages,
            current,
            scroll: SmoothScroll::new(current, speed),
            state: ScrollState::Idle,
            drag_origin: None,
            page_width: 1,
            events: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Fractional scroll position in pages.
    pub fn position(&self) -> f64 {
        self.scroll.position()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    pub fn set_page_width(&mut self, width: u16) {
        self.page_width = i32::from(width.max(1));
    }

    /// Hand over everything reported since the last drain.
    pub fn drain_events(&mut self) -> Vec<PagerEvent> {
        std::mem::take(&mut self.events)
    }

    // ── dragging ────────────────────────────────────────────────

    pub fn begin_drag(&mut self) {
        if self.pages.is_empty() {
            return;
        }
        let here = self.scroll.position();
        self.scroll.jump_to(here);
        self.drag_origin = Some(here);
        self.set_state(ScrollState::Dragging);
    }

    /// Move the strip by `delta` pages (positive = toward later pages).
    pub fn drag_by(&mut self, delta: f64) {
        if self.drag_origin.is_none() {
            return;
        }
        let last = self.last_index() as f64;
        let pos = (self.scroll.position() + delta).clamp(0.0, last);
        self.scroll.jump_to(pos);
        self.emit_scrolled();
    }

    /// Release: snap to the neighbour in the drag direction once the drag
    /// passed the fling threshold, otherwise to the nearest page.
    pub fn end_drag(&mut self) {
        let Some(origin) = self.drag_origin.take() else {
            return;
        };
        let pos = self.scroll.position();
        let target = if pos > origin + FLING_THRESHOLD {
            pos.ceil()
        } else if pos < origin - FLING_THRESHOLD {
            pos.floor()
        } else {
            pos.round()
        };
        let target = (target.max(0.0) as usize).min(self.last_index());

        self.set_state(ScrollState::Settling);
        if target != self.current {
            self.current = target;
            self.events.push(PagerEvent::Selected(target));
        }
        self.scroll.set_target(target);
        if !self.scroll.is_animating() {
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
        }
    }

    // ── animation ───────────────────────────────────────────────

    /// Advance the settle animation by one frame.
    pub fn tick(&mut self) {
        if self.state != ScrollState::Settling {
            return;
        }
        self.scroll.tick();
        self.emit_scrolled();
        if !self.scroll.is_animating() {
            self.set_state(ScrollState::Idle);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_state() == ScrollState::Settling
    }

    fn last_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state != state {
            self.state = state;
            self.events.push(PagerEvent::ScrollStateChanged(state));
        }
    }

    fn emit_scrolled(&mut self) {
        let pos = self.scroll.position();
        let mut position = pos.floor().max(0.0) as usize;
        let mut offset = (pos - pos.floor()) as f32;
        if position >= self.last_index() {
            position = self.last_index();
            offset = 0.0;
        }
        let offset_px = (offset * self.page_width as f32).round() as i32;
        self.events.push(PagerEvent::Scrolled {
            position,
            offset,
            offset_px,
        });
    }
}

impl Pager for DemoPager {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn set_current_index(&mut self, index: usize, animated: bool) -> Result<(), PagerError> {
        if index >= self.pages.len() {
            return Err(PagerError::OutOfRange {
                index,
                count: self.pages.len(),
            });
        }
        if index == self.current && !self.scroll.is_animating() {
            return Ok(());
        }
        self.drag_origin = None;
        if animated {
            self.set_state(ScrollState::Settling);
            self.current = index;
            self.events.push(PagerEvent::Selected(index));
            self.scroll.set_target(index);
        } else {
            self.current = index;
            self.scroll.jump_to(index as f64);
            self.events.push(PagerEvent::Selected(index));
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
        }
        Ok(())
    }
}
