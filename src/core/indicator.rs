//! The page indicator: cursor model, cached geometry and tap tracking
//! behind one handle that a host binds to a pager and draws every frame.

use super::color::Rgb;
use super::cursor::CursorModel;
use super::geometry::{self, Geometry, MeasureSpec};
use super::options::IndicatorOptions;
use super::pager::{PageChangeListener, Pager, ScrollState};
use super::renderer::{compute_frame, eased_travel, RenderFrame};
use super::touch::{NavigateTo, PointerEvent, TouchTracker};

/// Whatever the host paints on.
pub trait DrawSurface {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb);
}

#[derive(Debug, Clone)]
pub struct PageIndicator {
    options: IndicatorOptions,
    cursor: CursorModel,
    geometry: Geometry,
    touch: TouchTracker,
    redraw_pending: bool,
}

impl PageIndicator {
    pub fn new(options: IndicatorOptions) -> Self {
        let options = options.normalized();
        let cursor = CursorModel::new(options.dot_count, options.animation_duration_ms);
        let geometry = Geometry::new(&options);
        Self {
            options,
            cursor,
            geometry,
            touch: TouchTracker::default(),
            redraw_pending: true,
        }
    }

    pub fn options(&self) -> &IndicatorOptions {
        &self.options
    }

    pub fn cursor(&self) -> &CursorModel {
        &self.cursor
    }

    /// Take page count and selection from `pager`.  The host is expected to
    /// forward the pager's events to this indicator from now on.
    pub fn bind<P: Pager + ?Sized>(&mut self, pager: &P) {
        self.cursor.bind(pager.page_count(), pager.current_index());
        self.geometry.set_dot_count(self.cursor.dot_count());
        self.request_redraw();
    }

    pub fn set_page_navigation_enabled(&mut self, enabled: bool) {
        self.options.page_navigation_enabled = enabled;
    }

    // ── layout ──────────────────────────────────────────────────

    /// Desired size for the current slot count under the given constraints.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (f32, f32) {
        let dot_count = if self.cursor.is_bound() {
            self.cursor.dot_count()
        } else {
            self.options.dot_count
        };
        geometry::measure(&self.options, dot_count, width, height)
    }

    /// Final size chosen by the host.
    pub fn layout(&mut self, width: f32, height: f32) {
        self.geometry.set_size(width, height);
        if !self.geometry.is_calculated() {
            self.request_redraw();
        }
    }

    // ── drawing ─────────────────────────────────────────────────

    pub fn frame(&mut self) -> RenderFrame {
        self.geometry.ensure_calculated();
        compute_frame(&self.cursor, &self.geometry, &self.options)
    }

    /// Paint one filled circle per visible dot.  Returns how many were drawn.
    pub fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let frame = self.frame();
        let mut drawn = 0;
        for dot in frame.visible() {
            surface.draw_circle(dot.x, dot.y, dot.radius, dot.color);
            drawn += 1;
        }
        tracing::trace!(
            drawn,
            first = frame.dots.first().map(|d| d.page),
            last = frame.dots.last().map(|d| d.page),
            move_factor = frame.move_factor,
            "indicator frame"
        );
        drawn
    }

    /// Ask for a repaint.  Requests made before the next paint collapse
    /// into one.
    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Consume the pending repaint request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    // ── touch ───────────────────────────────────────────────────

    /// Feed a pointer event.  Returns the page to navigate to when the
    /// event completes a tap on another page's dot.
    pub fn on_touch(&mut self, event: PointerEvent) -> Option<NavigateTo> {
        if !self.options.page_navigation_enabled || !self.cursor.is_bound() {
            return None;
        }
        self.geometry.ensure_calculated();
        let travel = eased_travel(&self.cursor, &self.options);
        self.touch.handle(event, &self.cursor, &self.geometry, travel)
    }

    /// [`on_touch`](Self::on_touch), then ask `pager` to scroll there.
    /// Returns `true` when a navigation was issued.
    pub fn handle_touch<P: Pager + ?Sized>(&mut self, event: PointerEvent, pager: &mut P) -> bool {
        let Some(NavigateTo(page)) = self.on_touch(event) else {
            return false;
        };
        match pager.set_current_index(page, true) {
            Ok(()) => {
                tracing::debug!(page, "indicator tap navigates");
                true
            }
            Err(err) => {
                tracing::debug!("tap navigation dropped: {err}");
                false
            }
        }
    }
}

impl PageChangeListener for PageIndicator {
    fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
        self.cursor.on_scroll_state(state);
        self.request_redraw();
    }

    fn on_page_scrolled(&mut self, position: usize, offset: f32, _offset_px: i32) {
        self.cursor.on_scroll_progress(position, offset);
        self.request_redraw();
    }

    fn on_page_selected(&mut self, position: usize) {
        self.cursor.on_selection_changed(position);
        self.request_redraw();
    }
}
