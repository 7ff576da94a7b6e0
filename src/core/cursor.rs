//! Viewport/cursor model: which logical pages occupy the visible dot slots,
//! and how far the current page transition has progressed.
//!
//! Slots and pages are related by a single integer `bias`:
//! `slot = page + bias`.  Slots `[CURSOR_START, cursor_end]` form the stable
//! zone where dots are drawn full size; the two slots on either side taper.
//! The window only moves when the selection would leave the stable zone,
//! and then by exactly the overshoot (clamped follow).

use super::options::MIN_SCROLLING_DOT_COUNT;
use super::pager::ScrollState;

/// First slot of the stable zone.
pub const CURSOR_START: isize = 2;
/// Tapering slots on each side of the stable zone.
pub const TAPER_SLOTS: isize = 2;

/// Where the indicator is in a gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Scroll progress is tracking a pager offset.
    Scrolling,
    /// The scroll landed on a page inside a reported gesture; waits for Idle.
    Settled,
}

/// Window position while a transition is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    /// Fractional bias used to place dots this frame.
    pub bias: f32,
    /// Slots the window moves across the scroll pair (`-1`, `0` or `1`).
    pub shift: isize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorModel {
    /// Slot count asked for by the options, before binding adjusts it.
    requested_dot_count: usize,
    dot_count: usize,
    total_count: usize,
    scrollable: bool,
    bias: isize,
    current: usize,
    /// Travel is toward lower pages.
    reverse: bool,
    /// Last reported fractional pager position, for the travel direction.
    last_position: f32,
    /// The pager reported Dragging or Settling and has not gone Idle yet.
    gesture_active: bool,
    /// Lower page of the pair being scrolled between.
    scroll_from: usize,
    progress_ms: u64,
    duration_ms: u64,
    phase: Phase,
}

impl CursorModel {
    pub fn new(dot_count: usize, duration_ms: u64) -> Self {
        Self {
            requested_dot_count: dot_count,
            dot_count,
            total_count: 0,
            scrollable: false,
            bias: 0,
            current: 0,
            reverse: false,
            last_position: 0.0,
            gesture_active: false,
            scroll_from: 0,
            progress_ms: 0,
            duration_ms: duration_ms.max(1),
            phase: Phase::Idle,
        }
    }

    /// Attach to a pager with `total` pages currently showing `current`.
    ///
    /// A pager without pages leaves the model unbound: nothing is drawn and
    /// every later event is ignored.
    pub fn bind(&mut self, total: usize, current: usize) {
        self.phase = Phase::Idle;
        self.gesture_active = false;
        self.progress_ms = 0;
        self.reverse = false;
        self.last_position = 0.0;
        self.total_count = total;
        if total == 0 {
            tracing::debug!("bind: pager has no pages, indicator stays empty");
            self.dot_count = 0;
            self.scrollable = false;
            self.bias = 0;
            self.current = 0;
            self.scroll_from = 0;
            return;
        }

        self.current = current.min(total - 1);
        self.scroll_from = self.current;
        self.last_position = self.current as f32;

        let dot_count = self.requested_dot_count.max(MIN_SCROLLING_DOT_COUNT);
        self.scrollable = total > self.requested_dot_count && total > dot_count;
        if self.scrollable {
            self.dot_count = dot_count;
            self.bias = CURSOR_START;
            self.bias = self.follow(self.bias, self.current);
        } else {
            self.dot_count = total;
            self.bias = 0;
        }
        tracing::debug!(
            total,
            current = self.current,
            dot_count = self.dot_count,
            scrollable = self.scrollable,
            bias = self.bias,
            "indicator bound"
        );
    }

    // ── derived frame ───────────────────────────────────────────

    pub fn is_bound(&self) -> bool {
        self.total_count > 0
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn bias(&self) -> isize {
        self.bias
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scroll_from(&self) -> usize {
        self.scroll_from
    }

    pub fn progress_ms(&self) -> u64 {
        self.progress_ms
    }

    /// Linear travel fraction in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.progress_ms() as f32 / self.duration_ms as f32
    }

    pub fn cursor_start(&self) -> isize {
        CURSOR_START
    }

    pub fn cursor_end(&self) -> isize {
        self.dot_count as isize - 1 - TAPER_SLOTS
    }

    /// Inclusive page range currently drawn full size.
    pub fn stable_zone(&self) -> (isize, isize) {
        (self.cursor_start() - self.bias, self.cursor_end() - self.bias)
    }

    /// Page drawn nearest to `slot` at eased travel `travel`, if that slot
    /// holds a real page.  At rest this is `slot - bias`; mid-slide it
    /// follows the window as drawn.
    pub fn page_at_slot(&self, slot: usize, travel: f32) -> Option<usize> {
        let page = (slot as f32 - self.slide(travel).bias).round() as isize;
        (page >= 0 && (page as usize) < self.total_count).then_some(page as usize)
    }

    /// Is a pager gesture in flight?  Window moves wait until it ends.
    fn defers_window(&self) -> bool {
        self.gesture_active || self.phase == Phase::Scrolling
    }

    /// Bias that keeps `page` inside the stable zone, moving `bias` by the
    /// smallest amount that does so.
    pub fn follow(&self, bias: isize, page: usize) -> isize {
        if !self.scrollable {
            return 0;
        }
        let page = page as isize;
        if page > self.cursor_end() - bias {
            self.cursor_end() - page
        } else if page < self.cursor_start() - bias {
            self.cursor_start() - page
        } else {
            bias
        }
    }

    /// Window placement for the current frame given the eased travel
    /// fraction.  Outside a gesture this is just the committed bias.
    pub fn slide(&self, travel: f32) -> Slide {
        if self.phase != Phase::Scrolling || !self.scrollable {
            return Slide {
                bias: self.bias as f32,
                shift: 0,
            };
        }
        let low = self.follow(self.bias, self.scroll_from);
        let high = if self.scroll_from + 1 < self.total_count {
            self.follow(self.bias, self.scroll_from + 1)
        } else {
            low
        };
        let offset = if self.reverse { 1.0 - travel } else { travel };
        Slide {
            bias: low as f32 + (high - low) as f32 * offset,
            shift: high - low,
        }
    }

    // ── event handling ──────────────────────────────────────────

    /// Select `index`.  Returns `true` when the window moved.
    ///
    /// Outside a gesture the window is re-centred immediately.  While the
    /// pager is scrolling or reports Dragging/Settling, only the selection
    /// changes; the window catches up when the scroll settles so the drawn
    /// window never jumps mid-swipe.
    pub fn on_selection_changed(&mut self, index: usize) -> bool {
        if index >= self.total_count {
            tracing::debug!(index, total = self.total_count, "ignoring out-of-range selection");
            return false;
        }
        self.current = index;
        if self.defers_window() {
            return false;
        }
        self.recenter(index)
    }

    /// Track pager scroll: `from` is the page being left, `offset` the
    /// fraction of a page scrolled past it.
    pub fn on_scroll_progress(&mut self, from: usize, offset: f32) {
        if !self.is_bound() || from >= self.total_count || offset.is_nan() {
            return;
        }
        if offset <= 0.0 {
            self.settle(from);
            return;
        }
        if offset >= 1.0 {
            self.settle((from + 1).min(self.total_count - 1));
            return;
        }

        self.phase = Phase::Scrolling;
        self.scroll_from = from;
        let position = from as f32 + offset;
        if position != self.last_position {
            self.reverse = position < self.last_position;
        }
        self.last_position = position;
        let travel = if self.reverse { 1.0 - offset } else { offset };
        self.progress_ms = (self.duration_ms as f32 * travel).round() as u64;
        tracing::trace!(
            from,
            offset,
            reverse = self.reverse,
            progress_ms = self.progress_ms,
            "scroll progress"
        );
    }

    pub fn on_scroll_state(&mut self, state: ScrollState) {
        if !self.is_bound() {
            return;
        }
        match state {
            ScrollState::Dragging | ScrollState::Settling => {
                self.gesture_active = true;
                if self.phase == Phase::Idle {
                    self.phase = Phase::Settled;
                }
            }
            ScrollState::Idle => {
                self.gesture_active = false;
                self.phase = Phase::Idle;
                self.progress_ms = 0;
                let current = self.current;
                self.recenter(current);
            }
        }
    }

    /// The scroll came to rest exactly on `page`: treat it as selected and
    /// commit the window.  Without a Dragging/Settling report from the
    /// pager there is no gesture left to wait for, so the model goes Idle.
    fn settle(&mut self, page: usize) {
        self.current = page;
        self.scroll_from = page;
        self.last_position = page as f32;
        self.progress_ms = 0;
        self.reverse = false;
        self.phase = if self.gesture_active {
            Phase::Settled
        } else {
            Phase::Idle
        };
        self.recenter(page);
    }

    fn recenter(&mut self, page: usize) -> bool {
        let bias = self.follow(self.bias, page);
        if bias == self.bias {
            return false;
        }
        self.bias = bias;
        tracing::debug!(page, bias, zone = ?self.stable_zone(), "window re-biased");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(dot_count: usize, total: usize, current: usize) -> CursorModel {
        let mut m = CursorModel::new(dot_count, 300);
        m.bind(total, current);
        m
    }

    #[test]
    fn bind_scrollable_at_first_page() {
        let m = bound(7, 20, 0);
        assert!(m.is_scrollable());
        assert_eq!(m.dot_count(), 7);
        assert_eq!(m.bias(), 2);
        assert_eq!((m.cursor_start(), m.cursor_end()), (2, 4));
        assert_eq!(m.stable_zone(), (0, 2));
        assert_eq!(m.page_at_slot(0, 0.0), None);
        assert_eq!(m.page_at_slot(2, 0.0), Some(0));
        assert_eq!(m.page_at_slot(6, 0.0), Some(4));
    }

    #[test]
    fn bind_small_pager_clamps_dot_count() {
        let m = bound(7, 5, 3);
        assert!(!m.is_scrollable());
        assert_eq!(m.dot_count(), 5);
        assert_eq!(m.bias(), 0);
        assert_eq!(m.current(), 3);
    }

    #[test]
    fn bind_raises_small_windows_to_five() {
        let m = bound(3, 12, 0);
        assert!(m.is_scrollable());
        assert_eq!(m.dot_count(), 5);
        assert_eq!(m.stable_zone(), (0, 0));
    }

    #[test]
    fn bind_without_room_for_a_raised_window_stays_flat() {
        let m = bound(3, 4, 1);
        assert!(!m.is_scrollable());
        assert_eq!(m.dot_count(), 4);
    }

    #[test]
    fn bind_aligns_window_with_current_page() {
        let m = bound(7, 20, 10);
        let (lo, hi) = m.stable_zone();
        assert!(lo <= 10 && 10 <= hi);
        assert_eq!(m.bias(), -6);
    }

    #[test]
    fn bind_clamps_current_index() {
        let m = bound(7, 20, 99);
        assert_eq!(m.current(), 19);
    }

    #[test]
    fn bind_to_empty_pager_is_inert() {
        let mut m = bound(7, 0, 0);
        assert!(!m.is_bound());
        assert_eq!(m.dot_count(), 0);
        assert!(!m.on_selection_changed(0));
        m.on_scroll_progress(0, 0.5);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn selection_inside_zone_never_moves_window() {
        for start in 0..20 {
            let mut m = bound(7, 20, start);
            let bias = m.bias();
            let (lo, hi) = m.stable_zone();
            for page in lo.max(0)..=hi.min(19) {
                assert!(!m.on_selection_changed(page as usize));
                assert_eq!(m.bias(), bias);
            }
        }
    }

    #[test]
    fn selection_outside_zone_shifts_by_exact_overshoot() {
        for start in 0..20 {
            for target in 0..20 {
                let mut m = bound(7, 20, start);
                let (lo, hi) = m.stable_zone();
                let before = m.bias();
                m.on_selection_changed(target);
                let t = target as isize;
                let overshoot = if t > hi {
                    t - hi
                } else if t < lo {
                    t - lo
                } else {
                    0
                };
                assert_eq!(before - m.bias(), overshoot, "start {start} target {target}");
                let (lo, hi) = m.stable_zone();
                assert!(lo <= t && t <= hi);
            }
        }
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut m = bound(7, 20, 4);
        assert!(!m.on_selection_changed(20));
        assert_eq!(m.current(), 4);
    }

    #[test]
    fn flat_indicator_never_biases() {
        let mut m = bound(7, 5, 0);
        for page in 0..5 {
            m.on_selection_changed(page);
            assert_eq!(m.bias(), 0);
        }
    }

    #[test]
    fn forward_scroll_maps_offset_to_progress() {
        let mut m = bound(7, 20, 3);
        m.on_scroll_progress(3, 0.25);
        assert_eq!(m.phase(), Phase::Scrolling);
        assert!(!m.is_reverse());
        assert_eq!(m.progress_ms(), 75);
    }

    #[test]
    fn reverse_scroll_runs_progress_in_travel_direction() {
        let mut m = bound(7, 20, 3);
        m.on_scroll_progress(2, 0.75);
        assert!(m.is_reverse());
        assert_eq!(m.progress_ms(), 75);
        m.on_scroll_progress(2, 0.25);
        assert_eq!(m.progress_ms(), 225);
    }

    #[test]
    fn zero_offset_settles_as_selection() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_progress(2, 0.6);
        m.on_scroll_progress(3, 0.0);
        assert_eq!(m.current(), 3);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.progress_ms(), 0);
        assert_eq!(m.stable_zone(), (1, 3));
    }

    #[test]
    fn scroll_round_trip_matches_direct_selection() {
        for k in 0..19 {
            let mut scrolled = bound(7, 20, k);
            scrolled.on_scroll_progress(k, 0.0);
            scrolled.on_scroll_progress(k, 1.0);
            scrolled.on_selection_changed(k + 1);
            scrolled.on_scroll_state(ScrollState::Idle);

            let mut direct = bound(7, 20, k);
            direct.on_selection_changed(k + 1);

            assert_eq!(scrolled.bias(), direct.bias(), "k = {k}");
            assert_eq!(scrolled.current(), direct.current());
            assert_eq!(scrolled.phase(), Phase::Idle);
        }
    }

    #[test]
    fn selection_mid_gesture_defers_window_until_idle() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_state(ScrollState::Dragging);
        m.on_scroll_progress(2, 0.4);
        m.on_selection_changed(3);
        assert_eq!(m.current(), 3);
        assert_eq!(m.bias(), 2);
        m.on_scroll_state(ScrollState::Idle);
        assert_eq!(m.bias(), 1);
        assert_eq!(m.progress_ms(), 0);
    }

    #[test]
    fn slide_interpolates_across_a_shifting_pair() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_progress(2, 0.25);
        let s = m.slide(m.fraction());
        assert_eq!(s.shift, -1);
        assert!((s.bias - 1.75).abs() < 1e-4);
    }

    #[test]
    fn slide_is_pinned_inside_the_zone() {
        let mut m = bound(7, 20, 0);
        m.on_scroll_progress(0, 0.5);
        let s = m.slide(m.fraction());
        assert_eq!(s.shift, 0);
        assert_eq!(s.bias, 2.0);
    }

    #[test]
    fn slide_stays_continuous_when_selection_lands_mid_swipe() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_state(ScrollState::Dragging);
        m.on_scroll_progress(2, 0.7);
        let before = m.slide(m.fraction()).bias;
        m.on_selection_changed(3);
        m.on_scroll_progress(2, 0.7);
        let after = m.slide(m.fraction()).bias;
        assert!(!m.is_reverse());
        assert!((before - after).abs() < 1e-2);
    }

    #[test]
    fn selection_after_unannounced_settle_recentres() {
        // Pager that only reports scroll offsets and selections.
        let mut m = bound(7, 20, 2);
        m.on_scroll_progress(2, 0.5);
        m.on_scroll_progress(3, 0.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.on_selection_changed(10));
        let (lo, hi) = m.stable_zone();
        assert!(lo <= 10 && 10 <= hi, "zone ({lo}, {hi})");
    }

    #[test]
    fn settle_inside_a_reported_gesture_waits_for_idle() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_state(ScrollState::Settling);
        m.on_scroll_progress(2, 0.5);
        m.on_scroll_progress(3, 0.0);
        assert_eq!(m.phase(), Phase::Settled);
        assert!(!m.on_selection_changed(10));
        m.on_scroll_state(ScrollState::Idle);
        let (lo, hi) = m.stable_zone();
        assert!(lo <= 10 && 10 <= hi);
    }

    #[test]
    fn direction_follows_travel_not_destination() {
        // Animated jump 0 -> 2: the selection lands first, then the frames.
        let mut m = bound(7, 20, 0);
        m.on_scroll_state(ScrollState::Settling);
        m.on_selection_changed(2);
        m.on_scroll_progress(0, 0.5);
        assert!(!m.is_reverse());
        m.on_scroll_progress(1, 0.5);
        assert!(!m.is_reverse());

        // Jump 5 -> 3 travels toward lower pages throughout.
        let mut m = bound(7, 20, 5);
        m.on_scroll_state(ScrollState::Settling);
        m.on_selection_changed(3);
        m.on_scroll_progress(4, 0.6);
        assert!(m.is_reverse());
        m.on_scroll_progress(3, 0.4);
        assert!(m.is_reverse());
    }

    #[test]
    fn taps_mid_slide_resolve_against_the_drawn_window() {
        let mut m = bound(7, 20, 2);
        m.on_scroll_state(ScrollState::Dragging);
        m.on_scroll_progress(2, 0.75);
        // Window drawn at bias 1.25: slot 4 shows page 2.75, nearest page 3.
        let travel = m.fraction();
        assert_eq!(m.page_at_slot(4, travel), Some(3));
        assert_eq!(m.page_at_slot(4, 0.0), Some(2));
    }
}
