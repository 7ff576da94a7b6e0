//! Per-frame dot computation.
//!
//! [`compute_frame`] is a pure function of the cursor, the cached geometry
//! and the options.  Colour is decided in the same pass as position and
//! radius; nothing is shared between dots.

use super::color::Rgb;
use super::cursor::{CursorModel, Phase};
use super::geometry::{taper, Geometry};
use super::options::IndicatorOptions;

/// Everything needed to draw one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRecord {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Dots for every page within one slot of the window, in page order.
    /// Dots that have shrunk away carry a zero radius.
    pub dots: Vec<DotRecord>,
    /// How far the window has slid this frame, in indicator units.
    pub move_factor: f32,
}

impl RenderFrame {
    /// Dots with something to draw.
    pub fn visible(&self) -> impl Iterator<Item = &DotRecord> {
        self.dots.iter().filter(|d| d.radius > 0.0)
    }
}

/// Eased travel fraction for the frame being drawn; zero at rest.
pub fn eased_travel(cursor: &CursorModel, options: &IndicatorOptions) -> f32 {
    if cursor.phase() == Phase::Scrolling {
        options.easing.apply(cursor.fraction())
    } else {
        0.0
    }
}

pub fn compute_frame(
    cursor: &CursorModel,
    geometry: &Geometry,
    options: &IndicatorOptions,
) -> RenderFrame {
    if !cursor.is_bound() {
        return RenderFrame::default();
    }

    let travel = eased_travel(cursor, options);

    // While scrolling, colour follows the pair on screen; the selection may
    // already sit at the far end of a multi-page jump.
    let leaving = options.color_selected.lerp(options.color_default, travel);
    let entering = options.color_default.lerp(options.color_selected, travel);
    let (leaving_page, entering_page) = if cursor.phase() == Phase::Scrolling {
        let (low, high) = (cursor.scroll_from(), cursor.scroll_from() + 1);
        if cursor.is_reverse() {
            (high, Some(low))
        } else {
            (low, Some(high))
        }
    } else {
        (cursor.current(), None)
    };

    let slide = cursor.slide(travel);
    let total = cursor.total_count();
    let dot_count = cursor.dot_count();
    let full_radius = options.dot_size / 2.0;
    let y = geometry.center_y();

    // Pages whose slot lands in [-1, dot_count].
    let (first, last) = if cursor.is_scrollable() {
        let first = (-1.0 - slide.bias).ceil().max(0.0) as usize;
        let last = (dot_count as f32 - slide.bias).floor();
        if last < 0.0 {
            return RenderFrame::default();
        }
        (first, (last as usize).min(total - 1))
    } else {
        (0, total - 1)
    };

    let mut dots = Vec::with_capacity(last.saturating_sub(first) + 1);
    for page in first..=last {
        let (slot, radius) = if cursor.is_scrollable() {
            let slot = page as f32 + slide.bias;
            let ratio = taper(slot, cursor.cursor_start(), cursor.cursor_end(), dot_count);
            (slot, full_radius * ratio)
        } else {
            (page as f32, full_radius)
        };

        let color = if page == leaving_page {
            leaving
        } else if entering_page == Some(page) {
            entering
        } else {
            options.color_default
        };

        dots.push(DotRecord {
            page,
            x: geometry.slot_x(slot),
            y,
            radius,
            color,
        });
    }

    RenderFrame {
        dots,
        move_factor: slide.shift.unsigned_abs() as f32 * travel * geometry.dot_space(),
    }
}
