//! Layout math: measuring the indicator, caching slot centres, the taper
//! law, and the hit intervals used for taps.

use super::options::{IndicatorOptions, Padding};

/// Size constraint handed down by the layout host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host dictates the size.
    Exactly(f32),
    /// Take what the content needs, up to this much.
    AtMost(f32),
    /// No constraint; report the content size.
    Unspecified,
}

impl MeasureSpec {
    fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(limit) => desired.min(limit),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Desired `(width, height)` for `dot_count` slots: `dot_count × dot_space`
/// by `dot_space` plus padding, subject to the constraints.
pub fn measure(
    options: &IndicatorOptions,
    dot_count: usize,
    width: MeasureSpec,
    height: MeasureSpec,
) -> (f32, f32) {
    let content_w = dot_count as f32 * options.dot_space + options.padding.horizontal();
    let content_h = options.dot_space + options.padding.vertical();
    (width.resolve(content_w), height.resolve(content_h))
}

/// Fraction of full radius for a dot centred at fractional slot `slot`.
///
/// Full size inside `[cursor_start, cursor_end]`, falling linearly to zero
/// at the outer edge of the window (half a slot beyond slot `0` and slot
/// `dot_count - 1`).
pub fn taper(slot: f32, cursor_start: isize, cursor_end: isize, dot_count: usize) -> f32 {
    let centre = slot + 0.5;
    let start = cursor_start as f32 + 0.5;
    let end = cursor_end as f32 + 0.5;
    let edge = dot_count as f32;
    let ratio = if centre < start {
        centre / start
    } else if centre > end {
        (edge - centre) / (edge - end)
    } else {
        1.0
    };
    ratio.clamp(0.0, 1.0)
}

/// Cached layout of the dot row.
#[derive(Debug, Clone)]
pub struct Geometry {
    dot_space: f32,
    padding: Padding,
    width: f32,
    height: f32,
    dot_count: usize,
    coordinates: Vec<f32>,
    calculated: bool,
}

impl Geometry {
    pub fn new(options: &IndicatorOptions) -> Self {
        Self {
            dot_space: options.dot_space,
            padding: options.padding,
            width: 0.0,
            height: 0.0,
            dot_count: 0,
            coordinates: Vec::new(),
            calculated: false,
        }
    }

    /// Record the laid-out size.  Invalidates the cache when it changed.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.calculated = false;
        }
    }

    pub fn set_dot_count(&mut self, dot_count: usize) {
        if dot_count != self.dot_count {
            self.dot_count = dot_count;
            self.calculated = false;
        }
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    /// Recompute slot centres if size or slot count changed.
    pub fn ensure_calculated(&mut self) {
        if self.calculated {
            return;
        }
        let origin = self.origin();
        self.coordinates = (0..self.dot_count)
            .map(|i| origin + (i as f32 + 0.5) * self.dot_space)
            .collect();
        self.calculated = true;
    }

    /// Left edge of the dot row: the content is centred inside the padded
    /// width.
    fn origin(&self) -> f32 {
        let available = self.width - self.padding.horizontal();
        let content = self.dot_count as f32 * self.dot_space;
        self.padding.start + (available - content) / 2.0
    }

    pub fn coordinates(&self) -> &[f32] {
        &self.coordinates
    }

    pub fn dot_space(&self) -> f32 {
        self.dot_space
    }

    pub fn center_y(&self) -> f32 {
        self.padding.top + (self.height - self.padding.vertical()) / 2.0
    }

    /// X of a dot sitting at fractional slot `slot`.  Slots `-1` and
    /// `dot_count` sit one spacing outside the cached ends.
    pub fn slot_x(&self, slot: f32) -> f32 {
        let base = slot.floor();
        let frac = slot - base;
        let base = base as isize;
        let n = self.coordinates.len() as isize;
        let base_x = if (0..n).contains(&base) {
            self.coordinates[base as usize]
        } else if base == -1 && n > 0 {
            self.coordinates[0] - self.dot_space
        } else if base == n && n > 0 {
            self.coordinates[(n - 1) as usize] + self.dot_space
        } else {
            self.origin() + (base as f32 + 0.5) * self.dot_space
        };
        base_x + frac * self.dot_space
    }

    /// Hit interval `[x - space/2, x + space/2]` for every slot.
    pub fn touch_ranges(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let half = self.dot_space / 2.0;
        self.coordinates().iter().map(move |&x| (x - half, x + half))
    }

    /// First slot whose hit interval contains `x`.
    pub fn slot_at(&self, x: f32) -> Option<usize> {
        self.touch_ranges()
            .position(|(lo, hi)| (lo..=hi).contains(&x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> IndicatorOptions {
        IndicatorOptions {
            dot_size: 6.0,
            dot_space: 10.0,
            ..Default::default()
        }
    }

    fn laid_out(dot_count: usize, width: f32) -> Geometry {
        let mut g = Geometry::new(&options());
        g.set_dot_count(dot_count);
        g.set_size(width, 10.0);
        g.ensure_calculated();
        g
    }

    #[test]
    fn measure_reports_content_when_unconstrained() {
        let size = measure(&options(), 7, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, (70.0, 10.0));
    }

    #[test]
    fn measure_honours_constraints() {
        let o = options();
        assert_eq!(
            measure(&o, 7, MeasureSpec::Exactly(120.0), MeasureSpec::AtMost(4.0)),
            (120.0, 4.0)
        );
        assert_eq!(
            measure(&o, 7, MeasureSpec::AtMost(500.0), MeasureSpec::Exactly(30.0)),
            (70.0, 30.0)
        );
    }

    #[test]
    fn measure_adds_padding() {
        let o = IndicatorOptions {
            padding: Padding {
                start: 2.0,
                end: 3.0,
                top: 1.0,
                bottom: 1.0,
            },
            ..options()
        };
        let size = measure(&o, 5, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, (55.0, 12.0));
    }

    #[test]
    fn coordinates_are_centred_slots() {
        let g = laid_out(3, 50.0);
        assert_eq!(g.coordinates(), &[15.0, 25.0, 35.0]);
        assert_eq!(g.center_y(), 5.0);
    }

    #[test]
    fn cache_is_invalidated_by_size_and_count_only() {
        let mut g = laid_out(3, 30.0);
        g.set_size(30.0, 10.0);
        assert!(g.is_calculated());
        g.set_size(40.0, 10.0);
        assert!(!g.is_calculated());
        g.ensure_calculated();
        g.set_dot_count(4);
        assert!(!g.is_calculated());
    }

    #[test]
    fn slot_x_extends_one_step_past_each_end() {
        let g = laid_out(3, 30.0);
        assert_eq!(g.slot_x(-1.0), -5.0);
        assert_eq!(g.slot_x(3.0), 35.0);
        assert_eq!(g.slot_x(0.5), 10.0);
    }

    #[test]
    fn taper_is_linear_toward_both_edges() {
        let ratios: Vec<f32> = (-1..=7).map(|s| taper(s as f32, 2, 4, 7)).collect();
        let expected = [0.0, 0.2, 0.6, 1.0, 1.0, 1.0, 0.6, 0.2, 0.0];
        for (got, want) in ratios.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{ratios:?}");
        }
    }

    #[test]
    fn taper_is_continuous_between_slots() {
        assert!((taper(1.5, 2, 4, 7) - 0.8).abs() < 1e-5);
        assert!((taper(5.25, 2, 4, 7) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn touch_ranges_cover_each_slot() {
        let g = laid_out(3, 30.0);
        let ranges: Vec<_> = g.touch_ranges().collect();
        assert_eq!(ranges, vec![(0.0, 10.0), (10.0, 20.0), (20.0, 30.0)]);
        assert_eq!(g.slot_at(14.0), Some(1));
        assert_eq!(g.slot_at(31.0), None);
    }
}
