//! Styling inputs for the indicator.
//!
//! Options are plain data; [`IndicatorOptions::normalized`] repairs values
//! that would break the geometry instead of rejecting them.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::color::Rgb;

/// Visible slot count used when nothing else is configured.
pub const DEFAULT_DOT_COUNT: usize = 7;
/// Smallest window that still has two tapering slots per side plus one
/// stable slot.
pub const MIN_SCROLLING_DOT_COUNT: usize = 5;
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Shaping applied to the travel fraction before geometry and colour use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Slow start and end, fast middle: `cos((t + 1)π) / 2 + 0.5`.
    AccelerateDecelerate,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }

    pub fn config_key(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::AccelerateDecelerate => "accelerate_decelerate",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Easing::Linear),
            "accelerate_decelerate" | "ease_in_out" => Ok(Easing::AccelerateDecelerate),
            other => Err(format!("unknown easing {other:?}")),
        }
    }
}

/// Space reserved around the dot row, in indicator units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub start: f32,
    pub end: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn horizontal(&self) -> f32 {
        self.start + self.end
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// The indicator's configuration surface.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOptions {
    /// Visible slot count.
    pub dot_count: usize,
    /// Diameter of a full-size dot.
    pub dot_size: f32,
    /// Centre-to-centre spacing.  Must exceed `dot_size`.
    pub dot_space: f32,
    pub color_default: Rgb,
    pub color_selected: Rgb,
    pub animation_duration_ms: u64,
    /// Gates tap-to-navigate.
    pub page_navigation_enabled: bool,
    pub easing: Easing,
    pub padding: Padding,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            dot_count: DEFAULT_DOT_COUNT,
            dot_size: 6.0,
            dot_space: 10.0,
            color_default: Rgb::GRAY,
            color_selected: Rgb::BLUE,
            animation_duration_ms: DEFAULT_ANIMATION_MS,
            page_navigation_enabled: true,
            easing: Easing::Linear,
            padding: Padding::default(),
        }
    }
}

impl IndicatorOptions {
    /// Repair values the geometry cannot work with.
    pub fn normalized(mut self) -> Self {
        if !(self.dot_size.is_finite() && self.dot_size > 0.0) {
            tracing::warn!("dot_size {} is not positive, using default", self.dot_size);
            self.dot_size = IndicatorOptions::default().dot_size;
        }
        if !self.dot_space.is_finite() || self.dot_space <= self.dot_size {
            let forced = 1.5 * self.dot_size;
            tracing::warn!(
                "dot_space {} must exceed dot_size {}, forcing {}",
                self.dot_space,
                self.dot_size,
                forced
            );
            self.dot_space = forced;
        }
        if self.dot_count == 0 {
            tracing::warn!("dot_count 0 is meaningless, using {}", DEFAULT_DOT_COUNT);
            self.dot_count = DEFAULT_DOT_COUNT;
        }
        if self.animation_duration_ms == 0 {
            tracing::warn!("animation duration 0ms, using {}", DEFAULT_ANIMATION_MS);
            self.animation_duration_ms = DEFAULT_ANIMATION_MS;
        }
        let p = &mut self.padding;
        for side in [&mut p.start, &mut p.end, &mut p.top, &mut p.bottom] {
            if !side.is_finite() || *side < 0.0 {
                *side = 0.0;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowded_spacing_is_forced_to_one_and_a_half_dots() {
        let opts = IndicatorOptions {
            dot_size: 8.0,
            dot_space: 8.0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(opts.dot_space, 12.0);
    }

    #[test]
    fn valid_options_are_untouched() {
        let opts = IndicatorOptions::default();
        assert_eq!(opts.clone().normalized(), opts);
    }

    #[test]
    fn zero_counts_and_negative_padding_are_repaired() {
        let opts = IndicatorOptions {
            dot_count: 0,
            animation_duration_ms: 0,
            padding: Padding {
                start: -2.0,
                end: 1.0,
                top: f32::NAN,
                bottom: 3.0,
            },
            ..Default::default()
        }
        .normalized();
        assert_eq!(opts.dot_count, DEFAULT_DOT_COUNT);
        assert_eq!(opts.animation_duration_ms, DEFAULT_ANIMATION_MS);
        assert_eq!(opts.padding.start, 0.0);
        assert_eq!(opts.padding.top, 0.0);
        assert_eq!(opts.padding.horizontal(), 1.0);
        assert_eq!(opts.padding.vertical(), 3.0);
    }

    #[test]
    fn easing_curves_pin_their_endpoints() {
        for e in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert!(e.apply(0.0).abs() < 1e-6);
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!((Easing::AccelerateDecelerate.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::AccelerateDecelerate.apply(0.1) < 0.1);
    }

    #[test]
    fn easing_parses_config_names() {
        assert_eq!("linear".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "Accelerate-Decelerate".parse::<Easing>(),
            Ok(Easing::AccelerateDecelerate)
        );
        assert!("bounce".parse::<Easing>().is_err());
    }
}
