//! Paints the page indicator into the terminal with braille sub-cells.
//!
//! One indicator unit is one braille dot, so a terminal cell is 2 units
//! wide and 4 units tall.  The indicator is laid out at that resolution and
//! its circles are rasterised onto a Ratatui [`Canvas`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Widget,
    },
};

use crate::core::color::Rgb;
use crate::core::geometry::MeasureSpec;
use crate::core::indicator::{DrawSurface, PageIndicator};

/// Braille dots per cell, horizontally and vertically.
pub const UNITS_PER_COLUMN: u16 = 2;
pub const UNITS_PER_ROW: u16 = 4;

/// Terminal rows the indicator wants for its current configuration.
pub fn indicator_rows(indicator: &PageIndicator) -> u16 {
    let (_, height) = indicator.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    let rows = (height / f32::from(UNITS_PER_ROW)).ceil();
    rows.clamp(1.0, f32::from(u16::MAX)) as u16
}

/// Indicator x (in units) at the middle of terminal column `column`.
pub fn column_to_x(area: Rect, column: u16) -> f32 {
    let units = column.saturating_sub(area.x).saturating_mul(UNITS_PER_COLUMN);
    f32::from(units) + f32::from(UNITS_PER_COLUMN) / 2.0
}

/// Give the indicator the full resolution of `area`.  Returns the grid size
/// in braille dots.
pub fn layout_over(indicator: &mut PageIndicator, area: Rect) -> (u16, u16) {
    let grid_w = area.width.saturating_mul(UNITS_PER_COLUMN);
    let grid_h = area.height.saturating_mul(UNITS_PER_ROW);
    indicator.layout(f32::from(grid_w), f32::from(grid_h));
    (grid_w, grid_h)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Circle {
    x: f32,
    y: f32,
    radius: f32,
    color: Rgb,
}

/// Collects the indicator's circles, then renders them as one canvas.
#[derive(Debug, Default)]
pub struct DotCanvas {
    circles: Vec<Circle>,
    /// Grid resolution in braille dots.
    grid: (usize, usize),
}

impl DotCanvas {
    /// Lay the indicator out over `area` and collect this frame's dots.
    pub fn prepare(indicator: &mut PageIndicator, area: Rect) -> Self {
        let (grid_w, grid_h) = layout_over(indicator, area);
        let mut canvas = Self {
            circles: Vec::new(),
            grid: (usize::from(grid_w), usize::from(grid_h)),
        };
        indicator.draw(&mut canvas);
        canvas
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }
}

impl DrawSurface for DotCanvas {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.circles.push(Circle { x, y, radius, color });
    }
}

impl Widget for DotCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let shape = FilledDots {
            circles: &self.circles,
            grid: self.grid,
        };
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.grid.0 as f64])
            .y_bounds([0.0, self.grid.1 as f64])
            .paint(|ctx| ctx.draw(&shape))
            .render(area, buf);
    }
}

/// Filled circles in grid coordinates (origin top-left, one unit per dot).
struct FilledDots<'a> {
    circles: &'a [Circle],
    grid: (usize, usize),
}

impl FilledDots<'_> {
    /// Grid points whose centres fall inside `c`.  A dot too small to cover
    /// any centre still lights the point under it.
    fn points(&self, c: &Circle) -> Vec<(usize, usize)> {
        let (w, h) = self.grid;
        let r2 = c.radius * c.radius;
        let x0 = (c.x - c.radius).floor().max(0.0) as usize;
        let y0 = (c.y - c.radius).floor().max(0.0) as usize;
        let x1 = ((c.x + c.radius).ceil().max(0.0) as usize).min(w);
        let y1 = ((c.y + c.radius).ceil().max(0.0) as usize).min(h);

        let mut points = Vec::new();
        for gy in y0..y1 {
            for gx in x0..x1 {
                let dx = gx as f32 + 0.5 - c.x;
                let dy = gy as f32 + 0.5 - c.y;
                if dx * dx + dy * dy <= r2 {
                    points.push((gx, gy));
                }
            }
        }
        if points.is_empty() && c.x >= 0.0 && c.y >= 0.0 {
            let (gx, gy) = (c.x as usize, c.y as usize);
            if gx < w && gy < h {
                points.push((gx, gy));
            }
        }
        points
    }
}

impl Shape for FilledDots<'_> {
    fn draw(&self, painter: &mut Painter) {
        for circle in self.circles {
            let color = Color::from(circle.color);
            for (x, y) in self.points(circle) {
                painter.paint(x, y, color);
            }
        }
    }
}
