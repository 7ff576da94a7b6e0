//! Custom Ratatui widget that renders the demo pages as a horizontal strip
//! scrolled to a fractional page position.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::app::pager::Page;

use super::theme::Theme;

pub struct PagerWidget<'a> {
    pages: &'a [Page],
    /// Scroll position in pages; `2.5` shows the right half of page 2 and
    /// the left half of page 3.
    position: f64,
}

impl<'a> PagerWidget<'a> {
    pub fn new(pages: &'a [Page], position: f64) -> Self {
        Self { pages, position }
    }
}

impl Widget for PagerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.pages.is_empty() {
            return;
        }
        let width = i32::from(area.width);
        let base = self.position.floor().max(0.0) as usize;
        let shift = ((self.position - base as f64) * f64::from(area.width)).round() as i32;

        for (index, offset) in [(base, 0), (base + 1, width)] {
            let Some(page) = self.pages.get(index) else {
                continue;
            };
            let origin = i32::from(area.x) + offset - shift;
            render_page(page, index, self.pages.len(), origin, area, buf);
        }
    }
}

/// Draw one page whose left edge sits at column `origin` (possibly off
/// screen), clipped to `area`.
fn render_page(page: &Page, index: usize, total: usize, origin: i32, area: Rect, buf: &mut Buffer) {
    let left = origin.max(i32::from(area.x));
    let right = (origin + i32::from(area.width)).min(i32::from(area.right()));
    if left >= right {
        return;
    }
    let visible = Rect {
        x: left as u16,
        width: (right - left) as u16,
        ..area
    };
    buf.set_style(visible, Theme::page_style(page.color));

    let middle = area.y + area.height / 2;
    let counter = format!("{} / {}", index + 1, total);
    let title_row = middle.saturating_sub(1);
    let title_style = Theme::page_title_style(page.color);
    put_centred(buf, visible, origin, area.width, title_row, &page.title, title_style);
    let counter_style = Theme::page_style(page.color);
    put_centred(buf, visible, origin, area.width, middle + 1, &counter, counter_style);
}

/// Write `text` centred on a page `page_width` wide starting at `origin`,
/// keeping only the characters that land inside `clip`.
fn put_centred(
    buf: &mut Buffer,
    clip: Rect,
    origin: i32,
    page_width: u16,
    row: u16,
    text: &str,
    style: Style,
) {
    if row < clip.y || row >= clip.bottom() {
        return;
    }
    let len = text.chars().count() as i32;
    let start = origin + (i32::from(page_width) - len).max(0) / 2;
    for (i, ch) in text.chars().enumerate() {
        let col = start + i as i32;
        if col < i32::from(clip.x) || col >= i32::from(clip.right()) {
            continue;
        }
        if let Some(cell) = buf.cell_mut((col as u16, row)) {
            cell.set_char(ch).set_style(style);
        }
    }
}
