//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: page strip, indicator row and a bottom status bar.
pub struct AppLayout {
    pub pager_area: Rect,
    pub indicator_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.  `indicator_rows` is
    /// the height the indicator asked for, in terminal rows.
    pub fn from_area(area: Rect, indicator_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                          // pages
                Constraint::Length(indicator_rows.max(1) + 2), // indicator + breathing room
                Constraint::Length(1),                       // status bar
            ])
            .split(area);

        // Keep the indicator off the pager's edge.
        let indicator_area = Rect {
            y: chunks[1].y.saturating_add(1),
            height: chunks[1].height.saturating_sub(2),
            ..chunks[1]
        };

        Self {
            pager_area: chunks[0],
            indicator_area,
            status_area: chunks[2],
        }
    }
}

/// Is the cell `(col, row)` inside `area`?
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
