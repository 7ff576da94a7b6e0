//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::color::Rgb;

/// Central theme; every widget takes its styles from here.
pub struct Theme;

impl Theme {
    // ── pages ──────────────────────────────────────────────────
    pub fn page_style(color: Rgb) -> Style {
        Style::default().bg(color.into()).fg(Self::ink_on(color))
    }

    pub fn page_title_style(color: Rgb) -> Style {
        Self::page_style(color).add_modifier(Modifier::BOLD)
    }

    /// Black or white, whichever reads better on `background`.
    pub fn ink_on(background: Rgb) -> Color {
        let luma = 0.299 * f32::from(background.r)
            + 0.587 * f32::from(background.g)
            + 0.114 * f32::from(background.b);
        if luma > 150.0 {
            Color::Black
        } else {
            Color::White
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn status_message_style() -> Style {
        Self::status_bar_style()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_contrasts_with_page() {
        assert_eq!(Theme::ink_on(Rgb::new(0xfa, 0xfa, 0xfa)), Color::Black);
        assert_eq!(Theme::ink_on(Rgb::new(0x3f, 0x51, 0xb5)), Color::White);
    }
}
