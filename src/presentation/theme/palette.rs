use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::domain::entities::ProductStatus;

/// Styles shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Configured accent.
    pub accent: Color,
    /// Dark shade of the accent for bar backgrounds.
    pub accent_dim: Color,
    /// Bold accent for titles.
    pub title_style: Style,
    /// Highlighted list row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Default text.
    pub base_style: Style,
    /// Growth figures.
    pub positive_style: Style,
    /// Decline figures.
    pub negative_style: Style,
    /// Inline error messages.
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(Color::Rgb(249, 115, 22))
    }
}

impl Theme {
    /// Builds a theme from a color string; see [`parse_color`].
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    /// Derives every style from one accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_dim = ColorConverter::shade(accent, 0.08, 0.5);
        let selection_bg = ColorConverter::shade(accent, 0.2, 0.3);

        Self {
            accent,
            accent_dim,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            positive_style: Style::default().fg(Color::Green),
            negative_style: Style::default().fg(Color::Red),
            error_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Green for growth, red for decline.
    #[must_use]
    pub const fn trend_style(&self, positive: bool) -> Style {
        if positive {
            self.positive_style
        } else {
            self.negative_style
        }
    }

    /// Badge style for a product status.
    #[must_use]
    pub fn status_style(&self, status: ProductStatus) -> Style {
        match status {
            ProductStatus::Active => Style::default().fg(Color::Black).bg(Color::Green),
            ProductStatus::Testing => Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }
}

/// Parses a color name, `#rrggbb` or `#rgb`. Unknown input falls back to the
/// default orange accent.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Rgb(249, 115, 22),
    }
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    if !s.is_ascii() {
        return None;
    }
    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(&s[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}
