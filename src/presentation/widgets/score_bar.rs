//! Inline score gauge for tables and lists.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::domain::entities::MAX_SCORE;

/// Color band for a 0-100 score.
#[must_use]
pub const fn score_color(score: u8) -> Color {
    match score {
        80.. => Color::Green,
        60..80 => Color::Yellow,
        _ => Color::Red,
    }
}

/// `████░░ 87` with `width` cells of bar.
#[must_use]
pub fn score_line(score: u8, width: usize) -> Line<'static> {
    let score = score.min(MAX_SCORE);
    let filled = (usize::from(score) * width + usize::from(MAX_SCORE) / 2) / usize::from(MAX_SCORE);
    let color = score_color(score);

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {score:>3}")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0; "empty")]
    #[test_case(50, 5; "half")]
    #[test_case(87, 9; "rounded")]
    #[test_case(100, 10; "full")]
    fn test_filled_cells(score: u8, expected: usize) {
        let line = score_line(score, 10);
        assert_eq!(line.spans[0].content.chars().count(), expected);
        assert_eq!(line.spans[1].content.chars().count(), 10 - expected);
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(92), Color::Green);
        assert_eq!(score_color(79), Color::Yellow);
        assert_eq!(score_color(12), Color::Red);
    }
}
