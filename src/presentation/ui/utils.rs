use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Renders a single centered line, used for loading and error states.
pub fn render_message(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    Paragraph::new(Line::styled(text.to_string(), style))
        .centered()
        .render(middle, buf);
}

/// `1234567` becomes `1,234,567`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed percentage change, e.g. `+12.5% from last month`.
#[must_use]
pub fn format_growth(growth: f64) -> String {
    format!("{growth:+}% from last month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => "0")]
    #[test_case(999 => "999")]
    #[test_case(1000 => "1,000")]
    #[test_case(12_847 => "12,847")]
    #[test_case(1_234_567 => "1,234,567")]
    fn test_format_thousands(value: u64) -> String {
        format_thousands(value)
    }

    #[test]
    fn test_format_growth_keeps_sign() {
        assert_eq!(format_growth(12.5), "+12.5% from last month");
        assert_eq!(format_growth(-3.0), "-3% from last month");
    }

    #[test]
    fn test_render_message_centers_text() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        render_message(area, &mut buf, "Loading", Style::default());

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert_eq!(row.trim(), "Loading");
    }
}
