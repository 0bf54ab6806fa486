//! Wizard progress header.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::wizard::WizardStep;
use crate::presentation::theme::Theme;

/// Numbered steps joined by connectors; finished steps show a check mark.
pub struct StepIndicator<'a> {
    current: WizardStep,
    theme: &'a Theme,
}

impl<'a> StepIndicator<'a> {
    /// Creates the indicator with `current` highlighted.
    #[must_use]
    pub const fn new(current: WizardStep, theme: &'a Theme) -> Self {
        Self { current, theme }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            if i > 0 {
                let connector = if *step <= self.current {
                    Style::default().fg(self.theme.accent)
                } else {
                    self.theme.dimmed_style
                };
                spans.push(Span::styled(" ── ", connector));
            }

            let (marker, style) = if *step < self.current {
                ("✓".to_string(), Style::default().fg(self.theme.accent))
            } else if *step == self.current {
                (
                    step.number().to_string(),
                    Style::default()
                        .bg(self.theme.accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (step.number().to_string(), self.theme.dimmed_style)
            };
            spans.push(Span::styled(format!(" {marker} "), style));

            let title_style = if *step == self.current {
                self.theme.title_style
            } else {
                self.theme.dimmed_style
            };
            spans.push(Span::styled(format!(" {}", step.title()), title_style));
        }
        spans
    }
}

impl Widget for StepIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(step: WizardStep) -> String {
        let theme = Theme::default();
        StepIndicator::new(step, &theme)
            .spans()
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_first_step_has_no_checks() {
        let text = text(WizardStep::Category);
        assert!(!text.contains('✓'));
        assert!(text.contains("1  Category"));
        assert!(text.contains("4  Suggestions"));
    }

    #[test]
    fn test_completed_steps_are_checked() {
        let text = text(WizardStep::Flavors);
        assert_eq!(text.matches('✓').count(), 2);
        assert!(text.contains("3  Flavors"));
    }
}
