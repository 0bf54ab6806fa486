use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::application::{Wizard, WizardStep};
use crate::domain::Category;
use crate::domain::entities::{AgeGroup, Flavor, Region};
use crate::domain::keybinding::Action;
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{StepIndicator, score_line};

/// One selectable row of the current wizard step.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorOption {
    Category(Category),
    AgeGroup(AgeGroup),
    Region(Region),
    Flavor(Flavor),
    Suggestion(usize),
}

/// Rows offered on the wizard's current step, in display order.
#[must_use]
pub fn options(wizard: &Wizard) -> Vec<CreatorOption> {
    match wizard.step() {
        WizardStep::Category => Category::ALL.map(CreatorOption::Category).to_vec(),
        WizardStep::Demographics => AgeGroup::ALL
            .map(CreatorOption::AgeGroup)
            .into_iter()
            .chain(Region::ALL.map(CreatorOption::Region))
            .collect(),
        WizardStep::Flavors => Flavor::ALL.map(CreatorOption::Flavor).to_vec(),
        WizardStep::Suggestions => (0..wizard.suggestions().len())
            .map(CreatorOption::Suggestion)
            .collect(),
    }
}

/// Product creation wizard.
#[derive(Debug, Default)]
pub struct CreatorScreen {
    cursor: usize,
    step: WizardStep,
}

impl CreatorScreen {
    /// Creates the screen with the cursor on the first row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the highlighted row.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Resets the cursor whenever the wizard changed step.
    pub fn sync(&mut self, wizard: &Wizard) {
        if wizard.step() != self.step {
            self.step = wizard.step();
            self.cursor = 0;
        }
    }

    /// Moves the cursor or applies the highlighted option. Ignored while suggestions are being generated.
    pub fn handle_action(&mut self, action: Action, wizard: &mut Wizard) -> EventResult {
        self.sync(wizard);
        if wizard.is_fetching() {
            return EventResult::Continue;
        }
        let rows = options(wizard);

        match action {
            Action::NavigateUp => self.cursor = self.cursor.saturating_sub(1),
            Action::NavigateDown => {
                self.cursor = (self.cursor + 1).min(rows.len().saturating_sub(1));
            }
            Action::Select => match rows.get(self.cursor) {
                Some(CreatorOption::Category(c)) => {
                    wizard.set_category(*c);
                }
                Some(CreatorOption::AgeGroup(a)) => {
                    wizard.set_age_group(*a);
                }
                Some(CreatorOption::Region(r)) => {
                    wizard.set_region(*r);
                }
                Some(CreatorOption::Flavor(f)) => {
                    wizard.toggle_flavor(*f);
                }
                Some(CreatorOption::Suggestion(i)) => {
                    wizard.select(*i);
                }
                None => return EventResult::Continue,
            },
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn option_lines(&self, wizard: &Wizard, theme: &Theme) -> Vec<Line<'static>> {
        let form = wizard.form();
        let radio = |on: bool| if on { "(•) " } else { "( ) " };
        let mut lines = Vec::new();

        for (i, option) in options(wizard).into_iter().enumerate() {
            match option {
                CreatorOption::AgeGroup(_) if i == 0 => {
                    lines.push(Line::styled("Target Age Group", theme.dimmed_style));
                }
                CreatorOption::Region(r) if r == Region::ALL[0] => {
                    lines.push(Line::default());
                    lines.push(Line::styled("Region", theme.dimmed_style));
                }
                _ => {}
            }

            let (marker, label) = match option {
                CreatorOption::Category(c) => (radio(form.category == Some(c)), c.label()),
                CreatorOption::AgeGroup(a) => (radio(form.age_group == Some(a)), a.label()),
                CreatorOption::Region(r) => (radio(form.region == Some(r)), r.label()),
                CreatorOption::Flavor(f) => {
                    (if form.has_flavor(f) { "[x] " } else { "[ ] " }, f.label())
                }
                CreatorOption::Suggestion(index) => {
                    lines.extend(self.suggestion_lines(wizard, index, theme));
                    continue;
                }
            };

            let style = if i == self.cursor {
                theme.selection_style
            } else {
                theme.base_style
            };
            let pointer = if i == self.cursor { "▶ " } else { "  " };
            lines.push(Line::styled(format!("{pointer}{marker}{label}"), style));
        }
        lines
    }

    fn suggestion_lines(&self, wizard: &Wizard, index: usize, theme: &Theme) -> Vec<Line<'static>> {
        let Some(suggestion) = wizard.suggestions().get(index) else {
            return Vec::new();
        };
        let selected = wizard.selected_index() == Some(index);
        let focused = index == self.cursor;

        let mut title = Line::from(vec![
            Span::raw(if focused { "▶ " } else { "  " }),
            Span::raw(if selected { "(•) " } else { "( ) " }),
            Span::styled(
                format!("{:<28}", suggestion.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        for span in score_line(suggestion.score, 10).spans {
            title.push_span(span);
        }
        if focused {
            title = title.style(theme.selection_style);
        }

        vec![
            title,
            Line::styled(format!("      {}", suggestion.description), theme.dimmed_style),
            Line::default(),
        ]
    }

    /// Draws the step indicator, the options of the current step and any error.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, wizard: &Wizard, theme: &Theme) {
        self.sync(wizard);
        let step = wizard.step();

        let [steps_area, body_area, message_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        StepIndicator::new(step, theme).render(steps_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.dimmed_style)
            .title(Span::styled(
                format!(" Step {}: {} ", step.number(), step.title()),
                theme.title_style,
            ));

        let body = if step == WizardStep::Suggestions && wizard.suggestions().is_empty() {
            vec![Line::styled("No suggestions available.", theme.dimmed_style)]
        } else {
            self.option_lines(wizard, theme)
        };
        Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        let message = if wizard.is_fetching() {
            Line::styled("Generating AI suggestions...", Style::default().fg(theme.accent))
        } else if let Some(error) = wizard.error() {
            Line::styled(error.to_string(), theme.error_style)
        } else {
            Line::default()
        };
        Paragraph::new(message).render(message_area, buf);

        let hint = match step {
            WizardStep::Category => "Space select  → next",
            WizardStep::Flavors => "Space toggle  ← back  → generate suggestions",
            WizardStep::Suggestions if wizard.can_create() => {
                "Space select  ← back  Enter create product"
            }
            WizardStep::Suggestions => "Space select a concept  ← back",
            WizardStep::Demographics => "Space select  ← back  → next",
        };
        Paragraph::new(Line::styled(hint, theme.dimmed_style)).render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::wizard::NextOutcome;
    use crate::domain::entities::AiSuggestion;

    fn render(screen: &mut CreatorScreen, wizard: &Wizard) -> String {
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, wizard, &Theme::default());
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_demographics_lists_age_groups_then_regions() {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Snacks);
        wizard.next();

        let rows = options(&wizard);
        assert_eq!(rows.len(), AgeGroup::ALL.len() + Region::ALL.len());
        assert_eq!(rows[0], CreatorOption::AgeGroup(AgeGroup::ALL[0]));
        assert_eq!(rows[AgeGroup::ALL.len()], CreatorOption::Region(Region::ALL[0]));
    }

    #[test]
    fn test_select_sets_category() {
        let mut wizard = Wizard::new();
        let mut screen = CreatorScreen::new();

        screen.handle_action(Action::NavigateDown, &mut wizard);
        assert_eq!(screen.handle_action(Action::Select, &mut wizard), EventResult::Consumed);
        assert_eq!(wizard.form().category, Some(Category::ALL[1]));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut wizard = Wizard::new();
        let mut screen = CreatorScreen::new();
        screen.handle_action(Action::NavigateUp, &mut wizard);
        assert_eq!(screen.cursor(), 0);

        for _ in 0..20 {
            screen.handle_action(Action::NavigateDown, &mut wizard);
        }
        assert_eq!(screen.cursor(), Category::ALL.len() - 1);
    }

    #[test]
    fn test_cursor_resets_on_step_change() {
        let mut wizard = Wizard::new();
        let mut screen = CreatorScreen::new();
        screen.handle_action(Action::NavigateDown, &mut wizard);
        screen.handle_action(Action::Select, &mut wizard);
        wizard.next();

        screen.sync(&wizard);
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_flavor_toggle_renders_checkbox() {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Beverages);
        wizard.next();
        wizard.set_age_group(AgeGroup::ALL[0]);
        wizard.set_region(Region::ALL[0]);
        wizard.next();

        let mut screen = CreatorScreen::new();
        screen.handle_action(Action::Select, &mut wizard);
        assert!(wizard.form().has_flavor(Flavor::ALL[0]));

        let text = render(&mut screen, &wizard);
        assert!(text.contains(&format!("[x] {}", Flavor::ALL[0].label())));
        assert!(text.contains("Step 3"));
    }

    #[test]
    fn test_select_ignored_while_generating() {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Beverages);
        wizard.next();
        wizard.set_age_group(AgeGroup::ALL[0]);
        wizard.set_region(Region::ALL[0]);
        wizard.next();
        let mut screen = CreatorScreen::new();
        screen.handle_action(Action::Select, &mut wizard);
        let NextOutcome::FetchSuggestions(sent) = wizard.next() else {
            panic!("expected a fetch request");
        };

        assert_eq!(screen.handle_action(Action::Select, &mut wizard), EventResult::Continue);
        assert_eq!(screen.handle_action(Action::NavigateDown, &mut wizard), EventResult::Continue);
        screen.handle_action(Action::Select, &mut wizard);

        assert_eq!(wizard.form(), &sent);
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_validation_error_shown_inline() {
        let mut wizard = Wizard::new();
        wizard.next();
        let text = render(&mut CreatorScreen::new(), &wizard);
        assert!(text.contains("Please select a category."));
    }

    #[test]
    fn test_suggestions_step_renders_concepts() {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Beverages);
        wizard.next();
        wizard.set_age_group(AgeGroup::ALL[0]);
        wizard.set_region(Region::ALL[0]);
        wizard.next();
        wizard.toggle_flavor(Flavor::ALL[0]);
        wizard.next();
        let text = render(&mut CreatorScreen::new(), &wizard);
        assert!(text.contains("Generating AI suggestions..."));

        wizard.suggestions_loaded(vec![AiSuggestion::new("Tropical Fizz", 90, "Bright and bubbly")]);
        let mut screen = CreatorScreen::new();
        screen.handle_action(Action::Select, &mut wizard);
        let text = render(&mut screen, &wizard);
        assert!(text.contains("(•) Tropical Fizz"));
        assert!(text.contains("Bright and bubbly"));
        assert!(text.contains("Enter create product"));
    }
}
