use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::application::AppStore;
use crate::domain::Category;
use crate::domain::keybinding::Action;
use crate::presentation::events::{EventResult, is_text_edit_key};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{TextInput, score_line};

const SCORE_BAR_WIDTH: usize = 10;

/// Cycles `None -> first category -> ... -> last category -> None`.
#[must_use]
pub fn next_category(current: Option<Category>) -> Option<Category> {
    match current {
        None => Category::ALL.first().copied(),
        Some(category) => Category::ALL
            .iter()
            .position(|c| *c == category)
            .and_then(|i| Category::ALL.get(i + 1))
            .copied(),
    }
}

/// Searchable, filterable product table.
#[derive(Debug)]
pub struct AnalysisScreen {
    search: TextInput,
    table_state: TableState,
}

impl AnalysisScreen {
    /// Creates the screen with an unfocused search field.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            search: TextInput::new("Search")
                .placeholder("Search products...")
                .accent(theme.accent),
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    /// Returns whether key presses go to the search field.
    #[must_use]
    pub const fn is_search_focused(&self) -> bool {
        self.search.is_focused()
    }

    /// Mirrors the store's search term into the input field.
    pub fn sync(&mut self, store: &AppStore) {
        if self.search.value() != store.search_term() {
            self.search.set_value(store.search_term());
        }
    }

    /// Edits the focused search field.
    pub fn handle_key(&mut self, key: KeyEvent, store: &mut AppStore) -> EventResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.search.set_focused(false);
                return EventResult::Consumed;
            }
            _ if !is_text_edit_key(&key) => return EventResult::Continue,
            KeyCode::Char(c) => self.search.input_char(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_start(),
            KeyCode::End => self.search.move_end(),
            _ => return EventResult::Continue,
        }
        if self.search.value() != store.search_term() {
            store.set_search_term(self.search.value());
            self.table_state.select(Some(0));
        }
        EventResult::Consumed
    }

    /// Handles search focus, filter changes and row movement.
    pub fn handle_action(&mut self, action: Action, store: &mut AppStore) -> EventResult {
        match action {
            Action::FocusSearch => self.search.set_focused(true),
            Action::CycleCategoryFilter => {
                store.set_category_filter(next_category(store.category_filter()));
                self.table_state.select(Some(0));
            }
            Action::ClearFilters => {
                store.set_search_term("");
                store.set_category_filter(None);
                self.search.clear();
                self.table_state.select(Some(0));
            }
            Action::NavigateUp => self.table_state.select_previous(),
            Action::NavigateDown => self.table_state.select_next(),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    /// Draws the filter row, the product table and the status line.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, store: &AppStore, theme: &Theme) {
        let [filter_area, table_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [search_area, category_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(28)]).areas(filter_area);
        (&self.search).render(search_area, buf);

        let category_label = store
            .category_filter()
            .map_or("All Categories", Category::label);
        Paragraph::new(Line::from(vec![
            Span::styled(category_label, Style::default().fg(theme.accent)),
            Span::styled("  (f)", theme.dimmed_style),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.dimmed_style)
                .title(" Category "),
        )
        .render(category_area, buf);

        let products = store.filtered_products();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.dimmed_style)
            .title(Span::styled(" Products ", theme.title_style));

        if products.is_empty() {
            let inner = block.inner(table_area);
            block.render(table_area, buf);
            super::utils::render_message(inner, buf, "No products found.", theme.dimmed_style);
        } else {
            let header = Row::new(["Product", "Category", "Market Score", "Status", "Created"])
                .style(theme.dimmed_style.add_modifier(Modifier::BOLD));
            let rows = products.iter().map(|product| {
                Row::new([
                    Cell::from(product.name().to_string()),
                    Cell::from(product.category().label()),
                    Cell::from(score_line(product.score(), SCORE_BAR_WIDTH)),
                    Cell::from(Span::styled(
                        product.status().label(),
                        theme.status_style(product.status()),
                    )),
                    Cell::from(product.created().format("%Y-%m-%d").to_string()),
                ])
            });

            let table = Table::new(
                rows,
                [
                    Constraint::Fill(2),
                    Constraint::Length(14),
                    Constraint::Length(16),
                    Constraint::Length(10),
                    Constraint::Length(12),
                ],
            )
            .header(header)
            .block(block)
            .row_highlight_style(theme.selection_style)
            .highlight_symbol("▶ ");

            StatefulWidget::render(table, table_area, buf, &mut self.table_state);
        }

        Paragraph::new(Line::styled(
            format!(" Showing {} of {} products", products.len(), store.products().len()),
            theme.dimmed_style,
        ))
        .render(status_area, buf);
        if self.search.is_focused() {
            Paragraph::new(Line::styled("Esc to finish search ", theme.dimmed_style))
                .right_aligned()
                .render(status_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::product;
    use crossterm::event::KeyModifiers;

    fn store() -> AppStore {
        let mut store = AppStore::new();
        store.add_product(product("1", "Spiced Turmeric Latte", Category::Beverages));
        store.add_product(product("2", "Coconut Quinoa Bites", Category::Snacks));
        store
    }

    fn render(screen: &mut AnalysisScreen, store: &AppStore) -> String {
        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, store, &Theme::default());
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_category_cycle_wraps_to_all() {
        let mut current = None;
        for expected in Category::ALL {
            current = next_category(current);
            assert_eq!(current, Some(expected));
        }
        assert_eq!(next_category(current), None);
    }

    #[test]
    fn test_typing_updates_store_search() {
        let mut store = store();
        let mut screen = AnalysisScreen::new(&Theme::default());
        screen.handle_action(Action::FocusSearch, &mut store);

        for c in "latte".chars() {
            assert_eq!(screen.handle_key(key(KeyCode::Char(c)), &mut store), EventResult::Consumed);
        }
        assert_eq!(store.search_term(), "latte");
        assert_eq!(store.filtered_products().len(), 1);

        screen.handle_key(key(KeyCode::Esc), &mut store);
        assert!(!screen.is_search_focused());
    }

    #[test]
    fn test_clear_filters() {
        let mut store = store();
        let mut screen = AnalysisScreen::new(&Theme::default());
        store.set_search_term("quinoa");
        store.set_category_filter(Some(Category::Snacks));
        screen.sync(&store);

        screen.handle_action(Action::ClearFilters, &mut store);
        assert_eq!(store.search_term(), "");
        assert_eq!(store.category_filter(), None);
        assert_eq!(store.filtered_products().len(), 2);
    }

    #[test]
    fn test_renders_rows_and_count() {
        let store = store();
        let mut screen = AnalysisScreen::new(&Theme::default());
        let text = render(&mut screen, &store);
        assert!(text.contains("Market Score"));
        assert!(text.contains("Coconut Quinoa Bites"));
        assert!(text.contains("All Categories"));
        assert!(text.contains("Showing 2 of 2 products"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut store = store();
        store.set_search_term("nothing matches this");
        let mut screen = AnalysisScreen::new(&Theme::default());
        let text = render(&mut screen, &store);
        assert!(text.contains("No products found."));
        assert!(text.contains("Showing 0 of 2 products"));
    }
}
