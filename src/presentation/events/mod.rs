//! Messages exchanged between background tasks and the UI loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::dto::{DashboardView, MarketView};
use crate::domain::entities::{AiSuggestion, Product};
use crate::domain::errors::ApiError;
use crate::domain::Screen;

/// Identifies one mount of one screen. Results carrying an outdated ticket
/// belong to a view that has since been left and are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    /// Screen the fetch was started for.
    pub screen: Screen,
    /// Mount counter at spawn time.
    pub generation: u64,
}

impl LoadTicket {
    /// Creates a ticket.
    #[must_use]
    pub const fn new(screen: Screen, generation: u64) -> Self {
        Self { screen, generation }
    }
}

/// Completion messages posted by spawned fetch tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// Dashboard fetch finished.
    DashboardLoaded {
        /// Mount the fetch belongs to.
        ticket: LoadTicket,
        /// Loaded view or the first failure.
        result: Result<DashboardView, ApiError>,
    },
    /// Market intelligence fetch finished.
    MarketLoaded {
        /// Mount the fetch belongs to.
        ticket: LoadTicket,
        /// Loaded view or the first failure.
        result: Result<MarketView, ApiError>,
    },
    /// One-off startup product load finished.
    InitialProductsLoaded(Result<Vec<Product>, ApiError>),
    /// Suggestion fetch finished; `generation` must match the current request.
    SuggestionsLoaded {
        /// Request counter at spawn time.
        generation: u64,
        /// Concepts or the failure.
        result: Result<Vec<AiSuggestion>, ApiError>,
    },
    /// Background `POST /products` finished for the named product.
    ProductPersisted {
        /// Name of the created product, for the warning text.
        name: String,
        /// Stored record, `None` when persistence is off, or the failure.
        result: Result<Option<Product>, ApiError>,
    },
}

/// Result of handling a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// State changed; redraw.
    Consumed,
    /// Exit application.
    Exit,
}

/// Only presses drive the UI; releases and repeats from enhanced keyboards
/// are ignored.
#[must_use]
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Keys that edit a focused text field instead of triggering bindings.
#[must_use]
pub fn is_text_edit_key(key: &KeyEvent) -> bool {
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    plain
        && matches!(
            key.code,
            KeyCode::Char(_)
                | KeyCode::Backspace
                | KeyCode::Delete
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_text_edit_keys() {
        assert!(is_text_edit_key(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(is_text_edit_key(&make_key_event(
            KeyCode::Char('Q'),
            KeyModifiers::SHIFT
        )));
        assert!(is_text_edit_key(&make_key_event(
            KeyCode::Backspace,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_non_edit_keys() {
        assert!(!is_text_edit_key(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_text_edit_key(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!is_text_edit_key(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_release_is_not_press() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!is_press(&release));
        assert!(is_press(&make_key_event(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_tickets_compare_generation() {
        let a = LoadTicket::new(Screen::Dashboard, 1);
        assert_eq!(a, LoadTicket::new(Screen::Dashboard, 1));
        assert_ne!(a, LoadTicket::new(Screen::Dashboard, 2));
    }
}
