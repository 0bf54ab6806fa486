use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// User intent resolved from a key press.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NextScreen,
    PreviousScreen,
    GoDashboard,
    GoCreator,
    GoAnalysis,
    GoMarket,
    Refresh,

    // Lists
    NavigateUp,
    NavigateDown,
    Select,

    // Wizard
    WizardNext,
    WizardPrevious,
    CreateProduct,

    // Product analysis
    FocusSearch,
    CycleCategoryFilter,
    ClearFilters,
    ViewAllProducts,
}

/// A key bound to an action, with its footer label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key event that triggers the action.
    pub key: KeyEvent,
    /// Action produced by the key.
    pub action: Action,
    /// Label shown in the footer bar.
    pub label: Cow<'static, str>,
    /// Overrides the rendered key name, e.g. `Space`.
    pub key_display: Option<Cow<'static, str>>,
    /// Whether the footer lists this binding.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a binding shown in the footer under its default key name.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Sets the key text shown in the footer.
    #[must_use]
    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    /// Keeps the binding active but out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Compares code and modifiers, ignoring kind and state.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

const fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Bindings active on every screen.
#[must_use]
pub fn global_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Tab), Action::NextScreen, "Next"),
        Keybind::new(plain(KeyCode::BackTab), Action::PreviousScreen, "Prev").hidden(),
        Keybind::new(plain(KeyCode::Char('1')), Action::GoDashboard, "Dashboard").hidden(),
        Keybind::new(plain(KeyCode::Char('2')), Action::GoCreator, "Create").hidden(),
        Keybind::new(plain(KeyCode::Char('3')), Action::GoAnalysis, "Analysis").hidden(),
        Keybind::new(plain(KeyCode::Char('4')), Action::GoMarket, "Market").hidden(),
        Keybind::new(plain(KeyCode::Char('n')), Action::GoCreator, "New Product"),
        Keybind::new(plain(KeyCode::Char('r')), Action::Refresh, "Refresh"),
        Keybind::new(plain(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Bindings for the dashboard.
#[must_use]
pub fn dashboard_keybinds() -> Vec<Keybind> {
    vec![Keybind::new(plain(KeyCode::Char('v')), Action::ViewAllProducts, "View All")]
}

/// Bindings for the product creator.
#[must_use]
pub fn wizard_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "Up").display("↑"),
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "Down").display("↓"),
        Keybind::new(plain(KeyCode::Char(' ')), Action::Select, "Select").display("Space"),
        Keybind::new(plain(KeyCode::Left), Action::WizardPrevious, "Previous").display("←"),
        Keybind::new(plain(KeyCode::Right), Action::WizardNext, "Next").display("→"),
        Keybind::new(plain(KeyCode::Enter), Action::CreateProduct, "Create"),
    ]
}

/// Bindings for the product analysis screen.
#[must_use]
pub fn analysis_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char('/')), Action::FocusSearch, "Search"),
        Keybind::new(plain(KeyCode::Char('f')), Action::CycleCategoryFilter, "Category"),
        Keybind::new(plain(KeyCode::Char('x')), Action::ClearFilters, "Clear"),
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "Up").display("↑").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "Down").display("↓").hidden(),
    ]
}

/// Resolves a key against screen bindings first, then global ones.
#[must_use]
pub fn resolve(key: &KeyEvent, screen_bindings: &[Keybind]) -> Option<Action> {
    let globals = global_keybinds();
    screen_bindings
        .iter()
        .chain(globals.iter())
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_binding_shadows_global() {
        let bindings = vec![Keybind::new(plain(KeyCode::Char('r')), Action::Select, "Pick")];
        assert_eq!(
            resolve(&plain(KeyCode::Char('r')), &bindings),
            Some(Action::Select)
        );
    }

    #[test]
    fn test_global_fallback() {
        assert_eq!(
            resolve(&plain(KeyCode::Char('q')), &wizard_keybinds()),
            Some(Action::Quit)
        );
        assert_eq!(
            resolve(
                &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &[]
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(resolve(&plain(KeyCode::Char('z')), &[]), None);
    }
}
