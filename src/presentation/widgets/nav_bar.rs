use crate::domain::Screen;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Styles for [`NavBar`].
pub struct NavBarStyle {
    /// Bar fill.
    pub background: Style,
    /// App name on the left.
    pub app_name: Style,
    /// Inactive tabs.
    pub tab: Style,
    /// The current screen's tab.
    pub tab_active: Style,
    /// Loading badge.
    pub loading: Style,
}

impl NavBarStyle {
    /// Derives the nav bar styles from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let tab_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tab: Style::default().bg(tab_bg).fg(Color::Gray),
            tab_active: Style::default()
                .bg(tab_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ..Self::default()
        }
    }
}

impl Default for NavBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            loading: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar: app name, one tab per screen and a loading badge.
pub struct NavBar<'a> {
    app_name: &'a str,
    active: &'a Screen,
    loading: bool,
    style: NavBarStyle,
}

impl<'a> NavBar<'a> {
    /// Creates a bar with `active` highlighted.
    #[must_use]
    pub fn new(app_name: &'a str, active: &'a Screen) -> Self {
        Self {
            app_name,
            active,
            loading: false,
            style: NavBarStyle::default(),
        }
    }

    /// Shows the loading badge.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Overrides the styles.
    #[must_use]
    pub const fn style(mut self, style: NavBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Unknown screens highlight the dashboard tab, matching the router.
    fn is_active(&self, screen: &Screen) -> bool {
        match self.active {
            Screen::Unknown(_) => *screen == Screen::Dashboard,
            active => active == screen,
        }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
        ];

        for (i, screen) in Screen::NAVIGABLE.iter().enumerate() {
            let style = if self.is_active(screen) {
                self.style.tab_active
            } else {
                self.style.tab
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, screen.title()), style));
        }
        spans
    }
}

impl Widget for NavBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        Paragraph::new(Line::from(self.tab_spans())).render(area, buf);

        if self.loading {
            let badge = " ◐ LOADING ";
            let width = badge.chars().count() as u16;
            if width < area.width {
                let right_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
                Paragraph::new(Span::styled(badge, self.style.loading)).render(right_area, buf);
            }
        }
    }
}
