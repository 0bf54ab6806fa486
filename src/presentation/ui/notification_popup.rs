use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 56;
const MAX_HEIGHT: u16 = 8;
const TOP_OFFSET: u16 = 2;

/// Toast drawn in the top-right corner over the current screen.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    /// Creates a popup for one notification.
    #[must_use]
    pub const fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn level_style(&self) -> (&'static str, Color) {
        match self.notification.level {
            NotificationLevel::Info => ("i", self.theme.accent),
            NotificationLevel::Success => ("✓", Color::Green),
            NotificationLevel::Warn => ("!", Color::Yellow),
            NotificationLevel::Error => ("✗", Color::Red),
        }
    }

    /// Box for the popup, clipped to `area`.
    fn placement(&self, area: Rect) -> Rect {
        let text_width = self.notification.message.width() + 2;
        let title_width = self.notification.title.width() + 4;
        let wanted = u16::try_from(text_width.max(title_width)).unwrap_or(u16::MAX);
        let width = wanted
            .saturating_add(2)
            .min(MAX_WIDTH)
            .min(area.width.saturating_sub(2));

        let inner = usize::from(width.saturating_sub(2).max(1));
        let rows = u16::try_from(text_width.div_ceil(inner)).unwrap_or(MAX_HEIGHT);
        let height = rows.saturating_add(2).clamp(3, MAX_HEIGHT);

        let popup = Rect::new(
            area.right().saturating_sub(width).saturating_sub(1),
            area.y.saturating_add(TOP_OFFSET),
            width,
            height,
        );
        area.intersection(popup)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.placement(area);
        if popup.area() == 0 {
            return;
        }

        let (icon, color) = self.level_style();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        let body = Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::raw(self.notification.message.as_str()),
        ]);

        Clear.render(popup, buf);
        Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
