use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Widget},
};

use super::utils::{format_growth, format_thousands, render_message};
use crate::application::AppStore;
use crate::application::DashboardView;
use crate::domain::entities::CategoryChartPoint;
use crate::presentation::theme::Theme;

const BEVERAGES_COLOR: Color = Color::Rgb(249, 115, 22);
const SNACKS_COLOR: Color = Color::Rgb(234, 179, 8);
const DAIRY_COLOR: Color = Color::Rgb(59, 130, 246);

/// Overview screen: metric cards, monthly chart and recent products.
#[derive(Debug, Default)]
pub struct DashboardScreen {
    view: Option<DashboardView>,
}

struct MetricCard<'a> {
    title: &'a str,
    value: String,
    detail: Line<'static>,
    theme: &'a Theme,
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(Span::styled(format!(" {} ", self.title), self.theme.dimmed_style));

        Paragraph::new(vec![
            Line::styled(self.value, self.theme.title_style),
            self.detail,
        ])
        .block(block)
        .render(area, buf);
    }
}

impl DashboardScreen {
    /// Creates the screen with nothing loaded.
    #[must_use]
    pub const fn new() -> Self {
        Self { view: None }
    }

    /// Replaces the loaded data.
    pub fn set_view(&mut self, view: Option<DashboardView>) {
        self.view = view;
    }

    /// Drops the loaded data so the next mount starts from the loading state.
    pub fn clear(&mut self) {
        self.view = None;
    }

    /// Returns the loaded data.
    #[must_use]
    pub const fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Draws the error, loading or loaded state.
    pub fn render(&self, area: Rect, buf: &mut Buffer, store: &AppStore, theme: &Theme) {
        if let Some(error) = store.error() {
            render_message(area, buf, &format!("Error: {error}"), theme.error_style);
            return;
        }
        let Some(view) = self.view.as_ref().filter(|_| !store.is_loading()) else {
            render_message(area, buf, "Loading dashboard...", theme.dimmed_style);
            return;
        };

        let [cards_area, body_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(area);
        render_cards(view, cards_area, buf, theme);

        let [chart_area, recent_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);
        render_chart(&view.metrics.chart_data, chart_area, buf, theme);
        render_recent(view, recent_area, buf, theme);
    }
}

fn render_cards(view: &DashboardView, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let metrics = &view.metrics;
    let growth_line = |growth: f64| {
        Line::styled(format_growth(growth), theme.trend_style(growth > 0.0))
    };

    let cards = [
        MetricCard {
            title: "Total Products",
            value: metrics.total_products.to_string(),
            detail: growth_line(metrics.growth.products_growth),
            theme,
        },
        MetricCard {
            title: "Success Rate",
            value: format!("{}%", metrics.success_rate),
            detail: growth_line(metrics.growth.success_rate_growth),
            theme,
        },
        MetricCard {
            title: "Active Users",
            value: format_thousands(metrics.active_users),
            detail: growth_line(metrics.growth.users_growth),
            theme,
        },
        MetricCard {
            title: "Trending Categories",
            value: metrics.trending_categories.to_string(),
            detail: Line::styled("Beverages leading", theme.dimmed_style),
            theme,
        },
    ];

    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (card, card_area) in cards.into_iter().zip(areas.iter()) {
        card.render(*card_area, buf);
    }
}

fn render_chart(points: &[CategoryChartPoint], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.dimmed_style)
        .title(Span::styled(" Market Trends ", theme.title_style))
        .title_bottom(Line::from(vec![
            Span::styled(" ■ Beverages ", Style::default().fg(BEVERAGES_COLOR)),
            Span::styled(" ■ Snacks ", Style::default().fg(SNACKS_COLOR)),
            Span::styled(" ■ Dairy ", Style::default().fg(DAIRY_COLOR)),
        ]));

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for point in points {
        let bars = [
            Bar::default()
                .value(point.beverages)
                .style(Style::default().fg(BEVERAGES_COLOR)),
            Bar::default()
                .value(point.snacks)
                .style(Style::default().fg(SNACKS_COLOR)),
            Bar::default()
                .value(point.dairy)
                .style(Style::default().fg(DAIRY_COLOR)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.month.clone()))
                .bars(&bars),
        );
    }

    chart.render(area, buf);
}

fn render_recent(view: &DashboardView, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.dimmed_style)
        .title(Span::styled(" Recent Activity ", theme.title_style))
        .title_bottom(Line::styled(
            " View All Products → (v) ",
            Style::default().fg(theme.accent),
        ));

    let mut lines = Vec::with_capacity(view.recent_products.len() * 3);
    for product in &view.recent_products {
        lines.push(Line::from(vec![
            Span::styled(
                product.name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                product.status().label(),
                theme.status_style(product.status()),
            ),
        ]));
        lines.push(Line::styled(
            format!("{} • Score: {}", product.category(), product.score()),
            theme.dimmed_style,
        ));
        lines.push(Line::default());
    }

    Paragraph::new(lines).block(block).render(area, buf);
}
