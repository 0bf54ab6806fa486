use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use super::utils::render_message;
use crate::application::{AppStore, MarketView};
use crate::domain::entities::{Competitor, RegionalShare, TimelinePoint, TrendingIngredient, is_positive_trend};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::score_line;

const BAR_WIDTH: usize = 12;

const SERIES: [(&str, Color); 4] = [
    ("Healthy Foods", Color::Green),
    ("Organic", Color::Yellow),
    ("Plant-Based", Color::Cyan),
    ("Functional Foods", Color::Magenta),
];

/// Ingredient trends, regional shares, timeline and competitors.
#[derive(Debug, Default)]
pub struct MarketScreen {
    view: Option<MarketView>,
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.dimmed_style)
        .title(Span::styled(format!(" {title} "), theme.title_style))
}

impl MarketScreen {
    /// Creates the screen with nothing loaded.
    #[must_use]
    pub const fn new() -> Self {
        Self { view: None }
    }

    /// Replaces the loaded data.
    pub fn set_view(&mut self, view: Option<MarketView>) {
        self.view = view;
    }

    /// Drops the loaded data so the next mount starts from the loading state.
    pub fn clear(&mut self) {
        self.view = None;
    }

    /// Returns the loaded data.
    #[must_use]
    pub const fn view(&self) -> Option<&MarketView> {
        self.view.as_ref()
    }

    /// Draws the error, loading or loaded state.
    pub fn render(&self, area: Rect, buf: &mut Buffer, store: &AppStore, theme: &Theme) {
        if let Some(error) = store.error() {
            render_message(area, buf, &format!("Error: {error}"), theme.error_style);
            return;
        }
        let Some(view) = self.view.as_ref().filter(|_| !store.is_loading()) else {
            render_message(area, buf, "Loading market intelligence...", theme.dimmed_style);
            return;
        };

        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(5),
        ])
        .areas(area);
        let [ingredients_area, regions_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(top);

        render_ingredients(&view.trends.trending_ingredients, ingredients_area, buf, theme);
        render_regions(&view.trends.regional_data, regions_area, buf, theme);
        render_timeline(&view.trends.timeline_data, middle, buf, theme);
        render_competitors(&view.competitors, bottom, buf, theme);
    }
}

fn render_ingredients(items: &[TrendingIngredient], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            let mut line = Line::from(Span::raw(format!("{:<16}", item.name)));
            for span in score_line(item.score, BAR_WIDTH).spans {
                line.push_span(span);
            }
            line.push_span(Span::styled(
                format!("  {}", item.growth),
                theme.trend_style(is_positive_trend(&item.growth)),
            ));
            line
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("Trending Ingredients", theme))
        .render(area, buf);
}

/// Bar proportional to a 0-100 share.
fn share_bar(percentage: f64, width: usize) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_regions(regions: &[RegionalShare], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let lines: Vec<Line> = regions
        .iter()
        .map(|region| {
            Line::from(vec![
                Span::raw(format!("{:<14}", region.name)),
                Span::styled(share_bar(region.percentage, BAR_WIDTH), Style::default().fg(theme.accent)),
                Span::raw(format!(" {}%", region.percentage)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("Regional Preferences", theme))
        .render(area, buf);
}

fn render_timeline(points: &[TimelinePoint], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let accessors: [fn(&TimelinePoint) -> f64; 4] = [
        |p| p.healthy,
        |p| p.organic,
        |p| p.plant_based,
        |p| p.functional,
    ];
    #[allow(clippy::cast_precision_loss)]
    let series: [Vec<(f64, f64)>; 4] = accessors.map(|value| {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, value(p)))
            .collect()
    });

    let y_max = series
        .iter()
        .flatten()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let datasets = SERIES
        .iter()
        .zip(series.iter())
        .map(|((name, color), data)| {
            Dataset::default()
                .name(*name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect::<Vec<_>>();

    let x_labels: Vec<Line> = points
        .iter()
        .map(|p| Line::from(p.month.clone()))
        .collect();

    let chart = Chart::new(datasets)
        .block(panel("Market Trends Over Time", theme))
        .x_axis(
            Axis::default()
                .style(theme.dimmed_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.dimmed_style)
                .bounds([0.0, y_max])
                .labels([Line::from("0"), Line::from(format!("{y_max:.0}"))]),
        );

    chart.render(area, buf);
}

fn render_competitors(competitors: &[Competitor], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let outer = panel("Competitive Landscape", theme);
    let inner = outer.inner(area);
    outer.render(area, buf);

    if competitors.is_empty() {
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let count = competitors.len() as u32;
    let areas = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(inner);

    for (competitor, card_area) in competitors.iter().zip(areas.iter()) {
        let lines = vec![
            Line::styled(
                competitor.company.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("Products ", theme.dimmed_style),
                Span::raw(competitor.products.to_string()),
                Span::styled("  Avg Score ", theme.dimmed_style),
                Span::raw(format!("{}", competitor.score)),
            ]),
            Line::from(vec![
                Span::styled("Growth ", theme.dimmed_style),
                Span::styled(
                    competitor.trend.clone(),
                    theme.trend_style(is_positive_trend(&competitor.trend)),
                ),
            ]),
        ];
        Paragraph::new(lines).render(*card_area, buf);
    }
}
