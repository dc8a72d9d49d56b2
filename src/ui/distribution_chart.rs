//! Observed vs theoretical state distribution as grouped bars.

use super::common::{panel, OBSERVED_COLOR, THEORETICAL_COLOR};
use crate::chain::SimulationEngine;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Percentages are charted in tenths so one decimal survives the u64 bars.
fn to_tenths(pct: f64) -> u64 {
    (pct * 10.0).round().max(0.0) as u64
}

pub fn draw_distribution_chart(frame: &mut Frame, area: Rect, engine: &SimulationEngine) {
    let block = panel(" State Distribution ", Color::Blue);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let observed = engine.observed_distribution();
    let theoretical = engine.theoretical_distribution();

    let groups: Vec<BarGroup> = observed
        .iter()
        .zip(theoretical.iter())
        .enumerate()
        .map(|(state, (&obs, &theo))| {
            let bars = [
                Bar::default()
                    .value(to_tenths(obs))
                    .text_value(format!("{:.1}", obs))
                    .style(Style::default().fg(OBSERVED_COLOR)),
                Bar::default()
                    .value(to_tenths(theo))
                    .text_value(format!("{:.1}", theo))
                    .style(Style::default().fg(THEORETICAL_COLOR)),
            ];
            BarGroup::default()
                .label(Line::from(state.to_string()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .bar_width(4)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(Color::White));
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, chunks[0]);

    let legend = Line::from(vec![
        Span::styled("■ Observed", Style::default().fg(OBSERVED_COLOR)),
        Span::raw("   "),
        Span::styled("■ Theoretical (1/7)", Style::default().fg(THEORETICAL_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(legend), chunks[1]);
}
