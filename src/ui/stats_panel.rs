//! Per-state visit counts, percentages and the deviation from 1/7.

use super::common::{labeled, panel, OBSERVED_COLOR};
use crate::chain::SimulationEngine;
use crate::constants::THEORETICAL_PERCENT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

/// Draws the detailed statistics panel.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, engine: &SimulationEngine) {
    let block = panel(" Detailed Statistics ", Color::Green);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !engine.has_rolled() {
        let hint = Paragraph::new("Roll the die to collect statistics")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let observed = engine.observed_distribution();
    let header = Row::new(vec!["State", "Visits", "Observed"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = engine
        .frequency()
        .iter()
        .zip(observed.iter())
        .enumerate()
        .map(|(state, (&count, &pct))| {
            let current = state as u8 == engine.residue();
            let marker = if current { "▶ " } else { "  " };
            Row::new(vec![
                Cell::from(format!("{}{}", marker, state)),
                Cell::from(count.to_string())
                    .style(Style::default().fg(OBSERVED_COLOR).add_modifier(Modifier::BOLD)),
                Cell::from(format!("{:.1}%", pct)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header);
    frame.render_widget(table, chunks[0]);

    let summary = vec![
        Line::from(labeled(
            "Theoretical: ",
            format!("1/7 ≈ {:.2}% per state", THEORETICAL_PERCENT),
            Color::White,
        )),
        Line::from(labeled(
            "Mean abs deviation: ",
            format!("{:.2}%", engine.mean_absolute_deviation()),
            Color::Yellow,
        )),
    ];
    frame.render_widget(Paragraph::new(summary), chunks[1]);
}
