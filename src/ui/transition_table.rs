//! Transition matrix P as a table.

use super::common::panel;
use crate::chain::TransitionMatrix;
use crate::constants::MODULUS;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

pub fn draw_transition_table(frame: &mut Frame, area: Rect, current_state: u8) {
    let matrix = TransitionMatrix;
    let header_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let mut header_cells = vec![Cell::from("From\\To").style(header_style)];
    header_cells.extend((0..MODULUS).map(|to| Cell::from(to.to_string()).style(header_style)));

    let rows: Vec<Row> = (0..MODULUS)
        .map(|from| {
            // Highlight the row the chain is currently leaving from
            let row_style = if from == current_state {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut cells = vec![Cell::from(from.to_string()).style(header_style)];
            cells.extend((0..MODULUS).map(|to| {
                let style = if matrix.probability(from, to) > 0.0 {
                    Style::default().fg(Color::LightBlue)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Cell::from(matrix.label(from, to)).style(style)
            }));
            Row::new(cells).style(row_style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend((0..MODULUS).map(|_| Constraint::Length(4)));

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells))
        .block(panel(" Transition Matrix P ", Color::Gray));

    frame.render_widget(table, area);
}
