//! Terminal presentation of the chain. Reads driver/engine state only.

pub mod common;
mod distribution_chart;
mod header;
mod history_chart;
mod stats_panel;
mod transition_table;

pub use header::die_art;
pub use history_chart::step_points;

use crate::driver::Driver;
use common::render_status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, driver: &Driver, history_window: usize) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Header
            Constraint::Min(12),    // Charts
            Constraint::Length(12), // Matrix + statistics
            Constraint::Length(2),  // Status bar
        ])
        .split(size);

    header::draw_header(frame, v_chunks[0], driver);

    let chart_chunks = split_halves(v_chunks[1]);
    distribution_chart::draw_distribution_chart(frame, chart_chunks[0], &driver.engine);
    history_chart::draw_history_chart(
        frame,
        chart_chunks[1],
        driver.engine.recent_history(history_window),
    );

    let bottom_chunks = split_halves(v_chunks[2]);
    transition_table::draw_transition_table(frame, bottom_chunks[0], driver.engine.residue());
    stats_panel::draw_stats_panel(frame, bottom_chunks[1], &driver.engine);

    draw_footer(frame, v_chunks[3], driver);
}

fn split_halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_footer(frame: &mut Frame, area: Rect, driver: &Driver) {
    let (status, color) = if driver.running {
        ("Rolling...", Color::Green)
    } else if driver.engine.has_rolled() {
        ("Paused", Color::Yellow)
    } else {
        ("Ready", Color::Cyan)
    };

    let mut controls: Vec<(&str, &str)> = vec![("[Space]", driver.primary_label())];
    if !driver.running {
        controls.push(("[S]", "Roll once"));
    }
    controls.extend([
        ("[R]", "Reset"),
        ("[+/-]", "Speed"),
        ("[1-4]", "Preset"),
        ("[Q]", "Quit"),
    ]);

    render_status_bar(frame, area, status, color, &controls);
}
