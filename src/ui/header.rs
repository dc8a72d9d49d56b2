//! Title bar, chain counters and the last-roll die.

use super::common::{labeled, panel, ACCENT_COLOR};
use crate::chain::DieFace;
use crate::driver::Driver;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PIP: char = '●';

/// Pip positions on a 3x3 grid, row-major.
fn pip_grid(face: DieFace) -> [[bool; 3]; 3] {
    let (t, f) = (true, false);
    match face.value() {
        1 => [[f, f, f], [f, t, f], [f, f, f]],
        2 => [[t, f, f], [f, f, f], [f, f, t]],
        3 => [[t, f, f], [f, t, f], [f, f, t]],
        4 => [[t, f, t], [f, f, f], [t, f, t]],
        5 => [[t, f, t], [f, t, f], [t, f, t]],
        _ => [[t, f, t], [t, f, t], [t, f, t]],
    }
}

/// Five-line ASCII rendering of a die face.
pub fn die_art(face: Option<DieFace>) -> [String; 5] {
    let mut rows = [
        "┌───────┐".to_string(),
        String::new(),
        String::new(),
        String::new(),
        "└───────┘".to_string(),
    ];
    let grid = face.map(pip_grid).unwrap_or([[false; 3]; 3]);
    for (row, cells) in rows[1..4].iter_mut().zip(grid.iter()) {
        row.push('│');
        for &on in cells {
            row.push(' ');
            row.push(if on { PIP } else { ' ' });
        }
        row.push_str(" │");
    }
    rows
}

/// Draws the header: title, counters and the last die rolled.
pub fn draw_header(frame: &mut Frame, area: Rect, driver: &Driver) {
    let block = panel(" Markov Chain - Dice Problem ", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(13)])
        .split(inner);

    let engine = &driver.engine;
    let run_state = if driver.running {
        Span::styled("RUNNING", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("PAUSED", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };

    let mut counters = labeled("Rolls: ", engine.roll_count().to_string(), Color::Blue);
    counters.push(Span::raw("   "));
    counters.extend(labeled("Sum S(n): ", engine.cumulative_sum().to_string(), Color::Green));
    counters.push(Span::raw("   "));
    counters.extend(labeled("State X(n): ", engine.residue().to_string(), ACCENT_COLOR));

    let mut speed = labeled(
        "Speed: ",
        format!("{} ({}ms)", driver.speed.name(), driver.speed.interval_ms()),
        Color::White,
    );
    speed.push(Span::raw("   "));
    speed.push(run_state);

    let lines = vec![
        Line::from(Span::styled(
            "Rolling a die and tracking the running sum modulo 7",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(counters),
        Line::from(speed),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let die_color = if engine.last_roll().is_some() {
        Color::Rgb(37, 99, 235)
    } else {
        Color::DarkGray
    };
    let die_lines: Vec<Line> = die_art(engine.last_roll())
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(die_color))))
        .collect();
    frame.render_widget(
        Paragraph::new(die_lines).alignment(Alignment::Center),
        chunks[1],
    );
}
