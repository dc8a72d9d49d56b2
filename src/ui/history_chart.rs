//! Recent state trajectory as a stepped line chart.

use super::common::{panel, OBSERVED_COLOR};
use crate::chain::StepRecord;
use crate::constants::MODULUS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Points for a step-after line: each state holds until the next step.
pub fn step_points(records: &[StepRecord]) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(records.len() * 2);
    for (i, rec) in records.iter().enumerate() {
        if i > 0 {
            // Horizontal run from the previous step up to this one
            let prev = records[i - 1].residue as f64;
            points.push((rec.step_index as f64, prev));
        }
        points.push((rec.step_index as f64, rec.residue as f64));
    }
    points
}

pub fn draw_history_chart(frame: &mut Frame, area: Rect, records: &[StepRecord]) {
    let title = format!(" State History (last {} steps) ", records.len());
    let block = panel(&title, Color::Magenta);

    if records.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let hint = Paragraph::new("No rolls yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    let points = step_points(records);
    let x_min = records[0].step_index as f64;
    let x_max = (records[records.len() - 1].step_index as f64).max(x_min + 1.0);
    let y_max = (MODULUS - 1) as f64;

    let datasets = vec![Dataset::default()
        .name("X(n)")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(OBSERVED_COLOR))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("step")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(format!("{}", x_min as u64)),
                    Span::raw(format!("{}", x_max as u64)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("state")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw("3"), Span::raw("6")]),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::DieFace;

    fn rec(step: u64, residue: u8) -> StepRecord {
        StepRecord {
            step_index: step,
            residue,
            cumulative_sum: residue as u64,
            roll_value: DieFace::new(1).unwrap(),
        }
    }

    #[test]
    fn test_step_points_hold_previous_state() {
        let points = step_points(&[rec(1, 3), rec(2, 5), rec(3, 0)]);
        assert_eq!(
            points,
            vec![(1.0, 3.0), (2.0, 3.0), (2.0, 5.0), (3.0, 5.0), (3.0, 0.0)]
        );
    }

    #[test]
    fn test_step_points_empty() {
        assert!(step_points(&[]).is_empty());
    }
}
