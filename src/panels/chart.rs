//! src/panels/chart.rs
//!
//! Line chart mirroring the active resolution's buffer. The chart never
//! owns series data: every draw re-pulls a fresh snapshot, so appends and
//! view switches show up on the next frame with no transition animation.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::state::SharedDash;

/// Y-axis range in L/min, matching the meter's gauge range.
const FLOW_RANGE: (f64, f64) = (0.0, 70.0);

pub struct ChartPanel {
    pub shared: SharedDash,
}

impl ChartPanel {
    /// Create a new ChartPanel over the shared dashboard state.
    pub fn new(shared: SharedDash) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for ChartPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();
        let active = state.store.active();
        let snapshot = state.store.active_snapshot();

        // Owned point vec kept alive until Chart::new() consumes the slice.
        let points: Vec<(f64, f64)> = snapshot
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.value))
            .collect();
        let xmax = points.len().saturating_sub(1).max(1) as f64;

        let dataset = Dataset::default()
            .name("Flow Rate (L/min)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightRed))
            .data(points.as_slice());

        // x-axis labeled with the oldest and newest sample timestamps
        let x_labels: Vec<String> = match (snapshot.first(), snapshot.last()) {
            (Some(first), Some(last)) => vec![first.label.clone(), last.label.clone()],
            _ => Vec::new(),
        };

        let (ymin, ymax) = FLOW_RANGE;
        let mut y_labels: Vec<String> = Vec::with_capacity(5);
        for i in 0..5 {
            let v = ymin + (ymax - ymin) * (i as f64) / 4.0;
            y_labels.push(format!("{:.0}", v));
        }

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .title(format!("Flow Rate ({} view)", active))
                    .borders(Borders::ALL),
            )
            .x_axis(Axis::default().bounds([0.0, xmax]).labels(x_labels))
            .y_axis(Axis::default().bounds([ymin, ymax]).labels(y_labels));

        f.render_widget(chart, area);
    }
}
