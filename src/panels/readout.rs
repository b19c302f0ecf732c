//! src/panels/readout.rs
//!
//! Live readouts: flow rate, total volume, and last-update time, plus the
//! status line for background poll/config outcomes.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{SharedDash, StatusEvent};

/// Read-only panel over the latest reading and status event.
pub struct ReadoutPanel {
    pub shared: SharedDash,
}

impl ReadoutPanel {
    pub fn new(shared: SharedDash) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for ReadoutPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();

        let (flow, volume, time) = match &state.latest {
            Some(r) => (
                format!("{:.2}", r.flow),
                format!("{:.2}", r.volume),
                r.time.clone(),
            ),
            None => ("--".to_string(), "--".to_string(), "--".to_string()),
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Flow Rate:    "),
                Span::styled(flow, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" L/min"),
            ]),
            Line::from(vec![
                Span::raw("Total Volume: "),
                Span::styled(volume, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" L"),
            ]),
            Line::from(vec![Span::raw("Last Update:  "), Span::raw(time)]),
            Line::from(vec![Span::raw(format!(
                "Log every {} ms   ticks={} failed={}",
                state.log_interval_ms, state.ticks, state.failed_ticks
            ))]),
        ];

        if let Some(event) = &state.status {
            let (text, color) = match event {
                StatusEvent::PollFailed(e) => (format!("poll failed: {e}"), Color::Red),
                StatusEvent::IntervalApplied(ms) => {
                    (format!("logging interval set to {ms} ms"), Color::Green)
                }
                StatusEvent::IntervalFailed(e) => (format!("interval update failed: {e}"), Color::Red),
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        }

        let block = Block::default().title("Readings").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
