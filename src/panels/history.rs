//! src/panels/history.rs
//!
//! History panel: renders the tail of the active buffer, newest sample
//! highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::SharedDash;

/// Shows the most recent samples of whichever buffer is active.
pub struct HistoryPanel {
    pub shared: SharedDash,
}

impl HistoryPanel {
    /// Create a new HistoryPanel.
    pub fn new(shared: SharedDash) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for HistoryPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();
        let active = state.store.active();
        let buffer = state.store.buffer(active);

        let height = area.height.saturating_sub(2) as usize;
        let len = buffer.len();
        let start = len.saturating_sub(height);
        let last_index = len.saturating_sub(1);

        let lines: Vec<Line> = buffer
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, sample)| {
                let is_latest = i == last_index;
                let label_style = if is_latest {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                let value_style = if is_latest {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(sample.label.clone(), label_style),
                    Span::raw("  "),
                    Span::styled(format!("{:>7.2}", sample.value), value_style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(format!("Samples ({}/{})", len, buffer.capacity()))
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
