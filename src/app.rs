//! src/app.rs
//!
//! Flow-meter dashboard over HTTP.
//! Polls the meter's `/data` endpoint once per second, feeds the bounded
//! hour/day/month series buffers, and renders live readouts plus a line
//! chart of whichever window is selected.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release [BASE_URL]
//! ```
//!
//! `BASE_URL` defaults to the meter's softAP address
//! (`http://192.168.4.1`).
//!
//! # Keyboard Controls
//!
//! - **h / d / m** — Switch the chart to the hour, day, or month view.
//!   Switching only changes which buffer is mirrored; no history is lost.
//! - **i** — Cycle the meter's logging interval (2000 → 5000 → 10000 ms)
//!   and post it to `/set_interval`. The outcome lands on the status line.
//! - **q** — Quit and restore the terminal.
//!
//! # Polling Behavior
//!
//! A background thread fetches a reading every second and applies it to
//! the shared state. A failed tick records a status event and changes
//! nothing else; the loop never stops and never retries early. Responses
//! are applied in arrival order with no reconciliation.

use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use color_eyre::Result;

use crate::net::MeterClient;
use crate::panels::{ChartPanel, HistoryPanel, ParagraphPanel, ReadoutPanel, TitlePanel};
use crate::state::{DashState, SharedDash};
use crate::ui::{Node, group, leaf};

/// One dashboard tick. The original page polled once per second; so do we.
const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Logging intervals the meter firmware accepts, in ms.
const LOG_INTERVALS_MS: [u32; 3] = [2_000, 5_000, 10_000];

/// Meter softAP default.
const DEFAULT_BASE_URL: &str = "http://192.168.4.1";

/// Spawn the poll thread: fetch a reading every tick and apply the outcome
/// to the shared state. Errors are recorded as status events, never fatal.
fn start_poll_loop(client: Arc<MeterClient>, shared: SharedDash) {
    thread::spawn(move || {
        loop {
            match client.fetch_reading() {
                Ok(reading) => {
                    if let Ok(mut state) = shared.write() {
                        state.apply_reading(reading);
                    }
                }
                Err(e) => {
                    if let Ok(mut state) = shared.write() {
                        state.apply_poll_failure(e.to_string());
                    }
                }
            }
            thread::sleep(POLL_PERIOD);
        }
    });
}

/// Post a logging interval on a detached thread. Fire-and-forget: the UI
/// keeps running and the result only feeds the status line.
fn post_interval(client: Arc<MeterClient>, shared: SharedDash, interval_ms: u32) {
    thread::spawn(move || {
        let result = client
            .set_log_interval(interval_ms)
            .map_err(|e| e.to_string());
        if let Ok(mut state) = shared.write() {
            state.apply_interval_result(interval_ms, result);
        }
    });
}

/// Next interval preset after `current`, wrapping. An unacknowledged or
/// unknown value restarts the cycle at the first preset.
fn next_interval(current: u32) -> u32 {
    match LOG_INTERVALS_MS.iter().position(|&v| v == current) {
        Some(i) => LOG_INTERVALS_MS[(i + 1) % LOG_INTERVALS_MS.len()],
        None => LOG_INTERVALS_MS[0],
    }
}

/// Switch the chart to the view named by `tag`. Key handlers address views
/// by tag; an unknown tag is a wiring bug and fails loudly rather than
/// silently defaulting.
fn switch_view(shared: &SharedDash, tag: &str) {
    let mut state = shared.write().unwrap();
    state
        .store
        .set_active_tag(tag)
        .expect("key handler wired to an unknown resolution tag");
}

pub fn run() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client = Arc::new(MeterClient::new(&base_url));
    let shared: SharedDash = Arc::new(RwLock::new(DashState::new()));

    start_poll_loop(client.clone(), shared.clone());

    let mut terminal = ratatui::init();
    let frame_time = Duration::from_millis(100);
    let mut running = true;

    while running {
        let frame_start = std::time::Instant::now();

        let root = group(
            ratatui::layout::Direction::Vertical,
            vec![
                ratatui::layout::Constraint::Length(3),
                ratatui::layout::Constraint::Min(0),
                ratatui::layout::Constraint::Length(3),
            ],
            vec![
                leaf(TitlePanel::new(&format!("Flow Meter ({base_url})"))),
                group(
                    ratatui::layout::Direction::Horizontal,
                    vec![
                        ratatui::layout::Constraint::Percentage(65),
                        ratatui::layout::Constraint::Percentage(35),
                    ],
                    vec![
                        leaf(ChartPanel::new(shared.clone())),
                        group(
                            ratatui::layout::Direction::Vertical,
                            vec![
                                ratatui::layout::Constraint::Length(7),
                                ratatui::layout::Constraint::Min(0),
                            ],
                            vec![
                                leaf(ReadoutPanel::new(shared.clone())),
                                leaf(HistoryPanel::new(shared.clone())),
                            ],
                        ),
                    ],
                ),
                leaf(ParagraphPanel::new(
                    "H=Hour  D=Day  M=Month  I=Cycle log interval  Q=Quit",
                    "Controls",
                )),
            ],
        );

        terminal.draw(|f| root.draw(f, f.area()))?;

        // Keyboard controls
        while crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') => running = false,
                    crossterm::event::KeyCode::Char('h') => switch_view(&shared, "hour"),
                    crossterm::event::KeyCode::Char('d') => switch_view(&shared, "day"),
                    crossterm::event::KeyCode::Char('m') => switch_view(&shared, "month"),
                    crossterm::event::KeyCode::Char('i') => {
                        let next = {
                            let state = shared.read().unwrap();
                            next_interval(state.log_interval_ms)
                        };
                        post_interval(client.clone(), shared.clone(), next);
                    }
                    _ => {}
                }
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_presets_cycle_and_wrap() {
        assert_eq!(next_interval(2_000), 5_000);
        assert_eq!(next_interval(5_000), 10_000);
        assert_eq!(next_interval(10_000), 2_000);
    }

    #[test]
    fn unknown_interval_restarts_the_cycle() {
        assert_eq!(next_interval(0), 2_000);
        assert_eq!(next_interval(7_500), 2_000);
    }
}
