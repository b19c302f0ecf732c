//! src/state.rs
//!
//! Shared dashboard state: mutated by the poll and config threads, read by
//! every panel. Background outcomes are applied as explicit status events
//! rather than console prints the raw-mode terminal would clobber.

use std::sync::{Arc, RwLock};

use crate::net::Reading;
use crate::series::SeriesStore;

/// Outcome of a background action, shown on the status line.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusEvent {
    PollFailed(String),
    IntervalApplied(u32),
    IntervalFailed(String),
}

pub struct DashState {
    pub store: SeriesStore,

    /// Most recent successfully fetched reading. Readouts keep showing the
    /// last good value across failed ticks.
    pub latest: Option<Reading>,

    /// Meter logging interval in ms, as last acknowledged by the backend.
    pub log_interval_ms: u32,

    pub ticks: u64,
    pub failed_ticks: u64,
    pub status: Option<StatusEvent>,
}

impl DashState {
    pub fn new() -> Self {
        Self {
            store: SeriesStore::new(),
            latest: None,
            // firmware default
            log_interval_ms: 5_000,
            ticks: 0,
            failed_ticks: 0,
            status: None,
        }
    }

    /// Apply one successful poll tick: the readouts and all three buffers
    /// move together.
    pub fn apply_reading(&mut self, reading: Reading) {
        self.store.record(reading.flow);
        self.latest = Some(reading);
        self.ticks += 1;
    }

    /// A failed tick records an event and touches nothing else; the next
    /// tick proceeds independently.
    pub fn apply_poll_failure(&mut self, err: String) {
        self.failed_ticks += 1;
        self.status = Some(StatusEvent::PollFailed(err));
    }

    /// Record the outcome of a fire-and-forget interval post. Only an
    /// acknowledged change updates the displayed interval.
    pub fn apply_interval_result(&mut self, interval_ms: u32, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.log_interval_ms = interval_ms;
                self.status = Some(StatusEvent::IntervalApplied(interval_ms));
            }
            Err(err) => {
                self.status = Some(StatusEvent::IntervalFailed(err));
            }
        }
    }
}

impl Default for DashState {
    fn default() -> Self {
        Self::new()
    }
}

/// Alias: Arc<RwLock<DashState>>
pub type SharedDash = Arc<RwLock<DashState>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Resolution;

    fn reading(flow: f64, volume: f64, time: &str) -> Reading {
        Reading {
            flow,
            volume,
            time: time.to_string(),
        }
    }

    #[test]
    fn successful_tick_updates_readouts_and_buffers() {
        let mut state = DashState::new();
        state.apply_reading(reading(12.5, 340.0, "12:00:01"));

        assert_eq!(state.ticks, 1);
        let latest = state.latest.as_ref().unwrap();
        assert_eq!(latest.flow, 12.5);
        for res in Resolution::ALL {
            assert_eq!(state.store.buffer(res).last().unwrap().value, 12.5);
        }
    }

    #[test]
    fn failed_tick_leaves_display_state_untouched() {
        let mut state = DashState::new();
        state.apply_reading(reading(8.0, 100.0, "12:00:01"));
        let snapshot_before = state.store.active_snapshot();

        state.apply_poll_failure("connection refused".to_string());

        assert_eq!(state.latest.as_ref().unwrap().flow, 8.0);
        assert_eq!(state.store.active_snapshot(), snapshot_before);
        assert_eq!(state.ticks, 1);
        assert_eq!(state.failed_ticks, 1);
        assert_eq!(
            state.status,
            Some(StatusEvent::PollFailed("connection refused".to_string()))
        );
    }

    #[test]
    fn interval_ack_updates_displayed_interval() {
        let mut state = DashState::new();
        state.apply_interval_result(2_000, Ok(()));
        assert_eq!(state.log_interval_ms, 2_000);
        assert_eq!(state.status, Some(StatusEvent::IntervalApplied(2_000)));
    }

    #[test]
    fn interval_failure_keeps_previous_interval() {
        let mut state = DashState::new();
        state.apply_interval_result(10_000, Err("500 Internal Server Error".to_string()));
        assert_eq!(state.log_interval_ms, 5_000);
        assert_eq!(
            state.status,
            Some(StatusEvent::IntervalFailed(
                "500 Internal Server Error".to_string()
            ))
        );
    }
}
