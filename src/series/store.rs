//! src/series/store.rs
//!
//! Store owning one buffer per resolution. Readings fan out to every
//! buffer under a single wall-clock label; the active-view selection
//! decides which buffer the chart mirrors.

use std::str::FromStr;

use chrono::Local;

use super::buffer::{Sample, SeriesBuffer};
use super::resolution::{InvalidResolution, Resolution};

pub struct SeriesStore {
    hour: SeriesBuffer,
    day: SeriesBuffer,
    month: SeriesBuffer,
    active: Resolution,
}

impl SeriesStore {
    /// Empty store, hour view active.
    pub fn new() -> Self {
        Self {
            hour: SeriesBuffer::new(Resolution::Hour.capacity()),
            day: SeriesBuffer::new(Resolution::Day.capacity()),
            month: SeriesBuffer::new(Resolution::Month.capacity()),
            active: Resolution::Hour,
        }
    }

    /// Record a flow value under the current wall-clock time.
    pub fn record(&mut self, flow: f64) {
        let label = Local::now().format("%H:%M:%S").to_string();
        self.record_labeled(label, flow);
    }

    /// Fan one labeled value out to all three buffers in a single call, so
    /// their tails never diverge. Split from `record` so callers can drive
    /// deterministic labels.
    pub fn record_labeled(&mut self, label: String, value: f64) {
        for res in Resolution::ALL {
            self.buffer_mut(res).append(label.clone(), value);
        }
    }

    pub fn buffer(&self, res: Resolution) -> &SeriesBuffer {
        match res {
            Resolution::Hour => &self.hour,
            Resolution::Day => &self.day,
            Resolution::Month => &self.month,
        }
    }

    fn buffer_mut(&mut self, res: Resolution) -> &mut SeriesBuffer {
        match res {
            Resolution::Hour => &mut self.hour,
            Resolution::Day => &mut self.day,
            Resolution::Month => &mut self.month,
        }
    }

    pub fn active(&self) -> Resolution {
        self.active
    }

    /// Snapshot of the buffer the chart currently mirrors.
    pub fn active_snapshot(&self) -> Vec<Sample> {
        self.buffer(self.active).snapshot()
    }

    /// Switch the active view. Selection never touches buffer contents;
    /// the chart re-pulls the snapshot on its next draw.
    pub fn set_active(&mut self, res: Resolution) {
        self.active = res;
    }

    /// String-boundary variant for UI wiring: unknown tags are rejected
    /// and leave the selection unchanged.
    pub fn set_active_tag(&mut self, tag: &str) -> Result<Resolution, InvalidResolution> {
        let res = Resolution::from_str(tag)?;
        self.active = res;
        Ok(res)
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fans_out_to_every_tail() {
        let mut store = SeriesStore::new();
        store.record_labeled("t1".into(), 5.0);
        store.record_labeled("t2".into(), 6.0);
        store.record_labeled("t3".into(), 7.0);

        for res in Resolution::ALL {
            let last = store.buffer(res).last().unwrap();
            assert_eq!(last.label, "t3");
            assert_eq!(last.value, 7.0);
        }
        assert_eq!(store.buffer(Resolution::Hour).len(), 3);
    }

    #[test]
    fn buffers_diverge_only_in_retained_length() {
        let mut store = SeriesStore::new();
        // overflow the hour buffer but not day/month
        for i in 0..100 {
            store.record_labeled(format!("t{i}"), i as f64);
        }
        assert_eq!(store.buffer(Resolution::Hour).len(), 60);
        assert_eq!(store.buffer(Resolution::Day).len(), 100);
        assert_eq!(store.buffer(Resolution::Month).len(), 100);

        let tails: Vec<_> = Resolution::ALL
            .iter()
            .map(|&r| store.buffer(r).last().unwrap().clone())
            .collect();
        assert_eq!(tails[0], tails[1]);
        assert_eq!(tails[1], tails[2]);
    }

    #[test]
    fn switching_views_mutates_no_buffer() {
        let mut store = SeriesStore::new();
        store.record_labeled("t1".into(), 1.0);
        store.record_labeled("t2".into(), 2.0);
        let before: Vec<_> = Resolution::ALL
            .iter()
            .map(|&r| store.buffer(r).snapshot())
            .collect();

        store.set_active(Resolution::Month);
        assert_eq!(store.active(), Resolution::Month);

        let after: Vec<_> = Resolution::ALL
            .iter()
            .map(|&r| store.buffer(r).snapshot())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_tag_leaves_selection_unchanged() {
        let mut store = SeriesStore::new();
        store.set_active(Resolution::Day);

        let err = store.set_active_tag("week").unwrap_err();
        assert_eq!(err, InvalidResolution("week".to_string()));
        assert_eq!(store.active(), Resolution::Day);
    }

    #[test]
    fn active_snapshot_is_idempotent() {
        let mut store = SeriesStore::new();
        store.record_labeled("t1".into(), 3.5);
        assert_eq!(store.active_snapshot(), store.active_snapshot());
    }

    #[test]
    fn default_view_is_hour() {
        assert_eq!(SeriesStore::new().active(), Resolution::Hour);
    }
}
