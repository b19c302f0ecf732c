//! src/series/buffer.rs
//!
//! Capacity-bounded series storage for a single resolution, plus owned
//! snapshots for widget lifetimes.

use std::collections::VecDeque;

/// One recorded sample: a display timestamp and the flow value it labels.
/// Keeping them in one record makes the label/value alignment structural.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

/// Bounded FIFO of samples. Oldest sample at the front; appending past
/// capacity evicts from the front.
#[derive(Debug)]
pub struct SeriesBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SeriesBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            // month capacity is 43k; don't reserve it all up front
            samples: VecDeque::with_capacity(capacity.min(1_024)),
            capacity,
        }
    }

    /// Append to the tail. Always succeeds; when the buffer is full the
    /// oldest sample is dropped first, keeping `len() <= capacity`.
    pub fn append(&mut self, label: String, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { label, value });
    }

    /// Owned copy of the contents in insertion order (oldest first),
    /// suitable for handing to a chart widget. Read-only; no side effects.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    /// Most recently appended sample, if any.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str, value: f64) -> Sample {
        Sample {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn append_evicts_oldest_first() {
        let mut buf = SeriesBuffer::new(3);
        buf.append("t1".into(), 10.0);
        buf.append("t2".into(), 20.0);
        buf.append("t3".into(), 30.0);
        buf.append("t4".into(), 40.0);

        assert_eq!(
            buf.snapshot(),
            vec![sample("t2", 20.0), sample("t3", 30.0), sample("t4", 40.0)]
        );
    }

    #[test]
    fn length_is_min_of_appends_and_capacity() {
        let mut buf = SeriesBuffer::new(60);
        for i in 0..100 {
            buf.append(format!("t{i}"), i as f64);
        }
        assert_eq!(buf.len(), 60);
        // the surviving window is the last 60 appends, order preserved
        let snap = buf.snapshot();
        assert_eq!(snap.first().unwrap().value, 40.0);
        assert_eq!(snap.last().unwrap().value, 99.0);

        let mut short = SeriesBuffer::new(60);
        short.append("t0".into(), 1.0);
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn empty_buffer_snapshot() {
        let buf = SeriesBuffer::new(5);
        assert!(buf.is_empty());
        assert!(buf.snapshot().is_empty());
        assert_eq!(buf.last(), None);
    }
}
