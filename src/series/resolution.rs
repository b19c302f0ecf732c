//! src/series/resolution.rs
//!
//! Retention windows for the flow series: tags, the capacity table, and
//! tag parsing at the UI boundary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned when UI wiring passes a tag outside the known resolution set.
/// This is a programming error in the caller, not a runtime condition to
/// paper over with a default.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resolution tag '{0}'")]
pub struct InvalidResolution(pub String);

/// One of the three retention windows. Each has its own bounded buffer;
/// exactly one is mirrored into the chart at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    Hour,
    Day,
    Month,
}

impl Resolution {
    /// All known resolutions, in display order.
    pub const ALL: [Resolution; 3] = [Resolution::Hour, Resolution::Day, Resolution::Month];

    /// Maximum retained samples per window: 60 for the hour view, minutes
    /// in a day for the day view, minutes in 30 days for the month view.
    /// Bounds memory no matter how long the dashboard stays up.
    pub fn capacity(self) -> usize {
        match self {
            Resolution::Hour => 60,
            Resolution::Day => 1_440,
            Resolution::Month => 43_200,
        }
    }

    /// Stable lowercase tag used by selectors and display.
    pub fn tag(self) -> &'static str {
        match self {
            Resolution::Hour => "hour",
            Resolution::Day => "day",
            Resolution::Month => "month",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Resolution {
    type Err = InvalidResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Resolution::Hour),
            "day" => Ok(Resolution::Day),
            "month" => Ok(Resolution::Month),
            other => Err(InvalidResolution(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for res in Resolution::ALL {
            assert_eq!(res.tag().parse::<Resolution>(), Ok(res));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "week".parse::<Resolution>().unwrap_err();
        assert_eq!(err, InvalidResolution("week".to_string()));
    }

    #[test]
    fn capacity_table() {
        assert_eq!(Resolution::Hour.capacity(), 60);
        assert_eq!(Resolution::Day.capacity(), 1_440);
        assert_eq!(Resolution::Month.capacity(), 43_200);
    }
}
