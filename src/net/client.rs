//! src/net/client.rs
//!
//! Blocking HTTP client for the flow meter's two endpoints: the reading
//! poll (`GET /data`) and the logging-interval update (`POST /set_interval`).

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One measurement snapshot as served by `GET /data`. Immutable once
/// received; `time` is the meter's own formatted timestamp.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reading {
    pub flow: f64,
    pub volume: f64,
    pub time: String,
}

/// Wire body for `POST /set_interval`.
#[derive(Debug, Serialize)]
struct IntervalBody {
    interval: u32,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
}

pub struct MeterClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl MeterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current reading. Any transport error, non-success status,
    /// or malformed body surfaces as `Err`; the caller skips the tick and
    /// no partial update occurs.
    pub fn fetch_reading(&self) -> Result<Reading, ClientError> {
        let resp = self.http.get(format!("{}/data", self.base_url)).send()?;
        if !resp.status().is_success() {
            return Err(ClientError::Status {
                endpoint: "/data",
                status: resp.status(),
            });
        }
        Ok(resp.json()?)
    }

    /// Post a new logging interval to the meter. Fire-and-forget from the
    /// UI's perspective; the result only feeds the status line.
    pub fn set_log_interval(&self, interval_ms: u32) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/set_interval", self.base_url))
            .json(&IntervalBody {
                interval: interval_ms,
            })
            .send()?;
        if !resp.status().is_success() {
            return Err(ClientError::Status {
                endpoint: "/set_interval",
                status: resp.status(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_parses_the_meter_payload() {
        let json = r#"{"flow": 12.34, "volume": 567.89, "time": "12:03:04"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(
            reading,
            Reading {
                flow: 12.34,
                volume: 567.89,
                time: "12:03:04".to_string(),
            }
        );
    }

    #[test]
    fn reading_with_missing_field_is_an_error() {
        let json = r#"{"volume": 567.89, "time": "12:03:04"}"#;
        assert!(serde_json::from_str::<Reading>(json).is_err());
    }

    #[test]
    fn interval_body_wire_shape() {
        let body = serde_json::to_string(&IntervalBody { interval: 5_000 }).unwrap();
        assert_eq!(body, r#"{"interval":5000}"#);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = MeterClient::new("http://192.168.4.1/");
        assert_eq!(client.base_url(), "http://192.168.4.1");
    }
}
