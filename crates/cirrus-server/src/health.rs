//! Health endpoint payload.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Response body for `GET /health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
    /// The function target this process serves.
    pub target: String,
}

/// Build a health response.
pub fn health_check(start_time: Instant, target: &str) -> HealthResponse {
    HealthResponse {
        status: "ok".into(),
        uptime_secs: start_time.elapsed().as_secs(),
        target: target.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_ok() {
        let resp = health_check(Instant::now(), "hello-http");
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.target, "hello-http");
    }

    #[test]
    fn uptime_is_non_decreasing() {
        let start = Instant::now();
        let a = health_check(start, "t").uptime_secs;
        let b = health_check(start, "t").uptime_secs;
        assert!(b >= a);
    }

    #[test]
    fn serializes_expected_fields() {
        let resp = health_check(Instant::now(), "hello-pubsub");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].is_number());
        assert_eq!(json["target"], "hello-pubsub");
    }
}
