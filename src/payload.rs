//! The JSON payload sent on every publish cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fixed test record with a fresh UTC timestamp per publish.
///
/// Serializes to `{"type":"test","message":"hello","timestamp":"..."}` with
/// the timestamp in RFC 3339 form.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TestPayload {
    #[serde(rename = "type")]
    kind: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

impl TestPayload {
    pub fn new() -> Self {
        TestPayload {
            kind: "test",
            message: "hello",
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for TestPayload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn payload_has_expected_fields() {
        let json = TestPayload::new().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["type"], "test");
        assert_eq!(object["message"], "hello");
        assert!(object["timestamp"].is_string());
    }

    #[test]
    fn timestamp_is_current_utc() {
        let start = Utc::now();
        let json = TestPayload::new().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let timestamp = DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        assert!(timestamp >= start);
        assert!(timestamp <= Utc::now());
    }

    #[test]
    fn each_publish_cycle_builds_a_fresh_payload() {
        let first = TestPayload::new();
        let later = TestPayload::new();
        assert!(later.timestamp >= first.timestamp);
    }
}
