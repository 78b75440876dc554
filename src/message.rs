//! Inbound message representation for the subscriber.

use std::fmt;

/// A received publish, decoded for printing: the concrete topic on one line,
/// the payload as UTF-8 text on the next. Invalid byte sequences become
/// replacement characters instead of failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedMessage {
    topic: String,
    content: String,
}

impl ReceivedMessage {
    pub fn from_publish(topic: &str, payload: &[u8]) -> Self {
        ReceivedMessage {
            topic: topic.to_string(),
            content: String::from_utf8_lossy(payload).into_owned(),
        }
    }
}

impl fmt::Display for ReceivedMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}", self.topic, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_topic_then_payload() {
        let msg = ReceivedMessage::from_publish(
            "iot/siteA/area1/test/dev999/data",
            br#"{"type":"test","message":"hello"}"#,
        );
        assert_eq!(
            msg.to_string(),
            "iot/siteA/area1/test/dev999/data\n{\"type\":\"test\",\"message\":\"hello\"}"
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let msg = ReceivedMessage::from_publish("iot/s/a/test/d/data", &[0x68, 0x69, 0xff, 0xfe]);
        assert_eq!(msg.to_string(), "iot/s/a/test/d/data\nhi\u{fffd}\u{fffd}");
    }

    #[test]
    fn empty_payload_prints_empty_line() {
        let msg = ReceivedMessage::from_publish("iot/s/a/test/d/data", b"");
        assert_eq!(msg.to_string(), "iot/s/a/test/d/data\n");
    }
}
