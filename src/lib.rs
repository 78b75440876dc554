//! # IoT Broker Smoke-Test Utilities
//!
//! Shared pieces for the two connectivity-test binaries:
//! - `iot-pub` publishes a small JSON payload to a fixed topic every 10 seconds
//! - `iot-sub` subscribes to the matching wildcard filter and prints everything
//!   it receives
//!
//! Both binaries talk MQTT over TLS to an external broker and run until
//! interrupted. All protocol handling (framing, keepalive, reconnects) is left
//! to the client library; this crate only wires up configuration, the payload
//! format and the two loops.

pub mod client;
pub mod config;
pub mod message;
pub mod payload;

use std::time::Duration;

use color_eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Topic hierarchy: root/site/area/type/deviceID/topic
pub const PUBLISH_TOPIC: &str = "iot/site/area/test/dev999/data";

/// Matches the publish topic with single-level wildcards in the
/// site/area/deviceID positions.
pub const SUBSCRIBE_FILTER: &str = "iot/+/+/test/+/data";

/// Pause between publish cycles.
pub const PUBLISH_PERIOD: Duration = Duration::from_secs(10);

/// Error reporting and logging setup shared by both binaries.
pub fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumqttc::mqttbytes::{matches, valid_filter, valid_topic};

    #[test]
    fn publish_topic_is_well_formed() {
        assert!(valid_topic(PUBLISH_TOPIC));
        assert_eq!(PUBLISH_TOPIC.split('/').count(), 6);
    }

    #[test]
    fn subscribe_filter_is_well_formed() {
        assert!(valid_filter(SUBSCRIBE_FILTER));
    }

    #[test]
    fn filter_matches_publish_topic() {
        assert!(matches(PUBLISH_TOPIC, SUBSCRIBE_FILTER));
    }

    #[test]
    fn filter_matches_other_devices_and_sites() {
        assert!(matches("iot/siteA/area1/test/dev999/data", SUBSCRIBE_FILTER));
        assert!(matches("iot/plant2/hall7/test/dev001/data", SUBSCRIBE_FILTER));
    }

    #[test]
    fn filter_rejects_other_message_types() {
        assert!(!matches("iot/site/area/status/dev999/data", SUBSCRIBE_FILTER));
        assert!(!matches("iot/site/area/test/dev999/command", SUBSCRIBE_FILTER));
    }
}
