//! Timed test publisher.
//!
//! Connects to the broker over TLS, then publishes a fresh JSON payload to the
//! fixed test topic every 10 seconds with QoS 0 until interrupted. Network I/O
//! runs on a background task polling the client event loop, mirroring the
//! client library's own processing thread.

use std::time::Duration;

use color_eyre::Result;
use rumqttc::QoS;
use tokio::time;
use tracing::{debug, error, info};

use iot_smoketest::config::BrokerConfig;
use iot_smoketest::payload::TestPayload;
use iot_smoketest::{client, PUBLISH_PERIOD, PUBLISH_TOPIC};

#[tokio::main]
async fn main() -> Result<()> {
    iot_smoketest::setup()?;

    let config = BrokerConfig::load().await?;
    info!("Connecting to {}:{}", config.host, config.port);

    let (mqtt_client, mut event_loop) = client::connect(&config, "iot-smoketest-pub");

    let network = tokio::spawn(async move {
        loop {
            match event_loop.poll().await {
                Ok(event) => debug!("MQTT event: {:?}", event),
                Err(e) => {
                    error!("MQTT connection error: {}", e);
                    time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    });

    let mut ticker = time::interval(PUBLISH_PERIOD);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let payload = TestPayload::new().to_json()?;
                mqtt_client
                    .publish(PUBLISH_TOPIC, QoS::AtMostOnce, false, payload)
                    .await?;
                println!("Publish");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, disconnecting");
                break;
            }
        }
    }

    mqtt_client.disconnect().await?;
    // Give the event loop a moment to put the disconnect on the wire.
    time::sleep(Duration::from_millis(100)).await;
    network.abort();

    Ok(())
}
