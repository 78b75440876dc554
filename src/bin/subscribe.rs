//! Wildcard test subscriber.
//!
//! Connects to the broker over TLS, subscribes to the test topic filter with
//! QoS 0 and prints every received message's topic and payload until
//! interrupted. The event loop doubles as the blocking receive loop.

use std::time::Duration;

use color_eyre::Result;
use rumqttc::{Event, Packet, QoS};
use tokio::time;
use tracing::{debug, error, info};

use iot_smoketest::config::BrokerConfig;
use iot_smoketest::message::ReceivedMessage;
use iot_smoketest::{client, SUBSCRIBE_FILTER};

#[tokio::main]
async fn main() -> Result<()> {
    iot_smoketest::setup()?;

    let config = BrokerConfig::load().await?;
    info!("Connecting to {}:{}", config.host, config.port);

    let (mqtt_client, mut event_loop) = client::connect(&config, "iot-smoketest-sub");
    mqtt_client
        .subscribe(SUBSCRIBE_FILTER, QoS::AtMostOnce)
        .await?;

    loop {
        tokio::select! {
            event = event_loop.poll() => match event {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    let message = ReceivedMessage::from_publish(&publish.topic, &publish.payload);
                    println!("{}", message);
                }
                Ok(event) => debug!("MQTT event: {:?}", event),
                Err(e) => {
                    error!("MQTT connection error: {}", e);
                    time::sleep(Duration::from_secs(1)).await;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, disconnecting");
                break;
            }
        }
    }

    mqtt_client.disconnect().await?;
    // Drive the disconnect onto the wire before exiting.
    let _ = event_loop.poll().await;

    Ok(())
}
