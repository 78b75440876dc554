//! Client construction for the TLS broker connection.

use std::sync::Arc;
use std::time::Duration;

use rumqttc::tokio_rustls::rustls::{ClientConfig, RootCertStore};
use rumqttc::{AsyncClient, EventLoop, MqttOptions, TlsConfiguration, Transport};

use crate::config::BrokerConfig;

const KEEP_ALIVE: Duration = Duration::from_secs(60);
const REQUEST_CHANNEL_CAPACITY: usize = 10;

/// Builds the client and its event loop from the loaded broker settings.
/// The event loop must be polled for any network traffic to happen.
pub fn connect(config: &BrokerConfig, client_id: &str) -> (AsyncClient, EventLoop) {
    AsyncClient::new(mqtt_options(config, client_id), REQUEST_CHANNEL_CAPACITY)
}

fn mqtt_options(config: &BrokerConfig, client_id: &str) -> MqttOptions {
    let mut mqtt_options = MqttOptions::new(client_id, config.host.clone(), config.port);
    mqtt_options
        .set_credentials(config.username.clone(), config.password.clone())
        .set_keep_alive(KEEP_ALIVE)
        .set_transport(tls_transport());
    mqtt_options
}

/// TLS against the standard webpki root certificates, no client certificate.
fn tls_transport() -> Transport {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let tls_config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();

    Transport::Tls(TlsConfiguration::Rustls(Arc::new(tls_config)))
}
