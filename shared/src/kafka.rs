//! Kafka helpers shared by services that talk to the broker: base client
//! configuration with optional credentials, and idempotent topic creation.

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::ClientConfig;
use tracing::{info, warn};

use crate::config::BrokerSettings;

/// Base client configuration for the configured broker host. SASL PLAIN
/// credentials are applied when the settings carry both a username and a
/// password.
pub fn client_config(settings: &BrokerSettings) -> ClientConfig {
    let mut cfg = ClientConfig::new();
    cfg.set("bootstrap.servers", &settings.message_broker_url);
    if let (Some(user), Some(pass)) = (&settings.broker_username, &settings.broker_password) {
        cfg.set("security.protocol", "SASL_PLAINTEXT")
            .set("sasl.mechanisms", "PLAIN")
            .set("sasl.username", user)
            .set("sasl.password", pass);
    }
    cfg
}

/// Ensure the given topic exists, creating it with a single partition and
/// replication factor 1. An already-existing topic is not an error.
pub async fn ensure_topic(settings: &BrokerSettings, topic: &str) -> Result<(), KafkaError> {
    let admin: AdminClient<_> = client_config(settings).create()?;
    let topics = [NewTopic::new(topic, 1, TopicReplication::Fixed(1))];
    let results = admin.create_topics(topics.iter(), &AdminOptions::new()).await?;
    for result in results {
        match result {
            Ok(name) => info!(topic = %name, "topic created"),
            Err((name, err)) if err == RDKafkaErrorCode::TopicAlreadyExists => {
                info!(topic = %name, "topic already exists");
            }
            Err((name, err)) => warn!(topic = %name, %err, "failed to create topic"),
        }
    }
    Ok(())
}
