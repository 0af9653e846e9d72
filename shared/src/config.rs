use serde::Deserialize;

fn default_stock_topic() -> String {
    "stock-updates".into()
}

fn default_consumer_group() -> String {
    "stock-service".into()
}

/// Database settings shared by every service. Loaded once at startup and
/// passed into the components that need them; a missing `DATABASE_URL` is a
/// configuration error and fatal.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub database_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}

/// Broker settings for services that consume queue messages. Credentials are
/// optional; when present they are applied as SASL PLAIN.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub message_broker_url: String,
    #[serde(default)]
    pub broker_username: Option<String>,
    #[serde(default)]
    pub broker_password: Option<String>,
    #[serde(default = "default_stock_topic")]
    pub stock_topic: String,
    #[serde(default = "default_consumer_group")]
    pub consumer_group: String,
}

impl BrokerSettings {
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn settings_require_database_url() {
        std::env::remove_var("DATABASE_URL");
        assert!(Settings::new().is_err());
    }

    #[test]
    #[serial]
    fn settings_load_from_environment() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/estock");
        let settings = Settings::new().unwrap();
        assert_eq!(settings.database_url, "postgres://localhost/estock");
        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial]
    fn broker_settings_apply_defaults() {
        std::env::set_var("MESSAGE_BROKER_URL", "kafka:9092");
        std::env::remove_var("BROKER_USERNAME");
        std::env::remove_var("BROKER_PASSWORD");
        let settings = BrokerSettings::new().unwrap();
        assert_eq!(settings.message_broker_url, "kafka:9092");
        assert_eq!(settings.stock_topic, "stock-updates");
        assert_eq!(settings.consumer_group, "stock-service");
        assert!(settings.broker_username.is_none());
        std::env::remove_var("MESSAGE_BROKER_URL");
    }
}
