use crate::adapters::JsonFileCollection;
use crate::authentication::AdminCredentials;
use crate::domain::{Subscriber, Tip};
use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use telemetry::TelemetrySettings;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub admin: AdminCredentials,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub application_port: u16,
    pub host_name: String,
    pub hmac_secret: Secret<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub tips_path: PathBuf,
    pub subscribers_path: PathBuf,
}

impl StorageSettings {
    pub fn tip_collection(&self) -> JsonFileCollection<Tip> {
        JsonFileCollection::new(self.tips_path.clone())
    }

    pub fn subscriber_collection(&self) -> JsonFileCollection<Subscriber> {
        JsonFileCollection::new(self.subscribers_path.clone())
    }
}

/// Defaults, then `configuration/base.yaml`, then `configuration/{environment}.yaml`,
/// then `APP_`-prefixed environment variables. Every file is optional.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .set_default("application.application_port", 8000)?
        .set_default("application.host_name", "127.0.0.1")?
        .set_default(
            "application.hmac_secret",
            "local-only-session-key-local-only-session-key-local-only-session-key",
        )?
        .set_default("storage.tips_path", "data/daily_tips.json")?
        .set_default("storage.subscribers_path", "data/newsletter_subscribers.json")?
        .set_default("admin.username", "admin")?
        .set_default("admin.password", "admin123")?
        .set_default("telemetry.service_name", "sqldaily")?
        .set_default("telemetry.log_level", "info")?
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_ADMIN__PASSWORD=s3cret` would set `Settings.admin.password`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a support environment. Use either local or production",
                other
            )),
        }
    }
}
