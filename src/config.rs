use serde_aux::field_attributes::deserialize_number_from_string;
use std::convert::{TryFrom, TryInto};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub app: AppSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AppSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    //normal serde will fail to deserialize numbers into string
    pub port: u16,
    //health and metrics are served here, away from the greeting routes
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub admin_port: u16,
    //absent = fall back to the store's default greeting
    pub greeting: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment, use either `local` or `production`",
                other
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    tracing::debug!("loading config for {:?}", environment);

    config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(
            config_dir.join(format!("{}.yaml", environment.as_str())),
        ))
        .add_source(env_overrides())
        .build()?
        .try_deserialize()
}

// Add in settings from environment variables (with a prefix of APP and '__' as separator)
// E.g. `APP_APP__GREETING=Howdy` would set `Settings.app.greeting`
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}
