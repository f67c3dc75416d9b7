use std::{path::PathBuf, time::Duration};

use config::{Config, Environment, FileFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ClientConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// environment variables with this prefix override file settings, e.g. `SHUTTLE_BASE_URL`
pub const ENV_PREFIX: &str = "SHUTTLE";

/// where the backend lives and where the session is kept.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// per-request timeout, written as a human readable duration such as `30s`
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(30),
            session_file: PathBuf::from(".shuttle-session.json"),
        }
    }
}

impl ClientConfig {
    /// layers, lowest precedence first: built-in defaults, the optional TOML file,
    /// and `SHUTTLE_*` environment variables.
    pub fn load(config_file: Option<&str>) -> Result<ClientConfig, ClientConfigError> {
        ClientConfig::load_with_env(config_file, None)
    }

    /// as [`ClientConfig::load`], reading the `SHUTTLE_*` variables from `env` instead
    /// of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<ClientConfig, ClientConfigError> {
        let defaults = ClientConfig::default();
        let read_error = |msg: String| {
            move |source: config::ConfigError| ClientConfigError::ConfigReadError { msg, source }
        };
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url.clone())
            .and_then(|b| {
                b.set_default(
                    "timeout",
                    humantime::format_duration(defaults.timeout).to_string(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "session_file",
                    defaults.session_file.to_string_lossy().to_string(),
                )
            })
            .map_err(read_error(String::from("failed setting configuration defaults")))?;
        if let Some(f) = config_file {
            log::info!("reading shuttle configuration from {f}");
            builder = builder.add_source(config::File::new(f, FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(read_error(match config_file {
                Some(f) => format!("failed reading '{f}'"),
                None => String::from("failed reading configuration"),
            }))?;
        config
            .try_deserialize::<ClientConfig>()
            .map_err(read_error(String::from("failed decoding configuration")))
    }

    pub fn to_toml(&self) -> Result<String, ClientConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn serialize_duration<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&humantime::format_duration(*value).to_string())
}

fn deserialize_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(&s)
        .map_err(|e| serde::de::Error::custom(format!("invalid duration '{s}': {e}")))
}
