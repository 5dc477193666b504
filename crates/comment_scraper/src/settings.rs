use std::fmt;

use config::{Config, Environment};
use serde::Deserialize;

use crate::external_services::youtube::{ApiKey, YOUTUBE_API_URL};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Deserialize)]
pub struct Settings {
    pub environment: Option<String>,
    pub port: Option<u16>,
    /// Fallback key for requests that do not carry their own
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("environment", &self.environment)
            .field("port", &self.port)
            .field("youtube_api_key", &self.youtube_api_key())
            .field("youtube_api_url", &self.youtube_api_url)
            .finish()
    }
}

impl Settings {
    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some("PROD")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn youtube_api_key(&self) -> Option<ApiKey> {
        ApiKey::from_optional(self.youtube_api_key.as_deref())
    }

    pub fn youtube_api_url(&self) -> String {
        self.youtube_api_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| YOUTUBE_API_URL.to_string())
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder();
    let settings = settings.add_source(Environment::default());
    settings.build()?.try_deserialize()
}
