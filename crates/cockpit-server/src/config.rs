use serde::{Deserialize, Serialize};
use std::path::Path;

use cockpit_api::ApiConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_false")]
    pub log_requests: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_requests: false,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("COCKPIT_HOST") {
            self.api.host = val;
        }

        if let Ok(val) = std::env::var("COCKPIT_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                self.api.port = port;
            }
        }

        if let Ok(val) = std::env::var("COCKPIT_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("COCKPIT_LOG_REQUESTS") {
            if let Ok(enabled) = val.parse::<bool>() {
                self.logging.log_requests = enabled;
            }
        }

        if let Ok(val) = std::env::var("COCKPIT_SIMULATE_LATENCY") {
            if let Ok(enabled) = val.parse::<bool>() {
                self.api.simulate_latency = enabled;
            }
        }

        if let Ok(val) = std::env::var("COCKPIT_EXPORT_ENABLED") {
            if let Ok(enabled) = val.parse::<bool>() {
                self.api.export_enabled = enabled;
            }
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}
