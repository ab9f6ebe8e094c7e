//! JSON configuration file parsing

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::ConfigError;

/// On-disk configuration structure
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonConfig {
    pub country_code: Option<String>,
    pub file_path: Option<String>,
    pub interface: Option<String>,
    pub ignored_subnets: Option<Vec<String>>,
    pub ignored_ips: Option<Vec<String>>,
    pub api_url: Option<String>,
    pub log_level: Option<String>,
}

/// Load configuration from a JSON file
pub fn load_json_config(path: &str) -> Result<JsonConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
}

impl JsonConfig {
    /// Apply file values over base configuration
    pub fn apply_to_config(self, mut base_config: AppConfig) -> AppConfig {
        if let Some(code) = self.country_code {
            base_config.country_code = code;
        }
        if let Some(path) = self.file_path {
            base_config.file_path = path;
        }
        if let Some(interface) = self.interface {
            base_config.interface = interface;
        }
        if let Some(subnets) = self.ignored_subnets {
            base_config.ignored_subnets = subnets;
        }
        if let Some(ips) = self.ignored_ips {
            base_config.ignored_ips = ips;
        }
        if let Some(url) = self.api_url {
            base_config.api_url = url;
        }
        if let Some(level) = self.log_level {
            base_config.log_level = level;
        }
        base_config
    }
}
