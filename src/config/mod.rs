//! Configuration management module
//!
//! Handles loading configuration from multiple sources with proper precedence:
//! CLI arguments > environment variables > JSON file > defaults

use tracing::warn;

use crate::error::ConfigError;
use crate::ripe::DEFAULT_API_URL;

pub mod cli;
pub mod env;
pub mod file;

/// Default configuration file location on managed hosts
pub const DEFAULT_CONFIG_PATH: &str = "/opt/routing/config.json";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ISO country code whose IPv4 resources are routed
    pub country_code: String,
    /// Path of the block list file handed to the route layer
    pub file_path: String,
    /// Network interface routes are bound to
    pub interface: String,
    /// Individual addresses carved out of every fetched block
    pub ignored_ips: Vec<String>,
    /// Subnets accepted in the configuration schema. Validated at load
    /// but not applied to the exclusion pipeline.
    pub ignored_subnets: Vec<String>,
    /// Country resource list endpoint
    pub api_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            country_code: String::new(),
            file_path: "/opt/routing/subnets.txt".to_string(),
            interface: String::new(),
            ignored_ips: Vec::new(),
            ignored_subnets: Vec::new(),
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Check required fields and the syntax of the exclusion lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("country_code", &self.country_code),
            ("interface", &self.interface),
            ("file_path", &self.file_path),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingRequired {
                    field: field.to_string(),
                });
            }
        }

        for subnet in &self.ignored_subnets {
            subnet.parse::<ipnetwork::Ipv4Network>().map_err(|e| {
                ConfigError::InvalidFormat(format!("ignored_subnets entry {:?}: {}", subnet, e))
            })?;
        }
        if !self.ignored_subnets.is_empty() {
            warn!("ignored_subnets is configured but not applied to the exclusion pipeline");
        }

        Ok(())
    }
}

/// Assemble the effective configuration with full precedence applied.
pub fn load(args: &cli::CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var(env::CONFIG_PATH_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    match file::load_json_config(&config_path) {
        Ok(file_config) => config = file_config.apply_to_config(config),
        Err(ConfigError::FileNotFound { path }) if args.config.is_none() => {
            // Only an explicitly requested file is mandatory
            warn!("Configuration file {} not found, continuing with defaults", path);
        }
        Err(e) => return Err(e),
    }

    config = env::apply_env_config(config);
    config = args.apply_to_config(config);
    config.validate()?;

    Ok(config)
}
