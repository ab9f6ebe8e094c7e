//! Environment variable configuration handling

use std::env;

use crate::config::AppConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "RIPE_ROUTE_SYNC_";

/// Variable naming the configuration file location
pub const CONFIG_PATH_VAR: &str = "RIPE_ROUTE_SYNC_CONFIG";

/// Apply environment variable configuration over base configuration
pub fn apply_env_config(mut base_config: AppConfig) -> AppConfig {
    if let Ok(code) = env::var(format!("{}COUNTRY_CODE", ENV_PREFIX)) {
        base_config.country_code = code;
    }

    if let Ok(path) = env::var(format!("{}FILE_PATH", ENV_PREFIX)) {
        base_config.file_path = path;
    }

    if let Ok(interface) = env::var(format!("{}INTERFACE", ENV_PREFIX)) {
        base_config.interface = interface;
    }

    if let Ok(url) = env::var(format!("{}API_URL", ENV_PREFIX)) {
        base_config.api_url = url;
    }

    if let Ok(level) = env::var(format!("{}LOG_LEVEL", ENV_PREFIX)) {
        base_config.log_level = level;
    }

    // List values are comma separated:
    // RIPE_ROUTE_SYNC_IGNORED_IPS="193.0.6.139,193.0.6.1"
    if let Ok(ips) = env::var(format!("{}IGNORED_IPS", ENV_PREFIX)) {
        base_config.ignored_ips = parse_list(&ips);
    }

    if let Ok(subnets) = env::var(format!("{}IGNORED_SUBNETS", ENV_PREFIX)) {
        base_config.ignored_subnets = parse_list(&subnets);
    }

    base_config
}

/// Split a comma separated list, dropping empty items
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
