//! Command-line argument parsing

use clap::Parser;

use crate::config::file::JsonConfig;
use crate::config::AppConfig;

/// Command-line arguments structure
#[derive(Parser, Debug)]
#[command(name = "ripe-route-sync")]
#[command(about = "Country IP range routing table manager")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short, long, help = "Path to JSON configuration file")]
    pub config: Option<String>,

    /// Only remove the routes listed in the current block list
    #[arg(short = 'd', long, help = "Only remove previously installed routes")]
    pub remove_only: bool,

    /// Only fetch data, rewrite the block list and add routes
    #[arg(short = 's', long, help = "Only fetch data and add routes")]
    pub add_only: bool,

    /// Only fetch data and print the computed block list
    #[arg(short = 'p', long, help = "Only fetch data and display the block list")]
    pub print_only: bool,

    /// Country code to fetch resources for
    #[arg(long, help = "ISO country code whose IPv4 resources are routed")]
    pub country_code: Option<String>,

    /// Block list file path
    #[arg(long, help = "Path of the block list file")]
    pub file_path: Option<String>,

    /// Network interface
    #[arg(long, help = "Network interface routes are bound to")]
    pub interface: Option<String>,

    /// Country resource list endpoint
    #[arg(long, help = "Country resource list endpoint URL")]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, help = "Set the logging level")]
    pub log_level: Option<String>,

    /// Validate configuration and exit
    #[arg(
        long,
        help = "Validate configuration and exit without touching the routing table"
    )]
    pub validate_config: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_default_config: bool,
}

impl CliArgs {
    /// Apply CLI arguments over base configuration
    pub fn apply_to_config(&self, mut base_config: AppConfig) -> AppConfig {
        if let Some(ref code) = self.country_code {
            base_config.country_code = code.clone();
        }

        if let Some(ref path) = self.file_path {
            base_config.file_path = path.clone();
        }

        if let Some(ref interface) = self.interface {
            base_config.interface = interface.clone();
        }

        if let Some(ref url) = self.api_url {
            base_config.api_url = url.clone();
        }

        if let Some(ref level) = self.log_level {
            base_config.log_level = level.clone();
        }

        base_config
    }
}

/// Print default configuration in JSON format
pub fn print_default_config() {
    let defaults = AppConfig::default();
    let json = JsonConfig {
        country_code: Some(defaults.country_code),
        file_path: Some(defaults.file_path),
        interface: Some(defaults.interface),
        ignored_subnets: Some(defaults.ignored_subnets),
        ignored_ips: Some(defaults.ignored_ips),
        api_url: Some(defaults.api_url),
        log_level: Some(defaults.log_level),
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&json).unwrap_or_default()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "ripe-route-sync",
            "--config",
            "/etc/ripe-route-sync.json",
            "--log-level",
            "debug",
            "--country-code",
            "NL",
            "--file-path",
            "/tmp/subnets.txt",
            "--interface",
            "wg0",
            "--api-url",
            "http://localhost:8080/data.json",
            "--validate-config",
        ])
        .unwrap();

        assert_eq!(args.config, Some("/etc/ripe-route-sync.json".to_string()));
        assert_eq!(args.log_level, Some("debug".to_string()));
        assert_eq!(args.country_code, Some("NL".to_string()));
        assert_eq!(args.file_path, Some("/tmp/subnets.txt".to_string()));
        assert_eq!(args.interface, Some("wg0".to_string()));
        assert_eq!(args.api_url, Some("http://localhost:8080/data.json".to_string()));
        assert!(args.validate_config);
        assert!(!args.print_default_config);
        assert!(!args.remove_only);
    }

    #[test]
    fn test_cli_args_minimal() {
        let args = CliArgs::try_parse_from(["ripe-route-sync"]).unwrap();

        assert_eq!(args.config, None);
        assert_eq!(args.country_code, None);
        assert_eq!(args.file_path, None);
        assert_eq!(args.interface, None);
        assert_eq!(args.api_url, None);
        assert_eq!(args.log_level, None);
        assert!(!args.remove_only);
        assert!(!args.add_only);
        assert!(!args.print_only);
    }

    #[test]
    fn test_cli_mode_short_flags() {
        let args = CliArgs::try_parse_from(["ripe-route-sync", "-d"]).unwrap();
        assert!(args.remove_only);

        let args = CliArgs::try_parse_from(["ripe-route-sync", "-s"]).unwrap();
        assert!(args.add_only);

        let args = CliArgs::try_parse_from(["ripe-route-sync", "-p"]).unwrap();
        assert!(args.print_only);
    }

    #[test]
    fn test_apply_cli_to_config() {
        let args = CliArgs::try_parse_from([
            "ripe-route-sync",
            "--country-code",
            "DE",
            "--interface",
            "eth1",
            "--log-level",
            "trace",
        ])
        .unwrap();

        let config = args.apply_to_config(AppConfig::default());

        assert_eq!(config.country_code, "DE");
        assert_eq!(config.interface, "eth1");
        assert_eq!(config.log_level, "trace");
        // Untouched fields keep their defaults
        assert_eq!(config.file_path, "/opt/routing/subnets.txt");
    }

    #[test]
    fn test_apply_cli_to_config_no_overrides() {
        let args = CliArgs::try_parse_from(["ripe-route-sync"]).unwrap();

        let base_config = AppConfig::default();
        let original_config = base_config.clone();
        let config = args.apply_to_config(base_config);

        // Should be unchanged
        assert_eq!(config.country_code, original_config.country_code);
        assert_eq!(config.file_path, original_config.file_path);
        assert_eq!(config.interface, original_config.interface);
        assert_eq!(config.api_url, original_config.api_url);
        assert_eq!(config.log_level, original_config.log_level);
    }
}
