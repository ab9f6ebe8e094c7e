use clap::Parser;
use tracing::{error, info};

use ripe_route_sync::cidr::{CidrBlock, ExclusionSet};
use ripe_route_sync::config::cli::CliArgs;
use ripe_route_sync::config::{self, AppConfig};
use ripe_route_sync::error::AppError;
use ripe_route_sync::ripe::{ResourceProvider, RipeClient};
use ripe_route_sync::routing::{IprouteManager, RouteManager};
use ripe_route_sync::{blockfile, pipeline};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = CliArgs::parse();

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .init();

    if cli.print_default_config {
        config::cli::print_default_config();
        return Ok(());
    }

    let config = config::load(&cli)?;

    if cli.validate_config {
        info!("Configuration is valid");
        return Ok(());
    }

    let routes = IprouteManager::new(&config.interface);

    if cli.remove_only {
        info!("Removing previously installed routes");
        remove_old_routes(&config, &routes).await;
        return Ok(());
    }

    if cli.print_only {
        info!("Requesting resource data for {}", config.country_code);
        let blocks = fetch_block_list(&config).await?;
        for block in &blocks {
            println!("{}", block);
        }
        return Ok(());
    }

    if !cli.add_only {
        info!("Removing previously installed routes");
        remove_old_routes(&config, &routes).await;
    }

    info!("Requesting resource data for {}", config.country_code);
    let blocks = fetch_block_list(&config).await?;

    info!("Updating block list file");
    blockfile::write_blocks(&config.file_path, &blocks).await?;

    routes.add_routes(&config.file_path).await?;

    info!("Route sync finished");
    Ok(())
}

/// Fetch the country listing and run it through the CIDR engine.
async fn fetch_block_list(config: &AppConfig) -> Result<Vec<CidrBlock>, AppError> {
    let client = RipeClient::new(&config.api_url);
    let resources = client.fetch_ipv4_resources(&config.country_code).await?;
    let excluded = ExclusionSet::from_entries(&config.ignored_ips);
    Ok(pipeline::build_block_list(&resources, &excluded))
}

/// Sweep the current block list away. A stale or missing file is not
/// fatal for a refresh, only logged.
async fn remove_old_routes(config: &AppConfig, routes: &IprouteManager) {
    if let Err(e) = routes.remove_routes(&config.file_path).await {
        error!("Failed to remove old routes: {}", e);
    }
}
