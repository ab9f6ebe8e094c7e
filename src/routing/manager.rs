//! Route application via the ip(8) command

use tokio::process::Command;
use tracing::{debug, error, info};

use crate::blockfile;
use crate::error::RouteError;
use crate::routing::{RouteAction, RouteManager, RouteSweep};

/// Route manager running one `ip route` command per block list line
pub struct IprouteManager {
    interface: String,
}

impl IprouteManager {
    /// Create a manager bound to a network interface
    pub fn new(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
        }
    }

    /// Apply `action` to every CIDR line of the block list.
    ///
    /// Individual command failures are logged and counted; the sweep
    /// always continues to the next line.
    async fn sweep(&self, path: &str, action: RouteAction) -> Result<RouteSweep, RouteError> {
        let blocks = blockfile::read_cidr_lines(path).await.map_err(|e| {
            RouteError::BlockListUnreadable {
                path: path.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut sweep = RouteSweep::default();
        for block in &blocks {
            match self.run_route_command(action, block).await {
                Ok(()) => {
                    debug!("Route {} {} dev {}", action.verb(), block, self.interface);
                    sweep.applied += 1;
                }
                Err(e) => {
                    error!("Route {} failed for {}: {}", action.verb(), block, e);
                    sweep.failed += 1;
                }
            }
        }

        info!(
            "Route {} sweep finished: {} applied, {} failed",
            action.verb(),
            sweep.applied,
            sweep.failed
        );
        Ok(sweep)
    }

    async fn run_route_command(&self, action: RouteAction, block: &str) -> Result<(), RouteError> {
        let output = Command::new("ip")
            .args(["route", action.verb(), block, "dev", &self.interface])
            .output()
            .await
            .map_err(|e| RouteError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RouteError::CommandFailed(stderr.trim().to_string()));
        }
        Ok(())
    }
}

impl RouteManager for IprouteManager {
    async fn add_routes(&self, block_list_path: &str) -> Result<RouteSweep, RouteError> {
        self.sweep(block_list_path, RouteAction::Add).await
    }

    async fn remove_routes(&self, block_list_path: &str) -> Result<RouteSweep, RouteError> {
        self.sweep(block_list_path, RouteAction::Delete).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_block_list_is_reported() {
        let manager = IprouteManager::new("wg0");
        let result = manager.add_routes("/nonexistent/subnets.txt").await;
        assert!(matches!(
            result,
            Err(RouteError::BlockListUnreadable { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_block_list_sweeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subnets.txt");
        tokio::fs::write(&path, "no routable lines here\n").await.unwrap();

        let manager = IprouteManager::new("wg0");
        let sweep = manager
            .remove_routes(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(sweep.applied, 0);
        assert_eq!(sweep.failed, 0);
    }
}
