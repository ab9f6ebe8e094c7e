//! HTTP client for the country resource list service

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::error::FetchError;
use crate::ripe::{CountryResourceList, ResourceProvider};

/// Resource provider implementation with retry logic
pub struct RipeClient {
    http: reqwest::Client,
    api_url: String,
    retry_delay: Duration,
    max_retries: u32,
}

impl RipeClient {
    /// Create a new client against the given endpoint
    pub fn new(api_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.to_string(),
            retry_delay: Duration::from_secs(5),
            max_retries: 3,
        }
    }

    /// Set retry configuration
    pub fn with_retry_config(mut self, retry_delay: Duration, max_retries: u32) -> Self {
        self.retry_delay = retry_delay;
        self.max_retries = max_retries;
        self
    }

    /// Single fetch attempt without retry
    async fn fetch_once(&self, country_code: &str) -> Result<Vec<String>, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("resource", country_code)])
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let listing: CountryResourceList = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(listing.data.resources.ipv4)
    }
}

impl ResourceProvider for RipeClient {
    async fn fetch_ipv4_resources(&self, country_code: &str) -> Result<Vec<String>, FetchError> {
        let mut attempt = 0;

        loop {
            match self.fetch_once(country_code).await {
                Ok(resources) => {
                    info!(
                        "Fetched {} IPv4 resource entries for {}",
                        resources.len(),
                        country_code
                    );
                    return Ok(resources);
                }
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries {
                        error!(
                            "Max retries ({}) exceeded fetching resources for {}",
                            self.max_retries, country_code
                        );
                        return Err(e);
                    }

                    warn!(
                        "Resource fetch failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempt, self.max_retries, e, self.retry_delay
                    );

                    sleep(self.retry_delay).await;
                }
            }
        }
    }
}
