//! Country resource list integration
//!
//! Fetches the set of IPv4 resources assigned to a country from the
//! RIPEstat country-resource-list endpoint.

use serde::Deserialize;

use crate::error::FetchError;

pub mod client;

pub use client::RipeClient;

/// Default RIPEstat country-resource-list endpoint
pub const DEFAULT_API_URL: &str = "https://stat.ripe.net/data/country-resource-list/data.json";

/// Top-level resource listing document returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct CountryResourceList {
    pub data: ResourceData,
}

/// Payload section of the listing document
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceData {
    pub resources: Resources,
}

/// Resource sets keyed by address family; only IPv4 is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub ipv4: Vec<String>,
}

/// Resource provider trait
///
/// Seam between the orchestration and the HTTP client so the pipeline can
/// be driven from canned listings in tests.
pub trait ResourceProvider {
    fn fetch_ipv4_resources(
        &self,
        country_code: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_resource_listing() {
        let body = r#"{
            "messages": [],
            "data": {
                "resources": {
                    "asn": ["3333"],
                    "ipv4": ["193.0.0.0-193.0.23.255", "193.0.24.0/21"],
                    "ipv6": ["2001:67c:2e8::/48"]
                },
                "query_time": "2025-01-01T00:00:00"
            },
            "status": "ok"
        }"#;

        let listing: CountryResourceList = serde_json::from_str(body).unwrap();
        assert_eq!(
            listing.data.resources.ipv4,
            vec!["193.0.0.0-193.0.23.255", "193.0.24.0/21"]
        );
    }

    #[test]
    fn test_missing_ipv4_section_defaults_to_empty() {
        let body = r#"{ "data": { "resources": { "asn": [] } } }"#;
        let listing: CountryResourceList = serde_json::from_str(body).unwrap();
        assert!(listing.data.resources.ipv4.is_empty());
    }
}
