// ── Runtime catalog configuration ──
//
// Describes *where* the catalog lives and how patient to be with it.
// Never touches disk; `shopfront-config` builds one from the TOML file,
// environment, and CLI flags.

use std::time::Duration;

use url::Url;

/// Public catalog host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "https://fakestoreapi.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog host base URL. Endpoints are appended to its path.
    pub url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_host_is_a_base_url() {
        let config = CatalogConfig::new(Url::parse(DEFAULT_HOST).unwrap());
        assert!(!config.url.cannot_be_a_base());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
