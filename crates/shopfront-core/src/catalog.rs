// ── Catalog facade ──
//
// Read-only access to the catalog host in domain types. Cheaply
// cloneable so every fetch task can own a handle.

use std::sync::Arc;

use tracing::debug;

use shopfront_api::{CatalogClient, TransportConfig};

use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::model::{Product, ProductId};

/// The entry point for reading products.
#[derive(Debug, Clone)]
pub struct Catalog {
    client: CatalogClient,
}

impl Catalog {
    /// Build a catalog from configuration. Does not touch the network.
    pub fn new(config: &CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = CatalogClient::new(config.url.clone(), &transport)?;
        Ok(Self { client })
    }

    /// The configured host, for display and logging.
    pub fn host(&self) -> &url::Url {
        self.client.base_url()
    }

    /// Fetch the full product collection, in host order.
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CoreError> {
        let raw = self.client.list_products().await?;
        let products = raw
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = products.len(), "catalog collection loaded");
        Ok(Arc::new(products))
    }

    /// Fetch one product by id.
    pub async fn product(&self, id: ProductId) -> Result<Arc<Product>, CoreError> {
        let raw = self.client.get_product(id.get()).await.map_err(|e| {
            if e.is_not_found() {
                CoreError::ProductNotFound { id }
            } else {
                CoreError::from(e)
            }
        })?;
        debug!(%id, "catalog product loaded");
        Ok(Arc::new(Product::try_from(raw)?))
    }
}
