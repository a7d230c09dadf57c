// Catalog HTTP client
//
// Wraps `reqwest::Client` with catalog-host URL construction, status
// handling, and boundary validation of every decoded product. Callers
// only ever see products that passed `Product::validate`.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::Product;
use crate::transport::TransportConfig;

/// Longest body excerpt carried in errors.
const BODY_PREVIEW_LEN: usize = 200;

/// Raw HTTP client for the catalog host.
///
/// Read-only: the host exposes `GET /products` and `GET /products/{id}`.
/// Cheap to clone (the inner `reqwest::Client` is reference counted).
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the catalog host root, e.g. `https://fakestoreapi.com`.
    /// A path prefix is allowed (`https://host/api`); endpoints are appended
    /// to it.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The catalog host base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET /products` -- the full collection, in host order.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        let products: Vec<Product> = self.get(self.url("products")?).await?;
        for product in &products {
            product.validate()?;
        }
        debug!(count = products.len(), "fetched product collection");
        Ok(products)
    }

    /// `GET /products/{id}` -- a single product.
    ///
    /// Some hosts answer unknown ids with `200` and an empty or `null` body;
    /// both surface as [`Error::Deserialization`].
    pub async fn get_product(&self, id: u64) -> Result<Product, Error> {
        let product: Product = self.get(self.url(&format!("products/{id}"))?).await?;
        product.validate()?;
        if product.id != id {
            return Err(Error::Validation {
                field: "id",
                reason: format!("expected {id}, got {}", product.id),
            });
        }
        Ok(product)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{path}`, keeping any path prefix on the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

/// First `BODY_PREVIEW_LEN` bytes of `body`, cut on a char boundary.
fn preview(body: &str) -> &str {
    if body.len() <= BODY_PREVIEW_LEN {
        return body;
    }
    let mut end = BODY_PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
