// Catalog host wire types
//
// The host sends products as plain JSON objects. Serde enforces field
// presence and types; `validate` enforces the value constraints the
// decoder can't express. Unknown fields (e.g. `rating`) are ignored.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// A product as returned by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    /// Missing or `null` prices are tolerated; the UI renders a dash.
    #[serde(default)]
    pub price: Option<f64>,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Check value constraints on a decoded product.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation {
                field: "title",
                reason: "must not be empty".into(),
            });
        }

        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(Error::Validation {
                    field: "price",
                    reason: format!("must be a finite number, got {price}"),
                });
            }
            if price < 0.0 {
                return Err(Error::Validation {
                    field: "price",
                    reason: format!("must not be negative, got {price}"),
                });
            }
        }

        let image = Url::parse(&self.image).map_err(|e| Error::Validation {
            field: "image",
            reason: format!("is not a valid URL: {e}"),
        })?;
        if !matches!(image.scheme(), "http" | "https") {
            return Err(Error::Validation {
                field: "image",
                reason: format!("must be an http(s) URL, got scheme {:?}", image.scheme()),
            });
        }

        Ok(())
    }
}
