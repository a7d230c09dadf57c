// ── API-to-domain type conversions ──
//
// Bridges `shopfront_api` wire types into `shopfront_core::model` domain
// types. The API client has already validated each product, so failures
// here indicate a wire type that bypassed validation.

use url::Url;

use crate::error::CoreError;
use crate::model::{Product, ProductId};

impl TryFrom<shopfront_api::Product> for Product {
    type Error = CoreError;

    fn try_from(raw: shopfront_api::Product) -> Result<Self, Self::Error> {
        let image = Url::parse(&raw.image).map_err(|e| CoreError::InvalidResponse {
            message: format!("product {} image: {e}", raw.id),
        })?;

        Ok(Self {
            id: ProductId::new(raw.id),
            title: raw.title,
            price: raw.price,
            description: raw.description,
            category: raw.category,
            image,
        })
    }
}
