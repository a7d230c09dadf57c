// ── Product domain type ──

use url::Url;

use super::product_id::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Non-negative when present. Absent prices render as a dash.
    pub price: Option<f64>,
    pub description: String,
    /// Short label, e.g. "men's clothing".
    pub category: String,
    pub image: Url,
}
