// ── Domain model ──

pub mod product;
pub mod product_id;

pub use product::Product;
pub use product_id::{InvalidProductId, ProductId};
