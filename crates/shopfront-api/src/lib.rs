// shopfront-api: Async Rust client for the catalog host API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::CatalogClient;
pub use error::Error;
pub use models::Product;
pub use transport::TransportConfig;
