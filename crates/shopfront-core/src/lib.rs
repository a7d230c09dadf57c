//! Domain and page-state layer between `shopfront-api` and the terminal UI.
//!
//! - **[`Catalog`]**: Facade over the catalog host. Reads the product
//!   collection or a single product and converts wire types into domain
//!   types.
//!
//! - **[`LoadState`]**: The (loading, error, data) triple every page
//!   renders from, with a derived [`Phase`].
//!
//! - **[`FetchCycle`]**: Generation-tagged, cancellable fetch bookkeeping.
//!   A completion from a superseded cycle is discarded, so a slow response
//!   can never overwrite fresher state.
//!
//! - **Pages** ([`page`]): [`ListingPage`] and [`DetailPage`] state
//!   machines plus the view models their renderers consume.
//!
//! - **[`Route`]**: `/` and `/product/{id}` path mapping.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod format;
pub mod load_state;
pub mod model;
pub mod page;
pub mod route;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::CoreError;
pub use fetch::{FetchCycle, FetchTicket};
pub use load_state::{LoadState, Phase};
pub use model::{InvalidProductId, Product, ProductId};
pub use page::{DetailPage, ListingPage};
pub use route::{Route, RouteError};
