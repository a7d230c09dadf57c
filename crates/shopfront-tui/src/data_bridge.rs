//! Data bridge: runs catalog fetches off the UI task.
//!
//! Each fetch is a short-lived tokio task bound to a [`FetchTicket`]. The
//! result is forwarded as an [`Action`] tagged with the ticket's
//! generation; a cancelled ticket sends nothing.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use shopfront_core::{Catalog, FetchTicket, ProductId};

use crate::action::{Action, FetchFailed};

/// Fetch the product collection and report it as [`Action::ProductsLoaded`].
pub fn spawn_products_fetch(
    catalog: Catalog,
    ticket: FetchTicket,
    action_tx: mpsc::UnboundedSender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let generation = ticket.generation();
        let Some(result) = ticket.run(catalog.products()).await else {
            debug!(generation, "collection fetch cancelled");
            return;
        };

        let result = result.map_err(|e| {
            warn!(error = %e, generation, host = %catalog.host(), "failed to load products");
            FetchFailed
        });
        let _ = action_tx.send(Action::ProductsLoaded { generation, result });
    })
}

/// Fetch one product and report it as [`Action::ProductLoaded`].
pub fn spawn_product_fetch(
    catalog: Catalog,
    id: ProductId,
    ticket: FetchTicket,
    action_tx: mpsc::UnboundedSender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let generation = ticket.generation();
        let Some(result) = ticket.run(catalog.product(id)).await else {
            debug!(%id, generation, "product fetch cancelled");
            return;
        };

        let result = result.map_err(|e| {
            warn!(error = %e, %id, generation, "failed to load product");
            FetchFailed
        });
        let _ = action_tx.send(Action::ProductLoaded { generation, result });
    })
}
