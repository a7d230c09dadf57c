// ── Detail page ──
//
// Shows one product, keyed by the route's id. A new id opens a new cycle
// and drops the previous item before the request starts, so the old
// product is never on screen under the new id.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::fetch::{FetchCycle, FetchTicket};
use crate::format::price_label;
use crate::load_state::{LoadState, Phase};
use crate::model::{Product, ProductId};

pub const LOADING_MESSAGE: &str = "Curating your look…";
pub const ERROR_MESSAGE: &str = "Could not load this product. Please try again later.";
pub const BACK_LINK: &str = "← back to catalog";

/// Decorative swatches under the product image.
pub const SWATCH_COUNT: usize = 3;

/// Inert purchase controls.
pub const ACTIONS: [&str; 2] = ["Add to bag", "Add to wishlist"];

/// Static facts shown for every product.
pub const FACTS: [(&str, &str); 3] = [
    ("Shipping", "Free worldwide"),
    ("Returns", "30-day easy returns"),
    ("Material", "Premium blend"),
];

/// Everything the detail renderer shows for a loaded product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: ProductId,
    pub image: String,
    pub category: String,
    pub title: String,
    /// Formatted price, or `—` when the host sent none.
    pub price: String,
    pub description: String,
}

impl ProductDetail {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.to_string(),
            category: product.category.clone(),
            title: product.title.clone(),
            price: price_label(product.price),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading(&'static str),
    Failed(String),
    /// Settled without an item (never mounted).
    Empty,
    Item(ProductDetail),
}

#[derive(Debug, Default)]
pub struct DetailPage {
    product_id: Option<ProductId>,
    state: LoadState<Arc<Product>>,
    cycle: FetchCycle,
}

impl DetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the page at `id`. Opens a cycle if the id changed; showing
    /// the id already on screen is a no-op.
    pub fn show(&mut self, id: ProductId) -> Option<FetchTicket> {
        if self.product_id == Some(id) {
            return None;
        }
        self.product_id = Some(id);
        Some(self.start())
    }

    /// Refetch the current id.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        if self.product_id.is_none() {
            return None;
        }
        Some(self.start())
    }

    /// Abandon the open cycle and forget the id, so the next `show`
    /// always fetches.
    pub fn unmount(&mut self) {
        self.cycle.cancel();
        self.product_id = None;
    }

    fn start(&mut self) -> FetchTicket {
        self.state.begin();
        let ticket = self.cycle.begin();
        debug!(
            id = ?self.product_id,
            generation = ticket.generation(),
            "detail fetch started"
        );
        ticket
    }

    /// Apply a fetch outcome. Returns `false` if `generation` was superseded
    /// and the outcome was discarded.
    pub fn resolve<E>(&mut self, generation: u64, result: Result<Arc<Product>, E>) -> bool {
        if !self.cycle.settle(generation) {
            debug!(generation, "discarding superseded detail result");
            return false;
        }
        match result {
            Ok(product) if Some(product.id) == self.product_id => self.state.succeed(product),
            Ok(product) => {
                warn!(
                    expected = ?self.product_id,
                    got = %product.id,
                    "catalog returned a different product"
                );
                self.state.fail(ERROR_MESSAGE);
            }
            Err(_) => self.state.fail(ERROR_MESSAGE),
        }
        true
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn state(&self) -> &LoadState<Arc<Product>> {
        &self.state
    }

    pub fn view(&self) -> DetailView {
        match self.state.phase() {
            Phase::Loading => DetailView::Loading(LOADING_MESSAGE),
            Phase::Failed => {
                DetailView::Failed(self.state.error().unwrap_or(ERROR_MESSAGE).to_owned())
            }
            Phase::Ready => self.state.data().map_or(DetailView::Empty, |product| {
                DetailView::Item(ProductDetail::from_product(product))
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::page::fixtures::product;

    fn loaded(id: u64, title: &str) -> Arc<Product> {
        Arc::new(product(id, title))
    }

    #[test]
    fn renders_fetched_item_exactly() {
        let mut page = DetailPage::new();
        let ticket = page.show(ProductId::new(1)).unwrap();
        assert_eq!(page.view(), DetailView::Loading(LOADING_MESSAGE));

        let mut item = product(1, "Mens Casual Premium Slim Fit T-Shirts");
        item.price = Some(22.3);
        assert!(page.resolve::<()>(ticket.generation(), Ok(Arc::new(item.clone()))));

        let DetailView::Item(detail) = page.view() else {
            panic!("expected item");
        };
        assert_eq!(detail.title, item.title);
        assert_eq!(detail.price, "$22.30");
        assert_eq!(detail.description, item.description);
        assert_eq!(detail.category, item.category);
        assert_eq!(detail.image, "https://img.example.test/1.jpg");
    }

    #[test]
    fn missing_price_renders_dash() {
        let mut page = DetailPage::new();
        let ticket = page.show(ProductId::new(5)).unwrap();
        let mut item = product(5, "No price");
        item.price = None;
        page.resolve::<()>(ticket.generation(), Ok(Arc::new(item)));

        let DetailView::Item(detail) = page.view() else {
            panic!("expected item");
        };
        assert_eq!(detail.price, "—");
    }

    #[test]
    fn failure_shows_fixed_message() {
        let mut page = DetailPage::new();
        let ticket = page.show(ProductId::new(999)).unwrap();
        assert!(page.resolve(ticket.generation(), Err("404")));

        assert!(!page.state().is_loading());
        assert_eq!(page.view(), DetailView::Failed(ERROR_MESSAGE.to_owned()));
    }

    #[test]
    fn same_id_does_not_refetch() {
        let mut page = DetailPage::new();
        assert!(page.show(ProductId::new(1)).is_some());
        assert!(page.show(ProductId::new(1)).is_none());
    }

    #[test]
    fn id_change_reenters_loading_before_new_item() {
        let mut page = DetailPage::new();
        let first = page.show(ProductId::new(1)).unwrap();
        page.resolve::<()>(first.generation(), Ok(loaded(1, "One")));
        assert!(matches!(page.view(), DetailView::Item(ref d) if d.title == "One"));

        let second = page.show(ProductId::new(2)).unwrap();
        assert_eq!(page.view(), DetailView::Loading(LOADING_MESSAGE));
        assert!(page.state().data().is_none());

        page.resolve::<()>(second.generation(), Ok(loaded(2, "Two")));
        let DetailView::Item(detail) = page.view() else {
            panic!("expected item");
        };
        assert_eq!(detail.id, ProductId::new(2));
        assert_eq!(detail.title, "Two");
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_id() {
        let mut page = DetailPage::new();
        let first = page.show(ProductId::new(1)).unwrap();
        let second = page.show(ProductId::new(2)).unwrap();

        // Product 2 settles first, then product 1's slow response arrives.
        assert!(page.resolve::<()>(second.generation(), Ok(loaded(2, "Two"))));
        assert!(!page.resolve::<()>(first.generation(), Ok(loaded(1, "One"))));

        let DetailView::Item(detail) = page.view() else {
            panic!("expected item");
        };
        assert_eq!(detail.id, ProductId::new(2));
        assert_eq!(detail.title, "Two");
    }

    #[test]
    fn stale_failure_cannot_mask_newer_id() {
        let mut page = DetailPage::new();
        let first = page.show(ProductId::new(1)).unwrap();
        let second = page.show(ProductId::new(2)).unwrap();

        assert!(!page.resolve(first.generation(), Err("timeout")));
        assert_eq!(page.view(), DetailView::Loading(LOADING_MESSAGE));

        page.resolve::<()>(second.generation(), Ok(loaded(2, "Two")));
        assert!(matches!(page.view(), DetailView::Item(_)));
    }

    #[test]
    fn mismatched_item_is_a_failure() {
        let mut page = DetailPage::new();
        let ticket = page.show(ProductId::new(3)).unwrap();
        page.resolve::<()>(ticket.generation(), Ok(loaded(4, "Four")));
        assert_eq!(page.view(), DetailView::Failed(ERROR_MESSAGE.to_owned()));
    }

    #[test]
    fn new_cycle_clears_previous_error() {
        let mut page = DetailPage::new();
        let first = page.show(ProductId::new(1)).unwrap();
        page.resolve(first.generation(), Err("boom"));

        page.show(ProductId::new(2)).unwrap();
        assert!(page.state().error().is_none());
        assert_eq!(page.view(), DetailView::Loading(LOADING_MESSAGE));
    }

    #[test]
    fn reload_refetches_current_id() {
        let mut page = DetailPage::new();
        assert!(page.reload().is_none());

        let first = page.show(ProductId::new(1)).unwrap();
        page.resolve::<()>(first.generation(), Ok(loaded(1, "One")));
        let again = page.reload().unwrap();
        assert_eq!(page.view(), DetailView::Loading(LOADING_MESSAGE));
        assert!(page.resolve::<()>(again.generation(), Ok(loaded(1, "One"))));
    }

    #[test]
    fn unmount_forgets_id_and_cancels() {
        let mut page = DetailPage::new();
        let ticket = page.show(ProductId::new(1)).unwrap();
        page.unmount();
        assert!(ticket.is_cancelled());
        assert_eq!(page.product_id(), None);
        assert!(page.show(ProductId::new(1)).is_some());
    }
}
