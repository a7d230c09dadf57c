// ── Listing page ──
//
// Fetches the whole collection on mount and renders one card per product.
// Remounting starts a fresh cycle; unmounting cancels the open one.

use std::sync::Arc;

use tracing::debug;

use crate::fetch::{FetchCycle, FetchTicket};
use crate::format::{blurb, price_label};
use crate::load_state::{LoadState, Phase};
use crate::model::{Product, ProductId};
use crate::route::Route;

pub const LOADING_MESSAGE: &str = "Loading dreamy fits…";
pub const ERROR_MESSAGE: &str = "Unable to load products right now. Please try again later.";

// Hero banner above the catalog.
pub const HERO_EYEBROW: &str = "Holiday edit";
pub const HERO_HEADLINE: &str = "Find pieces that feel like you";
pub const HERO_SUBCOPY: &str = "Curated looks, sustainable fabrics, and everyday essentials that \
keep you comfy without compromising on style.";
/// Hero calls to action. Both jump to the catalog section.
pub const HERO_ACTIONS: [&str; 2] = ["Shop new arrivals", "Browse categories"];

// Catalog section header.
pub const SECTION_EYEBROW: &str = "Featured";
pub const SECTION_HEADING: &str = "Trending now";

/// Card affordance pointing at the detail page.
pub const DETAILS_LINK: &str = "View details →";

/// One product card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    /// Link target, `/product/{id}`.
    pub href: String,
    pub image: String,
    pub category: String,
    pub title: String,
    /// Description cut to the listing limit.
    pub blurb: String,
    pub price: String,
}

impl ProductCard {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            href: Route::Product(product.id).path(),
            image: product.image.to_string(),
            category: product.category.clone(),
            title: product.title.clone(),
            blurb: blurb(&product.description).into_owned(),
            price: price_label(product.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingBody {
    Loading(&'static str),
    Failed(String),
    Grid(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    /// Loaded product count, shown in the section badge.
    pub count: usize,
    pub body: ListingBody,
}

impl ListingView {
    /// Section badge text, e.g. `20 products`.
    pub fn badge(&self) -> String {
        format!("{} products", self.count)
    }
}

#[derive(Debug, Default)]
pub struct ListingPage {
    state: LoadState<Arc<Vec<Product>>>,
    cycle: FetchCycle,
}

impl ListingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch cycle for the collection.
    pub fn mount(&mut self) -> FetchTicket {
        self.state.begin();
        let ticket = self.cycle.begin();
        debug!(generation = ticket.generation(), "listing fetch started");
        ticket
    }

    /// Abandon the open cycle, if any.
    pub fn unmount(&mut self) {
        self.cycle.cancel();
    }

    /// Apply a fetch outcome. Returns `false` if `generation` was superseded
    /// and the outcome was discarded.
    pub fn resolve<E>(&mut self, generation: u64, result: Result<Arc<Vec<Product>>, E>) -> bool {
        if !self.cycle.settle(generation) {
            debug!(generation, "discarding superseded listing result");
            return false;
        }
        match result {
            Ok(products) => self.state.succeed(products),
            Err(_) => self.state.fail(ERROR_MESSAGE),
        }
        true
    }

    pub fn state(&self) -> &LoadState<Arc<Vec<Product>>> {
        &self.state
    }

    /// Loaded products; empty until a fetch succeeds.
    pub fn products(&self) -> &[Product] {
        self.state
            .data()
            .map(|p| p.as_slice())
            .unwrap_or_default()
    }

    pub fn view(&self) -> ListingView {
        let body = match self.state.phase() {
            Phase::Loading => ListingBody::Loading(LOADING_MESSAGE),
            Phase::Failed => {
                ListingBody::Failed(self.state.error().unwrap_or(ERROR_MESSAGE).to_owned())
            }
            Phase::Ready => ListingBody::Grid(
                self.products()
                    .iter()
                    .map(ProductCard::from_product)
                    .collect(),
            ),
        };
        ListingView {
            count: self.products().len(),
            body,
        }
    }
}
