//! Screen implementations. Each screen is a top-level Component.

pub mod catalog;
pub mod product;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create one component per screen.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Catalog, Box::new(catalog::CatalogScreen::new())),
        (ScreenId::Product, Box::new(product::ProductScreen::new())),
    ]
}
