//! Page state machines and the view models their renderers consume.
//!
//! Both pages follow the same cycle: a trigger opens a fetch cycle and
//! resets the load-state to Loading; the spawned fetch reports back with
//! its generation; `resolve` applies the outcome only if that generation
//! is still current. Views are derived purely from the load-state.

pub mod detail;
pub mod listing;

pub use detail::{DetailPage, DetailView, ProductDetail};
pub use listing::{ListingBody, ListingPage, ListingView, ProductCard};

#[cfg(test)]
pub(crate) mod fixtures {
    use url::Url;

    use crate::model::{Product, ProductId};

    #[allow(clippy::unwrap_used)]
    pub fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            price: Some(10.5),
            description: format!("All about {title}."),
            category: "women's clothing".to_owned(),
            image: Url::parse(&format!("https://img.example.test/{id}.jpg")).unwrap(),
        }
    }
}
