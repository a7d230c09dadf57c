//! Screen identifier enum.

use std::fmt;

use shopfront_core::Route;

/// Identifies each top-level TUI screen. One per route kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Catalog,
    Product,
}

impl ScreenId {
    /// All screens, in breadcrumb order.
    pub const ALL: [ScreenId; 2] = [Self::Catalog, Self::Product];

    /// Screen that renders `route`.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Catalog => Self::Catalog,
            Route::Product(_) => Self::Product,
        }
    }

    /// Short label for the breadcrumb bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Product => "Product",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
