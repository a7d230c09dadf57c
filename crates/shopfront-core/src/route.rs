// ── Routing ──
//
// Two addressable views: `/` (listing) and `/product/{id}` (detail).
// The TUI navigates by `Route`; paths exist for links, deep links from the
// command line, and display.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ProductId;

const PRODUCT_PREFIX: &str = "/product/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at path '{0}'")]
    UnknownPath(String),

    #[error("invalid product id '{0}'")]
    InvalidId(String),
}

/// A page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/` -- the product listing.
    #[default]
    Catalog,
    /// `/product/{id}` -- one product.
    Product(ProductId),
}

impl Route {
    /// Parse a path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::Catalog);
        }

        let raw_id = trimmed
            .strip_prefix(PRODUCT_PREFIX)
            .ok_or_else(|| RouteError::UnknownPath(path.to_owned()))?;
        if raw_id.contains('/') {
            return Err(RouteError::UnknownPath(path.to_owned()));
        }

        raw_id
            .parse()
            .map(Self::Product)
            .map_err(|_| RouteError::InvalidId(raw_id.to_owned()))
    }

    /// The canonical path for this route.
    pub fn path(self) -> String {
        match self {
            Self::Catalog => "/".to_owned(),
            Self::Product(id) => format!("{PRODUCT_PREFIX}{id}"),
        }
    }

    /// The product id carried by the route, if any.
    pub fn product_id(self) -> Option<ProductId> {
        match self {
            Self::Catalog => None,
            Self::Product(id) => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_root() {
        assert_eq!(Route::parse("/").unwrap(), Route::Catalog);
        assert_eq!(Route::parse("").unwrap(), Route::Catalog);
    }

    #[test]
    fn parses_product() {
        assert_eq!(
            Route::parse("/product/3").unwrap(),
            Route::Product(ProductId::new(3))
        );
        assert_eq!(
            Route::parse("/product/3/").unwrap(),
            Route::Product(ProductId::new(3))
        );
    }

    #[test]
    fn round_trips() {
        for route in [Route::Catalog, Route::Product(ProductId::new(20))] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(
            Route::parse("/cart"),
            Err(RouteError::UnknownPath("/cart".into()))
        );
        assert!(matches!(
            Route::parse("/product/3/reviews"),
            Err(RouteError::UnknownPath(_))
        ));
        assert!(matches!(
            Route::parse("/product/"),
            Err(RouteError::UnknownPath(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert_eq!(
            Route::parse("/product/abc"),
            Err(RouteError::InvalidId("abc".into()))
        );
    }

    #[test]
    fn rejects_non_canonical_id() {
        for raw in ["+3", "03", "3 "] {
            assert_eq!(
                Route::parse(&format!("/product/{raw}")),
                Err(RouteError::InvalidId(raw.to_owned()))
            );
        }
    }

    #[test]
    fn display_is_path() {
        assert_eq!(Route::Product(ProductId::new(7)).to_string(), "/product/7");
        assert_eq!(
            "/product/7".parse::<Route>().unwrap().product_id(),
            Some(ProductId::new(7))
        );
    }
}
