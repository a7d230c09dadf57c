// ── Product identity ──
//
// The catalog host keys products by a non-negative integer. Routes carry
// it in string form (`/product/3`), so parsing lives here too.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Canonical identifier for a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

/// Text that is not an id in canonical decimal form.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid product id '{0}'")]
pub struct InvalidProductId(pub String);

impl ProductId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The following id, saturating at `u64::MAX`.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding id, or `None` at zero.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts plain ASCII digits only, without sign or leading zeros, so every
/// parsed id prints back as the same text.
impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidProductId(s.to_owned());
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(invalid());
        }
        s.parse().map(Self).map_err(|_| invalid())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn product_id_from_str() {
        let id: ProductId = "17".parse().unwrap();
        assert_eq!(id.get(), 17);
    }

    #[test]
    fn product_id_rejects_non_numeric() {
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
        assert!("99999999999999999999".parse::<ProductId>().is_err());
    }

    #[test]
    fn product_id_requires_canonical_digits() {
        assert_eq!(
            "+3".parse::<ProductId>(),
            Err(InvalidProductId("+3".to_owned()))
        );
        assert!("03".parse::<ProductId>().is_err());
        assert!(" 3".parse::<ProductId>().is_err());
        assert!("٣".parse::<ProductId>().is_err());
        assert_eq!("0".parse::<ProductId>().unwrap(), ProductId::new(0));
        assert_eq!("10".parse::<ProductId>().unwrap(), ProductId::new(10));
    }

    #[test]
    fn product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn product_id_neighbours() {
        assert_eq!(ProductId::new(1).next(), ProductId::new(2));
        assert_eq!(ProductId::new(1).prev(), Some(ProductId::new(0)));
        assert_eq!(ProductId::new(0).prev(), None);
        assert_eq!(ProductId::new(u64::MAX).next(), ProductId::new(u64::MAX));
    }
}
