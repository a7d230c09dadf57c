//! Reusable rendering pieces shared by the screens.

pub mod product_card;
pub mod swatches;
