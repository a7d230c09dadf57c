//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use shopfront_core::{FetchTicket, Product, ProductId, Route};

/// Movement inside the catalog card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// A fetch failed. The cause is logged where it happened; pages only ever
/// show their fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchFailed;

/// Every state change in the TUI flows through one of these.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ───────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ──────────────────────────────────────────────────
    /// Show the view addressed by a route.
    Navigate(Route),
    /// Return to the catalog.
    GoBack,
    /// Restart the active page's fetch cycle.
    Reload,
    ToggleHelp,

    // ── Fetch requests (a page opened a cycle) ──────────────────────
    FetchProducts(FetchTicket),
    FetchProduct(ProductId, FetchTicket),

    // ── Fetch results ───────────────────────────────────────────────
    /// Collection fetch finished.
    ProductsLoaded {
        generation: u64,
        result: Result<Arc<Vec<Product>>, FetchFailed>,
    },
    /// Single product fetch finished.
    ProductLoaded {
        generation: u64,
        result: Result<Arc<Product>, FetchFailed>,
    },

    // ── Notifications ───────────────────────────────────────────────
    Notify(Notification),

    // ── Screen-local ────────────────────────────────────────────────
    MoveSelection(Direction),
    ScrollDown,
    ScrollUp,
}
