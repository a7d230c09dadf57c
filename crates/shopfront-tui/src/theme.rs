//! SilkCircuit Neon palette and semantic styling for the storefront.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

/// Decorative swatch colors on the product page.
pub const SWATCHES: [Color; 3] = [CORAL, NEON_CYAN, ELECTRIC_YELLOW];

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel or selected card.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Small uppercase label above a heading ("Featured", "Holiday edit").
pub fn eyebrow() -> Style {
    Style::default().fg(CORAL).add_modifier(Modifier::BOLD)
}

/// Large heading text.
pub fn heading() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Body copy.
pub fn body() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Category tag on cards and the product page.
pub fn category_tag() -> Style {
    Style::default().fg(BG_DARK).bg(NEON_CYAN)
}

/// Product price.
pub fn price() -> Style {
    Style::default()
        .fg(ELECTRIC_YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// Link-like affordances ("View details →", "← back to catalog").
pub fn link() -> Style {
    Style::default()
        .fg(NEON_CYAN)
        .add_modifier(Modifier::UNDERLINED)
}

/// Inert button face.
pub fn button() -> Style {
    Style::default()
        .fg(BG_DARK)
        .bg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Fetch failure message.
pub fn error_text() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Active breadcrumb segment.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive breadcrumb segment.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}
