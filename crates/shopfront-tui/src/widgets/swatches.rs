//! Decorative color swatches under the product image: ██ ██ ██.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

/// A line of `count` swatch blocks, cycling through the swatch palette.
pub fn swatch_line(count: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(count * 2);
    for (i, color) in theme::SWATCHES.iter().cycle().take(count).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("███", Style::default().fg(*color)));
    }
    Line::from(spans)
}
