//! Product card for the catalog grid.
//!
//! ```text
//! ╭ #1 ─────────────────────────────╮
//! │ men's clothing                   │
//! │ Fjallraven - Foldsack No. 1      │
//! │ Backpack                         │
//! │ Your perfect pack for everyday   │
//! │ use and walks in the forest…     │
//! │ $109.95          View details →  │
//! │ ▣ fakestoreapi.com/img/81fP…     │
//! ╰──────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use shopfront_core::page::listing::{DETAILS_LINK, ProductCard};

use crate::theme;

/// Minimum card width, borders included.
pub const CARD_WIDTH: u16 = 36;

/// Card height, borders included.
pub const CARD_HEIGHT: u16 = 10;

/// Cards that fit side by side in `width` columns (at least one).
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Draw one card into `area`. The selected card gets the focus border.
pub fn render_card(frame: &mut Frame, area: Rect, card: &ProductCard, selected: bool) {
    let block = Block::default()
        .title(Span::styled(format!(" #{} ", card.id), theme::key_hint()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            theme::border_focused()
        } else {
            theme::border_default()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1), // category tag
        Constraint::Length(2), // title
        Constraint::Min(1),    // blurb
        Constraint::Length(1), // price + link
        Constraint::Length(1), // image
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", card.category),
            theme::category_tag(),
        ))),
        rows[0],
    );

    let title_style = if selected {
        theme::heading()
    } else {
        theme::body().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(card.title.as_str())
            .style(title_style)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(card.blurb.as_str())
            .style(theme::key_hint())
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    let meta = Layout::horizontal([Constraint::Min(1), Constraint::Length(15)]).split(rows[3]);
    frame.render_widget(
        Paragraph::new(Span::styled(card.price.as_str(), theme::price())),
        meta[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(DETAILS_LINK, theme::link())).alignment(Alignment::Right),
        meta[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("▣ ", theme::key_hint_key()),
            Span::styled(image_label(&card.image), theme::key_hint()),
        ])),
        rows[4],
    );
}

/// Image URL without its scheme, which is noise in a terminal.
fn image_label(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}
