//! Product screen: gallery on the left, copy and inert purchase controls on
//! the right.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tracing::debug;

use shopfront_core::page::detail::{
    ACTIONS, BACK_LINK, DetailView, ERROR_MESSAGE, FACTS, ProductDetail, SWATCH_COUNT,
};
use shopfront_core::{DetailPage, Phase, Route};

use crate::action::{Action, Notification};
use crate::component::Component;
use crate::theme;
use crate::widgets::swatches::swatch_line;

/// Below this width the gallery stacks above the copy.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 72;
const GALLERY_WIDTH: u16 = 30;

pub struct ProductScreen {
    focused: bool,
    page: DetailPage,
    /// Vertical scroll offset of the copy column.
    scroll: u16,
    /// Where the copy column was last drawn. Bounds scrolling.
    copy_area: Cell<Rect>,
    throbber_state: ThrobberState,
}

impl ProductScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            page: DetailPage::new(),
            scroll: 0,
            copy_area: Cell::new(Rect::default()),
            throbber_state: ThrobberState::default(),
        }
    }

    /// Largest offset that still fills the copy column, measured in wrapped
    /// rows at the width it was last drawn.
    fn max_scroll(&self) -> u16 {
        let DetailView::Item(detail) = self.page.view() else {
            return 0;
        };
        let area = self.copy_area.get();
        if area.is_empty() {
            return 0;
        }
        let rows = copy_paragraph(&detail).line_count(area.width);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(area.height)
    }

    fn render_gallery(frame: &mut Frame, area: Rect, detail: &ProductDetail) {
        let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = frame_block.inner(layout[0]);
        frame.render_widget(frame_block, layout[0]);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("▣", theme::key_hint_key())),
                Line::from(Span::styled(detail.image.as_str(), theme::key_hint())),
            ])
            .wrap(Wrap { trim: true }),
            inner,
        );

        frame.render_widget(Paragraph::new(swatch_line(SWATCH_COUNT)), layout[1]);
    }
}

/// The copy column: category, title, price, description, controls, facts.
fn copy_lines(detail: &ProductDetail) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", detail.category),
            theme::category_tag(),
        )),
        Line::from(Span::styled(detail.title.as_str(), theme::heading())),
        Line::from(Span::styled(detail.price.as_str(), theme::price())),
        Line::from(""),
        Line::from(Span::styled(detail.description.as_str(), theme::body())),
        Line::from(""),
    ];

    let mut controls = Vec::with_capacity(ACTIONS.len() * 2);
    for (i, label) in ACTIONS.iter().enumerate() {
        if i > 0 {
            controls.push(Span::raw("  "));
        }
        let style = if i == 0 {
            theme::button()
        } else {
            theme::link()
        };
        controls.push(Span::styled(format!(" {label} "), style));
    }
    lines.push(Line::from(controls));
    lines.push(Line::from(""));

    for (label, value) in FACTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<10}"), theme::key_hint()),
            Span::styled(value, theme::body()),
        ]));
    }
    lines
}

fn copy_paragraph(detail: &ProductDetail) -> Paragraph<'_> {
    Paragraph::new(copy_lines(detail)).wrap(Wrap { trim: true })
}

impl Component for ProductScreen {
    fn mount(&mut self, route: Route) -> Result<Option<Action>> {
        let Some(id) = route.product_id() else {
            return Ok(None);
        };
        // Same id already on screen: keep it.
        let Some(ticket) = self.page.show(id) else {
            return Ok(None);
        };
        self.scroll = 0;
        Ok(Some(Action::FetchProduct(id, ticket)))
    }

    fn unmount(&mut self) {
        self.page.unmount();
        self.scroll = 0;
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('n') => self
                .page
                .product_id()
                .map(|id| Action::Navigate(Route::Product(id.next()))),
            KeyCode::Char('p') => self
                .page
                .product_id()
                .and_then(shopfront_core::ProductId::prev)
                .map(|id| Action::Navigate(Route::Product(id))),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.page.state().is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.min(self.max_scroll()).saturating_sub(1);
            }
            Action::Reload => {
                self.scroll = 0;
                let id = self.page.product_id();
                return Ok(self
                    .page
                    .reload()
                    .zip(id)
                    .map(|(ticket, id)| Action::FetchProduct(id, ticket)));
            }
            Action::ProductLoaded { generation, result } => {
                if !self.page.resolve(*generation, result.clone()) {
                    return Ok(None);
                }
                debug!(id = ?self.page.product_id(), "product screen updated");
                if self.page.state().phase() == Phase::Failed {
                    return Ok(Some(Action::Notify(Notification::error(ERROR_MESSAGE))));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = self
            .page
            .product_id()
            .map_or_else(|| " Product ".to_owned(), |id| format!(" Product #{id} "));
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1), // back link
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // body
            Constraint::Length(1), // hints
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(BACK_LINK, theme::link()),
                Span::styled("  (Esc)", theme::key_hint()),
            ])),
            layout[0],
        );

        match self.page.view() {
            DetailView::Loading(message) => {
                let throbber = Throbber::default()
                    .label(message)
                    .style(Style::default().fg(theme::NEON_CYAN))
                    .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
                frame.render_stateful_widget(
                    throbber,
                    layout[2],
                    &mut self.throbber_state.clone(),
                );
            }
            DetailView::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(message, theme::error_text()))
                        .wrap(Wrap { trim: true }),
                    layout[2],
                );
            }
            DetailView::Empty => {}
            DetailView::Item(detail) => {
                let body = layout[2];
                let (gallery, copy) = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
                    let cols = Layout::horizontal([
                        Constraint::Length(GALLERY_WIDTH),
                        Constraint::Length(2),
                        Constraint::Min(1),
                    ])
                    .split(body);
                    (cols[0], cols[2])
                } else {
                    let rows = Layout::vertical([
                        Constraint::Length(6),
                        Constraint::Length(1),
                        Constraint::Min(1),
                    ])
                    .split(body);
                    (rows[0], rows[2])
                };

                Self::render_gallery(frame, gallery, &detail);
                self.copy_area.set(copy);
                // A resize can leave the offset past the end.
                let scroll = self.scroll.min(self.max_scroll());
                frame.render_widget(copy_paragraph(&detail).scroll((scroll, 0)), copy);
            }
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("scroll  ", theme::key_hint()),
            Span::styled("n/p ", theme::key_hint_key()),
            Span::styled("next/prev  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("reload  ", theme::key_hint()),
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("back", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[3]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Product"
    }
}
