//! Catalog screen: the hero banner above the product card grid.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tracing::debug;

use shopfront_core::page::listing::{
    ERROR_MESSAGE, HERO_ACTIONS, HERO_EYEBROW, HERO_HEADLINE, HERO_SUBCOPY, ListingBody, ProductCard,
    SECTION_EYEBROW, SECTION_HEADING,
};
use shopfront_core::{ListingPage, Phase, Route};

use crate::action::{Action, Direction, Notification};
use crate::component::Component;
use crate::theme;
use crate::widgets::product_card::{self, CARD_HEIGHT};

pub struct CatalogScreen {
    focused: bool,
    page: ListingPage,
    /// Index of the selected card.
    selected: usize,
    /// Cards per grid row at the current terminal width.
    columns: usize,
    throbber_state: ThrobberState,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            page: ListingPage::new(),
            selected: 0,
            columns: 1,
            throbber_state: ThrobberState::default(),
        }
    }

    fn len(&self) -> usize {
        self.page.products().len()
    }

    fn move_selection(&mut self, direction: Direction) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let cols = self.columns.max(1);
        self.selected = match direction {
            Direction::Left => self.selected.saturating_sub(1),
            Direction::Right => (self.selected + 1).min(len - 1),
            Direction::Up => self.selected.checked_sub(cols).unwrap_or(self.selected),
            Direction::Down if self.selected + cols < len => self.selected + cols,
            Direction::Down => self.selected,
        };
    }

    fn selected_route(&self) -> Option<Route> {
        self.page
            .products()
            .get(self.selected)
            .map(|product| Route::Product(product.id))
    }

    fn render_hero(frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(1), // eyebrow
            Constraint::Length(1), // headline
            Constraint::Min(1),    // subcopy
            Constraint::Length(1), // calls to action
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(HERO_EYEBROW.to_uppercase(), theme::eyebrow())),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(HERO_HEADLINE, theme::heading())),
            layout[1],
        );
        frame.render_widget(
            Paragraph::new(HERO_SUBCOPY)
                .style(theme::body())
                .wrap(Wrap { trim: true }),
            layout[2],
        );

        let mut spans = Vec::with_capacity(HERO_ACTIONS.len() * 2);
        for (i, label) in HERO_ACTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == 0 {
                theme::button()
            } else {
                theme::link()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout[3]);
    }

    fn render_section_header(frame: &mut Frame, area: Rect, badge: &str) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
        frame.render_widget(
            Paragraph::new(Span::styled(SECTION_EYEBROW.to_uppercase(), theme::eyebrow())),
            layout[0],
        );

        let heading = Layout::horizontal([Constraint::Min(1), Constraint::Length(16)])
            .split(layout[1]);
        frame.render_widget(
            Paragraph::new(Span::styled(SECTION_HEADING, theme::heading())),
            heading[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {badge} "), theme::category_tag()))
                .alignment(Alignment::Right),
            heading[1],
        );
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, cards: &[ProductCard]) {
        if cards.is_empty() || area.height == 0 {
            return;
        }

        let cols = (area.width / product_card::CARD_WIDTH).max(1);
        let card_width = area.width / cols;
        let visible_rows = (area.height / CARD_HEIGHT).max(1);

        let cols_usize = usize::from(cols);
        let first_row = first_visible_row(self.selected / cols_usize, usize::from(visible_rows));

        for row in 0..visible_rows {
            let y = area.y + row * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            for col in 0..cols {
                let idx = (first_row + usize::from(row)) * cols_usize + usize::from(col);
                let Some(card) = cards.get(idx) else {
                    return;
                };
                let rect = Rect::new(area.x + col * card_width, y, card_width, height);
                product_card::render_card(frame, rect, card, idx == self.selected);
            }
        }
    }
}

/// First grid row to draw so that `selected_row` stays on screen.
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

impl Component for CatalogScreen {
    fn mount(&mut self, _route: Route) -> Result<Option<Action>> {
        let ticket = self.page.mount();
        Ok(Some(Action::FetchProducts(ticket)))
    }

    fn unmount(&mut self) {
        self.page.unmount();
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let direction = match key.code {
            KeyCode::Char('h') | KeyCode::Left => Direction::Left,
            KeyCode::Char('l') | KeyCode::Right => Direction::Right,
            KeyCode::Char('k') | KeyCode::Up => Direction::Up,
            KeyCode::Char('j') | KeyCode::Down => Direction::Down,
            KeyCode::Enter => return Ok(self.selected_route().map(Action::Navigate)),
            _ => return Ok(None),
        };
        Ok(Some(Action::MoveSelection(direction)))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.page.state().is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::Resize(width, _) => {
                // Outer border takes two columns.
                self.columns = product_card::columns_for(width.saturating_sub(2));
            }
            Action::MoveSelection(direction) => self.move_selection(*direction),
            Action::Reload => {
                return Ok(Some(Action::FetchProducts(self.page.mount())));
            }
            Action::ProductsLoaded { generation, result } => {
                if !self.page.resolve(*generation, result.clone()) {
                    return Ok(None);
                }
                debug!(count = self.len(), "catalog screen updated");
                if self.selected >= self.len() {
                    self.selected = 0;
                }
                if self.page.state().phase() == Phase::Failed {
                    return Ok(Some(Action::Notify(Notification::error(ERROR_MESSAGE))));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Shopfront ")
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
            Constraint::Length(5), // hero
            Constraint::Length(1), // spacer
            Constraint::Length(2), // section header
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // body
            Constraint::Length(1), // hints
        ])
        .split(inner);

        Self::render_hero(frame, layout[0]);

        let view = self.page.view();
        Self::render_section_header(frame, layout[2], &view.badge());

        match view.body {
            ListingBody::Loading(message) => {
                let throbber = Throbber::default()
                    .label(message)
                    .style(Style::default().fg(theme::NEON_CYAN))
                    .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
                frame.render_stateful_widget(
                    throbber,
                    layout[4],
                    &mut self.throbber_state.clone(),
                );
            }
            ListingBody::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(message, theme::error_text()))
                        .wrap(Wrap { trim: true }),
                    layout[4],
                );
            }
            ListingBody::Grid(cards) => self.render_grid(frame, layout[4], &cards),
        }

        let mut hints = vec![
            Span::styled("  ←↑↓→ ", theme::key_hint_key()),
            Span::styled("select  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("open  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("reload", theme::key_hint()),
        ];
        if self.page.state().phase() == Phase::Ready {
            hints.push(Span::styled(
                format!("  {}/{}", (self.selected + 1).min(self.len()), self.len()),
                theme::key_hint(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(hints)), layout[5]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Catalog"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use url::Url;

    use shopfront_core::page::listing::{ERROR_MESSAGE, LOADING_MESSAGE};
    use shopfront_core::{FetchTicket, Product, ProductId};

    use super::*;
    use crate::action::FetchFailed;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            price: Some(12.5),
            description: format!("About {title}."),
            category: "electronics".to_owned(),
            image: Url::parse(&format!("https://img.example.test/{id}.jpg")).unwrap(),
        }
    }

    fn mounted() -> (CatalogScreen, FetchTicket) {
        let mut screen = CatalogScreen::new();
        let Some(Action::FetchProducts(ticket)) = screen.mount(Route::Catalog).unwrap() else {
            panic!("mount should request the collection");
        };
        (screen, ticket)
    }

    fn loaded(n: u64) -> CatalogScreen {
        let (mut screen, ticket) = mounted();
        let products = (1..=n).map(|i| product(i, &format!("Item {i}"))).collect();
        screen
            .update(&Action::ProductsLoaded {
                generation: ticket.generation(),
                result: Ok(Arc::new(products)),
            })
            .unwrap();
        screen
    }

    fn draw(screen: &CatalogScreen, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn loading_shows_message_and_hero() {
        let (screen, _ticket) = mounted();
        let text = draw(&screen, 100, 30);
        assert!(text.contains(LOADING_MESSAGE));
        assert!(text.contains("HOLIDAY EDIT"));
        assert!(text.contains(HERO_HEADLINE));
        assert!(text.contains("Trending now"));
        assert!(text.contains("0 products"));
    }

    #[test]
    fn loaded_grid_renders_cards_and_badge() {
        let screen = loaded(2);
        let text = draw(&screen, 100, 30);
        assert!(text.contains("Item 1"));
        assert!(text.contains("Item 2"));
        assert!(text.contains("$12.50"));
        assert!(text.contains("2 products"));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn failure_shows_error_without_cards() {
        let (mut screen, ticket) = mounted();
        let toast = screen
            .update(&Action::ProductsLoaded {
                generation: ticket.generation(),
                result: Err(FetchFailed),
            })
            .unwrap();
        assert!(matches!(
            toast,
            Some(Action::Notify(Notification { ref message, .. })) if message == ERROR_MESSAGE
        ));
        let text = draw(&screen, 100, 30);
        assert!(text.contains("Unable to load products right now."));
        assert!(!text.contains(LOADING_MESSAGE));
        assert_eq!(
            screen.page.view().body,
            ListingBody::Failed(ERROR_MESSAGE.to_owned())
        );
    }

    #[test]
    fn stale_result_is_ignored() {
        let (mut screen, first) = mounted();
        screen.unmount();
        let Some(Action::FetchProducts(_second)) = screen.mount(Route::Catalog).unwrap() else {
            panic!("remount should request the collection again");
        };

        screen
            .update(&Action::ProductsLoaded {
                generation: first.generation(),
                result: Ok(Arc::new(vec![product(1, "Old")])),
            })
            .unwrap();
        assert!(screen.page.state().is_loading());
    }

    #[test]
    fn superseded_failure_raises_no_toast() {
        let (mut screen, first) = mounted();
        screen.update(&Action::Reload).unwrap();

        let toast = screen
            .update(&Action::ProductsLoaded {
                generation: first.generation(),
                result: Err(FetchFailed),
            })
            .unwrap();
        assert!(toast.is_none());
        assert!(screen.page.state().is_loading());
    }

    #[test]
    fn enter_opens_selected_product() {
        let mut screen = loaded(3);
        screen.update(&Action::Resize(200, 40)).unwrap();

        let action = screen.handle_key_event(key(KeyCode::Right)).unwrap().unwrap();
        screen.update(&action).unwrap();

        let Some(Action::Navigate(route)) = screen.handle_key_event(key(KeyCode::Enter)).unwrap()
        else {
            panic!("enter should navigate");
        };
        assert_eq!(route, Route::Product(ProductId::new(2)));
        assert_eq!(route.path(), "/product/2");
    }

    #[test]
    fn enter_while_loading_does_nothing() {
        let (mut screen, _ticket) = mounted();
        assert!(screen.handle_key_event(key(KeyCode::Enter)).unwrap().is_none());
    }

    #[test]
    fn selection_moves_by_rows_and_clamps() {
        let mut screen = loaded(7);
        // 3 columns at width 110.
        screen.update(&Action::Resize(110, 40)).unwrap();
        assert_eq!(screen.columns, 3);

        screen.move_selection(Direction::Down);
        assert_eq!(screen.selected, 3);
        screen.move_selection(Direction::Down);
        assert_eq!(screen.selected, 6);
        screen.move_selection(Direction::Down);
        assert_eq!(screen.selected, 6);
        screen.move_selection(Direction::Right);
        assert_eq!(screen.selected, 6);
        screen.move_selection(Direction::Up);
        assert_eq!(screen.selected, 3);
        screen.move_selection(Direction::Left);
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn reload_restarts_cycle() {
        let mut screen = loaded(1);
        let Some(Action::FetchProducts(ticket)) = screen.update(&Action::Reload).unwrap() else {
            panic!("reload should request the collection");
        };
        assert!(screen.page.state().is_loading());
        assert!(!ticket.is_cancelled());
    }

    #[test]
    fn unmount_cancels_fetch() {
        let (mut screen, ticket) = mounted();
        screen.unmount();
        assert!(ticket.is_cancelled());
    }

    #[test]
    fn first_row_follows_selection() {
        assert_eq!(first_visible_row(0, 2), 0);
        assert_eq!(first_visible_row(1, 2), 0);
        assert_eq!(first_visible_row(4, 2), 3);
        assert_eq!(first_visible_row(4, 0), 4);
    }
}
