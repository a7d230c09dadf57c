//! Application core: the action loop and screen switching.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use shopfront_core::{Catalog, Route};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::data_bridge;
use crate::event::{Cadence, Event, Events};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// How long a toast stays up.
const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Top-level application state and event loop.
pub struct App {
    /// Route currently shown.
    route: Route,
    /// Screen rendering `route`.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Action sender: components and fetch tasks dispatch through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver: main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Catalog handle cloned into every fetch task.
    catalog: Catalog,
    cadence: Cadence,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    /// Create a new App that opens at `route`.
    pub fn new(catalog: Catalog, route: Route, cadence: Cadence) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            route,
            active_screen: ScreenId::for_route(route),
            screens: create_screens().into_iter().collect(),
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            catalog,
            cadence,
            notification: None,
        }
    }

    /// Initialize all screen components and mount the starting route.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        self.mount_active()
    }

    /// Enter the terminal and run until quit.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;
        let (w, h) = tui.size().unwrap_or((80, 24));
        self.action_tx.send(Action::Resize(w, h))?;
        self.init_screens()?;

        let mut events = Events::spawn(self.cadence);

        info!(host = %self.catalog.host(), route = %self.route, "TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action
            let action = match event {
                Event::Key(key) => self.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                Event::Tick => Some(Action::Tick),
                Event::Render => Some(Action::Render),
            };
            if let Some(action) = action {
                self.action_tx.send(action)?;
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Abandon in-flight fetches
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.unmount();
        }
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                KeyCode::Char('q') => Ok(Some(Action::Quit)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                return Ok(Some(Action::ToggleHelp));
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => return Ok(Some(Action::Reload)),
            (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) => {
                return Ok(Some(Action::GoBack));
            }
            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action: update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Render => {}

            // Grid geometry lives in the screens
            Action::Resize(..) => self.broadcast(action)?,

            Action::Navigate(route) => self.navigate(*route)?,

            Action::GoBack => {
                if self.route != Route::Catalog {
                    self.navigate(Route::Catalog)?;
                }
            }

            Action::Reload => {
                self.action_tx.send(Action::Notify(Notification::info(format!(
                    "Reloading {}",
                    self.route
                ))))?;
                self.forward_to_active(action)?;
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::FetchProducts(ticket) => {
                data_bridge::spawn_products_fetch(
                    self.catalog.clone(),
                    ticket.clone(),
                    self.action_tx.clone(),
                );
            }

            Action::FetchProduct(id, ticket) => {
                data_bridge::spawn_product_fetch(
                    self.catalog.clone(),
                    *id,
                    ticket.clone(),
                    self.action_tx.clone(),
                );
            }

            // The page that owns the generation raises any failure toast
            Action::ProductsLoaded { .. } | Action::ProductLoaded { .. } => {
                self.broadcast(action)?;
            }

            Action::Notify(notification) => {
                self.notification = Some((notification.clone(), Instant::now()));
            }

            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, created)| created.elapsed() > NOTIFICATION_TTL)
                {
                    self.notification = None;
                }
                self.forward_to_active(action)?;
            }

            Action::MoveSelection(_) | Action::ScrollDown | Action::ScrollUp => {
                self.forward_to_active(action)?;
            }
        }

        Ok(())
    }

    /// Show `route`, swapping screens if its kind differs from the current one.
    fn navigate(&mut self, route: Route) -> Result<()> {
        if route == self.route {
            return Ok(());
        }

        let target = ScreenId::for_route(route);
        if target != self.active_screen {
            debug!("switching screen: {} → {}", self.active_screen, target);
            if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                screen.unmount();
                screen.set_focused(false);
            }
            self.active_screen = target;
            if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                screen.set_focused(true);
            }
        }

        debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.mount_active()
    }

    /// Mount the active screen on the current route and queue its follow-up.
    fn mount_active(&mut self) -> Result<()> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            debug!(screen = screen.id(), route = %self.route, "mount");
            if let Some(follow_up) = screen.mount(self.route)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    fn forward_to_active(&mut self, action: &Action) -> Result<()> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    /// Data and layout updates go to ALL screens; each page drops results
    /// that don't belong to its current cycle.
    fn broadcast(&mut self, action: &Action) -> Result<()> {
        for screen in self.screens.values_mut() {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [breadcrumb bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Breadcrumb bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays on top (last = topmost)
        if let Some((ref notif, _)) = self.notification {
            Self::render_notification(frame, area, notif);
        }

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    /// Render the breadcrumb bar with the active screen highlighted.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let focused = self.screens.get(&id).is_some_and(|s| s.focused());
                let style = if focused {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(format!(" {} ", id.label()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled("›", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with the host, route, and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let host = self.catalog.host();
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", Style::default().fg(theme::SUCCESS_GREEN)),
            Span::styled(
                format!(" {}", host.host_str().unwrap_or(host.as_str())),
                theme::tab_inactive(),
            ),
            Span::styled(format!("  {}", self.route), theme::key_hint_key()),
            Span::styled(" │ ? help  r reload  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 22u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Blank out whatever is underneath
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let section = |title: &'static str| {
            [
                Line::from(Span::styled(
                    format!("  {title}"),
                    Style::default().fg(theme::NEON_CYAN),
                )),
                Line::from(Span::styled(
                    format!("  {}", "─".repeat(title.chars().count())),
                    theme::key_hint(),
                )),
            ]
        };
        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let mut help_text = vec![Line::from("")];
        help_text.extend(section("Catalog"));
        help_text.push(entry("←↑↓→ hjkl", "Select a product"));
        help_text.push(entry("Enter", "Open product details"));
        help_text.push(Line::from(""));
        help_text.extend(section("Product"));
        help_text.push(entry("j/k ↑/↓", "Scroll"));
        help_text.push(entry("n/p", "Next / previous product"));
        help_text.push(entry("Esc b", "Back to catalog"));
        help_text.push(Line::from(""));
        help_text.extend(section("Global"));
        help_text.push(entry("r", "Reload this page"));
        help_text.push(entry("?", "This help"));
        help_text.push(entry("q Ctrl+c", "Quit"));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "                    Esc or ? to close",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(help_text), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    fn render_notification(frame: &mut Frame, area: Rect, notif: &Notification) {
        let msg_len = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
        let width = msg_len
            .saturating_add(6)
            .clamp(20, 60)
            .min(area.width.saturating_sub(2));
        let height = 3u16;

        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above the bottom bars
        let toast_area = Rect::new(area.x + x, area.y + y, width, height);

        let (border_color, icon) = match notif.level {
            NotificationLevel::Error => (theme::ERROR_RED, "✗"),
            NotificationLevel::Info => (theme::NEON_CYAN, "·"),
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            toast_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(notif.message.as_str(), Style::default().fg(theme::DIM_WHITE)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
