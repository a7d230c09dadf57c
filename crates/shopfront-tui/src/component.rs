//! Component trait: the building block for every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use shopfront_core::Route;

use crate::action::Action;

/// Every screen implements Component.
///
/// Lifecycle: `init` → (`mount` → (`handle_key_event` | `update` | `render`)* → `unmount`)*
pub trait Component: Send {
    /// Called once at startup.
    /// Receives the action sender for dispatching actions to the app loop.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// The screen became active for `route`, or the route changed while it
    /// was active. May return a follow-up action such as a fetch request.
    fn mount(&mut self, _route: Route) -> Result<Option<Action>> {
        Ok(None)
    }

    /// The screen is no longer active. Abandon in-flight work.
    fn unmount(&mut self) {}

    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently holds input focus.
    fn focused(&self) -> bool {
        false
    }

    /// Set focus state.
    fn set_focused(&mut self, _focused: bool) {}

    /// Unique identifier for this component (for logging).
    fn id(&self) -> &str;
}
