use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::models::{ClientKey, MonitorKey, WindowHandle};
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }

    /// Builds the monitor list and takes over windows that already exist.
    pub fn startup(&mut self, existing: &[WindowHandle]) {
        self.screen_update_handler();
        for handle in existing {
            self.window_created_handler(*handle);
        }
        self.publish_hints();
        self.flush_actions();
    }

    /// Handles one event to completion, then publishes the hints and hands
    /// every queued action to the display server.
    ///
    /// Returns `true` if the event changed anything.
    pub fn handle_event(&mut self, event: DisplayEvent) -> bool {
        let changed = self.display_event_handler(event);
        self.publish_hints();
        self.flush_actions();
        changed
    }

    pub fn flush_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            self.display_server.execute_action(act);
        }
        self.display_server.flush();
    }

    /// Forgets every client and monitor.
    pub fn teardown(&mut self) {
        let monitors: Vec<MonitorKey> = self.state.monitors_in_order().collect();
        for monitor in monitors {
            let keys: Vec<ClientKey> = self.state.clients_of(monitor).collect();
            for key in keys {
                self.state.detach(monitor, key);
                self.state.remove_client(key);
            }
        }
        self.state.clients.clear();
        self.state.registry.clear();
        self.state.monitors.clear();
        self.state.monitor_head = None;
        self.state.monitor_tail = None;
        self.state.primary = None;
        self.state.set_focused_client(None);
        self.state.focus_manager.set_monitor(None);
        self.flush_actions();
    }

    fn publish_hints(&mut self) {
        if let Some(hints) = self.state.monitor_hints() {
            self.state.actions.push_back(DisplayAction::SetMonitorHints(hints));
        }
        let focused = self.state.focus_hints();
        self.state.actions.push_back(DisplayAction::SetFocusedHints(focused));
        let handles = self.state.managed_handles();
        self.state.actions.push_back(DisplayAction::SetClientList(handles));
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test() -> Self {
        Self::new(crate::config::TestConfig::default())
    }

    /// A manager with one 1200x800 output named `A`.
    pub fn new_test_with_screen() -> Self {
        let mut manager = Self::new_test();
        manager.display_server.screens = vec![crate::models::Screen::new(
            "A",
            crate::models::Rect::new(0, 0, 1200, 800),
            true,
        )];
        manager.startup(&[]);
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    #[test]
    fn events_end_with_published_hints() {
        let mut manager = Manager::new_test_with_screen();
        manager.display_server.executed.clear();
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(3)));

        let executed = &manager.display_server.executed;
        assert!(manager.state.actions.is_empty());
        assert!(matches!(
            executed.last(),
            Some(DisplayAction::SetClientList(handles)) if handles == &vec![WindowHandle(3)]
        ));
        let focused = executed.iter().any(|a| {
            matches!(a, DisplayAction::SetFocusedHints(h) if h.handle == Some(WindowHandle(3)))
        });
        assert!(focused);
        let tiled = executed.iter().any(|a| {
            matches!(a, DisplayAction::Show { rect, .. } if *rect == Rect::new(0, 0, 1200, 800))
        });
        assert!(tiled);
    }

    #[test]
    fn teardown_forgets_everything() {
        let mut manager = Manager::new_test_with_screen();
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(3)));
        manager.teardown();
        assert!(manager.state.clients.is_empty());
        assert!(manager.state.monitors.is_empty());
        assert_eq!(manager.state.client_key(WindowHandle(3)), None);
        assert_eq!(manager.state.focus_manager.client(), None);
    }
}
