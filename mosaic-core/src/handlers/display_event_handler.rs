use super::{Config, DisplayEvent, Manager};
use crate::display_servers::DisplayServer;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::ClientDiscovered(handle) => self.window_created_handler(handle),
            DisplayEvent::ClientGone(handle) => self.window_destroyed_handler(handle),
            DisplayEvent::PropertyChanged(handle, property) => {
                self.property_changed_handler(handle, property)
            }
            DisplayEvent::ConfigureRequest(request) => self.configure_request_handler(request),
            DisplayEvent::StateRequest(handle, action, requested) => {
                self.state_request_handler(handle, action, requested)
            }

            DisplayEvent::WindowTakeFocus(handle) => match self.state.client_key(handle) {
                Some(key) => self.state.focus_client(key),
                None => false,
            },

            DisplayEvent::RootClick(x, y) => self.state.focus_monitor_at(x, y),

            DisplayEvent::TopologyChanged => self.screen_update_handler(),

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::models::{Rect, Screen, WindowHandle};
    use crate::Command;

    #[test]
    fn focus_events_move_focus_to_managed_clients_only() {
        let mut manager = Manager::new_test_with_screen();
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(1)));
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(2)));
        assert_eq!(
            manager.state.focused_client().map(|c| c.handle),
            Some(WindowHandle(2))
        );

        assert!(manager.handle_event(DisplayEvent::WindowTakeFocus(WindowHandle(1))));
        assert_eq!(
            manager.state.focused_client().map(|c| c.handle),
            Some(WindowHandle(1))
        );
        assert!(!manager.handle_event(DisplayEvent::WindowTakeFocus(WindowHandle(7))));
        assert!(!manager.handle_event(DisplayEvent::WindowTakeFocus(WindowHandle(1))));
    }

    #[test]
    fn topology_change_rescans_the_outputs() {
        let mut manager = Manager::new_test_with_screen();
        manager.display_server.screens = vec![
            Screen::new("A", Rect::new(0, 0, 1200, 800), true),
            Screen::new("B", Rect::new(1200, 0, 800, 600), false),
        ];
        assert!(manager.handle_event(DisplayEvent::TopologyChanged));
        assert!(manager.state.monitor_by_name("B").is_some());

        assert!(manager.handle_event(DisplayEvent::RootClick(1500, 300)));
        assert_eq!(
            manager.state.focus_manager.monitor(),
            manager.state.monitor_by_name("B")
        );
    }

    #[test]
    fn commands_are_dispatched() {
        let mut manager = Manager::new_test_with_screen();
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(1)));
        manager.display_server.executed.clear();
        manager.handle_event(DisplayEvent::SendCommand(Command::KillClient));
        assert!(manager
            .display_server
            .executed
            .contains(&DisplayAction::KillWindow(WindowHandle(1))));
    }

    #[test]
    fn destroyed_windows_are_forgotten() {
        let mut manager = Manager::new_test_with_screen();
        manager.handle_event(DisplayEvent::ClientDiscovered(WindowHandle(1)));
        assert!(manager.handle_event(DisplayEvent::ClientGone(WindowHandle(1))));
        assert!(manager.state.client(WindowHandle(1)).is_none());
        assert!(!manager.handle_event(DisplayEvent::ClientGone(WindowHandle(1))));
    }
}
