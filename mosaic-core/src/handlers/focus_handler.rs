use crate::display_action::DisplayAction;
use crate::layouts::Layout;
use crate::models::{ClientKey, MonitorKey};
use crate::state::State;
use crate::utils::Filter;

impl State {
    /// The focused client, if any, lives on the focused monitor, is visible
    /// there and accepts focus.
    #[must_use]
    pub fn focus_is_consistent(&self) -> bool {
        let Some(key) = self.focus_manager.client() else {
            return false;
        };
        self.clients.get(key).is_some_and(|client| {
            client.monitor == self.focus_manager.monitor()
                && client.accepts_focus()
                && self.is_visible(key)
        })
    }

    /// Repairs focus after anything that may have invalidated it. Falls back
    /// to the first focusable client of the focused monitor, or to nothing.
    pub fn validate_focus(&mut self) -> bool {
        if self.focus_is_consistent() {
            return false;
        }
        let candidate = self
            .focus_manager
            .monitor()
            .and_then(|monitor| self.first_client(monitor, Filter::FOCUSABLE));
        let changed = candidate != self.focus_manager.client();
        tracing::trace!("focus repaired to {:?}", candidate);
        self.set_focused_client(candidate);
        changed
    }

    /// Focuses a client and the monitor it lives on.
    pub fn focus_client(&mut self, key: ClientKey) -> bool {
        let Some(client) = self.clients.get(key) else {
            return false;
        };
        if !client.accepts_focus() || !self.is_visible(key) {
            return false;
        }
        let monitor = client.monitor;
        if self.focus_manager.client() == Some(key) && self.focus_manager.monitor() == monitor {
            return false;
        }
        self.focus_manager.set_monitor(monitor);
        self.set_focused_client(Some(key));
        true
    }

    pub fn focus_next_client(&mut self) -> bool {
        let Some(current) = self.focus_manager.client() else {
            return false;
        };
        match self.next_client(current, Filter::FOCUSABLE) {
            Some(next) => self.focus_client(next),
            None => self.validate_focus(),
        }
    }

    pub fn focus_previous_client(&mut self) -> bool {
        let Some(current) = self.focus_manager.client() else {
            return false;
        };
        match self.previous_client(current, Filter::FOCUSABLE) {
            Some(previous) => self.focus_client(previous),
            None => self.validate_focus(),
        }
    }

    pub fn focus_monitor(&mut self, monitor: MonitorKey) -> bool {
        if !self.monitors.contains_key(monitor) || self.focus_manager.monitor() == Some(monitor) {
            return false;
        }
        self.focus_manager.set_monitor(Some(monitor));
        self.validate_focus();
        true
    }

    /// Moves to the next monitor in list order. There is no wrapping.
    pub fn focus_next_monitor(&mut self) -> bool {
        let next = self.focused_monitor().and_then(|monitor| monitor.next);
        next.map_or(false, |monitor| self.focus_monitor(monitor))
    }

    /// Moves to the previous monitor in list order. There is no wrapping.
    pub fn focus_previous_monitor(&mut self) -> bool {
        let previous = self.focused_monitor().and_then(|monitor| monitor.prev);
        previous.map_or(false, |monitor| self.focus_monitor(monitor))
    }

    /// Focuses the monitor under a click on the desktop.
    pub fn focus_monitor_at(&mut self, x: i32, y: i32) -> bool {
        let found = self.monitors_in_order().find(|key| {
            self.monitors
                .get(*key)
                .is_some_and(|monitor| monitor.geometry.contains_point(x, y))
        });
        found.map_or(false, |monitor| self.focus_monitor(monitor))
    }

    /// Moves input focus, updating borders of the old and new client.
    pub(crate) fn set_focused_client(&mut self, key: Option<ClientKey>) {
        let previous = self.focus_manager.client();
        self.focus_manager.set_client(key);
        if let Some(previous) = previous.filter(|p| Some(*p) != key) {
            self.refresh_border(previous);
        }
        let Some(key) = key else {
            if previous.is_some() {
                self.actions.push_back(DisplayAction::Unfocus);
            }
            return;
        };
        self.refresh_border(key);
        let Some(client) = self.clients.get(key) else {
            return;
        };
        let layout = client
            .monitor
            .and_then(|m| self.monitors.get(m))
            .map(|m| m.layout);
        let handle = client.handle;
        if !client.is_tiled() || layout == Some(Layout::None) {
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        }
        self.actions.push_back(DisplayAction::WindowTakeFocus(handle));
    }

    /// Emits the border color matching focus and urgency of a client.
    pub(crate) fn refresh_border(&mut self, key: ClientKey) {
        let focused = self.focus_manager.client() == Some(key);
        let Some(client) = self.clients.get_mut(key) else {
            return;
        };
        let color = if focused {
            self.colors.focused
        } else if client.is_urgent() {
            self.colors.urgent
        } else {
            self.colors.normal
        };
        client.border_color = color;
        let action = DisplayAction::SetBorderColor(client.handle, color);
        self.actions.push_back(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, Rect, Tagset, WindowHandle};
    use pretty_assertions::assert_eq;

    fn setup(handles: &[u32]) -> (State, MonitorKey, Vec<ClientKey>) {
        let mut state = State::new_test();
        let monitor = state.add_test_monitor("A", Rect::new(0, 0, 1200, 800));
        let keys = state.add_test_clients(monitor, handles);
        (state, monitor, keys)
    }

    fn focused_handle(state: &State) -> Option<u32> {
        state.focused_client().map(|c| c.handle.0)
    }

    #[test]
    fn validate_focus_picks_the_first_focusable_client() {
        let (mut state, _, keys) = setup(&[1, 2, 3]);
        state.clients[keys[0]].set_accepts_focus(false);
        assert!(state.validate_focus());
        assert_eq!(focused_handle(&state), Some(2));
        assert!(state.focus_is_consistent());
        assert!(!state.validate_focus(), "already consistent");
    }

    #[test]
    fn validate_focus_clears_focus_when_nothing_qualifies() {
        let (mut state, monitor, keys) = setup(&[1]);
        state.focus_client(keys[0]);
        state.monitors[monitor].tagset = Tagset::from_bits(0b10);
        assert!(state.validate_focus());
        assert_eq!(state.focus_manager.client(), None);
        assert_eq!(state.actions.back(), Some(&DisplayAction::Unfocus));
    }

    fn assert_converged(state: &mut State, monitor: MonitorKey) {
        state.validate_focus();
        if state.focus_manager.client().is_none() {
            assert_eq!(state.first_client(monitor, Filter::FOCUSABLE), None);
        } else {
            assert!(state.focus_is_consistent());
        }
    }

    #[test]
    fn focus_converges_after_tag_and_list_changes() {
        let (mut state, monitor, keys) = setup(&[1, 2, 3, 4]);
        state.focus_client(keys[2]);

        state.monitors[monitor].tagset = Tagset::from_bits(0b10);
        assert_converged(&mut state, monitor);
        assert_eq!(focused_handle(&state), None);

        state.with_counted_tags(keys[3], |c| c.tagset = Tagset::single(2));
        assert_converged(&mut state, monitor);
        assert_eq!(focused_handle(&state), Some(4));

        state.detach(monitor, keys[3]);
        assert_converged(&mut state, monitor);
        assert_eq!(focused_handle(&state), None);

        state.monitors[monitor].tagset = Tagset::from_bits(0b11);
        assert_converged(&mut state, monitor);
        assert_eq!(focused_handle(&state), Some(1));
    }

    #[test]
    fn focus_cycles_through_the_list() {
        let (mut state, _, keys) = setup(&[1, 2, 3]);
        state.focus_client(keys[0]);
        state.clients[keys[1]].mode = Mode::Floating;

        let mut seen = vec![];
        for _ in 0..3 {
            state.focus_next_client();
            seen.push(focused_handle(&state).unwrap());
        }
        assert_eq!(seen, vec![2, 3, 1]);

        state.focus_previous_client();
        assert_eq!(focused_handle(&state), Some(3));
    }

    #[test]
    fn focusing_a_floating_client_raises_it() {
        let (mut state, _, keys) = setup(&[1, 2]);
        state.clients[keys[1]].mode = Mode::Floating;
        state.actions.clear();
        state.focus_client(keys[1]);
        assert_eq!(
            state.actions.iter().cloned().collect::<Vec<_>>(),
            vec![
                DisplayAction::SetBorderColor(WindowHandle(2), 0x00_00ff),
                DisplayAction::MoveToTop(WindowHandle(2)),
                DisplayAction::WindowTakeFocus(WindowHandle(2)),
            ]
        );
    }

    #[test]
    fn losing_focus_restores_the_urgent_border() {
        let (mut state, _, keys) = setup(&[1, 2]);
        state.focus_client(keys[0]);
        state.clients[keys[0]].set_urgent(true);
        state.actions.clear();
        state.focus_client(keys[1]);
        assert_eq!(
            state.actions.front(),
            Some(&DisplayAction::SetBorderColor(WindowHandle(1), 0xff_0000))
        );
        assert_eq!(state.clients[keys[0]].border_color, 0xff_0000);
    }

    #[test]
    fn switching_monitors_repairs_focus() {
        let (mut state, _, keys) = setup(&[1]);
        let right = state.add_test_monitor("B", Rect::new(1200, 0, 1200, 800));
        let right_keys = state.add_test_clients(right, &[7, 8]);
        state.focus_client(keys[0]);

        assert!(state.focus_next_monitor());
        assert_eq!(state.focus_manager.monitor(), Some(right));
        assert_eq!(state.focus_manager.client(), Some(right_keys[0]));
        assert!(!state.focus_next_monitor(), "no wrapping");

        assert!(state.focus_previous_monitor());
        assert_eq!(focused_handle(&state), Some(1));
    }

    #[test]
    fn root_click_focuses_the_monitor_under_it() {
        let (mut state, left, _) = setup(&[1]);
        let right = state.add_test_monitor("B", Rect::new(1200, 0, 1200, 800));
        assert!(state.focus_monitor_at(1500, 300));
        assert_eq!(state.focus_manager.monitor(), Some(right));
        assert!(!state.focus_monitor_at(1500, 300));
        assert!(state.focus_monitor_at(10, 10));
        assert_eq!(state.focus_manager.monitor(), Some(left));
    }
}
