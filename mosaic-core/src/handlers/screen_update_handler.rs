use super::{Config, Manager, Monitor, Screen};
use crate::display_servers::DisplayServer;
use crate::models::{ClientKey, GeometryStatus, MonitorKey, Rect};
use crate::state::State;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Rescans the outputs of the display server and brings the monitor list
    /// in line with them.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn screen_update_handler(&mut self) -> bool {
        let screens = self.display_server.screens();
        let root = self.display_server.root_geometry();
        self.state.reconcile_screens(screens, root)
    }
}

impl State {
    /// Updates monitors that are still reported, appends new ones and
    /// retires the rest, moving their clients to the primary monitor.
    /// Without any screen a single monitor covers `fallback`.
    pub fn reconcile_screens(&mut self, mut screens: Vec<Screen>, fallback: Rect) -> bool {
        if screens.is_empty() {
            tracing::warn!("No screens reported, falling back to {:?}", fallback);
            screens.push(Screen::new("Default", fallback, true));
        }

        let mut primary = None;
        for screen in &screens {
            let key = match self.monitor_by_name(&screen.name) {
                Some(key) => {
                    if let Some(monitor) = self.monitors.get_mut(key) {
                        if monitor.geometry != screen.bbox {
                            tracing::info!("Monitor {} moved to {:?}", screen.name, screen.bbox);
                            monitor.geometry = screen.bbox;
                        }
                    }
                    key
                }
                None => {
                    tracing::info!("New monitor {} at {:?}", screen.name, screen.bbox);
                    let monitor = Monitor::new(
                        screen.name.clone(),
                        screen.bbox,
                        self.default_layout,
                        self.default_split,
                        self.default_mains,
                    );
                    self.link_monitor(monitor)
                }
            };
            if screen.primary && primary.is_none() {
                primary = Some(key);
            }
        }

        let (live, stale): (Vec<MonitorKey>, Vec<MonitorKey>) =
            self.monitors_in_order().partition(|key| {
                self.monitors
                    .get(*key)
                    .is_some_and(|monitor| screens.iter().any(|s| s.name == monitor.name))
            });
        let Some(primary) = primary.or_else(|| live.first().copied()) else {
            return false;
        };
        self.primary = Some(primary);

        for monitor in stale {
            self.migrate_clients(monitor, primary);
            self.unlink_monitor(monitor);
            if let Some(gone) = self.monitors.remove(monitor) {
                tracing::info!("Monitor {} removed", gone.name);
            }
        }

        let focused = self.focus_manager.monitor();
        if !focused.is_some_and(|key| self.monitors.contains_key(key)) {
            self.focus_manager.set_monitor(Some(primary));
        }
        self.render_all(GeometryStatus::Changed);
        self.validate_focus();
        true
    }

    /// Appends a monitor at the end of the monitor list.
    pub(crate) fn link_monitor(&mut self, mut monitor: Monitor) -> MonitorKey {
        monitor.prev = self.monitor_tail;
        monitor.next = None;
        let key = self.monitors.insert(monitor);
        match self.monitor_tail.and_then(|tail| self.monitors.get_mut(tail)) {
            Some(tail) => tail.next = Some(key),
            None => self.monitor_head = Some(key),
        }
        self.monitor_tail = Some(key);
        key
    }

    fn unlink_monitor(&mut self, key: MonitorKey) {
        let Some(monitor) = self.monitors.get_mut(key) else {
            return;
        };
        let (prev, next) = (monitor.prev.take(), monitor.next.take());
        match prev.and_then(|p| self.monitors.get_mut(p)) {
            Some(p) => p.next = next,
            None => self.monitor_head = next,
        }
        match next.and_then(|n| self.monitors.get_mut(n)) {
            Some(n) => n.prev = prev,
            None => self.monitor_tail = prev,
        }
    }

    // Tail first, so the clients keep their order at the head of `to`.
    fn migrate_clients(&mut self, from: MonitorKey, to: MonitorKey) {
        let tail = self.monitors.get(from).and_then(Monitor::tail);
        let keys: Vec<ClientKey> =
            std::iter::successors(tail, |key| self.clients.get(*key)?.prev).collect();
        for key in keys {
            self.detach(from, key);
            self.attach(to, key);
        }
    }
}
