//! Everything the window manager knows, owned in one place.

use crate::config::{Config, WindowRule};
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::layouts::Layout;
use crate::models::dto::StateDump;
use crate::models::{Client, ClientKey, FocusManager, Monitor, MonitorKey, WindowHandle};
use slotmap::SlotMap;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColors {
    pub normal: u32,
    pub focused: u32,
    pub urgent: u32,
}

#[derive(Debug)]
pub struct State {
    pub clients: SlotMap<ClientKey, Client>,
    pub monitors: SlotMap<MonitorKey, Monitor>,
    pub(crate) registry: HashMap<WindowHandle, ClientKey>,
    pub(crate) monitor_head: Option<MonitorKey>,
    pub(crate) monitor_tail: Option<MonitorKey>,
    /// Fallback monitor for orphaned and sticky clients.
    pub primary: Option<MonitorKey>,
    pub focus_manager: FocusManager,
    pub actions: VecDeque<DisplayAction>,
    pub border_width: i32,
    pub colors: BorderColors,
    pub default_split: f64,
    pub default_layout: Layout,
    pub default_mains: usize,
    pub window_rules: Vec<WindowRule>,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            clients: SlotMap::with_key(),
            monitors: SlotMap::with_key(),
            registry: HashMap::new(),
            monitor_head: None,
            monitor_tail: None,
            primary: None,
            focus_manager: FocusManager::default(),
            actions: VecDeque::new(),
            border_width: config.border_width(),
            colors: BorderColors {
                normal: config.normal_border_color(),
                focused: config.focused_border_color(),
                urgent: config.urgent_border_color(),
            },
            default_split: config.split(),
            default_layout: config.default_layout(),
            default_mains: config.default_mains(),
            window_rules: config.window_rules(),
        }
    }

    #[must_use]
    pub fn client_key(&self, handle: WindowHandle) -> Option<ClientKey> {
        self.registry.get(&handle).copied()
    }

    #[must_use]
    pub fn client(&self, handle: WindowHandle) -> Option<&Client> {
        self.clients.get(self.client_key(handle)?)
    }

    #[must_use]
    pub fn focused_client(&self) -> Option<&Client> {
        self.clients.get(self.focus_manager.client()?)
    }

    #[must_use]
    pub fn focused_monitor(&self) -> Option<&Monitor> {
        self.monitors.get(self.focus_manager.monitor()?)
    }

    #[must_use]
    pub fn monitor_by_name(&self, name: &str) -> Option<MonitorKey> {
        self.monitors_in_order()
            .find(|key| self.monitors.get(*key).is_some_and(|m| m.name == name))
    }

    /// Monitors from head to tail.
    pub fn monitors_in_order(&self) -> impl Iterator<Item = MonitorKey> + '_ {
        std::iter::successors(self.monitor_head, |key| self.monitors.get(*key)?.next)
    }

    /// Clients of a monitor from head to tail.
    pub fn clients_of(&self, monitor: MonitorKey) -> impl Iterator<Item = ClientKey> + '_ {
        let head = self.monitors.get(monitor).and_then(Monitor::head);
        std::iter::successors(head, |key| self.clients.get(*key)?.next)
    }

    /// A client is visible when it is attached and either claims no tag or
    /// shares one with its monitor.
    #[must_use]
    pub fn is_visible(&self, key: ClientKey) -> bool {
        self.clients.get(key).is_some_and(|client| {
            client
                .monitor
                .and_then(|m| self.monitors.get(m))
                .is_some_and(|monitor| client.is_visible_under(monitor.tagset))
        })
    }

    /// Visible tiled clients of a monitor.
    #[must_use]
    pub fn tilable_count(&self, monitor: MonitorKey) -> usize {
        self.clients_of(monitor)
            .filter(|key| {
                self.is_visible(*key) && self.clients.get(*key).is_some_and(Client::is_tiled)
            })
            .count()
    }

    /// Every managed window, monitor by monitor.
    #[must_use]
    pub fn managed_handles(&self) -> Vec<WindowHandle> {
        self.monitors_in_order()
            .flat_map(|monitor| self.clients_of(monitor))
            .filter_map(|key| self.clients.get(key).map(|c| c.handle))
            .collect()
    }

    pub(crate) fn insert_client(&mut self, client: Client) -> ClientKey {
        let handle = client.handle;
        let key = self.clients.insert(client);
        self.registry.insert(handle, key);
        key
    }

    /// Frees a client that is no longer attached anywhere.
    pub(crate) fn remove_client(&mut self, key: ClientKey) -> Option<Client> {
        let client = self.clients.remove(key)?;
        self.registry.remove(&client.handle);
        Some(client)
    }

    /// Runs `change` on a client while keeping the tag counters of its
    /// monitor in step with its tagset.
    pub(crate) fn with_counted_tags<R>(
        &mut self,
        key: ClientKey,
        change: impl FnOnce(&mut Client) -> R,
    ) -> Option<R> {
        let client = self.clients.get_mut(key)?;
        let mut monitor = client.monitor.and_then(|m| self.monitors.get_mut(m));
        if let (Some(monitor), Some(tagset)) = (monitor.as_mut(), client.tagset) {
            monitor.uncount_tags(tagset);
        }
        let result = change(client);
        if let Some(monitor) = monitor {
            let tagset = *client.tagset.get_or_insert(monitor.tagset);
            monitor.count_tags(tagset);
        }
        Some(result)
    }

    /// Writes a JSON snapshot of all monitors and clients.
    ///
    /// # Errors
    ///
    /// Will error if the file cannot be created or written.
    pub fn dump_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &StateDump::from(self))?;
        Ok(())
    }
}

#[cfg(test)]
impl State {
    pub(crate) fn new_test() -> Self {
        Self::new(&crate::config::TestConfig::default())
    }

    /// Appends a monitor with default settings.
    pub(crate) fn add_test_monitor(
        &mut self,
        name: &str,
        geometry: crate::models::Rect,
    ) -> MonitorKey {
        let monitor = Monitor::new(
            name,
            geometry,
            self.default_layout,
            self.default_split,
            self.default_mains,
        );
        let key = self.link_monitor(monitor);
        if self.primary.is_none() {
            self.primary = Some(key);
            self.focus_manager.set_monitor(Some(key));
        }
        key
    }

    /// Attaches tiled clients so that the list reads in the given order.
    pub(crate) fn add_test_clients(
        &mut self,
        monitor: MonitorKey,
        handles: &[u32],
    ) -> Vec<ClientKey> {
        let mut keys: Vec<ClientKey> = handles
            .iter()
            .rev()
            .map(|h| {
                let client =
                    Client::new(WindowHandle(*h), self.border_width, self.colors.normal);
                let key = self.insert_client(client);
                self.attach(monitor, key);
                key
            })
            .collect();
        keys.reverse();
        keys
    }

    pub(crate) fn order_of(&self, monitor: MonitorKey) -> Vec<u32> {
        self.clients_of(monitor)
            .map(|key| self.clients[key].handle.0)
            .collect()
    }
}
