//! Navigation and reordering inside the client list of a monitor.
//!
//! Traversals only ever consider visible clients and never cross to another
//! monitor.
use crate::models::{Client, ClientKey, ClientState, Mode, MonitorKey};
use crate::state::State;
use std::iter::successors;

/// Which clients a traversal may stop at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// `None` admits any mode.
    pub mode: Option<Mode>,
    /// Flags a client must carry, all of them.
    pub state: ClientState,
}

impl Filter {
    pub const ANY: Self = Self {
        mode: None,
        state: ClientState::empty(),
    };
    pub const FOCUSABLE: Self = Self {
        mode: None,
        state: ClientState::ACCEPTS_FOCUS,
    };
    pub const TILED: Self = Self {
        mode: Some(Mode::Tiled),
        state: ClientState::empty(),
    };

    #[must_use]
    pub fn admits(&self, client: &Client) -> bool {
        self.mode.map_or(true, |mode| mode == client.mode) && client.state.contains(self.state)
    }
}

impl State {
    fn matches(&self, key: ClientKey, filter: Filter) -> bool {
        self.clients.get(key).is_some_and(|c| filter.admits(c)) && self.is_visible(key)
    }

    /// First client after `from` accepted by `filter`, wrapping past the
    /// tail. `from` itself is never returned.
    #[must_use]
    pub fn next_client(&self, from: ClientKey, filter: Filter) -> Option<ClientKey> {
        let client = self.clients.get(from)?;
        let head = self.monitors.get(client.monitor?)?.head;
        let after = successors(client.next, |key| self.clients.get(*key)?.next);
        let wrapped =
            successors(head, |key| self.clients.get(*key)?.next).take_while(|key| *key != from);
        after.chain(wrapped).find(|key| self.matches(*key, filter))
    }

    /// First client before `from` accepted by `filter`, wrapping past the
    /// head. `from` itself is never returned.
    #[must_use]
    pub fn previous_client(&self, from: ClientKey, filter: Filter) -> Option<ClientKey> {
        let client = self.clients.get(from)?;
        let tail = self.monitors.get(client.monitor?)?.tail;
        let before = successors(client.prev, |key| self.clients.get(*key)?.prev);
        let wrapped =
            successors(tail, |key| self.clients.get(*key)?.prev).take_while(|key| *key != from);
        before.chain(wrapped).find(|key| self.matches(*key, filter))
    }

    /// First client of a monitor accepted by `filter`, starting at the head.
    #[must_use]
    pub fn first_client(&self, monitor: MonitorKey, filter: Filter) -> Option<ClientKey> {
        self.clients_of(monitor).find(|key| self.matches(*key, filter))
    }

    /// Last client of a monitor accepted by `filter`, starting at the tail.
    #[must_use]
    pub fn last_client(&self, monitor: MonitorKey, filter: Filter) -> Option<ClientKey> {
        let tail = self.monitors.get(monitor)?.tail;
        successors(tail, |key| self.clients.get(*key)?.prev)
            .find(|key| self.matches(*key, filter))
    }

    /// Exchanges everything but the list links of two clients on the same
    /// monitor. Focus stays with the content that had it.
    pub fn swap_clients(&mut self, a: ClientKey, b: ClientKey) -> bool {
        if a == b {
            return false;
        }
        let Some([first, second]) = self.clients.get_disjoint_mut([a, b]) else {
            return false;
        };
        if first.monitor != second.monitor {
            return false;
        }
        std::mem::swap(first, second);
        std::mem::swap(&mut first.prev, &mut second.prev);
        std::mem::swap(&mut first.next, &mut second.next);
        self.registry.insert(first.handle, a);
        self.registry.insert(second.handle, b);
        self.focus_manager.follow_swap(a, b);
        true
    }

    /// Moves the last tiled client to the head of the list.
    pub fn rotate_to_head(&mut self, monitor: MonitorKey) -> bool {
        let Some(last) = self.last_client(monitor, Filter::TILED) else {
            return false;
        };
        if self.monitors.get(monitor).and_then(|m| m.head) == Some(last) {
            return false;
        }
        self.unlink(last);
        self.link_head(monitor, last);
        true
    }

    /// Moves the first tiled client to the tail of the list.
    pub fn rotate_to_tail(&mut self, monitor: MonitorKey) -> bool {
        let Some(first) = self.first_client(monitor, Filter::TILED) else {
            return false;
        };
        if self.monitors.get(monitor).and_then(|m| m.tail) == Some(first) {
            return false;
        }
        self.unlink(first);
        self.link_tail(monitor, first);
        true
    }

    pub(crate) fn link_head(&mut self, monitor: MonitorKey, key: ClientKey) {
        let Some(mon) = self.monitors.get_mut(monitor) else {
            return;
        };
        let old_head = mon.head.replace(key);
        if mon.tail.is_none() {
            mon.tail = Some(key);
        }
        if let Some(old) = old_head.and_then(|k| self.clients.get_mut(k)) {
            old.prev = Some(key);
        }
        if let Some(client) = self.clients.get_mut(key) {
            client.prev = None;
            client.next = old_head;
        }
    }

    pub(crate) fn link_tail(&mut self, monitor: MonitorKey, key: ClientKey) {
        let Some(mon) = self.monitors.get_mut(monitor) else {
            return;
        };
        let old_tail = mon.tail.replace(key);
        if mon.head.is_none() {
            mon.head = Some(key);
        }
        if let Some(old) = old_tail.and_then(|k| self.clients.get_mut(k)) {
            old.next = Some(key);
        }
        if let Some(client) = self.clients.get_mut(key) {
            client.prev = old_tail;
            client.next = None;
        }
    }

    /// Takes a client out of its monitor's list, leaving the back-reference.
    pub(crate) fn unlink(&mut self, key: ClientKey) {
        let Some(client) = self.clients.get_mut(key) else {
            return;
        };
        let (prev, next, monitor) = (client.prev.take(), client.next.take(), client.monitor);
        if let Some(p) = prev.and_then(|k| self.clients.get_mut(k)) {
            p.next = next;
        }
        if let Some(n) = next.and_then(|k| self.clients.get_mut(k)) {
            n.prev = prev;
        }
        if let Some(mon) = monitor.and_then(|m| self.monitors.get_mut(m)) {
            if mon.head == Some(key) {
                mon.head = next;
            }
            if mon.tail == Some(key) {
                mon.tail = prev;
            }
        }
    }
}
