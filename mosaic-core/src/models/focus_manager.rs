use super::{ClientKey, MonitorKey};

/// Where input focus currently is.
#[derive(Debug, Clone, Default)]
pub struct FocusManager {
    client: Option<ClientKey>,
    monitor: Option<MonitorKey>,
}

impl FocusManager {
    #[must_use]
    pub const fn client(&self) -> Option<ClientKey> {
        self.client
    }

    #[must_use]
    pub const fn monitor(&self) -> Option<MonitorKey> {
        self.monitor
    }

    pub(crate) fn set_client(&mut self, client: Option<ClientKey>) {
        self.client = client;
    }

    pub(crate) fn set_monitor(&mut self, monitor: Option<MonitorKey>) {
        self.monitor = monitor;
    }

    /// Keeps focus on the same content after two clients traded places.
    pub(crate) fn follow_swap(&mut self, a: ClientKey, b: ClientKey) {
        if self.client == Some(a) {
            self.client = Some(b);
        } else if self.client == Some(b) {
            self.client = Some(a);
        }
    }
}
