use crate::display_action::DisplayAction;
use crate::layouts::Partition;
use crate::models::{Client, ClientKey, GeometryStatus, MonitorKey, Rect, Strut};
use crate::state::State;

impl State {
    /// Puts an unattached client at the head of a monitor's list. A client
    /// without tags takes those the monitor shows.
    pub fn attach(&mut self, monitor: MonitorKey, key: ClientKey) -> bool {
        let Some(mon) = self.monitors.get_mut(monitor) else {
            return false;
        };
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        if client.monitor.is_some() {
            tracing::debug!("{:?} is already attached", client.handle);
            return false;
        }
        client.monitor = Some(monitor);
        let tagset = *client.tagset.get_or_insert(mon.tagset);
        mon.count_tags(tagset);
        if !client.is_sticky() {
            client.floating_geometry = client.floating_geometry.center_over(&mon.geometry);
        }
        self.link_head(monitor, key);
        true
    }

    /// Takes a client off `monitor`. Does nothing when the client lives
    /// elsewhere. Callers re-render and check focus afterwards.
    pub fn detach(&mut self, monitor: MonitorKey, key: ClientKey) -> bool {
        if self.clients.get(key).and_then(|c| c.monitor) != Some(monitor) {
            return false;
        }
        self.unlink(key);
        let tagset = self.clients.get_mut(key).and_then(|client| {
            client.monitor = None;
            client.tagset
        });
        if let (Some(mon), Some(tagset)) = (self.monitors.get_mut(monitor), tagset) {
            mon.uncount_tags(tagset);
        }
        true
    }

    /// Lays out the tiled clients of a monitor, hides what must not be seen
    /// and shows the rest.
    pub fn render(&mut self, monitor: MonitorKey, status: GeometryStatus) {
        let Some(mon) = self.monitors.get(monitor) else {
            return;
        };
        let (geometry, layout, split, mains) = (mon.geometry, mon.layout, mon.split, mon.mains);
        let keys: Vec<ClientKey> = self.clients_of(monitor).collect();

        let mut fullscreen = 0;
        let mut strut = Strut::default();
        let mut tilable = vec![];
        for key in &keys {
            let (Some(client), true) = (self.clients.get(*key), self.is_visible(*key)) else {
                continue;
            };
            strut = strut.merge(client.strut);
            if client.is_fullscreen() {
                fullscreen += 1;
            }
            if client.is_tiled() {
                tilable.push(*key);
            }
        }

        // Sticky clients keep their place unless the monitor moved. A
        // fullscreen client always covers the monitor and hides the rest.
        let settles = |client: &Client| {
            client.is_fullscreen() || !client.is_sticky() || status == GeometryStatus::Changed
        };

        for key in &keys {
            let Some(client) = self.clients.get(*key) else {
                continue;
            };
            if fullscreen > 0 || settles(client) {
                let hide = DisplayAction::Hide {
                    handle: client.handle,
                    x: -geometry.w,
                    y: -geometry.h,
                };
                self.actions.push_back(hide);
            }
        }

        if !tilable.is_empty() && fullscreen == 0 {
            let area = geometry.shrink(&strut);
            let rects = layout.apply(area, split, Partition::new(mains, tilable.len()));
            for (key, rect) in tilable.iter().zip(rects) {
                if let Some(client) = self.clients.get_mut(*key) {
                    client.tiling_geometry = rect;
                }
            }
        }

        for key in &keys {
            let Some(client) = self.clients.get(*key) else {
                continue;
            };
            if fullscreen > 0 && !client.is_fullscreen() {
                continue;
            }
            if client.transient.is_none() && settles(client) && self.is_visible(*key) {
                self.show_client(*key);
            }
        }

        // Transients last, their parents have settled by now.
        for key in &keys {
            let Some(client) = self.clients.get(*key) else {
                continue;
            };
            if fullscreen > 0 && !client.is_fullscreen() {
                continue;
            }
            if client.transient.is_some() && settles(client) && self.is_visible(*key) {
                self.center_on_transient_target(*key);
                self.show_client(*key);
            }
        }
    }

    /// Renders every monitor, in list order.
    pub fn render_all(&mut self, status: GeometryStatus) {
        let monitors: Vec<MonitorKey> = self.monitors_in_order().collect();
        for monitor in monitors {
            self.render(monitor, status);
        }
    }

    /// Emits the placement of one client. Sticky clients are placed at their
    /// anchor relative to the monitor origin.
    pub(crate) fn show_client(&mut self, key: ClientKey) {
        let Some(client) = self.clients.get_mut(key) else {
            return;
        };
        let Some(monitor) = client.monitor.and_then(|m| self.monitors.get(m)) else {
            return;
        };
        let rect = client.displayed_geometry(&monitor.geometry);
        if client.is_sticky() && !client.is_fullscreen() {
            client.floating_geometry = rect;
        }
        let show = DisplayAction::Show {
            handle: client.handle,
            rect,
            border_width: client.border_width,
            stacking: client.stacking(),
        };
        self.actions.push_back(show);
    }

    /// Where a client currently is on screen, if it is attached.
    pub(crate) fn displayed_geometry(&self, key: ClientKey) -> Option<Rect> {
        let client = self.clients.get(key)?;
        let monitor = self.monitors.get(client.monitor?)?;
        Some(client.displayed_geometry(&monitor.geometry))
    }

    // The target may be gone already, the client then stays where it is.
    fn center_on_transient_target(&mut self, key: ClientKey) {
        let target = self
            .clients
            .get(key)
            .and_then(|client| client.transient)
            .and_then(|handle| self.client_key(handle))
            .and_then(|target| self.displayed_geometry(target));
        if let (Some(target), Some(client)) = (target, self.clients.get_mut(key)) {
            client.floating_geometry = client.floating_geometry.center_over(&target);
            if client.is_sticky() {
                // Keep the anchor in step or the next show would undo this.
                if let Some(monitor) = client.monitor.and_then(|m| self.monitors.get(m)) {
                    let (ox, oy) = (monitor.geometry.x, monitor.geometry.y);
                    client.tiling_geometry = client.floating_geometry.translate(-ox, -oy);
                }
            }
        }
    }
}
