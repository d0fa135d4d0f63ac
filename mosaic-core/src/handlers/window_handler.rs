use super::{Config, Manager, Mode, WindowHandle, WindowType};
use crate::display_action::DisplayAction;
use crate::display_event::{ConfigureRequest, Property, RequestedState, StateAction};
use crate::display_servers::DisplayServer;
use crate::models::{
    Client, ClientKey, GeometryStatus, MonitorKey, RawSizeHints, SizeHints, Strut, Tagset,
    WmHints,
};
use crate::state::State;
use crate::utils::Filter;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Builds a client for a newly mapped window from what the display server
    /// knows about it, then attaches, renders and focuses it.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn window_created_handler(&mut self, handle: WindowHandle) -> bool {
        if self.state.client_key(handle).is_some() {
            return false;
        }
        let server = &self.display_server;
        let mut client = Client::new(handle, self.state.border_width, self.state.colors.normal);
        match server.window_geometry(handle) {
            Some(geometry) => {
                client.floating_geometry = geometry;
                client.tiling_geometry = geometry;
            }
            None => tracing::debug!("No geometry for {:?}", handle),
        }
        client.transient = server.transient_for(handle);
        client.class = server.window_class(handle);
        let size_hints = server.size_hints(handle);
        let wm_hints = server.wm_hints(handle);
        let window_type = server.window_type(handle);
        let strut = server.strut(handle);

        if let Some(class) = client.class.clone() {
            for rule in self.state.window_rules.iter().filter(|r| r.matches(&class)) {
                rule.apply(&mut client);
            }
        }
        if client.transient.is_some() && client.is_tiled() {
            client.mode = Mode::Floating;
        }

        let key = self.state.insert_client(client);
        self.state.update_size_hints(key, size_hints);
        self.state.update_wm_hints(key, wm_hints);
        self.state.update_window_type(key, window_type);
        self.state.update_strut(key, strut);
        self.state.manage(key)
    }

    /// Returns `true` if changes need to be rendered.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        match self.state.client_key(handle) {
            Some(key) => self.state.forget(key),
            None => false,
        }
    }

    /// Queries one hint source again after the window changed it.
    pub fn property_changed_handler(&mut self, handle: WindowHandle, property: Property) -> bool {
        let Some(key) = self.state.client_key(handle) else {
            return false;
        };
        let server = &self.display_server;
        let changed = match property {
            Property::SizeHints => self.state.update_size_hints(key, server.size_hints(handle)),
            Property::WmHints => self.state.update_wm_hints(key, server.wm_hints(handle)),
            Property::WindowType => {
                let window_type = server.window_type(handle);
                self.state.update_window_type(key, window_type)
            }
            Property::Strut => self.state.update_strut(key, server.strut(handle)),
        };
        if changed {
            self.state.render_client_monitor(key);
            self.state.validate_focus();
        }
        changed
    }

    /// Floating clients get what they ask for, within their size hints.
    /// Everything else is only told where it is.
    pub fn configure_request_handler(&mut self, request: ConfigureRequest) -> bool {
        let Some(key) = self.state.client_key(request.handle) else {
            let act = DisplayAction::ConfigureUnmanaged(request);
            self.state.actions.push_back(act);
            return false;
        };
        self.state.configure_client(key, &request)
    }

    /// A window asked to enter or leave one of its states.
    pub fn state_request_handler(
        &mut self,
        handle: WindowHandle,
        action: StateAction,
        requested: RequestedState,
    ) -> bool {
        let Some(key) = self.state.client_key(handle) else {
            return false;
        };
        let Some(client) = self.state.clients.get(key) else {
            return false;
        };
        let changed = match requested {
            RequestedState::Fullscreen => {
                let fullscreen = action.resolve(client.is_fullscreen());
                self.state.set_client_fullscreen(key, fullscreen)
            }
            RequestedState::DemandsAttention => {
                let urgent = action.resolve(client.is_urgent());
                self.state.set_client_urgent(key, urgent)
            }
            RequestedState::Sticky => {
                let sticky = action.resolve(client.is_sticky());
                self.state.set_client_sticky(key, sticky)
            }
            RequestedState::Modal => {
                let floating = action.resolve(client.is_floating());
                self.state.set_client_floating(key, floating)
            }
        };
        self.state.publish_window_states(key);
        if changed {
            let status = match requested {
                RequestedState::Fullscreen => GeometryStatus::Changed,
                _ => GeometryStatus::Unchanged,
            };
            if let Some(monitor) = self.state.clients.get(key).and_then(Client::monitor) {
                self.state.render(monitor, status);
            }
            self.state.validate_focus();
        }
        changed
    }
}

impl State {
    /// Attaches a freshly built client where it belongs: next to the client
    /// it is transient for, on the primary monitor when sticky, otherwise on
    /// the focused monitor.
    pub(crate) fn manage(&mut self, key: ClientKey) -> bool {
        let Some(monitor) = self.monitor_for(key) else {
            tracing::warn!("No monitor to manage {:?} on", key);
            self.remove_client(key);
            return false;
        };
        self.attach(monitor, key);
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        client.apply_size_hints();
        let (handle, sticky) = (client.handle, client.is_sticky());
        tracing::info!("Managing {:?}", handle);

        self.render(monitor, GeometryStatus::Unchanged);
        if sticky && self.is_visible(key) {
            self.show_client(key);
        }
        self.refresh_border(key);
        self.focus_client(key);
        self.publish_window_states(key);
        true
    }

    fn monitor_for(&self, key: ClientKey) -> Option<MonitorKey> {
        let client = self.clients.get(key)?;
        let focused = self.focus_manager.monitor().or(self.primary);
        if let Some(transient) = client.transient {
            let target = self
                .client_key(transient)
                .and_then(|target| self.clients.get(target))
                .and_then(Client::monitor);
            return target.or(focused);
        }
        if client.is_sticky() {
            return self.primary.or(focused);
        }
        focused
    }

    /// Detaches and frees a client. Focus goes to a neighbour when it was
    /// held by the client.
    pub(crate) fn forget(&mut self, key: ClientKey) -> bool {
        let Some(client) = self.clients.get(key) else {
            return false;
        };
        let (handle, monitor, at_head) = (client.handle, client.monitor, client.prev.is_none());
        let had_focus = self.focus_manager.client() == Some(key);
        let heir = if had_focus {
            self.focus_manager.set_client(None);
            if at_head {
                self.next_client(key, Filter::FOCUSABLE)
            } else {
                self.previous_client(key, Filter::FOCUSABLE)
            }
        } else {
            None
        };

        if let Some(monitor) = monitor {
            self.detach(monitor, key);
            self.render(monitor, GeometryStatus::Unchanged);
        }
        self.remove_client(key);
        tracing::info!("Forgot {:?}", handle);

        if let Some(heir) = heir {
            self.focus_client(heir);
        }
        self.validate_focus();
        if had_focus && self.focus_manager.client().is_none() {
            self.actions.push_back(DisplayAction::Unfocus);
        }
        true
    }

    pub(crate) fn render_client_monitor(&mut self, key: ClientKey) {
        if let Some(monitor) = self.clients.get(key).and_then(Client::monitor) {
            self.render(monitor, GeometryStatus::Unchanged);
        }
    }

    /// Origin the sticky anchor of a client is measured from.
    fn sticky_origin(&self, key: ClientKey) -> (i32, i32) {
        self.clients
            .get(key)
            .and_then(Client::monitor)
            .or(self.primary)
            .and_then(|monitor| self.monitors.get(monitor))
            .map_or((0, 0), |monitor| (monitor.geometry.x, monitor.geometry.y))
    }

    pub fn set_client_sticky(&mut self, key: ClientKey, sticky: bool) -> bool {
        let origin = self.sticky_origin(key);
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        let changed = client.set_sticky(sticky, origin);
        if !changed {
            tracing::debug!("{:?} refused sticky={}", client.handle, sticky);
        }
        changed
    }

    pub fn set_client_fullscreen(&mut self, key: ClientKey, fullscreen: bool) -> bool {
        self.with_counted_tags(key, |client| client.set_fullscreen(fullscreen))
            .unwrap_or_default()
    }

    pub fn set_client_urgent(&mut self, key: ClientKey, urgent: bool) -> bool {
        let changed = self
            .clients
            .get_mut(key)
            .is_some_and(|client| client.set_urgent(urgent));
        if changed {
            self.refresh_border(key);
        }
        changed
    }

    /// Floating or tiled, for windows that turn modal and back.
    fn set_client_floating(&mut self, key: ClientKey, floating: bool) -> bool {
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        if client.is_fullscreen() || client.is_sticky() || floating == client.is_floating() {
            return false;
        }
        client.mode = if floating { Mode::Floating } else { Mode::Tiled };
        true
    }

    pub(crate) fn publish_window_states(&mut self, key: ClientKey) {
        if let Some(client) = self.clients.get(key) {
            let act = DisplayAction::SetWindowStates {
                handle: client.handle,
                fullscreen: client.is_fullscreen(),
                urgent: client.is_urgent(),
                sticky: client.is_sticky(),
            };
            self.actions.push_back(act);
        }
    }

    /// A client that can only have one size is made sticky. Missing hints
    /// leave the client as it is.
    pub fn update_size_hints(&mut self, key: ClientKey, raw: Option<RawSizeHints>) -> bool {
        let Some(raw) = raw else {
            tracing::debug!("No size hints for {:?}", key);
            return false;
        };
        let hints = SizeHints::from(raw);
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        client.size_hints = hints;
        if hints.is_fixed() {
            self.set_client_sticky(key, true);
        }
        if let Some(client) = self.clients.get_mut(key) {
            client.apply_size_hints();
        }
        true
    }

    pub fn update_wm_hints(&mut self, key: ClientKey, hints: Option<WmHints>) -> bool {
        let Some(hints) = hints else {
            tracing::debug!("No wm hints for {:?}", key);
            return false;
        };
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        client.set_accepts_focus(hints.accepts_focus());
        if client.set_urgent(hints.urgent) {
            self.refresh_border(key);
        }
        true
    }

    /// Docks float everywhere, never take focus and keep their place on the
    /// monitor. Dialog-like types float.
    pub fn update_window_type(&mut self, key: ClientKey, window_type: Option<WindowType>) -> bool {
        let Some(window_type) = window_type else {
            tracing::debug!("No window type for {:?}", key);
            return false;
        };
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        client.window_type = window_type;
        match window_type {
            WindowType::Dock => {
                client.set_accepts_focus(false);
                client.border_width = 0;
                client.saved_border_width = 0;
                self.set_client_sticky(key, true);
                self.with_counted_tags(key, |client| client.tagset = Some(Tagset::EVERYWHERE));
                true
            }
            t if t.floats() && client.is_tiled() => {
                client.mode = Mode::Floating;
                true
            }
            _ => false,
        }
    }

    pub fn update_strut(&mut self, key: ClientKey, strut: Option<Strut>) -> bool {
        let Some(strut) = strut else {
            return false;
        };
        self.clients.get_mut(key).is_some_and(|client| {
            let changed = client.strut != strut;
            client.strut = strut;
            changed
        })
    }

    /// Applies a configure request of a managed window.
    pub(crate) fn configure_client(&mut self, key: ClientKey, request: &ConfigureRequest) -> bool {
        let origin = self.sticky_origin(key);
        let displayed = self.displayed_geometry(key);
        let Some(client) = self.clients.get_mut(key) else {
            return false;
        };
        if !client.is_floating() {
            let rect = displayed.unwrap_or(client.floating_geometry);
            let act = DisplayAction::Notify {
                handle: request.handle,
                rect,
                border_width: client.border_width,
            };
            self.actions.push_back(act);
            return false;
        }

        let rect = &mut client.floating_geometry;
        rect.x = request.x.unwrap_or(rect.x);
        rect.y = request.y.unwrap_or(rect.y);
        rect.w = request.w.unwrap_or(rect.w);
        rect.h = request.h.unwrap_or(rect.h);
        if let Some(border_width) = request.border_width {
            client.border_width = border_width;
        }
        if client.is_sticky() {
            client.tiling_geometry = client.floating_geometry.translate(-origin.0, -origin.1);
        }
        client.apply_size_hints();

        if request.is_move_only() {
            let act = DisplayAction::Notify {
                handle: request.handle,
                rect: client.floating_geometry,
                border_width: client.border_width,
            };
            self.actions.push_back(act);
        }
        if self.is_visible(key) {
            self.show_client(key);
        }
        true
    }
}
