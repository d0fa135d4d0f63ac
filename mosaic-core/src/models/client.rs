//! A managed window and the rules for moving it between modes.
use super::{ClientState, Mode, MonitorKey, Rect, SizeHints, Strut, Tagset, WindowType};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable index of a client inside the state arena.
    pub struct ClientKey;
}

/// Identity of a window as known to the display server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowClass {
    pub instance: String,
    pub class: String,
}

/// Stacking position a shown client asks for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stacking {
    Below,
    Above,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub handle: WindowHandle,
    pub class: Option<WindowClass>,
    pub window_type: WindowType,
    pub mode: Mode,
    pub saved_mode: Mode,
    pub state: ClientState,
    /// Slot assigned by the layout. For a sticky client this is the offset
    /// of the window from the origin of its monitor.
    pub tiling_geometry: Rect,
    pub floating_geometry: Rect,
    pub border_width: i32,
    pub saved_border_width: i32,
    pub border_color: u32,
    pub size_hints: SizeHints,
    pub strut: Strut,
    pub transient: Option<WindowHandle>,
    /// `None` until attached, then the monitor's tagset is inherited.
    pub tagset: Option<Tagset>,
    pub saved_tagset: Option<Tagset>,
    pub(crate) monitor: Option<MonitorKey>,
    pub(crate) prev: Option<ClientKey>,
    pub(crate) next: Option<ClientKey>,
}

impl Client {
    #[must_use]
    pub fn new(handle: WindowHandle, border_width: i32, border_color: u32) -> Self {
        Self {
            handle,
            class: None,
            window_type: WindowType::Normal,
            mode: Mode::Tiled,
            saved_mode: Mode::Tiled,
            state: ClientState::ACCEPTS_FOCUS,
            tiling_geometry: Rect::SENTINEL,
            floating_geometry: Rect::SENTINEL,
            border_width,
            saved_border_width: border_width,
            border_color,
            size_hints: SizeHints::default(),
            strut: Strut::default(),
            transient: None,
            tagset: None,
            saved_tagset: None,
            monitor: None,
            prev: None,
            next: None,
        }
    }

    #[must_use]
    pub const fn monitor(&self) -> Option<MonitorKey> {
        self.monitor
    }

    #[must_use]
    pub const fn next(&self) -> Option<ClientKey> {
        self.next
    }

    #[must_use]
    pub const fn prev(&self) -> Option<ClientKey> {
        self.prev
    }

    #[must_use]
    pub fn is_tiled(&self) -> bool {
        self.mode == Mode::Tiled
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.mode == Mode::Floating
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.mode == Mode::Fullscreen
    }

    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.state.contains(ClientState::STICKY)
    }

    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.state.contains(ClientState::URGENT)
    }

    #[must_use]
    pub const fn accepts_focus(&self) -> bool {
        self.state.contains(ClientState::ACCEPTS_FOCUS)
    }

    #[must_use]
    pub fn stacking(&self) -> Stacking {
        if self.is_tiled() {
            Stacking::Below
        } else {
            Stacking::Above
        }
    }

    /// Whether the client shows under the given active tags.
    #[must_use]
    pub fn is_visible_under(&self, active: Tagset) -> bool {
        self.tagset
            .is_some_and(|tagset| tagset.is_everywhere() || tagset.intersects(active))
    }

    /// Returns false when the client already was in the requested state.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        if fullscreen == self.is_fullscreen() {
            return false;
        }
        if fullscreen {
            self.saved_mode = self.mode;
            self.saved_tagset = self.tagset;
            self.saved_border_width = self.border_width;
            self.tagset = Some(Tagset::EVERYWHERE);
            self.border_width = 0;
            self.mode = Mode::Fullscreen;
        } else {
            self.mode = self.saved_mode;
            self.tagset = self.saved_tagset;
            self.border_width = self.saved_border_width;
        }
        true
    }

    /// Anchors the client at its current position relative to `origin`.
    /// Refused while fullscreen, the saved mode is taken by then.
    pub fn set_sticky(&mut self, sticky: bool, origin: (i32, i32)) -> bool {
        if sticky == self.is_sticky() || self.is_fullscreen() {
            return false;
        }
        let (ox, oy) = origin;
        if sticky {
            self.saved_mode = self.mode;
            self.mode = Mode::Floating;
            self.state.insert(ClientState::STICKY);
            self.tiling_geometry = self.floating_geometry.translate(-ox, -oy);
        } else {
            self.state.remove(ClientState::STICKY);
            self.floating_geometry = self.tiling_geometry.translate(ox, oy);
            self.mode = self.saved_mode;
        }
        true
    }

    /// Returns true when the flag changed.
    pub fn set_urgent(&mut self, urgent: bool) -> bool {
        if urgent == self.is_urgent() {
            return false;
        }
        self.state.set(ClientState::URGENT, urgent);
        true
    }

    pub fn set_accepts_focus(&mut self, accepts: bool) -> bool {
        if accepts == self.accepts_focus() {
            return false;
        }
        self.state.set(ClientState::ACCEPTS_FOCUS, accepts);
        true
    }

    /// Switches between tiled and floating. Fullscreen and sticky clients
    /// keep their mode.
    pub fn toggle_mode(&mut self) -> bool {
        self.mode = match self.mode {
            _ if self.is_sticky() => return false,
            Mode::Fullscreen => return false,
            Mode::Tiled => Mode::Floating,
            Mode::Floating => Mode::Tiled,
        };
        true
    }

    pub fn apply_size_hints(&mut self) {
        if self.is_fullscreen() {
            return;
        }
        self.floating_geometry = self.size_hints.apply(self.floating_geometry);
        if self.is_sticky() {
            self.tiling_geometry.w = self.floating_geometry.w;
            self.tiling_geometry.h = self.floating_geometry.h;
        }
    }

    /// Moves the floating geometry, or the anchor of a sticky client.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.floating_geometry = self.floating_geometry.translate(dx, dy);
        if self.is_sticky() {
            self.tiling_geometry = self.tiling_geometry.translate(dx, dy);
        }
    }

    /// The rectangle the client occupies when shown on a monitor covering
    /// `monitor`.
    #[must_use]
    pub fn displayed_geometry(&self, monitor: &Rect) -> Rect {
        match self.mode {
            Mode::Fullscreen => *monitor,
            Mode::Tiled => self.tiling_geometry,
            Mode::Floating if self.is_sticky() => {
                self.tiling_geometry.translate(monitor.x, monitor.y)
            }
            Mode::Floating => self.floating_geometry,
        }
    }
}
