use crate::models::WindowHandle;
use crate::Command;
use serde::{Deserialize, Serialize};

/// Things the display server reports to the window manager.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// A window asks to be mapped.
    ClientDiscovered(WindowHandle),
    ClientGone(WindowHandle),
    PropertyChanged(WindowHandle, Property),
    ConfigureRequest(ConfigureRequest),
    StateRequest(WindowHandle, StateAction, RequestedState),
    /// Focus moved to, or the pointer entered, a window.
    WindowTakeFocus(WindowHandle),
    /// A click on the desktop background.
    RootClick(i32, i32),
    /// Outputs were added, removed or moved.
    TopologyChanged,
    SendCommand(Command),
}

/// Hint sources that can change after a client was discovered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    SizeHints,
    WmHints,
    WindowType,
    Strut,
}

/// A window asking for a new geometry. Missing fields stay as they are.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigureRequest {
    pub handle: WindowHandle,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub border_width: Option<i32>,
}

impl ConfigureRequest {
    #[must_use]
    pub const fn is_move_only(&self) -> bool {
        (self.x.is_some() || self.y.is_some()) && self.w.is_none() && self.h.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

impl StateAction {
    /// The state asked for, given the current one.
    #[must_use]
    pub const fn resolve(self, current: bool) -> bool {
        match self {
            Self::Remove => false,
            Self::Add => true,
            Self::Toggle => !current,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedState {
    Fullscreen,
    DemandsAttention,
    Sticky,
    /// Modal windows float.
    Modal,
}
