use crate::display_event::ConfigureRequest;
use crate::models::dto::{FocusHints, MonitorHints};
use crate::models::{Rect, Stacking, WindowHandle};
use serde::{Deserialize, Serialize};

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// Place a client on screen.
    Show {
        handle: WindowHandle,
        rect: Rect,
        border_width: i32,
        stacking: Stacking,
    },

    /// Park a client off-screen at the given position, keeping its size.
    Hide { handle: WindowHandle, x: i32, y: i32 },

    /// Tell a client its geometry without moving it.
    Notify {
        handle: WindowHandle,
        rect: Rect,
        border_width: i32,
    },

    /// Grant a configure request from a window we do not manage.
    ConfigureUnmanaged(ConfigureRequest),

    SetBorderColor(WindowHandle, u32),

    /// Raises a given window.
    MoveToTop(WindowHandle),

    /// Tell a window that it is to become focused.
    WindowTakeFocus(WindowHandle),

    /// Remove focus on any visible window by focusing the root window.
    Unfocus,

    /// Nicely ask a window if it would please close at its convenience.
    KillWindow(WindowHandle),

    /// Mirror the client's state so other programs can read it.
    SetWindowStates {
        handle: WindowHandle,
        fullscreen: bool,
        urgent: bool,
        sticky: bool,
    },

    /// Publish the tag usage of the focused monitor.
    SetMonitorHints(MonitorHints),

    /// Publish which client is focused and its tags.
    SetFocusedHints(FocusHints),

    /// Every managed window, in management order.
    SetClientList(Vec<WindowHandle>),
}
