use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{
    RawSizeHints, Rect, Screen, Strut, WindowClass, WindowHandle, WindowType, WmHints,
};
#[cfg(test)]
mod mock_display_server;

#[cfg(test)]
pub use self::mock_display_server::{MockDisplayServer, MockWindow};

/// The adapter between the core and a windowing system. Every query may
/// come back empty, the core then falls back to defaults.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    /// Geometry of a window when it is first discovered.
    fn window_geometry(&self, handle: WindowHandle) -> Option<Rect>;

    /// The window another one is a dialog or popup of.
    fn transient_for(&self, handle: WindowHandle) -> Option<WindowHandle>;

    fn window_class(&self, _handle: WindowHandle) -> Option<WindowClass> {
        None
    }

    fn size_hints(&self, handle: WindowHandle) -> Option<RawSizeHints>;

    fn wm_hints(&self, handle: WindowHandle) -> Option<WmHints>;

    fn window_type(&self, handle: WindowHandle) -> Option<WindowType>;

    fn strut(&self, handle: WindowHandle) -> Option<Strut>;

    /// Outputs currently connected.
    fn screens(&self) -> Vec<Screen>;

    /// Area of the whole desktop, used when no output is reported.
    fn root_geometry(&self) -> Rect;

    fn execute_action(&mut self, act: DisplayAction);

    fn flush(&self) {}
}
