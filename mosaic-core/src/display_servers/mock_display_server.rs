use super::Config;
use super::DisplayAction;
use super::DisplayServer;
use crate::models::{
    RawSizeHints, Rect, Screen, Strut, WindowClass, WindowHandle, WindowType, WmHints,
};
use std::collections::HashMap;

/// What the mock answers for one window.
#[derive(Clone, Debug, Default)]
pub struct MockWindow {
    pub geometry: Option<Rect>,
    pub transient: Option<WindowHandle>,
    pub class: Option<WindowClass>,
    pub size_hints: Option<RawSizeHints>,
    pub wm_hints: Option<WmHints>,
    pub window_type: Option<WindowType>,
    pub strut: Option<Strut>,
}

#[derive(Clone, Debug)]
pub struct MockDisplayServer {
    pub screens: Vec<Screen>,
    pub root: Rect,
    pub windows: HashMap<WindowHandle, MockWindow>,
    /// Every action the manager flushed, in order.
    pub executed: Vec<DisplayAction>,
}

impl MockDisplayServer {
    fn window(&self, handle: WindowHandle) -> Option<&MockWindow> {
        self.windows.get(&handle)
    }
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self {
            screens: vec![],
            root: Rect::new(0, 0, 1920, 1080),
            windows: HashMap::new(),
            executed: vec![],
        }
    }

    fn window_geometry(&self, handle: WindowHandle) -> Option<Rect> {
        self.window(handle)?.geometry
    }

    fn transient_for(&self, handle: WindowHandle) -> Option<WindowHandle> {
        self.window(handle)?.transient
    }

    fn window_class(&self, handle: WindowHandle) -> Option<WindowClass> {
        self.window(handle)?.class.clone()
    }

    fn size_hints(&self, handle: WindowHandle) -> Option<RawSizeHints> {
        self.window(handle)?.size_hints
    }

    fn wm_hints(&self, handle: WindowHandle) -> Option<WmHints> {
        self.window(handle)?.wm_hints
    }

    fn window_type(&self, handle: WindowHandle) -> Option<WindowType> {
        self.window(handle)?.window_type
    }

    fn strut(&self, handle: WindowHandle) -> Option<Strut> {
        self.window(handle)?.strut
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn root_geometry(&self) -> Rect {
        self.root
    }

    fn execute_action(&mut self, act: DisplayAction) {
        self.executed.push(act);
    }
}
