//! Objects (such as clients and monitors) the window manager reasons about.
mod client;
mod client_state;
mod focus_manager;
mod manager;
mod mode;
mod monitor;
mod rect;
mod screen;
mod size_hints;
mod tagset;
mod window_type;
mod wm_hints;

pub mod dto;

pub use client::{Client, ClientKey, Stacking, WindowClass, WindowHandle};
pub use client_state::ClientState;
pub use focus_manager::FocusManager;
pub use manager::Manager;
pub use mode::Mode;
pub use monitor::{
    GeometryStatus, Monitor, MonitorKey, MAIN_SPLIT_INC, MAIN_SPLIT_MAX, MAIN_SPLIT_MIN,
};
pub use rect::{Rect, Strut};
pub use screen::Screen;
pub use size_hints::{RawSizeHints, SizeHints};
pub use tagset::{Tagset, TAG_COUNT};
pub use window_type::WindowType;
pub use wm_hints::WmHints;
