pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod monitor_handler;
mod screen_update_handler;
mod window_handler;

use super::command::Command;
use super::config::Config;
use super::models::{Manager, Mode, Monitor, Screen, WindowHandle, WindowType};
use super::DisplayEvent;
