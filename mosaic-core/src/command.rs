use crate::layouts::Layout;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Requests from key bindings or other programs. Tags are numbered from 1.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FocusNextClient,
    FocusPreviousClient,
    FocusNextMonitor,
    FocusPreviousMonitor,
    UpdateMainViews(i32),
    SetLayout(Layout),
    RotateClockwise,
    RotateCounterClockwise,
    SetMonitorTag(usize),
    ToggleMonitorTag(usize),
    KillClient,
    ToggleMode,
    MoveClient(Direction),
    ClientToNextMonitor,
    ClientToPreviousMonitor,
    /// Grow a floating client, or shift the split of a tiled one.
    /// `(0, 0)` restores the default split.
    ResizeClient(i32, i32),
    SetClientTag(usize),
    ToggleClientTag(usize),
    ToggleFullscreen,
    ToggleSticky,
    Dump,
}
