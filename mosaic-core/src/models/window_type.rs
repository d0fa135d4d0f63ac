use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}

impl WindowType {
    /// Types that never take part in tiling.
    #[must_use]
    pub const fn floats(self) -> bool {
        matches!(
            self,
            Self::Dock | Self::Toolbar | Self::Utility | Self::Splash | Self::Dialog
        )
    }
}
