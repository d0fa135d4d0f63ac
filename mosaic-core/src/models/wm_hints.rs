use serde::{Deserialize, Serialize};

/// Input and urgency hints a window sets about itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WmHints {
    /// `Some(false)` when the window never wants keyboard input.
    pub input: Option<bool>,
    pub urgent: bool,
}

impl WmHints {
    #[must_use]
    pub fn accepts_focus(&self) -> bool {
        self.input != Some(false)
    }
}
