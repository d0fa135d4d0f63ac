use crate::models::{Client, Mode, Tagset, WindowClass};
use serde::{Deserialize, Serialize};

/// Placement applied to newly discovered clients whose class matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRule {
    pub class: Option<String>,
    pub instance: Option<String>,
    /// Tag the client starts on, numbered from 1.
    pub tag: Option<usize>,
    pub mode: Option<Mode>,
}

impl WindowRule {
    /// A rule without any matcher matches nothing.
    #[must_use]
    pub fn matches(&self, class: &WindowClass) -> bool {
        if self.class.is_none() && self.instance.is_none() {
            return false;
        }
        self.class.as_ref().map_or(true, |c| *c == class.class)
            && self.instance.as_ref().map_or(true, |i| *i == class.instance)
    }

    pub fn apply(&self, client: &mut Client) {
        if let Some(tagset) = self.tag.and_then(Tagset::single) {
            client.tagset = Some(tagset);
        }
        // Fullscreen is left to the client's own requests.
        if let Some(mode @ (Mode::Tiled | Mode::Floating)) = self.mode {
            client.mode = mode;
        }
    }
}
