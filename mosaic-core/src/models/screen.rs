use super::Rect;
use serde::{Deserialize, Serialize};

/// One output as reported by the topology probe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub bbox: Rect,
    pub primary: bool,
}

impl Screen {
    #[must_use]
    pub fn new(name: impl Into<String>, bbox: Rect, primary: bool) -> Self {
        Self {
            name: name.into(),
            bbox,
            primary,
        }
    }
}
