use serde::{Deserialize, Serialize};

/// How the geometry of a client is decided.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Placed by the layout of its monitor.
    #[default]
    Tiled,
    /// Placed by the user or by its own requests.
    Floating,
    /// Covers the whole monitor.
    Fullscreen,
}
