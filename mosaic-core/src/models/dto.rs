use super::{Mode, Rect, Tagset, WindowHandle, TAG_COUNT};
use crate::layouts::Layout;
use crate::state::State;
use serde::{Deserialize, Serialize};

/// Tag usage of one monitor, for status bars and pagers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonitorHints {
    pub name: String,
    pub tags: [u32; TAG_COUNT],
    pub tagset: Tagset,
}

/// The focused client, if any, with its tags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusHints {
    pub handle: Option<WindowHandle>,
    pub tagset: Tagset,
}

/// Snapshot of every monitor and client, written by the dump command.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StateDump {
    pub focused: Option<WindowHandle>,
    pub monitors: Vec<MonitorDump>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MonitorDump {
    pub name: String,
    pub geometry: Rect,
    pub layout: Layout,
    pub split: f64,
    pub mains: usize,
    pub tagset: Tagset,
    pub primary: bool,
    pub focused: bool,
    pub clients: Vec<ClientDump>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientDump {
    pub handle: WindowHandle,
    pub mode: Mode,
    pub accepts_focus: bool,
    pub sticky: bool,
    pub urgent: bool,
    pub visible: bool,
    pub tagset: Option<Tagset>,
    pub tiling: Rect,
    pub floating: Rect,
}

impl From<&State> for StateDump {
    fn from(state: &State) -> Self {
        let monitors = state
            .monitors_in_order()
            .filter_map(|key| {
                let monitor = state.monitors.get(key)?;
                let clients = state
                    .clients_of(key)
                    .filter_map(|ck| {
                        let client = state.clients.get(ck)?;
                        Some(ClientDump {
                            handle: client.handle,
                            mode: client.mode,
                            accepts_focus: client.accepts_focus(),
                            sticky: client.is_sticky(),
                            urgent: client.is_urgent(),
                            visible: state.is_visible(ck),
                            tagset: client.tagset,
                            tiling: client.tiling_geometry,
                            floating: client.floating_geometry,
                        })
                    })
                    .collect();
                Some(MonitorDump {
                    name: monitor.name.clone(),
                    geometry: monitor.geometry,
                    layout: monitor.layout,
                    split: monitor.split,
                    mains: monitor.mains,
                    tagset: monitor.tagset,
                    primary: state.primary == Some(key),
                    focused: state.focus_manager.monitor() == Some(key),
                    clients,
                })
            })
            .collect();
        Self {
            focused: state.focused_client().map(|c| c.handle),
            monitors,
        }
    }
}

impl State {
    /// Tag usage of the focused monitor.
    #[must_use]
    pub fn monitor_hints(&self) -> Option<MonitorHints> {
        let monitor = self.monitors.get(self.focus_manager.monitor()?)?;
        Some(MonitorHints {
            name: monitor.name.clone(),
            tags: monitor.tags,
            tagset: monitor.tagset,
        })
    }

    #[must_use]
    pub fn focus_hints(&self) -> FocusHints {
        self.focused_client()
            .map(|client| FocusHints {
                handle: Some(client.handle),
                tagset: client.tagset.unwrap_or_default(),
            })
            .unwrap_or_default()
    }
}
