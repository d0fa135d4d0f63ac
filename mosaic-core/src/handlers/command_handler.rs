#![allow(clippy::wildcard_imports)]

use super::*;
use crate::command::Direction;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::layouts::Layout;
use crate::models::{ClientKey, GeometryStatus, MonitorKey, Tagset, MAIN_SPLIT_INC};
use crate::state::State;
use crate::utils::Filter;

/// Distance a floating client travels per move command.
const MOVE_INC: i32 = 35;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<C: Config, SERVER: DisplayServer>(
    manager: &mut Manager<C, SERVER>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::FocusNextClient => Some(state.focus_next_client()),
        Command::FocusPreviousClient => Some(state.focus_previous_client()),
        Command::FocusNextMonitor => Some(state.focus_next_monitor()),
        Command::FocusPreviousMonitor => Some(state.focus_previous_monitor()),

        Command::UpdateMainViews(by) => update_main_views(state, *by),
        Command::SetLayout(layout) => set_layout(state, *layout),
        Command::RotateClockwise => rotate(state, State::rotate_to_head),
        Command::RotateCounterClockwise => rotate(state, State::rotate_to_tail),

        Command::SetMonitorTag(tag) => {
            let tagset = Tagset::single(*tag)?;
            change_monitor_tagset(state, |_| tagset)
        }
        Command::ToggleMonitorTag(tag) if Tagset::single(*tag).is_some() => {
            change_monitor_tagset(state, |tagset| tagset.toggled(*tag))
        }
        Command::ToggleMonitorTag(_) => None,

        Command::KillClient => kill_client(state),
        Command::ToggleMode => toggle_mode(state),
        Command::MoveClient(direction) => move_client(state, *direction),
        Command::ClientToNextMonitor => {
            client_to_monitor(state, |state, m| state.monitors.get(m)?.next())
        }
        Command::ClientToPreviousMonitor => {
            client_to_monitor(state, |state, m| state.monitors.get(m)?.prev())
        }
        Command::ResizeClient(width, height) => resize_client(state, *width, *height),

        Command::SetClientTag(tag) => set_client_tag(state, *tag),
        Command::ToggleClientTag(tag) => toggle_client_tag(state, *tag),
        Command::ToggleFullscreen => toggle_fullscreen(state),
        Command::ToggleSticky => toggle_sticky(state),

        Command::Dump => {
            let path = manager.config.state_path();
            if let Err(err) = manager.state.dump_to(&path) {
                tracing::error!("Failed to dump state to {}: {}", path.display(), err);
                return Some(false);
            }
            tracing::info!("State dumped to {}", path.display());
            None
        }
    }
}

fn focused_client_on_monitor(state: &State) -> Option<(ClientKey, MonitorKey)> {
    let key = state.focus_manager.client()?;
    let monitor = state.clients.get(key)?.monitor()?;
    Some((key, monitor))
}

fn update_main_views(state: &mut State, by: i32) -> Option<bool> {
    let key = state.focus_manager.monitor()?;
    let tilable = state.tilable_count(key);
    let monitor = state.monitors.get_mut(key)?;
    let before = monitor.mains;
    monitor.update_mains(by, tilable);
    if monitor.mains == before {
        return Some(false);
    }
    state.render(key, GeometryStatus::Unchanged);
    Some(true)
}

fn set_layout(state: &mut State, layout: Layout) -> Option<bool> {
    let key = state.focus_manager.monitor()?;
    let monitor = state.monitors.get_mut(key)?;
    if monitor.layout == layout {
        return Some(false);
    }
    monitor.layout = layout;
    state.render(key, GeometryStatus::Unchanged);
    Some(true)
}

fn rotate(state: &mut State, rotation: fn(&mut State, MonitorKey) -> bool) -> Option<bool> {
    let key = state.focus_manager.monitor()?;
    if !rotation(state, key) {
        return Some(false);
    }
    state.render(key, GeometryStatus::Unchanged);
    Some(true)
}

fn change_monitor_tagset(
    state: &mut State,
    change: impl FnOnce(Tagset) -> Tagset,
) -> Option<bool> {
    let key = state.focus_manager.monitor()?;
    let monitor = state.monitors.get_mut(key)?;
    monitor.tagset = change(monitor.tagset);
    state.render(key, GeometryStatus::Unchanged);
    state.validate_focus();
    Some(true)
}

fn kill_client(state: &mut State) -> Option<bool> {
    let handle = state.focused_client()?.handle;
    state.actions.push_back(DisplayAction::KillWindow(handle));
    None
}

fn toggle_mode(state: &mut State) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    if !state.clients.get_mut(key)?.toggle_mode() {
        return Some(false);
    }
    state.render(monitor, GeometryStatus::Unchanged);
    Some(true)
}

/// Floating clients move by a fixed step. Tiled clients trade places with
/// their tiled neighbour.
fn move_client(state: &mut State, direction: Direction) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    let client = state.clients.get_mut(key)?;
    if client.is_fullscreen() {
        return Some(false);
    }
    if client.is_floating() {
        let (dx, dy) = match direction {
            Direction::Up => (0, -MOVE_INC),
            Direction::Down => (0, MOVE_INC),
            Direction::Left => (-MOVE_INC, 0),
            Direction::Right => (MOVE_INC, 0),
        };
        client.move_by(dx, dy);
        state.show_client(key);
        return Some(true);
    }
    let other = match direction {
        Direction::Up | Direction::Left => state.previous_client(key, Filter::TILED),
        Direction::Down | Direction::Right => state.next_client(key, Filter::TILED),
    }?;
    if !state.swap_clients(key, other) {
        return Some(false);
    }
    state.render(monitor, GeometryStatus::Unchanged);
    Some(true)
}

fn client_to_monitor(
    state: &mut State,
    neighbour: impl FnOnce(&State, MonitorKey) -> Option<MonitorKey>,
) -> Option<bool> {
    let (key, from) = focused_client_on_monitor(state)?;
    let to = neighbour(state, from)?;
    state.detach(from, key);
    state.attach(to, key);
    state.focus_manager.set_monitor(Some(to));
    state.render(from, GeometryStatus::Unchanged);
    state.render(to, GeometryStatus::Unchanged);
    state.validate_focus();
    Some(true)
}

/// Floating clients grow by the given amount. For everything else the split
/// of the monitor moves one step per sign, and `(0, 0)` restores the default.
fn resize_client(state: &mut State, width: i32, height: i32) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    let client = state.clients.get_mut(key)?;
    if client.is_floating() {
        client.floating_geometry.w += width;
        client.floating_geometry.h += height;
        client.apply_size_hints();
        state.show_client(key);
        return Some(true);
    }

    let default_split = state.default_split;
    let mon = state.monitors.get_mut(monitor)?;
    let before = mon.split;
    if width < 0 || height < 0 {
        mon.change_split(-MAIN_SPLIT_INC);
    }
    if width > 0 || height > 0 {
        mon.change_split(MAIN_SPLIT_INC);
    }
    if width == 0 && height == 0 {
        mon.split = default_split;
    }
    if (mon.split - before).abs() < f64::EPSILON {
        return Some(false);
    }
    state.render(monitor, GeometryStatus::Unchanged);
    Some(true)
}

fn set_client_tag(state: &mut State, tag: usize) -> Option<bool> {
    let tagset = Tagset::single(tag)?;
    let (key, monitor) = focused_client_on_monitor(state)?;
    if state.clients.get(key)?.is_fullscreen() {
        return Some(false);
    }
    state.with_counted_tags(key, |client| client.tagset = Some(tagset))?;
    state.render(monitor, GeometryStatus::Unchanged);
    state.validate_focus();
    Some(true)
}

/// Adds or removes one tag of the focused client. A tag nobody claims any
/// more is no longer shown by the monitor.
fn toggle_client_tag(state: &mut State, tag: usize) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    let client = state.clients.get(key)?;
    let current = client.tagset.unwrap_or_default();
    let toggled = current.toggled(tag);
    if toggled == current {
        return None;
    }
    // Dropping the last tag would make the client visible everywhere.
    if client.is_fullscreen() || (current.contains(tag) && toggled.is_everywhere()) {
        return Some(false);
    }
    state.with_counted_tags(key, |client| client.tagset = Some(toggled))?;
    let mon = state.monitors.get_mut(monitor)?;
    if mon.tag_count(tag) == 0 {
        mon.tagset = mon.tagset.without(tag);
    }
    state.render(monitor, GeometryStatus::Unchanged);
    state.validate_focus();
    Some(true)
}

fn toggle_fullscreen(state: &mut State) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    let fullscreen = !state.clients.get(key)?.is_fullscreen();
    if !state.set_client_fullscreen(key, fullscreen) {
        return Some(false);
    }
    state.publish_window_states(key);
    // Sticky clients hide behind a fullscreen one and come back at their anchor.
    state.render(monitor, GeometryStatus::Changed);
    state.validate_focus();
    Some(true)
}

fn toggle_sticky(state: &mut State) -> Option<bool> {
    let (key, monitor) = focused_client_on_monitor(state)?;
    let sticky = !state.clients.get(key)?.is_sticky();
    if !state.set_client_sticky(key, sticky) {
        return Some(false);
    }
    state.publish_window_states(key);
    state.render(monitor, GeometryStatus::Unchanged);
    if sticky && state.is_visible(key) {
        state.show_client(key);
    }
    Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Mode, Rect, WindowHandle};
    use pretty_assertions::assert_eq;

    type TestManager = Manager<TestConfig, MockDisplayServer>;

    /// One 1200x800 monitor holding tiled clients in the given order, the
    /// first one focused.
    fn setup(handles: &[u32]) -> (TestManager, MonitorKey, Vec<ClientKey>) {
        let mut manager = Manager::new_test_with_screen();
        let monitor = manager.state.primary.unwrap();
        let keys = manager.state.add_test_clients(monitor, handles);
        if let Some(first) = keys.first() {
            manager.state.focus_client(*first);
        }
        manager.state.actions.clear();
        (manager, monitor, keys)
    }

    fn two_monitors() -> TestManager {
        let mut manager = Manager::new_test();
        manager.display_server.screens = vec![
            Screen::new("A", Rect::new(0, 0, 1000, 800), true),
            Screen::new("B", Rect::new(1000, 0, 1000, 800), false),
        ];
        manager.startup(&[]);
        manager
    }

    #[test]
    fn commands_without_a_focused_client_do_nothing() {
        let (mut manager, _, _) = setup(&[]);
        assert!(!manager.command_handler(&Command::KillClient));
        assert!(!manager.command_handler(&Command::ToggleMode));
        assert!(!manager.command_handler(&Command::MoveClient(Direction::Left)));
        assert!(!manager.command_handler(&Command::SetClientTag(2)));
        assert!(!manager.command_handler(&Command::ToggleFullscreen));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn rotate_clockwise_brings_the_last_tiled_client_to_the_head() {
        let (mut manager, monitor, _) = setup(&[1, 2, 3]);
        assert!(manager.command_handler(&Command::RotateClockwise));
        assert_eq!(manager.state.order_of(monitor), vec![3, 1, 2]);
        assert!(manager.command_handler(&Command::RotateCounterClockwise));
        assert!(manager.command_handler(&Command::RotateCounterClockwise));
        assert_eq!(manager.state.order_of(monitor), vec![2, 3, 1]);
    }

    #[test]
    fn main_views_grow_with_the_tilable_clients() {
        let (mut manager, monitor, _) = setup(&[1, 2, 3]);
        assert!(manager.command_handler(&Command::UpdateMainViews(1)));
        assert_eq!(manager.state.monitors[monitor].mains, 2);
        assert!(manager.command_handler(&Command::UpdateMainViews(5)));
        assert_eq!(manager.state.monitors[monitor].mains, 3);
        assert!(!manager.command_handler(&Command::UpdateMainViews(1)));
        assert!(manager.command_handler(&Command::UpdateMainViews(-9)));
        assert_eq!(manager.state.monitors[monitor].mains, 1);
    }

    #[test]
    fn set_layout_only_renders_on_change() {
        let (mut manager, monitor, _) = setup(&[1, 2]);
        assert!(!manager.command_handler(&Command::SetLayout(Layout::Right)));
        assert!(manager.state.actions.is_empty());
        assert!(manager.command_handler(&Command::SetLayout(Layout::Bottom)));
        assert_eq!(manager.state.monitors[monitor].layout, Layout::Bottom);
        assert!(manager.state.actions.contains(&DisplayAction::Show {
            handle: WindowHandle(1),
            rect: Rect::new(0, 0, 1200, 480),
            border_width: 1,
            stacking: crate::models::Stacking::Below,
        }));
    }

    #[test]
    fn switching_monitor_tags_moves_focus_away() {
        let (mut manager, monitor, _) = setup(&[1, 2]);
        assert!(manager.command_handler(&Command::SetMonitorTag(3)));
        assert_eq!(manager.state.monitors[monitor].tagset, Tagset::from_bits(0b100));
        assert_eq!(manager.state.focus_manager.client(), None);
        assert!(manager.state.actions.contains(&DisplayAction::Unfocus));

        assert!(manager.command_handler(&Command::ToggleMonitorTag(1)));
        assert_eq!(manager.state.monitors[monitor].tagset, Tagset::from_bits(0b101));
        assert_eq!(
            manager.state.focused_client().map(|c| c.handle),
            Some(WindowHandle(1))
        );
        assert!(!manager.command_handler(&Command::SetMonitorTag(0)));
        assert!(!manager.command_handler(&Command::ToggleMonitorTag(33)));
    }

    #[test]
    fn kill_asks_the_focused_window_to_close() {
        let (mut manager, _, _) = setup(&[1, 2]);
        manager.command_handler(&Command::KillClient);
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::KillWindow(WindowHandle(1)))
        );
    }

    #[test]
    fn toggle_mode_floats_and_retiles() {
        let (mut manager, _, keys) = setup(&[1, 2]);
        assert!(manager.command_handler(&Command::ToggleMode));
        assert_eq!(manager.state.clients[keys[0]].mode, Mode::Floating);
        assert!(manager.command_handler(&Command::ToggleMode));
        assert_eq!(manager.state.clients[keys[0]].mode, Mode::Tiled);
    }

    #[test]
    fn moving_a_tiled_client_swaps_it_with_its_neighbour() {
        let (mut manager, monitor, _) = setup(&[1, 2, 3]);
        assert!(manager.command_handler(&Command::MoveClient(Direction::Down)));
        assert_eq!(manager.state.order_of(monitor), vec![2, 1, 3]);
        assert_eq!(
            manager.state.focused_client().map(|c| c.handle),
            Some(WindowHandle(1))
        );
        assert!(manager.command_handler(&Command::MoveClient(Direction::Up)));
        assert_eq!(manager.state.order_of(monitor), vec![1, 2, 3]);
    }

    #[test]
    fn moving_a_floating_client_shifts_it() {
        let (mut manager, _, keys) = setup(&[1]);
        manager.command_handler(&Command::ToggleMode);
        let before = manager.state.clients[keys[0]].floating_geometry;
        assert!(manager.command_handler(&Command::MoveClient(Direction::Right)));
        assert!(manager.command_handler(&Command::MoveClient(Direction::Up)));
        assert_eq!(
            manager.state.clients[keys[0]].floating_geometry,
            before.translate(35, -35)
        );
    }

    #[test]
    fn resizing_a_tiled_client_moves_the_split() {
        let (mut manager, monitor, _) = setup(&[1, 2]);
        assert!(manager.command_handler(&Command::ResizeClient(10, 0)));
        assert!((manager.state.monitors[monitor].split - 0.65).abs() < 1e-9);
        assert!(manager.command_handler(&Command::ResizeClient(-10, -10)));
        assert!(manager.command_handler(&Command::ResizeClient(-1, 0)));
        assert!((manager.state.monitors[monitor].split - 0.55).abs() < 1e-9);
        assert!(manager.command_handler(&Command::ResizeClient(0, 0)));
        assert!((manager.state.monitors[monitor].split - 0.6).abs() < 1e-9);
        assert!(!manager.command_handler(&Command::ResizeClient(0, 0)));
    }

    #[test]
    fn resizing_a_floating_client_grows_it() {
        let (mut manager, _, keys) = setup(&[1]);
        manager.command_handler(&Command::ToggleMode);
        manager.state.clients[keys[0]].floating_geometry = Rect::new(100, 100, 400, 300);
        assert!(manager.command_handler(&Command::ResizeClient(20, -10)));
        assert_eq!(
            manager.state.clients[keys[0]].floating_geometry,
            Rect::new(100, 100, 420, 290)
        );
    }

    #[test]
    fn client_follows_to_the_next_monitor_without_wrapping() {
        let mut manager = two_monitors();
        let a = manager.state.monitor_by_name("A").unwrap();
        let b = manager.state.monitor_by_name("B").unwrap();
        let keys = manager.state.add_test_clients(a, &[1]);
        manager.state.focus_client(keys[0]);

        assert!(manager.command_handler(&Command::ClientToNextMonitor));
        assert_eq!(manager.state.clients[keys[0]].monitor(), Some(b));
        assert_eq!(manager.state.focus_manager.monitor(), Some(b));
        assert_eq!(manager.state.focus_manager.client(), Some(keys[0]));
        assert_eq!(manager.state.monitors[a].tag_count(1), 0);
        assert_eq!(manager.state.monitors[b].tag_count(1), 1);

        assert!(!manager.command_handler(&Command::ClientToNextMonitor));
        assert!(manager.command_handler(&Command::ClientToPreviousMonitor));
        assert_eq!(manager.state.order_of(a), vec![1]);
    }

    #[test]
    fn set_client_tag_keeps_the_counters_in_step() {
        let (mut manager, monitor, keys) = setup(&[1, 2]);
        assert!(manager.command_handler(&Command::SetClientTag(4)));
        assert_eq!(manager.state.clients[keys[0]].tagset, Tagset::single(4));
        assert_eq!(manager.state.monitors[monitor].tag_count(1), 1);
        assert_eq!(manager.state.monitors[monitor].tag_count(4), 1);
        assert_eq!(manager.state.focus_manager.client(), Some(keys[1]));
    }

    #[test]
    fn tag_changes_are_refused_for_fullscreen_clients() {
        let (mut manager, _, keys) = setup(&[1]);
        assert!(manager.command_handler(&Command::ToggleFullscreen));
        assert!(!manager.command_handler(&Command::SetClientTag(2)));
        assert!(!manager.command_handler(&Command::ToggleClientTag(2)));
        assert_eq!(manager.state.clients[keys[0]].tagset, Some(Tagset::EVERYWHERE));
        assert!(manager.command_handler(&Command::ToggleFullscreen));
        assert_eq!(manager.state.clients[keys[0]].tagset, Tagset::single(1));
    }

    #[test]
    fn toggle_client_tag_clears_tags_nobody_claims() {
        let (mut manager, monitor, keys) = setup(&[1]);
        assert!(!manager.command_handler(&Command::ToggleClientTag(1)), "last tag");
        assert!(!manager.command_handler(&Command::ToggleClientTag(0)));
        assert!(!manager.command_handler(&Command::ToggleClientTag(33)));

        assert!(manager.command_handler(&Command::ToggleClientTag(2)));
        assert_eq!(
            manager.state.clients[keys[0]].tagset,
            Some(Tagset::from_bits(0b11))
        );
        manager.state.monitors[monitor].tagset = Tagset::from_bits(0b11);

        assert!(manager.command_handler(&Command::ToggleClientTag(1)));
        assert_eq!(manager.state.monitors[monitor].tag_count(1), 0);
        assert_eq!(manager.state.monitors[monitor].tagset, Tagset::from_bits(0b10));
        assert_eq!(manager.state.focus_manager.client(), Some(keys[0]));
    }

    #[test]
    fn fullscreen_toggle_publishes_the_window_state() {
        let (mut manager, _, _) = setup(&[1]);
        assert!(manager.command_handler(&Command::ToggleFullscreen));
        assert!(manager.state.actions.contains(&DisplayAction::SetWindowStates {
            handle: WindowHandle(1),
            fullscreen: true,
            urgent: false,
            sticky: false,
        }));
        assert!(manager.state.actions.contains(&DisplayAction::Show {
            handle: WindowHandle(1),
            rect: Rect::new(0, 0, 1200, 800),
            border_width: 0,
            stacking: crate::models::Stacking::Above,
        }));
    }

    #[test]
    fn sticky_toggle_is_refused_while_fullscreen() {
        let (mut manager, _, keys) = setup(&[1]);
        assert!(manager.command_handler(&Command::ToggleSticky));
        assert!(manager.state.clients[keys[0]].is_sticky());
        assert!(manager.command_handler(&Command::ToggleSticky));
        assert_eq!(manager.state.clients[keys[0]].mode, Mode::Tiled);

        manager.command_handler(&Command::ToggleFullscreen);
        assert!(!manager.command_handler(&Command::ToggleSticky));
    }

    #[test]
    fn dump_writes_the_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.json");
        let config = TestConfig {
            state_path: path.clone(),
            ..TestConfig::default()
        };
        let mut manager: TestManager = Manager::new(config);
        manager.startup(&[]);
        manager.command_handler(&Command::Dump);
        assert!(path.exists());
    }
}
