mod window_rule;

use crate::layouts::Layout;
use std::path::PathBuf;
pub use window_rule::WindowRule;

/// Tunables the core reads at startup.
pub trait Config {
    fn border_width(&self) -> i32;
    fn normal_border_color(&self) -> u32;
    fn focused_border_color(&self) -> u32;
    fn urgent_border_color(&self) -> u32;

    /// Initial share of the main zone on new monitors.
    fn split(&self) -> f64;
    fn default_layout(&self) -> Layout;
    fn default_mains(&self) -> usize;

    fn window_rules(&self) -> Vec<WindowRule>;

    /// Where a state dump is written.
    fn state_path(&self) -> PathBuf;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub rules: Vec<WindowRule>,
    pub state_path: PathBuf,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            rules: vec![],
            state_path: std::env::temp_dir().join("mosaic-test-state.json"),
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn border_width(&self) -> i32 {
        1
    }
    fn normal_border_color(&self) -> u32 {
        0x88_8888
    }
    fn focused_border_color(&self) -> u32 {
        0x00_00ff
    }
    fn urgent_border_color(&self) -> u32 {
        0xff_0000
    }
    fn split(&self) -> f64 {
        0.6
    }
    fn default_layout(&self) -> Layout {
        Layout::Right
    }
    fn default_mains(&self) -> usize {
        1
    }
    fn window_rules(&self) -> Vec<WindowRule> {
        self.rules.clone()
    }
    fn state_path(&self) -> PathBuf {
        self.state_path.clone()
    }
}
