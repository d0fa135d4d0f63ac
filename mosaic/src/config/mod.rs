//! `mosaic` general configuration

mod checks;

use mosaic_core::config::WindowRule;
use mosaic_core::layouts::Layout;
use mosaic_core::Mode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use xdg::BaseDirectories;

/// Path to file where the state is dumped on request.
const STATE_FILE: &str = "/tmp/mosaic.dump";

const DEFAULT_NORMAL_COLOR: u32 = 0x88_8888;
const DEFAULT_FOCUSED_COLOR: u32 = 0x00_00ff;
const DEFAULT_URGENT_COLOR: u32 = 0xff_0000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not locate the configuration directory: {0}")]
    BaseDirectories(#[from] xdg::BaseDirectoriesError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not write configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid color `{0}`, expected `#rrggbb`")]
    Color(String),
}

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// border_width = 2
/// focused_color = "#5e81ac"
///
/// [[window_rules]]
/// class = "Gimp"
/// tag = 3
/// mode = "Floating"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub border_width: i32,
    pub normal_color: String,
    pub focused_color: String,
    pub urgent_color: String,
    /// Share of a monitor given to the main zone, between 0.2 and 0.8.
    pub split: f64,
    pub layout: Layout,
    pub mains: usize,
    /// `tracing` filter directive, such as `info` or `mosaic_core=debug,warn`.
    pub log_level: String,
    pub state: Option<PathBuf>,
    pub window_rules: Vec<WindowRule>,
}

impl Default for Config {
    fn default() -> Self {
        let floating = |class: &str| WindowRule {
            class: Some(class.to_owned()),
            mode: Some(Mode::Floating),
            ..WindowRule::default()
        };
        Self {
            border_width: 1,
            normal_color: "#888888".to_owned(),
            focused_color: "#0000ff".to_owned(),
            urgent_color: "#ff0000".to_owned(),
            split: 0.6,
            layout: Layout::Right,
            mains: 1,
            log_level: "info".to_owned(),
            state: None,
            window_rules: vec![
                floating("Gnome-calculator"),
                floating("Xephyr"),
                floating("Xmessage"),
            ],
        }
    }
}

/// Parses a `#rrggbb` color.
///
/// # Errors
///
/// Will error if the string is not a `#` followed by six hex digits.
pub fn parse_color(hex: &str) -> Result<u32, ConfigError> {
    hex.strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
        .ok_or_else(|| ConfigError::Color(hex.to_owned()))
}

/// Reads `$XDG_CONFIG_HOME/mosaic/config.toml`, writing the defaults there
/// first if it does not exist yet.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if the
/// user doesn't have permissions to place config.toml, or if config.toml
/// cannot be read or parsed.
pub fn load_from_file() -> Result<Config, ConfigError> {
    let path = BaseDirectories::with_prefix("mosaic")?;
    let config_filename = path.place_config_file("config.toml")?;
    if config_filename.exists() {
        read_config(&config_filename)
    } else {
        tracing::info!("Writing default config to {}", config_filename.display());
        let config = Config::default();
        write_config(&config, &config_filename)?;
        Ok(config)
    }
}

/// # Errors
///
/// Will error if the file cannot be read or is not a valid configuration.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!("Loading config file {}", path.display());
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// # Errors
///
/// Will error if the configuration cannot be serialized or written.
pub fn write_config(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let toml = toml::to_string(config)?;
    fs::write(path, toml)?;
    Ok(())
}

impl Config {
    fn color_or(&self, hex: &str, fallback: u32) -> u32 {
        parse_color(hex).unwrap_or_else(|err| {
            tracing::warn!("{}", err);
            fallback
        })
    }
}

impl mosaic_core::Config for Config {
    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn normal_border_color(&self) -> u32 {
        self.color_or(&self.normal_color, DEFAULT_NORMAL_COLOR)
    }

    fn focused_border_color(&self) -> u32 {
        self.color_or(&self.focused_color, DEFAULT_FOCUSED_COLOR)
    }

    fn urgent_border_color(&self) -> u32 {
        self.color_or(&self.urgent_color, DEFAULT_URGENT_COLOR)
    }

    fn split(&self) -> f64 {
        self.split
    }

    fn default_layout(&self) -> Layout {
        self.layout
    }

    fn default_mains(&self) -> usize {
        self.mains
    }

    fn window_rules(&self) -> Vec<WindowRule> {
        self.window_rules.clone()
    }

    fn state_path(&self) -> PathBuf {
        self.state
            .clone()
            .unwrap_or_else(|| PathBuf::from(STATE_FILE))
    }
}
