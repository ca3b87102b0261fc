use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyCode;
use serde::Deserialize;

use crate::system::SourceKind;

pub const MAX_CHART_WIDTH: usize = 1024;
pub const MAX_CHART_HEIGHT: usize = 256;
pub const MAX_BAR_LENGTH: usize = 256;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub chart: ChartConfig,
    pub bars: BarsConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    pub source: String,
    pub seed: Option<u64>,
    pub max_processes: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 2000,
            source: "synthetic".to_string(),
            seed: None,
            max_processes: 20,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 76,
            height: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BarsConfig {
    pub length: usize,
}

impl Default for BarsConfig {
    fn default() -> Self {
        BarsConfig { length: 10 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
    pub support: String,
    pub border_style: String,
    pub band_low: Option<String>,
    pub band_medium: Option<String>,
    pub band_high: Option<String>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
            support: "auto".to_string(),
            border_style: "rounded".to_string(),
            band_low: None,
            band_medium: None,
            band_high: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub refresh: String,
    pub cycle_theme: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            refresh: "r".to_string(),
            cycle_theme: "t".to_string(),
            help: "?".to_string(),
        }
    }
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.general.refresh_rate_ms)
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.general.refresh_rate_ms == 0 {
            return Err(eyre!("refresh rate must be greater than 0 ms"));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(eyre!(
                "chart size must be at least 1x1 (got {}x{})",
                self.chart.width,
                self.chart.height
            ));
        }
        if self.chart.width > MAX_CHART_WIDTH || self.chart.height > MAX_CHART_HEIGHT {
            return Err(eyre!(
                "chart size {}x{} exceeds the maximum of {MAX_CHART_WIDTH}x{MAX_CHART_HEIGHT}",
                self.chart.width,
                self.chart.height
            ));
        }
        if self.bars.length > MAX_BAR_LENGTH {
            return Err(eyre!(
                "bar length {} exceeds the maximum of {MAX_BAR_LENGTH}",
                self.bars.length
            ));
        }
        if SourceKind::from_config_str(&self.general.source).is_none() {
            return Err(eyre!(
                "unknown metric source {:?} (expected \"synthetic\" or \"system\")",
                self.general.source
            ));
        }
        Ok(())
    }

    /// The configured source. Only meaningful after `validate` succeeded.
    pub fn source_kind(&self) -> SourceKind {
        SourceKind::from_config_str(&self.general.source).unwrap_or(SourceKind::Synthetic)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dashtop").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

/// Parse a keybind name like `"q"`, `"Enter"` or `"Esc"`.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),
        "f5" => Some(KeyCode::F(5)),
        _ => None,
    }
}
