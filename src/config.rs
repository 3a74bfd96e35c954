//! Runtime settings
//!
//! Read from a RON file. Missing files give the defaults; broken ones also
//! give the defaults, with the reason handed back so it can be logged once
//! logging is up.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "STONEBOUND_CONFIG";
const CONFIG_FILE: &str = "stonebound.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub target_fps: u32,
    /// Ticks a single key press keeps its direction held; terminals do not
    /// report key release
    pub hold_ticks: u32,
    pub log_filter: String,
    pub log_file: PathBuf,
    /// Directory holding `dialogue.ron` and `questions.ron` overrides
    pub data_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            hold_ticks: 8,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("stonebound.log"),
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

impl GameConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Load from the first location that exists, falling back to defaults.
    /// The second value says why a file that was found got ignored.
    pub fn load() -> (Self, Option<String>) {
        Self::load_or_default(config_path().as_deref())
    }

    fn load_or_default(path: Option<&Path>) -> (Self, Option<String>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("Ignoring {}: {}", path.display(), e))),
        }
    }

    /// Milliseconds per tick; a zero rate is treated as one frame per second
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

/// `$STONEBOUND_CONFIG`, then the platform config dir, then the working dir
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    use directories::ProjectDirs;

    let platform = ProjectDirs::from("com", "stonebound", "Stonebound").map(|dirs| dirs.config_dir().join(CONFIG_FILE));
    [platform, Some(PathBuf::from(CONFIG_FILE))]
        .into_iter()
        .flatten()
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::parse("(target_fps: 30)").unwrap();
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.hold_ticks, 8);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.frame_millis(), 33);
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(GameConfig::parse("(target_fps: \"fast\")"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            GameConfig::load_from(Path::new("no/such/stonebound.ron")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_broken_file_reports_why() {
        let path = std::env::temp_dir().join(format!("stonebound-config-{}.ron", std::process::id()));
        fs::write(&path, "(hold_ticks: -3").unwrap();

        let (config, warning) = GameConfig::load_or_default(Some(&path));
        assert_eq!(config, GameConfig::default());
        let warning = warning.unwrap();
        assert!(warning.starts_with("Ignoring "));
        assert!(warning.contains("could not parse config"));

        fs::write(&path, "(hold_ticks: 3)").unwrap();
        let (config, warning) = GameConfig::load_or_default(Some(&path));
        assert_eq!(config.hold_ticks, 3);
        assert_eq!(warning, None);

        fs::remove_file(&path).unwrap();
        assert_eq!(GameConfig::load_or_default(None), (GameConfig::default(), None));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let config = GameConfig { target_fps: 0, ..GameConfig::default() };
        assert_eq!(config.frame_millis(), 1000);
    }
}
