//! Configuration for the League Tracker CLI
//!
//! Settings come from command-line flags, then ~/.config/league_tracker/config.toml,
//! then built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "league_tracker";
const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = "league.sqlite3";
const LOG_DIR: &str = "logs";

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from `path`; a missing file yields the empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved settings with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    /// Merge flags over the file config over defaults.
    ///
    /// Relative paths are taken relative to `cwd`.
    pub fn resolve(overrides: Overrides, file: FileConfig, cwd: &Path) -> Result<Self> {
        let data_file = match overrides.data_file.or(file.data_file) {
            Some(path) => path,
            None => default_data_dir()?.join(DATA_FILE),
        };
        let log_dir = match overrides.log_dir.or(file.log_dir) {
            Some(path) => path,
            None => default_data_dir()?.join(LOG_DIR),
        };
        let log_level = overrides
            .log_level
            .or(file.log_level)
            .unwrap_or_else(|| league_core::default_log_level().to_string());

        Ok(Self {
            data_file: absolutize(cwd, data_file),
            log_dir: absolutize(cwd, log_dir),
            log_level,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(dir.join(APP_DIR))
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileConfig, Overrides, Settings};
    use std::path::{Path, PathBuf};

    #[test]
    fn missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/srv/league.sqlite3\"\nlog_level = \"warn\"\n",
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/league.sqlite3")));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [\n").unwrap();
        assert!(FileConfig::load(&path).is_err());

        std::fs::write(&path, "colour = \"blue\"\n").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }

    #[test]
    fn flags_win_over_file_and_relative_paths_use_cwd() {
        let cwd = Path::new("/work");
        let overrides = Overrides {
            data_file: Some(PathBuf::from("mine.sqlite3")),
            log_dir: None,
            log_level: Some("error".to_string()),
        };
        let file = FileConfig {
            data_file: Some(PathBuf::from("/srv/league.sqlite3")),
            log_dir: Some(PathBuf::from("logs")),
            log_level: Some("warn".to_string()),
        };

        let settings = Settings::resolve(overrides, file, cwd).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/work/mine.sqlite3"));
        assert_eq!(settings.log_dir, PathBuf::from("/work/logs"));
        assert_eq!(settings.log_level, "error");
    }
}
