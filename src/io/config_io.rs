use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config file path, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("chessbeads").join("config.toml")
}

/// Directory for TUI log files, respecting XDG_STATE_HOME
pub fn default_log_dir() -> PathBuf {
    let state_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("state"));
    state_dir.join("chessbeads")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config from a specific path. A missing file yields defaults;
/// an unreadable or malformed file is an error.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Relative catalog paths are relative to the config file
    if let Some(catalog) = config.catalog.path.take() {
        let resolved = expand_home(&catalog);
        config.catalog.path = Some(match (resolved.is_relative(), path.parent()) {
            (true, Some(dir)) => dir.join(resolved),
            _ => resolved,
        });
    }
    Ok(config)
}

/// Read the config from `path`, or from the default location when `None`.
pub fn read_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => read_config_from(p),
        None => read_config_from(&default_config_path()),
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs_home().join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::ExpandMode;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("config.toml")).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.tree.expand, ExpandMode::Reveal);
    }

    #[test]
    fn relative_catalog_resolves_next_to_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[catalog]\npath = \"mine.json\"\n").unwrap();
        let config = read_config_from(&path).unwrap();
        assert_eq!(config.catalog.path, Some(tmp.path().join("mine.json")));
    }

    #[test]
    fn absolute_catalog_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[catalog]\npath = \"/srv/openings.json\"\n").unwrap();
        let config = read_config_from(&path).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/openings.json")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[tree\nexpand = ").unwrap();
        let err = read_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        assert_eq!(expand_home(Path::new("/a/b")), PathBuf::from("/a/b"));
        assert_eq!(expand_home(Path::new("a/b")), PathBuf::from("a/b"));
        assert!(expand_home(Path::new("~/x.json")).ends_with("x.json"));
    }
}
