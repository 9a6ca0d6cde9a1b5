use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ShellError};
use crate::render::OutputFormat;

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: default_prompt(),
            format: OutputFormat::default(),
        }
    }
}

impl ShellConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ShellConfig::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|source| ShellError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".arith")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = ShellConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "format": "json" }"#).unwrap();

        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ prompt: ").unwrap();

        let err = ShellConfig::load(&path).unwrap_err();
        assert!(matches!(err, ShellError::Config { .. }));
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ShellConfig {
            prompt: "calc> ".to_string(),
            format: OutputFormat::Json,
        };

        config.save(&path).unwrap();
        assert_eq!(ShellConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn config_path_is_under_dot_arith() {
        let path = ShellConfig::get_config_path();
        assert!(path.ends_with(Path::new(".arith").join("config.json")));
    }
}
