use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tales_reader_engine::{ParserConfig, ParserConfigError};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/tales-reader";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file at {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid [parser] table in {path}: {source}")]
    InvalidParser {
        path: PathBuf,
        source: ParserConfigError,
    },
}

/// User settings: where the issues live and how to parse them.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `issue_*.txt` files. `~` and `$VAR` are expanded on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_path: Option<PathBuf>,
    #[serde(default)]
    pub parser: ParserConfig,
}

impl Config {
    /// Loads and validates the config at `path`. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Err(source) = config.parser.validate() {
            return Err(ConfigError::InvalidParser {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(Some(Config {
            issues_path: config.issues_path.map(|p| expand_path(&p)),
            ..config
        }))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config as TOML, creating missing parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }
}

/// Expands `~` and environment variables; leaves the path as is if expansion fails.
fn expand_path(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
