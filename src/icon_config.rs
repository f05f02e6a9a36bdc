use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SOURCE: &str = "assets/images/b2school.png";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icons";

const LOCAL_CONFIG_FILE: &str = "icon-gen.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl IconConfig {
    /// Loads the first config file found in the working directory or the user
    /// config directory.
    pub fn load() -> Self {
        Self::load_from_candidates(&Self::candidate_paths())
    }

    /// Uses the first candidate that exists. A broken file is reported and
    /// ignored, later candidates are not consulted.
    pub fn load_from_candidates(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter() {
            if !path.exists() {
                log::debug!("No config at {}", path.display());
                continue;
            }

            return match Self::load_from(path) {
                Ok(config) => {
                    log::debug!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{}, falling back to defaults", e);
                    Self::default()
                }
            };
        }

        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The source given on the command line wins over the configured one.
    pub fn with_source_override(mut self, source: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        self
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("pwa-icon-gen").join("config.json"));
        }
        paths
    }
}
