//! Configuration for the knowledge base.
//!
//! Read from `~/.config/concord/config.toml` at startup. If the file doesn't
//! exist, a commented default is created. The commentary source table is
//! fixed once loaded; resolution order is never configurable per call.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

use crate::commentary::SourceSpec;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one JSON file per commentary source. Defaults to
    /// the platform data dir (`~/.local/share/concord/commentaries`).
    pub data_dir: Option<PathBuf>,
    /// Commentary sources, consulted in ascending priority order.
    pub sources: Vec<SourceSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            sources: SourceSpec::defaults(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Creates a commented default file when none exists. An existing but
    /// invalid file is an error; missing fields fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// The commentary data directory, configured or platform default.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("concord").join("commentaries"))
    }

    /// Default config file path: `~/.config/concord/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("concord").join("config.toml"))
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Concord configuration
#
# data_dir: directory holding one JSON file per commentary source
# (e.g. ellicott.json, a flat object mapping "book-chapter-verse" keys to
# commentary text). A missing or malformed file degrades that source to
# "not found" for every verse; it never fails the lookup.
#
# data_dir = "/path/to/commentaries"

# Commentary sources are consulted in ascending priority order; the first
# source containing a verse wins.

[[sources]]
name = "ellicott"
title = "Ellicott’s Commentary for English Readers"
author = "Charles John Ellicott (1819–1905)"
priority = 1

[[sources]]
name = "jfb"
title = "Jamieson-Fausset-Brown Bible Commentary"
author = "Robert Jamieson, A. R. Fausset, David Brown"
priority = 2

[[sources]]
name = "mhcc"
title = "Matthew Henry’s Concise Commentary"
author = "Matthew Henry (1662–1714)"
priority = 3
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.sources[0].name, "ellicott");
        assert_eq!(config.sources[0].priority, 1);
        assert_eq!(config.sources[2].name, "mhcc");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_config_keeps_default_sources() {
        let content = r##"
data_dir = "/srv/commentaries"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/commentaries")));
        assert_eq!(config.sources, SourceSpec::defaults());
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/commentaries"));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.sources.len(), 3);
    }

    #[test]
    fn test_custom_source_table() {
        let content = r##"
[[sources]]
name = "mhcc"
title = "Matthew Henry"
author = "Matthew Henry"
priority = 1
"##;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].name, "mhcc");
    }
}
