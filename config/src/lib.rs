//! Optional config-file and environment layers for feature flags.
//!
//! The compiled registry in [`flagset_types`] never changes. This crate lets an
//! application build its own [`FlagSet`] once at startup, layered as
//! compiled -> `~/.flagset/config.toml` -> `FLAGSET_*` environment variables,
//! and inject it wherever flags are read.
//!
//! ```toml
//! [flags]
//! claude_sonnet_4 = false
//! ```

mod env;
mod persist;
mod source;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use flagset_types::{FeatureFlag, FlagSet};

pub use env::{env_overrides, env_overrides_with, parse_bool};
pub use persist::persist_flag;
pub use source::ConfigSource;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to edit config at {}", path.display())]
    Edit {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },
    #[error("[flags] in {} is not a table", path.display())]
    FlagsNotTable { path: PathBuf },
    #[error("failed to write config at {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine config path (no home directory)")]
    NoConfigPath,
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Edit { path, .. }
            | ConfigError::FlagsNotTable { path }
            | ConfigError::Write { path, .. } => Some(path),
            ConfigError::NoConfigPath => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsConfig {
    pub flags: Option<FlagOverrides>,
}

/// The `[flags]` table. Absent keys keep the underlying value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagOverrides {
    pub claude_sonnet_4: Option<bool>,
}

impl FlagOverrides {
    #[must_use]
    pub const fn get(&self, flag: FeatureFlag) -> Option<bool> {
        match flag {
            FeatureFlag::ClaudeSonnet4 => self.claude_sonnet_4,
        }
    }
}

impl FlagsConfig {
    /// Load from the default config path.
    ///
    /// A missing home directory or missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No flag config file");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlay configured values on `base`.
    #[must_use]
    pub fn resolve(&self, base: FlagSet) -> FlagSet {
        let Some(overrides) = self.flags else {
            return base;
        };
        FeatureFlag::all().iter().fold(base, |set, &flag| {
            match overrides.get(flag) {
                Some(enabled) => set.with(flag, enabled),
                None => set,
            }
        })
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".flagset").join("config.toml"))
}
