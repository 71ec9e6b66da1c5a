use flagset_types::{FEATURE_FLAGS, FlagSet, FlagSource};

use crate::{FlagsConfig, env};

/// Flags layered from the compiled registry, a config file, and the environment.
///
/// Values are resolved once in the constructor and never re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSource {
    flags: FlagSet,
}

impl ConfigSource {
    /// Layer `config` and `FLAGSET_*` environment variables over `base`.
    #[must_use]
    pub fn new(base: FlagSet, config: Option<&FlagsConfig>) -> Self {
        Self::resolved(env::env_overrides(file_layer(base, config)))
    }

    /// Same as [`ConfigSource::new`], reading variables through `lookup`.
    pub fn with_env<F>(base: FlagSet, config: Option<&FlagsConfig>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolved(env::env_overrides_with(file_layer(base, config), lookup))
    }

    fn resolved(flags: FlagSet) -> Self {
        let source = Self { flags };
        tracing::debug!(source = source.name(), ?flags, "Resolved feature flags");
        source
    }

    /// Compiled values with the default config file and environment applied.
    pub fn load() -> Result<Self, crate::ConfigError> {
        let config = FlagsConfig::load()?;
        Ok(Self::new(FEATURE_FLAGS, config.as_ref()))
    }
}

fn file_layer(base: FlagSet, config: Option<&FlagsConfig>) -> FlagSet {
    config.map_or(base, |config| config.resolve(base))
}

impl FlagSource for ConfigSource {
    fn name(&self) -> &'static str {
        "config"
    }

    fn flags(&self) -> FlagSet {
        self.flags
    }
}
