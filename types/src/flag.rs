//! Feature flag names.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recognized feature flag.
///
/// The set is closed: every variant maps to exactly one field of
/// [`FlagSet`](crate::FlagSet), and no flag can be added at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    /// Claude Sonnet 4 model-specific behavior.
    ClaudeSonnet4,
}

const FLAG_KEYS: &[&str] = &["claude_sonnet_4"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature flag '{raw}'; expected one of: {expected:?}")]
pub struct FlagParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl FlagParseError {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            expected: FLAG_KEYS,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl FeatureFlag {
    #[must_use]
    pub const fn all() -> &'static [FeatureFlag] {
        &[FeatureFlag::ClaudeSonnet4]
    }

    /// Stable snake_case key used in config files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FeatureFlag::ClaudeSonnet4 => "claude_sonnet_4",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            FeatureFlag::ClaudeSonnet4 => "Claude Sonnet 4",
        }
    }

    /// Environment variable that overrides this flag in layered sources.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            FeatureFlag::ClaudeSonnet4 => "FLAGSET_CLAUDE_SONNET_4",
        }
    }

    /// Parse a flag key. Case-insensitive; `-` is accepted in place of `_`.
    pub fn parse(raw: &str) -> Result<Self, FlagParseError> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|flag| flag.key() == normalized)
            .ok_or_else(|| FlagParseError::new(raw.trim()))
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FeatureFlag {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
