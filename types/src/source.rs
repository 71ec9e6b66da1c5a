//! Flag sources.
//!
//! A [`FlagSource`] hands out a complete [`FlagSet`] synchronously. Sources are
//! built once at startup and then passed by reference to whatever needs to
//! branch on a flag.

use crate::{FEATURE_FLAGS, FeatureFlag, FlagSet};

pub trait FlagSource: Send + Sync {
    /// Short label for logs and diagnostics.
    fn name(&self) -> &'static str;

    fn flags(&self) -> FlagSet;

    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.flags().get(flag)
    }
}

/// A source backed by a literal [`FlagSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFlags(FlagSet);

impl StaticFlags {
    #[must_use]
    pub const fn new(flags: FlagSet) -> Self {
        Self(flags)
    }

    /// The values compiled into this binary.
    #[must_use]
    pub const fn compiled() -> Self {
        Self(FEATURE_FLAGS)
    }
}

impl Default for StaticFlags {
    fn default() -> Self {
        Self::compiled()
    }
}

impl FlagSource for StaticFlags {
    fn name(&self) -> &'static str {
        "static"
    }

    fn flags(&self) -> FlagSet {
        self.0
    }
}
