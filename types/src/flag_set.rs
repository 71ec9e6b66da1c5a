use serde::{Deserialize, Serialize};

use crate::FeatureFlag;

/// Values for every recognized feature flag.
///
/// A `FlagSet` is a plain value: copying it is free, and nothing mutates it in
/// place. Deriving a different set goes through [`FlagSet::with`], which
/// returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagSet {
    claude_sonnet_4: bool,
}

impl FlagSet {
    #[must_use]
    pub const fn new(claude_sonnet_4: bool) -> Self {
        Self { claude_sonnet_4 }
    }

    #[must_use]
    pub const fn is_claude_sonnet_4_enabled(&self) -> bool {
        self.claude_sonnet_4
    }

    #[must_use]
    pub const fn get(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::ClaudeSonnet4 => self.claude_sonnet_4,
        }
    }

    #[must_use]
    pub const fn with(self, flag: FeatureFlag, enabled: bool) -> Self {
        match flag {
            FeatureFlag::ClaudeSonnet4 => Self {
                claude_sonnet_4: enabled,
            },
        }
    }

    /// Every flag paired with its value, in [`FeatureFlag::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureFlag, bool)> + use<> {
        let set = *self;
        FeatureFlag::all()
            .iter()
            .map(move |&flag| (flag, set.get(flag)))
    }

    pub fn enabled(&self) -> impl Iterator<Item = FeatureFlag> + use<> {
        self.iter()
            .filter_map(|(flag, enabled)| enabled.then_some(flag))
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        crate::FEATURE_FLAGS
    }
}
