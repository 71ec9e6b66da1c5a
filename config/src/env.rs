use std::env;

use flagset_types::{FeatureFlag, FlagSet};

/// Parse a boolean-ish env value. Returns `None` for anything unrecognized.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply `FLAGSET_*` environment overrides on top of `base`.
#[must_use]
pub fn env_overrides(base: FlagSet) -> FlagSet {
    env_overrides_with(base, |name| env::var(name).ok())
}

/// Like [`env_overrides`], reading variables through `lookup`.
pub fn env_overrides_with<F>(base: FlagSet, lookup: F) -> FlagSet
where
    F: Fn(&str) -> Option<String>,
{
    FeatureFlag::all().iter().fold(base, |set, &flag| {
        let Some(raw) = lookup(flag.env_var()) else {
            return set;
        };
        match parse_bool(&raw) {
            Some(enabled) => {
                tracing::debug!(flag = %flag, enabled, "Flag overridden from environment");
                set.with(flag, enabled)
            }
            None => {
                tracing::warn!(
                    "Ignoring {}={:?}: expected true/false, 1/0, yes/no or on/off",
                    flag.env_var(),
                    raw
                );
                set
            }
        }
    })
}
