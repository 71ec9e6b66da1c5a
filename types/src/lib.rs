//! Compiled feature flag registry.
//!
//! The registry is a single `const` [`FlagSet`] baked into the binary. Reading it
//! never fails, never blocks, and returns the same value for the whole life of
//! the process.
//!
//! ```
//! use flagset_types::is_claude_sonnet_4_enabled;
//!
//! if is_claude_sonnet_4_enabled() {
//!     // model-specific behavior
//! }
//! ```
//!
//! Callers that want values from somewhere other than the compiled literal
//! should build a [`FlagSource`] at startup and pass it around instead of
//! reaching for this global.

mod flag;
mod flag_set;
mod source;

pub use flag::{FeatureFlag, FlagParseError};
pub use flag_set::FlagSet;
pub use source::{FlagSource, StaticFlags};

/// Flag values compiled into this binary.
pub const FEATURE_FLAGS: FlagSet = FlagSet::new(true);

/// Whether Claude Sonnet 4 behavior is enabled in the compiled registry.
#[must_use]
pub const fn is_claude_sonnet_4_enabled() -> bool {
    FEATURE_FLAGS.is_claude_sonnet_4_enabled()
}
