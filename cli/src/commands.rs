//! CLI command definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use flagset_types::FeatureFlag;

#[derive(Parser, Debug)]
#[command(name = "flagset")]
#[command(version, about = "Inspect and edit feature flags")]
#[command(long_about = r#"
Inspect and edit feature flags.

Effective values are layered in this order (later wins):
1. Values compiled into the binary
2. [flags] in ~/.flagset/config.toml (or --config <path>)
3. FLAGSET_<FLAG> environment variables

Example:
  flagset list
  flagset get claude-sonnet-4
  flagset set claude_sonnet_4 false
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every flag with its effective and compiled value
    List,
    /// Print one flag's effective value (exit code 1 when disabled)
    Get {
        #[arg(value_name = "FLAG")]
        flag: FeatureFlag,
    },
    /// Persist a flag value to the configuration file
    Set {
        #[arg(value_name = "FLAG")]
        flag: FeatureFlag,
        /// true/false, 1/0, yes/no or on/off
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Print the configuration file path
    Path,
}
