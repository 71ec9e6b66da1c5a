//! flagset CLI - inspect and edit feature flags.
//!
//! ```text
//! main() -> Cli::parse() -> init_tracing() -> run()
//!                                              |
//!                       FEATURE_FLAGS -> [flags] config -> FLAGSET_* env
//! ```
//!
//! Logs go to stderr so stdout stays scriptable.

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::{Cli, Command};
use flagset_config::{
    ConfigError, ConfigSource, FlagsConfig, config_path, parse_bool, persist_flag,
};
use flagset_types::{FEATURE_FLAGS, FlagSource};

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(config_path)
}

fn load_source(cli: &Cli) -> Result<ConfigSource> {
    if cli.no_config {
        return Ok(ConfigSource::new(FEATURE_FLAGS, None));
    }
    match &cli.config {
        Some(path) => {
            let config = FlagsConfig::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?;
            Ok(ConfigSource::new(FEATURE_FLAGS, config.as_ref()))
        }
        None => ConfigSource::load().context("loading default config"),
    }
}

/// `set` and `path` act on the config file, which `--no-config` disables.
fn require_config(cli: &Cli, command: &str) -> Result<PathBuf> {
    if cli.no_config {
        bail!("--no-config cannot be combined with `{command}`");
    }
    Ok(resolve_path(cli).ok_or(ConfigError::NoConfigPath)?)
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::List => {
            let source = load_source(cli)?;
            for (flag, enabled) in source.flags().iter() {
                println!(
                    "{:<20} {:<5} (compiled: {})",
                    flag.key(),
                    enabled,
                    FEATURE_FLAGS.get(flag)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Get { flag } => {
            let enabled = load_source(cli)?.is_enabled(*flag);
            println!("{enabled}");
            Ok(if enabled {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Set { flag, value } => {
            let enabled = parse_bool(value).ok_or_else(|| {
                anyhow!("invalid value '{value}'; expected true/false, 1/0, yes/no or on/off")
            })?;
            let path = require_config(cli, "set")?;
            persist_flag(&path, *flag, enabled)
                .with_context(|| format!("setting {flag} in {}", path.display()))?;
            println!("{flag} = {enabled} ({})", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Path => {
            let path = require_config(cli, "path")?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(?err, "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
