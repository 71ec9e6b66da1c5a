//! `flagset` binary behavior.

use std::fs;

use crate::common::{flagset_command, run_flagset, run_flagset_in_home, stderr, stdout};

#[test]
fn get_reports_compiled_value_without_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_flagset(&dir.path().join("config.toml"), &["get", "claude_sonnet_4"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true");
}

#[test]
fn set_then_get_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let set = run_flagset(&config, &["set", "claude-sonnet-4", "off"]);
    assert!(set.status.success(), "{set:?}");
    assert!(fs::read_to_string(&config).unwrap().contains("claude_sonnet_4 = false"));

    let get = run_flagset(&config, &["get", "claude_sonnet_4"]);
    assert_eq!(get.status.code(), Some(1));
    assert_eq!(stdout(&get), "false");
}

#[test]
fn no_config_ignores_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[flags]\nclaude_sonnet_4 = false\n").unwrap();

    let output = run_flagset(&config, &["--no-config", "get", "claude_sonnet_4"]);
    assert_eq!(stdout(&output), "true");
}

#[test]
fn list_shows_effective_and_compiled() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[flags]\nclaude_sonnet_4 = false\n").unwrap();

    let output = run_flagset(&config, &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("claude_sonnet_4"));
    assert!(text.contains("false"));
    assert!(text.contains("(compiled: true)"));
}

#[test]
fn path_prints_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run_flagset(&config, &["path"]);
    assert_eq!(stdout(&output), config.display().to_string());
}

#[test]
fn invalid_set_value_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run_flagset(&config, &["set", "claude_sonnet_4", "sometimes"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value"));
    assert!(!config.exists());
}

#[test]
fn broken_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[flags\n").unwrap();

    let output = run_flagset(&config, &["get", "claude_sonnet_4"]);
    assert_eq!(output.status.code(), Some(2));

    // piped stderr carries the warning without color codes
    let err = stderr(&output);
    assert!(err.contains("WARN"), "{err}");
    assert!(!err.contains('\x1b'), "{err:?}");
}

#[test]
fn environment_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[flags]\nclaude_sonnet_4 = true\n").unwrap();

    let output = flagset_command()
        .env("FLAGSET_CLAUDE_SONNET_4", "0")
        .arg("--config")
        .arg(&config)
        .args(["get", "claude_sonnet_4"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false");
}

#[test]
fn default_path_without_config_file_uses_compiled_values() {
    let home = tempfile::tempdir().unwrap();

    let output = run_flagset_in_home(home.path(), &["get", "claude_sonnet_4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true");
}

#[test]
fn default_path_reads_home_config() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join(".flagset").join("config.toml");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "[flags]\nclaude_sonnet_4 = false\n").unwrap();

    let get = run_flagset_in_home(home.path(), &["get", "claude_sonnet_4"]);
    assert_eq!(get.status.code(), Some(1));

    let path = run_flagset_in_home(home.path(), &["path"]);
    assert_eq!(stdout(&path), config.display().to_string());
}

#[test]
fn no_config_rejects_set_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let set = run_flagset(&config, &["--no-config", "set", "claude_sonnet_4", "off"]);
    assert_eq!(set.status.code(), Some(2));
    assert!(stderr(&set).contains("--no-config"));
    assert!(!config.exists());

    let path = run_flagset(&config, &["--no-config", "path"]);
    assert_eq!(path.status.code(), Some(2));
}

#[test]
fn debug_log_names_resolved_source() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run_flagset(&config, &["-vv", "get", "claude_sonnet_4"]);
    let err = stderr(&output);
    assert!(err.contains("Resolved feature flags"), "{err}");
    assert!(err.contains("source=\"config\""), "{err}");
}
