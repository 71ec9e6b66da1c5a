//! Writing flag values back to the config file.
//!
//! Uses `toml_edit` so comments, ordering and unrelated tables survive, and a
//! temp file + rename so a crash never leaves a half-written config behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use flagset_types::FeatureFlag;
use tempfile::NamedTempFile;

use crate::ConfigError;

/// Set `flag` to `enabled` in the `[flags]` table of the config at `path`.
///
/// Creates the file and its parent directory if they don't exist.
pub fn persist_flag(path: &Path, flag: FeatureFlag, enabled: bool) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let content = if path.exists() {
        fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|source| ConfigError::Edit {
            path: path.to_path_buf(),
            source,
        })?;

    // Ensure [flags] table exists
    if !doc.contains_key("flags") {
        doc["flags"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    let Some(flags) = doc["flags"].as_table_like_mut() else {
        return Err(ConfigError::FlagsNotTable {
            path: path.to_path_buf(),
        });
    };
    match flags.get_mut(flag.key()) {
        // Keep the key's leading comment and the value's trailing comment
        Some(toml_edit::Item::Value(existing)) => {
            let decor = existing.decor().clone();
            let mut updated = toml_edit::Value::from(enabled);
            *updated.decor_mut() = decor;
            *existing = updated;
        }
        Some(item) => *item = toml_edit::value(enabled),
        None => {
            flags.insert(flag.key(), toml_edit::value(enabled));
        }
    }

    atomic_write(parent, path, doc.to_string().as_bytes()).map_err(write_err)?;

    tracing::info!(path = %path.display(), flag = %flag, enabled, "Persisted feature flag");
    Ok(())
}

fn atomic_write(parent: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut tmp = NamedTempFile::new_in(parent)?;
    // user-only read/write
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))?;
    }

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
