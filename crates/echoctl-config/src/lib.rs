//! File-backed credential store for the echoctl CLI.
//!
//! One TOML table of strings at the platform config dir holds the session
//! cookie, csrf token, and user preferences. The CLI is re-invoked once
//! per command, so every read goes back to disk. Reads follow the
//! credential chain: `ECHOCTL_*` environment variables first, then the
//! file; writes always target the file layer only, so an env override is
//! never accidentally persisted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Toml},
};

use echoctl_core::{CredentialStore, StoreError};

/// Environment variables with this prefix override stored values on read.
pub const ENV_PREFIX: &str = "ECHOCTL_";

type Record = BTreeMap<String, String>;

// ── Store path ──────────────────────────────────────────────────────

/// Resolve the credential file path via XDG / platform conventions.
pub fn store_path() -> PathBuf {
    ProjectDirs::from("com", "echoctl", "echoctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("credentials.toml");
            p
        },
        |dirs| dirs.config_dir().join("credentials.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("echoctl");
    p
}

/// Map a record key to its override variable: `defaultDevice` becomes
/// `ECHOCTL_DEFAULT_DEVICE`.
fn env_key(key: &str) -> String {
    let mut out = String::with_capacity(ENV_PREFIX.len() + key.len() + 2);
    out.push_str(ENV_PREFIX);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

// ── FileStore ───────────────────────────────────────────────────────

/// Credential store backed by a single TOML record on disk.
///
/// A missing or corrupt file reads as an empty store rather than failing.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at the canonical platform location.
    pub fn open_default() -> Self {
        Self { path: store_path() }
    }

    /// Open a store at an explicit path (tests, overrides).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file layer only. Corrupt TOML degrades to empty.
    fn read_file(&self) -> Record {
        Figment::from(Toml::file(&self.path))
            .extract()
            .unwrap_or_default()
    }

    fn write_file(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str =
            toml::to_string_pretty(record).map_err(|e| StoreError::new(e.to_string()))?;
        std::fs::write(&self.path, toml_str)?;
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        // Env override first, file second.
        if let Ok(value) = std::env::var(env_key(key)) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        self.read_file().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut record = self.read_file();
        record.insert(key.to_owned(), value.to_owned());
        self.write_file(&record)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use echoctl_core::keys;

    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("credentials.toml"));
        (dir, store)
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, store) = temp_store();
        store.set(keys::COOKIE, "session-token=abc").unwrap();
        store.set(keys::DEFAULT_DEVICE, "Kitchen Echo").unwrap();

        assert_eq!(store.get(keys::COOKIE).as_deref(), Some("session-token=abc"));
        assert_eq!(
            store.get(keys::DEFAULT_DEVICE).as_deref(),
            Some("Kitchen Echo")
        );
    }

    #[test]
    fn set_preserves_other_keys() {
        let (_dir, store) = temp_store();
        store.set(keys::COOKIE, "one").unwrap();
        store.set(keys::CSRF, "two").unwrap();
        store.set(keys::COOKIE, "three").unwrap();

        assert_eq!(store.get(keys::CSRF).as_deref(), Some("two"));
        assert_eq!(store.get(keys::COOKIE).as_deref(), Some("three"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(keys::COOKIE), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not [valid toml").unwrap();

        assert_eq!(store.get(keys::COOKIE), None);
        // Writing over the corrupt file recovers it.
        store.set(keys::COOKIE, "fresh").unwrap();
        assert_eq!(store.get(keys::COOKIE).as_deref(), Some("fresh"));
    }

    #[test]
    fn clear_removes_the_record() {
        let (_dir, store) = temp_store();
        store.set(keys::COOKIE, "abc").unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
        assert_eq!(store.get(keys::COOKIE), None);
        // Clearing an already-empty store is fine.
        store.clear().unwrap();
    }

    #[test]
    fn env_key_mapping() {
        assert_eq!(env_key("cookie"), "ECHOCTL_COOKIE");
        assert_eq!(env_key("defaultDevice"), "ECHOCTL_DEFAULT_DEVICE");
        assert_eq!(env_key("serviceHost"), "ECHOCTL_SERVICE_HOST");
    }
}
