use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// File-backed storage for the single bearer token.
///
/// One token per file. The token is written at login, read on every
/// dashboard load, and deleted when the server rejects it.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location: `QUIZDASH_TOKEN_FILE` if set,
    /// otherwise `<config dir>/quizdash/token`.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var("QUIZDASH_TOKEN_FILE") {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let base = dirs::config_dir().context("no config directory available on this platform")?;
        Ok(Self::new(base.join("quizdash").join("token")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. A missing file or a file that is empty after
    /// trimming counts as "not logged in".
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read token file {:?}", self.path))
            }
        }
    }

    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create token directory {parent:?}"))?;
        }

        fs::write(&self.path, token)
            .with_context(|| format!("failed to write token file {:?}", self.path))
    }

    /// Delete the stored token. Clearing an already-absent token succeeds.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to remove token file {:?}", self.path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("quizdash").join("token"))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        assert!(store.load().expect("load should succeed").is_none());
    }

    #[test]
    fn round_trips_a_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.store("abc.def.ghi").expect("store should succeed");

        assert_eq!(
            store.load().expect("load should succeed").as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.store("  token-value\n").expect("store should succeed");

        assert_eq!(
            store.load().expect("load should succeed").as_deref(),
            Some("token-value")
        );
    }

    #[test]
    fn blank_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.store("   \n").expect("store should succeed");

        assert!(store.load().expect("load should succeed").is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.store("token").expect("store should succeed");
        store.clear().expect("first clear should succeed");
        store.clear().expect("second clear should succeed");

        assert!(store.load().expect("load should succeed").is_none());
    }
}
