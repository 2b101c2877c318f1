//! Filesystem-based document storage.
//!
//! Each key is one `<key>.json` file in the data directory. Files are written
//! to a temporary sibling and renamed into place so a crash never leaves a
//! half-written document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Store;
use crate::error::{Result, StoreError};

/// Filesystem-based storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    dir: PathBuf,
}

impl Filesystem {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()).into());
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Warn when a document is readable by other users (Unix only).
#[cfg(unix)]
fn check_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "insecure vault file permissions"
            );
        }
    }
}

impl Store for Filesystem {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "reading document");

        if !path.exists() {
            return Ok(None);
        }

        #[cfg(unix)]
        check_permissions(&path);

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let write_err = |source| StoreError::WriteFailed {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let tmp = path.with_extension("json.tmp");

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&tmp)
                .map_err(write_err)?;
            file.write_all(value.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&tmp, value).map_err(write_err)?;
        }

        fs::rename(&tmp, &path).map_err(write_err)?;
        debug!(path = %path.display(), bytes = value.len(), "document written");

        Ok(())
    }
}
