//! Artifact file on the local filesystem

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use xverify_api::{Error, Result};
use xverify_protocol::ArtifactStore;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[cfg(unix)]
const DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Single artifact file
///
/// Writing creates missing parent directories owner-only, never follows a
/// symlink at the target path and replaces a regular file that is already
/// there. The new file is readable by the owner only.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn refuse(&self, message: &str) -> Error {
        Error::StorageFailure {
            context: "file store",
            kind: io::ErrorKind::InvalidInput,
            message: format!("{}: {}", self.path.display(), message),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || parent.is_dir() {
            return Ok(());
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DIR_MODE);
        builder.create(parent)?;
        debug!(dir = %parent.display(), "created artifact directory");
        Ok(())
    }

    fn clear_target(&self) -> Result<()> {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                Err(self.refuse("refusing to write through a symlink"))
            }
            Ok(meta) if meta.is_file() => {
                fs::remove_file(&self.path)?;
                Ok(())
            }
            Ok(_) => Err(self.refuse("target exists and is not a regular file")),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ArtifactStore for FileStore {
    fn write_artifact(&mut self, text: &str) -> Result<()> {
        self.ensure_parent()?;
        self.clear_target()?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options.open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
        debug!(path = %self.path.display(), len = text.len(), "artifact file written");
        Ok(())
    }

    fn read_artifact(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("out.json"));
        store.write_artifact("{}").unwrap();
        assert_eq!(store.read_artifact().unwrap(), "{}");
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old contents that are longer").unwrap();

        let mut store = FileStore::new(&path);
        store.write_artifact("new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_file_is_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        let err = store.read_artifact().unwrap_err();
        assert!(matches!(
            err,
            Error::StorageFailure {
                kind: io::ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_refuses_directory_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.write_artifact("x"),
            Err(Error::StorageFailure {
                kind: io::ErrorKind::InvalidInput,
                ..
            })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("wallet_cross_verify");
        let path = sub.join("out.json");
        FileStore::new(&path).write_artifact("{}").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(&sub).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(dir_mode & 0o077, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_refuses_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let victim = dir.path().join("victim.txt");
        fs::write(&victim, "keep me").unwrap();
        let link = dir.path().join("out.json");
        std::os::unix::fs::symlink(&victim, &link).unwrap();

        let err = FileStore::new(&link).write_artifact("{}").unwrap_err();
        assert!(matches!(err, Error::StorageFailure { .. }));
        assert_eq!(fs::read_to_string(&victim).unwrap(), "keep me");
    }
}
