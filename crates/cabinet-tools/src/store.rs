//! File store: list/read/write/delete against validated paths.
//!
//! Every operation returns a structured outcome. Failures are [`FileOpError`]
//! values the tool layer folds into conversational diagnostics; nothing here
//! is ever fatal to a session.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::workspace::Workspace;

/// Literal separator inserted before appended content.
///
/// The space-then-newline ordering is load-bearing: appends yield
/// `"old \nnew"`, not `"old\nnew"`.
pub const APPEND_SEPARATOR: &str = " \n";

/// Failure modes of a single file operation.
#[derive(Debug, Error)]
pub enum FileOpError {
    /// The target file does not exist.
    #[error("file does not exist")]
    NotFound,
    /// The target is a directory, not a regular file.
    #[error("target is a directory")]
    IsDirectory,
    /// The process lacks permission for the operation.
    #[error("permission denied")]
    PermissionDenied,
    /// Any other I/O failure.
    #[error("{0}")]
    Io(io::Error),
}

impl From<io::Error> for FileOpError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }
}

/// Write disposition for [`FileStore::write`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file's content.
    Overwrite,
    /// Append, inserting [`APPEND_SEPARATOR`] before the new content.
    Append,
}

impl WriteMode {
    /// Parse the wire-format mode string (`"w"` / `"a"`).
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "w" => Some(Self::Overwrite),
            "a" => Some(Self::Append),
            _ => None,
        }
    }
}

/// Metadata for one regular file in the workspace.
///
/// Derived on demand from filesystem state; never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Bare filename within the workspace.
    pub filename: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last-modified time, ctime-style (`Sat Aug 30 12:00:00 2026`).
    pub modified_time_human: String,
    /// Last-modified time as fractional seconds since the epoch.
    pub modified_time_raw: f64,
}

/// Sandboxed file operations over a [`Workspace`].
#[derive(Clone, Debug)]
pub struct FileStore {
    workspace: Arc<Workspace>,
}

impl FileStore {
    /// Create a store bound to a workspace.
    pub fn new(workspace: Arc<Workspace>) -> Self {
        Self { workspace }
    }

    /// The workspace this store is confined to.
    pub fn workspace(&self) -> &Arc<Workspace> {
        &self.workspace
    }

    /// List the workspace's regular files with their metadata.
    ///
    /// Directories are excluded. Order is filesystem enumeration order —
    /// unspecified, but stable within a call.
    pub async fn list(&self) -> Result<Vec<FileRecord>, FileOpError> {
        let mut entries = tokio::fs::read_dir(self.workspace.root()).await?;
        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            if !file_type.is_file() {
                continue;
            }
            let metadata = entry.metadata().await?;
            let modified = metadata.modified()?;
            let raw = modified
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs_f64();
            records.push(FileRecord {
                filename: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                modified_time_human: chrono::DateTime::<chrono::Local>::from(modified)
                    .format("%a %b %e %H:%M:%S %Y")
                    .to_string(),
                modified_time_raw: raw,
            });
        }
        Ok(records)
    }

    /// Read a file's content as UTF-8 text.
    pub async fn read(&self, path: &Path) -> Result<String, FileOpError> {
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.is_dir() {
            return Err(FileOpError::IsDirectory);
        }
        Ok(tokio::fs::read_to_string(path).await?)
    }

    /// Write or append content to a file, creating it if missing.
    pub async fn write(
        &self,
        path: &Path,
        content: &str,
        mode: WriteMode,
    ) -> Result<(), FileOpError> {
        if path.is_dir() {
            return Err(FileOpError::IsDirectory);
        }
        match mode {
            WriteMode::Overwrite => tokio::fs::write(path, content).await?,
            WriteMode::Append => {
                let mut file = tokio::fs::OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .await?;
                file.write_all(APPEND_SEPARATOR.as_bytes()).await?;
                file.write_all(content.as_bytes()).await?;
                file.flush().await?;
            }
        }
        Ok(())
    }

    /// Delete a regular file. Directories are never removed.
    pub async fn delete(&self, path: &Path) -> Result<(), FileOpError> {
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.is_dir() {
            return Err(FileOpError::IsDirectory);
        }
        tokio::fs::remove_file(path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::testutil::temp_store;

    #[tokio::test]
    async fn list_empty_workspace() {
        let (_dir, store) = temp_store();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_excludes_directories() {
        let (_dir, store) = temp_store();
        std::fs::write(store.workspace().root().join("a.txt"), "hello").unwrap();
        std::fs::create_dir(store.workspace().root().join("sub")).unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a.txt");
        assert_eq!(records[0].size_bytes, 5);
    }

    #[tokio::test]
    async fn list_records_match_stat() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("a.txt");
        std::fs::write(&path, "12345").unwrap();

        let stat = std::fs::metadata(&path).unwrap();
        let expected_raw = stat
            .modified()
            .unwrap()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();

        let records = store.list().await.unwrap();
        assert_eq!(records[0].size_bytes, stat.len());
        assert!((records[0].modified_time_raw - expected_raw).abs() < 1e-6);
        assert!(!records[0].modified_time_human.is_empty());
    }

    #[tokio::test]
    async fn read_missing_file_not_found() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("missing.txt");
        assert_matches!(store.read(&path).await, Err(FileOpError::NotFound));
    }

    #[tokio::test]
    async fn read_directory_rejected() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("sub");
        std::fs::create_dir(&path).unwrap();
        assert_matches!(store.read(&path).await, Err(FileOpError::IsDirectory));
    }

    #[tokio::test]
    async fn overwrite_then_append_inserts_separator() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("a.txt");

        store.write(&path, "Start", WriteMode::Overwrite).await.unwrap();
        store.write(&path, " End", WriteMode::Append).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Start \n End");
    }

    #[tokio::test]
    async fn append_creates_missing_file_with_separator() {
        // Append mode always prefixes the separator, even for a new file.
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("new.txt");

        store.write(&path, "first", WriteMode::Append).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), " \nfirst");
    }

    #[tokio::test]
    async fn overwrite_replaces_content() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("a.txt");
        store.write(&path, "old content", WriteMode::Overwrite).await.unwrap();
        store.write(&path, "new", WriteMode::Overwrite).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn write_to_directory_rejected() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("sub");
        std::fs::create_dir(&path).unwrap();
        assert_matches!(
            store.write(&path, "x", WriteMode::Overwrite).await,
            Err(FileOpError::IsDirectory)
        );
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("a.txt");
        std::fs::write(&path, "x").unwrap();
        store.delete(&path).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn delete_missing_not_found() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("missing.txt");
        assert_matches!(store.delete(&path).await, Err(FileOpError::NotFound));
    }

    #[tokio::test]
    async fn delete_directory_leaves_it_intact() {
        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("sub");
        std::fs::create_dir(&path).unwrap();
        assert_matches!(store.delete(&path).await, Err(FileOpError::IsDirectory));
        assert!(path.is_dir());
    }

    #[test]
    fn write_mode_parse() {
        assert_eq!(WriteMode::parse("w"), Some(WriteMode::Overwrite));
        assert_eq!(WriteMode::parse("a"), Some(WriteMode::Append));
        assert_eq!(WriteMode::parse("x"), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn read_unreadable_file_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        let path = store.workspace().root().join("locked.txt");
        std::fs::write(&path, "secret").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root bypasses permission bits; skip the assertion in that case.
        if store.read(&path).await.is_ok() {
            return;
        }
        assert_matches!(store.read(&path).await, Err(FileOpError::PermissionDenied));
    }
}
