//! Workspace root and sandboxed path resolution.
//!
//! Every filename coming from the model goes through [`Workspace::resolve`]
//! before any filesystem call. Containment is enforced here unconditionally —
//! never by the intent gate or the model's good behavior upstream.

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors from sandboxed path resolution.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The filename was empty or whitespace-only.
    #[error("Filename must be provided and cannot be empty.")]
    EmptyFilename,

    /// The resolved path would land outside the workspace root.
    #[error("Path '{filename}' escapes the workspace root.")]
    OutsideRoot {
        /// The offending filename as requested.
        filename: String,
    },

    /// Underlying I/O failure while opening or canonicalizing.
    #[error("workspace I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The single directory all file operations are confined to.
///
/// The root is created if absent and canonicalized once at open time, so
/// containment checks compare against a stable absolute path.
#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open (creating if necessary) a workspace rooted at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        std::fs::create_dir_all(path.as_ref())?;
        let root = path.as_ref().canonicalize()?;
        Ok(Self { root })
    }

    /// The canonicalized workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a requested filename into a validated absolute path.
    ///
    /// Fails with [`WorkspaceError::EmptyFilename`] for empty or
    /// whitespace-only input, and [`WorkspaceError::OutsideRoot`] for any
    /// path — absolute, traversal-laden, or symlinked — that would land
    /// outside the root.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, WorkspaceError> {
        if filename.trim().is_empty() {
            return Err(WorkspaceError::EmptyFilename);
        }

        let outside = || WorkspaceError::OutsideRoot {
            filename: filename.to_owned(),
        };

        // Lexical normalization: walk the requested components on top of the
        // root, refusing any step that climbs past it.
        let mut resolved = self.root.clone();
        for component in Path::new(filename).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if resolved == self.root || !resolved.pop() {
                        return Err(outside());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(outside()),
            }
        }
        if !resolved.starts_with(&self.root) {
            return Err(outside());
        }

        // A symlink inside the workspace can still point outside it.
        // Canonicalize the deepest existing ancestor and re-check.
        let mut probe = resolved.clone();
        while !probe.exists() {
            if !probe.pop() {
                break;
            }
        }
        if probe.exists() {
            let canonical = probe.canonicalize()?;
            if !canonical.starts_with(&self.root) {
                return Err(outside());
            }
        }

        Ok(resolved)
    }
}
