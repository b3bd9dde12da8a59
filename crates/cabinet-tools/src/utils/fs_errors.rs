//! Conversational formatting of file-operation failures.
//!
//! Maps [`FileOpError`] values to fixed per-operation diagnostic phrasing.
//! These strings travel back to the model as ordinary tool output — never
//! as a hard failure.

use crate::store::FileOpError;

/// The file operation being narrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOp {
    /// `read_file`
    Read,
    /// `write_file`
    Write,
    /// `delete_file`
    Delete,
}

impl FileOp {
    fn gerund(self) -> &'static str {
        match self {
            Self::Read => "reading",
            Self::Write => "writing to",
            Self::Delete => "deleting",
        }
    }
}

/// Format a [`FileOpError`] into the diagnostic string for `filename`.
pub fn format_file_error(op: FileOp, filename: &str, err: &FileOpError) -> String {
    match err {
        FileOpError::NotFound => format!("File '{filename}' does not exist."),
        FileOpError::IsDirectory => match op {
            FileOp::Write => format!("Cannot write to '{filename}': it is a directory."),
            FileOp::Read | FileOp::Delete => {
                format!("'{filename}' is a directory, not a file.")
            }
        },
        FileOpError::PermissionDenied => {
            format!("Permission denied when {} '{filename}'.", op.gerund())
        }
        FileOpError::Io(e) => format!("Error {} '{filename}': {e}", op.gerund()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_same_for_all_ops() {
        for op in [FileOp::Read, FileOp::Write, FileOp::Delete] {
            assert_eq!(
                format_file_error(op, "a.txt", &FileOpError::NotFound),
                "File 'a.txt' does not exist."
            );
        }
    }

    #[test]
    fn directory_read_and_delete() {
        assert_eq!(
            format_file_error(FileOp::Read, "sub", &FileOpError::IsDirectory),
            "'sub' is a directory, not a file."
        );
        assert_eq!(
            format_file_error(FileOp::Delete, "sub", &FileOpError::IsDirectory),
            "'sub' is a directory, not a file."
        );
    }

    #[test]
    fn directory_write() {
        assert_eq!(
            format_file_error(FileOp::Write, "sub", &FileOpError::IsDirectory),
            "Cannot write to 'sub': it is a directory."
        );
    }

    #[test]
    fn permission_denied_per_op() {
        assert_eq!(
            format_file_error(FileOp::Read, "a.txt", &FileOpError::PermissionDenied),
            "Permission denied when reading 'a.txt'."
        );
        assert_eq!(
            format_file_error(FileOp::Write, "a.txt", &FileOpError::PermissionDenied),
            "Permission denied when writing to 'a.txt'."
        );
        assert_eq!(
            format_file_error(FileOp::Delete, "a.txt", &FileOpError::PermissionDenied),
            "Permission denied when deleting 'a.txt'."
        );
    }

    #[test]
    fn io_error_includes_cause() {
        let err = FileOpError::Io(io::Error::other("disk on fire"));
        let msg = format_file_error(FileOp::Read, "a.txt", &err);
        assert!(msg.starts_with("Error reading 'a.txt':"));
        assert!(msg.contains("disk on fire"));
    }
}
