//! Whole-workspace content digest.
//!
//! Concatenates every regular file under clearly delimited per-file sections
//! and appends the requester's question as a trailing instruction. No
//! pagination or relevance ranking — the entire workspace is loaded, which
//! bounds practical workspace size.

use crate::store::{FileOpError, FileStore};

/// Marker used for files with no (non-whitespace) content.
const EMPTY_FILE_MARKER: &str = "[Empty file]";

/// Build the digest for a cross-file question.
///
/// Returns `Workspace contains no files.` when there is nothing to
/// summarize. Files that fail to read surface as [`FileOpError`] so the
/// tool layer can narrate the failure.
pub async fn build_digest(store: &FileStore, query: &str) -> Result<String, FileOpError> {
    let records = store.list().await?;
    if records.is_empty() {
        return Ok("Workspace contains no files.".to_owned());
    }

    let mut combined = String::from("FILE SUMMARY:\n");
    for record in &records {
        let path = store.workspace().root().join(&record.filename);
        let content = store.read(&path).await?;
        let trimmed = content.trim();
        combined.push_str(&format!(
            "\n--- FILE: {} ---\n{}\n",
            record.filename,
            if trimmed.is_empty() {
                EMPTY_FILE_MARKER
            } else {
                trimmed
            }
        ));
    }

    combined.push_str(&format!(
        "\n\nBased on the file contents above, please answer the following question:\n'{query}'"
    ));
    Ok(combined)
}
