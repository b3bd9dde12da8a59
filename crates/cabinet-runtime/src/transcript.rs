//! Conversation transcript capture and persistence.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

/// Records user/agent exchange pairs and writes them to disk on demand.
///
/// The transcript is an append-only record of the exchanges the caller
/// chooses to keep. It is independent of the model-facing history.
#[derive(Debug, Default)]
pub struct TranscriptRecorder {
    exchanges: Vec<(String, String)>,
}

impl TranscriptRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one exchange.
    pub fn record(&mut self, user: impl Into<String>, agent: impl Into<String>) {
        self.exchanges.push((user.into(), agent.into()));
    }

    /// Number of recorded exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Render the transcript body.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (user, agent) in &self.exchanges {
            out.push_str("You: ");
            out.push_str(user);
            out.push_str("\nAgent: ");
            out.push_str(agent);
            out.push('\n');
        }
        out
    }

    /// Write the transcript to `dir`, creating it if needed.
    ///
    /// The file is named `<source>_conversation_<timestamp>.txt`, with
    /// `source` sanitized to filesystem-safe characters. An empty
    /// transcript is not written; `Ok(None)` is returned instead.
    pub async fn save(&self, dir: &Path, source: &str) -> std::io::Result<Option<PathBuf>> {
        if self.exchanges.is_empty() {
            return Ok(None);
        }
        tokio::fs::create_dir_all(dir).await?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_conversation_{timestamp}.txt", sanitize(source));
        let path = dir.join(filename);
        tokio::fs::write(&path, self.render()).await?;
        info!(path = %path.display(), exchanges = self.exchanges.len(), "transcript saved");
        Ok(Some(path))
    }
}

/// Replace anything outside `[A-Za-z0-9_-]` with an underscore.
fn sanitize(source: &str) -> String {
    let cleaned: String = source
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "session".to_owned()
    } else {
        cleaned
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
