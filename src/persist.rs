// 💾 Persistence Adapter - Single-document JSON store
// The whole collection lives under one key: a `feedbacks.json` file holding
// a serialized array. Every save is a full-collection overwrite.

use crate::feedback::FeedbackEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the single store document
pub const STORE_FILE: &str = "feedbacks.json";

// ============================================================================
// FEEDBACK FILE
// ============================================================================

/// Handle on the JSON document backing the feedback collection
#[derive(Debug, Clone)]
pub struct FeedbackFile {
    path: PathBuf,
}

impl FeedbackFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FeedbackFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default store location under the platform data directory
    ///
    /// Falls back to the current directory when the platform reports no data
    /// directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("feedback-console")
            .join(STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection
    ///
    /// A missing file or unparseable content yields an empty collection;
    /// neither is an error. Parseable entries are trusted as-is, with no
    /// re-validation.
    pub fn load(&self) -> Vec<FeedbackEntry> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Overwrite the store with the full collection
    pub fn save(&self, entries: &[FeedbackEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
        }

        let json = serde_json::to_string(entries).context("Failed to serialize feedback")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write store file: {:?}", self.path))?;

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
