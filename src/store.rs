// 🗄️ Feedback Store - In-memory source of truth
// Append-only ordered collection, synchronized to the persistence adapter
// on every mutation. Seeded from disk exactly once, when opened.

use crate::feedback::FeedbackEntry;
use crate::persist::FeedbackFile;
use anyhow::Result;

// ============================================================================
// FEEDBACK STORE
// ============================================================================

/// Owner of the submitted-entries collection for the lifetime of the session
#[derive(Debug)]
pub struct FeedbackStore {
    entries: Vec<FeedbackEntry>,
    file: FeedbackFile,
}

impl FeedbackStore {
    /// Open the store, loading persisted entries once
    pub fn open(file: FeedbackFile) -> Self {
        let entries = file.load();
        FeedbackStore { entries, file }
    }

    /// Append an entry and persist the full collection
    ///
    /// The only mutation operation. Insertion order is submission order;
    /// there is no update or delete.
    pub fn append(&mut self, entry: FeedbackEntry) -> Result<()> {
        self.entries.push(entry);
        self.file.save(&self.entries)
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
