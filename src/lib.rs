// Customer Feedback Console - Core Library
// Exposes all modules for use in the CLI, the TUI, and tests

pub mod feedback;
pub mod form;
pub mod notify;
pub mod persist;
pub mod sentiment;
pub mod store;
pub mod summary;

// Terminal UI, only under the tui feature
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use feedback::{Category, FeedbackEntry, Sentiment};
pub use form::FormDraft;
pub use notify::{Banner, Kind};
pub use persist::{FeedbackFile, STORE_FILE};
pub use sentiment::classify;
pub use store::FeedbackStore;
pub use summary::{category_counts, Filter, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
