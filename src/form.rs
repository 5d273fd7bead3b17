// 📝 Form Controller - Draft fields + validation
// Holds the five draft inputs and an error map keyed by field name.
// The error map is replaced wholesale on every validation pass.

use crate::feedback::{Category, FeedbackEntry};
use crate::sentiment;
use chrono::{SecondsFormat, Utc};
use std::collections::HashMap;

// ============================================================================
// FORM DRAFT
// ============================================================================

/// Draft state of the feedback form
///
/// `rating` and `category` start unset (radio/select with no default).
/// Comments are never required.
#[derive(Debug, Clone, Default)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub rating: Option<String>,
    pub category: Option<Category>,
    pub comments: String,

    /// One message per failing field, keyed by field name
    pub errors: HashMap<&'static str, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate required fields, replacing the error map
    ///
    /// Returns true when the draft is submittable. Prior errors for fields
    /// that now pass are dropped, not merged.
    pub fn validate(&mut self) -> bool {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !email_matches(&self.email) {
            errors.insert("email", "Email is invalid".to_string());
        }

        if self.rating.is_none() {
            errors.insert("rating", "Rating is required".to_string());
        }

        if self.category.is_none() {
            errors.insert("category", "Category is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Build the immutable entry from a validated draft
    ///
    /// Stamps the creation timestamp and derives sentiment from the comment
    /// text. Draft values are carried over verbatim.
    pub fn build_entry(&self) -> FeedbackEntry {
        FeedbackEntry {
            name: self.name.clone(),
            email: self.email.clone(),
            rating: self.rating.clone().unwrap_or_default(),
            category: self.category.unwrap_or(Category::Other),
            comments: self.comments.clone(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            sentiment: sentiment::classify(&self.comments),
        }
    }

    /// Clear all fields and errors back to defaults
    pub fn reset(&mut self) {
        *self = FormDraft::default();
    }
}

// ============================================================================
// EMAIL PATTERN
// ============================================================================

/// Loose email shape check: some `\S+@\S+.\S+` substring must exist
///
/// A match cannot span whitespace, so each whitespace-delimited token is
/// checked for an '@' with at least one character before it and, after the
/// '@', a '.' with at least one character on each side.
fn email_matches(email: &str) -> bool {
    email.split_whitespace().any(token_matches)
}

fn token_matches(token: &str) -> bool {
    for (i, c) in token.char_indices() {
        if c != '@' || i == 0 {
            continue;
        }
        let rest = &token[i + 1..];
        for (j, d) in rest.char_indices() {
            if d == '.' && j > 0 && j + 1 < rest.len() {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Sentiment;

    fn filled_draft() -> FormDraft {
        FormDraft {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            rating: Some("5".to_string()),
            category: Some(Category::Product),
            comments: "great service".to_string(),
            errors: HashMap::new(),
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let mut draft = filled_draft();
        assert!(draft.validate());
        assert!(draft.errors.is_empty());
    }

    #[test]
    fn test_validate_flags_exactly_missing_fields() {
        let mut draft = filled_draft();
        draft.name = String::new();
        draft.rating = None;

        assert!(!draft.validate());
        assert_eq!(draft.errors.len(), 2);
        assert_eq!(draft.errors.get("name").unwrap(), "Name is required");
        assert_eq!(draft.errors.get("rating").unwrap(), "Rating is required");
        assert!(!draft.errors.contains_key("email"));
        assert!(!draft.errors.contains_key("category"));
    }

    #[test]
    fn test_validate_replaces_prior_errors() {
        let mut draft = filled_draft();
        draft.name = String::new();
        assert!(!draft.validate());
        assert!(draft.errors.contains_key("name"));

        draft.name = "Ann".to_string();
        draft.email = String::new();
        assert!(!draft.validate());
        assert!(!draft.errors.contains_key("name"));
        assert_eq!(draft.errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut draft = filled_draft();
        draft.name = "   ".to_string();
        assert!(!draft.validate());
        assert!(draft.errors.contains_key("name"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(email_matches("a@b.com"));
        assert!(email_matches("first.last@sub.example.org"));
        // a matching substring anywhere is enough
        assert!(email_matches("contact me at a@b.co please"));

        assert!(!email_matches("plainaddress"));
        assert!(!email_matches("@no-local.com"));
        assert!(!email_matches("a@nodomain"));
        assert!(!email_matches("a@b."));
        assert!(!email_matches("a@.com"));
    }

    #[test]
    fn test_invalid_email_message() {
        let mut draft = filled_draft();
        draft.email = "not-an-email".to_string();
        assert!(!draft.validate());
        assert_eq!(draft.errors.get("email").unwrap(), "Email is invalid");
    }

    #[test]
    fn test_build_entry_carries_draft_verbatim() {
        let draft = filled_draft();
        let entry = draft.build_entry();

        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.email, "a@b.com");
        assert_eq!(entry.rating, "5");
        assert_eq!(entry.category, Category::Product);
        assert_eq!(entry.comments, "great service");
        // derived, not copied
        assert_eq!(entry.sentiment, Sentiment::Positive);
        assert!(!entry.date.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = filled_draft();
        draft.name = String::new();
        draft.validate();
        assert!(!draft.errors.is_empty());

        draft.reset();
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.rating.is_none());
        assert!(draft.category.is_none());
        assert!(draft.comments.is_empty());
        assert!(draft.errors.is_empty());
    }
}
