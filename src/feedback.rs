// 📋 Feedback Entry - Core data model
// Entries are immutable once created; the collection is append-only.

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Product,
    Service,
    Support,
    Other,
}

impl Category {
    /// All categories, in filter-button order
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Service,
        Category::Support,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Product => "product",
            Category::Service => "service",
            Category::Support => "support",
            Category::Other => "other",
        }
    }

    /// Capitalized form for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Product => "Product",
            Category::Service => "Service",
            Category::Support => "Support",
            Category::Other => "Other",
        }
    }
}

// ============================================================================
// SENTIMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Capitalized form for display
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

// ============================================================================
// FEEDBACK ENTRY
// ============================================================================

/// A single submitted feedback entry
///
/// Field names match the persisted JSON layout exactly. `rating` is kept as
/// the raw text of the radio control ("1".."5"); `sentiment` is derived once
/// at submission time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub email: String,
    pub rating: String,
    pub category: Category,
    pub comments: String,

    /// ISO-8601 creation timestamp, assigned at submission
    pub date: String,

    pub sentiment: Sentiment,
}

impl FeedbackEntry {
    /// Numeric star value; 0 when the stored text does not parse
    pub fn stars(&self) -> u32 {
        self.rating.parse().unwrap_or(0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Support).unwrap();
        assert_eq!(json, "\"support\"");

        let back: Category = serde_json::from_str("\"product\"").unwrap();
        assert_eq!(back, Category::Product);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::Positive.as_str(), "positive");
        assert_eq!(Sentiment::Positive.label(), "Positive");
        assert_eq!(Sentiment::Neutral.label(), "Neutral");
    }

    #[test]
    fn test_stars_parses_rating_text() {
        let mut entry = FeedbackEntry {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            rating: "5".to_string(),
            category: Category::Product,
            comments: String::new(),
            date: "2024-01-15T10:30:00Z".to_string(),
            sentiment: Sentiment::Neutral,
        };
        assert_eq!(entry.stars(), 5);

        entry.rating = "not-a-number".to_string();
        assert_eq!(entry.stars(), 0);
    }

    #[test]
    fn test_entry_json_field_names() {
        let entry = FeedbackEntry {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            rating: "4".to_string(),
            category: Category::Service,
            comments: "great".to_string(),
            date: "2024-01-15T10:30:00Z".to_string(),
            sentiment: Sentiment::Positive,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["rating"], "4");
        assert_eq!(value["category"], "service");
        assert_eq!(value["comments"], "great");
        assert_eq!(value["sentiment"], "positive");
    }
}
