// 📊 Summary View - Derived aggregates over the collection
// Filtered subset, average rating, and a five-bucket star histogram.
// Everything here is recomputed from scratch on demand; nothing is cached
// and nothing mutates the underlying collection.

use crate::feedback::{Category, FeedbackEntry};

// ============================================================================
// FILTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(c) => c.label(),
        }
    }

    pub fn matches(&self, entry: &FeedbackEntry) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => entry.category == *c,
        }
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Aggregates derived from the collection under the active filter
#[derive(Debug, Clone)]
pub struct Summary {
    pub filtered: Vec<FeedbackEntry>,
    /// Mean star rating over the filtered set, one-decimal precision;
    /// exactly 0.0 when the filtered set is empty
    pub average: f64,
    /// Entries per star value 1..=5 over the filtered set
    pub histogram: [u64; 5],
}

impl Summary {
    pub fn compute(entries: &[FeedbackEntry], filter: Filter) -> Self {
        let filtered: Vec<FeedbackEntry> = entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        let average = if filtered.is_empty() {
            0.0
        } else {
            let total: u64 = filtered.iter().map(|e| u64::from(e.stars())).sum();
            let mean = total as f64 / filtered.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let mut histogram = [0u64; 5];
        for entry in &filtered {
            let stars = entry.stars();
            if (1..=5).contains(&stars) {
                histogram[(stars - 1) as usize] += 1;
            }
        }

        Summary {
            filtered,
            average,
            histogram,
        }
    }

    /// Average formatted to one decimal, for display
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// Per-category entry counts over the whole collection
pub fn category_counts(entries: &[FeedbackEntry]) -> [(Category, usize); 4] {
    Category::ALL.map(|c| (c, entries.iter().filter(|e| e.category == c).count()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Sentiment;

    fn entry(rating: &str, category: Category) -> FeedbackEntry {
        FeedbackEntry {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            rating: rating.to_string(),
            category,
            comments: String::new(),
            date: "2024-01-15T10:30:00.000Z".to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn test_average_empty_set_is_zero() {
        let summary = Summary::compute(&[], Filter::All);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.average_label(), "0.0");
    }

    #[test]
    fn test_average_one_decimal() {
        let entries = vec![entry("3", Category::Product), entry("5", Category::Product)];
        let summary = Summary::compute(&entries, Filter::All);
        assert_eq!(summary.average, 4.0);
        assert_eq!(summary.average_label(), "4.0");

        let entries = vec![
            entry("5", Category::Product),
            entry("5", Category::Product),
            entry("4", Category::Product),
        ];
        let summary = Summary::compute(&entries, Filter::All);
        assert_eq!(summary.average, 4.7);
    }

    #[test]
    fn test_filter_selects_category_only() {
        let entries = vec![
            entry("5", Category::Product),
            entry("1", Category::Support),
            entry("3", Category::Product),
        ];

        let summary = Summary::compute(&entries, Filter::Category(Category::Product));
        assert_eq!(summary.filtered.len(), 2);
        assert_eq!(summary.average, 4.0);

        // switching filters never touches the source collection
        assert_eq!(entries.len(), 3);
        let all = Summary::compute(&entries, Filter::All);
        assert_eq!(all.filtered.len(), 3);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let entries = vec![entry("5", Category::Product)];
        let summary = Summary::compute(&entries, Filter::Category(Category::Other));
        assert!(summary.filtered.is_empty());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.histogram, [0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_histogram_buckets() {
        let entries = vec![
            entry("1", Category::Product),
            entry("3", Category::Product),
            entry("3", Category::Service),
            entry("5", Category::Support),
        ];
        let summary = Summary::compute(&entries, Filter::All);
        assert_eq!(summary.histogram, [1, 0, 2, 0, 1]);
    }

    #[test]
    fn test_histogram_ignores_unparseable_rating() {
        let entries = vec![entry("5", Category::Product), entry("bogus", Category::Product)];
        let summary = Summary::compute(&entries, Filter::All);
        assert_eq!(summary.histogram, [0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_category_counts() {
        let entries = vec![
            entry("5", Category::Product),
            entry("4", Category::Product),
            entry("2", Category::Other),
        ];
        let counts = category_counts(&entries);
        assert_eq!(counts[0], (Category::Product, 2));
        assert_eq!(counts[1], (Category::Service, 0));
        assert_eq!(counts[3], (Category::Other, 1));
    }
}
