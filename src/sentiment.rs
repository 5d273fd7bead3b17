// 💬 Sentiment Classifier - Keyword-count comparison
// Pure function: comment text → positive / negative / neutral

use crate::feedback::Sentiment;

/// Fixed positive keyword list (exact token match only)
const POSITIVE_WORDS: [&str; 6] = ["good", "great", "excellent", "amazing", "love", "best"];

/// Fixed negative keyword list (exact token match only)
const NEGATIVE_WORDS: [&str; 6] = ["bad", "poor", "terrible", "awful", "worst", "hate"];

/// Classify free-form comment text by keyword counting
///
/// Empty text is neutral. Otherwise the text is lowercased and split on
/// whitespace; tokens are matched against the two word lists exactly (no
/// stemming, no punctuation stripping). Strictly more positive matches wins,
/// strictly more negative wins, a tie is neutral.
pub fn classify(text: &str) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }

    let lowered = text.to_lowercase();
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        }
        if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        }
    }

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(classify("the delivery arrived on tuesday"), Sentiment::Neutral);
    }

    #[test]
    fn test_positive_majority() {
        assert_eq!(classify("great service"), Sentiment::Positive);
        assert_eq!(classify("good good bad"), Sentiment::Positive);
    }

    #[test]
    fn test_negative_majority() {
        assert_eq!(classify("terrible awful support"), Sentiment::Negative);
        assert_eq!(classify("love it but worst checkout and poor packaging"), Sentiment::Negative);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(classify("good but bad"), Sentiment::Neutral);
        assert_eq!(classify("love hate"), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("GREAT Product"), Sentiment::Positive);
        assert_eq!(classify("AwFuL"), Sentiment::Negative);
    }

    #[test]
    fn test_exact_token_match_only() {
        // punctuation attached to a keyword defeats the match
        assert_eq!(classify("great!"), Sentiment::Neutral);
        // substrings do not count
        assert_eq!(classify("goodness gracious"), Sentiment::Neutral);
    }
}
