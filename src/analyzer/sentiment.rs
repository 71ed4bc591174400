//! Sentiment classification from a polarity score.

use serde::{Deserialize, Serialize};

/// Classification thresholds. Scores equal to a threshold are neutral.
pub mod thresholds {
    pub const POSITIVE: f64 = 0.1;
    pub const NEGATIVE: f64 = -0.1;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity score.
    pub fn classify(score: f64) -> Self {
        if score > thresholds::POSITIVE {
            SentimentLabel::Positive
        } else if score < thresholds::NEGATIVE {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classified sentiment with the full-precision score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        Self {
            label: SentimentLabel::classify(score),
            score,
        }
    }
}

impl std::fmt::Display for Sentiment {
    /// `Positive (Score: 0.80)`; the score is rounded for display only.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Score: {:.2})", self.label, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(SentimentLabel::classify(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::classify(0.100001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::classify(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(-0.100001), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::classify(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_display_rounds_but_keeps_precision() {
        let sentiment = Sentiment::from_score(0.456789);
        assert_eq!(sentiment.to_string(), "Positive (Score: 0.46)");
        assert_eq!(sentiment.score, 0.456789);

        assert_eq!(Sentiment::from_score(0.0).to_string(), "Neutral (Score: 0.00)");
        assert_eq!(Sentiment::from_score(-1.0).to_string(), "Negative (Score: -1.00)");
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
