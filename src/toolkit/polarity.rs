//! Lexicon-based polarity scoring.
//!
//! Every sentiment-bearing token produces one assessment. An intensifier
//! directly before it scales the assessment; a negator within the previous
//! few words flips and dampens it. The score is the mean of all assessments.

use super::lexicon::{self, INTENSIFIERS, NEGATORS, SENTIMENT};

/// Factor applied to a negated assessment.
const NEGATION_FACTOR: f64 = -0.5;

/// How many words a negator reaches forward.
const NEGATION_WINDOW: usize = 3;

/// Score a token sequence in [-1.0, 1.0]. No assessments scores 0.0.
pub fn score(tokens: &[String]) -> f64 {
    let mut assessments: Vec<f64> = Vec::new();
    let mut intensity: Option<f64> = None;
    let mut negation_left = 0usize;

    for token in tokens {
        let word = lexicon::key(token);
        let word = word.as_str();

        if let Some(&polarity) = SENTIMENT.get(word) {
            let mut assessment = polarity * intensity.take().unwrap_or(1.0);
            if negation_left > 0 {
                assessment *= NEGATION_FACTOR;
                negation_left = 0;
            }
            assessments.push(assessment);
            continue;
        }

        if NEGATORS.contains(word) {
            negation_left = NEGATION_WINDOW;
            intensity = None;
            continue;
        }

        if let Some(&factor) = INTENSIFIERS.get(word) {
            // "very very good" stacks
            intensity = Some(intensity.unwrap_or(1.0) * factor);
            continue;
        }

        intensity = None;
        negation_left = negation_left.saturating_sub(1);
    }

    if assessments.is_empty() {
        return 0.0;
    }

    let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
    let clamped = mean.clamp(-1.0, 1.0);
    // keep -0.0 out of the two-decimal display
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::tokenize::words;

    fn polarity(text: &str) -> f64 {
        score(&words(text))
    }

    #[test]
    fn test_no_sentiment_words_is_zero() {
        assert_eq!(polarity(""), 0.0);
        assert_eq!(polarity("The cat sat on the mat"), 0.0);
    }

    #[test]
    fn test_repeated_negative_word() {
        assert_eq!(polarity("This is a terrible, terrible product"), -1.0);
    }

    #[test]
    fn test_mean_of_assessments() {
        // good 0.7, bad -0.7
        assert!(polarity("good and bad").abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let plain = polarity("a good deal");
        let boosted = polarity("a very good deal");
        assert!(boosted > plain);
        assert!((boosted - 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_does_not_carry_past_other_words() {
        assert_eq!(polarity("very cheap good"), polarity("good"));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        assert!((polarity("not bad") - 0.35).abs() < 1e-9);
        assert!((polarity("don't miss this good deal") + 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_typographic_apostrophe_negates() {
        assert_eq!(
            polarity("Don\u{2019}t miss this good deal"),
            polarity("Don't miss this good deal")
        );
        assert_eq!(polarity("isn\u{2019}t bad"), polarity("isn't bad"));
    }

    #[test]
    fn test_negation_window_expires() {
        assert_eq!(polarity("not one of the many good"), polarity("good"));
    }

    #[test]
    fn test_clamped_to_unit_range() {
        assert_eq!(polarity("extremely excellent"), 1.0);
        assert_eq!(polarity("absolutely terrible"), -1.0);
    }

    #[test]
    fn test_negated_zero_is_positive_zero() {
        let s = polarity("not");
        assert_eq!(s, 0.0);
        assert!(s.is_sign_positive());
    }
}
