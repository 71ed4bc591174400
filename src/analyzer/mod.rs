//! Headline analysis.
//!
//! [`Analyzer::analyze`] maps one headline to an [`AnalysisResult`]:
//! sentiment, word and character counts, key nouns, and the power and
//! urgency words it contains. Linguistic work is delegated to a
//! [`Toolkit`]; the analyzer itself only counts, filters and intersects.

mod sentiment;

pub use sentiment::{thresholds, Sentiment, SentimentLabel};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

use crate::toolkit::{LexiconToolkit, Toolkit, ToolkitError};
use crate::vocabulary::Vocabulary;

/// Errors that make a headline unanalyzable.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Toolkit(#[from] ToolkitError),
    #[error("polarity {0} is outside [-1.0, 1.0]")]
    PolarityOutOfRange(f64),
    #[error("tagger returned {tags} tags for {tokens} tokens")]
    TagCountMismatch { tokens: usize, tags: usize },
}

/// Result of analyzing one headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Number of tokens the toolkit produced.
    pub word_count: usize,
    /// Characters in the raw input, whitespace and punctuation included.
    pub character_count: usize,
    /// Distinct noun tokens, case preserved.
    pub key_nouns: BTreeSet<String>,
    pub power_words: BTreeSet<String>,
    pub urgency_words: BTreeSet<String>,
}

/// Headline analyzer over a toolkit and an injected vocabulary.
pub struct Analyzer<T = LexiconToolkit> {
    toolkit: T,
    vocabulary: Vocabulary,
}

impl Analyzer<LexiconToolkit> {
    /// Analyzer using the built-in toolkit.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::new(LexiconToolkit::new(), vocabulary)
    }
}

impl Default for Analyzer<LexiconToolkit> {
    fn default() -> Self {
        Self::with_vocabulary(Vocabulary::builtin())
    }
}

impl<T: Toolkit> Analyzer<T> {
    pub fn new(toolkit: T, vocabulary: Vocabulary) -> Self {
        Self {
            toolkit,
            vocabulary,
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze a headline.
    ///
    /// Empty or blank input is valid and yields zero counts, no nouns,
    /// no vocabulary matches and a neutral 0.0 sentiment.
    pub fn analyze(&self, headline: &str) -> Result<AnalysisResult, AnalysisError> {
        let tokens = self.toolkit.tokenize(headline)?;

        let score = self.toolkit.polarity(headline)?;
        // NaN fails the range check too
        if !(-1.0..=1.0).contains(&score) {
            return Err(AnalysisError::PolarityOutOfRange(score));
        }

        let tagged = self.toolkit.pos_tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(AnalysisError::TagCountMismatch {
                tokens: tokens.len(),
                tags: tagged.len(),
            });
        }

        let key_nouns: BTreeSet<String> = tagged
            .into_iter()
            .filter(|(_, tag)| tag.is_noun())
            .map(|(word, _)| word)
            .collect();

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let power_words = self.vocabulary.power_matches(&lowered);
        let urgency_words = self.vocabulary.urgency_matches(&lowered);

        debug!(
            tokens = tokens.len(),
            score,
            nouns = key_nouns.len(),
            power = power_words.len(),
            urgency = urgency_words.len(),
            "analyzed headline"
        );

        Ok(AnalysisResult {
            sentiment: Sentiment::from_score(score),
            word_count: tokens.len(),
            character_count: headline.chars().count(),
            key_nouns,
            power_words,
            urgency_words,
        })
    }
}
