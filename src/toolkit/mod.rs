//! Natural-language capabilities the analyzer depends on.
//!
//! The analyzer only needs three operations: split text into word tokens,
//! score the polarity of a text, and tag tokens with a part of speech.
//! They sit behind the [`Toolkit`] trait so a different backend can be
//! plugged in without touching the analysis code.
//!
//! [`LexiconToolkit`] is the built-in backend. It is rule and lexicon based:
//! - `tokenize`: Unicode word runs with Penn-Treebank clitic splitting
//! - `polarity`: averaged adjective/adverb lexicon scores with intensifiers
//!   and negation
//! - `pos_tag`: closed-class lexicon, open-class lexicon, then suffix and
//!   context rules

mod lexicon;
mod polarity;
mod tagger;
mod tokenize;

use thiserror::Error;

pub use tagger::Tag;

/// Errors a toolkit backend can report.
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("tokenization failed: {0}")]
    Tokenize(String),
    #[error("sentiment scoring failed: {0}")]
    Polarity(String),
    #[error("part-of-speech tagging failed: {0}")]
    Tagging(String),
}

/// NLP capability set consumed by the analyzer.
pub trait Toolkit {
    /// Split text into word tokens, in order, without punctuation tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ToolkitError>;

    /// Score the sentiment of a text in [-1.0, 1.0].
    fn polarity(&self, text: &str) -> Result<f64, ToolkitError>;

    /// Tag each token with its part of speech.
    ///
    /// Implementations must return exactly one pair per input token.
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, Tag)>, ToolkitError>;
}

/// Built-in lexicon and rule based toolkit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconToolkit;

impl LexiconToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl Toolkit for LexiconToolkit {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        Ok(tokenize::words(text))
    }

    fn polarity(&self, text: &str) -> Result<f64, ToolkitError> {
        let tokens = tokenize::words(text);
        Ok(polarity::score(&tokens))
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, Tag)>, ToolkitError> {
        Ok(tagger::tag(tokens))
    }
}

impl<T: Toolkit + ?Sized> Toolkit for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        (**self).tokenize(text)
    }

    fn polarity(&self, text: &str) -> Result<f64, ToolkitError> {
        (**self).polarity(text)
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, Tag)>, ToolkitError> {
        (**self).pos_tag(tokens)
    }
}

impl<T: Toolkit + ?Sized> Toolkit for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        (**self).tokenize(text)
    }

    fn polarity(&self, text: &str) -> Result<f64, ToolkitError> {
        (**self).polarity(text)
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, Tag)>, ToolkitError> {
        (**self).pos_tag(tokens)
    }
}
