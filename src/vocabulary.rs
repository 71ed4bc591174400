//! Power and urgency vocabulary.
//!
//! A [`Vocabulary`] is built once at start-up (from the built-in lists or a
//! vocabulary file) and handed to the analyzer. It is never mutated after
//! construction.

use once_cell::sync::Lazy;
use phf::phf_set;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Built-in power words.
pub static POWER_WORDS: phf::Set<&'static str> = phf_set! {
    "amazing",
    "secret",
    "powerful",
    "proven",
    "guaranteed",
    "effortless",
    "best",
    "you",
    "free",
    "new",
    "discover",
    "ultimate",
    "simple",
    "exclusive",
    "instantly",
};

/// Built-in urgency words.
///
/// "act now" is a phrase and can never equal a single token, so it never
/// matches. It stays in the list as shipped.
pub static URGENCY_WORDS: phf::Set<&'static str> = phf_set! {
    "now",
    "today",
    "hurry",
    "limited",
    "final",
    "deadline",
    "urgent",
    "act now",
};

static BUILTIN: Lazy<Vocabulary> = Lazy::new(|| Vocabulary {
    power: POWER_WORDS.iter().map(|w| w.to_string()).collect(),
    urgency: URGENCY_WORDS.iter().map(|w| w.to_string()).collect(),
});

/// Errors building a vocabulary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("{list} list contains a blank entry")]
    BlankEntry { list: &'static str },
}

/// The two marketing word sets, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    power: BTreeSet<String>,
    urgency: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// The built-in power and urgency lists.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a vocabulary from custom lists.
    ///
    /// Entries are trimmed and lower-cased. Blank entries are rejected.
    pub fn new<P, U, S, T>(power: P, urgency: U) -> Result<Self, VocabularyError>
    where
        P: IntoIterator<Item = S>,
        U: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            power: normalize("power", power)?,
            urgency: normalize("urgency", urgency)?,
        })
    }

    pub fn power(&self) -> &BTreeSet<String> {
        &self.power
    }

    pub fn urgency(&self) -> &BTreeSet<String> {
        &self.urgency
    }

    /// Power words equal to one of the given lower-cased tokens.
    pub fn power_matches(&self, words: &[String]) -> BTreeSet<String> {
        intersect(&self.power, words)
    }

    /// Urgency words equal to one of the given lower-cased tokens.
    pub fn urgency_matches(&self, words: &[String]) -> BTreeSet<String> {
        intersect(&self.urgency, words)
    }

    /// Entries containing whitespace. Matching is per token, so these never match.
    pub fn multi_word_entries(&self) -> Vec<&str> {
        self.power
            .iter()
            .chain(self.urgency.iter())
            .filter(|w| w.contains(char::is_whitespace))
            .map(String::as_str)
            .collect()
    }
}

fn normalize<I, S>(list: &'static str, entries: I) -> Result<BTreeSet<String>, VocabularyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| {
            let word = e.as_ref().trim().to_lowercase();
            if word.is_empty() {
                Err(VocabularyError::BlankEntry { list })
            } else {
                Ok(word)
            }
        })
        .collect()
}

fn intersect(set: &BTreeSet<String>, words: &[String]) -> BTreeSet<String> {
    words
        .iter()
        .filter(|w| set.contains(w.as_str()))
        .cloned()
        .collect()
}
