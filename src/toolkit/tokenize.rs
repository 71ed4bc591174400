//! Word tokenization.
//!
//! A word is a run of letters, combining marks or digits, optionally joined
//! by inner apostrophes, hyphens or periods (`don't`, `state-of-the-art`,
//! `U.S`). A clitic standing on its own (`'s`) is also a word. Punctuation
//! and symbols between words are dropped. Contractions are then split the
//! Penn-Treebank way:
//!
//! - `don't` -> `do`, `n't`
//! - `it's` -> `it`, `'s`
//! - `we'll` -> `we`, `'ll`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PATTERN: Regex =
        Regex::new(concat!(
            r"['\u{2019}](?i:s|re|ve|ll|d|m)\b",
            r"|[\p{L}\p{M}\p{N}]+(?:['\u{2019}.\-][\p{L}\p{M}\p{N}]+)*",
        ))
        .unwrap();
}

/// Clitic suffixes split off after an apostrophe (lower-cased, apostrophe excluded).
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Split text into word tokens.
pub fn words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in WORD_PATTERN.find_iter(text) {
        split_clitics(m.as_str(), &mut tokens);
    }
    tokens
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    let Some((apos, _)) = word.char_indices().rev().find(|(_, c)| is_apostrophe(*c)) else {
        out.push(word.to_string());
        return;
    };

    let stem = &word[..apos];
    let suffix: String = word[apos..].chars().skip(1).collect::<String>().to_lowercase();

    // n't belongs to the suffix: "don't" -> "do" + "n't"
    if suffix == "t" && stem.chars().count() > 1 {
        if let Some((n_idx, n)) = stem.char_indices().last() {
            if n == 'n' || n == 'N' {
                out.push(stem[..n_idx].to_string());
                out.push(word[n_idx..].to_string());
                return;
            }
        }
    }

    if CLITICS.contains(&suffix.as_str()) && !stem.is_empty() {
        out.push(stem.to_string());
        out.push(word[apos..].to_string());
        return;
    }

    out.push(word.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_drop_punctuation() {
        assert_eq!(words("Discover the Secret Now!"), vec!["Discover", "the", "Secret", "Now"]);
        assert_eq!(words("FREE Offer \u{2014} Act NOW"), vec!["FREE", "Offer", "Act", "NOW"]);
    }

    #[test]
    fn test_words_empty_and_whitespace() {
        assert!(words("").is_empty());
        assert!(words("   \t ").is_empty());
        assert!(words("!!! ... ---").is_empty());
    }

    #[test]
    fn test_words_split_contractions() {
        assert_eq!(words("Don't wait"), vec!["Do", "n't", "wait"]);
        assert_eq!(words("it's here"), vec!["it", "'s", "here"]);
        assert_eq!(words("we\u{2019}ll see"), vec!["we", "\u{2019}ll", "see"]);
        assert_eq!(words("can't"), vec!["ca", "n't"]);
    }

    #[test]
    fn test_words_keep_inner_joiners() {
        assert_eq!(words("state-of-the-art tools"), vec!["state-of-the-art", "tools"]);
        assert_eq!(words("o'clock"), vec!["o'clock"]);
        assert_eq!(words("version 2.5 ships"), vec!["version", "2.5", "ships"]);
    }

    #[test]
    fn test_words_unicode() {
        assert_eq!(words("Café déjà vu"), vec!["Café", "déjà", "vu"]);
    }

    #[test]
    fn test_words_decomposed_unicode() {
        let nfd = "Free re\u{301}sume\u{301} tips";
        assert_eq!(words(nfd), vec!["Free", "re\u{301}sume\u{301}", "tips"]);
        assert_eq!(words(nfd).len(), words("Free r\u{e9}sum\u{e9} tips").len());
    }

    #[test]
    fn test_words_standalone_clitic() {
        assert_eq!(words("'s"), vec!["'s"]);
        assert_eq!(words("the \u{2019}re part"), vec!["the", "\u{2019}re", "part"]);
        // a quoted word keeps its letters
        assert_eq!(words("'Secret' 'sup"), vec!["Secret", "sup"]);
    }
}
