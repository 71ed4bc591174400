//! Output formatting for analysis results.
//!
//! Supports three output formats:
//! - Plain: the labeled section text shown in the results pane
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::analyzer::{AnalysisResult, SentimentLabel};

/// Shown for a section with nothing found.
pub const EMPTY_VALUE: &str = "None";

/// Section labels, in display order.
pub mod labels {
    pub const SENTIMENT: &str = "Sentiment";
    pub const WORD_COUNT: &str = "Word Count";
    pub const CHARACTER_COUNT: &str = "Character Count";
    pub const KEY_NOUNS: &str = "Key Nouns";
    pub const POWER_WORDS: &str = "Power Words";
    pub const URGENCY_WORDS: &str = "Urgency Words";
}

/// Output format for one-shot analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Pretty,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Format::Plain),
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            _ => Err(format!(
                "invalid format {:?}, must be 'plain', 'pretty', or 'json'",
                s
            )),
        }
    }
}

/// Join a set for display, or `None` when empty.
pub fn join_or_none(words: &BTreeSet<String>) -> String {
    if words.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        words.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Labeled sections in display order.
pub fn sections(result: &AnalysisResult) -> [(&'static str, String); 6] {
    [
        (labels::SENTIMENT, result.sentiment.to_string()),
        (labels::WORD_COUNT, result.word_count.to_string()),
        (labels::CHARACTER_COUNT, result.character_count.to_string()),
        (labels::KEY_NOUNS, join_or_none(&result.key_nouns)),
        (labels::POWER_WORDS, join_or_none(&result.power_words)),
        (labels::URGENCY_WORDS, join_or_none(&result.urgency_words)),
    ]
}

// =============================================================================
// Plain Format
// =============================================================================

/// Render the results pane text.
///
/// Each section is a label line followed by an indented value line and a
/// blank line.
pub fn render_plain(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for (label, value) in sections(result) {
        out.push_str(&format!("-> {}:\n   {}\n\n", label, value));
    }
    out
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub headline: String,
    pub sentiment: JsonSentiment,
    pub word_count: usize,
    pub character_count: usize,
    pub key_nouns: Vec<String>,
    pub power_words: Vec<String>,
    pub urgency_words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl JsonReport {
    pub fn new(headline: &str, result: &AnalysisResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            headline: headline.to_string(),
            sentiment: JsonSentiment {
                label: result.sentiment.label,
                score: result.sentiment.score,
            },
            word_count: result.word_count,
            character_count: result.character_count,
            key_nouns: result.key_nouns.iter().cloned().collect(),
            power_words: result.power_words.iter().cloned().collect(),
            urgency_words: result.urgency_words.iter().cloned().collect(),
        }
    }
}

/// Render results as pretty-printed JSON.
pub fn render_json(headline: &str, result: &AnalysisResult) -> anyhow::Result<String> {
    let report = JsonReport::new(headline, result);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write results in JSON format.
pub fn write_json(headline: &str, result: &AnalysisResult) -> anyhow::Result<()> {
    println!("{}", render_json(headline, result)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(headline: &str, result: &AnalysisResult) {
    println!();
    print!("  ");
    print!("{}", "headliner".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Headline: ".dimmed());
    println!("{}", headline);
    println!();

    for (label, value) in sections(result) {
        println!("  {}", format!("{}:", label).bold());
        print!("    ");
        match label {
            labels::SENTIMENT => write_colored_sentiment(result.sentiment.label, &value),
            labels::POWER_WORDS | labels::URGENCY_WORDS => write_colored_words(&value),
            _ => print!("{}", value),
        }
        println!();
        println!();
    }
}

fn write_colored_sentiment(label: SentimentLabel, value: &str) {
    match label {
        SentimentLabel::Positive => print!("{}", value.green()),
        SentimentLabel::Negative => print!("{}", value.red()),
        SentimentLabel::Neutral => print!("{}", value.yellow()),
    }
}

fn write_colored_words(value: &str) {
    if value == EMPTY_VALUE {
        print!("{}", value.dimmed());
    } else {
        print!("{}", value.blue().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Sentiment;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            sentiment: Sentiment::from_score(0.35),
            word_count: 4,
            character_count: 24,
            key_nouns: ["Secret".to_string()].into_iter().collect(),
            power_words: ["discover".to_string(), "secret".to_string()]
                .into_iter()
                .collect(),
            urgency_words: BTreeSet::new(),
        }
    }

    #[test]
    fn test_render_plain_layout() {
        let text = render_plain(&sample());
        let expected = "\
-> Sentiment:
   Positive (Score: 0.35)

-> Word Count:
   4

-> Character Count:
   24

-> Key Nouns:
   Secret

-> Power Words:
   discover, secret

-> Urgency Words:
   None

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&BTreeSet::new()), "None");
        let words: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_or_none(&words), "a, b");
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json("Discover the Secret", &sample()).unwrap();
        let report: JsonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.headline, "Discover the Secret");
        assert_eq!(report.sentiment.label, SentimentLabel::Positive);
        assert_eq!(report.sentiment.score, 0.35);
        assert_eq!(report.power_words, vec!["discover", "secret"]);
        assert!(report.urgency_words.is_empty());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sentiment"]["label"], "positive");
        assert!(value["urgency_words"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("plain".parse::<Format>().unwrap(), Format::Plain);
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert!("sarif".parse::<Format>().is_err());
    }
}
