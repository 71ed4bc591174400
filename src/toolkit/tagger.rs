//! Rule-based part-of-speech tagging with Penn-Treebank tags.
//!
//! Each token is tagged by the first rule that applies:
//! 1. numbers are `CD`
//! 2. closed-class lexicon (determiners, pronouns, prepositions, ...)
//! 3. open-class lexicon (common verbs and adjectives)
//! 4. a capitalized word that does not open the text is `NNP`
//! 5. suffix rules (`-ly`, `-ing`, `-ed`, `-ous`, `-s`, ...)
//! 6. `NN`
//!
//! Context then corrects two cases: a base verb right after a determiner or
//! possessive is a noun, and an unknown noun right after `to` is a verb.

use super::lexicon::{self, CLOSED_CLASS, OPEN_CLASS};

/// Penn-Treebank part-of-speech tags.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    CC,
    CD,
    DT,
    EX,
    IN,
    JJ,
    JJR,
    JJS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    POS,
    PRP,
    PRPS,
    RB,
    RP,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    WRB,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::CC => "CC",
            Tag::CD => "CD",
            Tag::DT => "DT",
            Tag::EX => "EX",
            Tag::IN => "IN",
            Tag::JJ => "JJ",
            Tag::JJR => "JJR",
            Tag::JJS => "JJS",
            Tag::MD => "MD",
            Tag::NN => "NN",
            Tag::NNS => "NNS",
            Tag::NNP => "NNP",
            Tag::NNPS => "NNPS",
            Tag::POS => "POS",
            Tag::PRP => "PRP",
            Tag::PRPS => "PRP$",
            Tag::RB => "RB",
            Tag::RP => "RP",
            Tag::TO => "TO",
            Tag::UH => "UH",
            Tag::VB => "VB",
            Tag::VBD => "VBD",
            Tag::VBG => "VBG",
            Tag::VBN => "VBN",
            Tag::VBP => "VBP",
            Tag::VBZ => "VBZ",
            Tag::WDT => "WDT",
            Tag::WP => "WP",
            Tag::WRB => "WRB",
        }
    }

    /// Singular or plural, common or proper noun.
    pub fn is_noun(&self) -> bool {
        self.as_str().starts_with("NN")
    }

    fn opens_noun_phrase(&self) -> bool {
        matches!(self, Tag::DT | Tag::PRPS | Tag::POS)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Adjective-forming suffixes.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];

/// Tag every token. Returns one pair per token, in order.
pub fn tag(tokens: &[String]) -> Vec<(String, Tag)> {
    let mut tagged: Vec<(String, Tag)> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let base = lexical_tag(token, i == 0);
        let previous = tagged.last().map(|(_, t)| *t);
        tagged.push((token.clone(), contextual_tag(base, previous, token)));
    }

    tagged
}

fn lexical_tag(token: &str, first: bool) -> Tag {
    if is_number(token) {
        return Tag::CD;
    }

    let lower = lexicon::key(token);
    if let Some(&tag) = CLOSED_CLASS.get(lower.as_str()) {
        return tag;
    }
    if let Some(&tag) = OPEN_CLASS.get(lower.as_str()) {
        return tag;
    }

    if !first && starts_uppercase(token) {
        return Tag::NNP;
    }

    suffix_tag(&lower)
}

fn contextual_tag(tag: Tag, previous: Option<Tag>, token: &str) -> Tag {
    match previous {
        Some(p) if p.opens_noun_phrase() && matches!(tag, Tag::VB | Tag::VBP) => Tag::NN,
        Some(Tag::TO)
            if tag == Tag::NN && !OPEN_CLASS.contains_key(lexicon::key(token).as_str()) =>
        {
            Tag::VB
        }
        _ => tag,
    }
}

fn suffix_tag(lower: &str) -> Tag {
    let len = lower.chars().count();

    if len > 3 && lower.ends_with("ly") {
        return Tag::RB;
    }
    if len > 4 && lower.ends_with("ing") {
        return Tag::VBG;
    }
    if len > 3 && lower.ends_with("ed") {
        return Tag::VBD;
    }
    if len > 4 && lower.ends_with("est") {
        return Tag::JJS;
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Tag::JJ;
    }
    if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Tag::NNS;
    }

    Tag::NN
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == '-')
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, Tag)> {
        tag(&crate::toolkit::tokenize::words(text))
    }

    fn tag_of(tagged: &[(String, Tag)], word: &str) -> Tag {
        tagged
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| *t)
            .unwrap_or_else(|| panic!("{word} not tagged"))
    }

    #[test]
    fn test_simple_sentence() {
        let tagged = tags("The cat sat on the mat");
        let expected = [Tag::DT, Tag::NN, Tag::VBD, Tag::IN, Tag::DT, Tag::NN];
        let actual: Vec<Tag> = tagged.iter().map(|(_, t)| *t).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        let tagged = tags("Discover the Secret Now!");
        assert_eq!(tag_of(&tagged, "Discover"), Tag::VB);
        assert_eq!(tag_of(&tagged, "Secret"), Tag::NNP);
        assert_eq!(tag_of(&tagged, "Now"), Tag::RB);
    }

    #[test]
    fn test_lexicon_wins_over_capitalization() {
        let tagged = tags("FREE Offer for YOU today");
        assert_eq!(tag_of(&tagged, "FREE"), Tag::JJ);
        assert_eq!(tag_of(&tagged, "Offer"), Tag::NNP);
        assert_eq!(tag_of(&tagged, "YOU"), Tag::PRP);
        assert_eq!(tag_of(&tagged, "today"), Tag::NN);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(suffix_tag("quickly"), Tag::RB);
        assert_eq!(suffix_tag("selling"), Tag::VBG);
        assert_eq!(suffix_tag("launched"), Tag::VBD);
        assert_eq!(suffix_tag("famous"), Tag::JJ);
        assert_eq!(suffix_tag("cheapest"), Tag::JJS);
        assert_eq!(suffix_tag("tricks"), Tag::NNS);
        assert_eq!(suffix_tag("glass"), Tag::NN);
        assert_eq!(suffix_tag("bonus"), Tag::NN);
        assert_eq!(suffix_tag("analysis"), Tag::NN);
        assert_eq!(suffix_tag("widget"), Tag::NN);
    }

    #[test]
    fn test_numbers() {
        let tagged = tags("Top 10 tips for 2024");
        assert_eq!(tag_of(&tagged, "10"), Tag::CD);
        assert_eq!(tag_of(&tagged, "2024"), Tag::CD);
        assert_eq!(tag_of(&tagged, "tips"), Tag::NNS);
    }

    #[test]
    fn test_verb_after_determiner_is_noun() {
        let tagged = tags("Place your order");
        assert_eq!(tag_of(&tagged, "order"), Tag::NN);
        let tagged = tags("Order now");
        assert_eq!(tag_of(&tagged, "Order"), Tag::VB);
    }

    #[test]
    fn test_unknown_word_after_to_is_verb() {
        let tagged = tags("ways to declutter");
        assert_eq!(tag_of(&tagged, "declutter"), Tag::VB);
        let tagged = tags("back to today");
        assert_eq!(tag_of(&tagged, "today"), Tag::NN);
    }

    #[test]
    fn test_clitics() {
        let tagged = tags("It's the brand's best");
        assert_eq!(tag_of(&tagged, "'s"), Tag::POS);
        assert_eq!(tag_of(&tagged, "best"), Tag::JJS);
        assert_eq!(tag_of(&tagged, "brand"), Tag::NN);
    }

    #[test]
    fn test_typographic_clitics() {
        let tagged = tags("Don\u{2019}t miss the brand\u{2019}s deal");
        assert_eq!(tag_of(&tagged, "n\u{2019}t"), Tag::RB);
        assert_eq!(tag_of(&tagged, "\u{2019}s"), Tag::POS);

        let nouns: Vec<&str> = tagged
            .iter()
            .filter(|(_, t)| t.is_noun())
            .map(|(w, _)| w.as_str())
            .collect();
        assert_eq!(nouns, vec!["brand", "deal"]);

        assert_eq!(tag_of(&tags("we\u{2019}ll see"), "\u{2019}ll"), Tag::MD);
    }

    #[test]
    fn test_standalone_clitic_is_possessive() {
        assert_eq!(tags("'s"), vec![("'s".to_string(), Tag::POS)]);
        assert_eq!(tags("\u{2019}s"), vec![("\u{2019}s".to_string(), Tag::POS)]);
    }

    #[test]
    fn test_noun_tags() {
        for t in [Tag::NN, Tag::NNS, Tag::NNP, Tag::NNPS] {
            assert!(t.is_noun());
        }
        for t in [Tag::JJ, Tag::VB, Tag::PRP, Tag::DT, Tag::RB] {
            assert!(!t.is_noun());
        }
        assert_eq!(Tag::PRPS.to_string(), "PRP$");
    }
}
