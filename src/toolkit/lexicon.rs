//! Static lexicons for the built-in toolkit.
//!
//! All keys are lower-case and spelled with ASCII apostrophes; look tokens
//! up through [`key`]. Sentiment values are polarities in [-1.0, 1.0];
//! zero-polarity words are left out.

use phf::{phf_map, phf_set};

use super::tagger::Tag;

/// Lookup key for a token: lower-cased, typographic apostrophes folded to `'`.
pub fn key(token: &str) -> String {
    token.to_lowercase().replace('\u{2019}', "'")
}

/// Polarity of sentiment-bearing words.
pub static SENTIMENT: phf::Map<&'static str, f64> = phf_map! {
    // positive
    "good" => 0.7,
    "great" => 0.8,
    "excellent" => 1.0,
    "amazing" => 0.6,
    "awesome" => 1.0,
    "wonderful" => 1.0,
    "fantastic" => 0.4,
    "incredible" => 0.9,
    "brilliant" => 0.9,
    "perfect" => 1.0,
    "best" => 1.0,
    "better" => 0.5,
    "beautiful" => 0.85,
    "nice" => 0.6,
    "happy" => 0.8,
    "love" => 0.5,
    "lovely" => 0.5,
    "free" => 0.4,
    "new" => 0.14,
    "powerful" => 0.3,
    "easy" => 0.43,
    "effortless" => 0.3,
    "simple" => 0.05,
    "proven" => 0.2,
    "guaranteed" => 0.3,
    "exclusive" => 0.2,
    "ultimate" => 0.1,
    "successful" => 0.75,
    "fun" => 0.3,
    "smart" => 0.21,
    "exciting" => 0.3,
    "remarkable" => 0.75,
    "stunning" => 0.5,
    "delightful" => 1.0,
    "superb" => 1.0,
    "outstanding" => 0.5,
    "impressive" => 1.0,
    "favorite" => 0.5,
    "popular" => 0.6,
    "fresh" => 0.3,
    "safe" => 0.5,
    "fast" => 0.2,
    "strong" => 0.43,
    "healthy" => 0.5,
    "rich" => 0.38,
    "valuable" => 0.5,
    "helpful" => 0.5,
    "essential" => 0.3,
    "top" => 0.5,
    "winning" => 0.5,
    "glad" => 0.5,
    "positive" => 0.23,
    "fine" => 0.42,
    "cool" => 0.35,
    "secure" => 0.4,
    "reliable" => 0.5,
    "effective" => 0.6,
    "instant" => 0.1,
    // negative
    "bad" => -0.7,
    "terrible" => -1.0,
    "awful" => -1.0,
    "horrible" => -1.0,
    "worst" => -1.0,
    "worse" => -0.4,
    "poor" => -0.4,
    "ugly" => -0.7,
    "sad" => -0.5,
    "angry" => -0.5,
    "hate" => -0.8,
    "boring" => -1.0,
    "dangerous" => -0.6,
    "wrong" => -0.5,
    "broken" => -0.4,
    "useless" => -0.5,
    "disappointing" => -0.6,
    "dull" => -0.31,
    "weak" => -0.38,
    "stupid" => -0.8,
    "dumb" => -0.38,
    "painful" => -0.7,
    "difficult" => -0.5,
    "hard" => -0.29,
    "expensive" => -0.5,
    "slow" => -0.3,
    "scary" => -0.5,
    "deadly" => -0.2,
    "fake" => -0.5,
    "failed" => -0.5,
    "mediocre" => -0.5,
    "annoying" => -0.8,
    "crazy" => -0.6,
    "costly" => -0.3,
    "risky" => -0.3,
    "negative" => -0.3,
    "nasty" => -1.0,
    "pathetic" => -1.0,
    "miserable" => -1.0,
    "disgusting" => -1.0,
};

/// Multipliers applied to the next sentiment-bearing word.
pub static INTENSIFIERS: phf::Map<&'static str, f64> = phf_map! {
    "very" => 1.3,
    "really" => 1.3,
    "so" => 1.3,
    "too" => 1.2,
    "super" => 1.3,
    "most" => 1.3,
    "highly" => 1.3,
    "totally" => 1.3,
    "truly" => 1.3,
    "extremely" => 1.5,
    "incredibly" => 1.5,
    "absolutely" => 1.5,
    "completely" => 1.5,
    "quite" => 1.1,
    "pretty" => 1.1,
    "fairly" => 0.8,
    "somewhat" => 0.7,
    "slightly" => 0.5,
    "barely" => 0.3,
};

/// Words that flip and dampen the polarity of a following sentiment word.
pub static NEGATORS: phf::Set<&'static str> = phf_set! {
    "not",
    "n't",
    "no",
    "never",
    "cannot",
    "neither",
    "nor",
    "without",
};

/// Closed-class words with a fixed tag.
pub static CLOSED_CLASS: phf::Map<&'static str, Tag> = phf_map! {
    // determiners
    "the" => Tag::DT,
    "a" => Tag::DT,
    "an" => Tag::DT,
    "this" => Tag::DT,
    "that" => Tag::DT,
    "these" => Tag::DT,
    "those" => Tag::DT,
    "every" => Tag::DT,
    "each" => Tag::DT,
    "some" => Tag::DT,
    "any" => Tag::DT,
    "all" => Tag::DT,
    "no" => Tag::DT,
    "another" => Tag::DT,
    "both" => Tag::DT,
    "either" => Tag::DT,
    "neither" => Tag::DT,
    // pronouns
    "i" => Tag::PRP,
    "you" => Tag::PRP,
    "he" => Tag::PRP,
    "she" => Tag::PRP,
    "it" => Tag::PRP,
    "we" => Tag::PRP,
    "they" => Tag::PRP,
    "me" => Tag::PRP,
    "him" => Tag::PRP,
    "us" => Tag::PRP,
    "them" => Tag::PRP,
    "yourself" => Tag::PRP,
    "itself" => Tag::PRP,
    "myself" => Tag::PRP,
    "themselves" => Tag::PRP,
    "my" => Tag::PRPS,
    "your" => Tag::PRPS,
    "his" => Tag::PRPS,
    "her" => Tag::PRPS,
    "its" => Tag::PRPS,
    "our" => Tag::PRPS,
    "their" => Tag::PRPS,
    // prepositions and subordinators
    "on" => Tag::IN,
    "in" => Tag::IN,
    "at" => Tag::IN,
    "of" => Tag::IN,
    "for" => Tag::IN,
    "with" => Tag::IN,
    "by" => Tag::IN,
    "from" => Tag::IN,
    "about" => Tag::IN,
    "into" => Tag::IN,
    "over" => Tag::IN,
    "under" => Tag::IN,
    "after" => Tag::IN,
    "before" => Tag::IN,
    "between" => Tag::IN,
    "through" => Tag::IN,
    "during" => Tag::IN,
    "without" => Tag::IN,
    "against" => Tag::IN,
    "among" => Tag::IN,
    "around" => Tag::IN,
    "like" => Tag::IN,
    "than" => Tag::IN,
    "if" => Tag::IN,
    "because" => Tag::IN,
    "while" => Tag::IN,
    "since" => Tag::IN,
    "until" => Tag::IN,
    "as" => Tag::IN,
    "upon" => Tag::IN,
    "per" => Tag::IN,
    "to" => Tag::TO,
    // conjunctions
    "and" => Tag::CC,
    "or" => Tag::CC,
    "but" => Tag::CC,
    "nor" => Tag::CC,
    "yet" => Tag::CC,
    "plus" => Tag::CC,
    // modals
    "can" => Tag::MD,
    "could" => Tag::MD,
    "will" => Tag::MD,
    "would" => Tag::MD,
    "shall" => Tag::MD,
    "should" => Tag::MD,
    "may" => Tag::MD,
    "might" => Tag::MD,
    "must" => Tag::MD,
    "ca" => Tag::MD,
    "wo" => Tag::MD,
    "cannot" => Tag::MD,
    // auxiliaries
    "is" => Tag::VBZ,
    "has" => Tag::VBZ,
    "does" => Tag::VBZ,
    "are" => Tag::VBP,
    "am" => Tag::VBP,
    "have" => Tag::VBP,
    "do" => Tag::VBP,
    "'re" => Tag::VBP,
    "'ve" => Tag::VBP,
    "'m" => Tag::VBP,
    "was" => Tag::VBD,
    "were" => Tag::VBD,
    "had" => Tag::VBD,
    "did" => Tag::VBD,
    "be" => Tag::VB,
    "been" => Tag::VBN,
    "being" => Tag::VBG,
    "'ll" => Tag::MD,
    "'d" => Tag::MD,
    "'s" => Tag::POS,
    // adverbs and particles
    "not" => Tag::RB,
    "n't" => Tag::RB,
    "now" => Tag::RB,
    "never" => Tag::RB,
    "very" => Tag::RB,
    "really" => Tag::RB,
    "just" => Tag::RB,
    "also" => Tag::RB,
    "too" => Tag::RB,
    "so" => Tag::RB,
    "here" => Tag::RB,
    "then" => Tag::RB,
    "always" => Tag::RB,
    "often" => Tag::RB,
    "soon" => Tag::RB,
    "only" => Tag::RB,
    "again" => Tag::RB,
    "still" => Tag::RB,
    "already" => Tag::RB,
    "ever" => Tag::RB,
    "even" => Tag::RB,
    "quite" => Tag::RB,
    "almost" => Tag::RB,
    "up" => Tag::RP,
    "out" => Tag::RP,
    "off" => Tag::RP,
    "down" => Tag::RP,
    "there" => Tag::EX,
    "more" => Tag::JJR,
    "less" => Tag::JJR,
    "most" => Tag::JJS,
    "least" => Tag::JJS,
    // wh-words
    "which" => Tag::WDT,
    "what" => Tag::WP,
    "who" => Tag::WP,
    "whom" => Tag::WP,
    "where" => Tag::WRB,
    "when" => Tag::WRB,
    "why" => Tag::WRB,
    "how" => Tag::WRB,
    // interjections
    "oh" => Tag::UH,
    "wow" => Tag::UH,
    "hey" => Tag::UH,
    "yes" => Tag::UH,
    "please" => Tag::UH,
};

/// Common open-class words whose tag the suffix rules would get wrong.
pub static OPEN_CLASS: phf::Map<&'static str, Tag> = phf_map! {
    // base-form verbs
    "discover" => Tag::VB,
    "get" => Tag::VB,
    "make" => Tag::VB,
    "take" => Tag::VB,
    "see" => Tag::VB,
    "know" => Tag::VB,
    "find" => Tag::VB,
    "give" => Tag::VB,
    "learn" => Tag::VB,
    "start" => Tag::VB,
    "stop" => Tag::VB,
    "buy" => Tag::VB,
    "save" => Tag::VB,
    "try" => Tag::VB,
    "act" => Tag::VB,
    "build" => Tag::VB,
    "grow" => Tag::VB,
    "win" => Tag::VB,
    "unlock" => Tag::VB,
    "boost" => Tag::VB,
    "join" => Tag::VB,
    "sell" => Tag::VB,
    "read" => Tag::VB,
    "watch" => Tag::VB,
    "hurry" => Tag::VB,
    "use" => Tag::VB,
    "need" => Tag::VB,
    "want" => Tag::VB,
    "love" => Tag::VB,
    "hate" => Tag::VB,
    "create" => Tag::VB,
    "transform" => Tag::VB,
    "master" => Tag::VB,
    "sit" => Tag::VB,
    "go" => Tag::VB,
    "come" => Tag::VB,
    "miss" => Tag::VB,
    "claim" => Tag::VB,
    "grab" => Tag::VB,
    "shop" => Tag::VB,
    "order" => Tag::VB,
    "click" => Tag::VB,
    "earn" => Tag::VB,
    "lose" => Tag::VB,
    "double" => Tag::VB,
    "change" => Tag::VB,
    "let" => Tag::VB,
    "look" => Tag::VB,
    "think" => Tag::VB,
    "feel" => Tag::VB,
    // irregular past forms
    "sat" => Tag::VBD,
    "made" => Tag::VBD,
    "took" => Tag::VBD,
    "saw" => Tag::VBD,
    "knew" => Tag::VBD,
    "found" => Tag::VBD,
    "gave" => Tag::VBD,
    "got" => Tag::VBD,
    "went" => Tag::VBD,
    "came" => Tag::VBD,
    "sold" => Tag::VBD,
    "bought" => Tag::VBD,
    "built" => Tag::VBD,
    "grew" => Tag::VBD,
    "won" => Tag::VBD,
    "said" => Tag::VBD,
    "told" => Tag::VBD,
    "ran" => Tag::VBD,
    "lost" => Tag::VBD,
    "taken" => Tag::VBN,
    "given" => Tag::VBN,
    "known" => Tag::VBN,
    "seen" => Tag::VBN,
    "proven" => Tag::VBN,
    // adjectives not caught by suffixes
    "new" => Tag::JJ,
    "free" => Tag::JJ,
    "good" => Tag::JJ,
    "great" => Tag::JJ,
    "bad" => Tag::JJ,
    "big" => Tag::JJ,
    "small" => Tag::JJ,
    "simple" => Tag::JJ,
    "ultimate" => Tag::JJ,
    "exclusive" => Tag::JJ,
    "final" => Tag::JJ,
    "urgent" => Tag::JJ,
    "limited" => Tag::JJ,
    "guaranteed" => Tag::JJ,
    "amazing" => Tag::JJ,
    "stunning" => Tag::JJ,
    "boring" => Tag::JJ,
    "exciting" => Tag::JJ,
    "winning" => Tag::JJ,
    "annoying" => Tag::JJ,
    "disappointing" => Tag::JJ,
    "terrible" => Tag::JJ,
    "horrible" => Tag::JJ,
    "incredible" => Tag::JJ,
    "perfect" => Tag::JJ,
    "fast" => Tag::JJ,
    "easy" => Tag::JJ,
    "hard" => Tag::JJ,
    "top" => Tag::JJ,
    "fresh" => Tag::JJ,
    "smart" => Tag::JJ,
    "strong" => Tag::JJ,
    "weak" => Tag::JJ,
    "rich" => Tag::JJ,
    "poor" => Tag::JJ,
    "sad" => Tag::JJ,
    "happy" => Tag::JJ,
    "nice" => Tag::JJ,
    "fine" => Tag::JJ,
    "cool" => Tag::JJ,
    "safe" => Tag::JJ,
    "secure" => Tag::JJ,
    "wrong" => Tag::JJ,
    "fake" => Tag::JJ,
    "slow" => Tag::JJ,
    "instant" => Tag::JJ,
    "broken" => Tag::JJ,
    "mediocre" => Tag::JJ,
    "crazy" => Tag::JJ,
    "ugly" => Tag::JJ,
    "dull" => Tag::JJ,
    "dumb" => Tag::JJ,
    "stupid" => Tag::JJ,
    "angry" => Tag::JJ,
    "scary" => Tag::JJ,
    "risky" => Tag::JJ,
    "healthy" => Tag::JJ,
    "glad" => Tag::JJ,
    "lovely" => Tag::JJ,
    "deadly" => Tag::JJ,
    "costly" => Tag::JJ,
    "popular" => Tag::JJ,
    "fun" => Tag::JJ,
    "best" => Tag::JJS,
    "worst" => Tag::JJS,
    "better" => Tag::JJR,
    "worse" => Tag::JJR,
    // nouns the suffix rules would mistag
    "news" => Tag::NN,
    "business" => Tag::NN,
    "success" => Tag::NN,
    "today" => Tag::NN,
    "tomorrow" => Tag::NN,
    "tonight" => Tag::NN,
    "deadline" => Tag::NN,
    "thing" => Tag::NN,
    "morning" => Tag::NN,
    "evening" => Tag::NN,
    "marketing" => Tag::NN,
    "shipping" => Tag::NN,
    "everything" => Tag::NN,
    "something" => Tag::NN,
    "nothing" => Tag::NN,
    "anything" => Tag::NN,
    "family" => Tag::NN,
    "money" => Tag::NN,
    "people" => Tag::NNS,
    "men" => Tag::NNS,
    "women" => Tag::NNS,
    "children" => Tag::NNS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_folds_case_and_apostrophes() {
        assert_eq!(key("Don"), "don");
        assert_eq!(key("N\u{2019}T"), "n't");
        assert_eq!(key("\u{2019}s"), "'s");
        assert!(NEGATORS.contains(key("n\u{2019}t").as_str()));
        assert_eq!(CLOSED_CLASS.get(key("\u{2019}ll").as_str()), Some(&Tag::MD));
    }
}
