//! Headliner - headline analyzer.
//!
//! Reports sentiment, word and character counts, key nouns, and the power
//! and urgency words a headline contains.
//!
//! # Architecture
//!
//! - `toolkit`: tokenizer, polarity scorer and part-of-speech tagger behind
//!   the [`Toolkit`] trait
//! - `vocabulary`: power and urgency word sets
//! - `analyzer`: one headline in, one [`AnalysisResult`] out
//! - `controller`: form state and submission handling
//! - `form`: terminal form front end
//! - `report`: plain, pretty and JSON output
//! - `config`: vocabulary file loading
//! - `cli`: command-line interface

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod controller;
pub mod form;
pub mod report;
pub mod toolkit;
pub mod vocabulary;

pub use analyzer::{AnalysisError, AnalysisResult, Analyzer, Sentiment, SentimentLabel};
pub use controller::{Controller, State, Submission};
pub use toolkit::{LexiconToolkit, Tag, Toolkit, ToolkitError};
pub use vocabulary::Vocabulary;
