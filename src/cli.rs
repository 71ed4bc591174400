//! Command-line interface for headliner.

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use crate::analyzer::Analyzer;
use crate::config::{self, VocabularySource};
use crate::controller::{Controller, Submission, ANALYSIS_FAILED_MESSAGE, EMPTY_INPUT_PROMPT};
use crate::form;
use crate::report::{self, Format};
use crate::vocabulary::Vocabulary;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_INPUT: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default output path for `init`.
const DEFAULT_INIT_OUTPUT: &str = "headliner.yaml";

const VOCABULARY_TEMPLATE: &str = include_str!("templates/vocabulary.yaml");

/// Headline analyzer - sentiment, counts, key nouns, power and urgency words.
///
/// Without a subcommand, opens the interactive form.
#[derive(Parser)]
#[command(name = "headliner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive headline form
    Form(FormArgs),
    /// Analyze one headline and print the result
    Analyze(AnalyzeArgs),
    /// Show the active power and urgency word lists
    Vocab(VocabArgs),
    /// Write a vocabulary file template
    Init(InitArgs),
}

/// Arguments for the form command.
#[derive(Parser, Default)]
pub struct FormArgs {
    /// Path to vocabulary YAML file (default: auto-discover)
    #[arg(long)]
    pub vocab: Option<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Headline text to analyze
    pub headline: String,

    /// Output format: plain, pretty, or json
    #[arg(short, long, default_value = "plain")]
    pub format: String,

    /// Path to vocabulary YAML file (default: auto-discover)
    #[arg(long)]
    pub vocab: Option<PathBuf>,
}

/// Arguments for the vocab command.
#[derive(Parser)]
pub struct VocabArgs {
    /// Path to vocabulary YAML file (default: auto-discover)
    #[arg(long)]
    pub vocab: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_INIT_OUTPUT)]
    pub output: PathBuf,
}

fn load_vocabulary(explicit: Option<&Path>) -> anyhow::Result<(Vocabulary, VocabularySource)> {
    Ok(config::load_vocabulary(explicit)?)
}

/// Run the form command.
pub fn run_form(args: &FormArgs) -> anyhow::Result<i32> {
    let (vocabulary, _) = load_vocabulary(args.vocab.as_deref())?;
    let controller = Controller::new(Analyzer::with_vocabulary(vocabulary));
    form::run(controller)?;
    Ok(EXIT_SUCCESS)
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let format: Format = match args.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let (vocabulary, _) = load_vocabulary(args.vocab.as_deref())?;
    let mut controller = Controller::new(Analyzer::with_vocabulary(vocabulary));
    controller.set_input(args.headline.as_str());

    match controller.submit() {
        Submission::Prompted => {
            eprintln!("{}", EMPTY_INPUT_PROMPT);
            Ok(EXIT_NO_INPUT)
        }
        Submission::Failed(_) => {
            eprintln!("Error: {}", ANALYSIS_FAILED_MESSAGE);
            Ok(EXIT_ERROR)
        }
        Submission::Analyzed(result) => {
            match format {
                Format::Plain => print!("{}", controller.display()),
                Format::Pretty => report::write_pretty(&args.headline, &result),
                Format::Json => report::write_json(&args.headline, &result)?,
            }
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Run the vocab command.
pub fn run_vocab(args: &VocabArgs) -> anyhow::Result<i32> {
    let (vocabulary, source) = load_vocabulary(args.vocab.as_deref())?;

    print!("  {}", "Source: ".dimmed());
    println!("{}", source);
    println!();

    print_list("Power words", vocabulary.power().iter());
    print_list("Urgency words", vocabulary.urgency().iter());

    // Tokens never contain spaces, so these entries cannot match.
    let multi_word = vocabulary.multi_word_entries();
    if !multi_word.is_empty() {
        eprintln!(
            "{} {} multi-word entries never match single tokens: {}",
            "Warning:".yellow().bold(),
            multi_word.len(),
            multi_word.join(", ")
        );
    }

    Ok(EXIT_SUCCESS)
}

fn print_list<'a>(title: &str, words: impl ExactSizeIterator<Item = &'a String>) {
    println!("  {} ({})", format!("{}:", title).bold(), words.len());
    for word in words {
        println!("    {}", word);
    }
    println!();
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, VOCABULARY_TEMPLATE) {
        eprintln!("Error: failed to write vocabulary: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize the word lists", args.output.display());
    println!("  2. Run: headliner vocab --vocab {}", args.output.display());

    Ok(EXIT_SUCCESS)
}
