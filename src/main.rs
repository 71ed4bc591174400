//! Headliner CLI entry point.

use clap::Parser;
use headliner::cli::{self, Cli, Commands, FormArgs, EXIT_ERROR};
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Form(FormArgs::default()));

    init_tracing(cli.verbose, matches!(command, Commands::Form(_)));

    let result = match &command {
        Commands::Form(args) => cli::run_form(args),
        Commands::Analyze(args) => cli::run_analyze(args),
        Commands::Vocab(args) => cli::run_vocab(args),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

/// Install the stderr log subscriber.
///
/// The form owns the terminal, so it only logs when asked to.
fn init_tracing(verbose: u8, is_form: bool) {
    if is_form && verbose == 0 {
        return;
    }

    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
