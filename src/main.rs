//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in a full-screen TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::Session,
    interactive::{App, run_tui},
    logging,
    output::print_share,
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for picking the secret word (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Pick the secret from the embedded list, seeded if requested
fn new_session(words: &[Word], seed: Option<u64>) -> Result<Session> {
    let session = match seed {
        Some(seed) => Session::random(words, &mut StdRng::seed_from_u64(seed)),
        None => Session::random(words, &mut rand::rng()),
    };
    session.context("word list is empty")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let words = words_from_slice(ANSWERS);
    let session = new_session(&words, cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple_command(session),
    }
}

fn run_play_command(session: Session) -> Result<()> {
    let app = run_tui(App::new(session))?;

    // Share grid goes to the normal screen once the TUI is gone
    if app.is_finished() {
        print_share(&mut io::stdout(), &app.session)?;
    }
    Ok(())
}

fn run_simple_command(mut session: Session) -> Result<()> {
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}
