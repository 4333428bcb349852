mod config;
mod error_formatter;
mod formatter;
mod play;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mathler")]
#[command(about = "Guess the equation: a Wordle-style number puzzle.")]
#[command(
    long_about = "Mathler hides an equation that computes to a known target value.\nThe CLI evaluates expressions, checks guesses against configured puzzles, lets you play in the terminal, and serves the HTTP API used by the web front-end."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its integer value
    ///
    /// Accepts digits, + - * / and ×. Division results are truncated toward zero.
    Eval {
        /// Expression to evaluate, e.g. "12-2*1+0"
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Check a guess against the puzzle with the given target value
    ///
    /// Prints one state per symbol: CORRECT, PRESENT or ABSENT.
    Check {
        /// The guessed equation, one symbol per slot
        #[arg(allow_hyphen_values = true)]
        guess: String,
        /// Target value of the puzzle
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        /// Puzzle configuration file
        #[arg(short = 'c', long = "config", default_value = "puzzles.toml")]
        config: PathBuf,
        /// Output the result as JSON
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// List configured puzzles (solutions stay hidden)
    List {
        /// Puzzle configuration file
        #[arg(short = 'c', long = "config", default_value = "puzzles.toml")]
        config: PathBuf,
    },
    /// Play a random puzzle in the terminal
    Play {
        /// Puzzle configuration file
        #[arg(short = 'c', long = "config", default_value = "puzzles.toml")]
        config: PathBuf,
        /// Only pick puzzles of this difficulty (falls back to any puzzle)
        #[arg(short = 'd', long)]
        difficulty: Option<u32>,
        /// Number of scored guesses allowed
        #[arg(short = 'a', long, default_value = "6")]
        attempts: usize,
    },
    /// Start HTTP REST API server (default: localhost:8080)
    ///
    /// API: GET /api/puzzle[?difficulty=N], POST /api/check with {guess, targetValue}
    Server {
        /// Puzzle configuration file
        #[arg(short = 'c', long = "config", default_value = "puzzles.toml")]
        config: PathBuf,
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Server { .. } => "mathler=info,tower_http=info",
        _ => "mathler=warn",
    };
    init_tracing(default_filter);

    let result = match &cli.command {
        Commands::Eval { expression } => eval_command(expression),
        Commands::Check {
            guess,
            target,
            config,
            raw,
        } => check_command(config, guess, *target, *raw),
        Commands::List { config } => list_command(config),
        Commands::Play {
            config,
            difficulty,
            attempts,
        } => play_command(config, *difficulty, *attempts),
        Commands::Server { config, host, port } => server_command(config, host, *port),
    };

    if let Err(e) = result {
        // Evaluation errors get a source excerpt, everything else the context chain
        if let Some(eval_err) = e.downcast_ref::<mathler::EvalError>() {
            eprintln!("{}", error_formatter::format_eval_error(eval_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn eval_command(expression: &str) -> Result<()> {
    let value = mathler::evaluate(expression)?;
    println!("{}", value);
    Ok(())
}

fn check_command(config: &Path, guess: &str, target: i64, raw: bool) -> Result<()> {
    let engine = config::load_engine(config)?;

    let slots: Vec<String> = guess.chars().map(|c| c.to_string()).collect();
    let result = engine.check_guess(&slots, target);

    let formatter = Formatter::default();
    if raw {
        println!("{}", formatter.format_score_raw(&result));
    } else {
        print!("{}", formatter.format_score(&slots, &result));
    }

    Ok(())
}

fn list_command(config: &Path) -> Result<()> {
    let engine = config::load_engine(config)?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_puzzles(engine.puzzles()));
    Ok(())
}

fn play_command(config: &Path, difficulty: Option<u32>, attempts: usize) -> Result<()> {
    if attempts == 0 {
        anyhow::bail!("At least one attempt is required");
    }
    let engine = config::load_engine(config)?;
    play::run_game(&engine, difficulty, attempts)
}

fn server_command(config: &Path, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let engine = config::load_engine(config)?;

        println!(
            "Starting HTTP server with {} puzzle(s) loaded",
            engine.puzzles().len()
        );

        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(engine, host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (config, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
