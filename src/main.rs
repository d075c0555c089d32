//! Nerdle - CLI
//!
//! Math equation guessing game with TUI and CLI modes, plus tools for
//! checking, scoring and generating equations.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nerdle::{
    commands::{check_equation, generate_equations, run_benchmark, run_simple, score_guess},
    core::Operator,
    output::{print_benchmark_result, print_check_result, print_equations, print_score_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "nerdle",
    about = "Guess the hidden 8-character math equation in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible equations
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with `NERDLE_LOG`, default `warn`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple line-based game without the TUI
    Simple,

    /// Print random valid equations
    Generate {
        /// Number of equations
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Restrict to one operator: add, sub, mul, div (or + - * /)
        #[arg(short, long)]
        operator: Option<String>,
    },

    /// Check whether an equation is valid
    Check {
        /// Equation such as 12+34=46
        equation: String,
    },

    /// Show the feedback a guess gets against a target
    Score {
        guess: String,
        target: String,
    },

    /// Generate many equations in parallel and verify them
    Benchmark {
        /// Number of equations
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env("NERDLE_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        return Ok(());
    }

    // Writing to stderr would corrupt the TUI
    if interactive {
        tracing_subscriber::registry().with(env_filter).init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;
    tracing::debug!(seed = ?cli.seed, "starting");

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple(&mut make_rng(cli.seed)).map(|_| ()),
        Commands::Generate { count, operator } => {
            run_generate_command(count, operator.as_deref(), cli.seed)
        }
        Commands::Check { equation } => run_check_command(&equation),
        Commands::Score { guess, target } => {
            print_score_result(&score_guess(&guess, &target));
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(count, cli.seed),
    }
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use nerdle::interactive::{App, run_tui};
    use nerdle::output::print_session_summary;

    let app = App::new(make_rng(seed))?;
    let stats = run_tui(app)?;
    if stats.games_played > 0 {
        print_session_summary(&stats);
    }
    Ok(())
}

fn run_generate_command(count: usize, operator: Option<&str>, seed: Option<u64>) -> Result<()> {
    let operator = match operator {
        Some(name) => match Operator::from_name(name) {
            Some(op) => Some(op),
            None => bail!("unknown operator '{name}' (expected add, sub, mul or div)"),
        },
        None => None,
    };

    let equations = generate_equations(count, operator, &mut make_rng(seed))?;
    print_equations(&equations);
    Ok(())
}

fn run_check_command(equation: &str) -> Result<()> {
    let result = check_equation(equation);
    print_check_result(&result);
    result
        .ensure_valid()
        .with_context(|| format!("{equation} is not a valid equation"))?;
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>) -> Result<()> {
    println!("Generating {count} equations...");
    let result = run_benchmark(count, seed, true)?;
    print_benchmark_result(&result);
    Ok(())
}
