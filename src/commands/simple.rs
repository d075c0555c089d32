//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: read a guess, print the feedback,
//! repeat until the game ends, then offer another round.

use crate::core::EquationError;
use crate::game::{GameState, Outcome, Statistics, check_guess};
use crate::generator::generate_equation_with;
use crate::output::display::{
    format_board, outcome_line, print_game_over, print_session_summary, print_welcome,
};
use crate::output::formatters::AnsiRenderer;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// What the player typed at the guess prompt
enum Input {
    Guess(String),
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if no target equation can be generated.
pub fn run_simple<R: Rng>(rng: &mut R) -> Result<Statistics> {
    print_welcome();
    let stdin = io::stdin();
    let stats = play_session(&mut stdin.lock(), rng)?;
    print_session_summary(&stats);
    Ok(stats)
}

/// Play rounds until the player declines a replay, quits, or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if no target equation can be generated.
pub fn play_session<B: BufRead, R: Rng>(input: &mut B, rng: &mut R) -> Result<Statistics> {
    let mut stats = Statistics::default();

    loop {
        println!("\n{}", format!("GAME {}", stats.games_played + 1).bold());
        println!("{}", "-".repeat(20));
        println!("Generating your equation...");

        let target = generate_equation_with(rng)?;
        info!(game = stats.games_played + 1, "new game started");
        let mut game = GameState::new(target);

        println!("Equation generated! Start guessing...\n");

        while !game.is_game_over() {
            println!("{}\n", format_board(&game, &AnsiRenderer));

            let guess = match read_guess(input)? {
                Input::Guess(guess) => guess,
                Input::Quit => return Ok(stats),
            };

            let outcome = game.submit_guess(&guess);
            println!("\nRESULT: {}\n", outcome_line(&outcome));
            if matches!(outcome, Outcome::Won { .. } | Outcome::Lost { .. }) {
                print_game_over(&game);
            }
        }

        stats.record(&game);

        if !ask_play_again(input)? {
            return Ok(stats);
        }
    }
}

/// Prompt until the player enters a usable guess
///
/// Mirrors the checks `submit_guess` performs so the player sees a specific
/// reason and keeps their attempt.
fn read_guess<B: BufRead>(input: &mut B) -> Result<Input> {
    loop {
        println!("Enter your guess (8 characters, e.g., 12+34=46), or 'quit':");
        let Some(line) = read_line(input, "> ")? else {
            return Ok(Input::Quit);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(Input::Quit);
        }

        match check_guess(&line) {
            Ok(_) => return Ok(Input::Guess(line)),
            Err(err) => println!("{}", guess_error_message(&line, &err).red()),
        }
    }
}

fn guess_error_message(guess: &str, err: &EquationError) -> String {
    use crate::core::{FormatIssue, VALID_CHARACTERS};

    match err {
        EquationError::FormatInvalid(FormatIssue::Length(len)) => format!(
            "Error: Guess must be exactly 8 characters. You entered {len} characters."
        ),
        EquationError::FormatInvalid(FormatIssue::InvalidCharacter(_)) => {
            let invalid: Vec<char> = guess
                .chars()
                .filter(|&c| !VALID_CHARACTERS.contains(c))
                .collect();
            format!(
                "Error: Invalid characters found: {invalid:?}\nValid characters are: {VALID_CHARACTERS}"
            )
        }
        EquationError::FormatInvalid(FormatIssue::EqualsCount(_)) => {
            "Error: Equation must have exactly one equals sign (=)".to_string()
        }
        other => format!(
            "Error: Equation is not mathematically correct ({other}).\nMake sure the math adds up! For example: 12+34=46"
        ),
    }
}

fn ask_play_again<B: BufRead>(input: &mut B) -> Result<bool> {
    println!();
    loop {
        let Some(answer) = read_line(input, "Would you like to play again? (y/n): ")? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn read_line<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
