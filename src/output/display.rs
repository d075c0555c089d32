//! Display functions for games and command results

use super::formatters::{AnsiRenderer, EmojiRenderer, Renderer, create_progress_bar};
use crate::commands::{BenchmarkResult, CheckResult, ScoreResult};
use crate::core::{Classification, Equation, Operator, VALID_CHARACTERS, compare};
use crate::game::{GameState, MAX_ATTEMPTS, Outcome, Statistics};
use colored::Colorize;

/// Welcome banner with the rules and a colored example
#[must_use]
pub fn welcome_message() -> String {
    let rule = "=".repeat(60);
    let example = AnsiRenderer.render("15+35=50", &compare("15+35=50", "12+34=46"));
    let mut lines = vec![
        rule.clone(),
        "             WELCOME TO NERDLE!".to_string(),
        "         A Math Equation Guessing Game".to_string(),
        rule.clone(),
        String::new(),
        "GAME RULES:".to_string(),
        "- Guess the 8-character math equation".to_string(),
        format!("- You have {MAX_ATTEMPTS} attempts to get it right"),
        "- Each equation has the format: NN+NN=NN (or -, *, /)".to_string(),
        "- After each guess, you'll get color-coded feedback:".to_string(),
    ];
    lines.push(format!(
        "  * {}: Correct character in correct position",
        " Green ".black().on_green()
    ));
    lines.push(format!(
        "  * {}: Correct character but wrong position",
        " Yellow ".black().on_yellow()
    ));
    lines.push(format!(
        "  * {}: Character not in the target equation",
        " Gray ".black().on_white()
    ));
    lines.extend([
        String::new(),
        "EXAMPLE:".to_string(),
        "Target:   12+34=46".to_string(),
        "Guess:    15+35=50".to_string(),
        format!("Feedback: {example}"),
        String::new(),
        format!("Valid characters: {VALID_CHARACTERS}"),
        rule,
    ]);
    lines.join("\n")
}

/// Print the welcome banner
pub fn print_welcome() {
    println!("{}\n", welcome_message());
}

/// All guesses so far, one rendered row each, plus attempts remaining
#[must_use]
pub fn format_board(game: &GameState, renderer: &dyn Renderer) -> String {
    if game.guesses().is_empty() {
        return "No guesses yet. Make your first guess!".to_string();
    }

    let mut lines = vec!["Your guesses so far:".to_string(), String::new()];
    for (guess, feedback) in game.history() {
        lines.push(format!("  {}", renderer.render(guess.as_str(), feedback)));
    }
    lines.push(String::new());
    lines.push(format!("Attempts remaining: {}", game.remaining()));
    lines.join("\n")
}

/// Shareable summary, e.g. `Nerdle 3/6` followed by emoji rows
#[must_use]
pub fn share_text(game: &GameState) -> String {
    let score = if game.is_won() {
        game.attempts().to_string()
    } else {
        "X".to_string()
    };
    let mut lines = vec![format!("Nerdle {score}/{}", game.max_attempts())];
    for (guess, feedback) in game.history() {
        lines.push(EmojiRenderer.render(guess.as_str(), feedback));
    }
    lines.join("\n")
}

/// One-line colored message for a guess outcome
#[must_use]
pub fn outcome_line(outcome: &Outcome) -> String {
    let text = outcome.to_string();
    match outcome {
        Outcome::Won { .. } => text.green().bold().to_string(),
        Outcome::Lost { .. } => text.red().bold().to_string(),
        Outcome::Invalid(_) | Outcome::AlreadyOver => text.yellow().to_string(),
        Outcome::Continue { .. } => text,
    }
}

/// Closing banner for a finished game
pub fn print_game_over(game: &GameState) {
    println!("{}", format_board(game, &AnsiRenderer));
    println!();
    if game.is_won() {
        println!(
            "{}",
            "🎉 CONGRATULATIONS! You solved the equation! 🎉"
                .bright_green()
                .bold()
        );
    } else {
        println!("{}", "😞 Better luck next time!".bright_yellow());
        println!(
            "The correct equation was: {}",
            game.target().as_str().bright_white().bold()
        );
    }
    println!("\n{}", share_text(game));
}

/// Print the totals for a play session
pub fn print_session_summary(stats: &Statistics) {
    println!("\n{}", "=".repeat(40).cyan());
    println!("           {}", "THANKS FOR PLAYING!".bright_cyan().bold());
    println!("{}", "=".repeat(40).cyan());
    println!("Games played:   {}", stats.games_played);
    println!("Games won:      {}", stats.games_won.to_string().green());
    println!("Win rate:       {:.0}%", stats.win_rate());
    println!("Best streak:    {}", stats.best_streak);
    if let Some(avg) = stats.average_attempts() {
        println!("Avg attempts:   {avg:.2}");
    }

    if stats.games_won > 0 {
        println!("\n{}", "Guess distribution:".bright_cyan());
        for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
            let bar = create_progress_bar(count as f64, stats.games_won as f64, 20);
            println!("  {attempts}: {} {count}", bar.green());
        }
    }

    println!("Come back anytime to exercise your math skills!");
    println!("{}", "=".repeat(40).cyan());
}

/// Print the verdict for `check`
pub fn print_check_result(result: &CheckResult) {
    match &result.verdict {
        Ok(equation) => println!(
            "{} {} is a valid {} equation",
            "✅".green(),
            equation.as_str().bright_white().bold(),
            equation.operator().name()
        ),
        Err(err) => println!(
            "{} {} is not valid: {err}",
            "❌".red(),
            result.input.bright_white().bold()
        ),
    }
}

/// Print the feedback for `score`
pub fn print_score_result(result: &ScoreResult) {
    println!("Guess:    {}", result.guess);
    println!("Target:   {}", result.target);
    println!(
        "Feedback: {}",
        AnsiRenderer.render(&result.guess, &result.classification)
    );
    println!(
        "          {} ({})",
        result.classification,
        result.classification.to_emoji()
    );
    if !result.guess_valid {
        println!("{}", "Note: the guess is not a valid equation".yellow());
    }
    if !result.target_valid {
        println!("{}", "Note: the target is not a valid equation".yellow());
    }
    if result.classification == Classification::NONE
        && result.guess.chars().count() != result.target.chars().count()
    {
        println!("{}", "Note: lengths differ, so nothing can match".yellow());
    }
}

/// Print generated equations, one per line
pub fn print_equations(equations: &[Equation]) {
    for equation in equations {
        println!("{equation}");
    }
}

/// Print the result of a generator benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Equations:        {}", result.total);
    let valid = format!("{}", result.valid);
    if result.valid == result.total {
        println!("   Valid:            {}", valid.green().bold());
    } else {
        println!("   Valid:            {}", valid.red().bold());
    }
    println!("   Unique:           {}", result.unique);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Equations/second: {:.1}", result.equations_per_second);

    println!("\n📈 {}", "Operators:".bright_cyan().bold());
    for operator in Operator::ALL {
        let count = result.operator_counts[operator.index()];
        let pct = if result.total == 0 {
            0.0
        } else {
            count as f64 / result.total as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 50.0, 40);
        println!(
            "   {} {:<15} {} {count:6} ({pct:5.1}%)",
            operator,
            operator.name(),
            bar.green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatters::PlainRenderer;

    fn game() -> GameState {
        GameState::new(Equation::parse("12+34=46").unwrap())
    }

    #[test]
    fn welcome_mentions_rules() {
        let text = welcome_message();
        assert!(text.contains("NERDLE"));
        assert!(text.contains("GAME RULES"));
        assert!(text.contains("6 attempts"));
        assert!(text.contains(VALID_CHARACTERS));
    }

    #[test]
    fn empty_board() {
        let text = format_board(&game(), &PlainRenderer);
        assert!(text.to_lowercase().contains("no guesses yet"));
    }

    #[test]
    fn board_with_guesses() {
        let mut game = game();
        game.submit_guess("15+31=46");
        let text = format_board(&game, &PlainRenderer);

        assert!(text.to_lowercase().contains("your guesses so far:"));
        assert!(text.to_lowercase().contains("attempts remaining: 5"));
        assert!(text.contains("[1G][5B][+G][3G][1B][=G][4G][6G]"));
    }

    #[test]
    fn share_text_for_win_and_loss() {
        let mut won = game();
        won.submit_guess("13+24=37");
        won.submit_guess("12+34=46");
        let text = share_text(&won);
        assert!(text.starts_with("Nerdle 2/6"));
        assert!(text.ends_with("🟩🟩🟩🟩🟩🟩🟩🟩"));

        let mut lost = game();
        for guess in [
            "13+24=37", "10+10=20", "56-23=33", "3*34=102", "252/36=7", "99-50=49",
        ] {
            lost.submit_guess(guess);
        }
        assert!(share_text(&lost).starts_with("Nerdle X/6"));
    }

    #[test]
    fn outcome_line_keeps_message() {
        let line = outcome_line(&Outcome::Continue { remaining: 3 });
        assert_eq!(line, "Try again! 3 attempts remaining.");
    }
}
