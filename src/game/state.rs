//! Game state machine
//!
//! A game starts `InProgress` and ends `Won` or `Lost`. The only transition
//! is [`GameState::submit_guess`]; rejected guesses never change the state.

use crate::core::{Classification, Equation, EquationError};
use std::fmt;
use tracing::debug;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess was rejected; no attempt was used
    Invalid(EquationError),
    /// The game had already ended
    AlreadyOver,
    /// Wrong guess, attempts remain
    Continue { remaining: usize },
    /// The guess matched the target
    Won { attempts: usize },
    /// Out of attempts
    Lost { target: Equation },
}

impl Outcome {
    /// Short machine-friendly label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "invalid",
            Self::AlreadyOver => "already-over",
            Self::Continue { .. } => "continue",
            Self::Won { .. } => "won",
            Self::Lost { .. } => "lost",
        }
    }

    /// Whether the guess consumed an attempt
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(
            self,
            Self::Continue { .. } | Self::Won { .. } | Self::Lost { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(
                f,
                "Invalid guess! Must be exactly 8 characters, mathematically correct equation ({err})."
            ),
            Self::AlreadyOver => write!(f, "Game is already over!"),
            Self::Continue { remaining } => {
                write!(f, "Try again! {remaining} attempts remaining.")
            }
            Self::Won { attempts } => {
                write!(f, "Congratulations! You guessed it in {attempts} attempts!")
            }
            Self::Lost { target } => write!(f, "Game over! The equation was: {target}"),
        }
    }
}

/// One game: a fixed target and the append-only guess history
#[derive(Debug, Clone)]
pub struct GameState {
    target: Equation,
    guesses: Vec<Equation>,
    feedback: Vec<Classification>,
    attempts: usize,
    max_attempts: usize,
    game_over: bool,
    won: bool,
}

impl GameState {
    /// Start a new game
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::Equation;
    /// use nerdle::game::{GameState, Outcome};
    ///
    /// let target = Equation::parse("12+34=46").unwrap();
    /// let mut game = GameState::new(target);
    ///
    /// assert_eq!(game.submit_guess("13+24=37"), Outcome::Continue { remaining: 5 });
    /// assert_eq!(game.submit_guess("12+34=46"), Outcome::Won { attempts: 2 });
    /// assert!(game.is_won());
    /// ```
    #[must_use]
    pub const fn new(target: Equation) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            feedback: Vec::new(),
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            game_over: false,
            won: false,
        }
    }

    /// Submit a guess and advance the game
    ///
    /// The guess is always re-validated here, whatever the caller checked.
    pub fn submit_guess(&mut self, guess: &str) -> Outcome {
        if self.game_over {
            debug!(guess, "guess after game over");
            return Outcome::AlreadyOver;
        }

        let guess = match check_guess(guess) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(guess, %err, "guess rejected");
                return Outcome::Invalid(err);
            }
        };

        let classification = Classification::calculate(&guess, &self.target);
        debug!(%guess, %classification, attempt = self.attempts + 1, "guess scored");

        self.guesses.push(guess);
        self.feedback.push(classification);
        self.attempts += 1;
        debug_assert_eq!(self.guesses.len(), self.attempts);

        if classification.is_perfect() {
            self.won = true;
            self.game_over = true;
            debug!(attempts = self.attempts, "game won");
            Outcome::Won {
                attempts: self.attempts,
            }
        } else if self.attempts >= self.max_attempts {
            self.game_over = true;
            debug!(target = %self.target, "game lost");
            Outcome::Lost {
                target: self.target.clone(),
            }
        } else {
            Outcome::Continue {
                remaining: self.remaining(),
            }
        }
    }

    /// The equation being guessed
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Equation {
        &self.target
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Equation] {
        &self.guesses
    }

    /// Feedback for each accepted guess
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Classification] {
        &self.feedback
    }

    /// Guesses paired with their feedback
    pub fn history(&self) -> impl Iterator<Item = (&Equation, &Classification)> {
        self.guesses.iter().zip(&self.feedback)
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (false, _) => GameStatus::InProgress,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }
}

/// Validate a player's guess
///
/// A valid guess is exactly 8 characters from `0123456789+-*/=`, has exactly
/// one `=`, and is a mathematically correct equation.
///
/// # Errors
/// Returns the reason the guess is unusable.
pub fn check_guess(guess: &str) -> Result<Equation, EquationError> {
    Equation::parse(guess)
}

/// Check a guess without keeping the parsed equation
#[must_use]
pub fn is_valid_guess(guess: &str) -> bool {
    check_guess(guess).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormatIssue, Mark};

    const TARGET: &str = "12+34=46";
    const WRONG: [&str; 6] = [
        "13+24=37", "10+10=20", "56-23=33", "3*34=102", "252/36=7", "99-50=49",
    ];

    fn new_game() -> GameState {
        GameState::new(Equation::parse(TARGET).unwrap())
    }

    #[test]
    fn new_game_is_empty() {
        let game = new_game();
        assert_eq!(game.target().as_str(), TARGET);
        assert!(game.guesses().is_empty());
        assert!(game.feedback().is_empty());
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.max_attempts(), 6);
        assert!(!game.is_game_over());
        assert!(!game.is_won());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn valid_guess_records_history() {
        let mut game = new_game();
        let outcome = game.submit_guess("13+24=37");

        assert_eq!(outcome, Outcome::Continue { remaining: 5 });
        assert_eq!(outcome.label(), "continue");
        assert!(outcome.to_string().contains("remaining"));
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.guesses()[0].as_str(), "13+24=37");
        assert_eq!(game.feedback().len(), 1);
        assert_eq!(game.attempts(), 1);
        assert!(!game.is_game_over());
        assert!(!game.is_won());
    }

    #[test]
    fn invalid_guess_uses_no_attempt() {
        let mut game = new_game();
        for guess in ["12+34=47", "1+2=3", "12+34=4a", "12+34+46", "", "12/0=12", "1+1=2=02"] {
            let outcome = game.submit_guess(guess);
            assert!(matches!(outcome, Outcome::Invalid(_)), "{guess} should be invalid");
            assert_eq!(outcome.label(), "invalid");
            assert!(outcome.to_string().to_lowercase().contains("invalid"));
        }
        assert_eq!(game.attempts(), 0);
        assert!(game.guesses().is_empty());
        assert!(game.feedback().is_empty());
        assert!(!game.is_game_over());
    }

    #[test]
    fn invalid_guess_reports_reason() {
        let mut game = new_game();
        assert_eq!(
            game.submit_guess("12+34=4a"),
            Outcome::Invalid(EquationError::FormatInvalid(FormatIssue::InvalidCharacter('a')))
        );
        assert_eq!(
            game.submit_guess("100/3=33"),
            Outcome::Invalid(EquationError::NonExactDivision)
        );
    }

    #[test]
    fn winning_guess() {
        let mut game = new_game();
        let outcome = game.submit_guess(TARGET);

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert!(outcome.to_string().to_lowercase().contains("congratulations"));
        assert!(game.is_won());
        assert!(game.is_game_over());
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.feedback()[0].is_perfect());
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut game = new_game();
        for (i, guess) in WRONG.iter().enumerate() {
            let outcome = game.submit_guess(guess);
            if i < WRONG.len() - 1 {
                assert_eq!(outcome, Outcome::Continue { remaining: 5 - i });
                assert!(!game.is_game_over(), "game over too early at guess {}", i + 1);
            } else {
                assert_eq!(
                    outcome,
                    Outcome::Lost {
                        target: Equation::parse(TARGET).unwrap()
                    }
                );
                assert!(outcome.to_string().to_lowercase().contains("game over"));
            }
            assert!(!game.is_won());
        }
        assert!(game.is_game_over());
        assert_eq!(game.attempts(), MAX_ATTEMPTS);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = new_game();
        for guess in &WRONG[..5] {
            game.submit_guess(guess);
        }
        assert_eq!(game.submit_guess(TARGET), Outcome::Won { attempts: 6 });
        assert!(game.is_won());
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let mut game = new_game();
        game.submit_guess(TARGET);

        let outcome = game.submit_guess("13+24=37");
        assert_eq!(outcome, Outcome::AlreadyOver);
        assert_eq!(outcome.label(), "already-over");
        assert!(outcome.to_string().to_lowercase().contains("already over"));
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.guesses().len(), 1);

        // Even an invalid guess reports already-over first
        assert_eq!(game.submit_guess("nonsense"), Outcome::AlreadyOver);
    }

    #[test]
    fn history_pairs_guesses_with_feedback() {
        let mut game = new_game();
        game.submit_guess("13+24=37");
        game.submit_guess("10+10=20");

        let history: Vec<_> = game.history().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].0.as_str(), "10+10=20");
        assert_eq!(history[0].1.marks()[0], Mark::Exact);
    }

    #[test]
    fn outcome_acceptance() {
        assert!(Outcome::Continue { remaining: 1 }.is_accepted());
        assert!(Outcome::Won { attempts: 1 }.is_accepted());
        assert!(!Outcome::AlreadyOver.is_accepted());
        assert!(!Outcome::Invalid(EquationError::DivisionByZero).is_accepted());
    }

    #[test]
    fn guess_validation() {
        assert!(is_valid_guess("12+34=46"));
        assert!(is_valid_guess("56-23=33"));
        assert!(!is_valid_guess("12+34=467"));
        assert!(!is_valid_guess("12+34=4!"));
        assert!(!is_valid_guess("12+34=47"));
        assert!(!is_valid_guess("1234+5678"));
    }
}
