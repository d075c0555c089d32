//! Session statistics
//!
//! In-memory only; nothing is persisted between runs.

use super::state::{GameState, MAX_ATTEMPTS};

/// Running totals for one play session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of attempts (index 1..=6; index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Fold a finished game into the totals
    ///
    /// Returns `false` (and records nothing) if the game is still running.
    pub fn record(&mut self, game: &GameState) -> bool {
        if !game.is_game_over() {
            return false;
        }

        self.games_played += 1;
        if game.is_won() {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
            if let Some(slot) = self.guess_distribution.get_mut(game.attempts()) {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
        true
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.games_played - self.games_won
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Mean attempts over won games
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(attempts, &count)| attempts * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}
