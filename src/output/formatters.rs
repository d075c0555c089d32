//! Formatting utilities for terminal output
//!
//! Renderers turn a guess and its classification into text. They all build on
//! [`tiles`], a display-agnostic list of (character, mark) pairs, so the core
//! never depends on how feedback is drawn.

use crate::core::{Classification, Mark, VALID_CHARACTERS};
use crate::game::GameState;
use colored::Colorize;

/// One guessed character with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub ch: char,
    pub mark: Mark,
}

/// Pair each character of `guess` with its mark
#[must_use]
pub fn tiles(guess: &str, classification: &Classification) -> Vec<Tile> {
    guess
        .chars()
        .zip(classification.marks())
        .map(|(ch, &mark)| Tile { ch, mark })
        .collect()
}

/// Turns feedback into a printable string
pub trait Renderer {
    fn render_tile(&self, tile: Tile) -> String;

    fn render(&self, guess: &str, classification: &Classification) -> String {
        tiles(guess, classification)
            .into_iter()
            .map(|tile| self.render_tile(tile))
            .collect()
    }
}

/// `[1G][2B][+G]...` (no colors, stable for logs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_tile(&self, tile: Tile) -> String {
        format!("[{}{}]", tile.ch, tile.mark.letter())
    }
}

/// Colored squares only, for sharing results without revealing the guess
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiRenderer;

impl Renderer for EmojiRenderer {
    fn render_tile(&self, tile: Tile) -> String {
        tile.mark.emoji().to_string()
    }
}

/// Black text on green, yellow or white background blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn render_tile(&self, tile: Tile) -> String {
        let cell = format!(" {} ", tile.ch).black();
        match tile.mark {
            Mark::Exact => cell.on_green(),
            Mark::Partial => cell.on_yellow(),
            Mark::Absent => cell.on_white(),
        }
        .to_string()
    }
}

/// Best mark seen so far for every valid character
///
/// `None` means the character has not been played yet.
#[must_use]
pub fn key_hints(game: &GameState) -> Vec<(char, Option<Mark>)> {
    VALID_CHARACTERS
        .chars()
        .map(|key| {
            let best = game
                .history()
                .flat_map(|(guess, feedback)| tiles(guess.as_str(), feedback))
                .filter(|tile| tile.ch == key)
                .map(|tile| tile.mark)
                .max();
            (key, best)
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
