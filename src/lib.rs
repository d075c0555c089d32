//! Nerdle
//!
//! A terminal math-equation guessing game: guess a hidden 8-character
//! equation such as `12+34=46` in six attempts, with Wordle-style feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle::core::{Equation, compare};
//! use nerdle::game::{GameState, Outcome};
//!
//! let target = Equation::parse("12+34=46").unwrap();
//! assert_eq!(compare("13+24=46", target.as_str()).to_string(), "GYGYGGGG");
//!
//! let mut game = GameState::new(target);
//! assert!(matches!(game.submit_guess("12+34=46"), Outcome::Won { attempts: 1 }));
//! ```

// Equations and feedback
pub mod core;

// Random equation generation
pub mod generator;

// Game state machine and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
