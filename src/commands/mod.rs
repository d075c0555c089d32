//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_equation};
pub use generate::generate_equations;
pub use score::{ScoreResult, score_guess};
pub use simple::{play_session, run_simple};
