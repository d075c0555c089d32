//! Terminal output: feedback renderers and printing helpers

pub mod display;
pub mod formatters;

pub use display::{
    format_board, outcome_line, print_benchmark_result, print_check_result, print_equations,
    print_game_over, print_score_result, print_session_summary, print_welcome, share_text,
    welcome_message,
};
pub use formatters::{
    AnsiRenderer, EmojiRenderer, PlainRenderer, Renderer, Tile, create_progress_bar, key_hints,
    tiles,
};
