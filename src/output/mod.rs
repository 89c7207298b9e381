//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_score_result, print_stats};
pub use formatters::{colorize_guess, histogram_bar, pattern_to_emoji};
