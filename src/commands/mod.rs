//! Command implementations

mod score;
mod simple;

pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
