//! Game engine
//!
//! Scoring-mode dispatch, the adversarial narrower, session state, and
//! in-session statistics.

pub mod absurdle;
mod mode;
mod session;
mod stats;

pub use absurdle::narrow;
pub use mode::Mode;
pub use session::{GameSession, GameStatus, GuessError, GuessReport, Target};
pub use stats::Stats;
