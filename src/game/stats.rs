//! Cumulative play statistics
//!
//! In-memory bookkeeping for the current process: games played, win rate,
//! streaks, and the guess-count histogram. Receives one event per finished
//! game; durable storage is somebody else's job.

/// Largest attempt budget across all modes (absurdle)
pub const MAX_HISTOGRAM_ATTEMPTS: usize = 10;

/// Session statistics
#[derive(Debug, Default, Clone)]
pub struct Stats {
    played: usize,
    wins: usize,
    current_streak: usize,
    max_streak: usize,
    /// Wins by attempts used; index 0 holds one-guess wins
    distribution: [usize; MAX_HISTOGRAM_ATTEMPTS],
    losses: usize,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game
    pub fn record(&mut self, won: bool, attempts_used: usize) {
        self.played += 1;
        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if (1..=MAX_HISTOGRAM_ATTEMPTS).contains(&attempts_used) {
                self.distribution[attempts_used - 1] += 1;
            }
        } else {
            self.current_streak = 0;
            self.losses += 1;
        }
    }

    #[must_use]
    pub const fn played(&self) -> usize {
        self.played
    }

    #[must_use]
    pub const fn wins(&self) -> usize {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> usize {
        self.losses
    }

    #[must_use]
    pub const fn current_streak(&self) -> usize {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> usize {
        self.max_streak
    }

    /// Win percentage, rounded to whole percent
    #[must_use]
    pub fn win_pct(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            ((self.wins as f64 / self.played as f64) * 100.0).round() as u32
        }
    }

    /// Wins by attempts used; index 0 holds one-guess wins
    #[must_use]
    pub const fn distribution(&self) -> &[usize; MAX_HISTOGRAM_ATTEMPTS] {
        &self.distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_start_empty() {
        let stats = Stats::new();
        assert_eq!(stats.played(), 0);
        assert_eq!(stats.win_pct(), 0);
        assert_eq!(stats.current_streak(), 0);
    }

    #[test]
    fn stats_streak_grows_and_resets() {
        let mut stats = Stats::new();

        stats.record(true, 3);
        stats.record(true, 4);
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.max_streak(), 2);

        stats.record(false, 6);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);

        stats.record(true, 2);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn stats_histogram_buckets() {
        let mut stats = Stats::new();

        stats.record(true, 1);
        stats.record(true, 3);
        stats.record(true, 3);
        stats.record(false, 6);

        assert_eq!(stats.distribution()[0], 1);
        assert_eq!(stats.distribution()[2], 2);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.played(), 4);
    }

    #[test]
    fn stats_win_pct_rounds() {
        let mut stats = Stats::new();
        stats.record(true, 2);
        stats.record(true, 3);
        stats.record(false, 6);

        assert_eq!(stats.win_pct(), 67);
    }

    #[test]
    fn stats_absurdle_attempts_fit_histogram() {
        let mut stats = Stats::new();
        stats.record(true, 10);
        assert_eq!(stats.distribution()[9], 1);
    }
}
