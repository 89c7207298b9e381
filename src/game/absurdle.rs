//! Adversarial target narrowing
//!
//! Instead of committing to a secret word, the adversary keeps every
//! candidate alive that it can. Each guess partitions the pool into buckets
//! by the pattern the guess would produce against each candidate; the
//! adversary reveals the pattern of the largest bucket and that bucket
//! becomes the new pool.

use crate::core::{Pattern, Word};
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Narrow the candidate pool against one guess
///
/// Returns the revealed pattern and the surviving pool. The pool is replaced
/// wholesale, never mutated in place. The guess does not have to be a pool
/// member.
///
/// Bucket selection is deterministic: greatest cardinality first, ties broken
/// by the numerically smallest pattern value. The all-correct pattern has the
/// maximum value, so a tied winning bucket is never chosen; the adversary
/// concedes only when every surviving candidate is the guess itself.
///
/// # Panics
/// Panics if `pool` is empty. A non-empty pool always yields at least one
/// non-empty bucket, so a correctly maintained session can never trip this.
#[must_use]
pub fn narrow(guess: &Word, pool: Vec<Word>) -> (Pattern, Vec<Word>) {
    assert!(!pool.is_empty(), "candidate pool must not be empty");

    let pool_len = pool.len();
    let mut buckets: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
    for word in pool {
        let pattern = Pattern::evaluate(guess, &word);
        buckets.entry(pattern).or_default().push(word);
    }

    let chosen = buckets
        .iter()
        .max_by_key(|(pattern, members)| (members.len(), Reverse(pattern.value())))
        .map(|(pattern, _)| *pattern)
        .expect("non-empty pool produces at least one bucket");

    let survivors = buckets
        .remove(&chosen)
        .expect("chosen key taken from the bucket map");

    debug!(
        "narrow: guess={guess} buckets={} pool {pool_len} -> {} pattern={chosen}",
        buckets.len() + 1,
        survivors.len(),
    );

    (chosen, survivors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn narrow_keeps_largest_bucket() {
        // Guess shares nothing with three of the four candidates, so the
        // all-absent bucket (size 3) survives.
        let guess = Word::new("crane").unwrap();
        let candidates = pool(&["stump", "study", "dumpy", "crane"]);

        let (pattern, survivors) = narrow(&guess, candidates);

        assert_eq!(pattern, Pattern::new(0));
        assert_eq!(survivors.len(), 3);
        assert!(survivors.iter().all(|w| w.text() != "crane"));
    }

    #[test]
    fn narrow_never_wins_on_tie() {
        // All three candidates land in distinct singleton buckets. The
        // perfect bucket for the guessed pool member must lose the tie.
        let guess = Word::new("crane").unwrap();
        let candidates = pool(&["crane", "crate", "trace"]);

        let (pattern, survivors) = narrow(&guess, candidates);

        assert!(!pattern.is_win());
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].text(), "trace");
    }

    #[test]
    fn narrow_collapses_to_win_only_when_forced() {
        let guess = Word::new("crane").unwrap();
        let candidates = pool(&["crane"]);

        let (pattern, survivors) = narrow(&guess, candidates);

        assert!(pattern.is_win());
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn narrow_result_is_subset_and_nonempty() {
        let guess = Word::new("slate").unwrap();
        let candidates = pool(&["crane", "crate", "trace", "grate", "irate"]);
        let before = candidates.clone();

        let (_, survivors) = narrow(&guess, candidates);

        assert!(!survivors.is_empty());
        assert!(survivors.iter().all(|w| before.contains(w)));
    }

    #[test]
    fn narrow_survivors_all_consistent_with_pattern() {
        let guess = Word::new("slate").unwrap();
        let candidates = pool(&["crane", "crate", "trace", "grate", "irate"]);

        let (pattern, survivors) = narrow(&guess, candidates);

        for word in &survivors {
            assert_eq!(Pattern::evaluate(&guess, word), pattern);
        }
    }

    #[test]
    fn narrow_is_deterministic() {
        let guess = Word::new("slate").unwrap();
        let candidates = pool(&["crane", "crate", "trace", "grate", "irate", "stale"]);

        let (p1, s1) = narrow(&guess, candidates.clone());
        let (p2, s2) = narrow(&guess, candidates);

        assert_eq!(p1, p2);
        assert_eq!(s1, s2);
    }

    #[test]
    fn narrow_guess_outside_pool() {
        let guess = Word::new("zebra").unwrap();
        let candidates = pool(&["crane", "crate"]);

        let (pattern, survivors) = narrow(&guess, candidates);

        assert!(!pattern.is_win());
        assert!(!survivors.is_empty());
    }

    #[test]
    #[should_panic(expected = "candidate pool must not be empty")]
    fn narrow_empty_pool_panics() {
        let guess = Word::new("crane").unwrap();
        let _ = narrow(&guess, Vec::new());
    }
}
