// SPDX-License-Identifier: MIT
//
//! Weighted letter-cluster and punctuation pools.
//!
//! Words are assembled from clusters rather than single letters, so that
//! combinations like `sch`, `ck` or `ttr` stay intact. Each pool lists its
//! entries with an explicit integer weight; a pick is proportional to the
//! weight.
//!
//! | Pool                  | Used for                                    |
//! |-----------------------|---------------------------------------------|
//! | [`VOWELS`]            | every vowel position                        |
//! | [`WORD_INITIAL`]      | first cluster of a consonant-initial word   |
//! | [`AFTER_INITIAL_VOWEL`] | consonant after a word-initial vowel      |
//! | [`BETWEEN_VOWELS`]    | consonants in the middle of a word          |
//! | [`WORD_FINAL`]        | closing consonant cluster                   |
//! | [`END_PUNCTUATION`]   | after the last word of a sentence           |
//! | [`IN_PUNCTUATION`]    | between words inside a sentence             |
//!
//! The four consonant pools share one table of single consonants
//! and add their own multi-letter clusters on top.

use rand::Rng;

/// A `(value, weight)` table.
pub type WeightedTable = [(&'static str, u32)];

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

const VOWEL_TABLE: &WeightedTable = &[
    ("a", 4), ("au", 1), ("e", 4), ("ei", 1),
    ("i", 3), ("ie", 1), ("o", 3), ("u", 3),
];

const CONSONANT_TABLE: &WeightedTable = &[
    ("b", 3), ("c", 3), ("d", 3), ("f", 3), ("g", 3), ("h", 3), ("j", 1),
    ("k", 3), ("l", 3), ("m", 3), ("n", 3), ("p", 3), ("q", 1), ("r", 3),
    ("s", 3), ("t", 3), ("v", 2), ("w", 3), ("x", 1), ("y", 1), ("z", 2),
];

const WORD_INITIAL_CLUSTERS: &WeightedTable = &[
    ("bl", 1), ("ch", 1), ("dr", 1), ("fl", 1), ("fr", 1), ("gr", 1), ("kn", 1),
    ("kr", 1), ("pr", 1), ("sch", 1), ("schl", 1), ("scht", 1), ("st", 1), ("tr", 1),
];

const AFTER_INITIAL_VOWEL_CLUSTERS: &WeightedTable = &[
    ("ch", 1), ("cht", 1), ("ck", 1), ("ff", 1), ("kt", 1), ("mm", 1), ("nd", 1),
    ("nn", 1), ("pp", 1), ("rt", 1), ("sch", 1), ("ss", 1), ("st", 1), ("str", 1),
    ("tr", 1), ("tt", 1), ("ttr", 1), ("tz", 1), ("zt", 1),
];

const BETWEEN_VOWELS_CLUSTERS: &WeightedTable = &[
    ("ch", 1), ("cht", 1), ("ck", 1), ("ff", 1), ("kt", 1), ("lv", 1), ("mm", 1),
    ("nd", 1), ("nn", 1), ("pp", 1), ("rt", 1), ("sch", 1), ("ss", 1), ("st", 1),
    ("str", 1), ("tr", 1), ("tt", 1), ("ts", 1), ("tz", 1),
];

const WORD_FINAL_CLUSTERS: &WeightedTable = &[
    ("ch", 1), ("ck", 1), ("ckt", 1), ("ff", 1), ("kt", 1), ("lf", 1), ("mm", 1),
    ("nd", 1), ("nn", 1), ("rd", 1), ("rt", 1), ("sch", 1), ("ss", 1), ("st", 1),
    ("sst", 1), ("ts", 1), ("tsch", 1), ("tt", 1), ("tts", 1), ("tzt", 1), ("zt", 1),
];

const END_PUNCTUATION_TABLE: &WeightedTable = &[(".", 11), ("?", 1), ("!", 1), (":", 1)];

// No colon here, so every `.?!:` in a paragraph closes a sentence.
const IN_PUNCTUATION_TABLE: &WeightedTable = &[(",", 11), (";", 1)];

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

pub static VOWELS: WeightedPool = WeightedPool::new(&[VOWEL_TABLE]);
pub static WORD_INITIAL: WeightedPool =
    WeightedPool::new(&[WORD_INITIAL_CLUSTERS, CONSONANT_TABLE]);
pub static AFTER_INITIAL_VOWEL: WeightedPool =
    WeightedPool::new(&[AFTER_INITIAL_VOWEL_CLUSTERS, CONSONANT_TABLE]);
pub static BETWEEN_VOWELS: WeightedPool =
    WeightedPool::new(&[BETWEEN_VOWELS_CLUSTERS, CONSONANT_TABLE]);
pub static WORD_FINAL: WeightedPool = WeightedPool::new(&[WORD_FINAL_CLUSTERS, CONSONANT_TABLE]);
pub static END_PUNCTUATION: WeightedPool = WeightedPool::new(&[END_PUNCTUATION_TABLE]);
pub static IN_PUNCTUATION: WeightedPool = WeightedPool::new(&[IN_PUNCTUATION_TABLE]);

/// Length of the longest letter cluster in any word pool.
pub const MAX_CLUSTER_LEN: usize = max_len(&[
    VOWEL_TABLE,
    CONSONANT_TABLE,
    WORD_INITIAL_CLUSTERS,
    AFTER_INITIAL_VOWEL_CLUSTERS,
    BETWEEN_VOWELS_CLUSTERS,
    WORD_FINAL_CLUSTERS,
]);

const fn max_len(parts: &[&WeightedTable]) -> usize {
    let mut longest = 0;
    let mut p = 0;
    while p < parts.len() {
        let mut i = 0;
        while i < parts[p].len() {
            if parts[p][i].0.len() > longest {
                longest = parts[p][i].0.len();
            }
            i += 1;
        }
        p += 1;
    }
    longest
}

// ---------------------------------------------------------------------------
// WeightedPool
// ---------------------------------------------------------------------------

/// A weighted pool assembled from one or more tables.
///
/// The total weight is computed at compile time; an empty or all-zero pool
/// fails to build.
#[derive(Debug)]
pub struct WeightedPool {
    parts: &'static [&'static WeightedTable],
    total: u32,
}

impl WeightedPool {
    /// Build a pool from tables. Panics (at compile time for statics) if
    /// the total weight is zero.
    #[must_use]
    pub const fn new(parts: &'static [&'static WeightedTable]) -> Self {
        let mut total = 0;
        let mut p = 0;
        while p < parts.len() {
            let mut i = 0;
            while i < parts[p].len() {
                total += parts[p][i].1;
                i += 1;
            }
            p += 1;
        }
        assert!(total > 0, "weighted pool needs a positive total weight");
        Self { parts, total }
    }

    /// Sum of all weights.
    #[must_use]
    pub const fn total_weight(&self) -> u32 {
        self.total
    }

    /// Combined weight of `value` across every table in the pool.
    #[must_use]
    pub fn weight_of(&self, value: &str) -> u32 {
        self.entries().filter(|(v, _)| *v == value).map(|(_, w)| w).sum()
    }

    /// Every `(value, weight)` entry, table by table.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.parts.iter().flat_map(|table| table.iter().copied())
    }

    /// Draw one value with probability `weight / total`.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &'static str {
        let mut roll = rng.random_range(0..self.total);
        let mut last = "";
        for (value, weight) in self.entries() {
            if roll < weight {
                return value;
            }
            roll -= weight;
            last = value;
        }
        last
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word_pools() -> [&'static WeightedPool; 5] {
        [&VOWELS, &WORD_INITIAL, &AFTER_INITIAL_VOWEL, &BETWEEN_VOWELS, &WORD_FINAL]
    }

    #[test]
    fn totals_match_tables() {
        assert_eq!(VOWELS.total_weight(), 20);
        assert_eq!(WeightedPool::new(&[CONSONANT_TABLE]).total_weight(), 53);
        assert_eq!(WORD_INITIAL.total_weight(), 14 + 53);
        assert_eq!(WORD_FINAL.total_weight(), 21 + 53);
        assert_eq!(END_PUNCTUATION.total_weight(), 14);
        assert_eq!(IN_PUNCTUATION.total_weight(), 12);
    }

    #[test]
    fn weight_of_sums_across_tables() {
        assert_eq!(VOWELS.weight_of("a"), 4);
        assert_eq!(WORD_FINAL.weight_of("t"), 3);
        assert_eq!(WORD_FINAL.weight_of("tsch"), 1);
        assert_eq!(VOWELS.weight_of("b"), 0);
    }

    #[test]
    fn longest_cluster_is_four() {
        assert_eq!(MAX_CLUSTER_LEN, 4);
    }

    #[test]
    fn clusters_are_lowercase_ascii() {
        for pool in word_pools() {
            for (value, weight) in pool.entries() {
                assert!(!value.is_empty());
                assert!(value.bytes().all(|b| b.is_ascii_lowercase()), "{value:?}");
                assert!(weight > 0, "{value:?} has zero weight");
            }
        }
    }

    #[test]
    fn pick_returns_pool_members() {
        let mut rng = StdRng::seed_from_u64(5);
        for pool in word_pools() {
            for _ in 0..500 {
                let v = pool.pick(&mut rng);
                assert!(pool.weight_of(v) > 0, "{v:?} not in pool");
            }
        }
    }

    #[test]
    fn pick_follows_weights() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws = 28_000;
        let periods = (0..draws)
            .filter(|_| END_PUNCTUATION.pick(&mut rng) == ".")
            .count();
        // Expected share 11/14 ≈ 0.786.
        let share = periods as f64 / f64::from(draws);
        assert!((share - 11.0 / 14.0).abs() < 0.02, "period share {share}");
    }

    #[test]
    fn in_sentence_marks_never_end_a_sentence() {
        for (mark, _) in IN_PUNCTUATION.entries() {
            assert_eq!(END_PUNCTUATION.weight_of(mark), 0, "{mark:?}");
        }
    }
}
