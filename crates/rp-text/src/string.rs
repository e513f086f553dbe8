// SPDX-License-Identifier: MIT
//
//! Pronounceable pseudo-language text.
//!
//! Text is built strictly bottom-up with no backtracking:
//!
//! ```text
//! clusters ──► word ──► sentence ──► paragraph
//!                          │
//!                          └──► title (sentence without punctuation)
//! ```
//!
//! # Words
//!
//! A word alternates vowel clusters and consonant clusters. It opens
//! either with a vowel (followed by a consonant if the word needs more
//! letters) or with a word-initial consonant cluster, then keeps
//! alternating vowels and mid-word consonants until it is within one
//! letter of the target. A last vowel or word-final consonant cluster
//! closes it.
//!
//! Clusters are never split, so a word can end up a few letters longer
//! than requested: `"ckt"` or `"tsch"` at the end of an eight-letter
//! target still lands in full.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cluster::{
    AFTER_INITIAL_VOWEL, BETWEEN_VOWELS, END_PUNCTUATION, IN_PUNCTUATION, MAX_CLUSTER_LEN, VOWELS,
    WORD_FINAL, WORD_INITIAL,
};
use crate::generator::TextGenerator;
use crate::options::TextOptions;

/// Shortest word length the generator aims for.
pub const MIN_WORD_LETTERS: usize = 2;

/// Longest word length the generator aims for.
pub const MAX_WORD_LETTERS: usize = 64;

/// Shortest sentence drawn when the word count is left to chance.
const MIN_RANDOM_WORDS: usize = 2;

/// Phonotactic generator for words, titles, sentences and paragraphs.
#[derive(Debug, Clone)]
pub struct StringRandomizer<R = StdRng> {
    pub options: TextOptions,
    rng: R,
}

impl StringRandomizer<StdRng> {
    /// OS-seeded generator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for StringRandomizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> StringRandomizer<R> {
    /// Wrap an existing random source with default options.
    pub fn with_rng(rng: R) -> Self {
        Self {
            options: TextOptions::default(),
            rng,
        }
    }

    /// Builder-style options override.
    #[must_use]
    pub fn with_options(mut self, options: TextOptions) -> Self {
        self.options = options;
        self
    }

    // ─── Random counts ───────────────────────────────────────────────────

    fn random_letter_count(&mut self) -> usize {
        let max = self.options.max_letters_per_word.max(MIN_WORD_LETTERS);
        self.rng.random_range(MIN_WORD_LETTERS..=max)
    }

    fn random_word_count(&mut self) -> usize {
        let max = self.options.max_words_per_sentence.max(MIN_RANDOM_WORDS);
        self.rng.random_range(MIN_RANDOM_WORDS..=max)
    }

    fn random_sentence_count(&mut self) -> usize {
        let max = self.options.max_sentences_per_paragraph.max(1);
        self.rng.random_range(1..=max)
    }

    /// Bernoulli draw; a likelihood of zero (or NaN) consumes no randomness.
    fn chance(&mut self, likelihood: f64) -> bool {
        likelihood > 0.0 && self.rng.random_bool(likelihood.min(1.0))
    }

    // ─── Generation ──────────────────────────────────────────────────────

    /// A lowercase word of roughly `letters` letters.
    ///
    /// The result is at least `letters` long and overshoots by less than
    /// two cluster lengths. Targets are clamped to
    /// [`MIN_WORD_LETTERS`]`..=`[`MAX_WORD_LETTERS`].
    pub fn word(&mut self, letters: usize) -> String {
        let target = letters.clamp(MIN_WORD_LETTERS, MAX_WORD_LETTERS);
        let rng = &mut self.rng;
        let mut word = String::with_capacity(target + 2 * MAX_CLUSTER_LEN);

        let mut vowel_next = rng.random_bool(0.5);
        if vowel_next {
            word.push_str(VOWELS.pick(rng));
            if word.len() < target {
                word.push_str(AFTER_INITIAL_VOWEL.pick(rng));
            } else {
                vowel_next = false;
            }
        } else {
            word.push_str(WORD_INITIAL.pick(rng));
            vowel_next = true;
        }

        while word.len() + 1 < target {
            let pool = if vowel_next { &VOWELS } else { &BETWEEN_VOWELS };
            word.push_str(pool.pick(rng));
            vowel_next = !vowel_next;
        }

        let last = if vowel_next { &VOWELS } else { &WORD_FINAL };
        word.push_str(last.pick(rng));

        trace!("word target={target} -> {word:?}");
        word
    }

    /// A sentence of `words` words with no punctuation at all.
    pub fn title(&mut self, words: usize) -> String {
        let saved = self.options.punctuation_likelihood;
        self.options.punctuation_likelihood = 0.0;
        let title = self.sentence(words);
        self.options.punctuation_likelihood = saved;
        title
    }

    /// A sentence of exactly `words` space-separated words.
    ///
    /// The first word is capitalized when `capitalize_sentence_initial` is
    /// set; any word may be capitalized with `capitalization_likelihood`.
    /// Between words (never after the first word, never in the last two
    /// positions) a comma or semicolon appears with
    /// `punctuation_likelihood`, and the sentence closes with an end mark
    /// unless that likelihood is zero.
    pub fn sentence(&mut self, words: usize) -> String {
        let capitalization = self.options.capitalization_likelihood;
        let punctuation = self.options.punctuation_likelihood;
        let mut sentence = String::new();

        for n in 1..=words {
            let letters = self.random_letter_count();
            let mut word = self.word(letters);
            if (n == 1 && self.options.capitalize_sentence_initial) || self.chance(capitalization)
            {
                word = capitalize(&word);
            }
            sentence.push_str(&word);

            if n > 1 && n + 1 < words && self.chance(punctuation) {
                sentence.push_str(IN_PUNCTUATION.pick(&mut self.rng));
            }

            if n < words {
                sentence.push(' ');
            } else if punctuation > 0.0 {
                sentence.push_str(END_PUNCTUATION.pick(&mut self.rng));
            }
        }
        sentence
    }

    /// `sentences` sentences of random length, joined by single spaces.
    pub fn paragraph(&mut self, sentences: usize) -> String {
        (0..sentences)
            .map(|_| {
                let words = self.random_word_count();
                self.sentence(words)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<R: Rng> TextGenerator for StringRandomizer<R> {
    fn random_word(&mut self, letters: Option<usize>) -> String {
        let letters = letters.unwrap_or_else(|| self.random_letter_count());
        self.word(letters)
    }

    fn random_title(&mut self, words: Option<usize>) -> String {
        let words = words.unwrap_or_else(|| self.random_word_count());
        self.title(words)
    }

    fn random_sentence(&mut self, words: Option<usize>) -> String {
        let words = words.unwrap_or_else(|| self.random_word_count());
        self.sentence(words)
    }

    fn random_paragraph(&mut self, sentences: Option<usize>) -> String {
        let sentences = sentences.unwrap_or_else(|| self.random_sentence_count());
        self.paragraph(sentences)
    }
}

/// Upper-case the first letter, leave the rest alone.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const END_MARKS: [char; 4] = ['.', '?', '!', ':'];
    const IN_MARKS: [char; 2] = [',', ';'];

    fn quiet(seed: u64) -> StringRandomizer {
        let mut s = StringRandomizer::seeded(seed);
        s.options.punctuation_likelihood = 0.0;
        s.options.capitalization_likelihood = 0.0;
        s
    }

    fn count_end_marks(text: &str) -> usize {
        text.chars().filter(|c| END_MARKS.contains(c)).count()
    }

    // ── capitalize ──────────────────────────────────────────────────

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("schlau"), "Schlau");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    // ── word ────────────────────────────────────────────────────────

    #[test]
    fn word_is_lowercase_letters() {
        let mut s = StringRandomizer::seeded(1);
        for letters in 2..=12 {
            for _ in 0..200 {
                let w = s.word(letters);
                assert!(w.bytes().all(|b| b.is_ascii_lowercase()), "{w:?}");
            }
        }
    }

    #[test]
    fn word_length_within_cluster_tolerance() {
        let mut s = StringRandomizer::seeded(2);
        for letters in 2..=15 {
            for _ in 0..300 {
                let len = s.word(letters).len();
                assert!(len + 1 >= letters, "{len} too short for {letters}");
                assert!(
                    len < letters + 2 * MAX_CLUSTER_LEN,
                    "{len} overshoots {letters}"
                );
            }
        }
    }

    #[test]
    fn tiny_targets_are_raised() {
        let mut s = StringRandomizer::seeded(3);
        for _ in 0..100 {
            assert!(s.word(0).len() >= MIN_WORD_LETTERS);
            assert!(s.word(1).len() >= MIN_WORD_LETTERS);
        }
    }

    #[test]
    fn huge_targets_are_capped() {
        let mut s = StringRandomizer::seeded(5);
        for letters in [MAX_WORD_LETTERS + 1, usize::MAX / 2, usize::MAX] {
            let len = s.word(letters).len();
            assert!(len + 1 >= MAX_WORD_LETTERS, "{len}");
            assert!(len < MAX_WORD_LETTERS + 2 * MAX_CLUSTER_LEN, "{len}");
        }
    }

    #[test]
    fn random_word_respects_max_letters() {
        let mut s = StringRandomizer::seeded(4);
        s.options.max_letters_per_word = 4;
        for _ in 0..300 {
            let len = s.random_word(None).len();
            assert!(len < 4 + 2 * MAX_CLUSTER_LEN, "{len}");
        }
    }

    // ── sentence ────────────────────────────────────────────────────

    #[test]
    fn sentence_without_punctuation_has_exact_word_count() {
        let mut s = quiet(5);
        for n in 1..=25 {
            let sentence = s.sentence(n);
            let tokens: Vec<&str> = sentence.split(' ').collect();
            assert_eq!(tokens.len(), n, "{sentence:?}");
            assert!(tokens.iter().all(|t| t.chars().all(char::is_alphabetic)));
        }
    }

    #[test]
    fn empty_sentence() {
        assert_eq!(StringRandomizer::seeded(6).sentence(0), "");
    }

    #[test]
    fn sentence_initial_capital() {
        let mut s = quiet(7);
        for _ in 0..50 {
            let sentence = s.sentence(6);
            let mut words = sentence.split(' ');
            let first = words.next().unwrap();
            assert!(first.starts_with(|c: char| c.is_ascii_uppercase()), "{sentence:?}");
            assert!(words.all(|w| w.bytes().all(|b| b.is_ascii_lowercase())));
        }
    }

    #[test]
    fn no_capitals_when_disabled() {
        let mut s = quiet(8);
        s.options.capitalize_sentence_initial = false;
        let sentence = s.sentence(20);
        assert_eq!(sentence, sentence.to_lowercase());
    }

    #[test]
    fn full_capitalization_likelihood_capitalizes_every_word() {
        let mut s = quiet(9);
        s.options.capitalization_likelihood = 1.0;
        let sentence = s.sentence(12);
        assert!(
            sentence.split(' ').all(|w| w.starts_with(|c: char| c.is_ascii_uppercase())),
            "{sentence:?}"
        );
    }

    #[test]
    fn punctuated_sentence_ends_with_mark() {
        let mut s = StringRandomizer::seeded(10);
        s.options.punctuation_likelihood = 1.0;
        for n in 1..=10 {
            let sentence = s.sentence(n);
            let last = sentence.chars().last().unwrap();
            assert!(END_MARKS.contains(&last), "{sentence:?}");
            assert_eq!(count_end_marks(&sentence), 1);
        }
    }

    #[test]
    fn in_sentence_marks_skip_first_and_last_positions() {
        let mut s = StringRandomizer::seeded(11);
        s.options.punctuation_likelihood = 1.0;
        let sentence = s.sentence(8);
        let words: Vec<&str> = sentence.split(' ').collect();
        for (i, w) in words.iter().enumerate() {
            let n = i + 1;
            let marked = w.ends_with(IN_MARKS);
            // Likelihood 1: every eligible position gets a mark.
            assert_eq!(marked, n > 1 && n + 1 < 8, "position {n} in {sentence:?}");
        }
    }

    // ── title ───────────────────────────────────────────────────────

    #[test]
    fn title_has_no_punctuation_and_restores_options() {
        let mut s = StringRandomizer::seeded(12);
        s.options.punctuation_likelihood = 1.0;
        let title = s.title(9);
        assert_eq!(title.split(' ').count(), 9);
        assert!(title.chars().all(|c| c.is_alphabetic() || c == ' '), "{title:?}");
        assert_eq!(s.options.punctuation_likelihood, 1.0);
    }

    // ── paragraph ───────────────────────────────────────────────────

    #[test]
    fn paragraph_has_one_end_mark_per_sentence() {
        for seed in 0..20 {
            let mut s = StringRandomizer::seeded(seed);
            let p = s.random_paragraph(Some(3));
            assert_eq!(count_end_marks(&p), 3, "{p:?}");
        }
    }

    #[test]
    fn random_paragraph_respects_max_sentences() {
        let mut s = StringRandomizer::seeded(13);
        s.options.max_sentences_per_paragraph = 4;
        s.options.punctuation_likelihood = 0.5;
        for _ in 0..100 {
            let n = count_end_marks(&s.random_paragraph(None));
            assert!((1..=4).contains(&n), "{n} sentences");
        }
    }

    #[test]
    fn random_sentence_respects_max_words() {
        let mut s = quiet(14);
        s.options.max_words_per_sentence = 5;
        for _ in 0..100 {
            let n = s.random_sentence(None).split(' ').count();
            assert!((2..=5).contains(&n), "{n} words");
        }
    }

    #[test]
    fn same_seed_same_text() {
        let mut a = StringRandomizer::seeded(77);
        let mut b = StringRandomizer::seeded(77);
        assert_eq!(a.random_paragraph(None), b.random_paragraph(None));
        assert_eq!(a.random_title(None), b.random_title(None));
    }
}
