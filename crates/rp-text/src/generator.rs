// SPDX-License-Identifier: MIT
//
//! The text-generation capability consumed by content assemblers.
//!
//! Anything that fills markup with placeholder text needs exactly four
//! operations. `None` lets the generator pick a count from its own
//! configuration.

/// A source of placeholder text.
pub trait TextGenerator {
    /// One word; `letters` is a target length, not an exact one.
    fn random_word(&mut self, letters: Option<usize>) -> String;

    /// A sentence without punctuation, suitable for headings.
    fn random_title(&mut self, words: Option<usize>) -> String;

    /// A sentence of `words` words.
    fn random_sentence(&mut self, words: Option<usize>) -> String;

    /// `sentences` sentences joined by single spaces.
    fn random_paragraph(&mut self, sentences: Option<usize>) -> String;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &mut T {
    fn random_word(&mut self, letters: Option<usize>) -> String {
        (**self).random_word(letters)
    }

    fn random_title(&mut self, words: Option<usize>) -> String {
        (**self).random_title(words)
    }

    fn random_sentence(&mut self, words: Option<usize>) -> String {
        (**self).random_sentence(words)
    }

    fn random_paragraph(&mut self, sentences: Option<usize>) -> String {
        (**self).random_paragraph(sentences)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn random_word(&mut self, letters: Option<usize>) -> String {
        (**self).random_word(letters)
    }

    fn random_title(&mut self, words: Option<usize>) -> String {
        (**self).random_title(words)
    }

    fn random_sentence(&mut self, words: Option<usize>) -> String {
        (**self).random_sentence(words)
    }

    fn random_paragraph(&mut self, sentences: Option<usize>) -> String {
        (**self).random_paragraph(sentences)
    }
}
