// SPDX-License-Identifier: MIT
//
//! # rp-text — Pseudo-language text for randpub
//!
//! Generates pronounceable nonsense for placeholder content:
//!
//! - **[`cluster`]** — weighted vowel, consonant and punctuation pools
//! - **[`string`]** — `StringRandomizer`, building words, titles, sentences
//!   and paragraphs bottom-up from those pools
//! - **[`options`]** — `TextOptions` and the `set`-style directive parser
//! - **[`generator`]** — the `TextGenerator` capability that content
//!   assemblers depend on
//!
//! ```
//! use rp_text::{StringRandomizer, TextGenerator};
//!
//! let mut texter = StringRandomizer::seeded(1);
//! texter.options.punctuation_likelihood = 0.0;
//! let sentence = texter.random_sentence(Some(4));
//! assert_eq!(sentence.split(' ').count(), 4);
//! ```

pub mod cluster;
pub mod generator;
pub mod options;
pub mod string;

pub use generator::TextGenerator;
pub use options::{OptionError, SetDirective, TextOptions};
pub use string::StringRandomizer;
