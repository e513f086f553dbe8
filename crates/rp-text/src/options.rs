// SPDX-License-Identifier: MIT
//
//! Generator options and the `set`-style directive layer.
//!
//! [`TextOptions`] holds the tunables of the pseudo-language generator.
//! Callers can set fields directly, deserialize them with serde, or apply
//! textual directives:
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `option`         | Enable boolean / show numeric |
//! | `nooption`       | Disable boolean               |
//! | `option!`        | Toggle boolean                |
//! | `option?`        | Query current value           |
//! | `option=N`       | Assign a value                |
//! | (empty)          | Show changed options          |
//! | `all`            | Show all options              |
//!
//! # Option names
//!
//! | Full name        | Abbrev | Type    | Default |
//! |------------------|--------|---------|---------|
//! | `maxletters`     | `ml`   | integer | 10      |
//! | `maxwords`       | `mw`   | integer | 20      |
//! | `maxsentences`   | `ms`   | integer | 10      |
//! | `capinitial`     | `ci`   | bool    | true    |
//! | `capitalization` | `cap`  | 0.0–1.0 | 0.2     |
//! | `punctuation`    | `pu`   | 0.0–1.0 | 0.2     |

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// TextOptions
// ---------------------------------------------------------------------------

/// Tunables for [`StringRandomizer`](crate::StringRandomizer).
///
/// The `max_*` limits only apply when a caller leaves a count to chance;
/// explicit counts are used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Upper bound for random word lengths. Words ending in a consonant
    /// cluster may run a few letters over.
    pub max_letters_per_word: usize,
    /// Upper bound for random sentence lengths.
    pub max_words_per_sentence: usize,
    /// Upper bound for random paragraph lengths.
    pub max_sentences_per_paragraph: usize,
    /// Capitalize the first word of every sentence.
    pub capitalize_sentence_initial: bool,
    /// Chance that any word is capitalized. 0 never, 1 always.
    pub capitalization_likelihood: f64,
    /// Chance of a punctuation mark between two words. 0 also drops the
    /// sentence-final mark.
    pub punctuation_likelihood: f64,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            max_letters_per_word: 10,
            max_words_per_sentence: 20,
            max_sentences_per_paragraph: 10,
            capitalize_sentence_initial: true,
            capitalization_likelihood: 0.2,
            punctuation_likelihood: 0.2,
        }
    }
}

/// Failure to apply a directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),
    #[error("not a boolean option: {0}")]
    NotBoolean(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// The options by canonical identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    MaxLetters,
    MaxWords,
    MaxSentences,
    CapInitial,
    Capitalization,
    Punctuation,
}

impl OptionName {
    /// All options in display order.
    pub const ALL: [Self; 6] = [
        Self::MaxLetters,
        Self::MaxWords,
        Self::MaxSentences,
        Self::CapInitial,
        Self::Capitalization,
        Self::Punctuation,
    ];

    /// Resolve a full name or abbreviation.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "maxletters" | "ml" => Some(Self::MaxLetters),
            "maxwords" | "mw" => Some(Self::MaxWords),
            "maxsentences" | "ms" => Some(Self::MaxSentences),
            "capinitial" | "ci" => Some(Self::CapInitial),
            "capitalization" | "cap" => Some(Self::Capitalization),
            "punctuation" | "pu" => Some(Self::Punctuation),
            _ => None,
        }
    }

    /// The full option name.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::MaxLetters => "maxletters",
            Self::MaxWords => "maxwords",
            Self::MaxSentences => "maxsentences",
            Self::CapInitial => "capinitial",
            Self::Capitalization => "capitalization",
            Self::Punctuation => "punctuation",
        }
    }

    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::CapInitial)
    }
}

impl TextOptions {
    /// Apply one directive.
    ///
    /// Queries and listings return the text to show; assignments return
    /// `None`.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::On(name) => self.set_bool(name, |_| true),
            SetDirective::Off(name) => self.set_bool(name, |_| false),
            SetDirective::Toggle(name) => self.set_bool(name, |v| !v),
            SetDirective::Query(name) => Ok(Some(self.describe(resolve(name)?))),
            SetDirective::Assign(name, value) => self.assign(resolve(name)?, name, value),
            SetDirective::ShowChanged => {
                let defaults = Self::default();
                Ok(Some(
                    OptionName::ALL
                        .into_iter()
                        .filter(|&opt| self.describe(opt) != defaults.describe(opt))
                        .map(|opt| self.describe(opt))
                        .collect::<Vec<_>>()
                        .join(" "),
                ))
            }
            SetDirective::ShowAll => Ok(Some(
                OptionName::ALL
                    .into_iter()
                    .map(|opt| self.describe(opt))
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
        }
    }

    /// Parse and apply a whole argument string such as `"ml=6 nocapinitial"`.
    ///
    /// Stops at the first failing directive; earlier ones stay applied.
    pub fn apply_str(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut shown = Vec::new();
        for directive in parse_set(args) {
            if let Some(text) = self.apply(&directive)? {
                shown.push(text);
            }
        }
        Ok(shown)
    }

    /// `name=value` for numeric options, `name`/`noname` for booleans.
    #[must_use]
    pub fn describe(&self, option: OptionName) -> String {
        let name = option.full_name();
        match option {
            OptionName::MaxLetters => format!("{name}={}", self.max_letters_per_word),
            OptionName::MaxWords => format!("{name}={}", self.max_words_per_sentence),
            OptionName::MaxSentences => format!("{name}={}", self.max_sentences_per_paragraph),
            OptionName::CapInitial => format_bool(name, self.capitalize_sentence_initial),
            OptionName::Capitalization => format!("{name}={}", self.capitalization_likelihood),
            OptionName::Punctuation => format!("{name}={}", self.punctuation_likelihood),
        }
    }

    fn set_bool(
        &mut self,
        name: &str,
        f: impl FnOnce(bool) -> bool,
    ) -> Result<Option<String>, OptionError> {
        match resolve(name)? {
            OptionName::CapInitial => {
                self.capitalize_sentence_initial = f(self.capitalize_sentence_initial);
                Ok(None)
            }
            _ => Err(OptionError::NotBoolean(name.to_string())),
        }
    }

    fn assign(
        &mut self,
        option: OptionName,
        name: &str,
        value: &str,
    ) -> Result<Option<String>, OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match option {
            OptionName::MaxLetters => self.max_letters_per_word = value.parse().map_err(|_| invalid())?,
            OptionName::MaxWords => self.max_words_per_sentence = value.parse().map_err(|_| invalid())?,
            OptionName::MaxSentences => {
                self.max_sentences_per_paragraph = value.parse().map_err(|_| invalid())?;
            }
            OptionName::CapInitial => {
                self.capitalize_sentence_initial = value.parse().map_err(|_| invalid())?;
            }
            OptionName::Capitalization => {
                self.capitalization_likelihood = parse_likelihood(value).ok_or_else(invalid)?;
            }
            OptionName::Punctuation => {
                self.punctuation_likelihood = parse_likelihood(value).ok_or_else(invalid)?;
            }
        }
        Ok(None)
    }
}

fn resolve(name: &str) -> Result<OptionName, OptionError> {
    OptionName::lookup(name).ok_or_else(|| OptionError::Unknown(name.to_string()))
}

fn parse_likelihood(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=1.0).contains(p))
}

// ---------------------------------------------------------------------------
// Directive parsing
// ---------------------------------------------------------------------------

/// A parsed option directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option` — enable a boolean option.
    On(String),

    /// `nooption` — disable a boolean option.
    Off(String),

    /// `option!` — toggle a boolean option.
    Toggle(String),

    /// `option?` — query the current value.
    Query(String),

    /// `option=value` — assign a value.
    Assign(String, String),

    /// No arguments — show changed options.
    ShowChanged,

    /// `all` — show all options.
    ShowAll,
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    OptionName::lookup(name).is_some_and(OptionName::is_bool)
}

/// Returns `true` if `name` is a known numeric option (full name or abbreviation).
#[must_use]
pub fn is_numeric_option(name: &str) -> bool {
    OptionName::lookup(name).is_some_and(|opt| !opt.is_bool())
}

/// Parse a whitespace-separated argument string into directives.
///
/// An empty string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // Only strip "no" when the rest is a boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }

    // Bare numeric option name = query its value.
    if is_numeric_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    SetDirective::On(arg.to_string())
}

/// `"name"` when true, `"noname"` when false.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
