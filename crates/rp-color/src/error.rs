// SPDX-License-Identifier: MIT
//
// Errors surfaced by the color model.

use thiserror::Error;

/// Failure to interpret a value as a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not six hexadecimal digits (optionally `#`-prefixed).
    #[error("invalid color format {0:?}: expected six hexadecimal digits such as \"336699\"")]
    InvalidColorFormat(String),
}
