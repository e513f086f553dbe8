// SPDX-License-Identifier: MIT
//
//! Two-argument readability checks over anything color-like.
//!
//! The [`Color`] methods compare `self` against another `Color`. The free
//! functions here take two [`AsColor`] values, so callers holding plain
//! `"RRGGBB"` strings can use them without parsing first:
//!
//! ```
//! use rp_color::{contrast, Color};
//!
//! assert!(contrast::is_contrasting("000000", &Color::WHITE).unwrap());
//! assert!(contrast::brightness_difference("FFFFFF", "nonsense").is_err());
//! ```
//!
//! Both forms share the thresholds in [`crate::color`], so
//! `contrast::is_contrasting(&a, &b)` and `a.is_contrasting(b)` always agree.

use crate::color::Color;
use crate::error::ColorError;

/// A value that denotes a color: a [`Color`] or a six-hex-digit string.
pub trait AsColor {
    /// Resolve to a concrete color.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorFormat`] if the value is not a valid color.
    fn as_color(&self) -> Result<Color, ColorError>;
}

impl AsColor for Color {
    fn as_color(&self) -> Result<Color, ColorError> {
        Ok(*self)
    }
}

impl AsColor for str {
    fn as_color(&self) -> Result<Color, ColorError> {
        Color::from_hex(self)
    }
}

impl AsColor for String {
    fn as_color(&self) -> Result<Color, ColorError> {
        Color::from_hex(self)
    }
}

impl<T: AsColor + ?Sized> AsColor for &T {
    fn as_color(&self) -> Result<Color, ColorError> {
        (**self).as_color()
    }
}

fn resolve<A, B>(a: &A, b: &B) -> Result<(Color, Color), ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    Ok((a.as_color()?, b.as_color()?))
}

/// Absolute brightness difference between `a` and `b`.
pub fn brightness_difference<A, B>(a: &A, b: &B) -> Result<u32, ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    let (a, b) = resolve(a, b)?;
    Ok(a.brightness_difference(b))
}

/// Brightness differs by more than 125.
pub fn is_brightness_contrasting<A, B>(a: &A, b: &B) -> Result<bool, ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    let (a, b) = resolve(a, b)?;
    Ok(a.is_brightness_contrasting(b))
}

/// Sum of absolute per-channel differences.
pub fn color_difference<A, B>(a: &A, b: &B) -> Result<u32, ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    let (a, b) = resolve(a, b)?;
    Ok(a.color_difference(b))
}

/// Channel difference sum exceeds 500.
pub fn is_color_contrasting<A, B>(a: &A, b: &B) -> Result<bool, ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    let (a, b) = resolve(a, b)?;
    Ok(a.is_color_contrasting(b))
}

/// Both the brightness and the channel heuristic hold.
pub fn is_contrasting<A, B>(a: &A, b: &B) -> Result<bool, ColorError>
where
    A: AsColor + ?Sized,
    B: AsColor + ?Sized,
{
    let (a, b) = resolve(a, b)?;
    Ok(a.is_contrasting(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
