// SPDX-License-Identifier: MIT
//
// rp-color color model — plain 8-bit RGB with readability heuristics.
//
// The heuristics come from the W3C AERT working draft:
//
//   brightness  = (299·R + 587·G + 114·B) / 1000
//   difference  = |ΔR| + |ΔG| + |ΔB|
//
// Two colors are considered readable together when their brightness
// differs by more than 125 and their channel difference exceeds 500.
// Neither is a real color-space metric; they are cheap proxies that work
// well enough for placeholder content.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::ColorError;

/// Brightness difference above which two colors count as contrasting.
pub const BRIGHTNESS_THRESHOLD: u32 = 125;

/// Channel difference sum above which two colors count as contrasting.
pub const COLOR_DIFFERENCE_THRESHOLD: u32 = 500;

/// Default step for [`Color::brighten`], [`Color::darken`] and spreading.
pub const DEFAULT_STEP: u8 = 0x10;

// ─── Channel ─────────────────────────────────────────────────────────────────

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in fixed red, green, blue order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
///
/// Using `u8` for storage makes the `[0, 255]` range a type-level
/// guarantee; every mutating operation saturates at the boundaries.
///
/// # Examples
///
/// ```
/// use rp_color::Color;
///
/// let navy: Color = "000080".parse().unwrap();
/// let mut text = Color::new(0xF0, 0xF0, 0xF0);
///
/// assert!(text.is_brightness_contrasting(navy));
/// assert!(text.brighten());
/// assert_eq!(text.to_string(), "#FFFFFF");
/// assert!(!text.brighten());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    /// Create a color from three channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-hex-digit string (`"336699"` or `"#336699"`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColorFormat(s.to_owned()))
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Read a single channel.
    #[inline]
    #[must_use]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Overwrite a single channel.
    #[inline]
    pub const fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    // ─── Metrics ─────────────────────────────────────────────────────────

    /// Perceived brightness in `[0, 255]`.
    ///
    /// Integer arithmetic, so the weighted sum is truncated:
    /// `#FFFFFF` is 255 and `#000000` is 0.
    #[must_use]
    pub fn brightness(self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }

    /// Absolute brightness difference to `other`.
    #[must_use]
    pub fn brightness_difference(self, other: Self) -> u32 {
        self.brightness().abs_diff(other.brightness())
    }

    /// Sum of absolute per-channel differences to `other`, in `[0, 765]`.
    #[must_use]
    pub fn color_difference(self, other: Self) -> u32 {
        Channel::ALL
            .iter()
            .map(|&ch| u32::from(self.channel(ch).abs_diff(other.channel(ch))))
            .sum()
    }

    /// Brightness differs by more than [`BRIGHTNESS_THRESHOLD`].
    #[must_use]
    pub fn is_brightness_contrasting(self, other: Self) -> bool {
        self.brightness_difference(other) > BRIGHTNESS_THRESHOLD
    }

    /// Channel difference exceeds [`COLOR_DIFFERENCE_THRESHOLD`].
    #[must_use]
    pub fn is_color_contrasting(self, other: Self) -> bool {
        self.color_difference(other) > COLOR_DIFFERENCE_THRESHOLD
    }

    /// Safe for a text/background pairing: both heuristics hold.
    #[must_use]
    pub fn is_contrasting(self, other: Self) -> bool {
        self.is_brightness_contrasting(other) && self.is_color_contrasting(other)
    }

    // ─── Mutation ────────────────────────────────────────────────────────

    /// Raise every channel by [`DEFAULT_STEP`], saturating at 255.
    ///
    /// Returns `false` (and leaves the color alone) if it is already white.
    pub fn brighten(&mut self) -> bool {
        self.brighten_by(DEFAULT_STEP, u8::MAX)
    }

    /// Raise every channel by `delta`, capped at `max`.
    ///
    /// Returns `false` without touching the color if it is `#FFFFFF`.
    pub fn brighten_by(&mut self, delta: u8, max: u8) -> bool {
        if *self == Self::WHITE {
            return false;
        }
        for ch in Channel::ALL {
            let v = self.channel(ch).saturating_add(delta).min(max);
            self.set_channel(ch, v);
        }
        true
    }

    /// Lower every channel by [`DEFAULT_STEP`], saturating at 0.
    ///
    /// Returns `false` (and leaves the color alone) if it is already black.
    pub fn darken(&mut self) -> bool {
        self.darken_by(DEFAULT_STEP, u8::MIN)
    }

    /// Lower every channel by `delta`, floored at `min`.
    ///
    /// Returns `false` without touching the color if it is `#000000`.
    pub fn darken_by(&mut self, delta: u8, min: u8) -> bool {
        if *self == Self::BLACK {
            return false;
        }
        for ch in Channel::ALL {
            let v = self.channel(ch).saturating_sub(delta).max(min);
            self.set_channel(ch, v);
        }
        true
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Uppercase `RRGGBB` without the leading `#`.
    ///
    /// `Display` renders the CSS form with the `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::new(0x{:02X}, 0x{:02X}, 0x{:02X})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A color equals a string when the string parses to the same channels.
/// Unparsable strings are never equal.
impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        parse_hex(other).is_some_and(|c| c == *self)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    Some(Color::new(
        parse_hex_byte(&bytes[0..2])?,
        parse_hex_byte(&bytes[2..4])?,
        parse_hex_byte(&bytes[4..6])?,
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
