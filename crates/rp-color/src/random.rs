// SPDX-License-Identifier: MIT
//
//! Random colors and contrast spreading.
//!
//! [`ColorRandomizer`] draws uniform random colors and pushes a candidate
//! away from a reference color until the pair is readable:
//!
//! ```text
//! random_color ──► spread_brightness (darken or brighten by 16)
//!                      │        ▲
//!                      ▼        │ not yet contrasting
//!              brightness_contrasting? ──► done
//! ```
//!
//! Spreading is monotonic: a candidate that starts darker than the
//! reference only ever darkens, one that starts brighter only brightens.
//! It therefore hits `#000000` or `#FFFFFF` after at most 16 steps and the
//! loop always terminates, even when the threshold cannot be met.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{Channel, Color, DEFAULT_STEP};

/// Move `a` away from `b` by `delta`, staying inside `[min, max]`.
///
/// Picture the range split at its midpoint `M`:
///
/// ```text
/// ..a.......M....b.....   a ≤ b, b in upper half  → a - delta
/// ..a....b..M..........   a ≤ b, b in lower half  → a - delta, or reflect past b
/// ..........M..b...a...   a > b, b in upper half  → a + delta, or reflect below b
/// ..b.......M..a.......   a > b, b in lower half  → a + delta
/// ```
///
/// Returns `None` when no move inside the range is possible, when `delta`
/// is not positive, or when `a` or `b` lies outside `[min, max]`; the caller
/// keeps the old value.
#[must_use]
pub fn spread_value(a: i32, b: i32, delta: i32, min: i32, max: i32) -> Option<i32> {
    let range = min..=max;
    if delta <= 0 || !range.contains(&a) || !range.contains(&b) {
        return None;
    }
    let mid = max.checked_sub(min)? / 2;
    let moved = if a <= b {
        let down = a.checked_sub(delta)?;
        if b >= mid || down > min {
            down
        } else {
            b.checked_add(b - a)?.checked_add(delta)?
        }
    } else {
        let up = a.checked_add(delta)?;
        if b > mid && up > max {
            b.checked_sub(a - b)?.checked_sub(delta)?
        } else {
            up
        }
    };
    range.contains(&moved).then_some(moved)
}

// ─── ColorRandomizer ─────────────────────────────────────────────────────────

/// Generator for random and mutually contrasting colors.
///
/// Generic over its random source so tests can pin a seed; the default is
/// an OS-seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct ColorRandomizer<R = StdRng> {
    /// Reference color for [`contrasting_random_color`](Self::contrasting_random_color).
    pub background: Color,
    rng: R,
}

impl ColorRandomizer<StdRng> {
    /// OS-seeded randomizer with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic randomizer for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ColorRandomizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorRandomizer<R> {
    /// Wrap an existing random source. Background defaults to white.
    pub const fn with_rng(rng: R) -> Self {
        Self {
            background: Color::WHITE,
            rng,
        }
    }

    /// Builder-style background override.
    #[must_use]
    pub const fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// A color with each channel drawn uniformly from `[0, 255]`.
    pub fn random_color(&mut self) -> Color {
        Color::new(self.rng.random(), self.rng.random(), self.rng.random())
    }

    /// Nudge the channel of `color_a` that is currently closest to
    /// `color_b` one step away from it.
    ///
    /// Ties go to the first channel in red, green, blue order. Returns
    /// `true` if `color_a` changed.
    pub fn spread_colors(&self, color_a: &mut Color, color_b: Color) -> bool {
        let before = *color_a;
        let closest = Channel::ALL
            .into_iter()
            .min_by_key(|&ch| color_a.channel(ch).abs_diff(color_b.channel(ch)))
            .unwrap_or(Channel::Red);

        let spread = spread_value(
            i32::from(color_a.channel(closest)),
            i32::from(color_b.channel(closest)),
            i32::from(DEFAULT_STEP),
            0,
            i32::from(u8::MAX),
        );
        if let Some(v) = spread.and_then(|v| u8::try_from(v).ok()) {
            color_a.set_channel(closest, v);
        }
        trace!("spread {closest:?}: {before} -> {color_a} (against {color_b})");
        *color_a != before
    }

    /// Darken `color_a` if it is dimmer than `color_b`, brighten it otherwise.
    ///
    /// Returns `false` once `color_a` is saturated at black or white.
    pub fn spread_brightness(&self, color_a: &mut Color, color_b: Color) -> bool {
        if color_a.brightness() < color_b.brightness() {
            color_a.darken()
        } else {
            color_a.brighten()
        }
    }

    /// A random color whose brightness contrasts with [`Self::background`].
    pub fn contrasting_random_color(&mut self) -> Color {
        self.contrasting_random_color_on(self.background)
    }

    /// A random color spread until its brightness contrasts with `bgcolor`.
    ///
    /// The draw is not retried: if spreading saturates before the threshold
    /// is met, the saturated color is returned as is.
    pub fn contrasting_random_color_on(&mut self, bgcolor: Color) -> Color {
        let mut color = self.random_color();
        let mut steps = 0u32;
        while !color.is_brightness_contrasting(bgcolor) {
            if !self.spread_brightness(&mut color, bgcolor) {
                break;
            }
            steps += 1;
        }
        debug!(
            "contrasting color {color} on {bgcolor} after {steps} steps (contrasting: {})",
            color.is_brightness_contrasting(bgcolor)
        );
        color
    }

    /// A random color and a second one spread to contrast with it.
    pub fn random_color_pair(&mut self) -> (Color, Color) {
        let first = self.random_color();
        let second = self.contrasting_random_color_on(first);
        (first, second)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
