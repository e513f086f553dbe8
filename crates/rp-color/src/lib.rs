// SPDX-License-Identifier: MIT
//
// rp-color — color model and contrast spreading for randpub.
//
// Colors are plain 8-bit RGB. Readability is judged with two cheap W3C
// heuristics (brightness difference and channel difference), and random
// colors are nudged apart in fixed steps until the brightness heuristic
// holds against a reference color.
//
//   color.rs    → Color, channel metrics, brighten/darken, hex parsing
//   contrast.rs → AsColor and the two-argument predicate forms
//   random.rs   → ColorRandomizer, spread_value
//
// All randomness flows through an explicit `rand::Rng` held by the
// randomizer, so seeded runs are reproducible.

pub mod color;
pub mod contrast;
pub mod error;
pub mod random;

pub use color::{Channel, Color};
pub use contrast::AsColor;
pub use error::ColorError;
pub use random::{ColorRandomizer, spread_value};
