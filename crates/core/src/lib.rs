//! `jigsaw-core` provides core primitives for the `jigsaw` crate.
//!
//! Text in the Jigsaw script is a grid: every word is a column, every
//! syllable a row inside it. This crate holds the types shared by the
//! segmenter, the glyph drawer and the layout engine, together with the
//! [DrawingSurface] trait that the host implements.

mod error;
mod geometry;
mod surface;
mod syllable;

pub use error::{Error, Result};
pub use geometry::{Canvas, Facing, GridCell, Metrics, Orientation, Palette, Role};
pub use peniko::{Color, kurbo};
pub use surface::DrawingSurface;
pub use syllable::{GLOTTAL, ROLLED_R, STRESS, Syllable, VOWELS, Word, is_vowel};
