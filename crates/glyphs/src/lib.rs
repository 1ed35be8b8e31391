//! `jigsaw-glyphs` knows what every Jigsaw phoneme looks like.
//!
//! [PhonemeTable] maps letter codes to [Phoneme]s, and [GlyphDrawer] turns
//! a phoneme and a grid cell into strokes on a
//! [DrawingSurface](jigsaw_core::DrawingSurface). Codes missing from the
//! table are drawn as plain base lines rather than rejected.

mod drawer;
mod table;

pub use drawer::GlyphDrawer;
pub use table::{Category, PHONEMES, Phoneme, PhonemeEntry, PhonemeTable, Shape};
