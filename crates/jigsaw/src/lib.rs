//! `jigsaw` is a library for writing text in the Jigsaw script, a
//! constructed logosyllabic script drawn on a grid of vector strokes.
//!
//! Each word becomes a column, read right-to-left, and each syllable a row
//! within it: the consonant is drawn on the cell's vertical stroke and the
//! vowel on its horizontal stroke.
//!
//! Output goes to any [DrawingSurface]. Two are provided:
//! - [Recording] keeps the ordered list of drawing commands
//! - [SvgSurface] builds an SVG document
//!
//! ```
//! use jigsaw::{Canvas, Recording, render_text};
//!
//! let canvas = Canvas::new(600.0, 600.0)?;
//! let mut surface = Recording::new();
//! let words = render_text("aloha ke!yiki", canvas, &mut surface);
//! assert_eq!(words.len(), 2);
//! assert!(!surface.commands().is_empty());
//! # Ok::<(), jigsaw::Error>(())
//! ```

mod layout;
mod recording;
mod svg_surface;

pub use jigsaw_core::{
    Canvas, Color, DrawingSurface, Error, Facing, GridCell, Metrics, Orientation, Palette,
    Result, Role, Syllable, Word, kurbo,
};
pub use jigsaw_glyphs::{Category, GlyphDrawer, PHONEMES, Phoneme, PhonemeTable, Shape};
pub use jigsaw_segmenter::{normalize, segment};
pub use layout::GridLayout;
pub use recording::{DrawCommand, Recording};
pub use svg_surface::SvgSurface;

/// Draw already-segmented words with the default metrics and palette.
pub fn render<S: DrawingSurface>(words: &[Word], canvas: Canvas, surface: &mut S) {
    GridLayout::default().render(words, canvas, surface);
}

/// Segment `text` and draw it with the default metrics and palette.
///
/// Returns the words that were drawn, for display alongside the drawing.
pub fn render_text<S: DrawingSurface>(text: &str, canvas: Canvas, surface: &mut S) -> Vec<Word> {
    let words = segment(text);
    render(&words, canvas, surface);
    words
}
