use jigsaw_core::{Canvas, DrawingSurface, GridCell, Metrics, Palette, Result, Word};
use jigsaw_glyphs::{Category, GlyphDrawer, PHONEMES};
use log::debug;

/// Columns in the consonant reference chart.
const CHART_COLUMNS: usize = 5;

/// Lays words out on the grid and drives the glyph drawer.
///
/// Holds no state between passes: rendering the same words onto a fresh
/// surface always issues the same commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridLayout {
    pub metrics: Metrics,
    pub palette: Palette,
}

impl GridLayout {
    /// A layout with validated metrics.
    pub fn new(metrics: Metrics, palette: Palette) -> Result<Self> {
        metrics.validate()?;
        Ok(Self { metrics, palette })
    }

    /// Clear the surface and set the stroke state every pass starts from.
    fn begin<'a, S: DrawingSurface>(&'a self, canvas: Canvas, surface: &mut S) -> GlyphDrawer<'a> {
        surface.clear_rect(canvas.bounds());
        surface.set_line_width(self.metrics.stroke_width);
        surface.set_stroke_color(self.palette.ink);
        GlyphDrawer::new(&self.metrics, &self.palette, canvas.width())
    }

    /// Draw `words` as columns from right to left.
    ///
    /// Each non-empty column gets a top line, then one glyph pair per
    /// syllable. A column shorter than the one before it is padded with
    /// plain verticals so the grid edge stays continuous, and the left
    /// edge of the final column is closed at the end.
    pub fn render<S: DrawingSurface>(&self, words: &[Word], canvas: Canvas, surface: &mut S) {
        let drawer = self.begin(canvas, surface);
        let cols = words.len();

        let mut previous: Option<&Word> = None;
        for (col, word) in words.iter().enumerate() {
            if !word.is_empty() {
                drawer.horizontal_base(surface, GridCell::new(col + 1, cols, 0));
            }

            for (row, syllable) in word.iter().enumerate() {
                drawer.draw_syllable(surface, syllable, GridCell::new(col, cols, row));
            }

            if let Some(previous) = previous {
                if previous.len() > word.len() {
                    debug!(
                        "padding column {col} from {} to {} rows",
                        word.len(),
                        previous.len()
                    );
                }
                for row in word.len()..previous.len() {
                    drawer.vertical_base(surface, GridCell::new(col, cols, row));
                }
            }
            previous = Some(word);
        }

        if let Some(last) = words.last() {
            for row in 0..last.len() {
                drawer.vertical_base(surface, GridCell::new(cols, cols, row));
            }
        }

        debug!(
            "rendered {cols} columns, {} syllables, on a {}x{} canvas",
            words.iter().map(Word::len).sum::<usize>(),
            canvas.width(),
            canvas.height()
        );
    }

    /// Draw every consonant glyph on a five-column grid, with a ruling
    /// line above each row and below the last.
    pub fn render_reference_chart<S: DrawingSurface>(&self, canvas: Canvas, surface: &mut S) {
        let drawer = self.begin(canvas, surface);

        let consonants: Vec<_> = PHONEMES
            .iter()
            .filter(|entry| entry.category == Category::Consonant)
            .map(|entry| entry.phoneme)
            .collect();

        let rows = consonants.chunks(CHART_COLUMNS);
        let row_count = rows.len();
        for (row, chunk) in rows.enumerate() {
            drawer.horizontal_span(surface, CHART_COLUMNS, row);
            for (col, &phoneme) in chunk.iter().enumerate() {
                drawer.draw(surface, phoneme, GridCell::new(col, CHART_COLUMNS, row));
            }
        }
        drawer.horizontal_span(surface, CHART_COLUMNS, row_count);
    }
}
