use peniko::Color;
use peniko::kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Side of a vertical base line that a consonant shape bulges toward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Multiplier for horizontal offsets.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Side of a horizontal base line that a vowel shape bulges toward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
}

impl Facing {
    /// Multiplier for vertical offsets. Canvas y grows downward.
    pub fn sign(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }
}

/// Which stroke of a cell a phoneme is drawn on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// The vertical stroke on the right edge of the cell.
    Consonant,
    /// The horizontal stroke on the bottom edge of the cell.
    Vowel,
}

/// Grid and glyph dimensions, in pixels.
///
/// Passed explicitly to every drawing routine so that renders at different
/// sizes never share state.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Half the width of one grid cell.
    pub half_width: f64,
    /// Half the height of one grid cell.
    pub half_height: f64,
    pub stroke_width: f64,
    /// Length of the gap cut into a vertical base line for a rounded shape.
    pub curve_height: f64,
    /// Length of the gap cut into a horizontal base line for a vowel shape.
    pub curve_width: f64,
    /// Space above the first row.
    pub margin_top: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            half_width: 48.0,
            half_height: 35.0,
            stroke_width: 3.0,
            curve_height: 12.0,
            curve_width: 24.0,
            margin_top: 12.0,
        }
    }
}

impl Metrics {
    /// Reject dimensions that would collapse or invert the grid.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("half_width", self.half_width),
            ("half_height", self.half_height),
            ("stroke_width", self.stroke_width),
            ("curve_height", self.curve_height),
            ("curve_width", self.curve_width),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidMetrics(name));
            }
        }
        if !(self.margin_top.is_finite() && self.margin_top >= 0.0) {
            return Err(Error::InvalidMetrics("margin_top"));
        }
        Ok(())
    }

    pub fn cell_width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn cell_height(&self) -> f64 {
        2.0 * self.half_height
    }
}

/// Stroke colours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Regular glyph strokes.
    pub ink: Color,
    /// Base lines standing in for an unknown consonant.
    pub fallback: Color,
    /// What erased regions look like on surfaces that paint over instead.
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: Color::from_rgb8(0x11, 0x11, 0x20),
            fallback: Color::from_rgb8(0x80, 0x00, 0x00),
            background: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }
}

/// Size of the drawing area. Always positive and finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Narrowest canvas produced by [Canvas::fitting].
    pub const MIN_WIDTH: f64 = 600.0;
    /// Width allotted to each word by [Canvas::fitting].
    pub const WIDTH_PER_WORD: f64 = 120.0;

    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(Error::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// A canvas wide enough for `word_count` columns, never narrower than
    /// [Canvas::MIN_WIDTH].
    pub fn fitting(word_count: usize, height: f64) -> Result<Self> {
        let width = f64::max(Self::MIN_WIDTH, word_count as f64 * Self::WIDTH_PER_WORD);
        Self::new(width, height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The whole drawing area.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An addressable (column, row) slot of the grid.
///
/// Columns are indexed in reading order but laid out right-to-left, so
/// column 0 is the rightmost. Pixel positions are computed on demand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: usize,
    pub total_cols: usize,
    pub row: usize,
}

impl GridCell {
    pub fn new(col: usize, total_cols: usize, row: usize) -> Self {
        Self {
            col,
            total_cols,
            row,
        }
    }

    /// Top of the cell's right edge, where its vertical base line starts.
    pub fn origin(&self, metrics: &Metrics, canvas_width: f64) -> Point {
        let x = canvas_width / 2.0
            + (self.total_cols as f64 - 2.0 * self.col as f64) * metrics.half_width;
        let y = 2.0 * self.row as f64 * metrics.half_height + metrics.margin_top;
        Point::new(x, y)
    }

    /// The slot one column further left and one row down. Its origin is
    /// the left end of this cell's bottom edge.
    pub fn diagonal(self) -> Self {
        Self::new(self.col + 1, self.total_cols, self.row + 1)
    }
}
