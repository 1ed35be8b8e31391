use jigsaw_core::kurbo::{CubicBez, Line, Point, Rect};
use jigsaw_core::{DrawingSurface, Facing, GridCell, Metrics, Orientation, Palette, Role, Syllable};
use log::{debug, trace};

use crate::{Phoneme, PhonemeTable, Shape};

/// Horizontal reach of the two control points of a consonant lobe.
const LOBE_REACH: (f64, f64) = (21.0, 17.0);
/// Horizontal overshoot of the control points of a vowel arch.
const ARCH_OVERSHOOT: f64 = 12.0;
/// Vertical reach of the two control points of a vowel arch.
const ARCH_LIFT: (f64, f64) = (18.0, 21.0);

/// Strokes phoneme glyphs into grid cells.
///
/// Consonants live on the vertical base line at a cell's right edge and
/// vowels on the horizontal base line at its bottom edge. Each shape draws
/// its base line, erases a short gap in it and strokes its own figure
/// across the gap.
///
/// Stroke width and colour are left to the caller, except for the
/// consonant fallback which switches to [Palette::fallback] and back.
#[derive(Debug, Copy, Clone)]
pub struct GlyphDrawer<'a> {
    metrics: &'a Metrics,
    palette: &'a Palette,
    canvas_width: f64,
}

impl<'a> GlyphDrawer<'a> {
    pub fn new(metrics: &'a Metrics, palette: &'a Palette, canvas_width: f64) -> Self {
        Self {
            metrics,
            palette,
            canvas_width,
        }
    }

    fn origin(&self, cell: GridCell) -> Point {
        cell.origin(self.metrics, self.canvas_width)
    }

    /// Draw both halves of a syllable into `cell`.
    pub fn draw_syllable<S: DrawingSurface>(
        &self,
        surface: &mut S,
        syllable: &Syllable,
        cell: GridCell,
    ) {
        self.draw_code(surface, &syllable.consonant, Role::Consonant, cell);
        self.draw_code(surface, &syllable.vowel_code(), Role::Vowel, cell);
    }

    /// Draw the glyph for `code`, or the fallback for `role` if the table
    /// has no such phoneme.
    pub fn draw_code<S: DrawingSurface>(
        &self,
        surface: &mut S,
        code: &str,
        role: Role,
        cell: GridCell,
    ) {
        match PhonemeTable::resolve(code, role) {
            Some(phoneme) => self.draw(surface, phoneme, cell),
            None => {
                debug!("no {role:?} glyph for {code:?} at {cell:?}; drawing fallback");
                self.draw_fallback(surface, role, cell);
            }
        }
    }

    /// Degraded rendering for an unknown code.
    ///
    /// A consonant becomes a plain vertical in the fallback colour; a vowel
    /// becomes the plain horizontal that closes the cell.
    pub fn draw_fallback<S: DrawingSurface>(&self, surface: &mut S, role: Role, cell: GridCell) {
        match role {
            Role::Consonant => {
                surface.set_stroke_color(self.palette.fallback);
                self.vertical_base(surface, cell);
                surface.set_stroke_color(self.palette.ink);
            }
            Role::Vowel => self.horizontal_base(surface, cell.diagonal()),
        }
    }

    /// Draw `phoneme` into `cell`.
    pub fn draw<S: DrawingSurface>(&self, surface: &mut S, phoneme: Phoneme, cell: GridCell) {
        trace!("drawing {phoneme:?} at {cell:?}");
        match phoneme.shape() {
            Shape::RoundedMiddle(side) => self.rounded_middle(surface, cell, side),
            Shape::RoundedTop(side) => self.rounded_top(surface, cell, side),
            Shape::RoundedBottom(side) => self.rounded_bottom(surface, cell, side),
            Shape::RoundedDouble(side) => self.rounded_double(surface, cell, side),
            Shape::Bracket(side) => self.bracket(surface, cell, side),
            Shape::PointyMiddle(side) => {
                let rise = self.chevron_height() / 2.0;
                self.pointy(surface, cell, side, &[self.metrics.half_height - rise]);
            }
            Shape::PointyTop(side) => {
                let rise = 1.65 * self.chevron_height() - 3.0;
                self.pointy(surface, cell, side, &[self.metrics.half_height - rise]);
            }
            Shape::PointyBottom(side) => {
                let drop = 0.65 * self.chevron_height() - 3.0;
                self.pointy(surface, cell, side, &[self.metrics.half_height + drop]);
            }
            Shape::PointyDouble(side) => {
                let rise = 1.25 * self.chevron_height() - 3.0;
                let half = self.metrics.half_height;
                self.pointy(surface, cell, side, &[half - rise, half]);
            }
            Shape::Zigzag => self.zigzag(surface, cell),
            Shape::Diagonal => self.diagonal(surface, cell),
            Shape::Arch(facing) => self.arch(surface, cell.diagonal(), facing),
            Shape::Chevron(facing) => self.chevron(surface, cell.diagonal(), facing),
            Shape::DoubleArch => self.double_arch(surface, cell.diagonal()),
            Shape::DoubleChevron => self.double_chevron(surface, cell.diagonal()),
        }
    }

    /// The plain stroke down the right edge of `cell`.
    pub fn vertical_base<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell) {
        let top = self.origin(cell);
        let bottom = Point::new(top.x, top.y + self.metrics.cell_height());
        surface.stroke_line(Line::new(top, bottom));
    }

    /// The plain stroke from the origin of `cell` one cell width to the
    /// right.
    pub fn horizontal_base<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell) {
        let left = self.origin(cell);
        let right = Point::new(left.x + self.metrics.cell_width(), left.y);
        surface.stroke_line(Line::new(left, right));
    }

    /// One horizontal line across all `cols` columns at the top of `row`.
    pub fn horizontal_span<S: DrawingSurface>(&self, surface: &mut S, cols: usize, row: usize) {
        let y = GridCell::new(0, cols, row).origin(self.metrics, self.canvas_width).y;
        let x = self.canvas_width / 2.0 - cols as f64 * self.metrics.half_width;
        let length = cols as f64 * self.metrics.cell_width() + 1.0;
        surface.stroke_line(Line::new(Point::new(x, y), Point::new(x + length, y)));
    }

    fn erase<S: DrawingSurface>(surface: &mut S, x: f64, y: f64, width: f64, height: f64) {
        surface.clear_rect(Rect::new(x, y, x + width, y + height));
    }

    /// Left edge of the gap cut into a vertical base line.
    fn gap_x(&self, cell: GridCell) -> f64 {
        self.origin(cell).x - self.metrics.stroke_width
    }

    /// Cut a gap of `height` starting at `top` into the vertical of `cell`.
    fn erase_vertical<S: DrawingSurface>(
        &self,
        surface: &mut S,
        cell: GridCell,
        top: f64,
        height: f64,
    ) {
        Self::erase(
            surface,
            self.gap_x(cell),
            top,
            2.0 * self.metrics.stroke_width,
            height,
        );
    }

    /// Cut a gap of `width` starting at `left` into the horizontal at `y`.
    fn erase_horizontal<S: DrawingSurface>(&self, surface: &mut S, left: f64, y: f64, width: f64) {
        let stroke = self.metrics.stroke_width;
        Self::erase(surface, left, y - stroke / 2.0 - 1.0, width, stroke + 2.0);
    }

    /// A single lobe bridging a gap that starts at `top`. The pen enters at
    /// `entry` and `bulge` gives the vertical offsets of the control points.
    fn lobe<S: DrawingSurface>(
        &self,
        surface: &mut S,
        cell: GridCell,
        side: Orientation,
        top: f64,
        entry: f64,
        bulge: (f64, f64),
    ) {
        let x = self.gap_x(cell) + 2.0;
        let reach = side.sign();
        let start_x = match side {
            Orientation::Right => x,
            Orientation::Left => x + 1.0,
        };
        surface.stroke_bezier(CubicBez::new(
            Point::new(start_x, entry),
            Point::new(x + reach * LOBE_REACH.0, top + bulge.0),
            Point::new(x + reach * LOBE_REACH.1, top + bulge.1),
            Point::new(x, top + self.metrics.curve_height + 1.0),
        ));
    }

    fn rounded_middle<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell, side: Orientation) {
        self.vertical_base(surface, cell);
        let height = self.metrics.curve_height;
        let top = self.origin(cell).y + self.metrics.half_height - height / 2.0;
        self.erase_vertical(surface, cell, top, height);
        self.lobe(surface, cell, side, top, top, (-18.0, 29.0));
    }

    fn rounded_top<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell, side: Orientation) {
        self.vertical_base(surface, cell);
        let top = self.origin(cell).y + 2.0;
        self.erase_vertical(surface, cell, top, self.metrics.curve_height);
        self.lobe(surface, cell, side, top, top - 2.0, (-2.0, 29.0));
    }

    fn rounded_bottom<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell, side: Orientation) {
        self.vertical_base(surface, cell);
        let height = self.metrics.curve_height;
        let top = self.origin(cell).y + self.metrics.cell_height() - height - 2.0;
        self.erase_vertical(surface, cell, top, height);
        self.lobe(surface, cell, side, top, top, (-18.0, 21.0));
    }

    fn rounded_double<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell, side: Orientation) {
        self.vertical_base(surface, cell);
        let y = self.origin(cell).y;
        let half = self.metrics.half_height;
        let height = self.metrics.curve_height;
        let tops = [
            y + half / 2.0 - height / 2.0 + 2.0,
            y + 3.0 * half / 2.0 - height / 2.0 - 2.0,
        ];
        for top in tops {
            self.erase_vertical(surface, cell, top, height);
            self.lobe(surface, cell, side, top, top, (-18.0, 29.0));
        }
    }

    fn zigzag<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell) {
        self.vertical_base(surface, cell);
        let y = self.origin(cell).y;
        let height = self.metrics.curve_height;
        let gap_x = self.gap_x(cell);
        let upper = y + self.metrics.half_height / 2.0;
        let lower = y + 3.0 * self.metrics.half_height / 2.0 - 1.6 * height;
        self.erase_vertical(surface, cell, upper, 2.5 * height);

        // The lower lobe continues from where the upper one ends.
        let x = gap_x + 2.0;
        let joint = Point::new(x, upper + height + 1.0);
        surface.stroke_bezier(CubicBez::new(
            Point::new(x, upper + 1.0),
            Point::new(x + LOBE_REACH.0, upper - 18.0),
            Point::new(x + LOBE_REACH.1, upper + 29.0),
            joint,
        ));
        let x = gap_x + 4.0;
        surface.stroke_bezier(CubicBez::new(
            joint,
            Point::new(x - LOBE_REACH.0, lower - 18.0),
            Point::new(x - LOBE_REACH.1, lower + 29.0),
            Point::new(x, lower + height + 1.0),
        ));
    }

    fn bracket<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell, side: Orientation) {
        self.vertical_base(surface, cell);
        let height = 2.5 * self.metrics.curve_height;
        let top = self.origin(cell).y + self.metrics.half_height - height / 2.0;
        let bottom = top + height;
        self.erase_vertical(surface, cell, top, height);

        let anchor = match side {
            Orientation::Right => self.gap_x(cell) + 2.0,
            Orientation::Left => self.gap_x(cell) + 3.0,
        };
        let tip = anchor + side.sign() * height / 2.0;
        surface.stroke_line(Line::new(Point::new(anchor, top), Point::new(tip, top)));
        surface.stroke_line(Line::new(Point::new(anchor, bottom), Point::new(tip, bottom)));
        surface.stroke_bezier(CubicBez::new(
            Point::new(tip, top),
            Point::new(anchor, top),
            Point::new(anchor, bottom),
            Point::new(tip, bottom),
        ));
    }

    fn chevron_height(&self) -> f64 {
        1.75 * self.metrics.curve_height
    }

    /// One chevron per offset in `tops`, each measured from the top of the
    /// cell.
    fn pointy<S: DrawingSurface>(
        &self,
        surface: &mut S,
        cell: GridCell,
        side: Orientation,
        tops: &[f64],
    ) {
        self.vertical_base(surface, cell);
        let y = self.origin(cell).y;
        let height = self.chevron_height();
        let gap_x = self.gap_x(cell);
        let tip_x = gap_x + side.sign() * 0.75 * height;

        for offset in tops {
            let top = y + offset;
            self.erase_vertical(surface, cell, top, height);
            let tip = Point::new(tip_x, top + height / 2.0 + 1.0);
            surface.stroke_line(Line::new(Point::new(gap_x + 3.0, top), tip));
            surface.stroke_line(Line::new(tip, Point::new(gap_x + 3.0, top + height + 1.0)));
        }
    }

    fn diagonal<S: DrawingSurface>(&self, surface: &mut S, cell: GridCell) {
        self.vertical_base(surface, cell);
        let height = self.chevron_height();
        let gap_x = self.gap_x(cell);
        let top = self.origin(cell).y + self.metrics.half_height - height + 2.0;
        let bottom = top + 1.5 * height + 3.0;
        self.erase_vertical(surface, cell, top + 2.0, 1.5 * height);

        let corners = [
            Point::new(gap_x + 2.0, top),
            Point::new(gap_x + height, top),
            Point::new(gap_x - height + 3.0, bottom),
            Point::new(gap_x + 4.0, bottom),
        ];
        for pair in corners.windows(2) {
            surface.stroke_line(Line::new(pair[0], pair[1]));
        }
    }

    /// An arch of one curve width starting at `x` on the horizontal at `y`.
    fn arch_curve(&self, x: f64, y: f64, facing: Facing) -> CubicBez {
        let lift = facing.sign();
        let start = Point::new(x + 1.0, y - lift);
        let end = Point::new(start.x + self.metrics.curve_width - 3.0, start.y);
        CubicBez::new(
            start,
            Point::new(start.x - ARCH_OVERSHOOT, start.y + lift * ARCH_LIFT.0),
            Point::new(end.x + ARCH_OVERSHOOT, end.y + lift * ARCH_LIFT.1),
            end,
        )
    }

    /// Left edge of a single-width vowel gap, centered on the horizontal.
    fn vowel_gap_x(&self, corner: Point) -> f64 {
        corner.x + self.metrics.half_width - self.metrics.curve_width / 2.0
    }

    fn arch<S: DrawingSurface>(&self, surface: &mut S, corner: GridCell, facing: Facing) {
        self.horizontal_base(surface, corner);
        let origin = self.origin(corner);
        let left = self.vowel_gap_x(origin);
        self.erase_horizontal(surface, left, origin.y, self.metrics.curve_width);
        surface.stroke_bezier(self.arch_curve(left, origin.y, facing));
    }

    fn chevron<S: DrawingSurface>(&self, surface: &mut S, corner: GridCell, facing: Facing) {
        self.horizontal_base(surface, corner);
        let origin = self.origin(corner);
        let width = self.metrics.curve_width;
        let left = self.vowel_gap_x(origin);
        self.erase_horizontal(surface, left, origin.y, width);

        let start = Point::new(left, origin.y - facing.sign());
        let tip = Point::new(left + width / 2.0, start.y + facing.sign() * width / 2.0);
        surface.stroke_line(Line::new(start, tip));
        surface.stroke_line(Line::new(tip, Point::new(left + width, start.y)));
    }

    fn double_arch<S: DrawingSurface>(&self, surface: &mut S, corner: GridCell) {
        self.horizontal_base(surface, corner);
        let origin = self.origin(corner);
        let width = self.metrics.curve_width;
        let left = origin.x + self.metrics.half_width - width;
        self.erase_horizontal(surface, left, origin.y, 2.0 * width - 2.0);
        surface.stroke_bezier(self.arch_curve(left, origin.y, Facing::Down));
        surface.stroke_bezier(self.arch_curve(left + width - 2.0, origin.y, Facing::Up));
    }

    fn double_chevron<S: DrawingSurface>(&self, surface: &mut S, corner: GridCell) {
        self.horizontal_base(surface, corner);
        let origin = self.origin(corner);
        let width = self.metrics.curve_width;
        let left = origin.x + self.metrics.half_width - width;
        self.erase_horizontal(surface, left, origin.y, 2.0 * width - 2.0);

        let start = Point::new(left, origin.y);
        let low = Point::new(start.x + width / 2.0, start.y + width / 2.0);
        let high = Point::new(low.x + width, low.y - width);
        let end = Point::new(high.x + width / 2.0, start.y);
        for (from, to) in [(start, low), (low, high), (high, end)] {
            surface.stroke_line(Line::new(from, to));
        }
    }
}
