use peniko::Color;
use peniko::kurbo::{CubicBez, Line, Rect};

/// A mutable raster or vector target the glyph drawer strokes onto.
///
/// Stroke colour and line width are state: they apply to every stroke
/// issued after they are set. Implementors are owned exclusively by one
/// render pass at a time.
pub trait DrawingSurface {
    /// Set the colour used by subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Set the width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, line: Line);

    /// Stroke a cubic Bézier segment.
    fn stroke_bezier(&mut self, curve: CubicBez);

    /// Erase everything inside `rect`.
    fn clear_rect(&mut self, rect: Rect);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn set_stroke_color(&mut self, color: Color) {
        (**self).set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn stroke_line(&mut self, line: Line) {
        (**self).stroke_line(line);
    }

    fn stroke_bezier(&mut self, curve: CubicBez) {
        (**self).stroke_bezier(curve);
    }

    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }
}
