use std::path::Path as FilePath;

use jigsaw_core::kurbo::{CubicBez, Line, Point, Rect};
use jigsaw_core::{Canvas, Color, DrawingSurface, Result};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};

/// One drawn element, in paint order.
#[derive(Debug, Clone)]
enum Element {
    Stroke(Path),
    Fill(Rectangle),
}

/// A surface that builds an SVG document.
///
/// SVG has no eraser, so [DrawingSurface::clear_rect] paints the rectangle
/// in the background colour. Clearing the whole canvas discards everything
/// drawn so far.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    canvas: Canvas,
    background: Color,
    stroke: Color,
    line_width: f64,
    elements: Vec<Element>,
}

/// `#rrggbb` for an sRGB colour, ignoring alpha.
fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn xy(point: Point) -> (f32, f32) {
    (point.x as f32, point.y as f32)
}

impl SvgSurface {
    pub fn new(canvas: Canvas, background: Color) -> Self {
        Self {
            canvas,
            background,
            stroke: Color::from_rgb8(0, 0, 0),
            line_width: 1.0,
            elements: Vec::new(),
        }
    }

    fn stroke_path(&mut self, data: Data) {
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", css_color(self.stroke))
            .set("stroke-width", self.line_width)
            .set("d", data);
        self.elements.push(Element::Stroke(path));
    }

    /// Number of elements drawn since the last full clear.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The finished document, sized to the canvas.
    pub fn document(&self) -> Document {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let document = self
            .elements
            .iter()
            .cloned()
            .fold(Document::new(), |document, element| match element {
                Element::Stroke(path) => document.add(path),
                Element::Fill(rect) => document.add(rect),
            });
        document
            .set("viewBox", (0, 0, width, height))
            .set("width", format!("{width}px"))
            .set("height", format!("{height}px"))
    }

    /// Write the document to `path`.
    pub fn save(&self, path: impl AsRef<FilePath>) -> Result<()> {
        svg::save(path, &self.document())?;
        Ok(())
    }
}

impl DrawingSurface for SvgSurface {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_line(&mut self, line: Line) {
        let data = Data::new().move_to(xy(line.p0)).line_to(xy(line.p1));
        self.stroke_path(data);
    }

    fn stroke_bezier(&mut self, curve: CubicBez) {
        let CubicBez { p0, p1, p2, p3 } = curve;
        let (x1, y1) = xy(p1);
        let (x2, y2) = xy(p2);
        let (x, y) = xy(p3);
        let data = Data::new()
            .move_to(xy(p0))
            .cubic_curve_to(vec![x1, y1, x2, y2, x, y]);
        self.stroke_path(data);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let bounds = self.canvas.bounds();
        if rect.union(bounds) == rect {
            self.elements.clear();
        }
        let fill = Rectangle::new()
            .set("x", rect.x0)
            .set("y", rect.y0)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", css_color(self.background));
        self.elements.push(Element::Fill(fill));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SvgSurface {
        SvgSurface::new(
            Canvas::new(600.0, 400.0).unwrap(),
            Color::from_rgb8(0xff, 0xff, 0xff),
        )
    }

    #[test]
    fn formats_colors_as_hex() {
        assert_eq!(css_color(Color::from_rgb8(0x11, 0x11, 0x20)), "#111120");
        assert_eq!(css_color(Color::from_rgb8(0x80, 0x00, 0x00)), "#800000");
        assert_eq!(css_color(Color::from_rgb8(0xff, 0xff, 0xff)), "#ffffff");
    }

    #[test]
    fn strokes_carry_current_state() {
        let mut surface = surface();
        surface.set_stroke_color(Color::from_rgb8(0x80, 0x00, 0x00));
        surface.set_line_width(3.0);
        surface.stroke_line(Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)));

        let out = surface.document().to_string();
        assert!(out.contains(r##"stroke="#800000""##), "{out}");
        assert!(out.contains(r#"stroke-width="3""#), "{out}");
        assert!(out.contains(r#"d="M1,2 L3,4""#), "{out}");
        assert!(out.contains(r#"viewBox="0 0 600 400""#), "{out}");
    }

    #[test]
    fn curves_are_written_as_cubic_path_data() {
        let mut surface = surface();
        surface.stroke_bezier(CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ));

        let out = surface.document().to_string();
        assert!(out.contains(r#"d="M0,0 C1,2,3,4,5,6""#), "{out}");
    }

    #[test]
    fn clears_are_background_rectangles() {
        let mut surface = surface();
        surface.clear_rect(Rect::new(10.0, 20.0, 40.0, 60.0));

        let out = surface.document().to_string();
        assert!(out.contains("<rect"), "{out}");
        assert!(out.contains(r##"fill="#ffffff""##), "{out}");
        assert!(out.contains(r#"width="30""#), "{out}");
        assert!(out.contains(r#"height="40""#), "{out}");
        assert!(!out.contains("<path"), "{out}");
    }

    #[test]
    fn full_clear_discards_earlier_strokes() {
        let mut surface = surface();
        surface.stroke_line(Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)));
        surface.clear_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(surface.len(), 2);

        surface.clear_rect(Rect::new(0.0, 0.0, 600.0, 400.0));
        assert_eq!(surface.len(), 1);
        assert!(!surface.document().to_string().contains("<path"));
    }
}
