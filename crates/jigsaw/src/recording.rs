use jigsaw_core::kurbo::{CubicBez, Line, Rect};
use jigsaw_core::{Color, DrawingSurface};

/// One call made against a [DrawingSurface].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetStrokeColor(Color),
    SetLineWidth(f64),
    StrokeLine(Line),
    StrokeBezier(CubicBez),
    ClearRect(Rect),
}

/// A surface that remembers every command in order.
///
/// Two recordings compare equal when the same drawing instructions were
/// issued, which makes this the surface of choice for comparing renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    commands: Vec<DrawCommand>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Straight strokes, in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeLine(line) => Some(*line),
            _ => None,
        })
    }

    /// Number of line and curve strokes.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine(_) | DrawCommand::StrokeBezier(_)))
            .count()
    }
}

impl DrawingSurface for Recording {
    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn stroke_line(&mut self, line: Line) {
        self.commands.push(DrawCommand::StrokeLine(line));
    }

    fn stroke_bezier(&mut self, curve: CubicBez) {
        self.commands.push(DrawCommand::StrokeBezier(curve));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }
}
