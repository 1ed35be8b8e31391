use jigsaw::kurbo::{Line, Point};
use jigsaw::{
    Canvas, DrawCommand, GridLayout, Palette, PhonemeTable, Recording, SvgSurface, render,
    render_text, segment,
};

const SAMPLE: &str = "aloha ke!yiki Rako?u sim pan xq";

fn canvas() -> Canvas {
    Canvas::new(600.0, 600.0).unwrap()
}

fn record(text: &str) -> Recording {
    let mut surface = Recording::new();
    render(&segment(text), canvas(), &mut surface);
    surface
}

/// A plain vertical base line at `x` spanning grid row `row`.
fn vertical(x: f64, row: usize) -> Line {
    let top = 2.0 * row as f64 * 35.0 + 12.0;
    Line::new(Point::new(x, top), Point::new(x, top + 70.0))
}

fn count(surface: &Recording, line: Line) -> usize {
    surface.lines().filter(|l| *l == line).count()
}

#[test]
fn render_is_idempotent_across_fresh_surfaces() {
    assert_eq!(record(SAMPLE), record(SAMPLE));
}

#[test]
fn rerendering_onto_a_used_surface_repeats_the_pass() {
    let words = segment(SAMPLE);
    let mut surface = Recording::new();
    render(&words, canvas(), &mut surface);
    render(&words, canvas(), &mut surface);

    let commands = surface.into_commands();
    let (first, second) = commands.split_at(commands.len() / 2);
    assert_eq!(first, second);
}

#[test]
fn shorter_column_is_padded_up_to_previous_length() {
    let words = segment("kakaka pa");
    assert_eq!(words.iter().map(|w| w.len()).collect::<Vec<_>>(), [3, 1]);

    let mut surface = Recording::new();
    render(&words, canvas(), &mut surface);

    // Second column's right edge sits at x = 300.
    assert_eq!(count(&surface, vertical(300.0, 0)), 1, "drawn by p");
    assert_eq!(count(&surface, vertical(300.0, 1)), 1, "padding");
    assert_eq!(count(&surface, vertical(300.0, 2)), 1, "padding");
    assert_eq!(count(&surface, vertical(300.0, 3)), 0);

    // The closing edge follows the last word only.
    assert_eq!(count(&surface, vertical(204.0, 0)), 1);
    assert_eq!(count(&surface, vertical(204.0, 1)), 0);
}

#[test]
fn longer_column_after_shorter_one_gets_no_padding() {
    let surface = record("pa kakaka");

    // First column's right edge sits at x = 396; only p draws on it.
    assert_eq!(count(&surface, vertical(396.0, 0)), 1);
    assert_eq!(count(&surface, vertical(396.0, 1)), 0);
    assert_eq!(count(&surface, vertical(396.0, 2)), 0);

    for row in 0..3 {
        assert_eq!(count(&surface, vertical(204.0, row)), 1, "closing row {row}");
    }
}

#[test]
fn first_word_is_the_rightmost_column() {
    let surface = record("ka ka");
    let tops: Vec<f64> = surface
        .lines()
        .filter(|l| l.p0.y == 12.0 && l.p1.y == 12.0)
        .map(|l| l.p0.x)
        .collect();
    assert_eq!(tops, [300.0, 204.0]);
}

#[test]
fn stress_marker_takes_no_row() {
    let words = segment("ke!yiki");
    assert_eq!(words[0].len(), 3);
    assert!(words[0].syllables[0].stressed);

    // One closing vertical per row, on a one-column grid at x = 252.
    let surface = record("ke!yiki");
    let closing = surface.lines().filter(|l| l.p0.x == 252.0 && l.p1.x == 252.0).count();
    assert_eq!(closing, 3);
}

#[test]
fn unknown_consonants_fall_back_without_failing() {
    let palette = Palette::default();
    let surface = record("xq vz");

    let commands = surface.commands();
    let fallbacks: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == DrawCommand::SetStrokeColor(palette.fallback))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(fallbacks.len(), 3, "x, q and v are not in the table");

    for i in fallbacks {
        assert!(matches!(commands[i + 1], DrawCommand::StrokeLine(_)));
        assert_eq!(commands[i + 2], DrawCommand::SetStrokeColor(palette.ink));
    }
}

#[test]
fn empty_text_draws_nothing() {
    let surface = record("");
    assert_eq!(surface.stroke_count(), 0);

    let surface = record("123 !!");
    assert_eq!(surface.stroke_count(), 0);
}

#[test]
fn empty_words_still_take_a_column() {
    // The middle column is empty, so the last one sits two columns left.
    let surface = record("ka  ka");
    let tops: Vec<f64> = surface
        .lines()
        .filter(|l| l.p0.y == 12.0 && l.p1.y == 12.0)
        .map(|l| l.p0.x)
        .collect();
    assert_eq!(tops, [348.0, 156.0]);
}

#[test]
fn render_text_returns_what_it_drew() {
    let mut surface = Recording::new();
    let words = render_text(SAMPLE, canvas(), &mut surface);
    assert_eq!(words, segment(SAMPLE));
    assert_eq!(surface, record(SAMPLE));
}

#[test]
fn flagged_syllables_match_fallback_strokes() {
    let words = segment("ka! ke! xa");
    let flags: Vec<bool> = words
        .iter()
        .flat_map(|w| w.iter().map(PhonemeTable::has_fallback))
        .collect();
    assert_eq!(flags, [true, false, true]);
}

#[test]
fn leading_stress_marker_draws_as_a_fallback_consonant() {
    let palette = Palette::default();
    let words = segment("!a");
    assert!(words[0].iter().all(PhonemeTable::has_fallback));

    let surface = record("!a");
    let fallbacks = surface
        .commands()
        .iter()
        .filter(|c| **c == DrawCommand::SetStrokeColor(palette.fallback))
        .count();
    assert_eq!(fallbacks, 1);
}

#[test]
fn svg_output_is_stable_and_uses_the_fallback_colour() {
    let layout = GridLayout::default();
    let words = segment("xa ke!");
    let canvas = Canvas::fitting(words.len(), 600.0).unwrap();

    let mut surface = SvgSurface::new(canvas, layout.palette.background);
    layout.render(&words, canvas, &mut surface);
    let once = surface.document().to_string();
    layout.render(&words, canvas, &mut surface);
    let twice = surface.document().to_string();

    assert_eq!(once, twice);
    assert!(once.contains("#800000"));
    assert!(once.contains("#111120"));
}
