use jigsaw::{Canvas, GridLayout, PhonemeTable, SvgSurface, Word, segment};

const CANVAS_HEIGHT: f64 = 600.0;

/// The syllable list shown next to a drawing; `*` flags a fallback glyph.
fn describe(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| {
            word.iter()
                .map(|syllable| {
                    let flag = if PhonemeTable::has_fallback(syllable) { "*" } else { "" };
                    format!("{syllable}{flag}")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.trim().is_empty() {
        "aloha ke!yiki".to_string()
    } else {
        text
    };

    let layout = GridLayout::default();
    let words = segment(&text);
    println!("{}", describe(&words));

    let canvas = Canvas::fitting(words.len(), CANVAS_HEIGHT)?;
    let mut surface = SvgSurface::new(canvas, layout.palette.background);
    layout.render(&words, canvas, &mut surface);
    surface.save("output_jigsaw.svg")?;
    println!("Wrote output_jigsaw.svg");

    let chart = Canvas::new(Canvas::MIN_WIDTH, 400.0)?;
    let mut surface = SvgSurface::new(chart, layout.palette.background);
    layout.render_reference_chart(chart, &mut surface);
    surface.save("output_chart.svg")?;
    println!("Wrote output_chart.svg");

    Ok(())
}
