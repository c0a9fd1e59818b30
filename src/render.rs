//! Presentation helpers around the evaluator: display text for a result,
//! the per-character meme glyph row, and the fixed image-asset table with
//! its plain-text fallback. Nothing in here touches the DOM; the UI layer
//! consumes these values.

/// Formats a finite result the way the display shows it, i.e., the
/// shortest text that round-trips. The sign of a negative zero is dropped.
pub fn format_value(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{}", x)
}

/// One drawable cell of the meme output row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Digit(u8),
    DecimalPoint,
    MinusSign,
    /// Shown instead of digits when the evaluation failed.
    Error,
}

/// Splits display text into glyphs. Only a leading minus, digits, and the
/// decimal point get a cell; anything else (such as the exponent marker of
/// very large results) is skipped, like in the on-screen renderer.
pub fn glyphs(display: &str) -> Vec<Glyph> {
    let mut out = Vec::new();
    for (i, c) in display.chars().enumerate() {
        match c {
            '-' if i == 0 => out.push(Glyph::MinusSign),
            '.' => out.push(Glyph::DecimalPoint),
            '0'..='9' => out.push(Glyph::Digit(c as u8 - b'0')),
            _ => {}
        }
    }
    out
}

/// Glyph row for a failed evaluation.
pub fn error_glyphs() -> Vec<Glyph> {
    vec![Glyph::Error]
}

/// Bundled meme template for a glyph. Punctuation has no image and always
/// renders as text.
pub fn asset(glyph: Glyph) -> Option<&'static str> {
    match glyph {
        Glyph::Digit(0) => Some("templates/0.jpg"),
        Glyph::Digit(1) => Some("templates/1.png"),
        Glyph::Digit(2) => Some("templates/2.jpg"),
        Glyph::Digit(3) => Some("templates/3.png"),
        Glyph::Digit(4) => Some("templates/4.jpg"),
        Glyph::Digit(5) => Some("templates/5.jpg"),
        Glyph::Digit(6) => Some("templates/6.jpg"),
        Glyph::Digit(7) => Some("templates/7.jpg"),
        Glyph::Digit(8) => Some("templates/8.jpg"),
        Glyph::Digit(9) => Some("templates/9.jpg"),
        Glyph::Error => Some("templates/error.jpg"),
        _ => None,
    }
}

/// Text drawn in place of a glyph whose image asset could not be loaded.
pub fn fallback_text(glyph: Glyph) -> char {
    match glyph {
        Glyph::Digit(d) => (b'0' + d.min(9)) as char,
        Glyph::DecimalPoint => '.',
        Glyph::MinusSign => '−',
        Glyph::Error => '!',
    }
}
