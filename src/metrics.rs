//! Text measurement and wrapping helpers.
//!
//! Backends without real font data (such as the recording surface) measure
//! text with the standard Helvetica advance widths. Wrapping itself is
//! independent of the metric source: [`split_text_to_size`] takes a closure
//! returning the width of a string in millimetres.

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Distance between consecutive lines of a multi-line text call, relative to the font size.
pub const LINE_SPACING_FACTOR: f64 = 1.15;

/// Advance widths (1/1000 em) of Helvetica for the printable ASCII range `' '..='~'`.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for characters outside the table.
const FALLBACK_WIDTH: u16 = 556;

fn helvetica_units(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_WIDTHS[ch as usize - ' ' as usize],
        '\t' => HELVETICA_WIDTHS[0] * 4,
        _ => FALLBACK_WIDTH,
    }
}

/// Converts a font size in points to millimetres.
pub fn pt_to_mm(points: f64) -> f64 {
    points * MM_PER_PT
}

/// Width in millimetres of `text` set in Helvetica at `font_size` points.
pub fn helvetica_width(text: &str, font_size: u8) -> f64 {
    let units: u32 = text.chars().map(|ch| u32::from(helvetica_units(ch))).sum();
    pt_to_mm(f64::from(units) * f64::from(font_size) / 1000.0)
}

/// Baseline-to-baseline distance of a multi-line text block at `font_size` points.
pub fn line_spacing(font_size: u8) -> f64 {
    pt_to_mm(f64::from(font_size)) * LINE_SPACING_FACTOR
}

/// Splits `text` into lines no wider than `max_width`.
///
/// Newlines always start a new line. Words are separated by single spaces
/// and packed greedily; runs of spaces, including the indentation at the
/// start of a line, are kept as written. A single word wider than
/// `max_width` is broken between characters. The result always holds at
/// least one line, so an empty text yields `[""]`.
pub fn split_text_to_size<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut line_started = false;

        // Empty tokens stand for the extra spaces of a run.
        for word in paragraph.split(' ') {
            if line_started {
                let candidate = format!("{} {}", current, word);
                if measure(&candidate) <= max_width {
                    current = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }
            line_started = true;

            if measure(word) <= max_width {
                current.push_str(word);
            } else {
                let mut pieces = break_word(word, max_width, &measure);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        lines.push(current);
    }

    lines
}

fn break_word<F>(word: &str, max_width: f64, measure: &F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for ch in word.chars() {
        piece.push(ch);
        if measure(&piece) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }

    pieces.push(piece);
    pieces
}
