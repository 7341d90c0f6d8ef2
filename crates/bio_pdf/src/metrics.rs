//! Text measurement and word wrapping against the built-in Helvetica family.
//!
//! The painter draws with the PDF built-in Helvetica fonts, whose advance
//! widths are fixed by the Adobe AFM metrics. Carrying those widths here lets
//! the layout engine wrap text and make page-break decisions without touching
//! a rendering surface.

use crate::style::{BlockStyle, FontWeight};

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Helvetica advance widths for ASCII 0x20..=0x7E, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20..
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30..
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40..
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50..
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60..
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70..
];

/// Helvetica-Bold advance widths for ASCII 0x20..=0x7E, in 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20..
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30..
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40..
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50..
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60..
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70..
];

fn glyph_units(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA_WIDTHS,
        FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        // Non-ASCII input still has to wrap somewhere; assume a medium glyph.
        _ => table['e' as usize - 0x20],
    }
}

/// Returns the rendered width of `text` in millimetres at `size` points.
pub fn text_width(text: &str, size: f64, weight: FontWeight) -> f64 {
    let units: u64 = text.chars().map(|ch| glyph_units(ch, weight) as u64).sum();
    units as f64 / 1000.0 * size * PT_TO_MM
}

/// Greedily wraps `text` to `max_width` millimetres at the style's size and
/// weight. Embedded newlines force line breaks; a single word wider than the
/// line is split mid-word rather than overflowing. The result never contains
/// an empty trailing line, but blank lines inside the text are preserved.
pub fn wrap(text: &str, style: &BlockStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end();
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_line(raw_line, style, max_width, &mut lines);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn wrap_line(line: &str, style: &BlockStyle, max_width: f64, out: &mut Vec<String>) {
    let mut current = String::new();
    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, style.size, style.weight) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if text_width(word, style.size, style.weight) <= max_width {
            current = word.to_owned();
        } else {
            current = split_long_word(word, style, max_width, out);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Splits a word wider than a full line into line-sized chunks, pushing all
/// but the final chunk and returning the remainder as the new current line.
fn split_long_word(
    word: &str,
    style: &BlockStyle,
    max_width: f64,
    out: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if text_width(&chunk, style.size, style.weight) > max_width && chunk.chars().count() > 1 {
            let overflow = chunk.pop().expect("chunk has at least two chars");
            out.push(std::mem::take(&mut chunk));
            chunk.push(overflow);
        }
    }
    chunk
}

#[cfg(test)]
mod tests {
    use super::{text_width, wrap};
    use crate::style::{FontWeight, BODY};

    #[test]
    fn bold_text_is_wider_than_regular() {
        let regular = text_width("Profile", 11.0, FontWeight::Regular);
        let bold = text_width("Profile", 11.0, FontWeight::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let small = text_width("abc", 10.0, FontWeight::Regular);
        let large = text_width("abc", 20.0, FontWeight::Regular);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap("Hello world", &BODY, 170.0);
        assert_eq!(lines, vec!["Hello world".to_owned()]);
    }

    #[test]
    fn wrapped_lines_fit_the_requested_width() {
        let text = "The quick brown fox jumps over the lazy dog again and again";
        let max = 40.0;
        let lines = wrap(text, &BODY, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, BODY.size, BODY.weight) <= max, "{line}");
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn oversized_word_is_split_mid_word() {
        let text = "a".repeat(200);
        let lines = wrap(&text, &BODY, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn embedded_newlines_force_breaks() {
        let lines = wrap("first\n\nsecond", &BODY, 170.0);
        assert_eq!(
            lines,
            vec!["first".to_owned(), String::new(), "second".to_owned()]
        );
    }
}
