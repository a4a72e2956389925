//! Advance widths for the built-in Times faces.
//!
//! The PDF base-14 fonts ship no metrics with the file, so line breaking
//! needs the Adobe AFM advance widths compiled in. Tables cover the ASCII
//! range; anything outside it gets a half-em estimate (full em for the em
//! dash), which only shifts a break point, never loses text.

/// Which Times face a run of text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Italic,
}

// Glyph widths in 1/1000 em for chars 0x20..=0x7E, straight from the AFMs.

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 333, 333, 333, 500, 564, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278,
    564, 564, 564, 444, 921, 722, 667, 667, 722, 611, 556, 722, 722, 333,
    389, 722, 611, 889, 722, 722, 556, 722, 667, 556, 611, 722, 722, 944,
    722, 722, 611, 333, 278, 333, 469, 500, 333, 444, 500, 444, 500, 444,
    333, 500, 500, 278, 278, 500, 278, 778, 500, 500, 500, 500, 333, 389,
    278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 333, 333, 333, 500, 570, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333,
    570, 570, 570, 500, 930, 722, 667, 722, 722, 667, 611, 778, 778, 389,
    500, 778, 667, 944, 722, 778, 611, 778, 722, 556, 667, 722, 722, 1000,
    722, 722, 667, 333, 278, 333, 581, 500, 333, 500, 556, 444, 556, 444,
    333, 500, 556, 278, 333, 556, 278, 833, 556, 500, 556, 556, 444, 389,
    333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 333, 333, 333, 500, 675, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333,
    675, 675, 675, 500, 920, 611, 611, 667, 722, 611, 611, 722, 722, 333,
    444, 667, 556, 833, 667, 722, 611, 722, 611, 500, 556, 722, 611, 833,
    611, 556, 556, 389, 278, 389, 422, 500, 333, 500, 500, 444, 500, 444,
    278, 500, 500, 278, 278, 444, 278, 722, 500, 500, 500, 500, 389, 389,
    278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

const DEFAULT_WIDTH: u16 = 500;
const EM_DASH_WIDTH: u16 = 1000;

fn char_width_units(ch: char, face: Face) -> u16 {
    let table = match face {
        Face::Regular => &TIMES_ROMAN,
        Face::Bold => &TIMES_BOLD,
        Face::Italic => &TIMES_ITALIC,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        '—' | '…' => EM_DASH_WIDTH,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points when set in `face` at `size`.
#[must_use]
pub fn text_width(text: &str, face: Face, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width_units(ch, face))).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap of `text` to `max_width` points.
///
/// Words are never broken: a single word wider than the line gets a line of
/// its own, so rejoining the output always reproduces the input words in
/// order. Empty or whitespace-only text wraps to no lines.
#[must_use]
pub fn wrap(text: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let space_width = text_width(" ", face, size);
        let extended = text_width(&line, face, size) + space_width + text_width(word, face, size);
        if extended <= max_width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
