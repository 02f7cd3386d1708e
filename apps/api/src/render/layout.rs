//! Text normalization and fixed-width cell layout for the PDF renderer.
//!
//! The target document uses Courier, so every glyph advances the same
//! distance and column math is exact: a line budget in characters IS the
//! line budget in page width. All normalization is lossy-but-total — any
//! input string lays out, nothing fails.

/// Page geometry: A4 with uniform margins.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const MARGIN_MM: f64 = 20.0;

pub const FONT_SIZE_PT: f64 = 11.0;
pub const LINE_HEIGHT_MM: f64 = 5.0;

/// Characters per cell row. Courier advances 0.6 em per glyph, so at 11 pt
/// each column is 6.6 pt ≈ 2.328 mm; (210 − 2·20) mm of usable width holds
/// 73 full columns.
pub const MAX_COLS: usize = 73;

/// Downgrades text to the document's base encoding (printable ASCII).
///
/// Typographic punctuation maps to its ASCII equivalent; tabs become spaces;
/// newlines survive; every other unrepresentable character is dropped.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            '\u{2022}' | '\u{00B7}' => out.push('-'),
            c if (' '..='~').contains(&c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Greedy word-wrap of one already-sanitized source line into cell rows of at
/// most `max_cols` characters. Words longer than a full row hard-break; a
/// blank source line yields one empty row (vertical space).
pub fn wrap(line: &str, max_cols: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word;
        while word.len() > max_cols {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let (head, tail) = word.split_at(max_cols);
            rows.push(head.to_string());
            word = tail;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_cols {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Full layout pass: sanitize, then wrap each source line into cell rows.
pub fn layout_lines(text: &str, max_cols: usize) -> Vec<String> {
    let clean = sanitize(text);
    let mut rows = Vec::new();
    for line in clean.lines() {
        rows.extend(wrap(line, max_cols));
    }
    rows
}
