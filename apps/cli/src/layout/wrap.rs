//! Greedy paragraph wrapping under a fixed-width glyph approximation.

use super::page::{Cursor, FontStyle, Page, BODY_SIZE};

/// Assumed average glyph width in points. Deliberate approximation — the
/// per-line character budget is `floor(max_width / 6)`, not a true
/// text-metric measurement.
pub const GLYPH_WIDTH: f32 = 6.0;

/// Splits `text` into lines of at most `floor(max_width / GLYPH_WIDTH)`
/// characters, breaking greedily at word boundaries. Whitespace runs are
/// normalized to single spaces. A word longer than the whole budget is
/// hard-broken at the budget. Empty or all-whitespace input produces no
/// lines.
pub fn wrap_text(text: &str, max_width: f32) -> Vec<String> {
    let budget = ((max_width / GLYPH_WIDTH) as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > budget {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(budget)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draws `text` as a wrapped paragraph starting at `(x, cursor)` in regular
/// body style, one op per line, and returns the cursor after the last line:
/// `cursor − line_height × lines`. Empty input leaves the cursor unchanged.
pub fn draw_paragraph(
    page: &mut Page,
    text: &str,
    x: f32,
    cursor: Cursor,
    max_width: f32,
    line_height: f32,
) -> Cursor {
    let mut cur = cursor;
    for line in wrap_text(text, max_width) {
        page.text(x, cur, FontStyle::Regular, BODY_SIZE, line);
        cur = cur.down(line_height);
    }
    cur
}
