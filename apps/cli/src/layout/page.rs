//! Page geometry and the drawing-instruction model.
//!
//! Coordinates are in points with the origin at the page's bottom-left
//! (standard PDF convention); the cursor only ever moves down. There is no
//! overflow handling — content past the bottom edge is drawn off-page.

// ────────────────────────────────────────────────────────────────────────────
// Fixed geometry (US Letter, not configurable)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
/// First baseline sits this far below the top edge.
pub const TOP_MARGIN: f32 = 50.0;
/// Left margin for section headers and the summary paragraph.
pub const X_BASE: f32 = 50.0;
/// Bulleted list entries and project titles.
pub const X_INDENT: f32 = 60.0;
/// Wrapped project descriptions and education date lines.
pub const X_PARA: f32 = 70.0;
/// Default line height for body text and wrapped paragraphs.
pub const LINE_HEIGHT: f32 = 12.0;

pub const NAME_SIZE: f32 = 18.0;
pub const HEADER_SIZE: f32 = 12.0;
pub const BODY_SIZE: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Drawing instructions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One positioned piece of text. The engine produces these in drawing order;
/// the PDF backend replays them without reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub x: f32,
    pub y: f32,
    pub style: FontStyle,
    pub size: f32,
    pub text: String,
}

/// A single logical page: the ordered drawing instructions of one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    ops: Vec<TextOp>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(
        &mut self,
        x: f32,
        cursor: Cursor,
        style: FontStyle,
        size: f32,
        text: impl Into<String>,
    ) {
        self.ops.push(TextOp {
            x,
            y: cursor.y(),
            style,
            size,
            text: text.into(),
        });
    }

    pub fn ops(&self) -> &[TextOp] {
        &self.ops
    }
}

/// Explicit vertical cursor threaded through every section-rendering step.
/// Each step takes a cursor and returns the next one; nothing mutates a
/// shared `y`, which keeps the sections independently testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor(f32);

impl Cursor {
    /// Starting position: a fixed margin below the top edge.
    pub fn top() -> Self {
        Cursor(PAGE_HEIGHT - TOP_MARGIN)
    }

    pub fn at(y: f32) -> Self {
        Cursor(y)
    }

    pub fn y(self) -> f32 {
        self.0
    }

    /// Moves down the page by `amount` points.
    #[must_use]
    pub fn down(self, amount: f32) -> Self {
        Cursor(self.0 - amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_below_top_edge() {
        assert_eq!(Cursor::top().y(), PAGE_HEIGHT - TOP_MARGIN);
    }

    #[test]
    fn test_cursor_down_decreases_y() {
        let cur = Cursor::at(700.0).down(25.0);
        assert_eq!(cur.y(), 675.0);
    }

    #[test]
    fn test_page_records_ops_in_order() {
        let mut page = Page::new();
        page.text(50.0, Cursor::at(742.0), FontStyle::Bold, NAME_SIZE, "first");
        page.text(50.0, Cursor::at(717.0), FontStyle::Regular, BODY_SIZE, "second");
        assert_eq!(page.ops().len(), 2);
        assert_eq!(page.ops()[0].text, "first");
        assert_eq!(page.ops()[1].y, 717.0);
    }
}
