//! Data-driven resume layout — maps a `ResumeData` aggregate onto positioned
//! text-drawing instructions for a single Letter page.
//!
//! The engine is pure: it neither reads files nor touches the PDF format.
//! The `render` backend replays the resulting `Page` verbatim.

pub mod engine;
pub mod page;
pub mod wrap;

pub use engine::render;
pub use page::{Cursor, FontStyle, Page, TextOp};
