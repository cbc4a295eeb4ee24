//! PDF backend — replays a laid-out `Page` into a single-page lopdf document
//! using the built-in Type1 Helvetica fonts.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::layout::page::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::{FontStyle, Page};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Writes the page to `path` as a finished PDF and closes it. The document
/// is assembled fully in memory; any failure to persist surfaces unchanged.
pub fn write_pdf(page: &Page, path: &Path) -> Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_regular,
            FONT_BOLD => font_bold,
        },
    });

    // One BT/ET group per text op, replayed in layout order.
    let mut operations = Vec::with_capacity(page.ops().len() * 5);
    for op in page.ops() {
        let font = match op.style {
            FontStyle::Regular => FONT_REGULAR,
            FontStyle::Bold => FONT_BOLD,
        };
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec![font.into(), op.size.into()]));
        operations.push(Operation::new("Td", vec![op.x.into(), op.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_winansi(&op.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let encoded = content.encode().context("encoding page content stream")?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    debug!("wrote {} text ops to {}", page.ops().len(), path.display());
    Ok(())
}

/// Maps text to WinAnsi (CP-1252) bytes for the built-in Type1 fonts.
/// ASCII passes through; the typographic characters the layout emits are
/// mapped explicitly; anything else degrades to '?'.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            _ => b'?',
        })
        .collect()
}
