//! PDF rendering — turns generated letter text into downloadable bytes.

use printpdf::{BuiltinFont, CustomPdfConformance, Mm, PdfConformance, PdfDocument};
use thiserror::Error;
use time::OffsetDateTime;

pub mod layout;

use layout::{
    layout_lines, FONT_SIZE_PT, LINE_HEIGHT_MM, MARGIN_MM, MAX_COLS, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};

/// File name the artifact is offered under.
pub const PDF_FILE_NAME: &str = "cover_letter.pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
}

/// Renders letter text into a PDF document.
///
/// Input is downgraded to the document's base encoding before layout (lossy,
/// never failing), each source line becomes one or more fixed-width cell
/// rows, and a fresh page starts whenever the cursor passes the bottom
/// margin. Document dates are pinned and XMP metadata disabled so equal
/// input yields byte-identical output.
pub fn render(text: &str) -> Result<Vec<u8>, RenderError> {
    let rows = layout_lines(text, MAX_COLS);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Cover Letter",
        mm(PAGE_WIDTH_MM),
        mm(PAGE_HEIGHT_MM),
        "text",
    );
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH)
        .with_metadata_date(OffsetDateTime::UNIX_EPOCH);

    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for row in &rows {
        if y < MARGIN_MM {
            let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH_MM), mm(PAGE_HEIGHT_MM), "text");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        if !row.is_empty() {
            layer.use_text(row.as_str(), FONT_SIZE_PT as _, mm(MARGIN_MM), mm(y), &font);
        }
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

// printpdf's unit scalar; cast once at the boundary, math stays in f64.
fn mm(value: f64) -> Mm {
    Mm(value as _)
}
