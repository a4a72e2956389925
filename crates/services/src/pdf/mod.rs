//! Paginated PDF rendering for assembled documents.
//!
//! Letter pages, fixed margins, a running vertical cursor measured from the
//! top of the page. Every line checks the bottom threshold before it is
//! drawn; crossing it starts a fresh page with the cursor back at the top
//! margin.

pub mod metrics;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt,
};

use crate::document::{Document, TAGLINE};
use crate::error::ExportError;
pub use metrics::{Face, text_width, wrap};

// Page geometry in points, letter size.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;
pub const USABLE_WIDTH: f32 = 468.0;
/// A line whose baseline would land below this starts a new page.
pub const PAGE_BOTTOM: f32 = 720.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const TAGLINE_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 16.0;
const TAGLINE_LINE_HEIGHT: f32 = 14.0;
const SECTION_GAP: f32 = 10.0;
/// Body content starts below the title line.
const CONTENT_TOP: f32 = 100.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Writes wrapped text down a letter page, breaking to new pages as the
/// cursor crosses the bottom threshold.
pub struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    cursor: f32,
    pages: usize,
}

impl PageWriter {
    /// Start a document with the title line drawn at the top margin.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Render` if the backend rejects the built-in
    /// fonts.
    pub fn new(title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::TimesRoman)?,
            bold: doc.add_builtin_font(BuiltinFont::TimesBold)?,
            italic: doc.add_builtin_font(BuiltinFont::TimesItalic)?,
        };

        let mut writer = Self {
            doc,
            layer,
            fonts,
            cursor: MARGIN,
            pages: 1,
        };
        writer.draw_line(title, Face::Regular, TITLE_SIZE);
        writer.cursor = CONTENT_TOP;
        Ok(writer)
    }

    #[must_use]
    pub fn pages(&self) -> usize {
        self.pages
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.fonts.regular,
            Face::Bold => &self.fonts.bold,
            Face::Italic => &self.fonts.italic,
        }
    }

    fn draw_line(&mut self, line: &str, face: Face, size: f32) {
        // Baseline coordinates count up from the page bottom in PDF space.
        self.layer.use_text(
            line,
            size,
            Mm::from(Pt(MARGIN)),
            Mm::from(Pt(PAGE_HEIGHT - self.cursor)),
            self.font(face),
        );
    }

    fn break_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN;
        self.pages += 1;
    }

    /// Wrap `text` to the usable width and write it line by line,
    /// advancing the cursor and breaking pages as needed.
    pub fn write_wrapped(&mut self, text: &str, face: Face, size: f32, line_height: f32) {
        for line in wrap(text, face, size, USABLE_WIDTH) {
            if self.cursor > PAGE_BOTTOM {
                self.break_page();
            }
            self.draw_line(&line, face, size);
            self.cursor += line_height;
        }
    }

    /// Bold heading, normal body, then the standard section gap.
    pub fn write_section(&mut self, heading: &str, body: &str) {
        self.write_wrapped(heading, Face::Bold, HEADING_SIZE, LINE_HEIGHT);
        self.write_wrapped(body, Face::Regular, BODY_SIZE, LINE_HEIGHT);
        self.cursor += SECTION_GAP;
    }

    /// Extra vertical space; never breaks a page on its own.
    pub fn gap(&mut self, points: f32) {
        self.cursor += points;
    }

    /// Finish the document and hand back the bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Render` if serializing the document fails.
    pub fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.doc.save_to_bytes()?)
    }
}

/// Render an assembled document to PDF bytes.
///
/// # Errors
///
/// Returns `ExportError::Render` if the backend fails; nothing is written
/// anywhere by this function.
pub fn render(document: &Document) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new(document.title())?;
    for section in document.sections() {
        writer.write_section(section.heading(), section.body());
        writer.gap(section.extra_gap());
    }
    writer.gap(SECTION_GAP);
    writer.write_wrapped(TAGLINE, Face::Italic, TAGLINE_SIZE, TAGLINE_LINE_HEIGHT);
    writer.finish()
}
