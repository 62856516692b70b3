use crate::format::format_coord;
use crate::invoice::InvoiceData;
use crate::layout::{layout_invoice, Dealership, TextLine, PAGE_HEIGHT, PAGE_WIDTH};
use crate::objects::{ObjId, PdfObject};
use crate::writer::{escape_pdf_string, PdfWriter};

pub const CATALOG_OBJ: ObjId = ObjId(1, 0);
pub const PAGES_OBJ: ObjId = ObjId(2, 0);
pub const PAGE_OBJ: ObjId = ObjId(3, 0);
pub const CONTENT_OBJ: ObjId = ObjId(4, 0);
pub const FONT_OBJ: ObjId = ObjId(5, 0);

/// Resource name of the single base font.
const FONT_NAME: &str = "F1";

/// A laid-out, single-page invoice.
///
/// Layout runs once in the constructor and produces an immutable
/// list of positioned lines. Serialization is a separate pass over
/// those lines, so byte offsets are only ever computed from the
/// final buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    lines: Vec<TextLine>,
}

impl InvoiceDocument {
    /// Lay out an invoice with the default seller block.
    pub fn new(invoice: &InvoiceData) -> Self {
        Self::with_dealership(invoice, &Dealership::default())
    }

    pub fn with_dealership(invoice: &InvoiceData, seller: &Dealership) -> Self {
        let lines = layout_invoice(invoice, seller);
        log::debug!("laid out {} text lines for sale {}", lines.len(), invoice.sale_id);
        InvoiceDocument { lines }
    }

    /// Lines in draw order.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// The page content stream: one text block per line, each
    /// terminated by a newline.
    pub fn content_stream(&self) -> String {
        let mut content = String::new();
        for line in &self.lines {
            content.push_str(&format!(
                "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
                FONT_NAME,
                format_coord(line.font_size),
                format_coord(line.x),
                format_coord(line.y),
                escape_pdf_string(&line.text),
            ));
        }
        content
    }

    /// Serialize the complete PDF file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let content = self.content_stream().into_bytes();
        log::debug!("content stream is {} bytes", content.len());

        let mut writer = PdfWriter::new();
        writer.write_header();
        for (id, obj) in skeleton(content) {
            writer.write_object(id, &obj);
        }
        writer.write_xref_and_trailer(CATALOG_OBJ);
        writer.into_bytes()
    }
}

/// Build the invoice PDF for `invoice`. Pure and deterministic:
/// equal input always yields identical bytes.
pub fn build_invoice_pdf(invoice: &InvoiceData) -> Vec<u8> {
    InvoiceDocument::new(invoice).to_bytes()
}

/// The fixed five-object document. Only the content stream varies.
fn skeleton(content: Vec<u8>) -> [(ObjId, PdfObject); 5] {
    [
        (
            CATALOG_OBJ,
            PdfObject::dict(vec![
                ("Type", PdfObject::name("Catalog")),
                ("Pages", PdfObject::reference(PAGES_OBJ)),
            ]),
        ),
        (
            PAGES_OBJ,
            PdfObject::dict(vec![
                ("Type", PdfObject::name("Pages")),
                ("Kids", PdfObject::array(vec![PdfObject::reference(PAGE_OBJ)])),
                ("Count", PdfObject::Integer(1)),
            ]),
        ),
        (
            PAGE_OBJ,
            PdfObject::dict(vec![
                ("Type", PdfObject::name("Page")),
                ("Parent", PdfObject::reference(PAGES_OBJ)),
                (
                    "MediaBox",
                    PdfObject::array(vec![
                        PdfObject::Integer(0),
                        PdfObject::Integer(0),
                        PdfObject::Integer(PAGE_WIDTH as i64),
                        PdfObject::Integer(PAGE_HEIGHT as i64),
                    ]),
                ),
                ("Contents", PdfObject::reference(CONTENT_OBJ)),
                (
                    "Resources",
                    PdfObject::dict(vec![(
                        "Font",
                        PdfObject::dict(vec![(FONT_NAME, PdfObject::reference(FONT_OBJ))]),
                    )]),
                ),
            ]),
        ),
        (CONTENT_OBJ, PdfObject::stream(vec![], content)),
        (
            FONT_OBJ,
            PdfObject::dict(vec![
                ("Type", PdfObject::name("Font")),
                ("Subtype", PdfObject::name("Type1")),
                ("BaseFont", PdfObject::name("Helvetica")),
            ]),
        ),
    ]
}
