use crate::objects::{ObjId, PdfObject};

/// Length of every cross-reference entry, including its
/// two-byte end-of-line marker.
pub const XREF_ENTRY_LEN: usize = 20;

/// Low-level PDF serializer. Accumulates the file in memory while
/// tracking the byte offset of each indirect object for the xref
/// table. Offsets are byte positions in the final buffer, so any
/// multi-byte UTF-8 text is accounted for exactly.
#[derive(Debug, Default)]
pub struct PdfWriter {
    buf: Vec<u8>,
    xref_offsets: Vec<usize>,
}

impl PdfWriter {
    pub fn new() -> Self {
        PdfWriter::default()
    }

    fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Write the PDF 1.4 file signature.
    pub fn write_header(&mut self) {
        self.write_str("%PDF-1.4\n");
    }

    /// Write an indirect object, recording its byte offset for xref.
    pub fn write_object(&mut self, id: ObjId, obj: &PdfObject) {
        self.xref_offsets.push(self.offset());
        self.write_str(&format!("{} {} obj\n", id.0, id.1));
        self.write_pdf_object(obj);
        self.write_str("\nendobj\n");
    }

    fn write_pdf_object(&mut self, obj: &PdfObject) {
        match obj {
            PdfObject::Integer(n) => self.write_str(&n.to_string()),
            PdfObject::Name(name) => {
                self.write_str("/");
                self.write_str(name);
            }
            PdfObject::Array(items) => {
                self.write_str("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_str(" ");
                    }
                    self.write_pdf_object(item);
                }
                self.write_str("]");
            }
            PdfObject::Dictionary(entries) => {
                self.write_str("<<");
                self.write_dict_entries(entries);
                self.write_str(" >>");
            }
            PdfObject::Stream { dict, data } => {
                self.write_str("<<");
                self.write_dict_entries(dict);
                self.write_str(" /Length ");
                self.write_str(&data.len().to_string());
                self.write_str(" >>\nstream\n");
                self.write_bytes(data);
                // The EOL before `endstream` is only added when the
                // data does not already end with one.
                if !data.ends_with(b"\n") {
                    self.write_str("\n");
                }
                self.write_str("endstream");
            }
            PdfObject::Reference(id) => {
                self.write_str(&format!("{} {} R", id.0, id.1));
            }
        }
    }

    fn write_dict_entries(&mut self, entries: &[(String, PdfObject)]) {
        for (key, val) in entries {
            self.write_str(" /");
            self.write_str(key);
            self.write_str(" ");
            self.write_pdf_object(val);
        }
    }

    /// Current byte offset in the output.
    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    /// Write xref table, trailer, startxref, and %%EOF.
    ///
    /// Objects are numbered 1..=n in the order they were written, so
    /// the table is one subsection starting at object 0.
    pub fn write_xref_and_trailer(&mut self, root_id: ObjId) {
        let xref_offset = self.offset();
        let size = self.xref_offsets.len() + 1;

        self.write_str("xref\n");
        self.write_str(&format!("0 {}\n", size));

        // Object 0: head of the free list.
        self.write_bytes(b"0000000000 65535 f \n");

        let table: String = self
            .xref_offsets
            .iter()
            .map(|off| format!("{:010} {:05} n \n", off, 0))
            .collect();
        self.write_str(&table);

        log::trace!("xref written at offset {} with {} entries", xref_offset, size);

        self.write_str("trailer\n");
        self.write_str(&format!(
            "<< /Size {} /Root {} {} R >>\n",
            size, root_id.0, root_id.1,
        ));
        self.write_str("startxref\n");
        self.write_str(&format!("{}\n", xref_offset));
        self.write_str("%%EOF\n");
    }

    /// Return the assembled file, consuming this PdfWriter.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Escape special characters in a PDF literal string.
///
/// Each backslash and parenthesis gets exactly one preceding
/// backslash. Characters are visited once, so the backslashes
/// introduced for parentheses are never escaped again.
pub fn escape_pdf_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            _ => result.push(c),
        }
    }
    result
}
