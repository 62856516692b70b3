use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::{format_money, format_odometer};
use crate::invoice::InvoiceData;

/// US Letter, in points.
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

const LEFT: f64 = 48.0;
const RIGHT_COLUMN: f64 = 360.0;
/// Step between vehicle detail lines.
const DETAIL_LINE_HEIGHT: f64 = 14.0;
const FOOTER_Y: f64 = 80.0;

const FOOTER_TEXT: &str =
    "Thank you for your business. Please retain this invoice for your records.";

/// One line of text at an absolute page position (bottom-left
/// origin, points).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub text: String,
}

/// The seller block printed in the invoice header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dealership {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for Dealership {
    fn default() -> Self {
        Dealership {
            name: "DealerDrive Auto Sales".to_string(),
            address: "123 King St W, Kitchener, ON".to_string(),
            phone: "(555) 555-5555".to_string(),
        }
    }
}

impl Dealership {
    /// Load a seller block from a JSON file. Missing fields keep
    /// their default values.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Accumulates positioned lines in draw order.
#[derive(Debug, Default)]
struct Layout {
    lines: Vec<TextLine>,
}

impl Layout {
    fn place_text(&mut self, text: impl Into<String>, x: f64, y: f64, font_size: f64) -> &mut Self {
        self.lines.push(TextLine {
            x,
            y,
            font_size,
            text: text.into(),
        });
        self
    }
}

/// Lay out one invoice page. Positions are fixed; long values are
/// never wrapped or truncated.
pub fn layout_invoice(invoice: &InvoiceData, seller: &Dealership) -> Vec<TextLine> {
    let top = PAGE_HEIGHT;
    let mut page = Layout::default();

    // Header
    page.place_text("INVOICE", LEFT, top - 70.0, 22.0)
        .place_text(seller.name.as_str(), LEFT, top - 95.0, 10.0)
        .place_text(seller.address.as_str(), LEFT, top - 110.0, 10.0)
        .place_text(format!("Phone: {}", seller.phone), LEFT, top - 125.0, 10.0);

    // Meta, right column
    page.place_text(format!("Invoice #: {}", invoice.sale_id), RIGHT_COLUMN, top - 95.0, 10.0)
        .place_text(format!("Invoice Date: {}", invoice.date), RIGHT_COLUMN, top - 110.0, 10.0);

    // Bill to
    page.place_text("Bill To:", LEFT, top - 165.0, 12.0)
        .place_text(invoice.customer.full_name(), LEFT, top - 185.0, 11.0);

    // Vehicle details
    let start_y = top - 235.0;
    page.place_text("Vehicle Details", LEFT, start_y, 12.0);

    let v = &invoice.vehicle;
    let details = [
        format!("VIN: {}", v.vin),
        format!("Vehicle: {}", v.description()),
        format!("Odometer: {}", format_odometer(v.odometer)),
        format!("Transmission: {}", v.transmission),
        format!("Fuel Type: {}", v.fuel_type),
    ];
    let mut y = start_y - 18.0;
    for detail in details {
        page.place_text(detail, LEFT, y, 10.0);
        y -= DETAIL_LINE_HEIGHT;
    }

    // Total
    y -= 10.0;
    page.place_text("Total", RIGHT_COLUMN, y, 12.0)
        .place_text(format_money(invoice.sale_price), RIGHT_COLUMN, y - 18.0, 16.0);

    page.place_text(FOOTER_TEXT, LEFT, FOOTER_Y, 9.0);

    page.lines
}
