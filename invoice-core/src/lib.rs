pub mod objects;
pub mod writer;
pub mod format;
pub mod invoice;
pub mod layout;
pub mod document;
pub mod provider;
pub mod download;
pub mod error;

pub use document::{build_invoice_pdf, InvoiceDocument};
pub use download::{download_invoice, save_pdf};
pub use error::{ConfigError, DownloadError, ProviderError};
pub use invoice::{invoice_file_name, Customer, InvoiceData, Vehicle};
pub use layout::{Dealership, TextLine};
pub use provider::{InvoiceSource, SaleSummary, SqliteInvoiceSource};
