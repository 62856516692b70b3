use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to assemble an invoice from stored sale records.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("sale {0} not found")]
    SaleNotFound(String),
    #[error("customer for sale {0} not found")]
    CustomerNotFound(String),
    #[error("vehicle for sale {0} not found")]
    VehicleNotFound(String),
    /// A stored value cannot be represented in the invoice model.
    #[error("invalid {field} value {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ProviderError {
    /// True when a referenced record is absent, as opposed to a
    /// storage failure. Callers fall back to a listing in that case.
    pub fn is_missing_record(&self) -> bool {
        matches!(
            self,
            ProviderError::SaleNotFound(_)
                | ProviderError::CustomerNotFound(_)
                | ProviderError::VehicleNotFound(_)
        )
    }
}

/// Failure to save a generated invoice.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to load dealership configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
