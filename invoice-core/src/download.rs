//! Saving generated invoices to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::InvoiceDocument;
use crate::error::DownloadError;
use crate::invoice::{invoice_file_name, InvoiceData};
use crate::layout::Dealership;

/// A partially written file that is removed on drop unless it has
/// been moved into place.
struct PartialFile {
    path: PathBuf,
    persisted: bool,
}

impl PartialFile {
    fn persist(mut self, target: &Path) -> Result<(), DownloadError> {
        fs::rename(&self.path, target).map_err(|source| DownloadError::Io {
            path: target.to_path_buf(),
            source,
        })?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("could not remove {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Write `bytes` to `dir/invoice_<saleId>.pdf`.
///
/// The bytes go to a hidden partial file first and are renamed into
/// place once fully written, so a failed save never leaves a
/// truncated invoice behind. Returns the path of the saved file.
pub fn save_pdf(dir: &Path, sale_id: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    let file_name = invoice_file_name(sale_id);
    let target = dir.join(&file_name);
    let partial = PartialFile {
        path: dir.join(format!(".{}.part", file_name)),
        persisted: false,
    };

    let io_err = |source| DownloadError::Io {
        path: partial.path.clone(),
        source,
    };
    let file = File::create(&partial.path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    drop(out);

    partial.persist(&target)?;
    log::info!("saved invoice {} ({} bytes)", target.display(), bytes.len());
    Ok(target)
}

/// Build and save the invoice for `invoice` in `dir`. Rebuilding is
/// cheap, so a failed save can simply be retried.
pub fn download_invoice(
    invoice: &InvoiceData,
    seller: &Dealership,
    dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let bytes = InvoiceDocument::with_dealership(invoice, seller).to_bytes();
    save_pdf(dir, &invoice.sale_id, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_removed_on_drop() {
        let dir = std::env::temp_dir().join(format!("invoice-partial-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".x.part");
        fs::write(&path, b"partial").unwrap();
        drop(PartialFile {
            path: path.clone(),
            persisted: false,
        });
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
