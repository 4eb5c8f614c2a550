pub mod document;

pub use document::PdfDocument;

use anyhow::Result;
use std::path::Path;

/// Capability surface the split operation needs from a PDF backend.
/// Keeps the range/grouping logic decoupled from any particular PDF
/// library.
pub trait SourceDocument {
    /// Number of pages in the source document.
    fn page_count(&self) -> u32;

    /// Copy the given 1-based pages, in order, into a new document
    /// written at `output`.
    fn copy_pages(&self, pages: &[u32], output: &Path) -> Result<()>;
}
