use crate::pdf::SourceDocument;
use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// lopdf-backed source document.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path)
            .with_context(|| format!("Failed to open PDF: {}", path.as_ref().display()))?;
        Ok(PdfDocument { doc })
    }
}

impl SourceDocument for PdfDocument {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn copy_pages(&self, pages: &[u32], output: &Path) -> Result<()> {
        let total = self.page_count();

        // The parser only emits in-range pages; a violation here is a bug
        // in the caller, not user input.
        for &page in pages {
            if page == 0 || page > total {
                anyhow::bail!("Page {} is out of range (1-{})", page, total);
            }
        }

        // Clone and delete every page that is not requested. Groups are
        // ascending runs, so document order matches the requested order.
        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = (1..=total).filter(|n| !pages.contains(n)).collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        // Drop objects only the deleted pages referenced.
        new_doc.prune_objects();
        new_doc.compress();

        new_doc
            .save(output)
            .with_context(|| format!("Failed to save PDF: {}", output.display()))?;

        Ok(())
    }
}

/// Build an in-memory PDF with `num_pages` pages, one line of text each.
#[cfg(test)]
pub(crate) fn sample_pdf(num_pages: u32) -> Document {
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Object, Stream};

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for i in 0..num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                ),
                Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("Page {}", i + 1).into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id =
            doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sample(dir: &TempDir, num_pages: u32) -> std::path::PathBuf {
        let path = dir.path().join("sample.pdf");
        sample_pdf(num_pages).save(&path).unwrap();
        path
    }

    #[test]
    fn test_page_count() {
        let dir = TempDir::new().unwrap();
        let doc = PdfDocument::open(write_sample(&dir, 5)).unwrap();
        assert_eq!(doc.page_count(), 5);
    }

    #[test]
    fn test_copy_subset_of_pages() {
        let dir = TempDir::new().unwrap();
        let doc = PdfDocument::open(write_sample(&dir, 5)).unwrap();

        let output = dir.path().join("out.pdf");
        doc.copy_pages(&[2, 4], &output).unwrap();

        let copied = Document::load(&output).unwrap();
        assert_eq!(copied.get_pages().len(), 2);
    }

    #[test]
    fn test_copy_single_page() {
        let dir = TempDir::new().unwrap();
        let doc = PdfDocument::open(write_sample(&dir, 3)).unwrap();

        let output = dir.path().join("out.pdf");
        doc.copy_pages(&[3], &output).unwrap();

        let copied = Document::load(&output).unwrap();
        assert_eq!(copied.get_pages().len(), 1);
    }

    #[test]
    fn test_copy_rejects_out_of_range_page() {
        let dir = TempDir::new().unwrap();
        let doc = PdfDocument::open(write_sample(&dir, 3)).unwrap();

        let output = dir.path().join("out.pdf");
        assert!(doc.copy_pages(&[0], &output).is_err());
        assert!(doc.copy_pages(&[4], &output).is_err());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(PdfDocument::open(dir.path().join("nope.pdf")).is_err());
    }
}
