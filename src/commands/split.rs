use crate::page_groups::{self, PageGroup};
use crate::pdf::{PdfDocument, SourceDocument};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one split operation needs, gathered up front.
pub struct SplitRequest {
    /// Source PDF.
    pub input: PathBuf,
    /// Directory the output files are written to.
    pub output_dir: PathBuf,
    /// Range expression like "1-3,7". `None` or blank splits one page
    /// per file.
    pub pages: Option<String>,
}

pub fn run(request: &SplitRequest) -> Result<()> {
    fs::create_dir_all(&request.output_dir).with_context(|| {
        format!(
            "Failed to create directory: {}",
            request.output_dir.display()
        )
    })?;

    let doc = PdfDocument::open(&request.input)?;
    let written = split_document(&doc, request.pages.as_deref(), &request.output_dir)?;

    println!(
        "Wrote {} file(s) to {}",
        written.len(),
        request.output_dir.display()
    );

    Ok(())
}

/// Copy pages out of `doc`, one output file per group, returning the
/// paths written in order.
fn split_document<D: SourceDocument>(
    doc: &D,
    expression: Option<&str>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let total_pages = doc.page_count();
    let expression = expression.map(str::trim).filter(|e| !e.is_empty());

    let mut written = Vec::new();

    match expression {
        None => {
            // No expression: every page becomes its own file.
            for page in 1..=total_pages {
                let path = output_dir.join(format!("page_{}.pdf", page));
                doc.copy_pages(&[page], &path)?;
                written.push(path);
            }
        }
        Some(expression) => {
            let parsed = page_groups::parse_groups(expression, total_pages);

            for skipped in &parsed.skipped {
                eprintln!("warning: ignoring \"{}\": {}", skipped.text, skipped.reason);
            }

            for group in &parsed.groups {
                let path = output_dir.join(group_file_name(group));
                doc.copy_pages(group.pages(), &path)?;
                written.push(path);
            }
        }
    }

    Ok(written)
}

fn group_file_name(group: &PageGroup) -> String {
    if group.pages().len() == 1 {
        format!("pages_{}.pdf", group.first())
    } else {
        format!("pages_{}-{}.pdf", group.first(), group.last())
    }
}
