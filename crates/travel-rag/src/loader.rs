//! Source document loading

use std::path::Path;

use travel_core::{Error, PageDocument, Result};

/// Load a PDF into page-level text units.
///
/// Startup-only. A missing or unreadable file is an error the caller must
/// treat as fatal; the service has nothing to ground answers in without it.
/// Pages with no extractable text are dropped.
pub fn load_pdf(path: impl AsRef<Path>) -> Result<Vec<PageDocument>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::Document(format!(
            "source document not found: {}",
            path.display()
        )));
    }

    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
        Error::Document(format!(
            "failed to extract text from {}: {}",
            path.display(),
            e
        ))
    })?;

    let documents: Vec<PageDocument> = pages
        .into_iter()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(page, content)| PageDocument { page, content })
        .collect();

    if documents.is_empty() {
        return Err(Error::Document(format!(
            "no extractable text in {}",
            path.display()
        )));
    }

    Ok(documents)
}
