//! Saved-set persistence and the XML → HTML transform pipeline.
//!
//! ```text
//! results ──save──▶ saved set ──▶ SavedScientists.xml
//!                       │
//!                       └──transform──▶ XML + style-sheet ──Transformer──▶ transformed.html
//! ```
//!
//! Every outcome is reported as a [`Notice`]; nothing here returns an error
//! to the caller. Files are written before success is reported, and a failed
//! step leaves previously written files as they were.

mod transform;

use std::path::Path;

pub use transform::{TransformError, Transformer, XsltProc};

use crate::document::{Document, DocumentError, writer};
use crate::model::Scientist;
use crate::notice::Notice;

/// Persist `results` as the new saved set.
///
/// Empty results are an informational no-op: neither the file nor `saved`
/// changes. Otherwise the XML is written to `path` first and `saved` is
/// replaced only once the write succeeded.
pub fn save(results: &[Scientist], saved: &mut Vec<Scientist>, path: &Path) -> Notice {
    if results.is_empty() {
        tracing::debug!("nothing to save");
        return Notice::info("No results to save.");
    }

    match Document::from_records(results).save(path) {
        Ok(()) => {
            *saved = results.to_vec();
            tracing::info!(path = %path.display(), count = saved.len(), "saved results");
            Notice::success("Results saved successfully.")
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to save results");
            Notice::error(format!("An error occurred: {e}"))
        }
    }
}

/// File locations used by [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct TransformPaths<'a> {
    /// Rewritten with the saved set before transforming.
    pub saved_xml: &'a Path,
    pub stylesheet: &'a Path,
    pub html: &'a Path,
}

/// Transform the saved set into HTML.
///
/// An empty saved set is an informational no-op with no file writes. A
/// failing or empty transform is reported as an error and no HTML is written.
pub fn transform(saved: &[Scientist], paths: TransformPaths<'_>, transformer: &dyn Transformer) -> Notice {
    if saved.is_empty() {
        tracing::debug!("no saved scientists to transform");
        return Notice::info("No saved scientists to transform.");
    }

    let xml = match persist_saved(saved, paths.saved_xml) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::error!(path = %paths.saved_xml.display(), error = %e, "failed to write saved XML");
            return Notice::error(format!("An error occurred: {e}"));
        }
    };

    let html = render(&xml, paths.stylesheet, transformer);
    if html.is_empty() {
        return Notice::error("Failed to generate HTML content.");
    }

    match writer::write_file_atomic(paths.html, &html) {
        Ok(()) => {
            tracing::info!(path = %paths.html.display(), bytes = html.len(), "wrote HTML");
            Notice::success(format!("HTML saved to {}", paths.html.display()))
        }
        Err(e) => {
            tracing::error!(path = %paths.html.display(), error = %e, "failed to write HTML");
            Notice::error(format!("An error occurred: {e}"))
        }
    }
}

fn persist_saved(saved: &[Scientist], path: &Path) -> Result<String, DocumentError> {
    let xml = Document::from_records(saved).to_xml_string()?;
    writer::write_file_atomic(path, &xml)?;
    Ok(xml)
}

/// Run the transform, degrading any failure to empty output.
fn render(xml: &str, stylesheet: &Path, transformer: &dyn Transformer) -> String {
    match transformer.transform(xml, stylesheet) {
        Ok(markup) => markup,
        Err(e) => {
            tracing::error!(stylesheet = %stylesheet.display(), error = %e, "XML to HTML transformation failed");
            String::new()
        }
    }
}
