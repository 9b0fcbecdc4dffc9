//! Record search: working-set selection and single-field filtering.
//!
//! Search does not go through the extraction strategies. It projects record
//! fields directly, so the selected strategy has no influence on results.

use crate::document::Document;
use crate::model::{Field, Scientist};

/// Records surviving a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub records: Vec<Scientist>,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Result-count line for the shell.
    pub fn message(&self) -> String {
        format!("Found {} results", self.count())
    }
}

/// The record list a search runs over.
///
/// A non-empty saved set wins; otherwise every scientist in the document is
/// flattened into a record. With neither, the working set is empty.
pub fn working_set(saved: &[Scientist], document: Option<&Document>) -> Vec<Scientist> {
    if !saved.is_empty() {
        return saved.to_vec();
    }
    document.map(Document::records).unwrap_or_default()
}

/// Filter `records` on the field named by `attribute`.
///
/// A blank phrase keeps everything. Otherwise a record survives when the
/// selected field contains the phrase, compared case-insensitively. Keys
/// outside the seven known fields match nothing.
pub fn search(records: Vec<Scientist>, attribute: &str, phrase: &str) -> SearchResult {
    if phrase.trim().is_empty() {
        return SearchResult { records };
    }

    let Some(field) = Field::from_key(attribute) else {
        tracing::debug!(attribute, "search key maps to no field");
        return SearchResult::default();
    };
    let needle = phrase.to_lowercase();
    let records = records
        .into_iter()
        .filter(|s| {
            s.field(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
        .collect();
    SearchResult { records }
}
