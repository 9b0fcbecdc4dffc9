use super::ExtractionStrategy;
use crate::document::{Document, DocumentError, XmlElement};

/// Declarative extraction over the already-loaded element tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStrategy;

impl ExtractionStrategy for QueryStrategy {
    fn name(&self) -> &'static str {
        "Query"
    }

    fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError> {
        Ok(document
            .scientists()
            .filter_map(|s| s.element(attribute))
            .map(XmlElement::text)
            .collect())
    }
}
