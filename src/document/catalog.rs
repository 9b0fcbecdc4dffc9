use indexmap::IndexSet;

use super::Document;

/// Names that select the `date` attribute of `<degree>` and `<title>`.
pub const SYNTHETIC_ATTRIBUTES: [&str; 2] = ["DegreeDate", "TitleDate"];

/// The attribute names a user can pick for extraction or filtering.
///
/// Built from the distinct child tag names found under any `<scientist>`
/// element (in order of first appearance), followed by the synthetic date
/// names. Duplicates are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCatalog {
    names: IndexSet<String>,
}

impl AttributeCatalog {
    pub fn from_document(document: &Document) -> Self {
        let mut names: IndexSet<String> = document
            .scientists()
            .flat_map(|s| s.elements())
            .map(|child| child.local_name().to_string())
            .collect();
        names.extend(SYNTHETIC_ATTRIBUTES.iter().map(|s| s.to_string()));
        Self { names }
    }

    /// Name at a selection index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
