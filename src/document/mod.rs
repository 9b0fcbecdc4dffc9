//! Scientist documents: loading, the element tree, and serialization.
//!
//! A document is an XML file whose root wraps repeated `<scientist>` elements:
//!
//! ```xml
//! <scientists>
//!   <scientist>
//!     <name>Marie Curie</name>
//!     <department>Physics</department>
//!     <chair>Radioactivity</chair>
//!     <degree date="1903">PhD</degree>
//!     <title date="1906">Professor</title>
//!   </scientist>
//! </scientists>
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Load:  file → TreeReader → Document → records() → Vec<Scientist>
//! Save:  Vec<Scientist> → Document::from_records → write_document → file
//! ```

mod catalog;
mod element;
mod error;
mod reader;
pub mod writer;

use std::path::Path;

use crate::model::Scientist;

pub use catalog::{AttributeCatalog, SYNTHETIC_ATTRIBUTES};
pub use element::{Descendants, XmlElement, XmlNode};
pub use error::DocumentError;

/// Tag name of a record element.
pub const SCIENTIST: &str = "scientist";
/// Tag name of the root collection element written on save.
pub const SCIENTISTS: &str = "scientists";

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: XmlElement,
}

impl Document {
    /// Parse a document from XML text.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let root = reader::TreeReader::new().read(xml)?;
        Ok(Self { root })
    }

    /// Load and parse a document from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let xml = std::fs::read_to_string(path)?;
        let document = Self::parse(&xml)?;
        tracing::debug!(
            path = %path.display(),
            scientists = document.scientists().count(),
            "loaded document"
        );
        Ok(document)
    }

    /// Build the save-file shape for a record list.
    ///
    /// Absent fields are omitted rather than written empty, so reading the
    /// result back yields the same records. `<degree>`/`<title>` are written
    /// when either their text or their date is present.
    pub fn from_records(records: &[Scientist]) -> Self {
        let root = records
            .iter()
            .fold(XmlElement::new(SCIENTISTS), |root, s| root.with_child(record_element(s)));
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Every element with this tag name, including the root, in document order.
    pub fn descendants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.root.descendants().filter(move |e| e.name == name)
    }

    /// Every `<scientist>` element in document order.
    pub fn scientists(&self) -> impl Iterator<Item = &XmlElement> {
        self.descendants(SCIENTIST)
    }

    /// Flatten every `<scientist>` element into a record.
    ///
    /// Missing child elements leave the field `None`; this never fails.
    pub fn records(&self) -> Vec<Scientist> {
        self.scientists().map(record_from_element).collect()
    }

    /// Compute the attribute catalog for this document.
    pub fn catalog(&self) -> AttributeCatalog {
        AttributeCatalog::from_document(self)
    }

    /// Serialize back to XML text.
    pub fn to_xml_string(&self) -> Result<String, DocumentError> {
        writer::write_document(&self.root)
    }

    /// Serialize and atomically write to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let xml = self.to_xml_string()?;
        writer::write_file_atomic(path, &xml)
    }
}

fn record_from_element(e: &XmlElement) -> Scientist {
    let text = |name: &str| e.element(name).map(XmlElement::text);
    let date = |name: &str| {
        e.element(name)
            .and_then(|child| child.attribute("date"))
            .map(str::to_string)
    };
    Scientist {
        name: text("name"),
        department: text("department"),
        chair: text("chair"),
        degree: text("degree"),
        degree_date: date("degree"),
        title: text("title"),
        title_date: date("title"),
    }
}

fn record_element(s: &Scientist) -> XmlElement {
    let mut e = XmlElement::new(SCIENTIST);
    for (name, value) in [
        ("name", &s.name),
        ("department", &s.department),
        ("chair", &s.chair),
    ] {
        if let Some(value) = value {
            e = e.with_child(text_element(name, value));
        }
    }
    for (name, value, date) in [
        ("degree", &s.degree, &s.degree_date),
        ("title", &s.title, &s.title_date),
    ] {
        if value.is_none() && date.is_none() {
            continue;
        }
        let mut child = text_element(name, value.as_deref().unwrap_or_default());
        if let Some(date) = date {
            child = child.with_attribute("date", date.as_str());
        }
        e = e.with_child(child);
    }
    e
}

fn text_element(name: &str, value: &str) -> XmlElement {
    let e = XmlElement::new(name);
    if value.is_empty() { e } else { e.with_text(value) }
}
