use quick_xml::Reader;
use quick_xml::events::Event;

use super::ExtractionStrategy;
use crate::document::{Document, DocumentError, SCIENTIST};

/// Streaming extraction: one pass over the token stream, no tree.
///
/// Reads the XML attribute named `attribute` on each `<scientist>` start tag.
/// Child elements are never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaxStrategy;

impl ExtractionStrategy for SaxStrategy {
    fn name(&self) -> &'static str {
        "SAX"
    }

    fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError> {
        let xml = document.to_xml_string()?;
        let mut reader = Reader::from_str(&xml);
        let mut values = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.name().as_ref() == SCIENTIST.as_bytes() =>
                {
                    let position = reader.buffer_position() as u64;
                    let found = e
                        .try_get_attribute(attribute)
                        .map_err(|e| DocumentError::xml(format!("Attribute error: {e}"), position))?;
                    if let Some(attr) = found {
                        let value = attr.unescape_value().map_err(|e| {
                            DocumentError::xml(format!("Attribute value error: {e}"), position)
                        })?;
                        values.push(value.into_owned());
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(DocumentError::xml(
                        format!("XML parse error: {e}"),
                        reader.error_position() as u64,
                    ));
                }
                _ => {}
            }
        }

        Ok(values)
    }
}
