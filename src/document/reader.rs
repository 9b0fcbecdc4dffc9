//! XML text to element tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{DocumentError, XmlElement, XmlNode};

/// Builds an [`XmlElement`] tree from XML text.
pub(crate) struct TreeReader {
    /// Open elements, innermost last.
    stack: Vec<XmlElement>,
    root: Option<XmlElement>,
}

impl TreeReader {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    pub fn read(mut self, input: &str) -> Result<XmlElement, DocumentError> {
        let mut reader = Reader::from_str(input);

        loop {
            let position = reader.buffer_position() as u64;
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let element = start_element(e, position)?;
                    self.open(element, position)?;
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    let element = start_element(e, position)?;
                    self.open(element, position)?;
                    self.close();
                }
                Ok(Event::End(_)) => {
                    self.close();
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| DocumentError::xml(format!("Text error: {e}"), position))?;
                    self.push_text(&text, position)?;
                }
                Ok(Event::CData(ref c)) => {
                    let text = String::from_utf8_lossy(c);
                    self.push_text(&text, position)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(DocumentError::xml(
                        format!("XML parse error: {e}"),
                        reader.error_position() as u64,
                    ));
                }
                // Declarations, comments, processing instructions and doctype carry no data.
                _ => {}
            }
        }

        if let Some(open) = self.stack.last() {
            return Err(DocumentError::invalid_element(format!(
                "unclosed element <{}> at end of input",
                open.name
            )));
        }
        self.root
            .ok_or_else(|| DocumentError::missing_element("root"))
    }

    fn open(&mut self, element: XmlElement, position: u64) -> Result<(), DocumentError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(DocumentError::xml(
                format!("second root element <{}>", element.name),
                position,
            ));
        }
        self.stack.push(element);
        Ok(())
    }

    fn close(&mut self) {
        // Mismatched end tags are rejected by the reader before reaching here.
        let Some(mut done) = self.stack.pop() else {
            return;
        };
        // Whitespace next to child elements is layout; in a leaf it is content.
        if done.children.iter().any(|c| matches!(c, XmlNode::Element(_))) {
            done.children
                .retain(|c| !matches!(c, XmlNode::Text(t) if t.trim().is_empty()));
        }
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(XmlNode::Element(done)),
            None => self.root = Some(done),
        }
    }

    fn push_text(&mut self, text: &str, position: u64) -> Result<(), DocumentError> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlNode::Text(text.to_string()));
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(DocumentError::xml("text outside the root element", position)),
        }
    }
}

fn start_element(e: &BytesStart<'_>, position: u64) -> Result<XmlElement, DocumentError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| DocumentError::xml(format!("Invalid tag name: {e}"), position))?
        .to_string();
    let mut element = XmlElement::new(name);

    for attr_result in e.attributes() {
        let attr = attr_result
            .map_err(|e| DocumentError::xml(format!("Attribute error: {e}"), position))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| DocumentError::xml(format!("Attribute key error: {e}"), position))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| DocumentError::xml(format!("Attribute value error: {e}"), position))?
            .into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}
