//! Node-arena DOM and the tree-walk strategy built on it.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::ExtractionStrategy;
use crate::document::{Document, DocumentError, SCIENTIST};

/// Index of a node in a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct DomNode {
    name: String,
    /// Child elements in parse order.
    children: Vec<NodeId>,
    /// First child element per tag name, for indexed lookup.
    child_index: IndexMap<String, NodeId>,
    /// Text runs interleaved with children: `(position among children, text)`.
    text: Vec<(usize, String)>,
}

/// A fully materialized element tree stored as a flat arena.
///
/// Nodes are allocated on their start tag, so arena order is document order.
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    nodes: Vec<DomNode>,
}

impl DomTree {
    /// Parse XML text into an arena.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let mut tree = Self::default();
        let mut open: Vec<NodeId> = Vec::new();
        let mut reader = Reader::from_str(xml);

        loop {
            let position = reader.buffer_position() as u64;
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let id = tree.add_node(e, open.last().copied(), position)?;
                    open.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    tree.add_node(e, open.last().copied(), position)?;
                }
                Ok(Event::End(_)) => {
                    if let Some(id) = open.pop() {
                        tree.close(id);
                    }
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(&parent) = open.last() {
                        let text = t
                            .unescape()
                            .map_err(|e| DocumentError::xml(format!("Text error: {e}"), position))?;
                        tree.push_text(parent, &text);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    if let Some(&parent) = open.last() {
                        tree.push_text(parent, &String::from_utf8_lossy(c));
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

        Ok(tree)
    }

    fn add_node(
        &mut self,
        e: &BytesStart<'_>,
        parent: Option<NodeId>,
        position: u64,
    ) -> Result<NodeId, DocumentError> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| DocumentError::xml(format!("Invalid tag name: {e}"), position))?
            .to_string();
        let id = NodeId(self.nodes.len());

        if let Some(parent) = parent {
            let node = &mut self.nodes[parent.0];
            node.children.push(id);
            node.child_index.entry(name.clone()).or_insert(id);
        }
        self.nodes.push(DomNode {
            name,
            children: Vec::new(),
            child_index: IndexMap::new(),
            text: Vec::new(),
        });
        Ok(id)
    }

    fn push_text(&mut self, id: NodeId, text: &str) {
        let node = &mut self.nodes[id.0];
        node.text.push((node.children.len(), text.to_string()));
    }

    /// Drop layout whitespace once a node turns out to have child elements.
    fn close(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        if !node.children.is_empty() {
            node.text.retain(|(_, text)| !text.trim().is_empty());
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// All nodes with this tag name, in document order.
    pub fn elements_by_tag_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.name == name)
            .map(|(i, _)| NodeId(i))
    }

    /// First child element with this tag name.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[id.0].child_index.get(name).copied()
    }

    /// Concatenated text of a node and its descendants.
    pub fn inner_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        let mut runs = node.text.iter().peekable();
        for (index, &child) in node.children.iter().enumerate() {
            while let Some((_, text)) = runs.next_if(|(at, _)| *at <= index) {
                out.push_str(text);
            }
            self.collect_text(child, out);
        }
        for (_, text) in runs {
            out.push_str(text);
        }
    }
}

/// Tree-walk extraction over a freshly parsed [`DomTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DomStrategy;

impl ExtractionStrategy for DomStrategy {
    fn name(&self) -> &'static str {
        "DOM"
    }

    fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError> {
        let tree = DomTree::parse(&document.to_xml_string()?)?;
        let values = tree
            .elements_by_tag_name(SCIENTIST)
            .filter_map(|node| tree.child(node, attribute))
            .map(|child| tree.inner_text(child))
            .collect();
        Ok(values)
    }
}
