//! Attribute extraction strategies.
//!
//! Three interchangeable ways to pull the values of one attribute out of
//! every `<scientist>` element of a [`Document`]:
//!
//! - **Query** - iterator combinators over the loaded element tree: keep
//!   scientists that have a child element named like the attribute, project
//!   its text.
//! - **DOM** - re-parse into an indexed node arena, walk the nodes tagged
//!   `scientist`, and look up the named child through the arena index.
//! - **SAX** - scan the serialized document as a token stream and, on each
//!   `scientist` start tag, read an XML *attribute* of that name.
//!
//! ## Known inconsistency
//!
//! Query and DOM read child *elements*; SAX reads XML *attributes* on the
//! `scientist` tag itself. For an ordinary field such as `department` the
//! first two agree while SAX returns nothing, unless the document also
//! carries `<scientist department="...">`. This is kept as is.
//!
//! All strategies match the attribute name case-sensitively and preserve
//! document order. A scientist without the attribute is skipped.
//!
//! ```text
//! ┌──────────────────────┐
//! │   StrategyRegistry   │  "Query" | "SAX" | "DOM"
//! └──────────┬───────────┘
//!            │ current()
//!            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                ExtractionStrategy trait                  │
//! │  - extract(&Document, &str) -> Result<Vec<String>>       │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod dom;
mod query;
mod sax;

use std::fmt;

use indexmap::IndexMap;

use crate::document::{Document, DocumentError};

pub use dom::{DomStrategy, DomTree, NodeId};
pub use query::QueryStrategy;
pub use sax::SaxStrategy;

/// An algorithm producing the values of one attribute across all scientists.
pub trait ExtractionStrategy: Send + Sync {
    /// Human-readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Values of `attribute` for each `<scientist>` that has one, in document order.
    fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError>;
}

/// The closed set of available strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    Query,
    Sax,
    Dom,
}

impl Strategy {
    /// Registry order.
    pub const ALL: [Strategy; 3] = [Strategy::Query, Strategy::Sax, Strategy::Dom];

    fn implementation(self) -> &'static dyn ExtractionStrategy {
        match self {
            Strategy::Query => &QueryStrategy,
            Strategy::Sax => &SaxStrategy,
            Strategy::Dom => &DomStrategy,
        }
    }

    /// Look up a strategy by display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl ExtractionStrategy for Strategy {
    fn name(&self) -> &'static str {
        self.implementation().name()
    }

    fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError> {
        let values = self.implementation().extract(document, attribute)?;
        tracing::debug!(
            strategy = self.name(),
            attribute,
            count = values.len(),
            "extracted attribute values"
        );
        Ok(values)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named strategies with exactly one current selection.
///
/// Switching only reassigns the current strategy; values already extracted
/// are owned by the caller and unaffected.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: IndexMap<&'static str, Strategy>,
    current: Strategy,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::with_current(Strategy::default())
    }

    pub fn with_current(current: Strategy) -> Self {
        let strategies = Strategy::ALL.into_iter().map(|s| (s.name(), s)).collect();
        Self { strategies, current }
    }

    /// Display names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.keys().copied()
    }

    pub fn get(&self, name: &str) -> Option<Strategy> {
        self.strategies.get(name).copied()
    }

    pub fn current(&self) -> Strategy {
        self.current
    }

    pub fn set_current(&mut self, strategy: Strategy) {
        tracing::debug!(from = %self.current, to = %strategy, "switched extraction strategy");
        self.current = strategy;
    }

    /// Select by display name. Returns the new current strategy, or `None`
    /// (leaving the selection unchanged) for an unknown name.
    pub fn select(&mut self, name: &str) -> Option<Strategy> {
        let strategy = self.get(name).or_else(|| Strategy::from_name(name))?;
        self.set_current(strategy);
        Some(strategy)
    }

    /// Run the current strategy.
    pub fn extract(&self, document: &Document, attribute: &str) -> Result<Vec<String>, DocumentError> {
        self.current.extract(document, attribute)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
