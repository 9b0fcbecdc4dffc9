//! # scholar
//!
//! Scientist registry over XML: pluggable attribute extraction, record
//! search, and saved-set export to XML and HTML.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → State owned by the shell: document, selection, results, saved set
//!   ↓
//! pipeline  → Save to XML, XML + style-sheet → HTML via a Transformer
//! search    → Working set, case-insensitive single-field filter
//! extract   → Query / DOM / SAX extraction strategies and their registry
//!   ↓
//! document  → quick-xml element tree, attribute catalog, writer
//!   ↓
//! model     → Scientist record, searchable fields
//! ```

// ============================================================================
// MODULES (dependency order: model → document → extract/search → pipeline → session)
// ============================================================================

/// Record model: Scientist and its fields
pub mod model;

/// Documents: load, element tree, catalog, serialization
pub mod document;

/// Extraction strategies and the strategy registry
pub mod extract;

/// Working set and record filtering
pub mod search;

/// Saved-set persistence and the HTML transform
pub mod pipeline;

/// Notifications and confirmations for the shell
pub mod notice;

/// File locations and startup options
pub mod config;

/// Single-threaded session state
pub mod session;

pub use config::Config;
pub use document::{AttributeCatalog, Document, DocumentError};
pub use extract::{ExtractionStrategy, Strategy, StrategyRegistry};
pub use model::{Field, Scientist};
pub use notice::{Confirmation, Notice, NoticeLevel};
pub use pipeline::{TransformError, Transformer, XsltProc};
pub use search::SearchResult;
pub use session::Session;
