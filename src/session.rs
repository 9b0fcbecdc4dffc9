//! Session state behind the presentation shell.
//!
//! A [`Session`] owns everything the shell mutates between triggers: the
//! loaded document and its attribute catalog, the attribute selection, the
//! displayed results, the saved set, and the strategy registry. It is used
//! from a single thread; each method is one complete trigger.

use crate::config::Config;
use crate::document::{AttributeCatalog, Document};
use crate::extract::{Strategy, StrategyRegistry};
use crate::model::Scientist;
use crate::notice::{Confirmation, Notice};
use crate::pipeline::{self, TransformPaths, Transformer};
use crate::search::{self, SearchResult};

pub struct Session {
    config: Config,
    transformer: Box<dyn Transformer>,
    document: Option<Document>,
    catalog: AttributeCatalog,
    /// Index into `catalog`; `None` means no attribute chosen.
    selected: Option<usize>,
    results: Option<SearchResult>,
    saved: Vec<Scientist>,
    strategies: StrategyRegistry,
}

impl Session {
    /// A session with no document loaded, using the configured transform program.
    pub fn new(config: Config) -> Self {
        let transformer = Box::new(config.transformer());
        let strategies = StrategyRegistry::with_current(config.default_strategy);
        Self {
            config,
            transformer,
            document: None,
            catalog: AttributeCatalog::default(),
            selected: None,
            results: None,
            saved: Vec::new(),
            strategies,
        }
    }

    /// Replace the transform capability.
    pub fn with_transformer(mut self, transformer: Box<dyn Transformer>) -> Self {
        self.transformer = transformer;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Load the configured input document.
    ///
    /// On failure the document is cleared and the error notice is returned.
    pub fn load(&mut self) -> Result<(), Notice> {
        let path = self.config.input_path.clone();
        match Document::load(&path) {
            Ok(document) => {
                self.set_document(document);
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "error loading XML file");
                self.document = None;
                self.catalog = AttributeCatalog::default();
                self.selected = None;
                Err(Notice::error(format!("Failed to load XML file: {e}")))
            }
        }
    }

    /// Install an already-parsed document and recompute the catalog.
    pub fn set_document(&mut self, document: Document) {
        self.catalog = document.catalog();
        self.selected = None;
        self.document = Some(document);
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    // ── Attribute selection ──────────────────────────────────────────

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    /// Select a catalog entry by index; out-of-range or `None` clears the selection.
    pub fn select_attribute(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.catalog.len());
    }

    /// Select a catalog entry by exact name. Returns whether it was found.
    pub fn select_attribute_named(&mut self, name: &str) -> bool {
        let index = self.catalog.iter().position(|n| n == name);
        self.select_attribute(index);
        index.is_some()
    }

    pub fn selected_attribute(&self) -> Option<&str> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Run a search on the selected attribute.
    ///
    /// Without a loaded document or a selected attribute this does nothing
    /// and returns `None`. Otherwise the results replace the displayed ones.
    pub fn search(&mut self, phrase: &str) -> Option<&SearchResult> {
        let document = self.document.as_ref()?;
        let attribute = self.selected.and_then(|i| self.catalog.get(i))?;

        let records = search::working_set(&self.saved, Some(document));
        let result = search::search(records, attribute, phrase);
        tracing::debug!(attribute, phrase, count = result.count(), "search complete");
        self.results = Some(result);
        self.results.as_ref()
    }

    /// Currently displayed results, if any search has run since the last clear.
    pub fn results(&self) -> Option<&SearchResult> {
        self.results.as_ref()
    }

    /// Details notice for a displayed record.
    pub fn details(&self, index: usize) -> Option<Notice> {
        let scientist = self.results.as_ref()?.records.get(index)?;
        Some(Notice::info(scientist.details()).titled("Scientist Details"))
    }

    // ── Saved set & transform ────────────────────────────────────────

    pub fn saved(&self) -> &[Scientist] {
        &self.saved
    }

    /// Persist the displayed results as the saved set.
    pub fn save(&mut self) -> Notice {
        let results = self
            .results
            .as_ref()
            .map(|r| r.records.as_slice())
            .unwrap_or_default();
        pipeline::save(results, &mut self.saved, &self.config.saved_path)
    }

    /// Transform the saved set to HTML.
    pub fn transform(&self) -> Notice {
        let paths = TransformPaths {
            saved_xml: &self.config.saved_path,
            stylesheet: &self.config.stylesheet_path,
            html: &self.config.html_path,
        };
        pipeline::transform(&self.saved, paths, self.transformer.as_ref())
    }

    /// Reset selection, displayed results and the saved set.
    pub fn clear(&mut self) {
        self.selected = None;
        self.results = None;
        self.saved.clear();
        tracing::debug!("session cleared");
    }

    // ── Strategies ───────────────────────────────────────────────────

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    pub fn strategy(&self) -> Strategy {
        self.strategies.current()
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategies.set_current(strategy);
    }

    /// Select a strategy by display name; unknown names leave it unchanged.
    pub fn select_strategy(&mut self, name: &str) -> Option<Strategy> {
        self.strategies.select(name)
    }

    /// Run the current strategy for `attribute`. Empty without a document.
    pub fn extract(&self, attribute: &str) -> Result<Vec<String>, Notice> {
        let Some(document) = self.document.as_ref() else {
            tracing::warn!(attribute, "extract requested with no document loaded");
            return Ok(Vec::new());
        };
        self.strategies.extract(document, attribute).map_err(|e| {
            tracing::error!(strategy = %self.strategy(), attribute, error = %e, "extraction failed");
            Notice::error(format!("An error occurred: {e}"))
        })
    }

    // ── Exit ─────────────────────────────────────────────────────────

    pub fn exit_prompt(&self) -> Confirmation {
        Confirmation::new("Exit Programme", "Do you really want to exit the programme?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<scientists>\
        <scientist><name>Marie Curie</name><title date=\"1906\">Professor</title></scientist>\
        <scientist><name>Alan Turing</name><title date=\"1938\">Lecturer</title></scientist>\
        </scientists>";

    fn session() -> Session {
        let mut session = Session::new(Config::default());
        session.set_document(Document::parse(DOC).unwrap());
        session
    }

    #[test]
    fn test_search_requires_selection() {
        let mut s = session();
        assert!(s.search("x").is_none());
        assert!(s.results().is_none());
    }

    #[test]
    fn test_search_requires_document() {
        let mut s = Session::new(Config::default());
        s.select_attribute(Some(0));
        assert!(s.search("").is_none());
    }

    #[test]
    fn test_select_attribute_bounds() {
        let mut s = session();
        s.select_attribute(Some(99));
        assert_eq!(s.selected_attribute(), None);
        assert!(s.select_attribute_named("title"));
        assert_eq!(s.selected_attribute(), Some("title"));
        assert!(!s.select_attribute_named("Title"));
        assert_eq!(s.selected_attribute(), None);
    }

    #[test]
    fn test_search_and_details() {
        let mut s = session();
        s.select_attribute_named("title");
        let result = s.search("prof").unwrap();
        assert_eq!(result.count(), 1);

        let details = s.details(0).unwrap();
        assert_eq!(details.title, "Scientist Details");
        assert!(details.message.starts_with("Name: Marie Curie\n"));
        assert!(s.details(1).is_none());
    }

    #[test]
    fn test_set_document_resets_selection() {
        let mut s = session();
        s.select_attribute_named("name");
        s.set_document(Document::parse("<r/>").unwrap());
        assert_eq!(s.selected_attribute(), None);
        assert_eq!(s.catalog().len(), 2);
    }

    #[test]
    fn test_extract_without_document_is_empty() {
        let s = Session::new(Config::default());
        assert_eq!(s.extract("name").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_exit_prompt() {
        let prompt = session().exit_prompt();
        assert_eq!(prompt.title, "Exit Programme");
        assert_eq!(prompt.answer("yes"), Some(true));
    }
}
