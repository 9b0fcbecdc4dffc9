//! Temporary directory with configured file locations.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use scholar::{Config, Session, TransformError};
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    /// A workspace whose input file holds `xml`.
    pub fn with_input(xml: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            input_path: dir.path().join("scientists.xml"),
            saved_path: dir.path().join("SavedScientists.xml"),
            stylesheet_path: dir.path().join("scientists.xsl"),
            html_path: dir.path().join("transformed.html"),
            ..Config::default()
        };
        std::fs::write(&config.input_path, xml).expect("write input");
        Self { dir, config }
    }

    /// A loaded session whose transform records the XML it receives.
    pub fn session(&self) -> (Session, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let transformer = move |xml: &str, _: &Path| -> Result<String, TransformError> {
            sink.borrow_mut().push(xml.to_string());
            Ok(format!("<html><body>{} bytes</body></html>", xml.len()))
        };
        let mut session = Session::new(self.config.clone()).with_transformer(Box::new(transformer));
        session.load().expect("load");
        (session, seen)
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("read")
    }
}
