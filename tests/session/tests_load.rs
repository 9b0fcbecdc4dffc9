#![allow(clippy::unwrap_used, clippy::expect_used)]

use scholar::{Config, NoticeLevel, Session};

use crate::helpers::fixtures::{FACULTY, MALFORMED};
use crate::helpers::workspace::Workspace;

#[test]
fn test_load_builds_catalog() {
    let ws = Workspace::with_input(FACULTY);
    let (session, _) = ws.session();

    let names: Vec<_> = session.catalog().iter().collect();
    assert_eq!(
        names,
        vec!["name", "department", "chair", "degree", "title", "DegreeDate", "TitleDate"]
    );
    assert_eq!(session.document().map(|d| d.records().len()), Some(4));
}

#[test]
fn test_load_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input_path: dir.path().join("absent.xml"),
        ..Config::default()
    };
    let mut session = Session::new(config);

    let notice = session.load().unwrap_err();

    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Failed to load XML file:"));
    assert!(session.document().is_none());
}

#[test]
fn test_malformed_document_leaves_everything_empty() {
    let ws = Workspace::with_input(MALFORMED);
    let mut session = Session::new(ws.config.clone());

    assert!(session.load().is_err());
    assert!(session.catalog().is_empty());

    session.select_attribute(Some(0));
    assert!(session.search("").is_none());
    assert!(session.extract("name").unwrap().is_empty());
}

#[test]
fn test_bundled_sample_document_loads() {
    let config = Config {
        input_path: std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/scientists.xml"),
        ..Config::default()
    };
    let mut session = Session::new(config);

    session.load().unwrap();

    assert!(session.select_attribute_named("chair"));
    assert_eq!(session.search("ALG").unwrap().count(), 1);
}
