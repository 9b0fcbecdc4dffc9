#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use scholar::{Document, NoticeLevel, Session, TransformError};

use crate::helpers::fixtures::FACULTY;
use crate::helpers::workspace::Workspace;

#[test]
fn test_transform_without_saved_set_is_info() {
    let ws = Workspace::with_input(FACULTY);
    let (session, seen) = ws.session();

    let notice = session.transform();

    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "No saved scientists to transform.");
    assert!(seen.borrow().is_empty());
    assert!(!ws.config.html_path.exists());
}

#[test]
fn test_transform_writes_html_from_saved_set() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, seen) = ws.session();
    session.select_attribute_named("chair");
    session.search("comp");
    session.save();

    let notice = session.transform();

    assert!(notice.is_success(), "{notice}");
    assert_eq!(
        notice.message,
        format!("HTML saved to {}", ws.config.html_path.display())
    );
    assert!(ws.read(&ws.config.html_path).starts_with("<html>"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let records = Document::parse(&seen[0]).unwrap().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Alan Turing"));
}

#[test]
fn test_transform_failure_writes_no_html() {
    let ws = Workspace::with_input(FACULTY);
    let failing = |_: &str, _: &Path| -> Result<String, TransformError> {
        Err(TransformError::Failed {
            status: "exit status: 6".into(),
            stderr: "failed to parse stylesheet".into(),
        })
    };
    let mut session = Session::new(ws.config.clone()).with_transformer(Box::new(failing));
    session.load().unwrap();
    session.select_attribute_named("name");
    session.search("");
    session.save();

    let notice = session.transform();

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to generate HTML content.");
    assert!(!ws.config.html_path.exists());
    assert!(ws.config.saved_path.exists());
}

#[test]
fn test_transform_with_missing_program_degrades_to_error() {
    let ws = Workspace::with_input(FACULTY);
    let mut config = ws.config.clone();
    config.transform_program = ws.dir.path().join("no-such-xslt-processor");
    let mut session = Session::new(config);
    session.load().unwrap();
    session.select_attribute_named("name");
    session.search("curie");
    session.save();

    let notice = session.transform();

    assert!(notice.is_error());
    assert!(!ws.config.html_path.exists());
}

#[cfg(unix)]
#[test]
fn test_saved_and_html_files_get_plain_file_mode() {
    use std::os::unix::fs::PermissionsExt;
    let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;

    let ws = Workspace::with_input(FACULTY);
    let plain = ws.dir.path().join("plain.txt");
    std::fs::write(&plain, "x").unwrap();
    let (mut session, _) = ws.session();
    session.select_attribute_named("name");
    session.search("");

    assert!(session.save().is_success());
    assert!(session.transform().is_success());

    assert_eq!(mode(&ws.config.saved_path), mode(&plain));
    assert_eq!(mode(&ws.config.html_path), mode(&plain));
}
