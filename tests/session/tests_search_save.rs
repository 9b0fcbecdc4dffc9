#![allow(clippy::unwrap_used, clippy::expect_used)]

use scholar::{Document, Notice};

use crate::helpers::fixtures::FACULTY;
use crate::helpers::workspace::Workspace;

fn names(records: &[scholar::Scientist]) -> Vec<&str> {
    records.iter().filter_map(|s| s.name.as_deref()).collect()
}

#[test]
fn test_empty_phrase_returns_whole_document() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("name");

    let result = session.search("  ").unwrap();

    assert_eq!(result.count(), 4);
    assert_eq!(result.message(), "Found 4 results");
}

#[test]
fn test_search_on_synthetic_date_attribute() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("DegreeDate");

    let result = session.search("1945").unwrap();

    assert_eq!(names(&result.records), vec!["Rosalind Franklin"]);
}

#[test]
fn test_saved_set_becomes_working_set() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();

    session.select_attribute_named("department");
    session.search("math");
    assert_eq!(session.save(), Notice::success("Results saved successfully."));

    // Narrowing now starts from the two saved mathematicians.
    session.select_attribute_named("name");
    let result = session.search("a").unwrap();
    assert_eq!(names(&result.records), vec!["Alan Turing", "Ada Lovelace"]);

    // A blank phrase shows the saved set, not the whole document.
    assert_eq!(session.search("").unwrap().count(), 2);
}

#[test]
fn test_save_file_round_trips() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("title");
    let found = session.search("r").unwrap().records.clone();

    session.save();

    let reloaded = Document::load(&ws.config.saved_path).unwrap().records();
    assert_eq!(reloaded, found);
    assert_eq!(session.saved(), found.as_slice());
}

#[test]
fn test_save_without_results_is_info() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();

    assert!(session.save().is_info());

    session.select_attribute_named("name");
    session.search("nobody");
    assert_eq!(session.save(), Notice::info("No results to save."));
    assert!(!ws.config.saved_path.exists());
}

#[test]
fn test_clear_resets_selection_results_and_saved() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("name");
    session.search("curie");
    session.save();

    session.clear();

    assert_eq!(session.selected_attribute(), None);
    assert!(session.results().is_none());
    assert!(session.saved().is_empty());
    assert!(session.search("x").is_none());

    session.select_attribute_named("name");
    assert_eq!(session.search("").unwrap().count(), 4);
}

#[test]
fn test_unknown_catalog_attribute_matches_nothing() {
    let ws = Workspace::with_input(
        "<scientists><scientist><name>A</name><lab>X</lab></scientist></scientists>",
    );
    let (mut session, _) = ws.session();
    assert!(session.select_attribute_named("lab"));

    assert!(session.search("x").unwrap().is_empty());
    assert_eq!(session.search("").unwrap().count(), 1);
}
