#![allow(clippy::unwrap_used, clippy::expect_used)]

use rstest::rstest;
use scholar::Strategy;

use crate::helpers::fixtures::{FACULTY, TAGGED_FACULTY};
use crate::helpers::workspace::Workspace;

#[test]
fn test_session_starts_with_configured_strategy() {
    let mut ws = Workspace::with_input(FACULTY);
    ws.config.default_strategy = Strategy::Dom;
    let (session, _) = ws.session();
    assert_eq!(session.strategy(), Strategy::Dom);
}

#[rstest]
#[case("name")]
#[case("department")]
#[case("chair")]
#[case("degree")]
#[case("title")]
fn test_query_and_dom_agree_through_session(#[case] attribute: &str) {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();

    let query = session.extract(attribute).unwrap();
    session.select_strategy("DOM");
    let dom = session.extract(attribute).unwrap();

    assert!(!query.is_empty());
    assert_eq!(query, dom);
}

#[test]
fn test_sax_diverges_on_child_elements() {
    let ws = Workspace::with_input(TAGGED_FACULTY);
    let (mut session, _) = ws.session();

    let query = session.extract("department").unwrap();
    session.set_strategy(Strategy::Sax);
    let sax = session.extract("department").unwrap();

    assert_eq!(query, vec!["Physics", "Mathematics"]);
    assert_eq!(sax, vec!["Dept. of Physics"]);
}

#[test]
fn test_strategy_has_no_effect_on_search() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("department");

    let before = session.search("math").unwrap().clone();
    for strategy in Strategy::ALL {
        session.set_strategy(strategy);
        assert_eq!(session.search("math").unwrap(), &before);
    }
}

#[test]
fn test_switching_keeps_computed_results() {
    let ws = Workspace::with_input(FACULTY);
    let (mut session, _) = ws.session();
    session.select_attribute_named("name");
    session.search("ada");
    let extracted = session.extract("name").unwrap();

    session.set_strategy(Strategy::Sax);

    assert_eq!(session.results().unwrap().count(), 1);
    assert_eq!(extracted.len(), 4);
}
