//! Change-event driven recompilation.

use block_graph::{BlockKind, BlockSpec, GraphSpec, kind::TABLE};
use sql_codegen::session::{CompileSession, GraphEvent, GraphEventKind, Outcome};
use std::{cell::RefCell, rc::Rc};
use tracing_test::traced_test;

fn delete_from(table: &str) -> GraphSpec {
    GraphSpec::new().stack(vec![BlockSpec::new(BlockKind::Delete).field(TABLE, table)])
}

#[traced_test]
#[test]
fn test_last_event_wins() {
    let latest = Rc::new(RefCell::new(String::new()));
    let sink = latest.clone();

    let mut session = CompileSession::new();
    session.subscribe(move |snap| *sink.borrow_mut() = snap.sql.clone());

    for (i, table) in ["a", "b", "c"].iter().enumerate() {
        let kind = if i == 0 {
            GraphEventKind::BlockCreated
        } else {
            GraphEventKind::BlockChanged
        };
        session.handle(&GraphEvent::new(kind, delete_from(table)));
    }

    assert_eq!(*latest.borrow(), "DELETE FROM c;");
    assert_eq!(session.current().map(|s| s.revision), Some(3));
    assert!(logs_contain("Published SQL revision 3"));
}

#[traced_test]
#[test]
fn test_error_is_logged_and_output_retained() {
    let publishes = Rc::new(RefCell::new(0usize));
    let counter = publishes.clone();

    let mut session = CompileSession::new();
    session.subscribe(move |_| *counter.borrow_mut() += 1);

    session.handle(&GraphEvent::new(
        GraphEventKind::BlockCreated,
        delete_from("people"),
    ));
    let outcome = session.handle_json(
        GraphEventKind::BlockDeleted,
        r#"{ "stacks": [[ { "kind": "Delete", "statements": { "VALUES": [] } } ]] }"#,
    );

    assert!(matches!(outcome, Outcome::Retained(_)));
    assert_eq!(*publishes.borrow(), 1);
    assert_eq!(session.current().unwrap().sql, "DELETE FROM people;");
    assert!(logs_contain("Block generation error, keeping previous SQL"));
}

#[test]
fn test_deleting_everything_publishes_empty_script() {
    let mut session = CompileSession::new();
    session.handle(&GraphEvent::new(
        GraphEventKind::BlockCreated,
        delete_from("people"),
    ));

    let outcome = session.handle(&GraphEvent::new(
        GraphEventKind::BlockDeleted,
        GraphSpec::new(),
    ));

    assert!(matches!(outcome, Outcome::Published(ref s) if s.sql.is_empty()));
}
