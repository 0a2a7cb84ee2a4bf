//! Edge operation behavior through the full executor stack.

use std::cell::Cell;
use std::rc::Rc;
use weave_tests::prelude::*;

#[test]
fn test_ghost_alias_fails_edge_but_not_siblings() {
    // GIVEN
    let db = FakeDb::new();
    let schema = fake_schema(&db);
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_parent").arg("name", "Emilie"))
        .select(Selection::new("n2", "upsert_child").arg("name", "John"))
        .select(
            Selection::new("e1", "set_parent")
                .arg("parent", "n1")
                .arg("child", "ghost"),
        )
        .select(
            Selection::new("e2", "set_parent")
                .arg("parent", "n1")
                .arg("child", "n2"),
        );

    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert_eq!(
        result.error_for("e1").unwrap().message,
        "Node 2 not found in mutation results"
    );
    assert_eq!(result.get("e1"), Some(&Value::Null));
    // The unrelated edge after the failure still linked.
    assert_eq!(result.get("e2").unwrap().get("ok"), Some(&Value::Bool(true)));
    assert_eq!(db.child(1).unwrap().parent, Some(1));
}

#[test]
fn test_kind_mismatch_through_executor() {
    // GIVEN
    let db = FakeDb::new();
    let schema = fake_schema(&db);
    let executor = Executor::new(&schema);

    // Both endpoints resolve, but "n1" is a Parent where a Child is
    // declared.
    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_parent").arg("name", "Emilie"))
        .select(Selection::new("n2", "upsert_child").arg("name", "John"))
        .select(
            Selection::new("e1", "add_sibling")
                .arg("node1", "n1")
                .arg("node2", "n2"),
        );

    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert_eq!(
        result.error_for("e1").unwrap().message,
        "Parent is not instance of Child"
    );
    assert!(db.child(1).unwrap().siblings.is_empty());
}

#[test]
fn test_link_invoked_exactly_once_per_edge() {
    // GIVEN
    let db = FakeDb::new();
    let calls = Rc::new(Cell::new(0usize));
    let counter = calls.clone();
    let counted = SiblingEdge::new()
        .node1_kind(CHILD_KIND)
        .node2_kind(CHILD_KIND)
        .link(move |_n1, _n2| {
            counter.set(counter.get() + 1);
            Ok(())
        });
    let schema = fake_schema(&db).field("counted_sibling", Operation::edge(counted));
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_child").arg("name", "John"))
        .select(Selection::new("n2", "upsert_child").arg("name", "Julie"))
        .select(
            Selection::new("e1", "counted_sibling")
                .arg("node1", "n1")
                .arg("node2", "n2"),
        );

    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert!(result.is_ok(), "errors: {:?}", result.errors());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_symmetric_edge_appends_one_entry_per_side() {
    // GIVEN
    let db = FakeDb::new();
    let schema = fake_schema(&db);
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_child").arg("name", "John"))
        .select(Selection::new("n2", "upsert_child").arg("name", "Julie"))
        .select(
            Selection::new("e1", "add_sibling")
                .arg("node1", "n1")
                .arg("node2", "n2"),
        );

    // WHEN
    executor.execute(&batch);

    // THEN
    assert_eq!(db.child(1).unwrap().siblings, vec![2]);
    assert_eq!(db.child(2).unwrap().siblings, vec![1]);
}

#[test]
fn test_directed_edge_mutates_only_child() {
    // GIVEN
    let db = FakeDb::new();
    let schema = fake_schema(&db);
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_parent").arg("name", "Emilie"))
        .select(Selection::new("n2", "upsert_child").arg("name", "John"))
        .select(
            Selection::new("e1", "set_parent")
                .arg("parent", "n1")
                .arg("child", "n2"),
        );
    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert!(result.is_ok(), "errors: {:?}", result.errors());
    assert_eq!(db.child(1).unwrap().parent, Some(1));
    // Parent record exactly as upserted; the link touched only the child.
    let emilie = db.parent(1).unwrap();
    assert_eq!(emilie.pk, 1);
    assert_eq!(emilie.name, "Emilie");
}

#[test]
fn test_edge_without_link_function_fails() {
    // GIVEN
    let db = FakeDb::new();
    let unlinked = ParentChildEdge::new()
        .parent_kind(PARENT_KIND)
        .child_kind(CHILD_KIND);
    let schema = fake_schema(&db).field("unlinked", Operation::edge(unlinked));
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_parent").arg("name", "Emilie"))
        .select(Selection::new("n2", "upsert_child").arg("name", "John"))
        .select(
            Selection::new("e1", "unlinked")
                .arg("parent", "n1")
                .arg("child", "n2"),
        );

    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert_eq!(
        result.error_for("e1").unwrap().message,
        "link function must be supplied by the concrete edge type"
    );
    assert_eq!(db.child(1).unwrap().parent, None);
}

#[test]
fn test_missing_kind_declaration_through_executor() {
    // GIVEN
    let db = FakeDb::new();
    let unkinded = ParentChildEdge::new()
        .child_kind(CHILD_KIND)
        .link(|_parent, _child| Ok(()));
    let schema = fake_schema(&db).field("unkinded", Operation::edge(unkinded));
    let executor = Executor::new(&schema);

    let batch = Batch::new()
        .select(Selection::new("n1", "upsert_parent").arg("name", "Emilie"))
        .select(Selection::new("n2", "upsert_child").arg("name", "John"))
        .select(
            Selection::new("e1", "unkinded")
                .arg("parent", "n1")
                .arg("child", "n2"),
        );

    // WHEN
    let result = executor.execute(&batch);

    // THEN
    assert_eq!(
        result.error_for("e1").unwrap().message,
        "A type must be specified for Node 1"
    );
}
