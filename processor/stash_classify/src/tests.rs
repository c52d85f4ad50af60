//! Whole-pipeline tests over realistic batches.

use pretty_assertions::assert_eq;
use stash_diagnostic::DiagnosticQueue;
use stash_types::{DeclId, Modifiers, Span, TypeId, TypeSystem, TypeTable};

use super::*;

/// A small screen hierarchy: `BaseActivity` and two subclasses, one of
/// them with a nested controller class, plus a helper that fails policy.
struct Fixture {
    table: TypeTable,
    base: TypeId,
    detail: TypeId,
    nested: TypeId,
    decls: Vec<DeclId>,
}

fn fixture() -> Fixture {
    let mut table = TypeTable::new();
    let int = table.declare_type("lang", "Int", None);
    let string = table.declare_type("lang", "String", None);

    let framework = table.declare_type("framework", "Activity", None);
    let base = table.declare_type("com.app", "BaseActivity", Some(framework));
    let list = table.declare_type("com.app", "ListActivity", Some(base));
    let detail = table.declare_type("com.app", "DetailActivity", Some(base));
    let nested = table.declare_type("com.app", "DetailActivity.Controller", None);

    let mut decls = Vec::new();
    let mut span = 0u32;
    let mut field = |table: &mut TypeTable, owner, name, ty, modifiers| {
        span += 10;
        table.declare_field(owner, name, ty, modifiers, Span::new(span, span + 5))
    };

    decls.push(field(&mut table, base, "session", string, Modifiers::PRIVATE));
    decls.push(field(&mut table, list, "scroll", int, Modifiers::FINAL));
    // Fails the policy: public and nothing else.
    decls.push(field(&mut table, list, "cache", int, Modifiers::PUBLIC));
    decls.push(field(&mut table, detail, "item", string, Modifiers::PRIVATE));
    decls.push(field(
        &mut table,
        nested,
        "offset",
        int,
        Modifiers::STATIC | Modifiers::FINAL,
    ));

    Fixture {
        table,
        base,
        detail,
        nested,
        decls,
    }
}

#[test]
fn rejected_members_surface_once_and_survivors_group() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let map = classify(&f.table, &mut queue, &f.decls);

    // 5 declarations, 1 policy failure: 1 diagnostic, 4 attributes.
    assert_eq!(queue.error_count(), 1);
    let total: usize = map.iter().map(|g| g.attributes.len()).sum();
    assert_eq!(total, 4);
    assert_eq!(map.len(), 4);
}

#[test]
fn every_attribute_lands_in_its_declaring_group() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let map = classify(&f.table, &mut queue, &f.decls);

    for group in &map {
        for attribute in &group.attributes {
            let erased = f.table.erase(attribute.declaring_type);
            assert!(f
                .table
                .types_equal(f.table.erase(group.class.ty), erased));
        }
    }
}

#[test]
fn parent_links_stop_at_the_nearest_annotated_ancestor() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let map = classify(&f.table, &mut queue, &f.decls);

    let detail = match map.get(&f.table, f.detail) {
        Some(g) => g,
        None => panic!("missing DetailActivity group"),
    };
    assert_eq!(
        detail.class.parent_qualified_name.as_deref(),
        Some("com.app.BaseActivity")
    );

    // BaseActivity's ancestors own no annotated members.
    let base = match map.get(&f.table, f.base) {
        Some(g) => g,
        None => panic!("missing BaseActivity group"),
    };
    assert_eq!(base.class.parent_qualified_name, None);
}

#[test]
fn nested_classes_get_flattened_binary_names() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let map = classify(&f.table, &mut queue, &f.decls);

    let nested = match map.get(&f.table, f.nested) {
        Some(g) => g,
        None => panic!("missing nested group"),
    };
    assert_eq!(nested.class.package_name, "com.app");
    assert_eq!(nested.class.binary_name, "DetailActivity$Controller");
    assert_eq!(nested.class.relative_name, "DetailActivity.Controller");
}

#[test]
fn classification_is_idempotent() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let first = classify(&f.table, &mut queue, &f.decls);
    let second = classify(&f.table, &mut queue, &f.decls);
    assert_eq!(first, second);
}

#[test]
fn empty_batch_yields_an_empty_map() {
    let f = fixture();
    let mut queue = DiagnosticQueue::new();
    let map = classify(&f.table, &mut queue, &[]);
    assert!(map.is_empty());
    assert!(queue.is_empty());
}

#[test]
fn all_rejected_batch_yields_an_empty_map() {
    let mut table = TypeTable::new();
    let int = table.declare_type("lang", "Int", None);
    let owner = table.declare_type("p", "Widget", None);
    let decls = [
        table.declare_field(owner, "a", int, Modifiers::PUBLIC, Span::new(0, 5)),
        table.declare_field(owner, "b", int, Modifiers::empty(), Span::new(10, 15)),
    ];

    let mut queue = DiagnosticQueue::new();
    let map = classify(&table, &mut queue, &decls);
    assert!(map.is_empty());
    assert_eq!(queue.error_count(), 2);
}
