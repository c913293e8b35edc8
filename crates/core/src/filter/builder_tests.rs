// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;

#[test]
fn empty_builder_matches_all() {
    assert_eq!(FilterBuilder::new().render(), "TRUE");
}

#[test]
fn only_empty_predicates_matches_all() {
    let mut filters = FilterBuilder::new();
    filters
        .add_static("")
        .add_equal("TASK.area", SqlValue::Absent)
        .add_truthy("PROJECT.trashed", None)
        .add_search("")
        .add(Predicate::Or(Vec::new()));
    assert_eq!(filters.render(), "TRUE");
    assert_eq!(filters.predicates().len(), 5);
}

#[test]
fn joins_with_newline_and() {
    let mut filters = FilterBuilder::new();
    filters
        .add_static("TASK.trashed = 0")
        .add_equal("TASK.uuid", "A");
    assert_eq!(filters.render(), "TASK.trashed = 0\nAND TASK.uuid = 'A'");
}

#[test]
fn empty_predicates_do_not_affect_output() {
    let p1 = Predicate::static_sql("TASK.type = 0");
    let p2 = Predicate::equal("TAG.title", "home");

    let mut with_gap = FilterBuilder::new();
    with_gap
        .add(p1.clone())
        .add(Predicate::equal("TASK.area", SqlValue::Absent))
        .add(p2.clone());

    let mut without_gap = FilterBuilder::new();
    without_gap.add(p1).add(p2);

    assert_eq!(with_gap.render(), without_gap.render());
}

#[test]
fn malformed_date_is_dropped() {
    let mut filters = FilterBuilder::new();
    filters
        .add_static("TASK.type = 0")
        .add_date_compare("TASK.startDate", DateOp::After, DateEncoding::Packed, "soon");
    assert_eq!(filters.render(), "TASK.type = 0");
}

#[test]
fn malformed_date_fails_validation() {
    let mut filters = FilterBuilder::new();
    filters.add_date_compare("TASK.startDate", DateOp::After, DateEncoding::Packed, "soon");
    assert!(matches!(filters.validate(), Err(Error::InvalidParameter(_))));
}

#[test]
fn render_is_repeatable() {
    let mut filters = FilterBuilder::new();
    filters
        .add_static("TASK.trashed = 0")
        .add_search("plan")
        .add_or([
            Predicate::equal("TASK.project", "P"),
            Predicate::equal("PROJECT_OF_HEADING.uuid", "P"),
        ]);
    let first = filters.render();
    let second = filters.render();
    assert_eq!(first, second);
    assert_eq!(first.matches("\nAND ").count(), 2);
}

#[test]
fn or_group_renders_in_place() {
    let mut filters = FilterBuilder::new();
    filters.add_or([
        Predicate::equal("TASK.project", "P"),
        Predicate::equal("PROJECT_OF_HEADING.uuid", "P"),
    ]);
    assert_eq!(
        filters.render(),
        "(TASK.project = 'P' OR PROJECT_OF_HEADING.uuid = 'P')"
    );
}

#[test]
fn preserves_insertion_order() {
    let mut filters = FilterBuilder::new();
    filters.add_static("b = 2").add_static("a = 1");
    assert_eq!(filters.render(), "b = 2\nAND a = 1");
}
