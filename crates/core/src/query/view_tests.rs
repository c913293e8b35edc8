// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::filter::DateOp;

#[test]
fn every_view_parses_from_its_name() {
    for view in View::ALL {
        assert_eq!(view.to_string().parse::<View>().unwrap(), view);
    }
    assert_eq!("TODAY".parse::<View>().unwrap(), View::Today);
}

#[test]
fn unknown_view_is_rejected() {
    let err = "later".parse::<View>().unwrap_err();
    assert!(err.to_string().contains("unknown view"));
}

#[test]
fn today_uses_today_order() {
    let query = View::Today.query();
    assert!(query.today_order);
    assert_eq!(query.order_by(), "TASK.todayIndex");
    assert_eq!(query.start_date.unwrap().op, DateOp::Past);
}

#[test]
fn trash_asks_for_trashed_items() {
    let clause = View::Trash.query().where_clause().unwrap();
    assert!(clause.contains("TASK.trashed = 1"));
    assert!(!clause.contains("TASK.trashed = 0"));
}

#[test]
fn inbox_is_open_inbox_todos() {
    let clause = View::Inbox.query().where_clause().unwrap();
    assert!(clause.contains("TASK.type = 0"));
    assert!(clause.contains("TASK.status = 0"));
    assert!(clause.contains("TASK.start = 0"));
}

#[test]
fn logbook_has_no_status_constraint() {
    let query = View::Logbook.query();
    assert!(query.status.is_none());
    let clause = query.where_clause().unwrap();
    assert!(clause.contains("TASK.stopDate IS NOT NULL"));
}

#[test]
fn today_accepts_anytime_or_scheduled_someday() {
    let query = View::Today.query();
    assert!(query.start.is_none());
    assert_eq!(
        query.start_any,
        vec![StartBucket::Anytime, StartBucket::Someday]
    );
    let clause = query.where_clause().unwrap();
    assert!(clause.contains("(TASK.start = 1 OR TASK.start = 2)"), "{clause}");
}
