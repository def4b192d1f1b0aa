// tests/session_reconcile.rs
//
// Reconciliation invariants on InventorySession, no UI involved.

use std::collections::HashSet;

use stocktake::machines::Machine;
use stocktake::session::InventorySession;

fn machine(id: &str, status: &str) -> Machine {
    Machine {
        id: id.into(),
        name: format!("Machine {id}"),
        category: "Tools".into(),
        status: status.into(),
    }
}

fn session(specs: &[(&str, &str)]) -> InventorySession {
    let mut s = InventorySession::new();
    s.reset(specs.iter().map(|(id, st)| machine(id, st)).collect());
    s
}

/// missing() and the present marks partition the roster at all times.
fn assert_partition(s: &InventorySession) {
    let missing: HashSet<&str> = s.missing().iter().map(|m| m.id.as_str()).collect();
    let all: HashSet<&str> = s.roster().iter().map(|m| m.id.as_str()).collect();
    for id in &all {
        assert_ne!(missing.contains(id), s.is_present(id), "id {id}");
    }
    assert!(missing.is_subset(&all));
}

#[test]
fn toggle_is_self_inverse() {
    let mut s = session(&[("1", "Active"), ("2", "Idle")]);

    assert!(s.toggle("1"));
    assert!(s.is_present("1"));
    assert_partition(&s);

    assert!(!s.toggle("1"));
    assert!(!s.is_present("1"));
    assert_eq!(s.present_count(), 0);
    assert_partition(&s);
}

#[test]
fn filter_by_id_substring_preserves_order() {
    let s = session(&[("1", "A"), ("91", "A"), ("199", "A"), ("2", "A")]);

    let all: Vec<&str> = s.filter_by_id("").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(all, vec!["1", "91", "199", "2"]);

    let hits: Vec<&str> = s.filter_by_id("99").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(hits, vec!["91", "199"]);

    // Case-sensitive on purpose.
    let s = session(&[("A1", "A"), ("a1", "A")]);
    let hits: Vec<&str> = s.filter_by_id("A").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(hits, vec!["A1"]);
}

#[test]
fn mark_by_statuses_is_additive_and_idempotent() {
    let mut s = session(&[
        ("1", "Active"),
        ("2", "Active"),
        ("3", "Idle"),
        ("4", "Active"),
        ("5", "Idle"),
    ]);

    let added = s.mark_present_by_statuses(&["Active".into()]);
    assert_eq!(added, 3);
    for id in ["1", "2", "4"] {
        assert!(s.is_present(id));
    }
    for id in ["3", "5"] {
        assert!(!s.is_present(id));
    }
    assert_partition(&s);

    // Second run adds nothing and removes nothing.
    let added = s.mark_present_by_statuses(&["Active".into()]);
    assert_eq!(added, 0);
    assert_eq!(s.present_count(), 3);

    // A machine marked by hand counts as already covered.
    s.mark_present("3");
    let added = s.mark_present_by_statuses(&["Idle".into()]);
    assert_eq!(added, 1);
    assert_eq!(s.missing().len(), 0);
}

#[test]
fn missing_keeps_roster_order() {
    let mut s = session(&[("3", "A"), ("1", "A"), ("2", "A")]);
    s.toggle("1");
    let ids: Vec<&str> = s.missing().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn reset_replaces_roster_and_clears_marks() {
    let mut s = session(&[("1", "Active")]);
    s.toggle("1");
    assert_eq!(s.present_count(), 1);

    s.reset(vec![machine("9", "Idle")]);
    assert_eq!(s.present_count(), 0);
    assert!(!s.is_present("1"));
    assert_eq!(s.roster().len(), 1);
    assert_eq!(s.missing().len(), 1);
    assert_partition(&s);
}
