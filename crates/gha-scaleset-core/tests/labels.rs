#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use gha_scaleset_core::{CommonLabels, ListenerState, LABEL_NAMES};

#[test]
fn values_follow_schema_order() {
    let l = CommonLabels::new("myset", "ns1")
        .with_repository("org/repo")
        .with_organization("org")
        .with_enterprise("ent")
        .with_listener_type("standard");

    let pairs: Vec<(&str, &str)> = LABEL_NAMES.iter().copied().zip(l.values()).collect();
    assert_eq!(
        pairs,
        vec![
            ("name", "myset"),
            ("namespace", "ns1"),
            ("repository", "org/repo"),
            ("organization", "org"),
            ("enterprise", "ent"),
            ("listener_type", "standard"),
        ]
    );
}

#[test]
fn unset_fields_are_empty() {
    let l = CommonLabels::new("myset", "ns1");
    assert_eq!(l.values(), ["myset", "ns1", "", "", "", ""]);
}

#[test]
fn tuples_hash_by_every_field() {
    let base = CommonLabels::new("myset", "ns1");
    let mut seen = HashSet::new();
    seen.insert(base.clone());
    seen.insert(base.clone());
    seen.insert(base.clone().with_listener_type("large"));
    seen.insert(base.with_enterprise("ent"));
    assert_eq!(seen.len(), 3);
}

#[test]
fn display_is_namespaced_name() {
    let l = CommonLabels::new("myset", "ns1").with_repository("org/repo");
    assert_eq!(l.to_string(), "ns1/myset");
}

#[test]
fn listener_state_gauge_encoding() {
    assert_eq!(ListenerState::Up.as_gauge(), 1.0);
    assert_eq!(ListenerState::Down.as_gauge(), 0.0);
    assert_eq!(ListenerState::from_gauge(1.0), ListenerState::Up);
    assert_eq!(ListenerState::from_gauge(0.0), ListenerState::Down);
    assert_eq!(ListenerState::from_gauge(-3.0), ListenerState::Down);
}
