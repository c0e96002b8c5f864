//! Prefix matching and reusable decision tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mediaguard_core::policy::checks::{Allow, Authenticated, Deny, HasRole, OwnerSegment};
use mediaguard_core::AccessPolicy;

mod support;
use support::TestUser;

#[test]
fn prefix_is_anchored_at_start() {
    let p = AccessPolicy::<TestUser>::with_decision(["images/"], Allow);

    assert!(p.matches("images/a.png"));
    assert!(p.matches("images/"));
    assert!(!p.matches("public/images/a.png"));
    assert!(!p.matches("images"));
    assert!(!p.matches(""));
}

#[test]
fn prefix_is_case_sensitive_and_literal() {
    let p = AccessPolicy::<TestUser>::with_decision(["Images/", "docs/*"], Allow);

    assert!(!p.matches("images/a.png"));
    assert!(p.matches("Images/a.png"));
    assert!(!p.matches("docs/readme.md"));
    assert!(p.matches("docs/*/readme.md"));
    assert!(!p.matches("./Images/a.png"));
}

#[test]
fn any_prefix_matches() {
    let p = AccessPolicy::<TestUser>::with_decision(["images/", "profiles/"], Deny);

    assert!(p.matches("images/x"));
    assert!(p.matches("profiles/jane/x"));
    assert!(!p.matches("videos/x"));
    assert_eq!(p.prefixes(), ["images/", "profiles/"]);
}

#[test]
fn empty_prefix_list_matches_nothing() {
    let p = AccessPolicy::<TestUser>::with_decision(Vec::<String>::new(), Allow);

    assert!(!p.matches("images/a.png"));
    assert!(!p.matches(""));
}

#[test]
fn closure_sees_context_and_path() {
    let p = AccessPolicy::new(["reports/"], |u: &TestUser, path: &str| {
        u.authenticated && path.ends_with(".pdf")
    });

    assert!(p.is_allowed(&TestUser::named("jane"), "reports/q1.pdf").unwrap());
    assert!(!p.is_allowed(&TestUser::named("jane"), "reports/q1.xlsx").unwrap());
    assert!(!p.is_allowed(&TestUser::anonymous(), "reports/q1.pdf").unwrap());
}

#[test]
fn authenticated_check() {
    let p = AccessPolicy::<TestUser>::with_decision(["images/"], Authenticated);

    assert!(!p.is_allowed(&TestUser::anonymous(), "images/banner.png").unwrap());
    assert!(p.is_allowed(&TestUser::named("jane"), "images/banner.png").unwrap());
}

#[test]
fn owner_segment_check() {
    let p = AccessPolicy::<TestUser>::with_decision(["profiles/"], OwnerSegment::new("profiles/"));
    let jane = TestUser::named("jane");

    assert!(p.is_allowed(&jane, "profiles/jane/avatar.png").unwrap());
    assert!(p.is_allowed(&jane, "profiles/jane/nested/cv.pdf").unwrap());
    assert!(!p.is_allowed(&jane, "profiles/john/avatar.png").unwrap());
    assert!(!p.is_allowed(&jane, "profiles/janet/avatar.png").unwrap());
    assert!(!p.is_allowed(&jane, "profiles/jane").unwrap());
    assert!(!p.is_allowed(&TestUser::anonymous(), "profiles/jane/avatar.png").unwrap());
}

#[test]
fn owner_segment_rejects_empty_username() {
    let p = AccessPolicy::<TestUser>::with_decision(["profiles/"], OwnerSegment::new("profiles/"));
    let blank = TestUser {
        authenticated: true,
        username: Some(String::new()),
        roles: Vec::new(),
    };

    assert!(!p.is_allowed(&blank, "profiles//avatar.png").unwrap());
}

#[test]
fn role_check() {
    let p = AccessPolicy::<TestUser>::with_decision(["staff/"], HasRole::new("staff"));

    assert!(p.is_allowed(&TestUser::named("jane").with_role("staff"), "staff/handbook.pdf").unwrap());
    assert!(!p.is_allowed(&TestUser::named("john"), "staff/handbook.pdf").unwrap());
}

#[test]
fn debug_lists_prefixes() {
    let p = AccessPolicy::<TestUser>::with_decision(["images/"], Allow);
    let s = format!("{p:?}");

    assert!(s.starts_with("AccessPolicy"), "{s}");
    assert!(s.contains("\"images/\""), "{s}");
}
