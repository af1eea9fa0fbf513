//! Construction and equality.

use outcome::testing::MoveOnly;
use outcome::{Outcome, Unit};

use crate::common::{failure, success};

#[test]
fn success_constructor_builds_success_state() {
    let r = success(5);
    assert!(r.is_success());
    assert!(!r.is_failure());
}

#[test]
fn failure_constructor_builds_failure_state() {
    let r = failure("CreateErr");
    assert!(r.is_failure());
    assert!(!r.is_success());
}

#[test]
fn constructors_accept_move_only_payloads() {
    let r: Outcome<MoveOnly, String> = Outcome::success(MoveOnly(5));
    assert!(r.is_success());
    assert_eq!(r.take_success(), Some(MoveOnly(5)));

    let r: Outcome<i32, MoveOnly> = Outcome::failure(MoveOnly(9));
    assert!(r.is_failure());
    assert_eq!(r.take_failure(), Some(MoveOnly(9)));
}

#[test]
fn unit_constructors_need_no_argument() {
    let ok: Outcome<Unit, String> = Outcome::success_unit();
    assert_eq!(ok, Outcome::success(Unit));

    let bad: Outcome<String, Unit> = Outcome::failure_unit();
    assert_eq!(bad, Outcome::failure(Unit));
}

#[test]
fn equality_requires_same_state_and_payload() {
    assert_eq!(success(1), success(1));
    assert_ne!(success(1), success(2));
    assert_eq!(failure("a"), failure("a"));
    assert_ne!(failure("a"), failure("b"));

    // A success and a failure are never equal, whatever the payloads.
    let s: Outcome<i32, i32> = Outcome::success(7);
    let f: Outcome<i32, i32> = Outcome::failure(7);
    assert_ne!(s, f);
}

#[test]
fn clone_produces_an_equal_independent_value() {
    let original = success(3);
    let copy = original.clone();
    assert_eq!(copy, original);
    // Both are independently consumable.
    assert_eq!(original.take_success(), Some(3));
    assert_eq!(copy.take_success(), Some(3));
}
