//! Transforming combinators: map family, sequencing, inspection.

use outcome::testing::MoveOnly;
use outcome::{Outcome, Unit};

use crate::common::{failure, must_not_run, success};

// ============================================================================
// MAP / MAP_FAILURE
// ============================================================================

#[test]
fn map_transforms_success_and_leaves_failure_untouched() {
    assert_eq!(success(5).map(|v| v * 2), Outcome::success(10));
    assert_eq!(
        failure("boom").map(|v| v + 1),
        Outcome::failure("boom".to_string())
    );
}

#[test]
fn map_never_invokes_the_function_on_a_failure() {
    let f = failure("boom");
    let mapped: Outcome<i32, String> = f.map(must_not_run);
    assert_eq!(mapped, failure("boom"));
}

#[test]
fn map_can_change_the_success_type() {
    let r = success(40).map(|v| v.to_string());
    assert_eq!(r, Outcome::success("40".to_string()));
}

#[test]
fn map_moves_move_only_payloads_into_the_function() {
    let r: Outcome<MoveOnly, String> = Outcome::success(MoveOnly(42));
    let extracted = r.map(|m| m.value());
    assert_eq!(extracted, Outcome::success(42));
}

#[test]
fn map_failure_transforms_error_and_leaves_success_untouched() {
    let f = failure("io").map_failure(|e| format!("wrapped: {}", e));
    assert_eq!(f, Outcome::failure("wrapped: io".to_string()));

    let s = success(1).map_failure(|e| format!("wrapped: {}", e));
    assert_eq!(s, Outcome::success(1));
}

#[test]
fn map_failure_never_invokes_the_function_on_a_success() {
    let remapped: Outcome<i32, String> = success(1).map_failure(must_not_run);
    assert_eq!(remapped, success(1));
}

// ============================================================================
// MAP_OR / MAP_OR_ELSE
// ============================================================================

#[test]
fn map_or_applies_function_on_success() {
    assert_eq!(success(7).map_or(0, |v| v + 3), 10);
}

#[test]
fn map_or_returns_default_on_failure_without_calling_the_function() {
    assert_eq!(failure("err").map_or(99, must_not_run::<i32, i32>), 99);
}

#[test]
fn map_or_else_invokes_exactly_one_branch() {
    let described = success(3).map_or_else(
        |_| panic!("failure branch ran on a success"),
        |v| format!("got {}", v),
    );
    assert_eq!(described, "got 3");

    let described = failure("boom").map_or_else(
        |e| format!("failed: {}", e),
        |_| panic!("success branch ran on a failure"),
    );
    assert_eq!(described, "failed: boom");
}

// ============================================================================
// AND_THEN / OR_ELSE (lazy) AND AND / OR (eager)
// ============================================================================

fn checked_double(v: i32) -> Outcome<i32, String> {
    if v > 100 {
        Outcome::failure("overflow".to_string())
    } else {
        Outcome::success(v * 2)
    }
}

#[test]
fn and_then_sequences_fallible_steps() {
    assert_eq!(success(5).and_then(checked_double), success(10));
    assert_eq!(
        success(200).and_then(checked_double),
        failure("overflow")
    );
}

#[test]
fn and_then_short_circuits_on_failure() {
    let chained: Outcome<i32, String> = failure("early").and_then(must_not_run);
    assert_eq!(chained, failure("early"));
}

#[test]
fn or_else_recovers_from_failure() {
    let recovered = failure("transient").or_else(|_| success(0));
    assert_eq!(recovered, success(0));

    // A recovery function may also fail, with a new error type.
    let renamed: Outcome<i32, u8> = failure("fatal").or_else(|_| Outcome::failure(2u8));
    assert_eq!(renamed, Outcome::failure(2u8));
}

#[test]
fn or_else_short_circuits_on_success() {
    let kept: Outcome<i32, String> = success(3).or_else(must_not_run);
    assert_eq!(kept, success(3));
}

#[test]
fn and_truth_table() {
    let x = success(2);
    let y: Outcome<&str, String> = Outcome::success("late");
    assert_eq!(x.and(y), Outcome::success("late"));

    let x = success(2);
    let y: Outcome<&str, String> = Outcome::failure("late err".to_string());
    assert_eq!(x.and(y), Outcome::failure("late err".to_string()));

    let x = failure("early err");
    let y: Outcome<&str, String> = Outcome::success("late");
    assert_eq!(x.and(y), Outcome::failure("early err".to_string()));
}

#[test]
fn or_truth_table() {
    let x = success(2);
    let y = success(100);
    assert_eq!(x.or(y), success(2));

    let x = failure("early");
    let y = success(100);
    assert_eq!(x.or(y), success(100));

    let x = failure("early");
    let y = failure("late");
    assert_eq!(x.or(y), failure("late"));
}

// ============================================================================
// INSPECT
// ============================================================================

#[test]
fn inspect_peeks_at_success_and_returns_self() {
    let mut seen = None;
    let r = success(9).inspect(|v| seen = Some(*v));
    assert_eq!(seen, Some(9));
    assert_eq!(r, success(9));
}

#[test]
fn inspect_is_a_noop_on_failure() {
    let r = failure("boom").inspect(|_| panic!("inspected a failure's success value"));
    assert_eq!(r, failure("boom"));
}

#[test]
fn inspect_failure_peeks_at_error_and_returns_self() {
    let mut seen = None;
    let r = failure("boom").inspect_failure(|e| seen = Some(e.clone()));
    assert_eq!(seen, Some("boom".to_string()));
    assert_eq!(r, failure("boom"));

    let s = success(1).inspect_failure(|_| panic!("inspected a success's error value"));
    assert_eq!(s, success(1));
}

// ============================================================================
// UNIT PAYLOADS
// ============================================================================

#[test]
fn map_accepts_unit_on_either_side() {
    // T = Unit: closure binds the marker and produces a value.
    let produced: Outcome<i32, String> = Outcome::success_unit().map(|Unit| 5);
    assert_eq!(produced, success(5));

    // U = Unit: a value folded away to "no payload".
    let folded: Outcome<Unit, String> = success(5).map(|_| Unit);
    assert_eq!(folded, Outcome::success_unit());
}
