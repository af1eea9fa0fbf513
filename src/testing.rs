//! Test utilities shared across unit, property, and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so the test suites don't each reinvent
//! the same fallible operations and awkward payload types.

#![doc(hidden)]

use crate::outcome::Outcome;
use crate::unit::Unit;

/// A payload that can be moved but not duplicated.
///
/// Deliberately neither `Clone` nor `Copy`; exercises the `take_*` family
/// and the consuming combinators.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(pub u32);

impl MoveOnly {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// A payload with no `Debug` impl; exercises the `Opaque` rendering path.
pub struct NoRender;

/// Integer division that fails on a zero denominator.
pub fn divide(numerator: i64, denominator: i64) -> Outcome<i64, String> {
    if denominator == 0 {
        Outcome::failure("Division by zero".to_string())
    } else {
        Outcome::success(numerator / denominator)
    }
}

/// Validation that succeeds with no payload.
pub fn validate_age(age: i32) -> Outcome<Unit, String> {
    if age < 0 {
        Outcome::failure("Age cannot be negative".to_string())
    } else {
        Outcome::success_unit()
    }
}

/// Parse a decimal integer, carrying the offending input in the error.
pub fn parse_number(input: &str) -> Outcome<i64, String> {
    match input.trim().parse::<i64>() {
        Ok(n) => Outcome::success(n),
        Err(_) => Outcome::failure(format!("Parse failed: {}", input)),
    }
}
