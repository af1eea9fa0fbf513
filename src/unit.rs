//! The no-payload marker type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-size placeholder for "no informative payload".
///
/// Used as the success type of operations that can fail but produce no
/// useful value, or as the error type of operations that can fail without
/// error detail. Keeping it a concrete type (rather than special-casing
/// "nothing") means `Outcome<T, E>` never needs a degenerate form: both
/// type parameters are always real types.
///
/// All `Unit` values are equal, and it renders as `()`.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, Unit};
///
/// fn validate_age(age: i32) -> Outcome<Unit, String> {
///     if age < 0 {
///         Outcome::failure("Age cannot be negative".to_string())
///     } else {
///         Outcome::success_unit()
///     }
/// }
///
/// assert!(validate_age(25).is_success());
/// assert!(validate_age(-5).is_failure());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit;

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Unit
    }
}
