//! The success-or-failure value type and its operation set.
//!
//! [`Outcome<T, E>`] holds exactly one of a success payload `T` or a failure
//! payload `E` — never both, never neither — and the active state is fixed at
//! construction. Every "transformation" below produces a *new* `Outcome`;
//! nothing mutates the receiver's state in place.
//!
//! # Operation families
//!
//! | Family        | Operations                                              |
//! |---------------|---------------------------------------------------------|
//! | Construction  | `success`, `failure`, `success_unit`, `failure_unit`    |
//! | Queries       | `is_success`, `is_failure`, `is_success_and`, `is_failure_and` |
//! | Optional form | `peek_success`, `take_success`, `peek_failure`, `take_failure` |
//! | Transforms    | `map`, `map_failure`, `map_or`, `map_or_else`, `and_then`, `or_else`, `and`, `or`, `inspect`, `inspect_failure` |
//! | Extraction    | `unwrap`, `expect`, `unwrap_failure`, `expect_failure`, `unwrap_or`, `unwrap_or_else`, `unwrap_or_default` |
//!
//! # Ownership
//!
//! Accessors come in two families rather than one overloaded form:
//! `peek_*` duplicates the payload (requires `Clone`) and leaves the
//! `Outcome` usable, while `take_*` and the transforming combinators consume
//! the `Outcome` and move the payload out, which is the only option for
//! move-only payloads. A duplicable `Outcome` can always be `.clone()`d
//! before a consuming operation when both forms are wanted.
//!
//! # Capability bounds
//!
//! Capabilities are required per operation, never on the type as a whole:
//! the fatal extractors need the *other* payload to be [`Render`]able for
//! their diagnostic, `unwrap_or_default` needs `T: Default`, and the
//! `peek_*` accessors need the payload to be `Clone`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::Render;
use crate::unit::Unit;

/// A value that is either a success payload `T` or a failure payload `E`.
///
/// Construction goes through [`Outcome::success`] and [`Outcome::failure`]
/// only; there is no way to flip the state of an existing value. The type is
/// `#[must_use]`: an `Outcome` that is never queried, transformed, or
/// extracted is a latent bug, and the compiler will say so.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// fn divide(numerator: i64, denominator: i64) -> Outcome<i64, String> {
///     if denominator == 0 {
///         Outcome::failure("Division by zero".to_string())
///     } else {
///         Outcome::success(numerator / denominator)
///     }
/// }
///
/// let quotient = divide(10, 2);
/// assert_eq!(quotient, Outcome::success(5));
///
/// let chained = divide(100, 5).map(|x| x * 2).map(|x| x.to_string());
/// assert_eq!(chained, Outcome::success("40".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use = "this `Outcome` may hold a failure, which should be handled"]
pub struct Outcome<T, E> {
    state: State<T, E>,
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum State<T, E> {
    Success(T),
    Failure(E),
}

/// Panic with a rendered diagnostic of the payload that was present.
#[cold]
#[track_caller]
fn extraction_failed(msg: &str, payload: &dyn Render) -> ! {
    panic!("{}: {}", msg, payload.render())
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<T, E> Outcome<T, E> {
    /// Create a success-state `Outcome` owning `value`.
    pub fn success(value: T) -> Self {
        Outcome {
            state: State::Success(value),
        }
    }

    /// Create a failure-state `Outcome` owning `error`.
    pub fn failure(error: E) -> Self {
        Outcome {
            state: State::Failure(error),
        }
    }
}

impl<E> Outcome<Unit, E> {
    /// Create a success carrying no informative payload.
    pub fn success_unit() -> Self {
        Outcome::success(Unit)
    }
}

impl<T> Outcome<T, Unit> {
    /// Create a failure carrying no error detail.
    pub fn failure_unit() -> Self {
        Outcome::failure(Unit)
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert!(x.is_success());
    /// assert!(!x.is_failure());
    /// ```
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Returns `true` if this is a success whose value satisfies `pred`.
    ///
    /// `pred` is never invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert!(x.is_success_and(|v| *v > 1));
    /// assert!(!x.is_success_and(|v| *v > 5));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert!(!y.is_success_and(|_| true));
    /// ```
    #[must_use]
    pub fn is_success_and(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match &self.state {
            State::Success(value) => pred(value),
            State::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a failure whose error satisfies `pred`.
    ///
    /// `pred` is never invoked on a success.
    #[must_use]
    pub fn is_failure_and(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match &self.state {
            State::Success(_) => false,
            State::Failure(error) => pred(error),
        }
    }

    // ========================================================================
    // CONVERSION TO OPTIONAL FORM
    // ========================================================================

    /// Copy of the success value if present, leaving `self` intact.
    ///
    /// The copy-preserving half of the `peek_*` / `take_*` pair; only
    /// available when `T` is duplicable.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(r.peek_success(), Some(42));
    /// assert_eq!(r.peek_success(), Some(42)); // r still usable
    /// assert_eq!(r.peek_failure(), None);
    /// ```
    #[must_use]
    pub fn peek_success(&self) -> Option<T>
    where
        T: Clone,
    {
        match &self.state {
            State::Success(value) => Some(value.clone()),
            State::Failure(_) => None,
        }
    }

    /// The success value if present, consuming `self`.
    ///
    /// Works for move-only payloads; usable exactly once.
    #[must_use]
    pub fn take_success(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Copy of the failure value if present, leaving `self` intact.
    #[must_use]
    pub fn peek_failure(&self) -> Option<E>
    where
        E: Clone,
    {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error.clone()),
        }
    }

    /// The failure value if present, consuming `self`.
    #[must_use]
    pub fn take_failure(self) -> Option<E> {
        match self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    // ========================================================================
    // TRANSFORMS
    // ========================================================================

    /// Apply `f` to the success value, passing a failure through re-typed.
    ///
    /// `f` is never invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, String> = Outcome::success(2);
    /// assert_eq!(x.map(|n| n * 2), Outcome::success(4));
    ///
    /// let y: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(y.map(|n| n * 2), Outcome::failure("boom".to_string()));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(error) => Outcome::failure(error),
        }
    }

    /// Apply `f` to the failure value, passing a success through re-typed.
    ///
    /// `f` is never invoked on a success.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(error) => Outcome::failure(f(error)),
        }
    }

    /// `f(value)` on success, `default` on failure.
    ///
    /// `default` is eagerly evaluated by the caller; `f` is never invoked on
    /// a failure. Use [`Outcome::map_or_else`] when the fallback should be
    /// computed from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(7);
    /// assert_eq!(x.map_or(0, |n| n + 3), 10);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("err");
    /// assert_eq!(y.map_or(99, |n| n * 2), 99);
    /// ```
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(_) => default,
        }
    }

    /// Total pattern match: exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, String> = Outcome::success(3);
    /// let described = x.map_or_else(
    ///     |e| format!("failed: {}", e),
    ///     |v| format!("got {}", v),
    /// );
    /// assert_eq!(described, "got 3");
    /// ```
    pub fn map_or_else<U>(
        self,
        on_failure: impl FnOnce(E) -> U,
        on_success: impl FnOnce(T) -> U,
    ) -> U {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    /// Sequence a fallible step: `f(value)` on success, short-circuit on
    /// failure.
    ///
    /// This is the primary mechanism for chaining fallible operations
    /// without nested branching. `f` may itself return either state; a
    /// failure receiver is passed through re-typed without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn checked_sqrt(n: i64) -> Outcome<i64, String> {
    ///     if n < 0 {
    ///         Outcome::failure("negative".to_string())
    ///     } else {
    ///         Outcome::success((n as f64).sqrt() as i64)
    ///     }
    /// }
    ///
    /// let r: Outcome<i64, String> = Outcome::success(16);
    /// assert_eq!(r.and_then(checked_sqrt), Outcome::success(4));
    ///
    /// let f: Outcome<i64, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(f.and_then(checked_sqrt), Outcome::failure("boom".to_string()));
    /// ```
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(error) => Outcome::failure(error),
        }
    }

    /// Recover from a failure: `f(error)` on failure, short-circuit on
    /// success.
    ///
    /// The mirror of [`Outcome::and_then`]; `f` is never invoked on a
    /// success.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(error) => f(error),
        }
    }

    /// `other` on success, own error on failure. Eager: `other` is already
    /// computed — use [`Outcome::and_then`] for a lazy equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::success(1);
    /// let b: Outcome<&str, &str> = Outcome::success("two");
    /// assert_eq!(a.and(b), Outcome::success("two"));
    ///
    /// let c: Outcome<i32, &str> = Outcome::failure("early");
    /// let d: Outcome<&str, &str> = Outcome::success("late");
    /// assert_eq!(c.and(d), Outcome::failure("early"));
    /// ```
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self.state {
            State::Success(_) => other,
            State::Failure(error) => Outcome::failure(error),
        }
    }

    /// Own value on success, `other` on failure. Eager: `other` is already
    /// computed — use [`Outcome::or_else`] for a lazy equivalent.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(_) => other,
        }
    }

    /// Side-effecting peek at the success value; returns `self` unchanged.
    ///
    /// No-op on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let r: Outcome<i32, &str> = Outcome::success(9);
    /// let r = r.inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(9));
    /// assert_eq!(r, Outcome::success(9));
    /// ```
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let State::Success(value) = &self.state {
            f(value);
        }
        self
    }

    /// Side-effecting peek at the failure value; returns `self` unchanged.
    ///
    /// No-op on success.
    pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Self {
        if let State::Failure(error) = &self.state {
            f(error);
        }
        self
    }

    // ========================================================================
    // EXTRACTION
    // ========================================================================

    /// The success value; panics on failure.
    ///
    /// A failure here is a contract violation by the caller, not a domain
    /// failure, so it aborts the current control flow rather than returning
    /// a sentinel. The panic message renders the error payload ([`Render`]
    /// is satisfied by any `Debug` type, and by [`crate::Opaque`] for
    /// everything else). Prefer [`Outcome::unwrap_or`],
    /// [`Outcome::unwrap_or_else`], or [`Outcome::map_or_else`] when the
    /// failure state is reachable.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure, with a message containing the rendered
    /// error payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// assert_eq!(x.unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("x");
    /// y.unwrap(); // panics: called `Outcome::unwrap()` on a failure value: "x"
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Render,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => {
                extraction_failed("called `Outcome::unwrap()` on a failure value", &error)
            }
        }
    }

    /// Like [`Outcome::unwrap`], with a caller-supplied diagnostic prefix.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure, with `msg` followed by the rendered
    /// error payload.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Render,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => extraction_failed(msg, &error),
        }
    }

    /// The failure value; panics on success.
    ///
    /// # Panics
    ///
    /// Panics if this is a success, with a message containing the rendered
    /// success payload.
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: Render,
    {
        match self.state {
            State::Success(value) => extraction_failed(
                "called `Outcome::unwrap_failure()` on a success value",
                &value,
            ),
            State::Failure(error) => error,
        }
    }

    /// Like [`Outcome::unwrap_failure`], with a caller-supplied prefix.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E
    where
        T: Render,
    {
        match self.state {
            State::Success(value) => extraction_failed(msg, &value),
            State::Failure(error) => error,
        }
    }

    /// The success value, or `fallback` on failure. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(x.unwrap_or(7), 2);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("err");
    /// assert_eq!(y.unwrap_or(7), 7);
    /// ```
    pub fn unwrap_or(self, fallback: T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => fallback,
        }
    }

    /// The success value, or `f(error)` on failure. Never panics.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => f(error),
        }
    }

    /// The success value, or `T::default()` on failure. Never panics.
    ///
    /// Only available when `T` has a canonical default; this is a
    /// compile-time constraint, not a runtime check.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("err");
    /// assert_eq!(y.unwrap_or_default(), 0);
    /// ```
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => T::default(),
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

/// Renders as `Success(<payload>)` / `Failure(<payload>)`, degrading to the
/// `<non-renderable>` placeholder through [`crate::Opaque`].
impl<T: Render, E: Render> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => write!(f, "Success({})", value.render()),
            State::Failure(error) => write!(f, "Failure({})", error.render()),
        }
    }
}
