//! Value-based success-or-failure type with a full combinator set.
//!
//! This crate provides [`Outcome<T, E>`]: an immutable-once-constructed
//! tagged union holding exactly one of a success payload `T` or a failure
//! payload `E`. It is a generic alternative to exception-style control flow:
//! fallible operations return an `Outcome`, and call sites compose them with
//! combinators instead of unchecked jumps.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   unit.rs   │────▶│  outcome.rs  │◀────│  render.rs   │
//! │   (Unit)    │     │ (Outcome<T,E>│     │ (Render,     │
//! │             │     │  + operations)│    │  Opaque)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │  convert.rs  │
//!                     │ (std Result/ │
//!                     │ Option interop)│
//!                     └──────────────┘
//! ```
//!
//! # Design rules
//!
//! | Rule                  | How it shows up                                  |
//! |-----------------------|--------------------------------------------------|
//! | Constructor-only      | State is private; only `success`/`failure` build |
//! | Immutable state       | Transforms return new values, never mutate       |
//! | Must observe          | The type is `#[must_use]`                        |
//! | Per-op capabilities   | `Render`/`Default`/`Clone` bounds per operation  |
//! | Copy vs. move access  | `peek_*` (duplicating) vs `take_*` (consuming)   |
//! | Contract violations   | Wrong-state extraction panics with a rendered payload |
//!
//! Domain failures (the `E` payload) and contract violations (extracting
//! from the wrong state) are distinct: the former propagate by value through
//! [`Outcome::map_failure`], [`Outcome::or_else`], and friends; the latter
//! panic immediately so the bug surfaces where it happened.
//!
//! # Usage
//!
//! ```
//! use outcome::Outcome;
//!
//! fn divide(n: i64, d: i64) -> Outcome<i64, String> {
//!     if d == 0 {
//!         Outcome::failure("Division by zero".to_string())
//!     } else {
//!         Outcome::success(n / d)
//!     }
//! }
//!
//! let doubled = divide(100, 5)
//!     .map(|x| x * 2)
//!     .map(|x| x.to_string());
//! assert_eq!(doubled, Outcome::success("40".to_string()));
//!
//! let fallback = divide(1, 0).unwrap_or(0);
//! assert_eq!(fallback, 0);
//! ```

// Module declarations
mod convert;
mod outcome;
mod render;
#[doc(hidden)]
pub mod testing;
mod unit;

// Re-exports for public API
pub use outcome::Outcome;
pub use render::{Opaque, Render, NON_RENDERABLE};
pub use unit::Unit;
