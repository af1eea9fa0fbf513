//! Textual rendering capability for diagnostic messages.
//!
//! The fatal-extraction path (`unwrap`, `expect` and their failure-side
//! mirrors) has to describe the payload that *was* present when the caller
//! asked for the one that wasn't. That requires some way to turn an arbitrary
//! payload into text, without forcing every payload type to be printable.
//!
//! The capability is split the same way the rest of the crate splits
//! capabilities (see `Outcome`'s per-operation bounds):
//!
//! - [`Render`] is blanket-implemented for every `T: Debug`, so ordinary
//!   payloads get a diagnostic rendering for free.
//! - [`Opaque`] wraps payload types that have no textual form at all and
//!   renders them as the fixed [`NON_RENDERABLE`] placeholder, so a
//!   diagnostic can always be produced.

use std::fmt;

/// Placeholder used when a payload has no meaningful textual rendering.
pub const NON_RENDERABLE: &str = "<non-renderable>";

/// Capability of producing a diagnostic rendering of a value.
///
/// Implemented automatically for every type that implements [`fmt::Debug`].
/// Types that cannot be printed participate via [`Opaque`].
pub trait Render {
    /// Render the value for inclusion in a diagnostic message.
    fn render(&self) -> String;
}

impl<T: fmt::Debug> Render for T {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

/// Wrapper granting a placeholder rendering to any payload type.
///
/// `Opaque<P>` implements [`fmt::Debug`] (and therefore [`Render`]) for
/// *every* `P`, printing [`NON_RENDERABLE`] instead of the payload. Use it
/// when a payload type is neither `Debug` nor worth printing, but the
/// `Outcome` carrying it still needs the fatal extraction operations.
///
/// # Examples
///
/// ```
/// use outcome::{Opaque, Outcome};
///
/// struct Handle; // no Debug impl
///
/// let r: Outcome<i32, Opaque<Handle>> = Outcome::failure(Opaque(Handle));
/// // r.unwrap() would panic with "... <non-renderable>"
/// assert!(r.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opaque<P>(pub P);

impl<P> Opaque<P> {
    /// Consume the wrapper, returning the payload.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> fmt::Debug for Opaque<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NON_RENDERABLE)
    }
}

impl<P> fmt::Display for Opaque<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NON_RENDERABLE)
    }
}
