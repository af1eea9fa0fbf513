//! Conversions between `Outcome` and the standard library's types.
//!
//! `Outcome` is deliberately its own type (private state, constructor-only
//! creation, `peek_*`/`take_*` access families), but code at the crate
//! boundary still meets `std::result::Result` and `Option` constantly.
//! These conversions keep that boundary one method call wide.

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.map_or_else(Err, Ok)
    }
}

impl<T, E> Outcome<T, E> {
    /// Convert from a standard `Result`, preserving state and payload.
    pub fn from_result(result: Result<T, E>) -> Self {
        result.into()
    }

    /// Convert into a standard `Result`, preserving state and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<i32, String> = Outcome::success(3);
    /// assert_eq!(r.into_result(), Ok(3));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Swap the `Outcome` and `Option` layers.
    ///
    /// `Success(None)` becomes `None`, `Success(Some(v))` becomes
    /// `Some(Success(v))`, and `Failure(e)` becomes `Some(Failure(e))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let present: Outcome<Option<i32>, String> = Outcome::success(Some(5));
    /// assert_eq!(present.transpose(), Some(Outcome::success(5)));
    ///
    /// let absent: Outcome<Option<i32>, String> = Outcome::success(None);
    /// assert_eq!(absent.transpose(), None);
    /// ```
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        self.map_or_else(
            |error| Some(Outcome::failure(error)),
            |option| option.map(Outcome::success),
        )
    }
}
