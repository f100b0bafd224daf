//! Convenient Error Handling and Accumulation
//!
//! This module provides a simple, opaque result type (`Res`) for accumulating the outcome of
//! several checks without branching on any single one of them. Only once every check has been
//! folded in is the result turned into a `Result`.

/// An opaque result type for error handling without exposing error details.
///
/// This type only indicates success or failure, which one of the accumulated checks failed
/// is not recorded.
#[must_use = "You must handle the potential error"]
#[repr(transparent)]
pub struct Res(bool);

impl Default for Res {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Res {
    /// Represents a successful result.
    pub const OK: Self = Self(true);
    /// Represents an error result.
    pub const ERR: Self = Self(false);

    /// Creates a new `Res` instance initialized to `OK`.
    pub const fn new() -> Self {
        Self::OK
    }

    /// Checks if the result is OK (successful).
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.0
    }

    /// Checks if the result is an error.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.0
    }

    /// Updates the result based on a boolean condition.
    ///
    /// If `res` is `false`, this method will set the `Res` to an error state.
    #[inline]
    pub fn check(&mut self, res: bool) {
        self.0 &= res;
    }

    /// Combines this `Res` with another `Res`.
    ///
    /// The result will be OK only if both `Res` instances are OK.
    #[inline]
    pub fn ensure(&mut self, res: Self) {
        self.0 &= res.0;
    }

    /// Converts the `Res` into a `Result<OK, E>`, reporting `err` on failure.
    ///
    /// # Warning
    ///
    /// This method is not constant time, the branch is taken once every check has been
    /// accumulated.
    #[allow(clippy::missing_errors_doc)]
    #[inline(always)]
    pub fn or_err<OK, E>(self, ok: OK, err: E) -> Result<OK, E> {
        if self.is_ok() {
            Ok(ok)
        } else {
            Err(err)
        }
    }
}
