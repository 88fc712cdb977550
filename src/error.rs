//! Error types for the seqkit library.
//!
//! ## Key Components
//!
//! - [`ArgumentError`]: Returned by the linked variant when an index argument
//!   falls outside the valid range for the operation.
//! - [`IndexError`]: Returned by the array variant for out-of-bounds indexed
//!   access, and for value-based removal when no element matches.
//! - [`NoSuchElementError`]: Returned when an operation requires a present
//!   element but the container is empty (first/last/pop and friends).
//! - [`UnsupportedError`]: Returned by capabilities a variant deliberately
//!   does not implement (comparator sort on the linked variant, for example).
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::error::IndexError;
//! use seqkit::seq::ArraySeq;
//!
//! let seq: ArraySeq<i32> = ArraySeq::new();
//! let err: IndexError = seq.get(0).unwrap_err();
//! assert!(err.to_string().contains("out of bounds"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ArgumentError
// ---------------------------------------------------------------------------

/// Error returned when an index argument is invalid for a linked-sequence
/// operation.
///
/// Produced by positional operations on
/// [`LinkedDeque`](crate::seq::LinkedDeque): `get`, `set`, `insert`,
/// `remove_at`, `insert_all`. Carries a human-readable description of the
/// offending argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError(String);

impl ArgumentError {
    /// Creates a new `ArgumentError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ArgumentError {}

// ---------------------------------------------------------------------------
// IndexError
// ---------------------------------------------------------------------------

/// Error returned for an out-of-range access on the array variant.
///
/// Produced by [`ArraySeq`](crate::seq::ArraySeq) indexed operations (`get`,
/// `set`, `insert`, `remove_at`, `insert_all`) and by `remove_value` when no
/// element matches the search target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexError(String);

impl IndexError {
    /// Creates a new `IndexError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for IndexError {}

// ---------------------------------------------------------------------------
// NoSuchElementError
// ---------------------------------------------------------------------------

/// Error returned when an operation requires a present element but the
/// container is empty.
///
/// Produced by [`LinkedDeque`](crate::seq::LinkedDeque) `first`, `last`,
/// `remove_first`, `remove_last`, and `pop`. The `peek`/`poll` family
/// converts this condition into `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSuchElementError(String);

impl NoSuchElementError {
    /// Creates a new `NoSuchElementError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoSuchElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NoSuchElementError {}

// ---------------------------------------------------------------------------
// UnsupportedError
// ---------------------------------------------------------------------------

/// Error returned by a structurally valid call into a capability a variant
/// intentionally does not implement.
///
/// Produced by [`LinkedDeque`](crate::seq::LinkedDeque) `sort_by`,
/// `replace_all`, `iter_descending`, `cursor_at`, and `sub_range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedError(String);

impl UnsupportedError {
    /// Creates a new `UnsupportedError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UnsupportedError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ArgumentError ----------------------------------------------------

    #[test]
    fn argument_display_shows_message() {
        let err = ArgumentError::new("index 5 out of bounds for length 3");
        assert_eq!(err.to_string(), "index 5 out of bounds for length 3");
    }

    #[test]
    fn argument_message_accessor() {
        let err = ArgumentError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn argument_clone_and_eq() {
        let a = ArgumentError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn argument_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ArgumentError>();
    }

    // -- IndexError -------------------------------------------------------

    #[test]
    fn index_display_shows_message() {
        let err = IndexError::new("index 9 out of bounds for length 2");
        assert_eq!(err.to_string(), "index 9 out of bounds for length 2");
    }

    #[test]
    fn index_debug_includes_message() {
        let err = IndexError::new("no match");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("no match"));
    }

    #[test]
    fn index_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<IndexError>();
    }

    // -- NoSuchElementError -----------------------------------------------

    #[test]
    fn no_such_element_display_shows_message() {
        let err = NoSuchElementError::new("deque is empty");
        assert_eq!(err.to_string(), "deque is empty");
    }

    #[test]
    fn no_such_element_clone_and_eq() {
        let a = NoSuchElementError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn no_such_element_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<NoSuchElementError>();
    }

    // -- UnsupportedError -------------------------------------------------

    #[test]
    fn unsupported_display_shows_message() {
        let err = UnsupportedError::new("comparator sort is not supported");
        assert_eq!(err.to_string(), "comparator sort is not supported");
    }

    #[test]
    fn unsupported_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<UnsupportedError>();
    }
}
