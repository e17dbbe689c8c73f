//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// `front`, `back`, or a pop on a list of size 0.
    Empty,
    /// A cursor that cannot be used for the requested operation.
    InvalidIterator {
        /// Why the cursor was rejected.
        fault: IteratorFault,
    },
}

impl ListError {
    /// Shorthand constructor for iterator-misuse errors.
    pub(crate) fn invalid(fault: IteratorFault) -> Self {
        Self::InvalidIterator { fault }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "operation on an empty list"),
            Self::InvalidIterator { fault } => write!(f, "invalid iterator: {fault}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIterator { fault } => Some(fault),
            Self::Empty => None,
        }
    }
}

/// The specific way a cursor was found unusable.
///
/// [`Stale`](IteratorFault::Stale) and
/// [`ForeignList`](IteratorFault::ForeignList) are detected in debug
/// builds only; release builds skip those checks entirely and leave
/// correct cursor usage as a caller precondition. The positional faults
/// ([`AtEnd`](IteratorFault::AtEnd), [`AtFront`](IteratorFault::AtFront))
/// are reported in every build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IteratorFault {
    /// The list has been structurally mutated since the cursor was made.
    Stale {
        /// Version snapshot the cursor carries.
        cursor_version: u64,
        /// The list's current version.
        list_version: u64,
    },
    /// The cursor belongs to a different list.
    ForeignList,
    /// The operation is undefined at the end position (one past the tail):
    /// dereference, step forward, `erase`, or `insert_after`.
    AtEnd,
    /// Stepping backward at the front position.
    AtFront,
}

impl fmt::Display for IteratorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stale {
                cursor_version,
                list_version,
            } => write!(
                f,
                "the list has changed since the cursor was created \
                 (cursor version {cursor_version}, list version {list_version})"
            ),
            Self::ForeignList => write!(f, "cursor comes from another list"),
            Self::AtEnd => write!(f, "operation undefined at the end position"),
            Self::AtFront => write!(f, "cannot step backward at the front position"),
        }
    }
}

impl Error for IteratorFault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_versions() {
        let err = ListError::invalid(IteratorFault::Stale {
            cursor_version: 3,
            list_version: 5,
        });
        let text = err.to_string();
        assert!(text.contains("cursor version 3"));
        assert!(text.contains("list version 5"));
    }

    #[test]
    fn source_chains_to_fault() {
        let err = ListError::invalid(IteratorFault::AtEnd);
        let source = std::error::Error::source(&err).expect("has a source");
        assert_eq!(source.to_string(), IteratorFault::AtEnd.to_string());
        assert!(std::error::Error::source(&ListError::Empty).is_none());
    }
}
