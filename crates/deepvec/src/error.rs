//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while (re)sizing a container's backing storage.
///
/// Each variant carries the name of the failing operation so the fail-fast
/// panicking wrappers produce a diagnostic identifying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// The allocator could not provide the requested backing storage.
    AllocationFailed {
        /// Operation that requested the storage (e.g. `"push"`, `"reserve"`).
        op: &'static str,
        /// Number of bytes requested.
        requested_bytes: usize,
    },
    /// The requested slot count exceeds the maximum representable buffer
    /// size for the element type.
    CapacityOverflow {
        /// Operation that requested the capacity.
        op: &'static str,
        /// Number of slots requested.
        requested_slots: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                op,
                requested_bytes,
            } => {
                write!(
                    f,
                    "allocation failed in {op}: requested {requested_bytes} bytes"
                )
            }
            Self::CapacityOverflow {
                op,
                requested_slots,
            } => {
                write!(
                    f,
                    "capacity overflow in {op}: {requested_slots} slots exceed the maximum buffer size"
                )
            }
        }
    }
}

impl Error for VecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_operation() {
        let e = VecError::AllocationFailed {
            op: "push",
            requested_bytes: 1024,
        };
        assert_eq!(
            e.to_string(),
            "allocation failed in push: requested 1024 bytes"
        );

        let e = VecError::CapacityOverflow {
            op: "reserve",
            requested_slots: usize::MAX,
        };
        assert!(e.to_string().starts_with("capacity overflow in reserve"));
    }
}
