//! # Buffer Error Types
//!
//! All errors that can occur while creating or mutating a buffer.

use thiserror::Error;

/// Errors that can occur in buffer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An index-taking operation was given an index at or past the length.
    #[error("index {index} out of bounds for length {length}")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The buffer length at the time of the call.
        length: usize,
    },

    /// Acquiring (or resizing) the storage failed. The buffer is unchanged.
    #[error("allocation failed: requested {requested_bytes} bytes")]
    AllocationFailure {
        /// Storage size that could not be obtained.
        requested_bytes: usize,
    },

    /// A buffer was requested for zero-sized elements.
    #[error("element size must be greater than zero")]
    ZeroElementSize,

    /// The bytes (or view type) do not match the buffer's element size.
    #[error("element size mismatch: buffer holds {expected}-byte elements, got {actual} bytes")]
    ElementSizeMismatch {
        /// The buffer's element size.
        expected: usize,
        /// The size that was supplied.
        actual: usize,
    },

    /// A typed view was requested for a type the storage cannot align.
    #[error("alignment {align} not supported, storage is aligned to {supported}")]
    UnsupportedAlignment {
        /// Alignment required by the view type.
        align: usize,
        /// Alignment the storage guarantees.
        supported: usize,
    },

    /// Invalid configuration value or file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// The three-valued status taxonomy of the mutating operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed.
    Success,
    /// An index was at or past the buffer length.
    OutOfBounds,
    /// Storage could not be acquired.
    AllocationFailure,
}

impl Status {
    /// Collapses a buffer result into its status code.
    ///
    /// Returns `None` for errors outside the taxonomy (caller contract
    /// violations such as a mismatched element size or a bad config).
    #[must_use]
    pub fn of<T>(result: &BufferResult<T>) -> Option<Self> {
        match result {
            Ok(_) => Some(Self::Success),
            Err(err) => err.status(),
        }
    }
}

impl BufferError {
    /// Maps this error onto the status taxonomy, if it belongs to it.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::OutOfBounds { .. } => Some(Status::OutOfBounds),
            Self::AllocationFailure { .. } => Some(Status::AllocationFailure),
            Self::ZeroElementSize
            | Self::ElementSizeMismatch { .. }
            | Self::UnsupportedAlignment { .. }
            | Self::InvalidConfig(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let ok: BufferResult<()> = Ok(());
        assert_eq!(Status::of(&ok), Some(Status::Success));

        let oob: BufferResult<()> = Err(BufferError::OutOfBounds { index: 3, length: 3 });
        assert_eq!(Status::of(&oob), Some(Status::OutOfBounds));

        let alloc: BufferResult<()> = Err(BufferError::AllocationFailure { requested_bytes: 64 });
        assert_eq!(Status::of(&alloc), Some(Status::AllocationFailure));

        assert_eq!(BufferError::ZeroElementSize.status(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = BufferError::OutOfBounds { index: 5, length: 2 };
        assert_eq!(err.to_string(), "index 5 out of bounds for length 2");

        let err = BufferError::InvalidConfig("growth_factor must be > 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: growth_factor must be > 1"
        );
    }
}
