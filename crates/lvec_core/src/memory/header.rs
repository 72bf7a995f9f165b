//! # Buffer Header
//!
//! Length, capacity and element size, plus the slot-to-byte arithmetic
//! every operation goes through.

/// Metadata describing a buffer's storage.
///
/// `length <= capacity` always holds. `element_size` is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// Number of live elements.
    pub length: usize,
    /// Number of element slots currently allocated.
    pub capacity: usize,
    /// Size of one element in bytes.
    pub element_size: usize,
}

impl Header {
    /// Creates a header for an empty buffer.
    #[inline]
    #[must_use]
    pub const fn new(element_size: usize, capacity: usize) -> Self {
        Self {
            length: 0,
            capacity,
            element_size,
        }
    }

    /// Byte offset of the slot at `index`.
    #[inline]
    #[must_use]
    pub const fn byte_offset(&self, index: usize) -> usize {
        index * self.element_size
    }

    /// Number of bytes occupied by live elements.
    #[inline]
    #[must_use]
    pub const fn live_bytes(&self) -> usize {
        self.byte_offset(self.length)
    }

    /// Storage bytes needed for `capacity` slots, or `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn storage_bytes(&self, capacity: usize) -> Option<usize> {
        capacity.checked_mul(self.element_size)
    }

    /// Whether one more element fits without growing.
    #[inline]
    #[must_use]
    pub const fn has_spare_slot(&self) -> bool {
        self.length < self.capacity
    }
}
