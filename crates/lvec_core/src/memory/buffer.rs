//! # Type-Erased Buffer
//!
//! A growable array of fixed-size, opaque elements.
//!
//! The buffer stores its [`Header`] beside a contiguous storage region.
//! Element views always start at the first byte of storage, so indexing
//! is plain offset arithmetic: slot `i` lives at `i * element_size`.

use std::fmt;

use bytemuck::Pod;

use super::growth::{grown_capacity, reserve_target};
use super::header::Header;
use super::storage::{Storage, STORAGE_ALIGN};
use crate::config::BufferConfig;
use crate::error::{BufferError, BufferResult};

/// A growable, contiguous buffer of `element_size`-byte elements.
///
/// Any operation that changes capacity may relocate storage; views borrowed
/// from the buffer cannot outlive the `&mut` call that would invalidate
/// them.
///
/// # Thread Safety
///
/// Single owner, single mutator. No internal locking.
///
/// # Example
///
/// ```rust
/// use lvec_core::Buffer;
///
/// let mut buffer = Buffer::new(4)?;
/// for value in [10u32, 20, 30] {
///     buffer.append(&value.to_ne_bytes())?;
/// }
/// buffer.remove(0)?;
/// assert_eq!(buffer.view::<u32>()?, &[20, 30]);
/// # Ok::<(), lvec_core::BufferError>(())
/// ```
pub struct Buffer {
    header: Header,
    storage: Storage,
    config: BufferConfig,
}

impl Buffer {
    /// Creates an empty buffer with the default configuration.
    ///
    /// # Errors
    ///
    /// [`BufferError::ZeroElementSize`] if `element_size` is zero,
    /// [`BufferError::AllocationFailure`] if storage cannot be acquired.
    pub fn new(element_size: usize) -> BufferResult<Self> {
        Self::with_config(element_size, BufferConfig::default())
    }

    /// Creates an empty buffer with `config.initial_capacity` slots.
    ///
    /// # Errors
    ///
    /// [`BufferError::ZeroElementSize`], [`BufferError::InvalidConfig`],
    /// or [`BufferError::AllocationFailure`].
    pub fn with_config(element_size: usize, config: BufferConfig) -> BufferResult<Self> {
        if element_size == 0 {
            return Err(BufferError::ZeroElementSize);
        }
        config.validate()?;

        let header = Header::new(element_size, config.initial_capacity);
        let bytes = checked_storage_bytes(&header, &config, config.initial_capacity)?;
        let storage = Storage::try_with_bytes(bytes).map_err(|_| {
            tracing::warn!(bytes, "buffer allocation failed");
            BufferError::AllocationFailure {
                requested_bytes: bytes,
            }
        })?;

        tracing::debug!(
            element_size,
            capacity = header.capacity,
            "buffer created"
        );

        Ok(Self {
            header,
            storage,
            config,
        })
    }

    /// Releases the buffer's storage.
    ///
    /// Equivalent to dropping it; spelled out for call sites that want the
    /// end of the buffer's life to be visible.
    pub fn free(self) {
        tracing::trace!(
            length = self.header.length,
            capacity = self.header.capacity,
            "buffer freed"
        );
    }

    // =========================================================================
    // HEADER
    // =========================================================================

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.header.length
    }

    /// Number of element slots currently allocated.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.header.capacity
    }

    /// Size of one element in bytes.
    #[inline]
    #[must_use]
    pub const fn element_size(&self) -> usize {
        self.header.element_size
    }

    /// Whether the buffer holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.header.length == 0
    }

    /// A copy of the header.
    #[inline]
    #[must_use]
    pub const fn header(&self) -> Header {
        self.header
    }

    /// The configuration this buffer was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Bytes of storage actually held, including slack and block rounding.
    #[inline]
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.storage.allocated_bytes()
    }

    // =========================================================================
    // ELEMENT ACCESS
    // =========================================================================

    /// The live bytes, `length * element_size` of them.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes()[..self.header.live_bytes()]
    }

    /// The live bytes, mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let live = self.header.live_bytes();
        &mut self.storage.bytes_mut()[..live]
    }

    /// The bytes of the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.header.length {
            return None;
        }
        let start = self.header.byte_offset(index);
        Some(&self.storage.bytes()[start..start + self.header.element_size])
    }

    /// The bytes of the element at `index`, mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.header.length {
            return None;
        }
        let start = self.header.byte_offset(index);
        let end = start + self.header.element_size;
        Some(&mut self.storage.bytes_mut()[start..end])
    }

    /// The live elements viewed as `T`.
    ///
    /// # Errors
    ///
    /// [`BufferError::ElementSizeMismatch`] if `size_of::<T>()` differs from
    /// the element size, [`BufferError::UnsupportedAlignment`] if `T` needs
    /// more alignment than storage provides.
    pub fn view<T: Pod>(&self) -> BufferResult<&[T]> {
        self.check_view::<T>()?;
        Ok(bytemuck::cast_slice(self.as_bytes()))
    }

    /// The live elements viewed as mutable `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Buffer::view`].
    pub fn view_mut<T: Pod>(&mut self) -> BufferResult<&mut [T]> {
        self.check_view::<T>()?;
        Ok(bytemuck::cast_slice_mut(self.as_bytes_mut()))
    }

    /// Checks that `T` can be laid over this buffer's elements.
    ///
    /// # Errors
    ///
    /// Same as [`Buffer::view`].
    pub fn check_view<T: Pod>(&self) -> BufferResult<()> {
        let size = std::mem::size_of::<T>();
        if size != self.header.element_size {
            return Err(BufferError::ElementSizeMismatch {
                expected: self.header.element_size,
                actual: size,
            });
        }
        let align = std::mem::align_of::<T>();
        if align > STORAGE_ALIGN {
            return Err(BufferError::UnsupportedAlignment {
                align,
                supported: STORAGE_ALIGN,
            });
        }
        Ok(())
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends one element after the last live one.
    ///
    /// Grows by the growth factor when full.
    ///
    /// # Errors
    ///
    /// [`BufferError::ElementSizeMismatch`] if `element` has the wrong size,
    /// [`BufferError::AllocationFailure`] if growth fails (buffer unchanged).
    pub fn append(&mut self, element: &[u8]) -> BufferResult<()> {
        self.check_element(element)?;
        self.ensure_spare_slot()?;

        let start = self.header.live_bytes();
        let end = start + self.header.element_size;
        self.storage.bytes_mut()[start..end].copy_from_slice(element);
        self.header.length += 1;

        Ok(())
    }

    /// Inserts one element at `index`, shifting `[index, length)` right.
    ///
    /// `index` must name a live element; inserting at `length` is rejected,
    /// use [`Buffer::append`] for that.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `index >= length`,
    /// [`BufferError::ElementSizeMismatch`], or
    /// [`BufferError::AllocationFailure`]. The buffer is unchanged on error.
    pub fn insert(&mut self, element: &[u8], index: usize) -> BufferResult<()> {
        self.check_index(index)?;
        self.check_element(element)?;
        self.ensure_spare_slot()?;

        let size = self.header.element_size;
        let start = self.header.byte_offset(index);
        let end = self.header.live_bytes();

        let bytes = self.storage.bytes_mut();
        bytes.copy_within(start..end, start + size);
        bytes[start..start + size].copy_from_slice(element);
        self.header.length += 1;

        Ok(())
    }

    /// Removes the element at `index`, shifting the tail left.
    ///
    /// Capacity never shrinks.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `index >= length`.
    pub fn remove(&mut self, index: usize) -> BufferResult<()> {
        self.check_index(index)?;

        self.header.length -= 1;
        if index == self.header.length {
            return Ok(());
        }

        let size = self.header.element_size;
        let start = self.header.byte_offset(index);
        let old_end = self.header.byte_offset(self.header.length + 1);
        self.storage
            .bytes_mut()
            .copy_within(start + size..old_end, start);

        Ok(())
    }

    /// Removes the last element.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the buffer is empty.
    pub fn remove_last(&mut self) -> BufferResult<()> {
        match self.header.length.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(BufferError::OutOfBounds {
                index: 0,
                length: 0,
            }),
        }
    }

    /// Drops every element. Capacity and storage are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.header.length = 0;
    }

    /// Ensures room for at least `desired_capacity` elements.
    ///
    /// No-op when capacity already suffices. Otherwise capacity becomes what
    /// growing one step at a time would reach, in a single reallocation.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] (buffer unchanged).
    pub fn reserve_minimum(&mut self, desired_capacity: usize) -> BufferResult<()> {
        if self.header.capacity >= desired_capacity {
            return Ok(());
        }

        let target = reserve_target(
            self.header.capacity,
            desired_capacity,
            self.config.growth_factor,
        );
        tracing::debug!(
            from = self.header.capacity,
            desired = desired_capacity,
            to = target,
            "reserving capacity"
        );
        self.reallocate(target)
    }

    /// Reallocates to `max(minimum_capacity, length)` slots.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] (buffer unchanged).
    pub fn shrink_to_fit(&mut self) -> BufferResult<()> {
        let target = self.header.length.max(self.config.minimum_capacity);
        tracing::debug!(
            from = self.header.capacity,
            to = target,
            "shrinking to fit"
        );
        self.reallocate(target)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn check_index(&self, index: usize) -> BufferResult<()> {
        if index >= self.header.length {
            return Err(BufferError::OutOfBounds {
                index,
                length: self.header.length,
            });
        }
        Ok(())
    }

    fn check_element(&self, element: &[u8]) -> BufferResult<()> {
        if element.len() != self.header.element_size {
            return Err(BufferError::ElementSizeMismatch {
                expected: self.header.element_size,
                actual: element.len(),
            });
        }
        Ok(())
    }

    /// Grows by one step if the next element would not fit.
    fn ensure_spare_slot(&mut self) -> BufferResult<()> {
        if self.header.has_spare_slot() {
            return Ok(());
        }
        let target = grown_capacity(self.header.capacity, self.config.growth_factor);
        self.reallocate(target)
    }

    /// Resizes storage to `new_capacity` slots. All-or-nothing.
    fn reallocate(&mut self, new_capacity: usize) -> BufferResult<()> {
        debug_assert!(new_capacity >= self.header.length);

        let bytes = checked_storage_bytes(&self.header, &self.config, new_capacity)?;
        let old_base = self.storage.base_addr();

        if self.storage.try_resize(bytes).is_err() {
            tracing::warn!(
                capacity = self.header.capacity,
                requested_capacity = new_capacity,
                bytes,
                "buffer reallocation failed"
            );
            return Err(BufferError::AllocationFailure {
                requested_bytes: bytes,
            });
        }

        tracing::debug!(
            from = self.header.capacity,
            to = new_capacity,
            relocated = old_base != self.storage.base_addr(),
            "buffer reallocated"
        );
        self.header.capacity = new_capacity;

        Ok(())
    }
}

/// Storage bytes for `capacity` slots, rounded up to whole blocks and
/// checked for overflow and budget.
fn checked_storage_bytes(
    header: &Header,
    config: &BufferConfig,
    capacity: usize,
) -> BufferResult<usize> {
    let Some(bytes) = header
        .storage_bytes(capacity)
        .and_then(Storage::rounded_bytes)
    else {
        tracing::warn!(capacity, "buffer size overflows usize");
        return Err(BufferError::AllocationFailure {
            requested_bytes: usize::MAX,
        });
    };

    if let Some(max_bytes) = config.max_bytes {
        if bytes > max_bytes {
            tracing::warn!(bytes, max_bytes, "buffer allocation over budget");
            return Err(BufferError::AllocationFailure {
                requested_bytes: bytes,
            });
        }
    }

    Ok(bytes)
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("length", &self.header.length)
            .field("capacity", &self.header.capacity)
            .field("element_size", &self.header.element_size)
            .finish_non_exhaustive()
    }
}
