//! # Typed Arrays
//!
//! [`LVec<T>`] wraps a [`Buffer`] whose element size is `size_of::<T>()`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use bytemuck::Pod;
use lvec_core::{Buffer, BufferConfig, BufferError, BufferResult};

/// A growable array of `T`, stored in a type-erased [`Buffer`].
///
/// # Type Parameters
///
/// * `T` - Plain-old-data element type with alignment of at most
///   [`STORAGE_ALIGN`](lvec_core::STORAGE_ALIGN)
///
/// # Example
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lvec::LVec;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
/// #[repr(C)]
/// struct Vector2 {
///     x: i32,
///     y: i32,
/// }
///
/// let mut vecs: LVec<Vector2> = LVec::new()?;
/// vecs.push(Vector2 { x: 0, y: 1 })?;
/// vecs.push(Vector2 { x: 3, y: 6 })?;
/// assert_eq!(vecs[1].y, 6);
/// # Ok::<(), lvec::BufferError>(())
/// ```
pub struct LVec<T: Pod> {
    buffer: Buffer,
    _phantom: PhantomData<T>,
}

impl<T: Pod> LVec<T> {
    /// Creates an empty array with the default configuration.
    ///
    /// # Errors
    ///
    /// [`BufferError::ZeroElementSize`] for zero-sized `T`,
    /// [`BufferError::UnsupportedAlignment`] for over-aligned `T`,
    /// [`BufferError::AllocationFailure`] if storage cannot be acquired.
    pub fn new() -> BufferResult<Self> {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty array with the given configuration.
    ///
    /// # Errors
    ///
    /// As [`LVec::new`], plus [`BufferError::InvalidConfig`].
    pub fn with_config(config: BufferConfig) -> BufferResult<Self> {
        let buffer = Buffer::with_config(std::mem::size_of::<T>(), config)?;
        Self::from_buffer(buffer)
    }

    /// Adopts an existing buffer whose elements are `T`.
    ///
    /// # Errors
    ///
    /// [`BufferError::ElementSizeMismatch`] or
    /// [`BufferError::UnsupportedAlignment`] if `T` does not fit the buffer.
    pub fn from_buffer(buffer: Buffer) -> BufferResult<Self> {
        if let Err(err) = buffer.check_view::<T>() {
            tracing::debug!(%err, "buffer rejected for typed view");
            return Err(err);
        }
        Ok(Self {
            buffer,
            _phantom: PhantomData,
        })
    }

    /// Gives up the type and returns the underlying buffer.
    #[must_use]
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }

    /// The underlying buffer.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Releases the array's storage.
    pub fn free(self) {
        self.buffer.free();
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.length()
    }

    /// Number of element slots currently allocated.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] if growth fails (array unchanged).
    pub fn push(&mut self, value: T) -> BufferResult<()> {
        self.buffer.append(bytemuck::bytes_of(&value))
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` must be less than `len()`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] or [`BufferError::AllocationFailure`].
    pub fn insert(&mut self, value: T, index: usize) -> BufferResult<()> {
        self.buffer.insert(bytemuck::bytes_of(&value), index)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> BufferResult<T> {
        let value = self.get(index).copied().ok_or(BufferError::OutOfBounds {
            index,
            length: self.len(),
        })?;
        self.buffer.remove(index)?;
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the array is empty.
    pub fn pop(&mut self) -> BufferResult<T> {
        let value = self
            .as_slice()
            .last()
            .copied()
            .ok_or(BufferError::OutOfBounds {
                index: 0,
                length: 0,
            })?;
        self.buffer.remove_last()?;
        Ok(value)
    }

    /// Ensures room for at least `desired_capacity` elements.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] (array unchanged).
    pub fn reserve_minimum(&mut self, desired_capacity: usize) -> BufferResult<()> {
        self.buffer.reserve_minimum(desired_capacity)
    }

    /// Shrinks capacity to the length, never below the minimum floor.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] (array unchanged).
    pub fn shrink_to_fit(&mut self) -> BufferResult<()> {
        self.buffer.shrink_to_fit()
    }

    /// Removes every element; capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The element at `index`, mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// All elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Layout was checked when the array was built.
        bytemuck::cast_slice(self.buffer.as_bytes())
    }

    /// All elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.buffer.as_bytes_mut())
    }
}

impl<T: Pod> Index<usize> for LVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Pod> IndexMut<usize> for LVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for LVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
