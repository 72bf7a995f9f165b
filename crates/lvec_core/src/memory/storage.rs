//! # Aligned Byte Storage
//!
//! Raw element storage backed by 16-byte blocks, so typed views of any
//! `Pod` type up to that alignment can be taken in place.

use std::collections::TryReserveError;

use bytemuck::{Pod, Zeroable};

/// Alignment guaranteed for the first byte of storage.
pub const STORAGE_ALIGN: usize = std::mem::align_of::<Block>();

const BLOCK_SIZE: usize = std::mem::size_of::<Block>();

/// Unit of storage. Only ever read through byte casts.
#[allow(dead_code)]
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C, align(16))]
struct Block([u8; 16]);

/// Contiguous, aligned byte region.
///
/// Holds at least the requested number of bytes, rounded up to whole
/// blocks. Resizing is fallible and leaves the old region untouched on
/// failure.
pub(crate) struct Storage {
    blocks: Vec<Block>,
}

impl Storage {
    /// Allocates a zeroed region of at least `bytes` bytes.
    pub(crate) fn try_with_bytes(bytes: usize) -> Result<Self, TryReserveError> {
        let mut storage = Self { blocks: Vec::new() };
        storage.try_resize(bytes)?;
        Ok(storage)
    }

    /// Resizes the region to hold `bytes` bytes.
    ///
    /// Bytes below the new size are preserved. On error nothing changes.
    pub(crate) fn try_resize(&mut self, bytes: usize) -> Result<(), TryReserveError> {
        let needed = bytes.div_ceil(BLOCK_SIZE);
        let current = self.blocks.len();

        if needed > current {
            self.blocks.try_reserve_exact(needed - current)?;
            self.blocks.resize(needed, Block::zeroed());
        } else if needed < current {
            // Copy into a fresh region; `Vec::shrink_to_fit` aborts on failure.
            let mut smaller = Vec::new();
            smaller.try_reserve_exact(needed)?;
            smaller.extend_from_slice(&self.blocks[..needed]);
            self.blocks = smaller;
        }
        Ok(())
    }

    /// Bytes a region of `bytes` bytes actually occupies, or `None` on
    /// overflow.
    #[inline]
    pub(crate) fn rounded_bytes(bytes: usize) -> Option<usize> {
        bytes.div_ceil(BLOCK_SIZE).checked_mul(BLOCK_SIZE)
    }

    /// Bytes actually held (a whole number of blocks).
    #[inline]
    pub(crate) fn allocated_bytes(&self) -> usize {
        self.blocks.len() * BLOCK_SIZE
    }

    /// Address of the first byte, for relocation tracking only.
    #[inline]
    pub(crate) fn base_addr(&self) -> usize {
        self.blocks.as_ptr() as usize
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.blocks)
    }
}
