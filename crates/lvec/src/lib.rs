//! # LVEC
//!
//! Generic dynamic arrays built on a type-erased buffer.
//!
//! [`LVec<T>`] infers the element size from `T` and hands values to the
//! byte-oriented [`Buffer`] as plain bytes. Structs and primitives use the
//! same calls; there is no separate "aggregate" API.
//!
//! ## Example
//!
//! ```rust
//! use lvec::LVec;
//!
//! let mut nums: LVec<i32> = LVec::new()?;
//! nums.push(10)?;
//! nums.push(20)?;
//! nums.insert(15, 1)?;
//!
//! for i in 0..nums.len() {
//!     println!("{}", nums[i]);
//! }
//! assert_eq!(nums.as_slice(), &[10, 15, 20]);
//! # Ok::<(), lvec::BufferError>(())
//! ```
//!
//! Element types must be [`bytemuck::Pod`]: the buffer only ever copies
//! bytes and never runs destructors.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

mod typed;

pub use lvec_core::{
    Buffer, BufferConfig, BufferError, BufferResult, Header, Status, STORAGE_ALIGN,
};
pub use typed::LVec;
