//! # LVEC Core
//!
//! A type-erased, growable, contiguous buffer:
//! - The element size is stored once, at creation
//! - Elements are opaque bytes, moved with bytewise copies only
//! - Growth is all-or-nothing: a failed reallocation changes nothing
//!
//! ## Layout
//!
//! ```text
//! Buffer
//! ├── Header  { length, capacity, element_size }
//! └── Storage [ live: length * element_size | slack ... ]
//!             ^ every element view starts here
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lvec_core::Buffer;
//!
//! let mut buffer = Buffer::new(4)?;
//! buffer.append(&10u32.to_ne_bytes())?;
//! buffer.append(&30u32.to_ne_bytes())?;
//! buffer.insert(&20u32.to_ne_bytes(), 1)?;
//!
//! assert_eq!(buffer.view::<u32>()?, &[10, 20, 30]);
//! # Ok::<(), lvec_core::BufferError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;

pub use config::BufferConfig;
pub use error::{BufferError, BufferResult, Status};
pub use memory::{Buffer, Header, STORAGE_ALIGN};
