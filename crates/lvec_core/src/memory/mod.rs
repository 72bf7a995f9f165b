//! # Memory Management
//!
//! The buffer and the pieces it is built from.
//!
//! ## Design Philosophy
//!
//! - Metadata lives in a [`Header`] next to the storage, never inside it
//! - Storage is raw, aligned bytes; elements are never interpreted
//! - Every reallocation either fully succeeds or leaves everything as it was

mod buffer;
mod growth;
mod header;
mod storage;

pub use buffer::Buffer;
pub use header::Header;
pub use storage::STORAGE_ALIGN;
