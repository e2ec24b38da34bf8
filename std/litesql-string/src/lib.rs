//!
//! litesql-string - Core Dynamic Byte-String Type
//!
//! This crate provides the fundamental string type shared across the litesql
//! toolkit:
//!
//! - `ByteString` for owned, heap-allocated, null-terminated byte sequences
//! - `AllocError` for allocation-failure reporting
//!
//! Content is raw bytes terminated by a zero byte; no Unicode handling is
//! performed. Each buffer has exactly one owner and is freed when that owner
//! drops it.
//!

pub mod buffer;

pub use buffer::*;
