#![no_std]

//! ndmat-core - pure schema, codec, boundary-index, and query-planning math
//! for the ndmat sparse multi-dimensional matrix store.
//!
//! This crate has no I/O and no dependency on any particular chunked
//! hierarchical file backend; it is the arithmetic that the `ndmat` crate
//! wires onto `hdf5`.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod format;
#[cfg(feature = "alloc")]
pub mod validation;

pub use error::{CoreError, ErrorCategory, Result};
#[cfg(feature = "alloc")]
pub use format::*;
#[cfg(feature = "alloc")]
pub use validation::{validate_batch_lengths, validate_coord, validate_coord_batch, validate_query};
