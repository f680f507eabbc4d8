//! Error type for the `ndmat` public API (component 7: error handling design).
//!
//! Wraps [`ndmat_core::CoreError`] for the pure validation/planning failures
//! and [`hdf5::Error`] for anything the storage backend reports, plus a
//! handful of contextual variants that need more than a bare code.

use ndmat_core::CoreError;
use thiserror::Error;

/// Errors surfaced by every public operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument violates a schema or range invariant.
    #[error("invalid argument: {0}")]
    ArgumentInvalid(#[from] CoreError),

    /// An expected dataset, group, or attribute was missing or malformed.
    /// Carries the specific [`CoreError`] format-corrupt code (`MissingDataset`,
    /// `MissingAttribute`, `UnexpectedShape`, `UnexpectedRank`) rather than a
    /// bare string, so `CoreError::category()` actually classifies it.
    #[error("corrupt file: {0}")]
    FormatCorrupt(CoreError),

    /// The underlying HDF5 library reported a failure.
    #[error("storage backend error: {0}")]
    StorageBackend(#[from] hdf5::Error),

    /// A hyperslab too large to allocate was requested.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(&'static str),
}

/// Result type used throughout the public API.
pub type Result<T> = std::result::Result<T, Error>;
