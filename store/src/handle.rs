//! The file handle returned by `create_file`/`open_file`: the schema cached
//! in memory plus the backend needed to reach the rest of the file.

use ndmat_core::format::constants::{CORE_RANK_ATTR, MATRIX_PATH};
use ndmat_core::CoreError;

use crate::backend::Hdf5Backend;
use crate::config::Config;
use crate::error::Result;

/// An open `ndmat` file. Returned by `create_file` (writable) and
/// `open_file` (read-only); `close_file` consumes it, matching the
/// compatibility surface of the external interface, though the file is
/// released on drop regardless.
pub struct Handle {
    pub(crate) backend: Hdf5Backend,
    pub(crate) names: Vec<String>,
    pub(crate) sizes: Vec<u64>,
    pub(crate) core_rank: usize,
    pub(crate) config: Config,
}

impl Handle {
    pub(crate) fn new(
        backend: Hdf5Backend,
        names: Vec<String>,
        sizes: Vec<u64>,
        core_rank: usize,
        config: Config,
    ) -> Self {
        Self {
            backend,
            names,
            sizes,
            core_rank,
            config,
        }
    }

    /// Rebuild a handle for a file opened read-only: reads the schema
    /// (`/dim_names`' count, `/matrix`'s per-axis extents, and the
    /// `Core dimensions` attribute) back from disk.
    pub(crate) fn open(backend: Hdf5Backend, config: Config) -> Result<Self> {
        let names = crate::stringarray::read_string_array(
            &backend,
            ndmat_core::format::constants::DIM_NAMES_PATH,
        )?;
        let sizes = backend.dataset_shape(MATRIX_PATH)?;
        if names.len() != sizes.len() {
            return Err(crate::error::Error::FormatCorrupt(CoreError::UnexpectedRank));
        }
        let core_rank = backend.read_scalar_attr_i64(MATRIX_PATH, CORE_RANK_ATTR)? as usize;
        if core_rank > sizes.len() {
            return Err(crate::error::Error::FormatCorrupt(CoreError::UnexpectedShape));
        }
        Ok(Self::new(backend, names, sizes, core_rank, config))
    }

    /// Rank of the schema.
    pub fn rank(&self) -> usize {
        self.sizes.len()
    }

    /// `true` iff dimension `d` is core (occupies the high `core_rank`
    /// positions after reordering).
    pub fn is_core(&self, d: usize) -> bool {
        d >= self.rank() - self.core_rank
    }

    /// Reordered dimension names, in persisted order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Reordered dimension extents, in persisted order.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Number of core dimensions.
    pub fn core_rank(&self) -> usize {
        self.core_rank
    }

    /// The chunk shape `/matrix` was created with, per axis in persisted
    /// (reordered) order. Exposed for introspection/testing of the
    /// chunk-size reordering behavior (§9 open question 2).
    pub fn matrix_chunk_shape(&self) -> Result<Vec<u64>> {
        Ok(self
            .backend
            .chunk_shape(MATRIX_PATH)?
            .unwrap_or_else(|| self.sizes.clone()))
    }
}
