//! ndmat - sparse, labeled multi-dimensional matrix store on top of a
//! chunked hierarchical binary file format.
//!
//! A matrix is created once with a fixed set of named, labeled dimensions
//! (`create_file`), filled incrementally with `(coordinate, value)` pairs
//! (`store_values`), and queried by fixing a subset of dimensions and
//! reading back every non-zero cell over the rest (`fetch_string_values`).
//! Dimensions wide enough to cross [`Config::big_dim_length`] are tracked by
//! a boundary index that prunes large queries before any hyperslab is read;
//! narrow dimensions are read in full.

pub mod backend;
pub mod boundary;
pub mod config;
pub mod error;
pub mod handle;
pub mod matrix;
pub mod query;
pub mod result;
pub mod schema;
pub mod stringarray;

pub use config::{set_big_dim_length, set_hdf5_log, Config};
pub use error::{Error, Result};
pub use handle::Handle;
pub use ndmat_core::format::schema::DimensionSpec;
pub use result::{destroy_string_result_table, ResultTable, StringResultTable};

use backend::Hdf5Backend;

/// Create a new matrix file at `path`, truncating any existing file.
///
/// `dims` describes each dimension's name, extent, and label vocabulary, in
/// caller order; `chunk_sizes[d]`, if given, overrides the default chunk
/// extent for dimension `d` (also in caller order, before reordering).
/// Dimensions are reordered by ascending extent and the widest
/// [`Config::big_dim_length`] of them classified as core; the returned
/// handle's `names()`/`sizes()` reflect that persisted order, not the
/// caller's original order.
pub fn create_file(
    path: &str,
    dims: Vec<DimensionSpec>,
    chunk_sizes: Option<Vec<u64>>,
    config: Config,
) -> Result<Handle> {
    schema::create_file(path, dims, chunk_sizes, config)
}

/// Open an existing matrix file read-only, reconstructing its schema from
/// the persisted `/dim_names`, `/matrix` shape, and `Core dimensions`
/// attribute.
pub fn open_file(path: &str, config: Config) -> Result<Handle> {
    let backend = Hdf5Backend::open(path)?;
    Handle::open(backend, config)
}

/// Store a batch of `(coordinate, value)` pairs into an open handle. The
/// whole batch is validated before any write is issued: a rejected batch
/// never partially mutates `/matrix` or `/boundaries`. Writing zero leaves
/// the cell indistinguishable from one that was never stored.
pub fn store_values(handle: &Handle, coords: &[Vec<u64>], values: &[f64]) -> Result<()> {
    matrix::store_values(handle, coords, values)
}

/// Query a matrix, fixing `fixed[d] = true` dimensions to `constraint[d]`
/// and returning every non-zero cell over the remaining dimensions, with
/// coordinates rendered through each column's label vocabulary.
pub fn fetch_string_values(
    handle: &Handle,
    fixed: &[bool],
    constraint: &[Option<u64>],
) -> Result<StringResultTable> {
    query::fetch_string_values(handle, fixed, constraint)
}

/// Close a handle. Ordinary `Drop` already releases the backing file; this
/// consuming function exists so code translated from the external-interface
/// contract, which scopes file handles explicitly, has something to call.
pub fn close_file(_handle: Handle) {}
