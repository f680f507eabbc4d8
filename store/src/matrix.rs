//! Matrix store (component 4.3): writes a batch of `(coord, value)` tuples
//! into `/matrix` and delegates to the boundary index.

use ndmat_core::format::constants::MATRIX_PATH;
use ndmat_core::{validate_batch_lengths, validate_coord_batch};

use crate::boundary;
use crate::error::Result;
use crate::handle::Handle;

/// Store a batch of `(coord, value)` pairs. Every coordinate is validated
/// against the schema before any write is issued, so a rejected batch never
/// partially mutates `/matrix` or `/boundaries`. If the same coordinate
/// appears twice (within this batch or across calls), the last write wins.
pub fn store_values(handle: &Handle, coords: &[Vec<u64>], values: &[f64]) -> Result<()> {
    validate_batch_lengths(coords.len(), values.len())?;
    validate_coord_batch(coords, &handle.sizes)?;

    handle.backend.write_elements_f64(MATRIX_PATH, coords, values)?;
    log::debug!("wrote {} values into {MATRIX_PATH}", coords.len());

    boundary::update_boundaries(handle, coords)?;

    Ok(())
}
