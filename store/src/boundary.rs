//! Boundary index (component 4.5): read-modify-write update from a stored
//! batch, and the bound lookup consulted by the query planner.
//!
//! Widening must be monotone across calls, so every affected boundary
//! dataset is read back from the file in full, widened in memory against
//! the new batch, and written back in full — recomputing from zero on every
//! call (as a literal reading of a `calloc`-based scratch buffer in the
//! implementation this was distilled from might suggest) would silently
//! discard boundaries recorded by earlier `store_values` calls.

use ndmat_core::format::boundary::{core_position, intersect_bounds, slot_index, BoundaryInterval};
use ndmat_core::format::constants::BOUNDARIES_GROUP;

use crate::error::Result;
use crate::handle::Handle;

/// Widen every core dimension's boundary dataset to account for a newly
/// stored batch of coordinates.
pub fn update_boundaries(handle: &Handle, coords: &[Vec<u64>]) -> Result<()> {
    let rank = handle.rank();
    let core_rank = handle.core_rank;
    if core_rank == 0 || coords.is_empty() {
        return Ok(());
    }
    let first_core = rank - core_rank;

    for d in first_core..rank {
        let path = format!("{BOUNDARIES_GROUP}/{d}");
        let mut array = handle.backend.read_i64_full(&path)?;
        let c_d = core_position(d, rank, core_rank);

        for coord in coords {
            let i = coord[d] as usize;
            for d2 in first_core..rank {
                if d2 == d {
                    continue;
                }
                let c_d2 = core_position(d2, rank, core_rank);
                let k = slot_index(c_d, c_d2);
                let j = coord[d2] as i64;

                let mut interval = BoundaryInterval {
                    lo: array[[i, k, 0]],
                    hi: array[[i, k, 1]],
                };
                interval.widen(j);
                array[[i, k, 0]] = interval.lo;
                array[[i, k, 1]] = interval.hi;
            }
        }

        handle.backend.write_i64_full(&path, &array)?;
        log::trace!("widened boundary dataset {path} for batch of {} points", coords.len());
    }

    Ok(())
}

/// Compute `(lower_bound, upper_bound)` for unconstrained core dimension
/// `d`, by intersecting the boundary intervals recorded against every other
/// fixed core dimension (component 4.5, query step).
pub fn core_dim_bounds(
    handle: &Handle,
    d: usize,
    fixed: &[bool],
    constraint: &[Option<u64>],
) -> Result<(i64, i64)> {
    let rank = handle.rank();
    let core_rank = handle.core_rank;
    let first_core = rank - core_rank;
    let c_d = core_position(d, rank, core_rank);
    let cols = (core_rank - 1) as u64;

    let mut observed = Vec::new();
    for d2 in first_core..rank {
        if d2 == d || !fixed[d2] {
            continue;
        }
        let value = constraint[d2].expect("fixed dimension must carry a constraint");
        let c_d2 = core_position(d2, rank, core_rank);
        let slot = slot_index(c_d2, c_d);

        let path = format!("{BOUNDARIES_GROUP}/{d2}");
        let row = handle.backend.read_i64_row(&path, value, cols)?;
        let lo = row[slot * 2];
        let hi = row[slot * 2 + 1];
        observed.push(BoundaryInterval { lo, hi });
    }

    Ok(intersect_bounds(handle.sizes[d], observed.into_iter()))
}
