//! Coordinate and constraint bounds checking with no I/O dependencies.
//!
//! Every function here is pure: given a schema's per-dimension extents and a
//! caller-supplied coordinate or constraint vector, decide whether it is in
//! range, without touching a file.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::{CoreError, Result};

/// Validate a single stored coordinate against the per-dimension extents.
/// `coord.len()` must equal `sizes.len()`; every `coord[d]` must be in
/// `[0, sizes[d])`.
pub fn validate_coord(coord: &[u64], sizes: &[u64]) -> Result<()> {
    if coord.len() != sizes.len() {
        return Err(CoreError::RankMismatch);
    }
    for (&c, &size) in coord.iter().zip(sizes) {
        if c >= size {
            return Err(CoreError::CoordinateOutOfRange);
        }
    }
    Ok(())
}

/// Validate an entire batch of coordinates, failing on the first offender.
/// Used to reject a batch before any element is written (component 4.3:
/// a rejected batch must never partially mutate the matrix or boundaries).
pub fn validate_coord_batch(coords: &[Vec<u64>], sizes: &[u64]) -> Result<()> {
    for coord in coords {
        validate_coord(coord, sizes)?;
    }
    Ok(())
}

/// Validate that a batch's coordinate and value counts agree, before either
/// is zipped together for the write (component 4.3).
pub fn validate_batch_lengths(n_coords: usize, n_values: usize) -> Result<()> {
    if n_coords != n_values {
        return Err(CoreError::BatchLengthMismatch);
    }
    Ok(())
}

/// Validate a query's `(fixed, constraint)` pair against the schema: every
/// fixed dimension needs a constraint in range; unfixed dimensions' entries
/// in `constraint` are ignored.
pub fn validate_query(fixed: &[bool], constraint: &[Option<u64>], sizes: &[u64]) -> Result<()> {
    if fixed.len() != sizes.len() || constraint.len() != sizes.len() {
        return Err(CoreError::RankMismatch);
    }
    for (d, (&is_fixed, &value)) in fixed.iter().zip(constraint).enumerate() {
        if is_fixed {
            match value {
                None => return Err(CoreError::FixedDimensionUnconstrained),
                Some(v) if v >= sizes[d] => return Err(CoreError::ConstraintOutOfRange),
                Some(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn coord_in_range_is_valid() {
        assert_eq!(validate_coord(&[1, 2], &[3, 5]), Ok(()));
    }

    #[test]
    fn coord_out_of_range_is_rejected() {
        assert_eq!(
            validate_coord(&[3, 2], &[3, 5]),
            Err(CoreError::CoordinateOutOfRange)
        );
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        assert_eq!(validate_coord(&[1], &[3, 5]), Err(CoreError::RankMismatch));
    }

    #[test]
    fn batch_rejects_on_first_bad_coordinate() {
        let coords = vec![vec![0, 0], vec![9, 9]];
        assert_eq!(
            validate_coord_batch(&coords, &[3, 3]),
            Err(CoreError::CoordinateOutOfRange)
        );
    }

    #[test]
    fn fixed_dimension_requires_constraint() {
        assert_eq!(
            validate_query(&[true], &[None], &[10]),
            Err(CoreError::FixedDimensionUnconstrained)
        );
    }

    #[test]
    fn constraint_out_of_range_is_rejected() {
        assert_eq!(
            validate_query(&[true], &[Some(999)], &[10]),
            Err(CoreError::ConstraintOutOfRange)
        );
    }

    #[test]
    fn unfixed_dimension_ignores_constraint_value() {
        assert_eq!(validate_query(&[false], &[None], &[10]), Ok(()));
    }

    #[test]
    fn batch_length_mismatch_is_rejected() {
        assert_eq!(
            validate_batch_lengths(2, 1),
            Err(CoreError::BatchLengthMismatch)
        );
    }

    #[test]
    fn matching_batch_lengths_are_accepted() {
        assert_eq!(validate_batch_lengths(3, 3), Ok(()));
    }
}
