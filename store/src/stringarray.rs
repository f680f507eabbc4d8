//! I/O for the string-array codec (component 4.1): pushes [`ndmat_core`]'s
//! pure encode/decode buffers through a byte dataset via the backend.

use ndmat_core::format::stringarray::{decode, decode_row, encode};
use ndmat_core::CoreError;

use crate::backend::{Hdf5Backend, Hyperslab};
use crate::error::{Error, Result};

/// Encode `values` and write them as a fresh rank-2 byte dataset at `path`.
pub fn write_string_array(backend: &Hdf5Backend, path: &str, values: &[String]) -> Result<()> {
    let encoded = encode(values);
    let count = values.len() as u64;
    let stride = encoded.stride as u64;
    backend.create_bytes_dataset(path, &[count, stride])?;
    backend.write_bytes_full(path, &[count, stride], &encoded.data)?;
    Ok(())
}

/// Read and decode an entire string-array dataset.
pub fn read_string_array(backend: &Hdf5Backend, path: &str) -> Result<Vec<String>> {
    let (shape, data) = backend.read_bytes_full(path)?;
    if shape.len() != 2 {
        return Err(Error::FormatCorrupt(CoreError::UnexpectedRank));
    }
    let stride = shape[1] as usize;
    Ok(decode(stride, &data)?)
}

/// Read and decode a contiguous sub-range `[offset, offset+count)` of rows
/// out of a string-array dataset, without reading the whole thing.
pub fn read_string_subarray(
    backend: &Hdf5Backend,
    path: &str,
    offset: u64,
    count: u64,
) -> Result<Vec<String>> {
    let shape = backend.dataset_shape(path)?;
    if shape.len() != 2 {
        return Err(Error::FormatCorrupt(CoreError::UnexpectedRank));
    }
    let stride = shape[1];
    if count == 0 {
        return Ok(Vec::new());
    }
    let slab = Hyperslab {
        offset: vec![offset, 0],
        width: vec![count, stride],
    };
    let data = backend.read_bytes_slice(path, &slab)?;
    let mut out = Vec::with_capacity(count as usize);
    for row in data.chunks_exact(stride as usize) {
        out.push(decode_row(row)?);
    }
    Ok(out)
}
