//! Binary-format adapter (component 4.1): a thin contract over the chunked
//! hierarchical file library, realized here on top of the `hdf5` crate.
//!
//! Every other module in this crate is written against [`Hdf5Backend`]'s
//! inherent methods rather than against `hdf5::File`/`Group`/`Dataset`
//! directly, so the rest of the schema/matrix/boundary/query code reads in
//! terms of "create a dataset with this shape and chunking" rather than in
//! terms of HDF5 dataspace/property-list plumbing.

use ndarray::{Array, ArrayD, IxDyn};
use ndmat_core::CoreError;

use crate::error::{Error, Result};

/// A half-open `[offset, offset+width)` hyperslab selection along every axis
/// of a dataset.
#[derive(Debug, Clone)]
pub struct Hyperslab {
    pub offset: Vec<u64>,
    pub width: Vec<u64>,
}

impl Hyperslab {
    fn to_selection(&self) -> hdf5::Selection {
        let slab: Vec<hdf5::SliceOrIndex> = self
            .offset
            .iter()
            .zip(&self.width)
            .map(|(&start, &count)| hdf5::SliceOrIndex::Slice {
                start: start as usize,
                step: 1,
                count: count as usize,
                block: 1,
            })
            .collect();
        hdf5::Hyperslab::from(slab).into()
    }
}

/// An owned, opened HDF5 file backing one `ndmat` handle.
pub struct Hdf5Backend {
    file: hdf5::File,
}

impl Hdf5Backend {
    /// Truncate-create a new file at `path`.
    pub fn create(path: &str) -> Result<Self> {
        Ok(Self {
            file: hdf5::File::create(path)?,
        })
    }

    /// Open an existing file read-only.
    pub fn open(path: &str) -> Result<Self> {
        Ok(Self {
            file: hdf5::File::open(path)?,
        })
    }

    /// Create a group (and any missing intermediate groups) at `path`.
    pub fn create_group(&self, path: &str) -> Result<()> {
        self.file.create_group(path)?;
        Ok(())
    }

    /// Create a chunked, rank-`shape.len()` dataset of `f64` with the given
    /// extents and chunk sizes. No fill value is set: the backend's default
    /// fill (`0.0`) is the "absent" sentinel described in §9.
    pub fn create_f64_dataset(&self, path: &str, shape: &[u64], chunk: &[u64]) -> Result<()> {
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize).collect();
        let chunk: Vec<usize> = chunk.iter().map(|&s| s as usize).collect();
        self.file
            .new_dataset::<f64>()
            .shape(shape)
            .chunk(chunk)
            .create(path)?;
        Ok(())
    }

    /// Create a contiguous (unchunked) rank-3 `int64` dataset with fill value
    /// `-1`. Boundary datasets are never chunked: the second axis has length
    /// `core_rank - 1`, which is legitimately `0` for a schema with a single
    /// core dimension, and HDF5 rejects a zero-length chunk dimension. A
    /// fill value does not require chunking, and the original C
    /// (`create_boundaries_group`) never calls `H5Pset_chunk` on these
    /// datasets either.
    pub fn create_i64_dataset_filled(&self, path: &str, shape: &[u64], fill: i64) -> Result<()> {
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize).collect();
        self.file
            .new_dataset::<i64>()
            .shape(shape)
            .fill_value(fill)
            .create(path)?;
        Ok(())
    }

    /// Create a rank-2 byte dataset (`u8`) of the given shape, used for
    /// string-array encodings.
    pub fn create_bytes_dataset(&self, path: &str, shape: &[u64]) -> Result<()> {
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize).collect();
        self.file
            .new_dataset::<u8>()
            .shape(shape)
            .create(path)?;
        Ok(())
    }

    /// Write a whole, freshly created dataset's contents in one shot.
    pub fn write_bytes_full(&self, path: &str, shape: &[u64], data: &[u8]) -> Result<()> {
        let dataset = self.file.dataset(path)?;
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize).collect();
        let array = ArrayD::from_shape_vec(IxDyn(&shape), data.to_vec())
            .map_err(|_| Error::FormatCorrupt(CoreError::UnexpectedShape))?;
        dataset.write(&array)?;
        Ok(())
    }

    /// Read a whole byte dataset's contents plus its shape.
    pub fn read_bytes_full(&self, path: &str) -> Result<(Vec<u64>, Vec<u8>)> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        let shape: Vec<u64> = dataset.shape().into_iter().map(|d| d as u64).collect();
        let array: ArrayD<u8> = dataset.read_dyn()?;
        let data = array.into_raw_vec();
        Ok((shape, data))
    }

    /// Read a hyperslab of a byte dataset (the string-array sub-read).
    pub fn read_bytes_slice(&self, path: &str, slab: &Hyperslab) -> Result<Vec<u8>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        let array: ArrayD<u8> = dataset.read_slice(slab.to_selection())?;
        Ok(array.into_raw_vec())
    }

    /// Write a batch of scalar `f64` values via element selection: each
    /// `coords[i]` (one coordinate per axis) receives `values[i]`.
    pub fn write_elements_f64(&self, path: &str, coords: &[Vec<u64>], values: &[f64]) -> Result<()> {
        let dataset = self.file.dataset(path)?;
        for (coord, &value) in coords.iter().zip(values) {
            let slab: Vec<hdf5::SliceOrIndex> = coord
                .iter()
                .map(|&i| hdf5::SliceOrIndex::Index(i as usize))
                .collect();
            let selection: hdf5::Selection = hdf5::Hyperslab::from(slab).into();
            let scalar = Array::from_elem(IxDyn(&[]), value);
            dataset.write_slice(&scalar, selection)?;
        }
        Ok(())
    }

    /// Read a dense `f64` hyperslab.
    pub fn read_f64_slice(&self, path: &str, slab: &Hyperslab) -> Result<ArrayD<f64>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        Ok(dataset.read_slice(slab.to_selection())?)
    }

    /// Read an entire `int64` boundary dataset.
    pub fn read_i64_full(&self, path: &str) -> Result<ArrayD<i64>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        Ok(dataset.read_dyn()?)
    }

    /// Overwrite an entire `int64` boundary dataset.
    pub fn write_i64_full(&self, path: &str, array: &ArrayD<i64>) -> Result<()> {
        let dataset = self.file.dataset(path)?;
        dataset.write(array)?;
        Ok(())
    }

    /// Read a single row `[row, :, :]` of a rank-3 `int64` boundary dataset,
    /// flattened to `cols * 2` entries in row-major order.
    pub fn read_i64_row(&self, path: &str, row: u64, cols: u64) -> Result<Vec<i64>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        let slab = Hyperslab {
            offset: vec![row, 0, 0],
            width: vec![1, cols, 2],
        };
        let array: ArrayD<i64> = dataset.read_slice(slab.to_selection())?;
        Ok(array.into_raw_vec())
    }

    /// Write a scalar integer attribute on a dataset.
    pub fn write_scalar_attr_i64(&self, dataset_path: &str, attr_name: &str, value: i64) -> Result<()> {
        let dataset = self.file.dataset(dataset_path)?;
        let attr = dataset.new_attr::<i64>().create(attr_name)?;
        attr.write_scalar(&value)?;
        Ok(())
    }

    /// Read a scalar integer attribute from a dataset.
    pub fn read_scalar_attr_i64(&self, dataset_path: &str, attr_name: &str) -> Result<i64> {
        let dataset = self
            .file
            .dataset(dataset_path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        let attr = dataset
            .attr(attr_name)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingAttribute))?;
        Ok(attr.read_scalar()?)
    }

    /// Extent of a named dataset's axis `axis`.
    pub fn dataset_shape(&self, path: &str) -> Result<Vec<u64>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        Ok(dataset.shape().into_iter().map(|d| d as u64).collect())
    }

    /// `true` if a dataset exists at `path`.
    pub fn has_dataset(&self, path: &str) -> bool {
        self.file.dataset(path).is_ok()
    }

    /// The chunk shape a dataset was created with, if it is chunked.
    pub fn chunk_shape(&self, path: &str) -> Result<Option<Vec<u64>>> {
        let dataset = self
            .file
            .dataset(path)
            .map_err(|_| Error::FormatCorrupt(CoreError::MissingDataset))?;
        Ok(dataset.chunk().map(|c| c.into_iter().map(|d| d as u64).collect()))
    }
}
