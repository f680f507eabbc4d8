//! Schema writer (component 4.2): lays down the schema datasets at file
//! creation time.

use ndmat_core::format::constants::{
    BOUNDARIES_GROUP, BOUNDARY_FILL, CORE_RANK_ATTR, DIM_LABELS_GROUP, DIM_NAMES_PATH, MATRIX_PATH,
};
use ndmat_core::format::schema::{reorder_and_classify, validate_schema, DimensionSpec};

use crate::backend::Hdf5Backend;
use crate::config::Config;
use crate::error::Result;
use crate::handle::Handle;
use crate::stringarray::write_string_array;

/// Create a new file, truncating any existing one, and write its full
/// schema: `/dim_names`, `/dim_labels/<d>` for every `d`, `/matrix` (with
/// the `Core dimensions` attribute), and one zero-filled boundary dataset
/// per core dimension under `/boundaries`.
///
/// Returns a writable [`Handle`] whose `names`/`sizes` reflect the
/// reordered, persisted order (component 4.2 step 3).
pub fn create_file(
    path: &str,
    dims: Vec<DimensionSpec>,
    chunk_sizes: Option<Vec<u64>>,
    config: Config,
) -> Result<Handle> {
    validate_schema(&dims, chunk_sizes.as_deref())?;

    let dims = match chunk_sizes {
        Some(chunk_sizes) => dims
            .into_iter()
            .zip(chunk_sizes)
            .map(|(dim, chunk)| dim.with_chunk_size(chunk))
            .collect(),
        None => dims,
    };

    let schema = reorder_and_classify(dims, config.big_dim_length);
    let rank = schema.rank();

    let backend = Hdf5Backend::create(path)?;

    write_string_array(&backend, DIM_NAMES_PATH, &schema.names)?;

    backend.create_group(DIM_LABELS_GROUP)?;
    for (d, labels) in schema.labels.iter().enumerate() {
        write_string_array(&backend, &format!("{DIM_LABELS_GROUP}/{d}"), labels)?;
    }

    backend.create_f64_dataset(MATRIX_PATH, &schema.sizes, &schema.chunk_sizes)?;
    backend.write_scalar_attr_i64(MATRIX_PATH, CORE_RANK_ATTR, schema.core_rank as i64)?;

    if schema.core_rank > 0 {
        backend.create_group(BOUNDARIES_GROUP)?;
        let cols = schema.core_rank - 1;
        for d in (rank - schema.core_rank)..rank {
            let size_d = schema.sizes[d];
            let shape = [size_d, cols as u64, 2];
            backend.create_i64_dataset_filled(
                &format!("{BOUNDARIES_GROUP}/{d}"),
                &shape,
                BOUNDARY_FILL,
            )?;
        }
    }

    log::info!(
        "created ndmat file {path} with rank {rank} and core_rank {}",
        schema.core_rank
    );

    Ok(Handle::new(
        backend,
        schema.names,
        schema.sizes,
        schema.core_rank,
        config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndmat_core::format::schema::DimensionSpec;

    fn dim(name: &str, size: u64, n_labels: u64) -> DimensionSpec {
        let labels = (0..n_labels).map(|i| format!("l{i}")).collect();
        DimensionSpec::new(name, size, labels)
    }

    #[test]
    fn create_file_reorders_and_persists_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.h5");
        let path = path.to_str().unwrap();

        let dims = vec![dim("wide", 5, 5), dim("narrow", 3, 3)];
        let handle = create_file(path, dims, None, Config {
            big_dim_length: 10,
            verbose: false,
        })
        .unwrap();

        assert_eq!(handle.names(), &["narrow".to_string(), "wide".to_string()]);
        assert_eq!(handle.sizes(), &[3, 5]);
        assert_eq!(handle.core_rank(), 0);
    }

    #[test]
    fn create_file_classifies_core_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core.h5");
        let path = path.to_str().unwrap();

        let dims = vec![dim("a", 2000, 2000), dim("b", 2000, 2000)];
        let handle = create_file(path, dims, None, Config {
            big_dim_length: 1000,
            verbose: false,
        })
        .unwrap();

        assert_eq!(handle.core_rank(), 2);
        assert!(handle.is_core(0));
        assert!(handle.is_core(1));
    }

    #[test]
    fn create_file_with_a_single_core_dimension_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single_core.h5");
        let path = path.to_str().unwrap();

        // cols = core_rank - 1 = 0: the degenerate boundary dataset shape
        // this is grounded on.
        let dims = vec![dim("wide", 2000, 2000), dim("narrow", 5, 5)];
        let handle = create_file(path, dims, None, Config {
            big_dim_length: 1000,
            verbose: false,
        })
        .unwrap();

        assert_eq!(handle.core_rank(), 1);
        assert!(handle.is_core(1));
    }
}
