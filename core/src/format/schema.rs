//! Dimension reordering and core/free classification (component 4.2).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{CoreError, Result};
use crate::format::constants::DEFAULT_CHUNK_CAP;

/// One dimension of a schema, as supplied by the caller before reordering.
#[derive(Debug, Clone)]
pub struct DimensionSpec {
    pub name: String,
    pub size: u64,
    pub labels: Vec<String>,
    pub chunk_size: Option<u64>,
}

impl DimensionSpec {
    pub fn new(name: impl Into<String>, size: u64, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            size,
            labels,
            chunk_size: None,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }
}

/// A schema after validation, default chunk sizes, and reordering (but before
/// core/free classification is recorded into it).
#[derive(Debug, Clone)]
pub struct ReorderedSchema {
    pub names: Vec<String>,
    pub sizes: Vec<u64>,
    pub labels: Vec<Vec<String>>,
    pub chunk_sizes: Vec<u64>,
    pub core_rank: usize,
}

impl ReorderedSchema {
    /// Rank of the schema.
    pub fn rank(&self) -> usize {
        self.sizes.len()
    }

    /// A dimension `d` is core iff `d >= rank - core_rank`.
    pub fn is_core(&self, d: usize) -> bool {
        d >= self.rank() - self.core_rank
    }
}

/// Validate a caller-supplied schema before any reordering or I/O.
///
/// Rejects: empty rank, a zero-extent dimension, a label vocabulary whose
/// length does not equal its dimension's extent, and a chunk-size array
/// whose length does not equal the rank.
pub fn validate_schema(dims: &[DimensionSpec], chunk_sizes: Option<&[u64]>) -> Result<()> {
    if dims.is_empty() {
        return Err(CoreError::RankMismatch);
    }
    for dim in dims {
        if dim.size == 0 {
            return Err(CoreError::DimensionExtentZero);
        }
        if dim.labels.len() as u64 != dim.size {
            return Err(CoreError::LabelCountMismatch);
        }
    }
    if let Some(chunk_sizes) = chunk_sizes {
        if chunk_sizes.len() != dims.len() {
            return Err(CoreError::ChunkSizeCountMismatch);
        }
    }
    Ok(())
}

/// Reorder dimensions by `(size ascending, original index ascending)` — a
/// single stable sort — and classify the high `core_rank` positions as core.
///
/// Caller-supplied chunk sizes (if any) are carried along with the dimension
/// they were attached to, so they land on the same dimension after
/// reordering rather than being applied by post-reorder position (the
/// corrective measure adopted for the chunk-size reordering question).
pub fn reorder_and_classify(
    dims: Vec<DimensionSpec>,
    big_dim_length: u64,
) -> ReorderedSchema {
    let rank = dims.len();

    let mut indexed: Vec<(usize, DimensionSpec)> = dims.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| a.size.cmp(&b.size).then(ia.cmp(ib)));

    let core_rank = indexed
        .iter()
        .filter(|(_, d)| d.size > big_dim_length)
        .count();

    let mut names = Vec::with_capacity(rank);
    let mut sizes = Vec::with_capacity(rank);
    let mut labels = Vec::with_capacity(rank);
    let mut chunk_sizes = Vec::with_capacity(rank);

    for (_, dim) in indexed {
        let chunk = dim
            .chunk_size
            .unwrap_or_else(|| dim.size.min(DEFAULT_CHUNK_CAP));
        names.push(dim.name);
        sizes.push(dim.size);
        labels.push(dim.labels);
        chunk_sizes.push(chunk);
    }

    ReorderedSchema {
        names,
        sizes,
        labels,
        chunk_sizes,
        core_rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn dim(name: &str, size: u64, n_labels: u64) -> DimensionSpec {
        let labels = (0..n_labels).map(|i| alloc::format!("l{i}")).collect();
        DimensionSpec::new(name, size, labels)
    }

    #[test]
    fn stable_sort_by_size_then_index() {
        let dims = vec![dim("a", 5, 5), dim("b", 3, 3), dim("c", 3, 3)];
        let schema = reorder_and_classify(dims, 10);
        assert_eq!(schema.names, vec!["b", "c", "a"]);
        assert_eq!(schema.sizes, vec![3, 3, 5]);
    }

    #[test]
    fn core_rank_counts_big_dims() {
        let dims = vec![dim("a", 2000, 2000), dim("b", 2000, 2000), dim("c", 5, 5)];
        let schema = reorder_and_classify(dims, 1000);
        assert_eq!(schema.core_rank, 2);
        assert!(schema.is_core(2));
        assert!(schema.is_core(1));
        assert!(!schema.is_core(0));
    }

    #[test]
    fn chunk_size_follows_its_dimension_through_reorder() {
        let dims = vec![
            dim("a", 5, 5).with_chunk_size(5),
            dim("b", 3, 3).with_chunk_size(2),
        ];
        let schema = reorder_and_classify(dims, 10);
        assert_eq!(schema.names, vec!["b", "a"]);
        assert_eq!(schema.chunk_sizes, vec![2, 5]);
    }

    #[test]
    fn default_chunk_size_is_capped_at_100() {
        let dims = vec![dim("a", 500, 500)];
        let schema = reorder_and_classify(dims, 1000);
        assert_eq!(schema.chunk_sizes, vec![100]);
    }

    #[test]
    fn validate_rejects_zero_extent() {
        let dims = vec![DimensionSpec::new("a", 0, vec![])];
        assert_eq!(
            validate_schema(&dims, None),
            Err(CoreError::DimensionExtentZero)
        );
    }

    #[test]
    fn validate_rejects_label_count_mismatch() {
        let dims = vec![DimensionSpec::new("a", 3, vec!["x".into()])];
        assert_eq!(
            validate_schema(&dims, None),
            Err(CoreError::LabelCountMismatch)
        );
    }
}
