//! Layout constants for the file format described in the external interfaces.

/// Default core/free classification threshold: a dimension with extent
/// strictly greater than this becomes "core".
pub const DEFAULT_BIG_DIM_LENGTH: u64 = 1000;

/// Default chunk size applied to a dimension when the caller does not
/// supply one: `min(size_d, DEFAULT_CHUNK_CAP)`.
pub const DEFAULT_CHUNK_CAP: u64 = 100;

/// Fill value for boundary datasets: an untouched slot reads back as this.
pub const BOUNDARY_FILL: i64 = -1;

/// Dataset path for the reordered dimension-name string-array.
pub const DIM_NAMES_PATH: &str = "dim_names";

/// Group path holding one child dataset per dimension's label vocabulary.
pub const DIM_LABELS_GROUP: &str = "dim_labels";

/// Dataset path for the dense chunked tensor of stored values.
pub const MATRIX_PATH: &str = "matrix";

/// Scalar attribute on `/matrix` holding `core_rank`.
pub const CORE_RANK_ATTR: &str = "Core dimensions";

/// Group path holding one boundary dataset per core dimension.
pub const BOUNDARIES_GROUP: &str = "boundaries";
