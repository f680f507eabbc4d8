//! Pure layout definitions: constants, schema reordering, the string-array
//! codec, boundary-index math, and query planning. No I/O; the store crate
//! wires these onto an actual chunked hierarchical file.

pub mod boundary;
pub mod constants;
pub mod query;
pub mod schema;
pub mod stringarray;

pub use boundary::{core_position, intersect_bounds, slot_index, BoundaryInterval};
pub use query::{AxisPlan, QueryPlan, RowMajorCells};
pub use schema::{reorder_and_classify, validate_schema, DimensionSpec, ReorderedSchema};
pub use stringarray::{decode, decode_row, encode, EncodedStrings};
