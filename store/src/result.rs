//! Result table (component 4.6) and its stringified form (component 4.7).

/// A sparse query result with numeric coordinates along the unfixed
/// dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    /// Which original dimension each column corresponds to.
    pub dims: Vec<usize>,
    /// One row per non-zero cell kept; each row has `dims.len()` entries,
    /// one absolute coordinate per unfixed dimension.
    pub coords: Vec<Vec<u64>>,
    /// The stored value at each row, in the same order as `coords`.
    pub values: Vec<f64>,
}

impl ResultTable {
    pub fn columns(&self) -> usize {
        self.dims.len()
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }
}

/// The labeled form of a [`ResultTable`]: coordinates rendered through the
/// dim-name and dim-label string-arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct StringResultTable {
    /// Name of the dimension backing each column.
    pub dim_names: Vec<String>,
    /// Which original dimension each column corresponds to.
    pub dims: Vec<usize>,
    /// One row per kept cell; each row has `dim_names.len()` string labels.
    pub coords: Vec<Vec<String>>,
    /// The stored value at each row, in the same order as `coords`.
    pub values: Vec<f64>,
}

impl StringResultTable {
    pub fn columns(&self) -> usize {
        self.dim_names.len()
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }
}

/// Release a string result table. Ordinary `Drop` already frees everything
/// a `StringResultTable` owns; this consuming function exists only so code
/// translated from the external-interface contract has something to call.
pub fn destroy_string_result_table(_table: StringResultTable) {}
