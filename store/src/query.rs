//! Query planner (component 4.4): turns a `(fixed, constraint)` request into
//! a hyperslab plan, reads the dense slab, and sparsifies the non-zero cells
//! into a labeled result table.

use ndmat_core::format::constants::{DIM_LABELS_GROUP, MATRIX_PATH};
use ndmat_core::format::query::{AxisPlan, QueryPlan, RowMajorCells};
use ndmat_core::validate_query;

use crate::backend::Hyperslab;
use crate::boundary;
use crate::error::Result;
use crate::handle::Handle;
use crate::result::{ResultTable, StringResultTable};
use crate::stringarray::read_string_subarray;

/// Run a query against `handle` and return a labeled, sparse result table.
///
/// `fixed[d]` pins dimension `d` to `constraint[d]`; every other dimension
/// contributes a column to the result. Unconstrained core dimensions are
/// pruned against the boundary index before any data is read; a plan with
/// zero volume along any axis returns an empty table without touching
/// `/matrix`.
pub fn fetch_string_values(
    handle: &Handle,
    fixed: &[bool],
    constraint: &[Option<u64>],
) -> Result<StringResultTable> {
    validate_query(fixed, constraint, &handle.sizes)?;

    let rank = handle.rank();
    let mut axes = Vec::with_capacity(rank);
    for d in 0..rank {
        let axis = if fixed[d] {
            AxisPlan {
                offset: constraint[d].expect("validated: fixed dimension carries a constraint"),
                width: 1,
            }
        } else if handle.is_core(d) {
            let (lo, hi) = boundary::core_dim_bounds(handle, d, fixed, constraint)?;
            let lo = lo.max(0) as u64;
            let hi = hi.max(0) as u64;
            AxisPlan {
                offset: lo,
                width: hi.saturating_sub(lo),
            }
        } else {
            AxisPlan {
                offset: 0,
                width: handle.sizes[d],
            }
        };
        axes.push(axis);
    }
    let plan = QueryPlan {
        axes,
        fixed: fixed.to_vec(),
    };

    if plan.is_empty() {
        log::debug!("query pruned to an empty hyperslab, skipping backend read");
        return stringify(handle, &plan, empty_table(&plan));
    }

    let offset: Vec<u64> = plan.axes.iter().map(|a| a.offset).collect();
    let width: Vec<u64> = plan.axes.iter().map(|a| a.width).collect();
    let slab = Hyperslab {
        offset: offset.clone(),
        width: width.clone(),
    };
    let array = handle.backend.read_f64_slice(MATRIX_PATH, &slab)?;

    let unfixed = plan.unfixed_dims();
    let mut coords = Vec::new();
    let mut values = Vec::new();
    for rel in RowMajorCells::new(width.clone()) {
        let index: Vec<usize> = rel.iter().map(|&r| r as usize).collect();
        let value = array[ndarray::IxDyn(&index)];
        if value != 0.0 {
            let abs: Vec<u64> = unfixed.iter().map(|&d| offset[d] + rel[d]).collect();
            coords.push(abs);
            values.push(value);
        }
    }
    log::debug!(
        "query over {} planned cells yielded {} non-zero rows",
        plan.volume(),
        values.len()
    );

    let table = ResultTable {
        dims: unfixed,
        coords,
        values,
    };
    stringify(handle, &plan, table)
}

fn empty_table(plan: &QueryPlan) -> ResultTable {
    ResultTable {
        dims: plan.unfixed_dims(),
        coords: Vec::new(),
        values: Vec::new(),
    }
}

/// Render a numeric result table's coordinates through each column's
/// dim-name and dim-label string-arrays (component 4.7).
fn stringify(handle: &Handle, plan: &QueryPlan, table: ResultTable) -> Result<StringResultTable> {
    let dim_names: Vec<String> = table.dims.iter().map(|&d| handle.names[d].clone()).collect();

    let mut labels_by_column = Vec::with_capacity(table.dims.len());
    for &d in &table.dims {
        let axis = plan.axes[d];
        let labels = read_string_subarray(
            &handle.backend,
            &format!("{DIM_LABELS_GROUP}/{d}"),
            axis.offset,
            axis.width,
        )?;
        labels_by_column.push(labels);
    }

    let mut coords = Vec::with_capacity(table.coords.len());
    for row in &table.coords {
        let mut str_row = Vec::with_capacity(row.len());
        for (k, &abs) in row.iter().enumerate() {
            let offset = plan.axes[table.dims[k]].offset;
            let rel = (abs - offset) as usize;
            str_row.push(labels_by_column[k][rel].clone());
        }
        coords.push(str_row);
    }

    Ok(StringResultTable {
        dim_names,
        dims: table.dims,
        coords,
        values: table.values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ndmat_core::format::schema::DimensionSpec;

    fn two_d_file(path: &str) -> Handle {
        let rows: Vec<String> = vec!["r0".into(), "r1".into(), "r2".into()];
        let cols: Vec<String> = vec!["c0".into(), "c1".into(), "c2".into(), "c3".into()];
        let dims = vec![
            DimensionSpec::new("row", 3, rows),
            DimensionSpec::new("col", 4, cols),
        ];
        crate::schema::create_file(
            path,
            dims,
            None,
            Config {
                big_dim_length: 1000,
                verbose: false,
            },
        )
        .unwrap()
    }

    #[test]
    fn query_over_free_dimensions_returns_stored_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.h5");
        let path = path.to_str().unwrap();
        let handle = two_d_file(path);

        crate::matrix::store_values(&handle, &[vec![1, 2], vec![0, 3]], &[9.5, 4.0]).unwrap();

        let result = fetch_string_values(&handle, &[false, false], &[None, None]).unwrap();
        assert_eq!(result.dim_names, vec!["row".to_string(), "col".to_string()]);
        assert_eq!(result.rows(), 2);
        assert!(result.coords.contains(&vec!["r1".to_string(), "c2".to_string()]));
        assert!(result.coords.contains(&vec!["r0".to_string(), "c3".to_string()]));
    }

    #[test]
    fn fixing_a_dimension_drops_it_from_the_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q2.h5");
        let path = path.to_str().unwrap();
        let handle = two_d_file(path);

        crate::matrix::store_values(&handle, &[vec![1, 2]], &[9.5]).unwrap();

        let result = fetch_string_values(&handle, &[true, false], &[Some(1), None]).unwrap();
        assert_eq!(result.dim_names, vec!["col".to_string()]);
        assert_eq!(result.coords, vec![vec!["c2".to_string()]]);
        assert_eq!(result.values, vec![9.5]);
    }
}
