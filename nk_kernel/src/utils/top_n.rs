//! Top-n masking: keep the `top_n` largest values of a row, zero the rest.
//!
//! Elements are ordered by `(value, column)` under `f64::total_cmp`, so equal
//! values at the boundary are dropped lowest column first. Both helpers below
//! produce the same partition for the same row.

use std::cmp::Ordering;

#[inline]
fn by_value_then_index(row: &[f64], a: usize, b: usize) -> Ordering {
    row[a].total_cmp(&row[b]).then(a.cmp(&b))
}

/// Full sort of the column indices, then zero the first `len - top_n`.
pub fn mask_smallest_sorted(row: &mut [f64], top_n: usize) {
    let num_to_delete = row.len().saturating_sub(top_n);
    if num_to_delete == 0 {
        return;
    }
    let values: &[f64] = row;
    let mut index: Vec<usize> = (0..values.len()).collect();
    index.sort_by(|&a, &b| by_value_then_index(values, a, b));
    index.truncate(num_to_delete);
    for j in index {
        row[j] = 0.0;
    }
}

/// Linear-time selection of the `len - top_n` smallest elements.
pub fn mask_smallest_select(row: &mut [f64], top_n: usize) {
    let num_to_delete = row.len().saturating_sub(top_n);
    if num_to_delete == 0 {
        return;
    }
    if num_to_delete == row.len() {
        row.fill(0.0);
        return;
    }
    let values: &[f64] = row;
    let mut index: Vec<usize> = (0..values.len()).collect();
    index.select_nth_unstable_by(num_to_delete, |&a, &b| by_value_then_index(values, a, b));
    index.truncate(num_to_delete);
    for j in index {
        row[j] = 0.0;
    }
}
