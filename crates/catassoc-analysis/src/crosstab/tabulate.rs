//! Cross-tabulation of two aligned categorical columns.

use catassoc_core::errors::CrosstabError;
use catassoc_core::types::collections::FxHashMap;
use catassoc_core::CategoricalColumn;

use super::table::ContingencyTable;

/// Count each combination of levels over rows where both values are present.
///
/// Rows with a missing value in either column are skipped. Only levels that
/// occur in the remaining rows become table rows/columns, so no marginal is
/// zero. Levels are ordered lexicographically by label.
pub fn crosstab(
    left: &CategoricalColumn,
    right: &CategoricalColumn,
) -> Result<ContingencyTable, CrosstabError> {
    if left.len() != right.len() {
        return Err(CrosstabError::LengthMismatch {
            left: left.name().to_string(),
            left_len: left.len(),
            right: right.name().to_string(),
            right_len: right.len(),
        });
    }

    let mut pair_counts: FxHashMap<(u32, u32), u64> = FxHashMap::default();
    let mut left_seen = vec![false; left.levels().len()];
    let mut right_seen = vec![false; right.levels().len()];

    for (a, b) in left.codes().iter().zip(right.codes()) {
        if let (Some(a), Some(b)) = (a, b) {
            *pair_counts.entry((*a, *b)).or_insert(0) += 1;
            left_seen[*a as usize] = true;
            right_seen[*b as usize] = true;
        }
    }

    let row_codes = observed_sorted(left, &left_seen);
    let col_codes = observed_sorted(right, &right_seen);
    if row_codes.is_empty() || col_codes.is_empty() {
        return Err(CrosstabError::Empty);
    }

    let row_pos = positions(&row_codes, left_seen.len());
    let col_pos = positions(&col_codes, right_seen.len());

    let n_cols = col_codes.len();
    let mut counts = vec![0u64; row_codes.len() * n_cols];
    for (&(a, b), &count) in &pair_counts {
        counts[row_pos[a as usize] * n_cols + col_pos[b as usize]] = count;
    }

    let row_labels = row_codes
        .iter()
        .map(|&c| left.levels()[c as usize].clone())
        .collect();
    let col_labels = col_codes
        .iter()
        .map(|&c| right.levels()[c as usize].clone())
        .collect();

    Ok(ContingencyTable::from_flat(row_codes.len(), n_cols, counts)?
        .with_labels(row_labels, col_labels))
}

/// Observed level codes of `column`, sorted by label.
fn observed_sorted(column: &CategoricalColumn, seen: &[bool]) -> Vec<u32> {
    let mut codes: Vec<u32> = seen
        .iter()
        .enumerate()
        .filter(|(_, s)| **s)
        .map(|(c, _)| c as u32)
        .collect();
    codes.sort_by(|&a, &b| column.levels()[a as usize].cmp(&column.levels()[b as usize]));
    codes
}

/// Inverse lookup: level code → table position. Unobserved codes map to 0
/// and are never looked up.
fn positions(codes: &[u32], n_levels: usize) -> Vec<usize> {
    let mut pos = vec![0usize; n_levels];
    for (i, &c) in codes.iter().enumerate() {
        pos[c as usize] = i;
    }
    pos
}
