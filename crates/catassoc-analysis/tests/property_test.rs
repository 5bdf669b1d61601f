//! Property tests for the association matrix and the corrected statistic.

use proptest::prelude::*;

use catassoc_analysis::{cramers_corrected_matrix, cramers_corrected_stat, ContingencyTable};
use catassoc_core::{CategoricalColumn, Dataset};

/// Columns of equal length whose first rows cover every level, so no
/// column is constant and every table has at least two rows and columns.
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (10usize..60, 2usize..6).prop_flat_map(|(n_rows, n_columns)| {
        prop::collection::vec(
            (2u8..5).prop_flat_map(move |levels| {
                prop::collection::vec(0..levels, n_rows).prop_map(move |mut codes| {
                    for (r, code) in codes.iter_mut().take(levels as usize).enumerate() {
                        *code = r as u8;
                    }
                    codes
                })
            }),
            n_columns,
        )
        .prop_map(|columns| {
            Dataset::from_columns(columns.into_iter().enumerate().map(|(c, codes)| {
                CategoricalColumn::from_values(
                    format!("c{c}"),
                    codes.into_iter().map(|v| format!("L{v}")),
                )
            }))
            .unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_symmetric_with_zero_diagonal(dataset in dataset_strategy(), reorder in any::<bool>()) {
        let m = cramers_corrected_matrix(&dataset, reorder).unwrap();
        prop_assert!(m.is_symmetric());
        for i in 0..m.size() {
            prop_assert_eq!(m.get(i, i), 0.0);
        }
    }

    #[test]
    fn prop_scores_in_unit_range(dataset in dataset_strategy()) {
        let m = cramers_corrected_matrix(&dataset, false).unwrap();
        for &v in m.values() {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&v), "score {} out of range", v);
        }
    }

    #[test]
    fn prop_column_order_does_not_change_scores(dataset in dataset_strategy(), shift in 0usize..5) {
        let m = cramers_corrected_matrix(&dataset, false).unwrap();

        let mut columns = dataset.columns().to_vec();
        let len = columns.len();
        columns.rotate_left(shift % len);
        let rotated = Dataset::from_columns(columns).unwrap();
        let r = cramers_corrected_matrix(&rotated, false).unwrap();

        for a in m.labels() {
            for b in m.labels() {
                let x = m.get_by_name(a, b).unwrap();
                let y = r.get_by_name(a, b).unwrap();
                prop_assert!((x - y).abs() < 1e-12, "{}/{}: {} vs {}", a, b, x, y);
            }
        }
    }

    #[test]
    fn prop_reorder_keeps_every_score(dataset in dataset_strategy()) {
        let plain = cramers_corrected_matrix(&dataset, false).unwrap();
        let reordered = cramers_corrected_matrix(&dataset, true).unwrap();
        for a in plain.labels() {
            for b in plain.labels() {
                prop_assert_eq!(plain.get_by_name(a, b), reordered.get_by_name(a, b));
            }
        }
    }

    #[test]
    fn prop_table_statistic_bounded(
        counts in prop::collection::vec(1u64..20, 6),
    ) {
        // 2x3 table with strictly positive cells: n >= 6 > max(r, k).
        let table = ContingencyTable::from_flat(2, 3, counts).unwrap();
        let v = cramers_corrected_stat(&table).unwrap();
        prop_assert!((0.0..=1.0 + 1e-9).contains(&v));
        let t = cramers_corrected_stat(&table.transpose()).unwrap();
        prop_assert!((v - t).abs() < 1e-12);
    }
}
