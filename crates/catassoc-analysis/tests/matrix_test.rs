//! Association matrix integration tests.

use catassoc_analysis::reorder::reverse_cuthill_mckee;
use catassoc_analysis::{cramers_corrected_matrix, AssociationEngine};
use catassoc_core::config::{AssociationConfig, PairErrorPolicy};
use catassoc_core::{AssociationError, CatassocConfig, CategoricalColumn, Dataset, MatrixError};

fn column(name: &str, values: &[&str]) -> CategoricalColumn {
    CategoricalColumn::from_values(name, values.iter().copied())
}

fn two_perfectly_associated() -> Dataset {
    Dataset::from_columns([
        column("A", &["x", "x", "x", "y", "y", "y"]),
        column("B", &["p", "p", "p", "q", "q", "q"]),
    ])
    .unwrap()
}

/// Deterministic mixed dataset: every column observes all of its levels.
fn mixed_dataset(n_columns: usize, n_rows: usize) -> Dataset {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let columns = (0..n_columns).map(|c| {
        let levels = 2 + (c % 3) as u64;
        let values: Vec<String> = (0..n_rows as u64)
            .map(|r| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                let code = if r < levels {
                    r
                } else if c > 0 && r % 2 == 0 {
                    // Partially tie each column to the first one.
                    r % levels
                } else {
                    (state >> 33) % levels
                };
                format!("L{code}")
            })
            .collect();
        CategoricalColumn::from_values(format!("col{c}"), values)
    });
    Dataset::from_columns(columns).unwrap()
}

#[test]
fn perfect_pair_reordered() {
    let m = cramers_corrected_matrix(&two_perfectly_associated(), true).unwrap();
    assert_eq!(m.labels(), &["B", "A"]);
    let rows = m.to_rows();
    assert_eq!(rows[0][0], 0.0);
    assert_eq!(rows[1][1], 0.0);
    assert!((rows[0][1] - 1.0).abs() < 1e-9);
    assert!((rows[1][0] - 1.0).abs() < 1e-9);
}

#[test]
fn perfect_pair_without_reorder_keeps_input_order() {
    let m = cramers_corrected_matrix(&two_perfectly_associated(), false).unwrap();
    assert_eq!(m.labels(), &["A", "B"]);
    assert!((m.get(0, 1) - 1.0).abs() < 1e-9);
}

#[test]
fn independent_column_scores_zero() {
    let dataset = Dataset::from_columns([
        column("A", &["x", "x", "x", "x", "y", "y", "y", "y"]),
        column("B", &["p", "p", "p", "p", "q", "q", "q", "q"]),
        column("C", &["u", "v", "u", "v", "u", "v", "u", "v"]),
    ])
    .unwrap();
    let m = cramers_corrected_matrix(&dataset, true).unwrap();
    assert!((m.get_by_name("A", "B").unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(m.get_by_name("A", "C"), Some(0.0));
    assert_eq!(m.get_by_name("B", "C"), Some(0.0));
    assert!(m.is_symmetric());
}

#[test]
fn single_column_rejected() {
    let dataset = Dataset::from_columns([column("A", &["x", "y"])]).unwrap();
    let err = cramers_corrected_matrix(&dataset, true).unwrap_err();
    assert_eq!(err, MatrixError::TooFewColumns { found: 1 });
}

#[test]
fn constant_column_fails_fast() {
    let dataset = Dataset::from_columns([
        column("K", &["k", "k", "k", "k"]),
        column("A", &["x", "y", "x", "y"]),
    ])
    .unwrap();
    let err = cramers_corrected_matrix(&dataset, false).unwrap_err();
    match err {
        MatrixError::PairFailed {
            left,
            right,
            source,
        } => {
            assert_eq!(left, "K");
            assert_eq!(right, "A");
            assert!(matches!(source, AssociationError::InvalidArgument { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn nan_policy_marks_failed_pair() {
    let dataset = Dataset::from_columns([
        column("K", &["k", "k", "k", "k", "k", "k"]),
        column("A", &["x", "x", "x", "y", "y", "y"]),
        column("B", &["p", "p", "p", "q", "q", "q"]),
    ])
    .unwrap();
    let m = AssociationEngine::new()
        .with_reorder(false)
        .with_pair_error_policy(PairErrorPolicy::Nan)
        .build(&dataset)
        .unwrap();
    assert!(m.get_by_name("K", "A").unwrap().is_nan());
    assert!(m.get_by_name("B", "K").unwrap().is_nan());
    assert!((m.get_by_name("A", "B").unwrap() - 1.0).abs() < 1e-9);
    assert!(m.is_symmetric());
}

#[test]
fn disjoint_missing_values_fail_the_pair() {
    let dataset = Dataset::from_columns([
        CategoricalColumn::from_optional("A", [Some("x"), Some("y"), None, None]),
        CategoricalColumn::from_optional("B", [None, None, Some("p"), Some("q")]),
    ])
    .unwrap();
    let err = cramers_corrected_matrix(&dataset, false).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::PairFailed {
            source: AssociationError::InvalidArgument { .. },
            ..
        }
    ));
}

#[test]
fn parallel_matches_sequential() {
    let dataset = mixed_dataset(7, 60);
    let sequential = AssociationEngine::new().build(&dataset).unwrap();
    let parallel = AssociationEngine::new()
        .with_parallel(true)
        .build(&dataset)
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn reordered_matrix_is_a_symmetric_permutation() {
    let dataset = mixed_dataset(6, 50);
    let plain = cramers_corrected_matrix(&dataset, false).unwrap();
    let reordered = cramers_corrected_matrix(&dataset, true).unwrap();

    let perm = reverse_cuthill_mckee(plain.values(), plain.size()).unwrap();
    assert_eq!(reordered, plain.permuted(&perm).unwrap());

    let mut a = plain.values().to_vec();
    let mut b = reordered.values().to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    assert_eq!(a, b);
}

#[test]
fn repeated_builds_are_identical() {
    let dataset = mixed_dataset(5, 40);
    let first = cramers_corrected_matrix(&dataset, true).unwrap();
    let second = cramers_corrected_matrix(&dataset, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn engine_from_config() {
    let config = CatassocConfig::from_toml(
        r#"
[association]
reorder = false
parallel = true
on_pair_error = "nan"
"#,
    )
    .unwrap();
    let engine = AssociationEngine::from_config(&config.association);
    assert!(!engine.reorder());
    assert!(engine.parallel());
    assert_eq!(engine.pair_error_policy(), PairErrorPolicy::Nan);

    let defaults = AssociationEngine::from_config(&AssociationConfig::default());
    assert!(defaults.reorder());
    assert!(!defaults.parallel());
    assert_eq!(defaults.pair_error_policy(), PairErrorPolicy::FailFast);
}

#[test]
fn matrix_serializes_labels_and_values() {
    let m = cramers_corrected_matrix(&two_perfectly_associated(), false).unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["labels"], serde_json::json!(["A", "B"]));
    assert_eq!(json["values"].as_array().unwrap().len(), 4);
}
