//! Tests for the catassoc configuration system.

use std::sync::Mutex;

use catassoc_core::config::{CatassocConfig, CutKind, PairErrorPolicy};
use catassoc_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CATASSOC_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "CATASSOC_REORDER",
        "CATASSOC_PARALLEL",
        "CATASSOC_ON_PAIR_ERROR",
        "CATASSOC_BINNING_MAX_LEVELS",
        "CATASSOC_BINNING_SIG_FIG",
        "CATASSOC_BINNING_LOWER_QUANTILE",
        "CATASSOC_BINNING_UPPER_QUANTILE",
        "CATASSOC_BINNING_NO_TRIM",
        "CATASSOC_BINNING_CUTS",
        "CATASSOC_BINNING_POINT_MASS_THRESHOLD",
        "CATASSOC_BINNING_FILL_MISSING",
        "CATASSOC_LEVELS_MAX_LEVELS",
        "CATASSOC_LEVELS_OTHER_LABEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = CatassocConfig::load(dir.path()).unwrap();

    assert!(config.association.effective_reorder());
    assert!(!config.association.effective_parallel());
    assert_eq!(
        config.association.effective_on_pair_error(),
        PairErrorPolicy::FailFast
    );
    assert_eq!(config.binning.effective_max_levels(), 20);
    assert_eq!(config.binning.effective_sig_fig(), 3);
    assert_eq!(
        config.binning.effective_quantile_cutoff(),
        Some((0.025, 0.975))
    );
    assert_eq!(config.binning.effective_cuts(), CutKind::Linear);
    assert_eq!(config.binning.effective_point_mass_threshold(), 0.1);
    assert_eq!(config.binning.fill_missing, None);
    assert_eq!(config.levels.effective_max_levels(), 20);
    assert_eq!(config.levels.effective_other_label(), "_OTHER_");
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("catassoc.toml"),
        r#"
[association]
reorder = false
on_pair_error = "nan"

[binning]
sig_fig = 4
cuts = "quantile"
"#,
    )
    .unwrap();

    std::env::set_var("CATASSOC_BINNING_SIG_FIG", "2");
    std::env::set_var("CATASSOC_PARALLEL", "true");

    let config = CatassocConfig::load(dir.path()).unwrap();
    clear_env_vars();

    assert!(!config.association.effective_reorder());
    assert!(config.association.effective_parallel());
    assert_eq!(config.association.effective_on_pair_error(), PairErrorPolicy::Nan);
    assert_eq!(config.binning.effective_sig_fig(), 2);
    assert_eq!(config.binning.effective_cuts(), CutKind::Quantile);
}

#[test]
fn env_overrides_quantile_trimming() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("catassoc.toml"),
        r#"
[binning]
lower_quantile = 0.2
upper_quantile = 0.8
"#,
    )
    .unwrap();

    std::env::set_var("CATASSOC_BINNING_LOWER_QUANTILE", "0.05");
    std::env::set_var("CATASSOC_BINNING_UPPER_QUANTILE", "0.95");
    let config = CatassocConfig::load(dir.path()).unwrap();
    assert_eq!(
        config.binning.effective_quantile_cutoff(),
        Some((0.05, 0.95))
    );

    std::env::set_var("CATASSOC_BINNING_NO_TRIM", "true");
    let config = CatassocConfig::load(dir.path()).unwrap();
    clear_env_vars();
    assert_eq!(config.binning.effective_quantile_cutoff(), None);
}

#[test]
fn env_overrides_point_mass_and_fill_label() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("CATASSOC_BINNING_POINT_MASS_THRESHOLD", "0.3");
    std::env::set_var("CATASSOC_BINNING_FILL_MISSING", "MISSING");
    let dir = tempdir();
    let config = CatassocConfig::load(dir.path()).unwrap();
    clear_env_vars();

    assert_eq!(config.binning.effective_point_mass_threshold(), 0.3);
    assert_eq!(config.binning.fill_missing.as_deref(), Some("MISSING"));
}

#[test]
fn point_mass_threshold_out_of_range_fails_validation() {
    let err = CatassocConfig::from_toml(
        r#"
[binning]
point_mass_threshold = 2.0
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "binning.point_mass_threshold");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("CATASSOC_REORDER", "maybe");
    let dir = tempdir();
    let config = CatassocConfig::load(dir.path()).unwrap();
    clear_env_vars();

    assert_eq!(config.association.reorder, None);
    assert!(config.association.effective_reorder());
}

#[test]
fn invalid_toml_reports_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("catassoc.toml"), "[binning\nsig_fig = 3").unwrap();

    let err = CatassocConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn quantiles_out_of_range_fail_validation() {
    let err = CatassocConfig::from_toml(
        r#"
[binning]
upper_quantile = 1.5
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "binning.upper_quantile");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn inverted_quantiles_fail_validation() {
    let err = CatassocConfig::from_toml(
        r#"
[binning]
lower_quantile = 0.9
upper_quantile = 0.1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn no_trim_disables_quantile_cutoff() {
    let config = CatassocConfig::from_toml(
        r#"
[binning]
no_trim = true
"#,
    )
    .unwrap();
    assert_eq!(config.binning.effective_quantile_cutoff(), None);
}

#[test]
fn zero_levels_fail_validation() {
    let err = CatassocConfig::from_toml(
        r#"
[levels]
max_levels = 0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn toml_round_trip_preserves_values() {
    let config = CatassocConfig::from_toml(
        r#"
[association]
reorder = false

[levels]
other_label = "rest"
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = CatassocConfig::from_toml(&text).unwrap();
    assert_eq!(config, back);
}

#[test]
fn unknown_pair_policy_is_rejected() {
    let err = CatassocConfig::from_toml(
        r#"
[association]
on_pair_error = "retry"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
