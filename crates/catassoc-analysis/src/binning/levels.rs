//! Level frequencies and rare-level collapsing.

use catassoc_core::config::LevelConfig;
use catassoc_core::CategoricalColumn;
use tracing::debug;

/// Observed levels with their counts, most frequent first. Ties keep the
/// column's level order. Missing values are not counted.
pub fn level_counts(column: &CategoricalColumn) -> Vec<(String, usize)> {
    let mut counts = vec![0usize; column.levels().len()];
    for code in column.codes().iter().flatten() {
        counts[*code as usize] += 1;
    }

    let mut observed: Vec<(String, usize)> = column
        .levels()
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(level, count)| (level.clone(), count))
        .collect();
    observed.sort_by(|a, b| b.1.cmp(&a.1));
    observed
}

/// Keep the `max_levels` most frequent levels and relabel the rest as
/// `other_label`. Missing values stay missing.
pub fn collapse_rare_levels(
    column: &CategoricalColumn,
    max_levels: usize,
    other_label: &str,
) -> CategoricalColumn {
    let counts = level_counts(column);
    if counts.len() <= max_levels {
        return column.clone();
    }

    let kept: Vec<&str> = counts[..max_levels].iter().map(|(l, _)| l.as_str()).collect();
    debug!(
        column = column.name(),
        kept = kept.len(),
        collapsed = counts.len() - kept.len(),
        "rare levels collapsed"
    );

    let values = column
        .values()
        .map(|v| v.map(|v| if kept.contains(&v) { v } else { other_label }));
    CategoricalColumn::from_optional(column.name(), values)
}

/// [`collapse_rare_levels`] with the limit and label taken from configuration.
pub fn collapse_rare_levels_with(
    column: &CategoricalColumn,
    config: &LevelConfig,
) -> CategoricalColumn {
    collapse_rare_levels(
        column,
        config.effective_max_levels() as usize,
        config.effective_other_label(),
    )
}
