//! Numeric binning into a categorical column.
//!
//! Values whose share of the non-missing rows exceeds the point-mass
//! threshold get a bin of their own, labelled `NN: v`. The remaining values
//! are cut into right-closed intervals labelled `NN: lo - hi`; for each point
//! mass the nearest interior cut is dropped and the point mass itself becomes
//! an edge.

use catassoc_core::config::BinningConfig;
use catassoc_core::constants;
use catassoc_core::errors::BinningError;
use catassoc_core::types::collections::FxHashMap;
use catassoc_core::{binning_span, CategoricalColumn};
use tracing::debug;

use super::cutpoints::{cutpoints, CutOptions};
use super::human_readable::human_readable_num;

/// Options for [`bin_numeric`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinOptions {
    pub cuts: CutOptions,
    /// Share of non-missing values above which a single value gets its own
    /// bin. `None` disables point masses.
    pub point_mass_threshold: Option<f64>,
    /// Label for missing values. `None` leaves them missing.
    pub fill_missing: Option<String>,
}

impl Default for BinOptions {
    fn default() -> Self {
        Self {
            cuts: CutOptions::default(),
            point_mass_threshold: Some(constants::DEFAULT_POINT_MASS_THRESHOLD),
            fill_missing: None,
        }
    }
}

impl BinOptions {
    pub fn from_config(config: &BinningConfig) -> Self {
        Self {
            cuts: CutOptions::from_config(config),
            point_mass_threshold: Some(config.effective_point_mass_threshold()),
            fill_missing: config.fill_missing.clone(),
        }
    }
}

/// Bin `values` into a categorical column.
///
/// Interval bin `i` covers `(edge[i], edge[i + 1]]`; the first one also
/// includes its lower edge. Labels carry a 1-based, zero-padded index so
/// they sort in bin order. NaN values are missing unless
/// [`BinOptions::fill_missing`] is set.
pub fn bin_numeric(
    name: impl Into<String>,
    values: &[f64],
    options: &BinOptions,
) -> Result<CategoricalColumn, BinningError> {
    let name = name.into();
    let span = binning_span!(name.as_str());
    let _guard = span.enter();

    let masses = match options.point_mass_threshold {
        Some(threshold) => {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(BinningError::InvalidOption {
                    field: "point_mass_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
            point_masses(values, threshold)
        }
        None => Vec::new(),
    };

    let mut cuts = if masses.is_empty() {
        cutpoints(values, &options.cuts)?
    } else {
        let rest: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && !masses.contains(v))
            .collect();
        if rest.is_empty() {
            Vec::new()
        } else {
            cutpoints(&rest, &options.cuts)?
        }
    };
    if masses.is_empty() && cuts.len() < 2 {
        return Err(BinningError::TooFewCutpoints { found: cuts.len() });
    }

    drop_nearest_interior_cuts(&mut cuts, &masses);
    let mut edges = cuts;
    edges.extend_from_slice(&masses);
    edges.sort_by(f64::total_cmp);
    edges.dedup();

    let readable: Vec<String> = edges
        .iter()
        .map(|&e| human_readable_num(e, options.cuts.sig_fig))
        .collect();

    let mut levels: Vec<String> = Vec::new();
    let mut interval_level: Vec<u32> = Vec::with_capacity(edges.len());
    let mut mass_level: Vec<(f64, u32)> = Vec::with_capacity(masses.len());
    for (i, &edge) in edges.iter().enumerate() {
        if masses.contains(&edge) {
            let label = format!("{:02}: {}", levels.len() + 1, readable[i]);
            mass_level.push((edge, levels.len() as u32));
            levels.push(label);
        }
        if i + 1 < edges.len() {
            let label = format!("{:02}: {} - {}", levels.len() + 1, readable[i], readable[i + 1]);
            interval_level.push(levels.len() as u32);
            levels.push(label);
        }
    }

    let mut codes: Vec<Option<u32>> = values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                return None;
            }
            if let Some(&(_, code)) = mass_level.iter().find(|(m, _)| *m == v) {
                return Some(code);
            }
            bin_index(&edges, v).map(|b| interval_level[b])
        })
        .collect();

    let missing = codes.iter().filter(|c| c.is_none()).count();
    if let Some(label) = &options.fill_missing {
        let fill = levels.len() as u32;
        levels.push(label.clone());
        for code in codes.iter_mut().filter(|c| c.is_none()) {
            *code = Some(fill);
        }
    }

    debug!(
        bins = interval_level.len(),
        point_masses = masses.len(),
        missing,
        "values binned"
    );

    CategoricalColumn::from_codes(name, levels, codes).map_err(|e| BinningError::InvalidOption {
        field: "fill_missing".to_string(),
        message: e.to_string(),
    })
}

/// Finite values whose share of the non-NaN values exceeds `threshold`,
/// sorted ascending.
fn point_masses(values: &[f64], threshold: f64) -> Vec<f64> {
    let present = values.iter().filter(|v| !v.is_nan()).count();
    if present == 0 {
        return Vec::new();
    }

    let mut counts: FxHashMap<u64, usize> = FxHashMap::default();
    for &v in values.iter().filter(|v| v.is_finite()) {
        // +0.0 and -0.0 are the same value.
        let key = if v == 0.0 { 0.0f64 } else { v };
        *counts.entry(key.to_bits()).or_insert(0) += 1;
    }

    let mut masses: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count as f64 / present as f64 > threshold)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    masses.sort_by(f64::total_cmp);
    masses
}

/// Remove, for each point mass, the interior cut closest to it. The outer
/// cuts always stay.
fn drop_nearest_interior_cuts(cuts: &mut Vec<f64>, masses: &[f64]) {
    if cuts.len() <= 2 || masses.is_empty() {
        return;
    }
    let interior = &cuts[1..cuts.len() - 1];
    let mut drop: Vec<usize> = masses
        .iter()
        .map(|&m| {
            let mut best = 0;
            for (i, &c) in interior.iter().enumerate() {
                if (c - m).abs() < (interior[best] - m).abs() {
                    best = i;
                }
            }
            best + 1
        })
        .collect();
    drop.sort_unstable();
    drop.dedup();
    for &i in drop.iter().rev() {
        cuts.remove(i);
    }
}

/// Index of the right-closed interval containing `v`, if any.
fn bin_index(edges: &[f64], v: f64) -> Option<usize> {
    if edges.len() < 2 {
        return None;
    }
    let (first, last) = (edges[0], edges[edges.len() - 1]);
    if v.is_nan() || v < first || v > last {
        return None;
    }
    if v == first {
        return Some(0);
    }
    // First edge >= v closes the interval.
    Some(edges.partition_point(|&e| e < v) - 1)
}
