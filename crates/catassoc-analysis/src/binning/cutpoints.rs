//! Cut points for binning a numeric variable.
//!
//! The far endpoints are the data minimum floored and the maximum ceiled to
//! `sig_fig` significant figures. Interior cuts are spaced between the
//! quantile-trimmed endpoints so extreme outliers do not stretch the bins.
//! Every cut is finally rounded to `sig_fig` significant figures.

use catassoc_core::config::{BinningConfig, CutKind};
use catassoc_core::constants;
use catassoc_core::errors::BinningError;

/// How interior cut points are placed.
#[derive(Debug, Clone, PartialEq)]
pub enum CutStrategy {
    Linear,
    Log,
    Logp1,
    Quantile,
    /// Use these cut points as given.
    Explicit(Vec<f64>),
}

impl From<CutKind> for CutStrategy {
    fn from(kind: CutKind) -> Self {
        match kind {
            CutKind::Linear => Self::Linear,
            CutKind::Log => Self::Log,
            CutKind::Logp1 => Self::Logp1,
            CutKind::Quantile => Self::Quantile,
        }
    }
}

/// Options for [`cutpoints`].
#[derive(Debug, Clone, PartialEq)]
pub struct CutOptions {
    /// Lower/upper quantiles bounding the interior cuts; `None` uses the
    /// rounded data range.
    pub quantile_cutoff: Option<(f64, f64)>,
    pub strategy: CutStrategy,
    /// Number of interior cut points generated by the strategy.
    pub ncuts: usize,
    pub sig_fig: u32,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            quantile_cutoff: Some((
                constants::DEFAULT_LOWER_QUANTILE,
                constants::DEFAULT_UPPER_QUANTILE,
            )),
            strategy: CutStrategy::Linear,
            ncuts: constants::DEFAULT_BINNING_MAX_LEVELS as usize,
            sig_fig: constants::DEFAULT_SIG_FIG,
        }
    }
}

impl CutOptions {
    /// Options from resolved configuration; `max_levels` becomes `ncuts`.
    pub fn from_config(config: &BinningConfig) -> Self {
        Self {
            quantile_cutoff: config.effective_quantile_cutoff(),
            strategy: config.effective_cuts().into(),
            ncuts: config.effective_max_levels() as usize,
            sig_fig: config.effective_sig_fig(),
        }
    }

    fn validate(&self) -> Result<(), BinningError> {
        if self.sig_fig == 0 {
            return Err(invalid("sig_fig", "must be at least 1"));
        }
        if self.ncuts == 0 {
            return Err(invalid("ncuts", "must be greater than 0"));
        }
        if let Some((lo, hi)) = self.quantile_cutoff {
            if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
                return Err(invalid(
                    "quantile_cutoff",
                    "must satisfy 0 <= lower <= upper <= 1",
                ));
            }
        }
        if let CutStrategy::Explicit(cuts) = &self.strategy {
            if cuts.iter().any(|c| !c.is_finite()) {
                return Err(invalid("cuts", "explicit cut points must be finite"));
            }
        }
        Ok(())
    }
}

/// Compute sorted, deduplicated cut points for `x`. Non-finite values are
/// ignored.
pub fn cutpoints(x: &[f64], options: &CutOptions) -> Result<Vec<f64>, BinningError> {
    options.validate()?;

    let mut sorted: Vec<f64> = x.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(BinningError::NoFiniteValues);
    }
    sorted.sort_by(f64::total_cmp);

    let sig = options.sig_fig as i32;
    let lb = round_down_sig(sorted[0], sig);
    let ub = round_up_sig(sorted[sorted.len() - 1], sig);

    let (ep0, ep1) = match options.quantile_cutoff {
        Some((lo, hi)) => (interpolate(&sorted, lo), interpolate(&sorted, hi)),
        None => (lb, ub),
    };

    let n = options.ncuts;
    let mut cuts: Vec<f64> = match &options.strategy {
        CutStrategy::Linear => linspace(ep0, ep1, n),
        CutStrategy::Log => {
            if ep0 <= 0.0 {
                return Err(BinningError::LogRangeIncludesZero);
            }
            linspace(signed_log10(ep0, 0.0), signed_log10(ep1, 0.0), n)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect()
        }
        CutStrategy::Logp1 => {
            let mut c: Vec<f64> = linspace(signed_log10(ep0, 1.0), signed_log10(ep1, 1.0), n)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect();
            c.push(0.0);
            c
        }
        CutStrategy::Quantile => linspace(0.0, 1.0, n)
            .into_iter()
            .map(|q| interpolate(&sorted, q))
            .collect(),
        CutStrategy::Explicit(c) => c.clone(),
    };

    cuts.push(lb);
    cuts.push(ub);
    let mut rounded: Vec<f64> = cuts.into_iter().map(|c| round_sig(c, sig)).collect();
    sort_dedup(&mut rounded);
    Ok(rounded)
}

/// Linear-interpolated quantile of already sorted data, `q` in [0, 1].
/// `None` for empty data or a NaN `q`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || q.is_nan() {
        return None;
    }
    Some(interpolate(sorted, q))
}

/// Quantile of non-empty sorted data.
fn interpolate(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// `num` evenly spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

fn signed_log10(v: f64, offset: f64) -> f64 {
    v.signum() * (v.abs() + offset).log10()
}

/// floor(log10 |x|), with 0 for x = 0.
pub(crate) fn order_of_mag(x: f64) -> i32 {
    if x == 0.0 {
        0
    } else {
        x.abs().log10().floor() as i32
    }
}

fn round_down_sig(x: f64, sig: i32) -> f64 {
    let scale = 10f64.powi(sig - 1 - order_of_mag(x));
    (x * scale).floor() / scale
}

fn round_up_sig(x: f64, sig: i32) -> f64 {
    let scale = 10f64.powi(sig - 1 - order_of_mag(x));
    (x * scale).ceil() / scale
}

/// Round to `sig` significant figures, ties to even.
fn round_sig(x: f64, sig: i32) -> f64 {
    let magnitude = 10f64.powi(order_of_mag(x));
    let scale = 10f64.powi(sig - 1);
    ((x / magnitude) * scale).round_ties_even() / scale * magnitude
}

fn sort_dedup(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup();
}

fn invalid(field: &str, message: &str) -> BinningError {
    BinningError::InvalidOption {
        field: field.to_string(),
        message: message.to_string(),
    }
}
