//! Bias-corrected Cramér's V (Bergsma–Wicher correction).
//!
//! ```text
//! phi2     = chi2 / n
//! phi2corr = max(0, phi2 - (k-1)(r-1)/(n-1))
//! kcorr    = k - (k-1)^2/(n-1)
//! rcorr    = r - (r-1)^2/(n-1)
//! V        = sqrt(phi2corr / min(kcorr - 1, rcorr - 1))
//! ```
//!
//! Degenerate inputs surface as typed errors rather than NaN.

use catassoc_core::errors::AssociationError;
use serde::Serialize;

use super::chi2::chi2_independence;
use crate::crosstab::ContingencyTable;

/// Relative tolerance below which phi2 is treated as equal to the bias term.
const BIAS_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// Every intermediate of the corrected statistic, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CramersBreakdown {
    pub chi2: f64,
    pub n: u64,
    pub phi2: f64,
    pub phi2_corrected: f64,
    pub k_corrected: f64,
    pub r_corrected: f64,
    pub value: f64,
}

/// Bias-corrected Cramér's V of a contingency table, in [0, 1].
pub fn cramers_corrected_stat(table: &ContingencyTable) -> Result<f64, AssociationError> {
    cramers_corrected_breakdown(table).map(|b| b.value)
}

/// Compute the corrected statistic with a full breakdown of each term.
pub fn cramers_corrected_breakdown(
    table: &ContingencyTable,
) -> Result<CramersBreakdown, AssociationError> {
    let (r, k) = table.shape();
    if r < 2 || k < 2 {
        return Err(AssociationError::invalid_argument(format!(
            "contingency table must be at least 2x2, got {r}x{k}"
        )));
    }

    let n = table.total();
    match n {
        0 => {
            return Err(AssociationError::invalid_argument(
                "contingency table total must be > 0",
            ))
        }
        1 => {
            return Err(AssociationError::DivisionByZero {
                context: "bias correction divides by n - 1 with n = 1".to_string(),
            })
        }
        _ => {}
    }

    let chi2 = chi2_independence(table)?.statistic;

    let nf = n as f64;
    let (rf, kf) = (r as f64, k as f64);
    let phi2 = chi2 / nf;
    let bias = (kf - 1.0) * (rf - 1.0) / (nf - 1.0);
    // An excess within rounding error of the bias term is zero.
    let excess = phi2 - bias;
    let phi2_corrected = if excess <= bias * BIAS_TOLERANCE {
        0.0
    } else {
        excess
    };
    let k_corrected = kf - (kf - 1.0).powi(2) / (nf - 1.0);
    let r_corrected = rf - (rf - 1.0).powi(2) / (nf - 1.0);

    let denominator = (k_corrected - 1.0).min(r_corrected - 1.0);
    if !(denominator > 0.0) {
        return Err(AssociationError::invalid_result(format!(
            "corrected denominator min(kcorr - 1, rcorr - 1) = {denominator} is not positive \
             (n = {n}, table {r}x{k})"
        )));
    }

    let value = (phi2_corrected / denominator).sqrt();
    if !value.is_finite() {
        return Err(AssociationError::invalid_result(format!(
            "non-finite statistic {value}"
        )));
    }

    Ok(CramersBreakdown {
        chi2,
        n,
        phi2,
        phi2_corrected,
        k_corrected,
        r_corrected,
        value,
    })
}

/// Uncorrected Cramér's V: sqrt(phi2 / min(k - 1, r - 1)).
pub fn cramers_v(table: &ContingencyTable) -> Result<f64, AssociationError> {
    let test = chi2_independence(table)?;
    let (r, k) = table.shape();
    let phi2 = test.statistic / test.n as f64;
    let denominator = (k.min(r) - 1) as f64;
    Ok((phi2 / denominator).sqrt())
}
