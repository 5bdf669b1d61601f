//! Compact, aesthetically pleasing number formatting for bin labels.

const UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Format `number` with roughly `sig_fig` significant figures.
///
/// - `0` → `"0"`
/// - |x| < 1 with magnitude ≥ -2 → fixed notation, e.g. `0.0500`
/// - |x| < 0.01 → scaled mantissa with exponent, e.g. `1.23E-4`
/// - |x| ≥ 1 → thousands units up to `P`, e.g. `1.23K`, beyond that `E18`
pub fn human_readable_num(number: f64, sig_fig: u32) -> String {
    if number == 0.0 {
        return "0".to_string();
    }
    if !number.is_finite() {
        return number.to_string();
    }

    let sig = sig_fig as i32;
    let abs = number.abs();

    if abs < 1.0 {
        let magnitude = abs.log10().floor() as i32;
        if magnitude >= -2 {
            let decimals = (sig - 1 - magnitude).max(0) as usize;
            format!("{number:.decimals$}")
        } else {
            let mantissa = number / 10f64.powi(magnitude);
            let decimals = (sig - 1).max(0) as usize;
            format!("{mantissa:.decimals$}E{magnitude}")
        }
    } else {
        let magnitude = (abs.log10() / 3.0).floor() as i32;
        let mantissa = number / 1000f64.powi(magnitude);
        let unit = if magnitude > 5 {
            format!("E{}", 3 * magnitude)
        } else {
            UNITS[magnitude as usize].to_string()
        };
        let decimals = if mantissa.abs() < 10.0 {
            sig - 1
        } else if mantissa.abs() < 100.0 {
            sig - 2
        } else {
            sig - 3
        };
        let decimals = decimals.max(0) as usize;
        format!("{mantissa:.decimals$}{unit}")
    }
}
