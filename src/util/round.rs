/// Rounds half away from zero.
///
/// Computed as `trunc(x + copysign(0.5, x))` so results stay identical to
/// the hashes and coordinates published for this algorithm, independent of
/// the platform rounding mode.
pub fn round(x: f64) -> f64 {
    (x + 0.5_f64.copysign(x)).trunc()
}

/// Largest magnitude below which an `f64` can still hold a fractional part.
const FRACTION_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds `x` to `precision` decimal places.
///
/// Precisions finer than an `f64` can represent return `x` unchanged.
pub fn round_to_precision(x: f64, precision: usize) -> f64 {
    let Ok(exp) = i32::try_from(precision) else {
        return x;
    };
    let base = 10_f64.powi(exp);
    let scaled = x * base;
    if !scaled.is_finite() || scaled.abs() >= FRACTION_LIMIT {
        return x;
    }
    round(scaled) / base
}
