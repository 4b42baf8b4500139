//! Small statistics helpers shared by the parameterization modules.
//!
//! Units conventions:
//! - `delta` arguments are absolute uncertainties in the same unit as their
//!   associated value
//! - fractional uncertainties are dimensionless ratios

use crate::error::AppError;

/// Fractional uncertainty: `delta / value`.
///
/// Division by zero is not guarded; `value == 0.0` yields an IEEE-754
/// infinity (or NaN when `delta` is also zero).
pub fn fractional_uncertainty(value: f64, delta: f64) -> f64 {
    delta / value
}

/// Apply `f` elementwise over two paired series of equal length.
pub(crate) fn zip_map(
    left: &[f64],
    right: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>, AppError> {
    if left.len() != right.len() {
        return Err(AppError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(&a, &b)| f(a, b))
        .collect())
}

/// Median of a series, ignoring NaN entries.
///
/// An empty series (or one that is all NaN) yields NaN. Values are compared
/// with `total_cmp`, so the sort is well defined even though NaNs have
/// already been filtered out.
pub fn nanmedian(values: &[f64]) -> f64 {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.sort_by(f64::total_cmp);
    let mid = finite.len() / 2;
    if finite.len() % 2 == 1 {
        finite[mid]
    } else {
        0.5 * (finite[mid - 1] + finite[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_uncertainty_is_simple_ratio() {
        assert_eq!(fractional_uncertainty(10.0, 2.0), 0.2);
    }

    #[test]
    fn zip_map_checks_lengths() {
        assert_eq!(zip_map(&[1.0, 2.0], &[3.0, 4.0], |a, b| a + b).unwrap(), vec![4.0, 6.0]);
        assert_eq!(
            zip_map(&[1.0], &[], |a, b| a + b).unwrap_err(),
            AppError::LengthMismatch { left: 1, right: 0 }
        );
    }

    #[test]
    fn nanmedian_ignores_nan_entries() {
        assert_eq!(nanmedian(&[3.0, f64::NAN, 1.0, 2.0]), 2.0);
        assert_eq!(nanmedian(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(nanmedian(&[7.5]), 7.5);
    }

    #[test]
    fn nanmedian_of_empty_or_all_nan_is_nan() {
        assert!(nanmedian(&[]).is_nan());
        assert!(nanmedian(&[f64::NAN, f64::NAN]).is_nan());
    }
}
