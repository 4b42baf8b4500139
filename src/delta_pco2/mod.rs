//! Fractional uncertainty of the air-sea pCO2 difference term.

use crate::error::AppError;
use crate::stats::{fractional_uncertainty, zip_map};

/// Fractional uncertainty in the ocean partial pressure of CO2:
/// `delta_pco2 / pco2`.
///
/// * `pco2` - ocean partial pressure of CO2
/// * `delta_pco2` - uncertainty in pCO2, same unit
///
/// `pco2 == 0.0` is not guarded and yields an IEEE-754 infinity.
pub fn frac_pco2ocn(pco2: f64, delta_pco2: f64) -> f64 {
    fractional_uncertainty(pco2, delta_pco2)
}

/// Elementwise [`frac_pco2ocn`] over paired series.
pub fn frac_pco2ocn_slice(pco2: &[f64], delta_pco2: &[f64]) -> Result<Vec<f64>, AppError> {
    zip_map(pco2, delta_pco2, frac_pco2ocn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_percent_reference_case() {
        assert_eq!(frac_pco2ocn(400.0, 4.0), 0.01);
    }

    #[test]
    fn zero_pco2_propagates_as_infinity() {
        assert!(frac_pco2ocn(0.0, 4.0).is_infinite());
    }
}
