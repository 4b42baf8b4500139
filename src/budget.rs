//! Convenience layer: evaluate the full uncertainty budget for one
//! observation.

use crate::delta_pco2::frac_pco2ocn;
use crate::error::AppError;
use crate::gas_transfer::wanninkhof2014::{
    frac_kw_sc, frac_kw_umean, frac_kw_ustd, schmidt_number,
};
use crate::models::{Inputs, UncertaintySummary};
use crate::solubility::weiss1974::{frac_ko_salt, frac_ko_temp, solubility};

/// Evaluate every quantity and uncertainty term for one observation.
///
/// The three kw fractional terms are independent to first order and are
/// combined in quadrature:
///
/// ```text
/// frac_kw_combined = sqrt(frac_umean^2 + frac_ustd^2 + frac_sc^2)
/// ```
///
/// Fails with [`AppError::TemperatureNotCelsius`] when the temperature
/// input looks like Kelvin (see `gas_transfer::wanninkhof2014`).
pub fn uncertainty_budget(inp: &Inputs) -> Result<UncertaintySummary, AppError> {
    let sc = schmidt_number(inp.temp_c)?;

    let frac_umean = frac_kw_umean(inp.u_mean, inp.u_std, inp.delta_u_mean);
    let frac_ustd = frac_kw_ustd(inp.u_mean, inp.u_std, inp.delta_u_std);
    let frac_sc = frac_kw_sc(inp.temp_c, inp.delta_temp_c)?;
    let frac_kw_combined =
        (frac_umean * frac_umean + frac_ustd * frac_ustd + frac_sc * frac_sc).sqrt();

    Ok(UncertaintySummary {
        solubility: solubility(inp.temp_c, inp.salt),
        schmidt_number: sc,
        delta_ko_temp: frac_ko_temp(inp.temp_c, inp.salt, inp.delta_temp_c),
        delta_ko_salt: frac_ko_salt(inp.temp_c, inp.delta_salt),
        frac_kw_umean: frac_umean,
        frac_kw_ustd: frac_ustd,
        frac_kw_sc: frac_sc,
        frac_kw_combined,
        frac_pco2: frac_pco2ocn(inp.pco2, inp.delta_pco2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> Inputs {
        Inputs {
            temp_c: 18.0,
            salt: 35.0,
            u_mean: 7.2,
            u_std: 2.1,
            pco2: 395.0,
            delta_temp_c: 0.05,
            delta_salt: 0.1,
            delta_u_mean: 0.5,
            delta_u_std: 0.3,
            delta_pco2: 2.5,
        }
    }

    #[test]
    fn combined_term_is_quadrature_of_parts() {
        let out = uncertainty_budget(&sample_inputs()).unwrap();
        let expect = (out.frac_kw_umean.powi(2)
            + out.frac_kw_ustd.powi(2)
            + out.frac_kw_sc.powi(2))
        .sqrt();
        assert_eq!(out.frac_kw_combined, expect);
        assert!(out.frac_kw_combined >= out.frac_kw_umean.abs());
    }

    #[test]
    fn kelvin_temperature_fails_the_whole_budget() {
        let mut inp = sample_inputs();
        inp.temp_c = 291.15;
        assert_eq!(
            uncertainty_budget(&inp).unwrap_err(),
            AppError::TemperatureNotCelsius
        );
    }
}
