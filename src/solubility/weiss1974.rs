//! CO2 solubility after Weiss (1974) and its uncertainty propagation.
//!
//! The parameterization is
//!
//! ```text
//! K(T, S) = f1(T) + S * f2(T)
//! f1(T)   = a1 + a2 * (100/Tk) + a3 * ln(Tk/100)
//! f2(T)   = b1 + b2 * (Tk/100) + b3 * (Tk/100)^2
//! ```
//!
//! where `Tk = T + 273.15` is the absolute temperature. Temperatures are
//! taken in degrees Celsius everywhere; the Kelvin conversion happens once
//! inside each function.
//!
//! Uncertainty convention: `frac_ko_temp` and `frac_ko_salt` keep their
//! historical names but return an ABSOLUTE propagated uncertainty
//! (derivative times delta), not a ratio to K. The Wanninkhof `frac_kw_*`
//! family in `gas_transfer` does normalize; the asymmetry is inherited from
//! the literature workflow this crate implements and is preserved on purpose.
//!
//! No bounds checking is applied to T or S. At `T <= -273.15` the logarithm
//! argument is non-positive and the result degenerates to NaN per IEEE-754;
//! callers are responsible for physically sensible inputs.
//!
//! References:
//!     Weiss, R. F. (1974). Carbon dioxide in water and seawater: the
//!     solubility of a non-ideal gas. Marine Chemistry, 2(3), 203-215.

use crate::error::AppError;
use crate::stats::zip_map;

/// Coefficients of `f1` (Weiss 1974, Table I).
pub const A1: f64 = -58.0931;
pub const A2: f64 = 90.5069;
pub const A3: f64 = 22.2940;

/// Coefficients of `f2` (Weiss 1974, Table I).
pub const B1: f64 = 0.027766;
pub const B2: f64 = -0.025888;
pub const B3: f64 = 0.0050578;

const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Function 1 of the Weiss (1974) parameterization.
pub fn weiss1974_f1(temp_c: f64) -> f64 {
    let tk = temp_c + CELSIUS_TO_KELVIN;
    A1 + A2 * (100.0 / tk) + A3 * (tk / 100.0).ln()
}

/// Function 2 of the Weiss (1974) parameterization.
pub fn weiss1974_f2(temp_c: f64) -> f64 {
    let tk = temp_c + CELSIUS_TO_KELVIN;
    let t100 = tk / 100.0;
    B1 + B2 * t100 + B3 * t100 * t100
}

/// Solubility K after Weiss (1974).
///
/// * `temp_c` - temperature in degrees Celsius
/// * `salt` - salinity in practical salinity units
pub fn solubility(temp_c: f64, salt: f64) -> f64 {
    weiss1974_f1(temp_c) + salt * weiss1974_f2(temp_c)
}

/// Derivative of `f1` with respect to temperature.
fn d_weiss1974_f1_wrt_temp(temp_c: f64) -> f64 {
    let tk = temp_c + CELSIUS_TO_KELVIN;
    -A2 * 100.0 * tk.powi(-2) + A3 / tk
}

/// Derivative of `f2` with respect to temperature.
fn d_weiss1974_f2_wrt_temp(temp_c: f64) -> f64 {
    let tk = temp_c + CELSIUS_TO_KELVIN;
    B2 / 100.0 + (2.0 * B3 * tk) / (100.0 * 100.0)
}

/// Derivative of solubility with respect to temperature, dK/dT.
///
/// ```text
/// dK/dT = [a3/Tk - a2*100/Tk^2] + S * [b2/100 + 2*b3*Tk/100^2]
/// ```
pub fn d_solubility_wrt_temp(temp_c: f64, salt: f64) -> f64 {
    d_weiss1974_f1_wrt_temp(temp_c) + salt * d_weiss1974_f2_wrt_temp(temp_c)
}

/// Derivative of solubility with respect to salinity, dK/dS.
///
/// K is linear in S, so the salinity partial is exactly `f2(T)`.
pub fn d_solubility_wrt_salt(temp_c: f64) -> f64 {
    weiss1974_f2(temp_c)
}

/// Propagated uncertainty in K from a temperature uncertainty `delta_t`.
///
/// Returns `dK/dT * delta_t` — an absolute delta in the units of K (see the
/// module docs on the naming convention).
pub fn frac_ko_temp(temp_c: f64, salt: f64, delta_t: f64) -> f64 {
    d_solubility_wrt_temp(temp_c, salt) * delta_t
}

/// Propagated uncertainty in K from a salinity uncertainty `delta_s`.
///
/// Returns `dK/dS * delta_s` — an absolute delta in the units of K.
pub fn frac_ko_salt(temp_c: f64, delta_s: f64) -> f64 {
    d_solubility_wrt_salt(temp_c) * delta_s
}

/// Elementwise `solubility` over paired temperature/salinity series.
pub fn solubility_slice(temp_c: &[f64], salt: &[f64]) -> Result<Vec<f64>, AppError> {
    zip_map(temp_c, salt, solubility)
}

/// Elementwise `d_solubility_wrt_temp` over paired series.
pub fn d_solubility_wrt_temp_slice(temp_c: &[f64], salt: &[f64]) -> Result<Vec<f64>, AppError> {
    zip_map(temp_c, salt, d_solubility_wrt_temp)
}

/// Elementwise `d_solubility_wrt_salt`.
pub fn d_solubility_wrt_salt_slice(temp_c: &[f64]) -> Vec<f64> {
    temp_c.iter().map(|&t| d_solubility_wrt_salt(t)).collect()
}

/// Elementwise [`frac_ko_temp`] over paired series with one instrument
/// uncertainty `delta_t` for the whole series.
pub fn frac_ko_temp_slice(
    temp_c: &[f64],
    salt: &[f64],
    delta_t: f64,
) -> Result<Vec<f64>, AppError> {
    zip_map(temp_c, salt, |t, s| frac_ko_temp(t, s, delta_t))
}

/// Elementwise [`frac_ko_salt`] with one instrument uncertainty `delta_s`.
pub fn frac_ko_salt_slice(temp_c: &[f64], delta_s: f64) -> Vec<f64> {
    temp_c.iter().map(|&t| frac_ko_salt(t, delta_s)).collect()
}
