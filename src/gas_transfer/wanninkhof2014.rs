//! Schmidt number and gas-transfer velocity after Wanninkhof (2014).
//!
//! The Schmidt number polynomial is the CO2-in-seawater fit from Jähne et
//! al. (1987) as listed in Wanninkhof (2014) Table 1:
//!
//! ```text
//! Sc(T) = a + b*T + c*T^2 + d*T^3 + e*T^4      (T in degC)
//! ```
//!
//! The gas-transfer velocity follows `kw = a * <U^2> * (Sc/660)^-0.5` with
//! `<U^2> = U_mean^2 + U_std^2`; the functions below provide its partial
//! derivatives and the fractional uncertainty of each term.
//!
//! The only explicit guard in this crate lives here: when the median of a
//! temperature input exceeds 270 the caller almost certainly passed Kelvin,
//! and the Schmidt-number functions fail with
//! [`AppError::TemperatureNotCelsius`]. Division by zero (Sc = 0, or
//! `u_mean = u_std = 0`) is not guarded and propagates as IEEE-754 inf/NaN.
//!
//! References:
//!
//! ```text
//!     Wanninkhof, R. (2014). Relationship between wind speed and gas
//!     exchange over the ocean revisited. Limnology and Oceanography:
//!     Methods, 12(6), 351-362. https://doi.org/10.4319/lom.2014.12.351
//!
//!     Jähne, B., Heinz, G., & Dietrich, W. (1987). Measurement of the
//!     diffusion coefficients of sparingly soluble gases in water. Journal
//!     of Geophysical Research: Oceans, 92(C10), 10767-10776.
//! ```

use crate::error::AppError;
use crate::stats::{nanmedian, zip_map};

/// Schmidt-number polynomial coefficients (Wanninkhof 2014, Table 1).
pub const SC_A: f64 = 2116.8;
pub const SC_B: f64 = -136.25;
pub const SC_C: f64 = 4.7353;
pub const SC_D: f64 = -0.092307;
/// Canonical quartic coefficient. A truncated 0.000755 also circulates in
/// older scripts; it differs only in the least significant digit and is not
/// used here.
pub const SC_E: f64 = 0.0007555;

/// Wanninkhof (2014) gas-transfer coefficient `a` in
/// `kw = a * <U^2> * (Sc/660)^-0.5`.
pub const COEF_A: f64 = 0.251;

/// Schmidt number at 20 degC and salinity 35, the normalization reference.
pub const SC_REF_660: f64 = 660.0;

/// Celsius guard threshold for the unit check on temperature inputs.
const TEMP_C_MEDIAN_MAX: f64 = 270.0;

fn check_celsius(median_temp_c: f64) -> Result<(), AppError> {
    // NaN medians (empty or all-NaN series) compare false and pass through.
    if median_temp_c > TEMP_C_MEDIAN_MAX {
        return Err(AppError::TemperatureNotCelsius);
    }
    Ok(())
}

fn schmidt_number_unchecked(temp_c: f64) -> f64 {
    SC_A + SC_B * temp_c
        + SC_C * temp_c.powi(2)
        + SC_D * temp_c.powi(3)
        + SC_E * temp_c.powi(4)
}

fn d_schmidt_number_unchecked(temp_c: f64) -> f64 {
    SC_B + 2.0 * SC_C * temp_c + 3.0 * SC_D * temp_c.powi(2) + 4.0 * SC_E * temp_c.powi(3)
}

/// Schmidt number for CO2 in seawater (dimensionless).
///
/// * `temp_c` - temperature in degrees Celsius
///
/// `schmidt_number(20.0)` evaluates to 668.344, the reference value in
/// Wanninkhof (2014). Fails with [`AppError::TemperatureNotCelsius`] when
/// `temp_c > 270`.
pub fn schmidt_number(temp_c: f64) -> Result<f64, AppError> {
    check_celsius(temp_c)?;
    Ok(schmidt_number_unchecked(temp_c))
}

/// Derivative of the Schmidt number with respect to temperature,
/// dSc/dT (1/degC). Same Celsius guard as [`schmidt_number`].
pub fn d_schmidt_number_wrt_temp(temp_c: f64) -> Result<f64, AppError> {
    check_celsius(temp_c)?;
    Ok(d_schmidt_number_unchecked(temp_c))
}

/// Elementwise Schmidt number over a temperature series.
///
/// The Celsius guard is applied once to the NaN-ignoring median of the whole
/// series, matching the per-series unit check used in observational
/// pipelines, rather than per element.
pub fn schmidt_number_slice(temp_c: &[f64]) -> Result<Vec<f64>, AppError> {
    check_celsius(nanmedian(temp_c))?;
    Ok(temp_c.iter().map(|&t| schmidt_number_unchecked(t)).collect())
}

/// Elementwise dSc/dT over a temperature series, median-guarded like
/// [`schmidt_number_slice`].
pub fn d_schmidt_number_wrt_temp_slice(temp_c: &[f64]) -> Result<Vec<f64>, AppError> {
    check_celsius(nanmedian(temp_c))?;
    Ok(temp_c
        .iter()
        .map(|&t| d_schmidt_number_unchecked(t))
        .collect())
}

/// Derivative of kw with respect to the mean wind speed:
/// `a * 2*u_mean * sqrt(Sc/660)`.
///
/// * `temp_c` - temperature in degrees Celsius
/// * `u_mean` - mean wind speed in m/s
/// * `a` - gas-transfer coefficient, [`COEF_A`] for Wanninkhof (2014)
pub fn d_kw_wrt_umean(temp_c: f64, u_mean: f64, a: f64) -> Result<f64, AppError> {
    let sc = schmidt_number(temp_c)?;
    Ok(a * (2.0 * u_mean) * (sc / SC_REF_660).sqrt())
}

/// Derivative of kw with respect to the wind-speed standard deviation:
/// `a * 2*u_std * sqrt(Sc/660)`.
pub fn d_kw_wrt_ustd(temp_c: f64, u_std: f64, a: f64) -> Result<f64, AppError> {
    let sc = schmidt_number(temp_c)?;
    Ok(a * (2.0 * u_std) * (sc / SC_REF_660).sqrt())
}

/// Elementwise [`d_kw_wrt_umean`] over paired temperature/wind series, with
/// the Celsius guard applied once to the temperature median.
pub fn d_kw_wrt_umean_slice(
    temp_c: &[f64],
    u_mean: &[f64],
    a: f64,
) -> Result<Vec<f64>, AppError> {
    check_celsius(nanmedian(temp_c))?;
    zip_map(temp_c, u_mean, |t, u| {
        a * (2.0 * u) * (schmidt_number_unchecked(t) / SC_REF_660).sqrt()
    })
}

/// Elementwise [`d_kw_wrt_ustd`] over paired series, median-guarded like
/// [`d_kw_wrt_umean_slice`].
pub fn d_kw_wrt_ustd_slice(temp_c: &[f64], u_std: &[f64], a: f64) -> Result<Vec<f64>, AppError> {
    check_celsius(nanmedian(temp_c))?;
    zip_map(temp_c, u_std, |t, u| {
        a * (2.0 * u) * (schmidt_number_unchecked(t) / SC_REF_660).sqrt()
    })
}

/// Fractional uncertainty in kw from the mean wind speed:
/// `2*u_mean*delta_umean / (u_mean^2 + u_std^2)`.
///
/// All wind speeds and `delta_umean` in m/s; the result is dimensionless.
pub fn frac_kw_umean(u_mean: f64, u_std: f64, delta_umean: f64) -> f64 {
    (2.0 * u_mean * delta_umean) / (u_mean * u_mean + u_std * u_std)
}

/// Fractional uncertainty in kw from the wind-speed standard deviation:
/// `2*u_std*delta_ustd / (u_mean^2 + u_std^2)`.
pub fn frac_kw_ustd(u_mean: f64, u_std: f64, delta_ustd: f64) -> f64 {
    (2.0 * u_std * delta_ustd) / (u_mean * u_mean + u_std * u_std)
}

/// Elementwise [`frac_kw_umean`] over paired wind series with one
/// instrument uncertainty `delta_umean` for the whole series.
pub fn frac_kw_umean_slice(
    u_mean: &[f64],
    u_std: &[f64],
    delta_umean: f64,
) -> Result<Vec<f64>, AppError> {
    zip_map(u_mean, u_std, |m, s| frac_kw_umean(m, s, delta_umean))
}

/// Elementwise [`frac_kw_ustd`] over paired wind series.
pub fn frac_kw_ustd_slice(
    u_mean: &[f64],
    u_std: &[f64],
    delta_ustd: f64,
) -> Result<Vec<f64>, AppError> {
    zip_map(u_mean, u_std, |m, s| frac_kw_ustd(m, s, delta_ustd))
}

/// Fractional uncertainty in kw from the Schmidt number's temperature
/// sensitivity: `0.5 * (dSc/dT * delta_t) / Sc`.
///
/// The factor 0.5 is the standard propagation factor for the square-root
/// dependence of kw on Sc.
pub fn frac_kw_sc(temp_c: f64, delta_t: f64) -> Result<f64, AppError> {
    let sc = schmidt_number(temp_c)?;
    let delta_sc = d_schmidt_number_wrt_temp(temp_c)? * delta_t;
    Ok(0.5 * delta_sc / sc)
}

/// Elementwise [`frac_kw_sc`] over a temperature series, median-guarded.
pub fn frac_kw_sc_slice(temp_c: &[f64], delta_t: f64) -> Result<Vec<f64>, AppError> {
    check_celsius(nanmedian(temp_c))?;
    Ok(temp_c
        .iter()
        .map(|&t| {
            let sc = schmidt_number_unchecked(t);
            0.5 * d_schmidt_number_unchecked(t) * delta_t / sc
        })
        .collect())
}
