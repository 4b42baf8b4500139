use serde::{Deserialize, Serialize};

/// One observation with its instrument uncertainties.
///
/// Units follow the crate convention: temperature in degrees Celsius,
/// salinity in practical salinity units, wind speeds in m/s, pCO2 in uatm.
/// Every `delta_*` is an absolute uncertainty in the unit of its variable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inputs {
    pub temp_c: f64,
    pub salt: f64,
    pub u_mean: f64,
    pub u_std: f64,
    pub pco2: f64,
    pub delta_temp_c: f64,
    pub delta_salt: f64,
    pub delta_u_mean: f64,
    pub delta_u_std: f64,
    pub delta_pco2: f64,
}

/// Every quantity and uncertainty term evaluated for one observation.
///
/// Fields:
/// - `solubility`, `schmidt_number`: nominal values K(T,S) and Sc(T)
/// - `delta_ko_temp`, `delta_ko_salt`: absolute propagated deltas in K
///   (the Weiss family is not normalized; see `solubility::weiss1974`)
/// - `frac_kw_umean`, `frac_kw_ustd`, `frac_kw_sc`: dimensionless fractional
///   uncertainties in the gas-transfer velocity
/// - `frac_kw_combined`: the kw terms summed in quadrature
/// - `frac_pco2`: fractional uncertainty in pCO2
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UncertaintySummary {
    pub solubility: f64,
    pub schmidt_number: f64,
    pub delta_ko_temp: f64,
    pub delta_ko_salt: f64,
    pub frac_kw_umean: f64,
    pub frac_kw_ustd: f64,
    pub frac_kw_sc: f64,
    pub frac_kw_combined: f64,
    pub frac_pco2: f64,
}
