pub mod budget;
pub mod delta_pco2;
pub mod error;
pub mod gas_transfer;
pub mod models;
pub mod solubility;
pub mod stats;

pub use crate::budget::uncertainty_budget;
pub use crate::delta_pco2::{frac_pco2ocn, frac_pco2ocn_slice};
pub use crate::error::AppError;
pub use crate::gas_transfer::wanninkhof2014::{
    COEF_A, d_kw_wrt_umean, d_kw_wrt_umean_slice, d_kw_wrt_ustd, d_kw_wrt_ustd_slice,
    d_schmidt_number_wrt_temp, d_schmidt_number_wrt_temp_slice, frac_kw_sc, frac_kw_sc_slice,
    frac_kw_umean, frac_kw_umean_slice, frac_kw_ustd, frac_kw_ustd_slice, schmidt_number,
    schmidt_number_slice,
};
pub use crate::models::{Inputs, UncertaintySummary};
pub use crate::solubility::weiss1974::{
    d_solubility_wrt_salt, d_solubility_wrt_salt_slice, d_solubility_wrt_temp,
    d_solubility_wrt_temp_slice, frac_ko_salt, frac_ko_salt_slice, frac_ko_temp,
    frac_ko_temp_slice, solubility, solubility_slice, weiss1974_f1, weiss1974_f2,
};
