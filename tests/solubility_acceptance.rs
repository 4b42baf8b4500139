use fluxuncert_rs::{
    AppError, d_solubility_wrt_salt, d_solubility_wrt_temp, frac_ko_salt, frac_ko_salt_slice,
    frac_ko_temp, frac_ko_temp_slice, solubility, solubility_slice, weiss1974_f1, weiss1974_f2,
};

fn approx_in_range(v: f64, min: f64, max: f64) {
    assert!((min..=max).contains(&v), "value {v} not in [{min}, {max}]");
}

#[test]
fn weiss1974_reproduces_typical_seawater_values() {
    // K here is the ln-form solubility coefficient of Weiss (1974); at
    // 20 degC and S = 35 it sits near -3.4.
    let k = solubility(20.0, 35.0);
    approx_in_range(k, -4.0, -3.0);
    assert_eq!(k, weiss1974_f1(20.0) + 35.0 * weiss1974_f2(20.0));
}

#[test]
fn temperature_partial_matches_finite_difference() {
    let h = 1e-6;
    for (t, s) in [(0.0, 33.0), (10.0, 35.0), (25.0, 36.5)] {
        let numeric = (solubility(t + h, s) - solubility(t, s)) / h;
        let analytic = d_solubility_wrt_temp(t, s);
        assert!(
            (numeric - analytic).abs() < 1e-5,
            "dK/dT at T={t}, S={s}: numeric {numeric} vs analytic {analytic}"
        );
    }
}

#[test]
fn salinity_partial_matches_finite_difference() {
    let h = 1e-6;
    let t = 15.0;
    let numeric = (solubility(t, 35.0 + h) - solubility(t, 35.0)) / h;
    let analytic = d_solubility_wrt_salt(t);
    assert!((numeric - analytic).abs() < 1e-8);
}

#[test]
fn propagated_deltas_scale_linearly_with_input_uncertainty() {
    // The Weiss family returns absolute propagated deltas, so doubling the
    // instrument uncertainty exactly doubles the output.
    let one = frac_ko_temp(18.0, 35.0, 0.05);
    let two = frac_ko_temp(18.0, 35.0, 0.10);
    assert_eq!(two, 2.0 * one);

    let one_s = frac_ko_salt(18.0, 0.1);
    let two_s = frac_ko_salt(18.0, 0.2);
    assert_eq!(two_s, 2.0 * one_s);
}

#[test]
fn absolute_zero_degenerates_to_nan() {
    // ln(Tk/100) with Tk = 0 is a domain fault; expected failure, not a value.
    assert!(solubility(-273.15, 35.0).is_nan());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = solubility(12.3, 34.7);
    let b = solubility(12.3, 34.7);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn slice_variant_mirrors_scalar_calls() {
    let temps = [0.0, 10.0, 20.0];
    let salts = [33.0, 35.0, 36.0];
    let out = solubility_slice(&temps, &salts).unwrap();
    assert_eq!(out.len(), 3);
    for (i, (&t, &s)) in temps.iter().zip(salts.iter()).enumerate() {
        assert_eq!(out[i], solubility(t, s));
    }
}

#[test]
fn propagated_delta_slices_mirror_scalar_calls() {
    let temps = [0.0, 10.0, 20.0];
    let salts = [33.0, 35.0, 36.0];
    let delta_t = 0.05;
    let delta_s = 0.1;

    let from_temp = frac_ko_temp_slice(&temps, &salts, delta_t).unwrap();
    let from_salt = frac_ko_salt_slice(&temps, delta_s);
    for (i, (&t, &s)) in temps.iter().zip(salts.iter()).enumerate() {
        assert_eq!(from_temp[i], frac_ko_temp(t, s, delta_t));
        assert_eq!(from_salt[i], frac_ko_salt(t, delta_s));
    }

    assert_eq!(
        frac_ko_temp_slice(&temps, &salts[..2], delta_t).unwrap_err(),
        AppError::LengthMismatch { left: 3, right: 2 }
    );
}
