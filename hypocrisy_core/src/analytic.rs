//! Closed-form predictions used to validate simulated ensembles.
//!
//! Mean consensus times come from the diffusion approximation of each
//! model, so they are exact only as `n` grows. Red-win probabilities are
//! martingale results and hold for every `n`.

/// `x·ln(x)`, continued to `0` at `x = 0`.
///
/// Intended for densities in `[0, 1]`.
pub fn xlogx(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * x.ln()
    }
}

/// Mean consensus time of the binary voter model.
///
/// `-n·(ρ·ln ρ + (1-ρ)·ln(1-ρ)) / rc` with `ρ = nr_init / n`.
pub fn predicted_mean_bvm(n: i64, nr_init: i64, rc: f64) -> f64 {
    let rho_r = nr_init as f64 / n as f64;
    -(n as f64) * (xlogx(rho_r) + xlogx(1.0 - rho_r)) / rc
}

/// Mean consensus time of the voter model with hypocrisy.
pub fn predicted_mean_cvm(
    n: i64,
    nr_ext_init: i64,
    nr_int_init: i64,
    rc: f64,
    re: f64,
    ri: f64,
) -> f64 {
    let rho_ext_init = nr_ext_init as f64 / n as f64;
    let rho_int_init = nr_int_init as f64 / n as f64;
    let m = (ri * rho_ext_init + re * rho_int_init) / (re + ri);
    let s = re + ri;
    let prefac = (rc + re + ri) * s * s * n as f64 / (rc * ri * (s * s + rc * ri));

    -prefac * (xlogx(m) + xlogx(1.0 - m))
}

/// Probability that red wins the binary voter model.
pub fn expected_red_fraction_bvm(n: i64, nr_init: i64) -> f64 {
    nr_init as f64 / n as f64
}

/// Probability that red wins the voter model with hypocrisy.
///
/// Weighted mix of the external and internal red densities, the conserved
/// quantity of the CVM dynamics.
pub fn expected_red_fraction_cvm(n: i64, nr_ext_init: i64, nr_int_init: i64, re: f64, ri: f64) -> f64 {
    (ri * nr_ext_init as f64 + re * nr_int_init as f64) / (n as f64 * (re + ri))
}
