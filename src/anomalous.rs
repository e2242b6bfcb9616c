// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Anomalous propagation (§4.4 of ITU-R P.452-17): basic transmission loss
//! during periods of ducting and elevated-layer reflection.

use crate::{
    effective_earth::{self, HorizonGeometry},
    gas,
    path::Path,
};

/// Fixed coupling losses between the antennas and the anomalous
/// propagation structure, except for clutter losses. (Eq. 47-49)
#[allow(clippy::too_many_arguments)]
fn fixed_coupling_loss_db(
    freq_ghz: f64,
    horizon: &HorizonGeometry,
    dist_coast_tx_km: f64,
    dist_coast_rx_km: f64,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    frac_over_sea: f64,
) -> f64 {
    /* Eq. 47a: empirical correction for wavelength-induced coupling below
     * 0.5 GHz */
    let a_lf = if freq_ghz < 0.5 {
        45.375 - 137.0 * freq_ghz + 92.5 * freq_ghz * freq_ghz
    } else {
        0.0
    };

    /* Eq. 48a: horizon angles with the duct component removed */
    let theta_tx = horizon.elevation_tx_mrad - 0.1 * horizon.distance_tx_km;
    let theta_rx = horizon.elevation_rx_mrad - 0.1 * horizon.distance_rx_km;

    /* Eq. 48: site-shielding diffraction losses */
    let a_st = if theta_tx > 0.0 {
        20.0 * (1.0 + 0.361 * theta_tx * (freq_ghz * horizon.distance_tx_km).sqrt()).log10()
            + 0.264 * theta_tx * freq_ghz.powf(1.0 / 3.0)
    } else {
        0.0
    };
    let a_sr = if theta_rx > 0.0 {
        20.0 * (1.0 + 0.361 * theta_rx * (freq_ghz * horizon.distance_rx_km).sqrt()).log10()
            + 0.264 * theta_rx * freq_ghz.powf(1.0 / 3.0)
    } else {
        0.0
    };

    /* Eq. 49: over-sea surface duct coupling, only for terminals close to
     * the coast on a mostly-sea path */
    let mut a_ct = 0.0;
    let mut a_cr = 0.0;
    if frac_over_sea >= 0.75
        && dist_coast_tx_km <= horizon.distance_tx_km
        && dist_coast_tx_km <= 5.0
        && dist_coast_rx_km <= horizon.distance_rx_km
        && dist_coast_rx_km <= 5.0
    {
        a_ct = -3.0
            * (-0.25 * dist_coast_tx_km * dist_coast_tx_km).exp()
            * (1.0 + (0.07 * (50.0 - h_tx_asl_m)).tanh());
        a_cr = -3.0
            * (-0.25 * dist_coast_rx_km * dist_coast_rx_km).exp()
            * (1.0 + (0.07 * (50.0 - h_rx_asl_m)).tanh());
    }

    /* Eq. 47 */
    102.45
        + 20.0 * (freq_ghz * (horizon.distance_tx_km + horizon.distance_rx_km)).log10()
        + a_lf
        + a_st
        + a_sr
        + a_ct
        + a_cr
}

/// Time-percentage- and angular-distance-dependent losses within the
/// anomalous propagation mechanism. (Eq. 50-56)
#[allow(clippy::too_many_arguments)]
fn time_and_angular_loss_db(
    path: &Path,
    freq_ghz: f64,
    horizon: &HorizonGeometry,
    eff_radius_km: f64,
    h_te_m: f64,
    h_re_m: f64,
    terrain_roughness_m: f64,
    p_percent: f64,
    beta0_percent: f64,
) -> f64 {
    let d_tot = path.total_distance_km();

    /* Eq. 51: specific attenuation over the angular distance */
    let gamma_d = 5.0e-5 * eff_radius_km * freq_ghz.powf(1.0 / 3.0);

    /* Eq. 52a: horizon angles with the site-shielding component removed */
    let theta_tx = horizon.elevation_tx_mrad.min(0.1 * horizon.distance_tx_km);
    let theta_rx = horizon.elevation_rx_mrad.min(0.1 * horizon.distance_rx_km);
    let theta = effective_earth::path_angular_distance_mrad(theta_tx, theta_rx, d_tot, eff_radius_km);

    /* Eq. 3a, 55a: α floored at -3.4 */
    let tau = 1.0 - (-(4.12e-4 * path.longest_contiguous_inland_km().powf(2.41))).exp();
    let alpha = (-0.6 - 3.5e-9 * d_tot.powf(3.1) * tau).max(-3.4);

    /* Eq. 55: path geometry correction μ₂, capped at 1 */
    let geometry = (d_tot / (h_te_m.sqrt() + h_re_m.sqrt())) * (d_tot / (h_te_m.sqrt() + h_re_m.sqrt()));
    let mu2 = (500.0 / eff_radius_km * geometry).powf(alpha).min(1.0);

    /* Eq. 56a: distance beyond the horizons, at most 40 km */
    let d_i = (d_tot - horizon.distance_tx_km - horizon.distance_rx_km).min(40.0);
    /* Eq. 56: terrain roughness correction μ₃ */
    let mu3 = if terrain_roughness_m > 10.0 {
        (-4.6e-5 * (terrain_roughness_m - 10.0) * (43.0 + 6.0 * d_i)).exp()
    } else {
        1.0
    };

    /* Eq. 54 */
    let beta = beta0_percent * mu2 * mu3;

    /* Eq. 53a */
    let log_beta = beta.log10();
    let gamma = 1.076 / (2.0058 - log_beta).powf(1.012)
        * (-(9.51 - 4.8 * log_beta + 0.198 * log_beta * log_beta) * 1.0e-6 * d_tot.powf(1.13))
            .exp();

    /* Eq. 53 */
    let time_variability = -12.0
        + (1.2 + 3.7e-3 * d_tot) * (p_percent / beta).log10()
        + 12.0 * (p_percent / beta).powf(gamma);

    /* Eq. 50 */
    gamma_d * theta + time_variability
}

/// Basic transmission loss during ducting and layer reflection, L_ba.
/// (Eq. 46)
///
/// Given:
/// * `path`: terrain profile
/// * `freq_ghz`: frequency (GHz)
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `temp_k`: temperature (K)
/// * `dry_pressure_hpa`: dry air pressure (hPa)
/// * `dist_coast_tx_km`, `dist_coast_rx_km`: distance over land from each
///   terminal to the coast, 0 for a terminal at sea (km)
/// * `p_percent`, `beta0_percent`: time percentages (%)
/// * `eff_radius_km`: median effective Earth radius (km)
/// * `horizon`: horizon angles and distances of the path
/// * `frac_over_sea`: fraction of the path over sea, ω
///
/// # Notes:
///
/// 1) Effective antenna heights for the duct are taken above the
///    least-squares smooth surface limited by the terminal ground heights,
///    floored at 1 m so the path-geometry correction stays defined.
///
#[allow(clippy::too_many_arguments)]
pub fn anomalous_prop_loss_db(
    path: &Path,
    freq_ghz: f64,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    temp_k: f64,
    dry_pressure_hpa: f64,
    dist_coast_tx_km: f64,
    dist_coast_rx_km: f64,
    p_percent: f64,
    beta0_percent: f64,
    eff_radius_km: f64,
    horizon: &HorizonGeometry,
    frac_over_sea: f64,
) -> f64 {
    let d_tot = path.total_distance_km();

    /* Effective antenna heights and terrain roughness for the duct */
    let (h_st, h_sr) = effective_earth::smooth_heights_for_ducting_asl_m(path);
    let h_te = (h_tx_asl_m - h_st).max(1.0);
    let h_re = (h_rx_asl_m - h_sr).max(1.0);
    let h_m = effective_earth::terrain_roughness_m(
        path,
        h_st,
        h_sr,
        horizon.distance_tx_km,
        horizon.distance_rx_km,
    );

    let coupling = fixed_coupling_loss_db(
        freq_ghz,
        horizon,
        dist_coast_tx_km,
        dist_coast_rx_km,
        h_tx_asl_m,
        h_rx_asl_m,
        frac_over_sea,
    );
    let time_and_angular = time_and_angular_loss_db(
        path,
        freq_ghz,
        horizon,
        eff_radius_km,
        h_te,
        h_re,
        h_m,
        p_percent,
        beta0_percent,
    );

    /* Eq. 8a, 9: gaseous attenuation over the line-of-sight distance */
    let d_los = (d_tot * d_tot
        + ((h_tx_asl_m - h_rx_asl_m) / 1000.0) * ((h_tx_asl_m - h_rx_asl_m) / 1000.0))
        .sqrt();
    let gas_db = gas::path_attenuation_db(
        d_los,
        freq_ghz,
        temp_k,
        dry_pressure_hpa,
        7.5 + 2.5 * frac_over_sea,
    );

    coupling + time_and_angular + gas_db
}
