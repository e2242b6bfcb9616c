// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Line-of-sight propagation: free-space loss, gaseous attenuation and the
//! multipath/focusing correction (§4.1 of ITU-R P.452-17).

use crate::{constants::FREE_SPACE_LOSS_DB, gas};

/// The three line-of-sight losses of §4.1.
#[derive(Clone, Copy, Debug)]
pub struct LosLosses {
    /// Free-space loss with gaseous attenuation, L_bfsg (dB). (Eq. 8)
    pub free_space_with_gas_db: f64,
    /// Loss not exceeded for p% of time, L_b0p (dB). (Eq. 11)
    pub not_exceeded_p_db: f64,
    /// Loss not exceeded for β₀% of time, L_b0β (dB). (Eq. 12)
    pub not_exceeded_beta0_db: f64,
}

/// Free-space basic transmission loss. (Eq. 8 without the gas term)
pub fn free_space_loss_db(d_los_km: f64, freq_ghz: f64) -> f64 {
    FREE_SPACE_LOSS_DB + 20.0 * (freq_ghz * d_los_km).log10()
}

/// Correction for multipath and focusing effects at time percentage `q`,
/// zero at q = 50 and negative below. (Eq. 10a, 10b)
pub fn multipath_focusing_correction_db(dist_tx_km: f64, dist_rx_km: f64, q_percent: f64) -> f64 {
    2.6 * (1.0 - (-0.1 * (dist_tx_km + dist_rx_km)).exp()) * (q_percent / 50.0).log10()
}

/// Basic transmission losses for line-of-sight propagation.
///
/// Given:
/// * `d_tot_km`: path length (km)
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `freq_ghz`: frequency (GHz)
/// * `temp_k`: temperature (K)
/// * `dry_pressure_hpa`: dry air pressure (hPa)
/// * `frac_over_sea`: fraction of the path over sea, ω
/// * `p_percent`, `beta0_percent`: time percentages (%)
/// * `dist_tx_km`, `dist_rx_km`: antenna horizon distances (km)
///
/// # Notes:
///
/// 1) The line-of-sight distance accounts for the antenna height
///    differential even on trans-horizon paths. (Eq. 8a)
///
/// 2) The water-vapour density is ρ = 7.5 + 2.5ω g/m³. (Eq. 9a)
///
#[allow(clippy::too_many_arguments)]
pub fn transmission_losses(
    d_tot_km: f64,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    freq_ghz: f64,
    temp_k: f64,
    dry_pressure_hpa: f64,
    frac_over_sea: f64,
    p_percent: f64,
    beta0_percent: f64,
    dist_tx_km: f64,
    dist_rx_km: f64,
) -> LosLosses {
    let d_los_km = (d_tot_km * d_tot_km
        + ((h_tx_asl_m - h_rx_asl_m) / 1000.0) * ((h_tx_asl_m - h_rx_asl_m) / 1000.0))
        .sqrt();
    let rho = 7.5 + 2.5 * frac_over_sea;

    let free_space_with_gas_db = free_space_loss_db(d_los_km, freq_ghz)
        + gas::path_attenuation_db(d_los_km, freq_ghz, temp_k, dry_pressure_hpa, rho);

    LosLosses {
        free_space_with_gas_db,
        not_exceeded_p_db: free_space_with_gas_db
            + multipath_focusing_correction_db(dist_tx_km, dist_rx_km, p_percent),
        not_exceeded_beta0_db: free_space_with_gas_db
            + multipath_focusing_correction_db(dist_tx_km, dist_rx_km, beta0_percent),
    }
}
