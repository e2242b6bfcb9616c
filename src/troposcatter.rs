// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tropospheric scatter (§4.3 of ITU-R P.452-17).

use crate::{effective_earth, gas, P452Error};

/// Basic transmission loss via tropospheric scatter, L_bs. (Eq. 45)
///
/// Given:
/// * `d_tot_km`: path length (km)
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `elevation_tx_mrad`, `elevation_rx_mrad`: horizon elevation angles for
///   a trans-horizon path, elevation angles towards the other antenna for a
///   line-of-sight path (mrad)
/// * `eff_radius_km`: median effective Earth radius (km)
/// * `surface_refractivity`: sea-level surface refractivity N₀ (N-units)
/// * `tx_horizon_gain_dbi`, `rx_horizon_gain_dbi`: antenna gains towards
///   the horizon along the path (dBi)
/// * `temp_k`: temperature (K)
/// * `dry_pressure_hpa`: dry air pressure (hPa)
/// * `p_percent`: time percentage, in [0.001, 50]
///
/// # Notes:
///
/// 1) The gaseous attenuation uses a fixed water-vapour density of
///    3 g/m³. (Eq. 9)
///
#[allow(clippy::too_many_arguments)]
pub fn troposcatter_loss_db(
    d_tot_km: f64,
    freq_ghz: f64,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    elevation_tx_mrad: f64,
    elevation_rx_mrad: f64,
    eff_radius_km: f64,
    surface_refractivity: f64,
    tx_horizon_gain_dbi: f64,
    rx_horizon_gain_dbi: f64,
    temp_k: f64,
    dry_pressure_hpa: f64,
    p_percent: f64,
) -> Result<f64, P452Error> {
    if !(0.001..=50.0).contains(&p_percent) {
        return Err(P452Error::InvalidTimePercent {
            function: "troposcatter::troposcatter_loss_db",
            value: p_percent,
            range: "[0.001, 50]",
        });
    }

    let theta = effective_earth::path_angular_distance_mrad(
        elevation_tx_mrad,
        elevation_rx_mrad,
        d_tot_km,
        eff_radius_km,
    );

    /* Eq. 45a: frequency-dependent loss */
    let l_f = 25.0 * freq_ghz.log10() - 2.5 * (freq_ghz / 2.0).log10() * (freq_ghz / 2.0).log10();

    /* Eq. 45b: aperture-to-medium coupling loss */
    let l_c = 0.051 * (0.055 * (tx_horizon_gain_dbi + rx_horizon_gain_dbi)).exp();

    /* Eq. 8a, 9: gaseous attenuation at ρ = 3 g/m³ */
    let d_los = (d_tot_km * d_tot_km
        + ((h_tx_asl_m - h_rx_asl_m) / 1000.0) * ((h_tx_asl_m - h_rx_asl_m) / 1000.0))
        .sqrt();
    let gas_db = gas::path_attenuation_db(d_los, freq_ghz, temp_k, dry_pressure_hpa, 3.0);

    /* Eq. 45 */
    Ok(190.0 + l_f + 20.0 * d_tot_km.log10() + 0.573 * theta
        - 0.15 * surface_refractivity
        + l_c
        + gas_db
        - 10.1 * (-(p_percent / 50.0).log10()).powf(0.7))
}
