// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared fixtures for the ITU validation suites.
//!
//! Expected values come from the ITU validation dataset "Validation
//! examples for software implementation of Recommendation ITU-R P.452"
//! (R19-WP3M-C-0364). All flat-terrain sweeps share the same environment:
//! path centre at latitude (51.2 + 50.73)/2, ΔN = 53, N₀ = 328, 15 C,
//! 1013 hPa dry pressure, horizon gains 20/5 dBi, vertical polarization,
//! both terminals 500 km inland and 10 m above ground, no clutter.

use p452::{clutter::ClutterCategory, LinkParameters, Path, Polarization, ProfilePoint, Zone};

pub const CENTRE_LAT_DEG: f64 = (51.2 + 50.73) / 2.0;
pub const DELTA_N: f64 = 53.0;
pub const N0: f64 = 328.0;
pub const TEMP_K: f64 = 288.15;
pub const DRY_PRESSURE_HPA: f64 = 1013.0;
pub const TX_GAIN_DBI: f64 = 20.0;
pub const RX_GAIN_DBI: f64 = 5.0;
pub const DIST_COAST_KM: f64 = 500.0;

/// The 35-case sweep of the validation spreadsheets: a frequency sweep at
/// p = 49%, then a time-percentage sweep at the first frequency.
pub const FREQ_GHZ_LIST: [f64; 35] = [
    2.0,
    0.1,
    0.15,
    0.225,
    0.3375,
    0.50625,
    0.759375,
    1.1390625,
    1.70859375,
    2.562890625,
    3.844335938,
    5.766503906,
    8.649755859,
    12.97463379,
    19.46195068,
    29.19292603,
    43.78938904,
    50.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
    2.0,
];

pub const P_PERCENT_LIST: [f64; 35] = [
    49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0, 49.0,
    49.0, 49.0, 49.0, 1.0, 4.0, 7.0, 10.0, 13.0, 16.0, 19.0, 22.0, 25.0, 28.0, 31.0, 34.0, 37.0,
    40.0, 43.0, 46.0, 49.0,
];

/// Flat terrain at sea level, all points inland.
pub fn flat_inland_path(total_km: f64, step_km: f64) -> Path {
    let n = (total_km / step_km).round() as usize;
    Path::new(
        (0..=n)
            .map(|i| ProfilePoint::new(i as f64 * step_km, 0.0, Zone::Inland))
            .collect(),
    )
    .unwrap()
}

pub fn flat_link(path: Path, freq_ghz: f64, time_percent: f64) -> LinkParameters {
    LinkParameters {
        path,
        tx_height_agl_m: 10.0,
        rx_height_agl_m: 10.0,
        centre_latitude_deg: CENTRE_LAT_DEG,
        freq_ghz,
        time_percent,
        polarization: Polarization::Vertical,
        temperature_k: TEMP_K,
        dry_pressure_hpa: DRY_PRESSURE_HPA,
        dist_coast_tx_km: DIST_COAST_KM,
        dist_coast_rx_km: DIST_COAST_KM,
        delta_n: DELTA_N,
        surface_refractivity: N0,
        tx_horizon_gain_dbi: TX_GAIN_DBI,
        rx_horizon_gain_dbi: RX_GAIN_DBI,
        tx_clutter: ClutterCategory::NoClutter,
        rx_clutter: ClutterCategory::NoClutter,
    }
}
