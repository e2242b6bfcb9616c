// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Effective Earth geometry: smooth-earth surface fits, antenna horizons
//! and the path angular distance.

use crate::{constants::EARTH_RADIUS_KM, misc::wavelength_m, path::Path};

/// Antenna horizon elevation angles (mrad) and horizon distances (km) for
/// both terminals.
#[derive(Clone, Copy, Debug)]
pub struct HorizonGeometry {
    pub elevation_tx_mrad: f64,
    pub elevation_rx_mrad: f64,
    pub distance_tx_km: f64,
    pub distance_rx_km: f64,
}

/// Median effective Earth radius, exceeded for 50% of time. (Eq. 5, 6a)
///
/// Given:
/// * `delta_n`: average radio-refractivity lapse-rate through the lowest
///   1 km of the atmosphere (N-units/km, positive)
///
/// Returned:
/// * effective Earth radius (km)
///
pub fn median_effective_radius_km(delta_n: f64) -> f64 {
    EARTH_RADIUS_KM * 157.0 / (157.0 - delta_n)
}

/// Least-squares smooth-earth surface heights at the path ends.
/// (Annex 2 §5.1.6.2, Eq. 161-164)
///
/// Returned:
/// * (tx, rx) smooth-earth surface heights (m asl)
///
pub fn least_squares_smooth_heights_asl_m(path: &Path) -> (f64, f64) {
    let d_tot = path.total_distance_km();
    let mut v1 = 0.0;
    let mut v2 = 0.0;
    for pair in path.points().windows(2) {
        let (d0, h0) = (pair[0].distance_km, pair[0].height_asl_m);
        let (d1, h1) = (pair[1].distance_km, pair[1].height_asl_m);
        v1 += (d1 - d0) * (h1 + h0);
        v2 += (d1 - d0) * (h1 * (2.0 * d1 + d0) + h0 * (d1 + 2.0 * d0));
    }
    (
        (2.0 * v1 * d_tot - v2) / (d_tot * d_tot),
        (v2 - v1 * d_tot) / (d_tot * d_tot),
    )
}

/// Effective smooth-earth surface heights at the path ends for the
/// Delta-Bullington diffraction model, corrected for terrain obstructions
/// and limited by the ground height at each terminal.
/// (Annex 2 §5.1.6.3, Eq. 165-167)
///
/// Given:
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
///
/// Returned:
/// * (tx, rx) effective surface heights (m asl)
///
pub fn smooth_heights_for_diffraction_asl_m(
    path: &Path,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
) -> (f64, f64) {
    let d_tot = path.total_distance_km();
    let points = path.points();

    /* Highest obstruction above the terminal-to-terminal line and the
     * corresponding elevation angles. (Eq. 165) */
    let mut h_obs = f64::MIN;
    let mut alpha_obs_t = f64::MIN;
    let mut alpha_obs_r = f64::MIN;
    for point in &points[1..points.len() - 1] {
        let delta_d = d_tot - point.distance_km;
        let h =
            point.height_asl_m - (h_tx_asl_m * delta_d + h_rx_asl_m * point.distance_km) / d_tot;
        h_obs = h_obs.max(h);
        alpha_obs_t = alpha_obs_t.max(h / point.distance_km);
        alpha_obs_r = alpha_obs_r.max(h / delta_d);
    }

    let (mut h_st, mut h_sr) = least_squares_smooth_heights_asl_m(path);

    /* Eq. 166c-f: compensate for obstructions */
    if h_obs > 0.0 {
        let gt = alpha_obs_t / (alpha_obs_t + alpha_obs_r);
        let gr = alpha_obs_r / (alpha_obs_t + alpha_obs_r);
        h_st -= h_obs * gt;
        h_sr -= h_obs * gr;
    }

    /* Eq. 167: never above the actual ground at the terminals */
    (
        h_st.min(path.first().height_asl_m),
        h_sr.min(path.last().height_asl_m),
    )
}

/// Smooth-earth surface heights at the path ends for the ducting and
/// layer-reflection model: the least-squares heights limited by the ground
/// height at each terminal. (Annex 2 §5.1.6.4, Eq. 168)
pub fn smooth_heights_for_ducting_asl_m(path: &Path) -> (f64, f64) {
    let (h_st, h_sr) = least_squares_smooth_heights_asl_m(path);
    (
        h_st.min(path.first().height_asl_m),
        h_sr.min(path.last().height_asl_m),
    )
}

/// Antenna horizon elevation angles and distances.
/// (Annex 1 Attachment 2 §4, 5)
///
/// Given:
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `eff_radius_km`: median effective Earth radius (km)
/// * `freq_ghz`: frequency (GHz), used to place the Bullington point on
///   line-of-sight paths
///
/// # Notes:
///
/// 1) The path is trans-horizon when the highest interior elevation angle
///    seen from the transmitter exceeds the angle towards the receiver.
///    For such paths the horizon angles are those maxima and the horizon
///    distances locate them; ties go to the point nearest the terminal.
///
/// 2) For line-of-sight paths the elevation angles are those towards the
///    other antenna, and the horizon distances are set by the Bullington
///    point, the interior point with the largest diffraction parameter ν
///    at the median effective radius. (Eq. 155a)
///
pub fn horizon_angles_and_distances(
    path: &Path,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    eff_radius_km: f64,
    freq_ghz: f64,
) -> HorizonGeometry {
    let d_tot = path.total_distance_km();
    let points = path.points();
    let interior = &points[1..points.len() - 1];

    let elevation_mrad = |h_point: f64, h_ant: f64, d: f64| {
        1000.0 * (((h_point - h_ant) / (1000.0 * d)).atan() - d / (2.0 * eff_radius_km))
    };

    let theta_tx_rx = elevation_mrad(h_rx_asl_m, h_tx_asl_m, d_tot);

    let mut theta_max = f64::MIN;
    let mut index_max = None;
    for (i, point) in interior.iter().enumerate() {
        let theta = elevation_mrad(point.height_asl_m, h_tx_asl_m, point.distance_km);
        if theta > theta_max {
            theta_max = theta;
            index_max = Some(i);
        }
    }

    if let Some(i_tx) = index_max.filter(|_| theta_max > theta_tx_rx) {
        /* Trans-horizon: scan again from the receiver side, ties keeping
         * the point nearest the receiver. */
        let mut theta_r_max = f64::MIN;
        let mut i_rx = 0;
        for (i, point) in interior.iter().enumerate() {
            let theta = elevation_mrad(
                point.height_asl_m,
                h_rx_asl_m,
                d_tot - point.distance_km,
            );
            if theta >= theta_r_max {
                theta_r_max = theta;
                i_rx = i;
            }
        }
        return HorizonGeometry {
            elevation_tx_mrad: theta_max,
            elevation_rx_mrad: theta_r_max,
            distance_tx_km: interior[i_tx].distance_km,
            distance_rx_km: d_tot - interior[i_rx].distance_km,
        };
    }

    /* Line of sight: horizon distances from the Bullington point. */
    let lambda = wavelength_m(freq_ghz);
    let curvature = 1.0 / eff_radius_km;
    let mut nu_max = f64::MIN;
    let mut d_bp = d_tot / 2.0;
    for point in interior {
        let di = point.distance_km;
        let delta_d = d_tot - di;
        let nu = (point.height_asl_m + 500.0 * curvature * di * delta_d
            - (h_tx_asl_m * delta_d + h_rx_asl_m * di) / d_tot)
            * (0.002 * d_tot / (lambda * di * delta_d)).sqrt();
        if nu > nu_max {
            nu_max = nu;
            d_bp = di;
        }
    }

    HorizonGeometry {
        elevation_tx_mrad: theta_tx_rx,
        elevation_rx_mrad: elevation_mrad(h_tx_asl_m, h_rx_asl_m, d_tot),
        distance_tx_km: d_bp,
        distance_rx_km: d_tot - d_bp,
    }
}

/// Path angular distance (mrad) from the terminal elevation angles and the
/// geometric opening of the path. (Eq. 52)
pub fn path_angular_distance_mrad(
    elevation_tx_mrad: f64,
    elevation_rx_mrad: f64,
    d_tot_km: f64,
    eff_radius_km: f64,
) -> f64 {
    1000.0 * d_tot_km / eff_radius_km + elevation_tx_mrad + elevation_rx_mrad
}

/// Terrain roughness: the maximum height of the terrain above the
/// smooth-earth surface in the section of the path between, and including,
/// the horizon points. (Annex 2 §5.1.6.4)
///
/// Given:
/// * `h_st_asl_m`, `h_sr_asl_m`: smooth-earth surface heights at the ends
///   from [`smooth_heights_for_ducting_asl_m`] (m asl)
/// * `dist_tx_km`, `dist_rx_km`: horizon distances (km)
///
/// Returned:
/// * terrain roughness (m)
///
pub fn terrain_roughness_m(
    path: &Path,
    h_st_asl_m: f64,
    h_sr_asl_m: f64,
    dist_tx_km: f64,
    dist_rx_km: f64,
) -> f64 {
    let d_tot = path.total_distance_km();
    let slope = (h_sr_asl_m - h_st_asl_m) / d_tot;

    let mut h_m = f64::MIN;
    for point in path.points() {
        if point.distance_km >= dist_tx_km && point.distance_km <= d_tot - dist_rx_km {
            h_m = h_m.max(point.height_asl_m - (h_st_asl_m + slope * point.distance_km));
        }
    }
    h_m
}
