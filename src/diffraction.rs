// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Delta-Bullington diffraction (§4.2 of ITU-R P.452-17): a knife-edge
//! Bullington construction over the actual terrain, a spherical-earth
//! diffraction term for an equivalent smooth path, and their combination
//! interpolated between median and β₀-exceedance effective Earth radii.

use crate::{
    constants::{
        EFF_RADIUS_BETA0_KM, LAND_CONDUCTIVITY_S_M, LAND_RELATIVE_PERMITTIVITY,
        SEA_CONDUCTIVITY_S_M, SEA_RELATIVE_PERMITTIVITY,
    },
    effective_earth,
    misc::{interpolate, inv_cum_norm, wavelength_m},
    path::Path,
    polarization::Polarization,
    P452Error,
};

/// Diffraction losses at the median effective Earth radius and at the
/// requested time percentage.
#[derive(Clone, Copy, Debug)]
pub struct DiffractionLosses {
    /// L_d50: loss not exceeded for 50% of time (dB)
    pub median_db: f64,
    /// L_dp: loss not exceeded for p% of time (dB)
    pub not_exceeded_p_db: f64,
}

/// Bullington part of the diffraction loss for a profile given as
/// (distance km, height m asl) pairs. (§4.2.1, Eq. 14-22)
///
/// Given:
/// * `profile`: profile points including both terminals
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `eff_radius_km`: effective Earth radius (km)
/// * `freq_ghz`: frequency (GHz)
///
/// Returned:
/// * Bullington loss (dB)
///
pub fn bullington_loss_db(
    profile: &[(f64, f64)],
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    eff_radius_km: f64,
    freq_ghz: f64,
) -> f64 {
    let d_tot = profile[profile.len() - 1].0;
    let curvature = 1.0 / eff_radius_km;
    let lambda = wavelength_m(freq_ghz);
    let interior = &profile[1..profile.len() - 1];

    /* Eq. 14: highest slope from the transmitter to an interior point */
    let mut slope_tx_max = f64::MIN;
    for &(di, hi) in interior {
        let slope = (hi + 500.0 * curvature * di * (d_tot - di) - h_tx_asl_m) / di;
        slope_tx_max = slope_tx_max.max(slope);
    }

    /* Eq. 15: slope of the line from transmitter to receiver */
    let slope_tx_rx = (h_rx_asl_m - h_tx_asl_m) / d_tot;

    let mut knife_edge_db = 0.0;
    if slope_tx_max < slope_tx_rx {
        /* Line of sight: the largest diffraction parameter over the
         * interior points. (Eq. 16) */
        let mut nu_max = f64::MIN;
        for &(di, hi) in interior {
            let delta_d = d_tot - di;
            let nu = (hi + 500.0 * curvature * di * delta_d
                - (h_tx_asl_m * delta_d + h_rx_asl_m * di) / d_tot)
                * (0.002 * d_tot / (lambda * di * delta_d)).sqrt();
            nu_max = nu_max.max(nu);
        }
        if nu_max > -0.78 {
            /* Eq. 13, 17 */
            knife_edge_db = 6.9
                + 20.0 * (((nu_max - 0.1) * (nu_max - 0.1) + 1.0).sqrt() + nu_max - 0.1).log10();
        }
    } else {
        /* Trans-horizon: highest slope from the receiver (Eq. 18), then the
         * diffraction parameter at the Bullington point. (Eq. 19, 20) */
        let mut slope_rx_max = f64::MIN;
        for &(di, hi) in interior {
            let slope = (hi + 500.0 * curvature * di * (d_tot - di) - h_rx_asl_m) / (d_tot - di);
            slope_rx_max = slope_rx_max.max(slope);
        }
        let d_bp = (h_rx_asl_m - h_tx_asl_m + slope_rx_max * d_tot) / (slope_tx_max + slope_rx_max);
        let nu_b = (h_tx_asl_m + slope_tx_max * d_bp
            - (h_tx_asl_m * (d_tot - d_bp) + h_rx_asl_m * d_bp) / d_tot)
            * (0.002 * d_tot / (lambda * d_bp * (d_tot - d_bp))).sqrt();
        if nu_b > -0.78 {
            /* Eq. 13, 21 */
            knife_edge_db =
                6.9 + 20.0 * (((nu_b - 0.1) * (nu_b - 0.1) + 1.0).sqrt() + nu_b - 0.1).log10();
        }
    }

    /* Eq. 22 */
    knife_edge_db + (1.0 - (-knife_edge_db / 6.0).exp()) * (10.0 + 0.02 * d_tot)
}

/// First-term spherical-earth diffraction loss for a single surface type.
/// (§4.2.2.1, Eq. 30-37)
#[allow(clippy::too_many_arguments)]
fn first_term_single_zone_db(
    rel_permittivity: f64,
    conductivity_s_m: f64,
    eff_radius_km: f64,
    d_tot_km: f64,
    h_te_m: f64,
    h_re_m: f64,
    freq_ghz: f64,
    polarization: Polarization,
) -> f64 {
    /* Eq. 30a: normalized surface admittance, horizontal polarization */
    let k_h = 0.036
        * (eff_radius_km * freq_ghz).powf(-1.0 / 3.0)
        * ((rel_permittivity - 1.0) * (rel_permittivity - 1.0)
            + (18.0 * conductivity_s_m / freq_ghz) * (18.0 * conductivity_s_m / freq_ghz))
            .powf(-0.25);
    let k = match polarization {
        Polarization::Horizontal => k_h,
        Polarization::Vertical | Polarization::Circular => {
            /* Eq. 30b */
            let k_v = k_h
                * (rel_permittivity * rel_permittivity
                    + (18.0 * conductivity_s_m / freq_ghz) * (18.0 * conductivity_s_m / freq_ghz))
                    .sqrt();
            if polarization == Polarization::Vertical {
                k_v
            } else {
                /* Vector sum of the two linear components. */
                (k_h * k_h + k_v * k_v).sqrt()
            }
        }
    };

    /* Eq. 31 */
    let k2 = k * k;
    let k4 = k2 * k2;
    let beta_dft = (1.0 + 1.6 * k2 + 0.67 * k4) / (1.0 + 4.5 * k2 + 1.53 * k4);

    /* Eq. 32: normalized distance */
    let x = 21.88 * beta_dft * (freq_ghz / (eff_radius_km * eff_radius_km)).powf(1.0 / 3.0)
        * d_tot_km;

    /* Eq. 33, 36: normalized heights */
    let y = 0.9575 * beta_dft * (freq_ghz * freq_ghz / eff_radius_km).powf(1.0 / 3.0);
    let b_t = beta_dft * y * h_te_m;
    let b_r = beta_dft * y * h_re_m;

    /* Eq. 34: distance term */
    let f_x = if x >= 1.6 {
        11.0 + 10.0 * x.log10() - 17.6 * x
    } else {
        -20.0 * x.log10() - 5.6488 * x.powf(1.425)
    };

    /* Eq. 35: height-gain term, floored at 2 + 20 log K */
    let g_min = 2.0 + 20.0 * k.log10();
    let g = |b: f64| -> f64 {
        let g = if b > 2.0 {
            17.6 * (b - 1.1).sqrt() - 5.0 * (b - 1.1).log10() - 8.0
        } else {
            20.0 * (b + 0.1 * b * b * b).log10()
        };
        g.max(g_min)
    };

    /* Eq. 37 */
    -f_x - g(b_t) - g(b_r)
}

/// First-term spherical-earth diffraction loss, blended between land and
/// sea surfaces by the fraction of the path over sea. (Eq. 29)
fn first_term_db(
    eff_radius_km: f64,
    d_tot_km: f64,
    h_te_m: f64,
    h_re_m: f64,
    freq_ghz: f64,
    frac_over_sea: f64,
    polarization: Polarization,
) -> f64 {
    let land = first_term_single_zone_db(
        LAND_RELATIVE_PERMITTIVITY,
        LAND_CONDUCTIVITY_S_M,
        eff_radius_km,
        d_tot_km,
        h_te_m,
        h_re_m,
        freq_ghz,
        polarization,
    );
    let sea = first_term_single_zone_db(
        SEA_RELATIVE_PERMITTIVITY,
        SEA_CONDUCTIVITY_S_M,
        eff_radius_km,
        d_tot_km,
        h_te_m,
        h_re_m,
        freq_ghz,
        polarization,
    );
    interpolate(land, sea, frac_over_sea)
}

/// Spherical-earth diffraction loss for an equivalent smooth path.
/// (§4.2.2, Eq. 23-28)
///
/// Given:
/// * `d_tot_km`: path length (km)
/// * `h_te_m`, `h_re_m`: effective antenna heights above the smooth-earth
///   surface (m)
/// * `eff_radius_km`: effective Earth radius (km)
/// * `freq_ghz`: frequency (GHz)
/// * `frac_over_sea`: fraction of the path over sea, ω
///
/// # Notes:
///
/// 1) Beyond the marginal line-of-sight distance the first-term method is
///    used at the given radius; inside it, zero loss is returned when the
///    path clearance exceeds the required clearance, otherwise the
///    first-term loss at a modified radius is scaled by the clearance
///    deficit. (Eq. 23-28)
///
pub fn spherical_earth_loss_db(
    d_tot_km: f64,
    h_te_m: f64,
    h_re_m: f64,
    eff_radius_km: f64,
    freq_ghz: f64,
    frac_over_sea: f64,
    polarization: Polarization,
) -> f64 {
    let lambda = wavelength_m(freq_ghz);

    /* Eq. 23: marginal line-of-sight distance for a smooth path */
    let d_los = (2.0 * eff_radius_km).sqrt()
        * ((0.001 * h_te_m).sqrt() + (0.001 * h_re_m).sqrt());
    if d_tot_km >= d_los {
        return first_term_db(
            eff_radius_km,
            d_tot_km,
            h_te_m,
            h_re_m,
            freq_ghz,
            frac_over_sea,
            polarization,
        );
    }

    /* Eq. 25: the point of smallest clearance */
    let c = (h_te_m - h_re_m) / (h_te_m + h_re_m);
    let m = 250.0 * d_tot_km * d_tot_km / (eff_radius_km * (h_te_m + h_re_m));
    let b = 2.0
        * ((m + 1.0) / (3.0 * m)).sqrt()
        * (std::f64::consts::FRAC_PI_3
            + (1.5 * c * (3.0 * m / ((m + 1.0) * (m + 1.0) * (m + 1.0))).sqrt()).acos() / 3.0)
            .cos();
    let d_se1 = d_tot_km / 2.0 * (1.0 + b);
    let d_se2 = d_tot_km - d_se1;

    /* Eq. 24 */
    let h_se = ((h_te_m - 500.0 * d_se1 * d_se1 / eff_radius_km) * d_se2
        + (h_re_m - 500.0 * d_se2 * d_se2 / eff_radius_km) * d_se1)
        / d_tot_km;

    /* Eq. 26: clearance required for zero diffraction loss */
    let h_req = 17.456 * (d_se1 * d_se2 * lambda / d_tot_km).sqrt();
    if h_se > h_req {
        return 0.0;
    }

    /* Eq. 27, 28: first term at a modified radius, scaled by the
     * clearance deficit */
    let modified_radius_km =
        500.0 * (d_tot_km / (h_te_m.sqrt() + h_re_m.sqrt())) * (d_tot_km / (h_te_m.sqrt() + h_re_m.sqrt()));
    let loss_first_term = first_term_db(
        modified_radius_km,
        d_tot_km,
        h_te_m,
        h_re_m,
        freq_ghz,
        frac_over_sea,
        polarization,
    );
    if loss_first_term < 0.0 {
        return 0.0;
    }
    (1.0 - h_se / h_req) * loss_first_term
}

/// Delta-Bullington diffraction loss at one effective Earth radius.
/// (Eq. 39, 40)
#[allow(clippy::too_many_arguments)]
fn delta_bullington_db(
    path: &Path,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    h_te_m: f64,
    h_re_m: f64,
    eff_radius_km: f64,
    freq_ghz: f64,
    frac_over_sea: f64,
    polarization: Polarization,
) -> f64 {
    let actual: Vec<(f64, f64)> = path
        .points()
        .iter()
        .map(|p| (p.distance_km, p.height_asl_m))
        .collect();
    let zero_height: Vec<(f64, f64)> =
        path.points().iter().map(|p| (p.distance_km, 0.0)).collect();

    /* Bullington loss over the actual terrain */
    let l_bulla = bullington_loss_db(&actual, h_tx_asl_m, h_rx_asl_m, eff_radius_km, freq_ghz);

    /* Bullington loss for an equivalent smooth path */
    let l_bulls = bullington_loss_db(&zero_height, h_te_m, h_re_m, eff_radius_km, freq_ghz);

    let l_sph = spherical_earth_loss_db(
        path.total_distance_km(),
        h_te_m,
        h_re_m,
        eff_radius_km,
        freq_ghz,
        frac_over_sea,
        polarization,
    );

    /* Eq. 40 */
    l_bulla + (l_sph - l_bulls).max(0.0)
}

/// Delta-Bullington diffraction losses at the median effective radius and
/// at time percentage p. (§4.2.3, Eq. 41)
///
/// Given:
/// * `path`: terrain profile
/// * `h_tx_asl_m`, `h_rx_asl_m`: antenna heights (m asl)
/// * `freq_ghz`: frequency (GHz)
/// * `delta_n`: refractivity lapse-rate (N-units/km)
/// * `p_percent`: time percentage, in [0.001, 50]
/// * `beta0_percent`: β₀ (%)
/// * `frac_over_sea`: fraction of the path over sea, ω
///
/// # Notes:
///
/// 1) For p < 50 the loss is interpolated between the values at the median
///    effective radius and at the β₀-exceedance radius, with the weight
///    F_i built from the inverse cumulative normal. (Eq. 41a)
///
#[allow(clippy::too_many_arguments)]
pub fn diffraction_losses(
    path: &Path,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    freq_ghz: f64,
    delta_n: f64,
    polarization: Polarization,
    p_percent: f64,
    beta0_percent: f64,
    frac_over_sea: f64,
) -> Result<DiffractionLosses, P452Error> {
    if !(0.001..=50.0).contains(&p_percent) {
        return Err(P452Error::InvalidTimePercent {
            function: "diffraction::diffraction_losses",
            value: p_percent,
            range: "[0.001, 50]",
        });
    }

    /* Effective antenna heights above the smooth-earth surface */
    let (h_st, h_sr) = effective_earth::smooth_heights_for_diffraction_asl_m(
        path, h_tx_asl_m, h_rx_asl_m,
    );
    let h_te = h_tx_asl_m - h_st;
    let h_re = h_rx_asl_m - h_sr;

    let median_db = delta_bullington_db(
        path,
        h_tx_asl_m,
        h_rx_asl_m,
        h_te,
        h_re,
        effective_earth::median_effective_radius_km(delta_n),
        freq_ghz,
        frac_over_sea,
        polarization,
    );

    if p_percent == 50.0 {
        return Ok(DiffractionLosses {
            median_db,
            not_exceeded_p_db: median_db,
        });
    }

    let beta0_db = delta_bullington_db(
        path,
        h_tx_asl_m,
        h_rx_asl_m,
        h_te,
        h_re,
        EFF_RADIUS_BETA0_KM,
        freq_ghz,
        frac_over_sea,
        polarization,
    );

    /* Eq. 41a */
    let fi = if p_percent > beta0_percent {
        inv_cum_norm(p_percent / 100.0) / inv_cum_norm(beta0_percent / 100.0)
    } else {
        1.0
    };

    Ok(DiffractionLosses {
        median_db,
        not_exceeded_p_db: interpolate(median_db, beta0_db, fi),
    })
}
