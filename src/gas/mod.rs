// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Gaseous attenuation from the line-by-line method of Recommendation
//! ITU-R P.676-12 Annex 1, evaluated at surface conditions.
//!
//! The clear-air model only consumes the scalar specific attenuation
//! (dB/km); everything else in this module is in support of that value.
//! Annex 1 states a 1-1000 GHz validity range, but the P.452 validation
//! data evaluate the same expressions down to 0.1 GHz, so no lower bound is
//! enforced here.

mod spectral_lines;

use spectral_lines::{OXYGEN_LINES, WATER_LINES};

/// Convert a water-vapour density (g/m³) to a partial pressure (hPa).
pub fn water_vapour_pressure_hpa(density_g_m3: f64, temp_k: f64) -> f64 {
    density_g_m3 * temp_k / 216.7
}

/// Imaginary part of the frequency-dependent complex refractivity due to
/// oxygen, including the dry continuum. (Eq. 3, 6-8)
fn refractivity_oxygen(freq_ghz: f64, dry_pressure_hpa: f64, water_vapour_hpa: f64, theta: f64) -> f64 {
    let mut line_sum = 0.0;
    for line in &OXYGEN_LINES {
        /* Eq. 3: line strength */
        let strength = line.a1 * 1.0e-7
            * dry_pressure_hpa
            * theta.powi(3)
            * (line.a2 * (1.0 - theta)).exp();

        /* Eq. 6a, 6b: line width with Zeeman broadening */
        let width = line.a3 * 1.0e-4
            * (dry_pressure_hpa * theta.powf(0.8 - line.a4) + 1.1 * water_vapour_hpa * theta);
        let width = (width * width + 2.25e-6).sqrt();

        /* Eq. 7: interference correction */
        let delta = (line.a5 + line.a6 * theta)
            * 1.0e-4
            * (dry_pressure_hpa + water_vapour_hpa)
            * theta.powf(0.8);

        let df_minus = line.freq_ghz - freq_ghz;
        let df_plus = line.freq_ghz + freq_ghz;
        let shape = freq_ghz / line.freq_ghz
            * ((width - delta * df_minus) / (df_minus * df_minus + width * width)
                + (width - delta * df_plus) / (df_plus * df_plus + width * width));

        line_sum += strength * shape;
    }

    /* Eq. 8, 9: dry continuum from pressure-induced nitrogen absorption and
     * the Debye spectrum */
    let debye_width = 5.6e-4 * (dry_pressure_hpa + water_vapour_hpa) * theta.powf(0.8);
    let continuum = freq_ghz
        * dry_pressure_hpa
        * theta
        * theta
        * (6.14e-5 / (debye_width * (1.0 + (freq_ghz / debye_width).powi(2)))
            + 1.4e-12 * dry_pressure_hpa * theta.powf(1.5)
                / (1.0 + 1.9e-5 * freq_ghz.powf(1.5)));

    line_sum + continuum
}

/// Imaginary part of the frequency-dependent complex refractivity due to
/// water vapour. (Eq. 3, 6-7; the interference correction is zero for
/// water-vapour lines.)
fn refractivity_water(freq_ghz: f64, dry_pressure_hpa: f64, water_vapour_hpa: f64, theta: f64) -> f64 {
    let mut line_sum = 0.0;
    for line in &WATER_LINES {
        let strength = line.b1 * 0.1
            * water_vapour_hpa
            * theta.powf(3.5)
            * (line.b2 * (1.0 - theta)).exp();

        let width = line.b3 * 1.0e-4
            * (dry_pressure_hpa * theta.powf(line.b4)
                + line.b5 * water_vapour_hpa * theta.powf(line.b6));
        let width = 0.535 * width + (0.217 * width * width + 2.1316e-12 * line.freq_ghz / theta).sqrt();

        let df_minus = line.freq_ghz - freq_ghz;
        let df_plus = line.freq_ghz + freq_ghz;
        let shape = freq_ghz / line.freq_ghz
            * (width / (df_minus * df_minus + width * width)
                + width / (df_plus * df_plus + width * width));

        line_sum += strength * shape;
    }
    line_sum
}

/// Specific gaseous attenuation due to dry air and water vapour. (Eq. 1)
///
/// Given:
/// * `freq_ghz`: frequency (GHz)
/// * `temp_k`: temperature (K)
/// * `total_pressure_hpa`: total (dry + water-vapour) pressure (hPa)
/// * `water_vapour_hpa`: water-vapour partial pressure (hPa)
///
/// Returned:
/// * specific attenuation (dB/km)
///
pub fn specific_attenuation_db_per_km(
    freq_ghz: f64,
    temp_k: f64,
    total_pressure_hpa: f64,
    water_vapour_hpa: f64,
) -> f64 {
    let theta = 300.0 / temp_k;
    let dry_pressure_hpa = total_pressure_hpa - water_vapour_hpa;
    0.1820
        * freq_ghz
        * (refractivity_oxygen(freq_ghz, dry_pressure_hpa, water_vapour_hpa, theta)
            + refractivity_water(freq_ghz, dry_pressure_hpa, water_vapour_hpa, theta))
}

/// Total gaseous attenuation over a path. (Eq. 9 of ITU-R P.452-17)
///
/// Given:
/// * `d_los_km`: path length accounting for the antenna height
///   differential (km)
/// * `freq_ghz`: frequency (GHz)
/// * `temp_k`: temperature (K)
/// * `dry_pressure_hpa`: dry air pressure (hPa)
/// * `water_vapour_density_g_m3`: surface water-vapour density (g/m³)
///
/// Returned:
/// * gaseous attenuation (dB)
///
pub fn path_attenuation_db(
    d_los_km: f64,
    freq_ghz: f64,
    temp_k: f64,
    dry_pressure_hpa: f64,
    water_vapour_density_g_m3: f64,
) -> f64 {
    let e = water_vapour_pressure_hpa(water_vapour_density_g_m3, temp_k);
    specific_attenuation_db_per_km(freq_ghz, temp_k, dry_pressure_hpa + e, e) * d_los_km
}
