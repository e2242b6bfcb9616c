// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Total clear-air attenuation (§4.6 of ITU-R P.452-17): the interpolation
//! of the line-of-sight, diffraction, ducting and troposcatter losses into
//! the overall prediction.

use crate::{
    anomalous, basic_prop,
    clutter::{self, ClutterCategory},
    constants::DUCTING_SOFT_MIN_ETA,
    diffraction,
    effective_earth::{self, HorizonGeometry},
    misc::{interpolate, inv_cum_norm},
    path::Path,
    polarization::Polarization,
    troposcatter, P452Error,
};

/// Everything the model needs to describe one link.
///
/// Units: degrees, km, m, GHz, K, hPa, dBi. The profile carries its zone
/// tags; the clutter categories describe the land cover around each
/// terminal.
#[derive(Clone, Debug)]
pub struct LinkParameters {
    /// Terrain profile from transmitter to receiver with zone tags
    pub path: Path,
    /// Transmitter antenna height above ground (m)
    pub tx_height_agl_m: f64,
    /// Receiver antenna height above ground (m)
    pub rx_height_agl_m: f64,
    /// Latitude of the path centre (degrees)
    pub centre_latitude_deg: f64,
    /// Frequency (GHz); the model is intended for 0.1-50 GHz
    pub freq_ghz: f64,
    /// Annual time percentage for which the loss is not exceeded, (0, 50]
    pub time_percent: f64,
    pub polarization: Polarization,
    /// Surface temperature (K)
    pub temperature_k: f64,
    /// Dry air pressure (hPa)
    pub dry_pressure_hpa: f64,
    /// Distance over land from the transmitter to the coast (km), 0 for a
    /// terminal at sea
    pub dist_coast_tx_km: f64,
    /// See `dist_coast_tx_km`
    pub dist_coast_rx_km: f64,
    /// Average refractivity lapse-rate through the lowest 1 km of the
    /// atmosphere, ΔN (N-units/km, positive)
    pub delta_n: f64,
    /// Sea-level surface refractivity at the path centre, N₀ (N-units)
    pub surface_refractivity: f64,
    /// Antenna gain towards the horizon along the path (dBi)
    pub tx_horizon_gain_dbi: f64,
    /// See `tx_horizon_gain_dbi`
    pub rx_horizon_gain_dbi: f64,
    pub tx_clutter: ClutterCategory,
    pub rx_clutter: ClutterCategory,
}

/// The total clear-air prediction for one link.
///
/// Construction validates the inputs and performs the per-link analysis
/// (clutter height-gain model, zone statistics, horizon geometry);
/// [`TotalAttenuation::total_loss_db`] then evaluates the four propagation
/// mechanisms and combines them. The predictor holds no mutable state and
/// can be queried repeatedly.
#[derive(Clone, Debug)]
pub struct TotalAttenuation {
    params: LinkParameters,
    eff_radius_km: f64,
    frac_over_sea: f64,
    beta0_percent: f64,
    /// Clutter-effective sub-path and antenna heights
    sub_path: Path,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
    clutter_loss_tx_db: f64,
    clutter_loss_rx_db: f64,
    horizon: HorizonGeometry,
}

impl TotalAttenuation {
    /// Validate the link parameters and run the per-link analysis.
    pub fn new(params: LinkParameters) -> Result<TotalAttenuation, P452Error> {
        const FUNCTION: &str = "TotalAttenuation::new";

        if !params.time_percent.is_finite()
            || params.time_percent <= 0.0
            || params.time_percent > 50.0
        {
            return Err(P452Error::InvalidTimePercent {
                function: FUNCTION,
                value: params.time_percent,
                range: "(0, 50]",
            });
        }
        if !(-90.0..=90.0).contains(&params.centre_latitude_deg) {
            return Err(P452Error::InvalidEnvironment {
                function: FUNCTION,
                reason: "the centre latitude must lie in [-90, 90] degrees",
            });
        }
        if !(params.delta_n > 0.0 && params.delta_n < 157.0) {
            return Err(P452Error::InvalidEnvironment {
                function: FUNCTION,
                reason: "ΔN must lie in (0, 157) N-units/km for a finite effective radius",
            });
        }
        if !(params.temperature_k > 0.0) || !(params.dry_pressure_hpa > 0.0) {
            return Err(P452Error::InvalidEnvironment {
                function: FUNCTION,
                reason: "temperature and pressure must be positive",
            });
        }
        if params.tx_height_agl_m < 0.0 || params.rx_height_agl_m < 0.0 {
            return Err(P452Error::InvalidGeometry {
                function: FUNCTION,
                reason: "antenna heights above ground must not be negative",
            });
        }

        let eff_radius_km = effective_earth::median_effective_radius_km(params.delta_n);

        /* Zone statistics are taken from the raw profile and reused with
         * the clutter-effective sub-path, matching the validation data. */
        let frac_over_sea = params.path.fraction_over_sea();
        let beta0_percent = params.path.time_percent_beta0(params.centre_latitude_deg)?;

        let clutter_out = clutter::height_gain_model(
            params.freq_ghz,
            &params.path,
            params.tx_height_agl_m,
            params.rx_height_agl_m,
            params.tx_clutter,
            params.rx_clutter,
        );

        let h_tx_asl_m = clutter_out.tx_height_agl_m + clutter_out.path.first().height_asl_m;
        let h_rx_asl_m = clutter_out.rx_height_agl_m + clutter_out.path.last().height_asl_m;

        let horizon = effective_earth::horizon_angles_and_distances(
            &clutter_out.path,
            h_tx_asl_m,
            h_rx_asl_m,
            eff_radius_km,
            params.freq_ghz,
        );

        Ok(TotalAttenuation {
            params,
            eff_radius_km,
            frac_over_sea,
            beta0_percent,
            sub_path: clutter_out.path,
            h_tx_asl_m,
            h_rx_asl_m,
            clutter_loss_tx_db: clutter_out.tx_loss_db,
            clutter_loss_rx_db: clutter_out.rx_loss_db,
            horizon,
        })
    }

    /// Basic transmission loss (dB) not exceeded for the requested annual
    /// time percentage. (Eq. 43-64)
    pub fn total_loss_db(&self) -> Result<f64, P452Error> {
        let p = self.params.time_percent;
        let beta0 = self.beta0_percent;
        let omega = self.frac_over_sea;
        let d_tot = self.sub_path.total_distance_km();

        let los = basic_prop::transmission_losses(
            d_tot,
            self.h_tx_asl_m,
            self.h_rx_asl_m,
            self.params.freq_ghz,
            self.params.temperature_k,
            self.params.dry_pressure_hpa,
            omega,
            p,
            beta0,
            self.horizon.distance_tx_km,
            self.horizon.distance_rx_km,
        );

        let diff = diffraction::diffraction_losses(
            &self.sub_path,
            self.h_tx_asl_m,
            self.h_rx_asl_m,
            self.params.freq_ghz,
            self.params.delta_n,
            self.params.polarization,
            p,
            beta0,
            omega,
        )?;

        let ducting = anomalous::anomalous_prop_loss_db(
            &self.sub_path,
            self.params.freq_ghz,
            self.h_tx_asl_m,
            self.h_rx_asl_m,
            self.params.temperature_k,
            self.params.dry_pressure_hpa,
            self.params.dist_coast_tx_km,
            self.params.dist_coast_rx_km,
            p,
            beta0,
            self.eff_radius_km,
            &self.horizon,
            omega,
        );

        let scatter = troposcatter::troposcatter_loss_db(
            d_tot,
            self.params.freq_ghz,
            self.h_tx_asl_m,
            self.h_rx_asl_m,
            self.horizon.elevation_tx_mrad,
            self.horizon.elevation_rx_mrad,
            self.eff_radius_km,
            self.params.surface_refractivity,
            self.params.tx_horizon_gain_dbi,
            self.params.rx_horizon_gain_dbi,
            self.params.temperature_k,
            self.params.dry_pressure_hpa,
            p,
        )?;

        /* Eq. 43, 44 */
        let l_bd50 = los.free_space_with_gas_db + diff.median_db;
        let l_bd = los.not_exceeded_p_db + diff.not_exceeded_p_db;

        /* Eq. 60: minimum loss associated with line-of-sight propagation
         * and over-sea sub-path diffraction */
        let l_minb0p = if p < beta0 {
            los.not_exceeded_p_db + (1.0 - omega) * diff.not_exceeded_p_db
        } else {
            let fi = inv_cum_norm(p / 100.0) / inv_cum_norm(beta0 / 100.0);
            interpolate(
                l_bd50,
                los.not_exceeded_beta0_db + (1.0 - omega) * diff.not_exceeded_p_db,
                fi,
            )
        };

        /* Eq. 61: soft minimum of ducting and line-of-sight losses, in the
         * overflow-safe log-sum-exp form */
        let eta = DUCTING_SOFT_MIN_ETA;
        let max = ducting.max(los.not_exceeded_p_db);
        let min = ducting.min(los.not_exceeded_p_db);
        let l_minbap = max + eta * (1.0 + ((min - max) / eta).exp()).ln();

        /* Eq. 59, 62 */
        let l_bda = if l_minbap <= l_bd {
            interpolate(l_minbap, l_bd, path_blending_interpolation_parameter(d_tot))
        } else {
            l_bd
        };

        /* Eq. 58, 63 */
        let l_bam = interpolate(
            l_bda,
            l_minb0p,
            slope_interpolation_parameter(
                &self.sub_path,
                self.eff_radius_km,
                self.h_tx_asl_m,
                self.h_rx_asl_m,
            ),
        );

        /* Eq. 64: combine with troposcatter as a power sum */
        let combined = -5.0
            * (10_f64.powf(-0.2 * scatter) + 10_f64.powf(-0.2 * l_bam)).log10();

        Ok(combined + self.clutter_loss_tx_db + self.clutter_loss_rx_db)
    }
}

/// Interpolation factor F_j on the path slope. (Eq. 58)
///
/// The slopes are the ones of the Bullington construction, evaluated on
/// the clutter-effective sub-path at the median effective radius.
fn slope_interpolation_parameter(
    path: &Path,
    eff_radius_km: f64,
    h_tx_asl_m: f64,
    h_rx_asl_m: f64,
) -> f64 {
    let d_tot = path.total_distance_km();
    let curvature = 1.0 / eff_radius_km;
    let points = path.points();

    /* Eq. 14 */
    let mut slope_tx_max = f64::MIN;
    for point in &points[1..points.len() - 1] {
        let di = point.distance_km;
        let slope =
            (point.height_asl_m + 500.0 * curvature * di * (d_tot - di) - h_tx_asl_m) / di;
        slope_tx_max = slope_tx_max.max(slope);
    }
    /* Eq. 15 */
    let slope_tx_rx = (h_rx_asl_m - h_tx_asl_m) / d_tot;

    const THETA: f64 = 0.3;
    const KSI: f64 = 0.8;
    1.0 - 0.5 * (1.0 + (3.0 * KSI * (slope_tx_max - slope_tx_rx) / THETA).tanh())
}

/// Interpolation factor F_k on the great-circle path distance. (Eq. 59)
fn path_blending_interpolation_parameter(d_tot_km: f64) -> f64 {
    const D_SW: f64 = 20.0;
    const KAPPA: f64 = 0.5;
    1.0 - 0.5 * (1.0 + (3.0 * KAPPA * (d_tot_km - D_SW) / D_SW).tanh())
}
