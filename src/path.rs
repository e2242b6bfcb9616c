// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Terrain profile paths and their zone statistics.

use crate::P452Error;

/// Radio-climatic zone of a profile point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Sea (zone B)
    Sea,
    /// Coastal land, below 100 m asl and within 50 km of the sea (zone A1)
    CoastalLand,
    /// Inland (zone A2)
    Inland,
}

/// One point of a terrain profile.
#[derive(Clone, Copy, Debug)]
pub struct ProfilePoint {
    /// Distance from the transmitter along the great-circle path (km)
    pub distance_km: f64,
    /// Terrain height above mean sea level (m)
    pub height_asl_m: f64,
    /// Radio-climatic zone, set at construction and never inferred
    pub zone: Zone,
}

impl ProfilePoint {
    pub fn new(distance_km: f64, height_asl_m: f64, zone: Zone) -> ProfilePoint {
        ProfilePoint {
            distance_km,
            height_asl_m,
            zone,
        }
    }
}

/// A terrain profile from the transmitter to the receiver.
///
/// Invariants, enforced at construction: at least two points, the first at
/// distance 0, strictly increasing finite distances, finite heights. The
/// total path length is the distance of the last point.
#[derive(Clone, Debug)]
pub struct Path {
    points: Vec<ProfilePoint>,
}

impl Path {
    /// Build a path from profile points, validating the geometry.
    pub fn new(points: Vec<ProfilePoint>) -> Result<Path, P452Error> {
        const FUNCTION: &str = "Path::new";
        if points.len() < 2 {
            return Err(P452Error::InvalidGeometry {
                function: FUNCTION,
                reason: "a profile needs at least two points",
            });
        }
        if points[0].distance_km != 0.0 {
            return Err(P452Error::InvalidGeometry {
                function: FUNCTION,
                reason: "the first profile point must be at distance 0",
            });
        }
        for pair in points.windows(2) {
            if !(pair[1].distance_km > pair[0].distance_km) {
                return Err(P452Error::InvalidGeometry {
                    function: FUNCTION,
                    reason: "profile distances must be strictly increasing",
                });
            }
        }
        if points
            .iter()
            .any(|p| !p.distance_km.is_finite() || !p.height_asl_m.is_finite())
        {
            return Err(P452Error::InvalidGeometry {
                function: FUNCTION,
                reason: "profile coordinates must be finite",
            });
        }
        Ok(Path { points })
    }

    /// Build a path from points already known to uphold the invariants
    /// (e.g. a truncation of a validated path).
    pub(crate) fn from_points_unchecked(points: Vec<ProfilePoint>) -> Path {
        Path { points }
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn first(&self) -> &ProfilePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &ProfilePoint {
        &self.points[self.points.len() - 1]
    }

    /// Total path length (km).
    pub fn total_distance_km(&self) -> f64 {
        self.last().distance_km
    }

    /// Fraction of the path over sea, ω ∈ [0, 1].
    ///
    /// A whole interval counts when both endpoints are sea, half an interval
    /// at a sea/land transition.
    pub fn fraction_over_sea(&self) -> f64 {
        let mut sea_dist = 0.0;
        for pair in self.points.windows(2) {
            let interval = pair[1].distance_km - pair[0].distance_km;
            if pair[0].zone == Zone::Sea && pair[1].zone == Zone::Sea {
                sea_dist += interval;
            } else if pair[0].zone == Zone::Sea || pair[1].zone == Zone::Sea {
                sea_dist += interval / 2.0;
            }
        }
        sea_dist / self.total_distance_km()
    }

    /// Longest contiguous inland section of the path (km), using the same
    /// whole/half interval rule as [`Path::fraction_over_sea`].
    pub fn longest_contiguous_inland_km(&self) -> f64 {
        let mut longest: f64 = 0.0;
        let mut current: f64 = 0.0;
        for pair in self.points.windows(2) {
            let interval = pair[1].distance_km - pair[0].distance_km;
            if pair[0].zone == Zone::Inland && pair[1].zone == Zone::Inland {
                current += interval;
            } else if pair[0].zone == Zone::Inland || pair[1].zone == Zone::Inland {
                current += interval / 2.0;
                if pair[1].zone != Zone::Inland {
                    longest = longest.max(current);
                    current = 0.0;
                }
            }
        }
        longest.max(current)
    }

    /// Time percentage β₀ for which refractivity lapse-rates exceeding
    /// 100 N-units/km can be expected in the first 100 m of the lower
    /// atmosphere. (Eq. 2-4)
    ///
    /// Given:
    /// * `centre_latitude_deg`: latitude of the path centre point (degrees)
    ///
    /// Returned:
    /// * β₀ (%)
    ///
    pub fn time_percent_beta0(&self, centre_latitude_deg: f64) -> Result<f64, P452Error> {
        if !(-90.0..=90.0).contains(&centre_latitude_deg) {
            return Err(P452Error::InvalidEnvironment {
                function: "Path::time_percent_beta0",
                reason: "the centre latitude must lie in [-90, 90] degrees",
            });
        }

        /* Longest contiguous land (non-sea) and inland sections. */
        let mut longest_land: f64 = 0.0;
        let mut current_land: f64 = 0.0;
        for pair in self.points.windows(2) {
            let interval = pair[1].distance_km - pair[0].distance_km;
            if pair[0].zone != Zone::Sea && pair[1].zone != Zone::Sea {
                current_land += interval;
            } else if pair[0].zone != Zone::Sea || pair[1].zone != Zone::Sea {
                current_land += interval / 2.0;
                if pair[1].zone == Zone::Sea {
                    longest_land = longest_land.max(current_land);
                    current_land = 0.0;
                }
            }
        }
        let longest_land = longest_land.max(current_land);
        let longest_inland = self.longest_contiguous_inland_km();

        /* Eq. 3a */
        let tau = 1.0 - (-(4.12e-4 * longest_inland.powf(2.41))).exp();
        /* Eq. 3, limited to μ₁ <= 1 */
        let mu1a = 10_f64.powf(-longest_land / (16.0 - 6.6 * tau));
        let mu1b = 10_f64.powf(-5.0 * (0.496 + 0.354 * tau));
        let mu1 = (mu1a + mu1b).powf(0.2).min(1.0);

        let abs_phi = centre_latitude_deg.abs();
        if abs_phi <= 70.0 {
            /* Eq. 4 */
            let mu4 = 10_f64.powf((-0.935 + 0.0176 * abs_phi) * mu1.log10());
            /* Eq. 2 */
            Ok(10_f64.powf(-0.015 * abs_phi + 1.67) * mu1 * mu4)
        } else {
            let mu4 = 10_f64.powf(0.3 * mu1.log10());
            Ok(4.17 * mu1 * mu4)
        }
    }
}
