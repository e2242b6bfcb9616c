// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Model constants.

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Effective Earth radius exceeded for β₀% of time (km), k = 3 at the point
/// incidence of anomalous propagation. (Eq. 6b)
pub const EFF_RADIUS_BETA0_KM: f64 = EARTH_RADIUS_KM * 3.0;

/// Speed of light in m·GHz. The validation data match more tightly with
/// 2.998e8 m/s than with the exact SI value.
pub const SPEED_OF_LIGHT_M_GHZ: f64 = 0.2998;

/// Free-space basic transmission loss at 1 GHz·km (dB). P.452-17 value;
/// earlier revisions used 92.45. (Eq. 8)
pub const FREE_SPACE_LOSS_DB: f64 = 92.4;

/// Relative permittivity of land for spherical-earth diffraction
pub const LAND_RELATIVE_PERMITTIVITY: f64 = 22.0;

/// Conductivity of land (S/m) for spherical-earth diffraction
pub const LAND_CONDUCTIVITY_S_M: f64 = 0.003;

/// Relative permittivity of sea for spherical-earth diffraction
pub const SEA_RELATIVE_PERMITTIVITY: f64 = 80.0;

/// Conductivity of sea (S/m) for spherical-earth diffraction
pub const SEA_CONDUCTIVITY_S_M: f64 = 5.0;

/// Parameter η of the ducting/line-of-sight soft minimum. (Eq. 61)
pub const DUCTING_SOFT_MIN_ETA: f64 = 2.5;
