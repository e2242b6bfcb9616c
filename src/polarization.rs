// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polarization code.

/// Signal polarization. Only the spherical-earth diffraction first term
/// depends on it, through the normalized surface admittance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarization {
    Horizontal,
    Vertical,
    /// Handled as the vector sum of the two linear admittances. The
    /// recommendation does not specify a combination rule; this convention
    /// is adopted from existing implementations.
    Circular,
}
