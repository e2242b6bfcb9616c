// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small calculation helpers shared by the sub-models.

use crate::constants::SPEED_OF_LIGHT_M_GHZ;

/// Inverse cumulative normal distribution. (Annex 1 Attachment 3)
///
/// Given:
/// * `prob`: probability as a fraction, expected in `(0, 0.5]`
///
/// Returned:
/// * approximation of Φ⁻¹(prob), maximum error 0.00054
///
/// # Notes:
///
/// 1) Arguments below 10⁻⁶ are clamped to 10⁻⁶; the approximation is used
///    verbatim from the recommendation including this clamp.
///
pub fn inv_cum_norm(prob: f64) -> f64 {
    let tx = (-2.0 * prob.max(1e-6).ln()).sqrt();

    const C0: f64 = 2.515516698;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let ksi = ((C2 * tx + C1) * tx + C0) / (((D3 * tx + D2) * tx + D1) * tx + 1.0);
    ksi - tx
}

/// Convert a frequency in GHz to a wavelength in metres.
pub fn wavelength_m(freq_ghz: f64) -> f64 {
    SPEED_OF_LIGHT_M_GHZ / freq_ghz
}

/// Linear interpolation from `start` to `end` with weight on `end`.
pub fn interpolate(start: f64, end: f64, end_weight: f64) -> f64 {
    start + end_weight * (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Compared against the NORM.INV built-in macro from Microsoft Excel.
    #[test]
    fn test_inv_cum_norm() {
        let inputs = [
            1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 0.5, 0.01345, 0.42039, 0.0042598, 0.000050938,
        ];
        let expected = [
            -4.753424309,
            -4.264890794,
            -3.719016485,
            -3.090232306,
            -2.326347874,
            -1.281551566,
            0.0,
            -2.212965852,
            -0.200895866,
            -2.630752722,
            -3.886079871,
        ];
        for (input, expected) in inputs.iter().zip(expected) {
            // Maximum error of 0.00054 from Attachment 3 to Annex 1.
            assert_abs_diff_eq!(inv_cum_norm(*input), expected, epsilon = 0.00054);
        }

        // 1e-6 is used for all probabilities below 1e-6.
        assert_abs_diff_eq!(inv_cum_norm(1e-7), inv_cum_norm(1e-6), epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate() {
        assert_abs_diff_eq!(interpolate(1.0, 3.0, 0.5), 2.0);
        assert_abs_diff_eq!(interpolate(1.0, 3.0, 0.0), 1.0);
        assert_abs_diff_eq!(interpolate(1.0, 3.0, 1.0), 3.0);
    }
}
