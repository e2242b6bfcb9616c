// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! ITU validation sweep over a flat 100 km inland path: trans-horizon, so
//! spherical-earth diffraction and ducting carry the prediction.

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use p452::{anomalous, diffraction, effective_earth, troposcatter, Polarization, TotalAttenuation};

const TOLERANCE: f64 = 1e-3;

fn path() -> p452::Path {
    flat_inland_path(100.0, 1.0)
}

#[test]
fn zone_statistics() {
    let path = path();
    assert_abs_diff_eq!(path.fraction_over_sea(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(path.longest_contiguous_inland_km(), 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(
        path.time_percent_beta0(CENTRE_LAT_DEG).unwrap(),
        1.224161171,
        epsilon = 1e-6
    );
}

#[test]
fn diffraction_losses() {
    let expected_ld50 = [
        93.39174946,
        65.52126845,
        65.9425145,
        67.18446656,
        69.36054332,
        72.59738582,
        77.03445261,
        82.82216141,
        90.11777129,
        99.07834171,
        109.8513632,
        122.5674981,
        137.3473332,
        154.4973108,
        174.5237975,
        197.797126,
        224.7109561,
        234.3818887,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
        93.39174946,
    ];
    let expected_ldp = [
        93.02369321,
        65.42513337,
        65.82434308,
        67.03965383,
        69.1852776,
        72.38733792,
        76.78472275,
        82.52723215,
        89.77147296,
        98.67383494,
        109.3811299,
        122.0232939,
        136.7199801,
        153.7744116,
        173.6901643,
        196.8372323,
        223.6072297,
        233.2268493,
        60.26607136,
        67.61036241,
        71.65920745,
        74.52064635,
        76.80670136,
        78.75071337,
        80.46830742,
        82.02590048,
        83.4655513,
        84.8158494,
        86.09733467,
        87.32545838,
        88.51232326,
        89.66777021,
        90.8000948,
        91.91654587,
        93.02369321,
    ];

    let path = path();
    let beta0 = path.time_percent_beta0(CENTRE_LAT_DEG).unwrap();

    for i in 0..FREQ_GHZ_LIST.len() {
        let losses = diffraction::diffraction_losses(
            &path,
            10.0,
            10.0,
            FREQ_GHZ_LIST[i],
            DELTA_N,
            Polarization::Vertical,
            P_PERCENT_LIST[i],
            beta0,
            0.0,
        )
        .unwrap();
        assert_abs_diff_eq!(losses.median_db, expected_ld50[i], epsilon = TOLERANCE);
        assert_abs_diff_eq!(losses.not_exceeded_p_db, expected_ldp[i], epsilon = TOLERANCE);
    }
}

#[test]
fn troposcatter_losses() {
    let expected_lbs = [
        193.1410293,
        155.7284828,
        161.2225754,
        166.5859317,
        171.832924,
        176.9668217,
        181.9617666,
        186.7775244,
        191.3975216,
        195.8330798,
        200.1059295,
        204.244014,
        208.3000533,
        212.4517121,
        218.9792996,
        223.02956,
        233.0146254,
        254.025963,
        178.8709609,
        182.7323469,
        184.4652752,
        185.6475788,
        186.5681792,
        187.3355539,
        188.0029987,
        188.6010803,
        189.1493252,
        189.6613566,
        190.147524,
        190.6164881,
        191.076444,
        191.536516,
        192.0092967,
        192.5182008,
        193.1410293,
    ];

    let path = path();
    let ae = effective_earth::median_effective_radius_km(DELTA_N);
    let horizon = effective_earth::horizon_angles_and_distances(&path, 10.0, 10.0, ae, 2.0);

    for i in 0..FREQ_GHZ_LIST.len() {
        let loss = troposcatter::troposcatter_loss_db(
            path.total_distance_km(),
            FREQ_GHZ_LIST[i],
            10.0,
            10.0,
            horizon.elevation_tx_mrad,
            horizon.elevation_rx_mrad,
            ae,
            N0,
            TX_GAIN_DBI,
            RX_GAIN_DBI,
            TEMP_K,
            DRY_PRESSURE_HPA,
            P_PERCENT_LIST[i],
        )
        .unwrap();
        assert_abs_diff_eq!(loss, expected_lbs[i], epsilon = TOLERANCE);
    }
}

#[test]
fn anomalous_propagation_losses() {
    let expected_lba = [
        236.8785224,
        239.9113088,
        238.0058293,
        234.1800766,
        228.547818,
        222.8893253,
        226.9746788,
        231.0978435,
        235.2520429,
        239.4621444,
        243.7701072,
        248.2381733,
        252.9917337,
        258.4554372,
        270.1902921,
        275.6225595,
        288.4965925,
        311.7305693,
        152.4407703,
        169.3239336,
        179.180923,
        186.6998711,
        192.9512552,
        198.3831106,
        203.2319652,
        207.6401305,
        211.7008439,
        215.478985,
        219.0217798,
        222.3648269,
        225.5357215,
        228.5563501,
        231.4444063,
        234.2144269,
        236.8785224,
    ];

    let path = path();
    let ae = effective_earth::median_effective_radius_km(DELTA_N);
    let beta0 = path.time_percent_beta0(CENTRE_LAT_DEG).unwrap();

    for i in 0..FREQ_GHZ_LIST.len() {
        let horizon =
            effective_earth::horizon_angles_and_distances(&path, 10.0, 10.0, ae, FREQ_GHZ_LIST[i]);
        let loss = anomalous::anomalous_prop_loss_db(
            &path,
            FREQ_GHZ_LIST[i],
            10.0,
            10.0,
            TEMP_K,
            DRY_PRESSURE_HPA,
            DIST_COAST_KM,
            DIST_COAST_KM,
            P_PERCENT_LIST[i],
            beta0,
            ae,
            &horizon,
            0.0,
        );
        assert_abs_diff_eq!(loss, expected_lba[i], epsilon = TOLERANCE);
    }
}

#[test]
fn total_loss() {
    let expected = [
        193.1410293,
        155.7284001,
        161.2224066,
        166.5857114,
        171.8327495,
        176.9667427,
        181.9617474,
        186.7775221,
        191.3975214,
        195.8330798,
        200.1059295,
        204.244014,
        208.3000533,
        212.4517121,
        218.9792996,
        223.02956,
        233.0146254,
        254.025963,
        152.4433215,
        169.3196367,
        178.9984917,
        184.6055058,
        186.456268,
        187.3221915,
        188.0010455,
        188.6007423,
        189.1492581,
        189.6613417,
        190.1475204,
        190.6164871,
        191.0764437,
        191.5365159,
        192.0092967,
        192.5182007,
        193.1410293,
    ];

    for i in 0..FREQ_GHZ_LIST.len() {
        let model =
            TotalAttenuation::new(flat_link(path(), FREQ_GHZ_LIST[i], P_PERCENT_LIST[i])).unwrap();
        assert_abs_diff_eq!(model.total_loss_db().unwrap(), expected[i], epsilon = TOLERANCE);
    }
}
