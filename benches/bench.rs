// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use p452::{
    clutter::ClutterCategory, diffraction, LinkParameters, Path, Polarization, ProfilePoint,
    TotalAttenuation, Zone,
};

fn p452(c: &mut Criterion) {
    // 100 km inland path with a single obstruction, 1 km sampling.
    let mut points: Vec<ProfilePoint> = (0..=100)
        .map(|i| ProfilePoint::new(i as f64, 50.0, Zone::Inland))
        .collect();
    points[40].height_asl_m = 180.0;
    let path = Path::new(points).unwrap();

    let params = LinkParameters {
        path: path.clone(),
        tx_height_agl_m: 10.0,
        rx_height_agl_m: 10.0,
        centre_latitude_deg: 51.0,
        freq_ghz: 2.0,
        time_percent: 10.0,
        polarization: Polarization::Horizontal,
        temperature_k: 288.15,
        dry_pressure_hpa: 1013.0,
        dist_coast_tx_km: 500.0,
        dist_coast_rx_km: 500.0,
        delta_n: 50.0,
        surface_refractivity: 301.0,
        tx_horizon_gain_dbi: 10.0,
        rx_horizon_gain_dbi: 10.0,
        tx_clutter: ClutterCategory::NoClutter,
        rx_clutter: ClutterCategory::NoClutter,
    };

    c.bench_function("total_loss_db", |b| {
        let model = TotalAttenuation::new(params.clone()).unwrap();
        b.iter(|| model.total_loss_db().unwrap())
    });

    c.bench_function("diffraction_losses", |b| {
        b.iter(|| {
            diffraction::diffraction_losses(
                &path,
                60.0,
                60.0,
                2.0,
                50.0,
                Polarization::Horizontal,
                10.0,
                2.0,
                0.0,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, p452);
criterion_main!(benches);
