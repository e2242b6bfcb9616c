// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A pure-Rust implementation of the clear-air propagation prediction model
//! of Recommendation ITU-R P.452-17.
//!
//! Given a terrain profile between two stations and a handful of
//! environmental parameters, the model predicts the basic transmission loss
//! (dB) not exceeded for a given annual percentage of time, combining the
//! line-of-sight, diffraction, tropospheric-scatter and anomalous
//! (ducting and layer-reflection) propagation mechanisms.
//!
//! [`TotalAttenuation`] is the main entry point. The individual sub-models
//! are exposed in their own modules so that each stage can be checked
//! against the ITU validation data independently.

pub mod anomalous;
pub mod basic_prop;
pub mod clutter;
pub mod constants;
pub mod diffraction;
pub mod effective_earth;
pub mod gas;
pub mod misc;
pub mod path;
pub(crate) mod polarization;
pub mod total;
pub mod troposcatter;

pub use path::{Path, ProfilePoint, Zone};
pub use polarization::Polarization;
pub use total::{LinkParameters, TotalAttenuation};

#[derive(thiserror::Error, Debug)]
pub enum P452Error {
    #[error("Function {function} was given time percentage {value}%, outside its valid range of {range}")]
    InvalidTimePercent {
        function: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("Function {function} was given an invalid path: {reason}")]
    InvalidGeometry {
        function: &'static str,
        reason: &'static str,
    },

    #[error("Function {function} was given unphysical environment data: {reason}")]
    InvalidEnvironment {
        function: &'static str,
        reason: &'static str,
    },
}
