#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod clock;
mod ephemeris;
mod error;
mod kepler;
mod location;
mod propagator;

pub mod constants;
pub mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, KeplerConfig, KeplerMethod};
    pub use crate::clock::ClockCorrection;
    pub use crate::constants::EarthModel;
    pub use crate::ephemeris::{Ephemeris, EphemerisSource};
    pub use crate::error::Error;
    pub use crate::kepler::KeplerSolution;
    pub use crate::location::SatelliteLocation;
    pub use crate::propagator::Propagator;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
pub use kepler::solve as solve_kepler;
