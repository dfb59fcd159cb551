use nalgebra::{Rotation3, Vector3};

use crate::{clock::ClockCorrection, kepler::KeplerSolution, prelude::SV};

/// [SatelliteLocation] as resolved from broadcast [Ephemeris](crate::prelude::Ephemeris).
/// Position and velocity are expressed in the ECEF frame of the
/// constellation (WGS84, GTRF or CGCS2000).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SatelliteLocation {
    /// [SV]
    pub sv: SV,
    /// Time of applicability (in seconds of week)
    pub t_s: f64,
    /// Time elapsed since time of ephemeris (in seconds)
    pub t_k_s: f64,
    /// ECEF position (in meters)
    pub position_m: Vector3<f64>,
    /// ECEF velocity (in meters/s)
    pub velocity_m_s: Vector3<f64>,
    /// [KeplerSolution] this location was derived from
    pub kepler: KeplerSolution,
    /// Satellite [ClockCorrection] at time of applicability
    pub clock: ClockCorrection,
}

impl SatelliteLocation {
    /// Returns ECEF position in kilometers
    pub fn position_km(&self) -> Vector3<f64> {
        self.position_m / 1000.0
    }

    /// Returns distance to Earth center (in meters)
    pub fn radius_m(&self) -> f64 {
        self.position_m.norm()
    }

    /// Returns True when the Kepler solver did not converge:
    /// this location exhibits a degraded precision.
    pub fn is_degraded(&self) -> bool {
        !self.kepler.converged
    }

    /// Copies and returns [SatelliteLocation] expressed in the ECEF frame
    /// `dt_s` seconds later: the Earth rotated by `omega_rad_s * dt_s` in between.
    /// This is the Sagnac correction, `dt_s` being the signal flight time.
    pub fn with_earth_rotation(&self, dt_s: f64, omega_rad_s: f64) -> Self {
        let rot3 = Rotation3::from_axis_angle(&Vector3::z_axis(), -omega_rad_s * dt_s);
        let mut s = *self;
        s.position_m = rot3 * self.position_m;
        s.velocity_m_s = rot3 * self.velocity_m_s;
        s
    }
}
