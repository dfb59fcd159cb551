use crate::{
    cfg::KeplerConfig,
    constants::EarthModel,
    error::Error,
    kepler::{self, KeplerSolution},
    prelude::{Duration, Epoch, SV},
    time::{epoch_from_time_of_week, normalize_week_seconds, sv_timescale},
};

mod orbit;

/// Broadcast [Ephemeris] frame: Keplerian elements and their perturbations,
/// for one [SV] at one reference epoch. All angles are expressed in radians
/// and all times in seconds of week.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ephemeris {
    /// [SV]
    pub sv: SV,

    /// Week counter of the time of ephemeris, in [SV] timescale
    pub week: u32,

    /// Time of ephemeris (in seconds of week)
    pub toe_s: f64,

    /// Time of clock (in seconds of week)
    pub toc_s: f64,

    /// Square root of the semi-major axis (in sqrt(meters))
    pub sqrt_a: f64,

    /// Eccentricity
    pub eccentricity: f64,

    /// Mean anomaly at reference time (in radians)
    pub m0_rad: f64,

    /// Mean motion difference from computed value (in radians/s)
    pub dn_rad_s: f64,

    /// Argument of perigee (in radians)
    pub omega_rad: f64,

    /// Inclination angle at reference time (in radians)
    pub i0_rad: f64,

    /// Rate of inclination angle (in radians/s)
    pub idot_rad_s: f64,

    /// Longitude of ascending node of orbit plane at weekly epoch (in radians)
    pub omega0_rad: f64,

    /// Rate of right ascension (in radians/s)
    pub omega_dot_rad_s: f64,

    /// Sine / Cosine harmonic correction to the argument of latitude (in radians)
    pub cus_cuc_rad: (f64, f64),

    /// Sine / Cosine harmonic correction to the angle of inclination (in radians)
    pub cis_cic_rad: (f64, f64),

    /// Sine / Cosine harmonic correction to the orbit radius (in meters)
    pub crs_crc_m: (f64, f64),

    /// Clock bias (s), drift (s/s) and drift rate (s/s²)
    pub clock_polynomials: (f64, f64, f64),

    /// Total group delay (in seconds)
    pub tgd_s: f64,
}

/// [EphemerisSource] to provide [Ephemeris] data and contribute to the propagation process.
pub trait EphemerisSource {
    /// Provide [Ephemeris] frame for requested [SV], to be used at requested [Epoch].
    /// Preferably the most recent frame published prior that [Epoch].
    fn ephemeris_data(&self, epoch: Epoch, sv: SV) -> Option<Ephemeris>;
}

impl Ephemeris {
    /// Returns the [EarthModel] this [Ephemeris] is expressed in.
    pub fn earth_model(&self) -> EarthModel {
        EarthModel::from_constellation(self.sv.constellation)
    }

    /// Semi major axis (in meters)
    pub fn semi_major_axis_m(&self) -> f64 {
        self.sqrt_a.powi(2)
    }

    /// Corrected mean motion n = sqrt(mu / a³) + dn (in radians/s)
    pub fn mean_motion_rad_s(&self) -> f64 {
        let n0 = self.earth_model().gm_m3_s2.sqrt() / self.sqrt_a.powi(3);
        n0 + self.dn_rad_s
    }

    /// Time elapsed from time of ephemeris, t - toe (in seconds),
    /// where `t` is expressed in seconds of week.
    /// The week rollover is corrected: result lies within ±half a week.
    pub fn t_k(&self, t: f64) -> f64 {
        normalize_week_seconds(t - self.toe_s)
    }

    /// Mean anomaly (in radians) `t_k` seconds after time of ephemeris.
    pub fn mean_anomaly(&self, t_k: f64) -> f64 {
        self.m0_rad + self.mean_motion_rad_s() * t_k
    }

    /// Solves Kepler's equation for this orbit, returning the eccentric anomaly
    /// (in radians) for given mean anomaly.
    /// Use [Self::kepler_solution] to obtain the quality of the solution as well.
    pub fn eccentric_anomaly(&self, m_k: f64) -> f64 {
        self.kepler_solution(m_k, &KeplerConfig::default()).e_k_rad
    }

    /// Solves Kepler's equation for this orbit using desired [KeplerConfig].
    pub fn kepler_solution(&self, m_k: f64, cfg: &KeplerConfig) -> KeplerSolution {
        kepler::solve(m_k, self.eccentricity, cfg)
    }

    /// Verifies this [Ephemeris] describes a physically sound closed orbit.
    /// This should be verified before any propagation attempt.
    pub fn validate(&self) -> Result<(), Error> {
        let (cus, cuc) = self.cus_cuc_rad;
        let (cis, cic) = self.cis_cic_rad;
        let (crs, crc) = self.crs_crc_m;
        let (af0, af1, af2) = self.clock_polynomials;

        for (name, value) in [
            ("toe", self.toe_s),
            ("toc", self.toc_s),
            ("sqrta", self.sqrt_a),
            ("e", self.eccentricity),
            ("m0", self.m0_rad),
            ("deltaN", self.dn_rad_s),
            ("omega", self.omega_rad),
            ("i0", self.i0_rad),
            ("idot", self.idot_rad_s),
            ("omega0", self.omega0_rad),
            ("omegaDot", self.omega_dot_rad_s),
            ("cus", cus),
            ("cuc", cuc),
            ("cis", cis),
            ("cic", cic),
            ("crs", crs),
            ("crc", crc),
            ("af0", af0),
            ("af1", af1),
            ("af2", af2),
            ("tgd", self.tgd_s),
        ] {
            if !value.is_finite() {
                return Err(Error::NonFiniteParameter(self.sv, name));
            }
        }

        if self.sqrt_a <= 0.0 {
            return Err(Error::InvalidSemiMajorAxis(self.sv, self.sqrt_a));
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(Error::InvalidEccentricity(self.sv, self.eccentricity));
        }

        Ok(())
    }

    /// Returns the time of ephemeris as [Epoch], expressed in [SV] timescale.
    pub fn toe_epoch(&self) -> Result<Epoch, Error> {
        let timescale = sv_timescale(self.sv)?;
        Ok(epoch_from_time_of_week(self.week, self.toe_s, timescale))
    }

    /// Returns True if this [Ephemeris] frame may be used at `now`.
    pub fn is_valid(&self, now: Epoch, max_dtoe: Duration) -> bool {
        match self.toe_epoch() {
            Ok(toe) => (now - toe).abs() <= max_dtoe,
            Err(_) => false,
        }
    }
}
