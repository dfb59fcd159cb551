use crate::prelude::Constellation;

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// Earth angular velocity, in CGCS2000 frame rad/s
pub const EARTH_ANGULAR_VEL_CGCS2000_RAD: f64 = 7.292115E-5;

/// Earth gravitational constant (m^3 s-2), as published in IS-GPS-200
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986005E14;

/// Earth gravitational constant (m^3 s-2), as published in Galileo OS-SIS-ICD and BDS-SIS-ICD
pub const EARTH_GRAVITATION_GST_MU_M3_S2: f64 = 3.986004418E14;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Relativistic clock correction constant F = -2 sqrt(mu) / c² (s/sqrt(m))
pub const RELATIVISTIC_F: f64 = -4.442807633E-10;

/// One week, in seconds
pub const WEEK_SECONDS: f64 = 604_800.0;

/// Half a week, in seconds
pub const HALF_WEEK_SECONDS: f64 = 302_400.0;

/// [EarthModel] used by broadcast ephemeris of a given [Constellation]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EarthModel {
    /// Earth gravitational constant (m^3 s-2)
    pub gm_m3_s2: f64,
    /// Earth angular velocity (rad/s)
    pub omega_rad_s: f64,
}

impl EarthModel {
    /// WGS84 model used by GPS (and by QZSS, IRNSS and SBAS)
    pub const GPS: Self = Self {
        gm_m3_s2: EARTH_GRAVITATION_MU_M3_S2,
        omega_rad_s: EARTH_ANGULAR_VEL_RAD,
    };

    /// GTRF model used by Galileo
    pub const GALILEO: Self = Self {
        gm_m3_s2: EARTH_GRAVITATION_GST_MU_M3_S2,
        omega_rad_s: EARTH_ANGULAR_VEL_RAD,
    };

    /// CGCS2000 model used by BeiDou
    pub const BEIDOU: Self = Self {
        gm_m3_s2: EARTH_GRAVITATION_GST_MU_M3_S2,
        omega_rad_s: EARTH_ANGULAR_VEL_CGCS2000_RAD,
    };

    /// Relativistic clock correction constant F = -2 sqrt(mu) / c² (s/sqrt(m))
    /// of this [EarthModel].
    pub fn relativistic_f(&self) -> f64 {
        -2.0 * self.gm_m3_s2.sqrt() / SPEED_OF_LIGHT_M_S.powi(2)
    }

    /// Returns the [EarthModel] the broadcast orbits of this [Constellation]
    /// are expressed in.
    pub fn from_constellation(constellation: Constellation) -> Self {
        match constellation {
            Constellation::Galileo => Self::GALILEO,
            Constellation::BeiDou => Self::BEIDOU,
            _ => Self::GPS,
        }
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::GPS
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relativistic_constant() {
        let f = -2.0 * EARTH_GRAVITATION_MU_M3_S2.sqrt() / SPEED_OF_LIGHT_M_S.powi(2);
        assert!((f - RELATIVISTIC_F).abs() < 1.0E-18);
    }

    #[test]
    fn relativistic_constant_per_model() {
        assert!((EarthModel::GPS.relativistic_f() - RELATIVISTIC_F).abs() < 1.0E-18);

        // Galileo OS-SIS-ICD and BDS-SIS-ICD value
        let gst = EarthModel::GALILEO.relativistic_f();
        assert!((gst - (-4.442807309E-10)).abs() < 1.0E-18, "F={:e}", gst);
        assert_eq!(EarthModel::BEIDOU.relativistic_f(), gst);
        assert!(gst > RELATIVISTIC_F);
    }

    #[test]
    fn earth_models() {
        assert_eq!(EarthModel::from_constellation(Constellation::GPS), EarthModel::GPS);
        assert_eq!(EarthModel::from_constellation(Constellation::QZSS), EarthModel::GPS);
        assert_eq!(
            EarthModel::from_constellation(Constellation::Galileo),
            EarthModel::GALILEO
        );
        assert_eq!(
            EarthModel::from_constellation(Constellation::BeiDou),
            EarthModel::BEIDOU
        );
    }
}
