use crate::prelude::{Constellation, Ephemeris, EphemerisSource, Epoch, SV};

use std::collections::HashMap;

/// G06 broadcast ephemeris, 1999-09-02T17:51:44 GPST
/// (RINEX 2.11 navigation message example).
pub fn g06_ephemeris() -> Ephemeris {
    Ephemeris {
        sv: SV::new(Constellation::GPS, 6),
        week: 1025,
        toe_s: 409904.0,
        toc_s: 409904.0,
        sqrt_a: 5153.65489006,
        eccentricity: 6.26740418375E-3,
        m0_rad: 0.162092304801,
        dn_rad_s: 1.16040547840E-9,
        omega_rad: 2.06958726335,
        i0_rad: 1.11541663136,
        idot_rad_s: 3.07155651409E-10,
        omega0_rad: 0.329237003460,
        omega_dot_rad_s: -6.38312302555E-9,
        cus_cuc_rad: (6.52112066746E-6, 4.84101474285E-6),
        cis_cic_rad: (-5.96046447754E-8, -2.42143869400E-8),
        crs_crc_m: (93.40625, 326.59375),
        clock_polynomials: (-8.39701388031E-4, -1.65982783074E-11, 0.0),
        tgd_s: 0.0,
    }
}

/// Galileo broadcast ephemeris (week 2111), attributed to E01.
pub fn galileo_ephemeris() -> Ephemeris {
    Ephemeris {
        sv: SV::new(Constellation::Galileo, 1),
        week: 2111,
        toe_s: 352200.0,
        toc_s: 352200.0,
        sqrt_a: 5440.603218079,
        eccentricity: 3.683507675305E-4,
        m0_rad: -0.3955466341850,
        dn_rad_s: 2.945479833915E-9,
        omega_rad: 0.2551413130998,
        i0_rad: 0.9883726443393,
        idot_rad_s: 1.839362331110E-10,
        omega0_rad: 2.295381450845,
        omega_dot_rad_s: -5.907746081337E-9,
        cus_cuc_rad: (-3.911554813385E-7, 8.065253496170E-7),
        cis_cic_rad: (7.450580596924E-9, -6.519258022308E-8),
        crs_crc_m: (14.78125, 361.6875),
        clock_polynomials: (0.0, 0.0, 0.0),
        tgd_s: -1.303851604462E-8,
    }
}

/// Circular orbit (no harmonic correction) derived from [g06_ephemeris].
pub fn circular_ephemeris() -> Ephemeris {
    let mut eph = g06_ephemeris();
    eph.eccentricity = 0.0;
    eph.cus_cuc_rad = (0.0, 0.0);
    eph.cis_cic_rad = (0.0, 0.0);
    eph.crs_crc_m = (0.0, 0.0);
    eph
}

/// Builds a GPS constellation of `n` satellites, spread over 6 orbital planes.
pub fn gps_constellation(n: usize) -> Vec<Ephemeris> {
    let reference = g06_ephemeris();
    (0..n)
        .map(|i| {
            let mut eph = reference;
            eph.sv = SV::new(Constellation::GPS, (i + 1) as u8);
            eph.omega0_rad += (i % 6) as f64 * std::f64::consts::PI / 3.0;
            eph.m0_rad += i as f64 * 0.37;
            eph.eccentricity += (i as f64) * 1.0E-3;
            eph
        })
        .collect()
}

/// [EphemerisSource] test implementation
#[derive(Default)]
pub struct EphemerisBook {
    pub book: HashMap<SV, Ephemeris>,
}

impl EphemerisBook {
    pub fn new(ephemerides: &[Ephemeris]) -> Self {
        Self {
            book: ephemerides.iter().map(|eph| (eph.sv, *eph)).collect(),
        }
    }
}

impl EphemerisSource for EphemerisBook {
    fn ephemeris_data(&self, _: Epoch, sv: SV) -> Option<Ephemeris> {
        self.book.get(&sv).copied()
    }
}
