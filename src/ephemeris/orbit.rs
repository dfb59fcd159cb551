use log::debug;
use nalgebra::{Rotation3, Vector3};

use crate::{
    cfg::Config,
    clock::ClockCorrection,
    location::SatelliteLocation,
    prelude::Ephemeris,
    time::normalize_week_seconds,
};

impl Ephemeris {
    /// Resolves [SatelliteLocation] at `t` (in seconds of week) and writes it
    /// into `loc`, using the default [Config]. `loc` is entirely overwritten.
    pub fn get_sv_pos(&self, t: f64, loc: &mut SatelliteLocation) {
        *loc = self.sv_position(t);
    }

    /// Resolves [SatelliteLocation] at `t` (in seconds of week),
    /// using the default [Config].
    pub fn sv_position(&self, t: f64) -> SatelliteLocation {
        self.resolve_state(t, &Config::default())
    }

    /// Satellite [ClockCorrection] at `t` (in seconds of week), for given
    /// eccentric anomaly (in radians).
    pub fn clock_correction(&self, t: f64, e_k: f64, cfg: &Config) -> ClockCorrection {
        let (af0, af1, af2) = self.clock_polynomials;
        let dt = normalize_week_seconds(t - self.toc_s);

        let mut corr = ClockCorrection::from_polynomial(af0 + af1 * dt + af2 * dt.powi(2));

        if cfg.relativistic_correction {
            corr = corr.with_relativistic_correction(
                self.earth_model().relativistic_f() * self.eccentricity * self.sqrt_a * e_k.sin(),
            );
        }

        if cfg.group_delay {
            corr = corr.with_group_delay(self.tgd_s);
        }

        corr
    }

    /// Resolves Kepler equations from [Ephemeris], at `t` (in seconds of week).
    /// Preconditions: 0 <= e < 1 and sqrt(a) > 0, see [Ephemeris::validate].
    pub(crate) fn resolve_state(&self, t: f64, cfg: &Config) -> SatelliteLocation {
        debug_assert!(self.sqrt_a > 0.0, "{} - invalid sqrt(a)", self.sv);

        let omega_earth = self.earth_model().omega_rad_s;

        let e = self.eccentricity;
        let e_2 = e.powi(2);
        let a = self.semi_major_axis_m();

        let (cus, cuc) = self.cus_cuc_rad;
        let (cis, cic) = self.cis_cic_rad;
        let (crs, crc) = self.crs_crc_m;
        let (i0, idot) = (self.i0_rad, self.idot_rad_s);
        let (omega0, omega, omega_dot) = (self.omega0_rad, self.omega_rad, self.omega_dot_rad_s);

        let t_k = self.t_k(t);
        let n = self.mean_motion_rad_s();
        let m_k = self.mean_anomaly(t_k);

        let kepler = self.kepler_solution(m_k, &cfg.kepler);
        let e_k = kepler.e_k_rad;

        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - e_2).sqrt() * sin_e_k).atan2(cos_e_k - e);

        let phi_k = v_k + omega;
        let (sin_2phi, cos_2phi) = (2.0 * phi_k).sin_cos();

        let u_k = phi_k + cuc * cos_2phi + cus * sin_2phi;
        let r_k = a * (1.0 - e * cos_e_k) + crc * cos_2phi + crs * sin_2phi;
        let i_k = i0 + idot * t_k + cic * cos_2phi + cis * sin_2phi;
        let omega_k = omega0 + (omega_dot - omega_earth) * t_k - omega_earth * self.toe_s;

        let (sin_u_k, cos_u_k) = u_k.sin_cos();
        let (x, y) = (r_k * cos_u_k, r_k * sin_u_k);

        // orbital plane to ECEF rotation matrix
        let rot_x3 = Rotation3::from_axis_angle(&Vector3::x_axis(), i_k);
        let rot_z3 = Rotation3::from_axis_angle(&Vector3::z_axis(), omega_k);
        let rot3 = rot_z3 * rot_x3;

        let position_m = rot3 * Vector3::new(x, y, 0.0);

        // time derivatives
        let fd_e_k = n / (1.0 - e * cos_e_k);
        let fd_v_k = fd_e_k * (1.0 - e_2).sqrt() / (1.0 - e * cos_e_k);
        let fd_u_k = fd_v_k * (1.0 + 2.0 * (cus * cos_2phi - cuc * sin_2phi));
        let fd_r_k = a * e * sin_e_k * fd_e_k + 2.0 * fd_v_k * (crs * cos_2phi - crc * sin_2phi);
        let fd_i_k = idot + 2.0 * fd_v_k * (cis * cos_2phi - cic * sin_2phi);
        let fd_omega_k = omega_dot - omega_earth;

        let fd_x = fd_r_k * cos_u_k - r_k * fd_u_k * sin_u_k;
        let fd_y = fd_r_k * sin_u_k + r_k * fd_u_k * cos_u_k;

        // d/dt (Rz Rx p) = Rz Rx p' + Rz (Rx' p) + (Rz' Rx p)
        let (sin_i_k, cos_i_k) = i_k.sin_cos();
        let fd_rot_x3 = Vector3::new(0.0, -y * sin_i_k * fd_i_k, y * cos_i_k * fd_i_k);
        let orbital_velocity = rot3 * Vector3::new(fd_x, fd_y, 0.0) + rot_z3 * fd_rot_x3;
        let velocity_m_s =
            orbital_velocity + Vector3::new(-position_m[1], position_m[0], 0.0) * fd_omega_k;

        let clock = self.clock_correction(t, e_k, cfg);

        debug!(
            "({}) - t={} t_k={} x={} y={} z={} (m) - kepler iterations={} converged={}",
            self.sv,
            t,
            t_k,
            position_m[0],
            position_m[1],
            position_m[2],
            kepler.iterations,
            kepler.converged,
        );

        SatelliteLocation {
            sv: self.sv,
            t_s: t,
            t_k_s: t_k,
            position_m,
            velocity_m_s,
            kepler,
            clock,
        }
    }
}
