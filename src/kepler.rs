//! Kepler's equation solver
use log::warn;
use std::f64::consts::{PI, TAU};

use crate::cfg::{KeplerConfig, KeplerMethod};

/// [KeplerSolution] is the eccentric anomaly along with
/// the quality indicators of the solving process.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly (in radians)
    pub e_k_rad: f64,
    /// Number of iterations that were needed
    pub iterations: usize,
    /// |E - e sin(E) - M| residual (in radians)
    pub residual_rad: f64,
    /// False when the iteration cap was reached before the convergence criteria.
    /// The solution is then the last iterate, with degraded precision.
    pub converged: bool,
}

/// Above this eccentricity, Newton iterations are seeded with E = π.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Solves M = E - e sin(E) for E, seeded with E = M.
/// Iterates until |E(n+1) - E(n)| < tolerance or max iterations is reached.
/// 0 <= e < 1 is a precondition: validate your ephemeris beforehand.
///
/// Highly eccentric orbits (e > 0.8) solved with [KeplerMethod::Newton] are
/// reduced to M in [0, 2π[ and seeded with E = π: f(E) = E - e sin(E) - M is
/// then convex (resp. concave) over the half period that contains the root,
/// so the iterates converge monotonically.
pub fn solve(m_k: f64, e: f64, cfg: &KeplerConfig) -> KeplerSolution {
    debug_assert!((0.0..1.0).contains(&e), "invalid eccentricity {}", e);

    let (m_red, offset, mut e_k) = match cfg.method {
        KeplerMethod::Newton if e > HIGH_ECCENTRICITY => {
            let m_red = m_k.rem_euclid(TAU);
            (m_red, m_k - m_red, PI)
        },
        _ => (m_k, 0.0, m_k),
    };

    let mut iterations = 0;
    let mut converged = false;

    while iterations < cfg.max_iterations {
        let e_k_next = match cfg.method {
            KeplerMethod::Newton => {
                let (sin_e_k, cos_e_k) = e_k.sin_cos();
                e_k - (e_k - e * sin_e_k - m_red) / (1.0 - e * cos_e_k)
            },
            KeplerMethod::FixedPoint => m_red + e * e_k.sin(),
        };

        iterations += 1;

        let delta = (e_k_next - e_k).abs();
        e_k = e_k_next;

        if delta < cfg.tolerance_rad {
            converged = true;
            break;
        }
    }

    e_k += offset;
    let residual_rad = (e_k - e * e_k.sin() - m_k).abs();

    if !converged {
        warn!(
            "kepler solver ({}) did not converge after {} iterations: M={} e={} residual={:e}",
            cfg.method, iterations, m_k, e, residual_rad
        );
    }

    KeplerSolution {
        e_k_rad: e_k,
        iterations,
        residual_rad,
        converged,
    }
}
