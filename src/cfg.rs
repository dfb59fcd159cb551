#[cfg(feature = "serde")]
use serde::Deserialize;

/// Numerical method used to solve Kepler's equation
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum KeplerMethod {
    /// Newton-Raphson iteration: quadratic convergence,
    /// a few iterations are enough for any GNSS orbit.
    #[default]
    Newton,
    /// Fixed point iteration E = M + e sin(E), linear convergence
    /// of rate `e`. Converges for any closed orbit.
    FixedPoint,
}

impl std::fmt::Display for KeplerMethod {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Newton => write!(fmt, "Newton"),
            Self::FixedPoint => write!(fmt, "Fixed-Point"),
        }
    }
}

fn default_tolerance() -> f64 {
    1.0E-12
}

fn default_max_iter() -> usize {
    20
}

fn default_max_dtoe() -> f64 {
    7200.0
}

fn default_true() -> bool {
    true
}

/// Kepler solver parametrization
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeplerConfig {
    /// [KeplerMethod] to be used
    pub method: KeplerMethod,
    /// Convergence criteria, on |E(n+1) - E(n)| (in radians)
    pub tolerance_rad: f64,
    /// Maximal number of iterations. This bounds the solving latency.
    pub max_iterations: usize,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            method: KeplerMethod::default(),
            tolerance_rad: default_tolerance(),
            max_iterations: default_max_iter(),
        }
    }
}

/// [Propagator](crate::prelude::Propagator) configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// [KeplerConfig]
    #[cfg_attr(feature = "serde", serde(default))]
    pub kepler: KeplerConfig,
    /// Maximal |t - toe| (in seconds) for an ephemeris frame to be used
    #[cfg_attr(feature = "serde", serde(default = "default_max_dtoe"))]
    pub max_dtoe_s: f64,
    /// Apply the relativistic correction to the satellite clock
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub relativistic_correction: bool,
    /// Apply the total group delay (single frequency L1 users)
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub group_delay: bool,
    /// Compensate Earth rotation during signal propagation
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub sagnac_correction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kepler: KeplerConfig::default(),
            max_dtoe_s: default_max_dtoe(),
            relativistic_correction: default_true(),
            group_delay: default_true(),
            sagnac_correction: default_true(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with desired [KeplerMethod]
    pub fn with_kepler_method(&self, method: KeplerMethod) -> Self {
        let mut s = *self;
        s.kepler.method = method;
        s
    }

    /// Copies and returns [Config] with desired Kepler convergence criteria
    pub fn with_kepler_tolerance(&self, tolerance_rad: f64, max_iterations: usize) -> Self {
        let mut s = *self;
        s.kepler.tolerance_rad = tolerance_rad;
        s.kepler.max_iterations = max_iterations;
        s
    }

    /// Copies and returns [Config] with desired validity window
    pub fn with_max_dtoe(&self, max_dtoe_s: f64) -> Self {
        let mut s = *self;
        s.max_dtoe_s = max_dtoe_s;
        s
    }

    /// Copies and returns [Config] without any signal related correction.
    /// Resulting states are the raw broadcast orbit.
    pub fn without_corrections(&self) -> Self {
        let mut s = *self;
        s.relativistic_correction = false;
        s.group_delay = false;
        s.sagnac_correction = false;
        s
    }
}
