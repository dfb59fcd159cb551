use crate::prelude::Duration;

/// Satellite [ClockCorrection], to be subtracted from the satellite
/// time of transmission to obtain system time.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct ClockCorrection {
    /// af0 + af1 dt + af2 dt² polynomial term (in seconds)
    pub polynomial_s: f64,
    /// Relativistic (eccentricity induced) term (in seconds)
    pub relativistic_s: f64,
    /// Total group delay (in seconds), already subtracted in [Self::total_s].
    pub group_delay_s: f64,
}

impl ClockCorrection {
    /// Define a new [ClockCorrection] that only integrates the clock polynomial
    pub fn from_polynomial(polynomial_s: f64) -> Self {
        Self {
            polynomial_s,
            ..Default::default()
        }
    }

    /// Copies and returns [ClockCorrection] that integrates the relativistic correction
    pub fn with_relativistic_correction(&self, relativistic_s: f64) -> Self {
        let mut s = *self;
        s.relativistic_s = relativistic_s;
        s
    }

    /// Copies and returns [ClockCorrection] that integrates the total group delay
    pub fn with_group_delay(&self, group_delay_s: f64) -> Self {
        let mut s = *self;
        s.group_delay_s = group_delay_s;
        s
    }

    /// Total clock correction (in seconds)
    pub fn total_s(&self) -> f64 {
        self.polynomial_s + self.relativistic_s - self.group_delay_s
    }

    /// Total clock correction, expressed as [Duration]
    pub fn duration(&self) -> Duration {
        Duration::from_seconds(self.total_s())
    }
}
