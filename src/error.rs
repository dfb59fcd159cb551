use thiserror::Error;

use crate::prelude::{Epoch, SV};

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Broadcast orbits must describe a closed orbit (0 <= e < 1).
    #[error("{0}: invalid eccentricity {1} (closed orbit expected)")]
    InvalidEccentricity(SV, f64),

    /// Square root of the semi major axis must be strictly positive.
    #[error("{0}: invalid semi major axis square root {1}")]
    InvalidSemiMajorAxis(SV, f64),

    /// Any `nan` or infinite orbital or clock parameter will cause us
    /// to reject the [Ephemeris](crate::prelude::Ephemeris) frame.
    #[error("{0}: non finite \"{1}\" parameter")]
    NonFiniteParameter(SV, &'static str),

    /// Time of week can only be determined for [SV] that have a known timescale.
    #[error("unknown SV timescale: cannot proceed")]
    UnknownTimescale,

    /// No [Ephemeris](crate::prelude::Ephemeris) was proposed for this [SV].
    #[error("{0}({1}) - missing ephemeris")]
    MissingEphemeris(Epoch, SV),

    /// Proposed [Ephemeris](crate::prelude::Ephemeris) is too far from its
    /// reference epoch to be used.
    #[error("{0}({1}) - outdated ephemeris")]
    OutdatedEphemeris(Epoch, SV),

    /// Physical non sense due to bad pseudo range
    #[error("physical non sense: negative signal propagation time")]
    NegativeTransmissionTime,
}
