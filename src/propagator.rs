//! Satellite orbit propagator
use log::{debug, error};

use crate::{
    cfg::Config,
    error::Error,
    location::SatelliteLocation,
    prelude::{Duration, Ephemeris, EphemerisSource, Epoch, SV},
    time::{normalize_week_seconds, raw_transmission_time, sv_timescale, time_of_week},
};

/// [Propagator] resolves [SatelliteLocation]s from broadcast [Ephemeris].
/// It does not hold any state other than its [Config]: a single [Propagator]
/// may serve any number of satellites, from any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Propagator {
    /// [Config] used by this [Propagator]
    pub cfg: Config,
}

impl Propagator {
    /// Creates a new [Propagator]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Resolves [SatelliteLocation] at `t` (in seconds of week).
    /// [Ephemeris] sanity is a precondition, see [Self::try_propagate].
    pub fn propagate(&self, eph: &Ephemeris, t: f64) -> SatelliteLocation {
        eph.resolve_state(t, &self.cfg)
    }

    /// Verifies [Ephemeris] sanity, then resolves [SatelliteLocation]
    /// at `t` (in seconds of week).
    pub fn try_propagate(&self, eph: &Ephemeris, t: f64) -> Result<SatelliteLocation, Error> {
        Self::validate(eph)?;
        Ok(self.propagate(eph, t))
    }

    /// Resolves the [SatelliteLocation] of all [Ephemeris] at `t` (in seconds of week).
    pub fn propagate_all(&self, ephemerides: &[Ephemeris], t: f64) -> Vec<SatelliteLocation> {
        ephemerides
            .iter()
            .map(|eph| self.propagate(eph, t))
            .collect()
    }

    /// Resolves [SatelliteLocation] at the time of transmission of a signal
    /// received at `t_rx` (in seconds of week) with given pseudo range (in meters).
    /// The time of transmission is corrected for the satellite clock offset,
    /// and, when [Config::sagnac_correction] is enabled, the returned location
    /// is expressed in the ECEF frame at reception time.
    pub fn at_reception(
        &self,
        eph: &Ephemeris,
        t_rx: f64,
        pseudo_range_m: f64,
    ) -> Result<SatelliteLocation, Error> {
        Self::validate(eph)?;

        let t_tx = raw_transmission_time(t_rx, pseudo_range_m)?;

        // first guess to evaluate the clock offset (relativistic term included)
        let first = self.propagate(eph, t_tx);
        let t_tx = t_tx - first.clock.total_s();

        let loc = self.propagate(eph, t_tx);
        let dt_flight = normalize_week_seconds(t_rx - t_tx);

        if dt_flight < 0.0 {
            return Err(Error::NegativeTransmissionTime);
        }

        debug!(
            "({}) - t_rx={} t_tx={} flight={:e}s clock={:e}s",
            eph.sv,
            t_rx,
            t_tx,
            dt_flight,
            loc.clock.total_s()
        );

        if self.cfg.sagnac_correction {
            Ok(loc.with_earth_rotation(dt_flight, eph.earth_model().omega_rad_s))
        } else {
            Ok(loc)
        }
    }

    /// Resolves [SatelliteLocation] of [SV] at [Epoch], using [Ephemeris]
    /// provided by the [EphemerisSource]. The [Ephemeris] needs to be sane and
    /// still valid, with respect to [Config::max_dtoe_s].
    pub fn resolve<S: EphemerisSource>(
        &self,
        source: &S,
        epoch: Epoch,
        sv: SV,
    ) -> Result<SatelliteLocation, Error> {
        let timescale = sv_timescale(sv)?;

        let eph = source
            .ephemeris_data(epoch, sv)
            .ok_or(Error::MissingEphemeris(epoch, sv))?;

        if !eph.is_valid(epoch, Duration::from_seconds(self.cfg.max_dtoe_s)) {
            error!("{}({}) - outdated ephemeris", epoch, sv);
            return Err(Error::OutdatedEphemeris(epoch, sv));
        }

        let (_, t) = time_of_week(epoch, timescale);
        self.try_propagate(&eph, t)
    }

    /// [Ephemeris::validate], rejections are logged.
    fn validate(eph: &Ephemeris) -> Result<(), Error> {
        eph.validate().map_err(|e| {
            error!("({}) - rejected ephemeris: {}", eph.sv, e);
            e
        })
    }
}
