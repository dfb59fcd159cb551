use crate::{
    constants::{HALF_WEEK_SECONDS, SPEED_OF_LIGHT_M_S, WEEK_SECONDS},
    error::Error,
    prelude::{Epoch, TimeScale, SV},
};

/// Wraps a time difference, expressed in seconds of week, to [-302400, 302400].
/// Time of week counters wrap at every week boundary, so the difference between
/// two of them can be off by one week: this is the week rollover correction.
pub fn normalize_week_seconds(dt_s: f64) -> f64 {
    if dt_s > HALF_WEEK_SECONDS {
        dt_s - WEEK_SECONDS
    } else if dt_s < -HALF_WEEK_SECONDS {
        dt_s + WEEK_SECONDS
    } else {
        dt_s
    }
}

/// Returns (week counter, seconds of week) of this [Epoch]
/// expressed in desired [TimeScale].
pub fn time_of_week(epoch: Epoch, timescale: TimeScale) -> (u32, f64) {
    let (week, nanos) = epoch.to_time_scale(timescale).to_time_of_week();
    (week, nanos as f64 / 1.0E9)
}

/// Builds the [Epoch] that corresponds to this (week counter, seconds of week)
/// pair, in desired [TimeScale].
pub fn epoch_from_time_of_week(week: u32, seconds: f64, timescale: TimeScale) -> Epoch {
    let nanos = (seconds.max(0.0) * 1.0E9).round() as u64;
    Epoch::from_time_of_week(week, nanos, timescale)
}

/// Returns the [TimeScale] this [SV] broadcasts its time of week in.
pub fn sv_timescale(sv: SV) -> Result<TimeScale, Error> {
    sv.constellation.timescale().ok_or(Error::UnknownTimescale)
}

/// Returns raw transmission time (in seconds of week) of a signal
/// received at `t_rx_s` (seconds of week) with given pseudo range.
/// The satellite clock offset is not compensated here.
pub fn raw_transmission_time(t_rx_s: f64, pseudo_range_m: f64) -> Result<f64, Error> {
    if pseudo_range_m < 0.0 {
        return Err(Error::NegativeTransmissionTime);
    }
    Ok(t_rx_s - pseudo_range_m / SPEED_OF_LIGHT_M_S)
}
