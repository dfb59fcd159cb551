use std::thread;

use crate::{
    prelude::{Propagator, SatelliteLocation},
    tests::data::gps_constellation,
};

#[test]
fn concurrent_propagation() {
    const NUM_SV: usize = 32;
    const NUM_EPOCHS: usize = 50;

    let ephemerides = gps_constellation(NUM_SV);
    let propagator = Propagator::default();

    let epochs = (0..NUM_EPOCHS)
        .map(|i| 409904.0 + i as f64 * 30.0)
        .collect::<Vec<_>>();

    // sequential reference
    let reference = ephemerides
        .iter()
        .map(|eph| {
            epochs
                .iter()
                .map(|t| propagator.propagate(eph, *t))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // one worker per satellite, each owning its output locations
    let mut outputs = vec![vec![SatelliteLocation::default(); NUM_EPOCHS]; NUM_SV];

    thread::scope(|s| {
        for (eph, output) in ephemerides.iter().zip(outputs.iter_mut()) {
            let epochs = &epochs;
            let propagator = &propagator;
            s.spawn(move || {
                for (t, loc) in epochs.iter().zip(output.iter_mut()) {
                    *loc = propagator.propagate(eph, *t);
                }
            });
        }
    });

    assert_eq!(outputs, reference);

    // shared output-less queries on a single ephemeris
    let eph = ephemerides[0];
    let handles = (0..8)
        .map(|_| thread::spawn(move || eph.sv_position(413504.0)))
        .collect::<Vec<_>>();

    let expected = eph.sv_position(413504.0);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
