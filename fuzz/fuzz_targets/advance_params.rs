#![no_main]

use libfuzzer_sys::fuzz_target;
use mottle_sim::{ParamSet, SeedPolicy, Session};

fuzz_target!(|raw: [f32; 7]| {
    let params = ParamSet {
        d_a: raw[0],
        d_b: raw[1],
        feed: raw[2],
        feed_diff: raw[3],
        feed_variation: raw[4],
        kill_min: raw[5],
        kill_max: raw[6],
        iterations: 4,
        ..ParamSet::default()
    };

    // Stepping should never panic, whatever the parameters
    let mut session = Session::new(16, 16, SeedPolicy::Fixed(0xF00D)).unwrap();
    let grid = session.advance(&params);

    // For moderate finite parameters the clamp keeps every concentration
    // inside [0, 1]
    if raw.iter().all(|v| v.is_finite() && v.abs() <= 1e3) {
        for cell in grid.cells() {
            assert!((0.0..=1.0).contains(&cell.a));
            assert!((0.0..=1.0).contains(&cell.b));
        }
    }
});
