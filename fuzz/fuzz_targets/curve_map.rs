#![no_main]

use libfuzzer_sys::fuzz_target;
use mottle_shade::Curve;

fuzz_target!(|input: (f32, f32, f32)| {
    let (threshold, sharpness, concentration) = input;

    // Construction either rejects the configuration or yields a total map
    if let Ok(curve) = Curve::new(threshold, sharpness) {
        let intensity = curve.map_value(concentration);
        if concentration.is_finite() {
            assert!(
                (0.0..=1.0).contains(&intensity),
                "intensity {intensity} escaped [0, 1]"
            );
        }
    }
});
