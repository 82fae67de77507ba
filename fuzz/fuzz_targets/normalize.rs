#![no_main]

use libfuzzer_sys::fuzz_target;
use oxdaytime::normalize;

fuzz_target!(|input: (i32, i32, i32, bool)| {
    let (hours, minutes, seconds, wrap) = input;
    let (hours, minutes, seconds) = (i64::from(hours), i64::from(minutes), i64::from(seconds));
    let (new_hours, new_minutes, new_seconds) = normalize(hours, minutes, seconds, wrap);
    assert!(new_minutes < 60 && new_seconds < 60);
    let before = hours * 3600 + minutes * 60 + seconds;
    let after = new_hours * 3600 + i64::from(new_minutes) * 60 + i64::from(new_seconds);
    if wrap {
        assert!((0..24).contains(&new_hours));
        assert_eq!(before.rem_euclid(86_400), after);
    } else {
        assert_eq!(before, after);
    }
});
