#![no_main]

use libfuzzer_sys::fuzz_target;
use oxdaytime::{Duration, TimeOfDay, TimeRange};
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = str::from_utf8(data) else {
        return;
    };
    if let Ok(time) = input.parse::<TimeOfDay>() {
        assert_eq!(time.to_string().parse::<TimeOfDay>().unwrap(), time);
    }
    if let Ok(duration) = input.parse::<Duration>() {
        assert_eq!(duration.to_string().parse::<Duration>().unwrap(), duration);
    }
    if let Ok(range) = input.parse::<TimeRange>() {
        assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), range);
    }
});
