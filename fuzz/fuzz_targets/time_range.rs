#![no_main]

use libfuzzer_sys::fuzz_target;
use oxdaytime::{TimeOfDay, TimeRange};

fn time_of_day((hour, minute, second): (u8, u8, u8)) -> TimeOfDay {
    TimeOfDay::new((hour % 24).into(), (minute % 60).into(), (second % 60).into())
}

fuzz_target!(|input: ((u8, u8, u8), (u8, u8, u8), (u8, u8, u8), u8)| {
    let (start, end, time, step) = input;
    let (start, end, time) = (time_of_day(start), time_of_day(end), time_of_day(time));
    let range = TimeRange::new(start.clone(), end.clone());

    assert!(range.contains(&start));
    assert_eq!(range.contains(&end), range.is_empty());
    assert_eq!(
        range.contains(&time),
        range.is_empty() || time.duration_since_earlier(&start) < range.duration()
    );

    let parts = range.split(step.into());
    assert_eq!(parts.first().map(TimeRange::start), Some(&start));
    assert_eq!(parts.last().map(TimeRange::end), Some(&end));
    for pair in parts.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    let covered: i64 = parts.iter().map(|part| part.duration().as_seconds()).sum();
    assert_eq!(covered, range.duration().as_seconds());
});
