#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oxdaytime::{Duration, TimeOfDay};

#[derive(Arbitrary, Debug)]
struct Input {
    time: (i8, i8, i8),
    other: (i8, i8, i8),
    seconds: i32,
    rounding_step: u16,
}

fn time_of_day((hour, minute, second): (i8, i8, i8)) -> TimeOfDay {
    TimeOfDay::new(hour.into(), minute.into(), second.into())
}

fuzz_target!(|input: Input| {
    let time = time_of_day(input.time);
    let other = time_of_day(input.other);
    let seconds = i64::from(input.seconds);

    let added = time.adding(seconds, true);
    assert_eq!(added.subtracting(seconds, true), time);
    assert_eq!(
        added.total_seconds(),
        (time.total_seconds() + seconds).rem_euclid(86_400)
    );
    assert_eq!(
        time.adding(seconds, false).total_seconds(),
        (time.total_seconds() + seconds).clamp(0, 86_399)
    );

    let since = time.duration_since_earlier(&other);
    let till = time.duration_till_later(&other);
    assert!(since >= Duration::ZERO && since.as_seconds() < 86_400);
    assert!(till >= Duration::ZERO && till.as_seconds() < 86_400);
    if time != other {
        assert_eq!((since + till).as_seconds(), 86_400);
    }

    let rounded = time.round_to_nearest(input.rounding_step.into());
    assert_eq!(rounded.second(), 0);
    let step = i64::from(input.rounding_step.max(1));
    if 1440 % step == 0 {
        assert_eq!(rounded.total_seconds() % (step * 60), 0);
    }
});
