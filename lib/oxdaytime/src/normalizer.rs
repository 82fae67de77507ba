/// Normalizes an `(hours, minutes, seconds)` triple so that minutes and seconds are between 0 and 59.
///
/// Fields are normalized from the smallest to the largest:
/// seconds overflowing 59 are carried into the minutes and negative seconds borrow from them,
/// then minutes do the same with the hours.
/// The represented quantity of seconds is preserved, except that the hours saturate at the `i64` bounds.
///
/// If `wrap_hours` is `true` the hours are then taken modulo 24 so that the result is a point of a cyclic day
/// (a negative triple is understood as a time of the previous day).
/// Otherwise the hours are left unbounded and carry the sign of the whole quantity.
///
/// ```
/// use oxdaytime::normalize;
///
/// assert_eq!(normalize(180, 180, 180, false), (183, 3, 0));
/// assert_eq!(normalize(24, 60, 60, true), (1, 1, 0));
/// assert_eq!(normalize(-10, -42, -43, false), (-11, 17, 17));
/// assert_eq!(normalize(0, -1, -1, true), (23, 58, 59));
/// ```
pub fn normalize(hours: i64, minutes: i64, seconds: i64, wrap_hours: bool) -> (i64, u8, u8) {
    let (mut hours, mut minutes, mut seconds) = (hours, minutes, seconds);

    if seconds >= 60 {
        minutes = minutes.saturating_add(seconds / 60);
        seconds %= 60;
    } else if seconds < 0 {
        // Borrows ceil(|seconds| / 60) minutes
        minutes = minutes.saturating_add(seconds.div_euclid(60));
        seconds = seconds.rem_euclid(60);
        if minutes < 0 {
            hours = hours.saturating_sub(1);
            minutes += 60;
        }
    }

    if minutes >= 60 {
        hours = hours.saturating_add(minutes / 60);
        minutes %= 60;
    } else if minutes < 0 {
        hours = hours.saturating_add(minutes.div_euclid(60));
        minutes = minutes.rem_euclid(60);
        if wrap_hours && hours < 0 {
            hours += 24;
        }
    }

    if wrap_hours {
        hours = hours.rem_euclid(24);
    }

    (hours, sexagesimal(minutes), sexagesimal(seconds))
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sexagesimal(value: i64) -> u8 {
    debug_assert!((0..60).contains(&value), "{value} is not in 0..60");
    value as u8
}
