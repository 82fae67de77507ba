use crate::normalizer::normalize;
use crate::parser::{ParseTimeError, parse_duration};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A length of time in hours, minutes and seconds.
///
/// Minutes and seconds are always between 0 and 59 and the hours absorb everything else:
/// they are not bounded to a day, carry the sign of the duration and saturate at the `i64` bounds.
/// A negative duration is hence stored with negative hours and positive minutes and seconds:
/// `-11:17:17` is -11 hours plus 17 minutes and 17 seconds, i.e. -10 hours, 42 minutes and 43 seconds.
///
/// Comparison is lexicographic on `(hours, minutes, seconds)`.
///
/// ```
/// use oxdaytime::Duration;
///
/// let duration = Duration::new(0, 130, 130);
/// assert_eq!((duration.hours(), duration.minutes(), duration.seconds()), (2, 12, 10));
/// assert_eq!(duration.to_string(), "02:12:10");
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash, Default)]
pub struct Duration {
    hours: i64,
    minutes: u8,
    seconds: u8,
}

impl Duration {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Builds a duration from any triple, carrying overflowing and negative minutes and seconds into the hours.
    #[inline]
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        let (hours, minutes, seconds) = normalize(hours, minutes, seconds, false);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    #[inline]
    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(0, 0, seconds)
    }

    #[inline]
    #[must_use]
    pub fn hours(self) -> i64 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// The number of seconds represented by this duration, saturating at the `i64` bounds.
    #[inline]
    #[must_use]
    pub fn as_seconds(self) -> i64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(i64::from(self.minutes) * 60 + i64::from(self.seconds))
    }

    #[inline]
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn total_seconds(self) -> f64 {
        self.as_seconds() as f64
    }

    #[inline]
    #[must_use]
    pub fn total_minutes(self) -> f64 {
        self.total_seconds() / 60.
    }

    #[inline]
    #[must_use]
    pub fn total_hours(self) -> f64 {
        self.total_seconds() / 3600.
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.hours.saturating_add(rhs.hours),
            i64::from(self.minutes) + i64::from(rhs.minutes),
            i64::from(self.seconds) + i64::from(rhs.seconds),
        )
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.hours.saturating_sub(rhs.hours),
            i64::from(self.minutes) - i64::from(rhs.minutes),
            i64::from(self.seconds) - i64::from(rhs.seconds),
        )
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl FromStr for Duration {
    type Err = ParseTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_duration(input)
    }
}

impl fmt::Display for Duration {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename = "Duration")]
        struct Value {
            hours: i64,
            minutes: u8,
            seconds: u8,
        }
        Value {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Duration")]
        struct Value {
            hours: i64,
            minutes: i64,
            seconds: i64,
        }
        let value = Value::deserialize(deserializer)?;
        Ok(Self::new(value.hours, value.minutes, value.seconds))
    }
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(Duration::new(0, 0, 0), Duration::ZERO);
        let b = Duration::new(100, 10, 10);
        assert_eq!((b.hours(), b.minutes(), b.seconds()), (100, 10, 10));
        let c = Duration::new(70, 70, 70);
        assert_eq!((c.hours(), c.minutes(), c.seconds()), (71, 11, 10));
        let d = Duration::new(0, 130, 130);
        assert_eq!((d.hours(), d.minutes(), d.seconds()), (2, 12, 10));
        let e = Duration::new(0, 0, -1);
        assert_eq!((e.hours(), e.minutes(), e.seconds()), (-1, 59, 59));
        assert_eq!(Duration::from_seconds(5430), Duration::new(1, 30, 30));
        assert_eq!(Duration::from_seconds(-60), Duration::new(-1, 59, 0));
    }

    #[test]
    fn is_zero() {
        assert!(Duration::new(0, 0, 0).is_zero());
        assert!(Duration::default().is_zero());
        assert!(!Duration::new(0, 0, 1).is_zero());
        assert!(!Duration::new(-1, 0, 0).is_zero());
    }

    #[test]
    fn totals() {
        let a = Duration::new(1, 0, 0);
        assert!((a.total_hours() - 1.).abs() < f64::EPSILON);
        assert!((a.total_minutes() - 60.).abs() < f64::EPSILON);
        assert!((a.total_seconds() - 3600.).abs() < f64::EPSILON);
        let b = Duration::new(1, 30, 0);
        assert!((b.total_hours() - 1.5).abs() < f64::EPSILON);
        assert!((b.total_minutes() - 90.).abs() < f64::EPSILON);
        assert!((b.total_seconds() - 5400.).abs() < f64::EPSILON);
        let c = Duration::new(1, 30, 30);
        assert!((c.total_hours() - 1.508).abs() < 0.001);
        assert!((c.total_minutes() - 90.5).abs() < f64::EPSILON);
        assert_eq!(c.as_seconds(), 5430);
        assert_eq!(Duration::new(-11, 17, 17).as_seconds(), -(10 * 3600 + 42 * 60 + 43));
    }

    #[test]
    fn add() {
        let a = Duration::new(10, 10, 10);
        let b = Duration::new(100, 9, 8);
        let c = Duration::new(20, 51, 51);
        assert_eq!(a + b, Duration::new(110, 19, 18));
        assert_eq!(a + c, Duration::new(31, 2, 1));
        assert_eq!(b + c, Duration::new(121, 0, 59));
        let mut d = a;
        d += c;
        assert_eq!(d, Duration::new(31, 2, 1));
        assert_eq!([a, b, c].into_iter().sum::<Duration>(), Duration::new(131, 11, 9));
        assert_eq!(Vec::<Duration>::new().into_iter().sum::<Duration>(), Duration::ZERO);
    }

    #[test]
    fn sub() {
        let a = Duration::new(100, 10, 10);
        let b = Duration::new(10, 9, 8);
        let c = Duration::new(20, 51, 51);
        assert_eq!(a - b, Duration::new(90, 1, 2));
        assert_eq!(a - c, Duration::new(79, 18, 19));
        let bc = b - c;
        assert_eq!((bc.hours(), bc.minutes(), bc.seconds()), (-11, 17, 17));
        assert_eq!(bc + c, b);
        let mut d = a;
        d -= a;
        assert!(d.is_zero());
    }

    #[test]
    fn arithmetic_saturates() {
        let big = Duration::new(i64::MAX / 2 + 1, 0, 0);
        assert_eq!(big + big, Duration::new(i64::MAX, 0, 0));
        assert_eq!(
            Duration::new(i64::MAX, 59, 59) + Duration::new(0, 0, 1),
            Duration::new(i64::MAX, 0, 0)
        );
        let small = Duration::new(i64::MIN / 2 - 1, 0, 0);
        assert_eq!(small - big, Duration::new(i64::MIN, 0, 0));
        let mut sum = big;
        sum += big;
        sum += big;
        assert_eq!(sum.hours(), i64::MAX);
        assert_eq!([big, big, big].into_iter().sum::<Duration>().hours(), i64::MAX);
    }

    #[test]
    fn as_seconds() {
        assert_eq!(Duration::new(-11, 17, 17).as_seconds(), -38_563);
        assert_eq!(Duration::from_seconds(90_061).as_seconds(), 90_061);
        assert_eq!(Duration::new(i64::MAX / 3600 + 1, 0, 0).as_seconds(), i64::MAX);
        assert_eq!(Duration::new(i64::MAX, 59, 59).as_seconds(), i64::MAX);
        assert_eq!(Duration::new(i64::MIN / 3600 - 1, 0, 0).as_seconds(), i64::MIN);
    }

    #[test]
    fn ordering() {
        let a = Duration::new(10, 10, 10);
        let b = Duration::new(10, 10, 10);
        let c = Duration::new(10, 10, 11);
        let d = Duration::new(10, 9, 12);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(d < c);
        assert!(c > a);
        assert!(b <= a && d <= c);
        assert!(a >= b);
        assert!(Duration::new(-1, 59, 59) < Duration::ZERO);
        assert!(Duration::new(-11, 17, 17) < Duration::new(-10, 0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Duration::new(1, 23, 4).to_string(), "01:23:04");
        assert_eq!(Duration::new(44, 0, 40).to_string(), "44:00:40");
        assert_eq!(Duration::new(110, 19, 18).to_string(), "110:19:18");
        assert_eq!(Duration::new(-11, 17, 17).to_string(), "-11:17:17");
        assert_eq!(Duration::new(-1, 30, 0).to_string(), "-1:30:00");
    }

    #[test]
    fn from_str() -> Result<(), ParseTimeError> {
        assert_eq!(Duration::from_str("01:23:04")?, Duration::new(1, 23, 4));
        assert_eq!(Duration::from_str("110:19:18")?, Duration::new(110, 19, 18));
        assert_eq!(Duration::from_str("-11:17:17")?, Duration::new(-11, 17, 17));
        assert_eq!(Duration::from_str("0:00:00")?, Duration::ZERO);
        Duration::from_str("").unwrap_err();
        Duration::from_str("01:60:00").unwrap_err();
        Duration::from_str("01:00").unwrap_err();
        Duration::from_str("-:00:00").unwrap_err();
        Duration::from_str("01:00:00 ").unwrap_err();
        Duration::from_str("99999999999999999999:00:00").unwrap_err();
        Ok(())
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        let duration = Duration::new(-11, 17, 17);
        let json = serde_json::to_string(&duration).unwrap();
        assert_eq!(json, "{\"hours\":-11,\"minutes\":17,\"seconds\":17}");
        let decoded: Duration = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, duration);
        let decoded: Duration =
            serde_json::from_str("{\"hours\":0,\"minutes\":130,\"seconds\":130}").unwrap();
        assert_eq!(decoded, Duration::new(2, 12, 10));
    }
}
