use crate::clamp::{Clamped, clamp};
use crate::duration::Duration;
use crate::normalizer::normalize;
use crate::parser::{ParseTimeError, parse_time_of_day};
use crate::wall_clock::{InvalidWallClockComponents, WallClock};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::SystemTime;

const SECONDS_PER_DAY: i64 = 86_400;
const LAST_SECOND_OF_DAY: i64 = SECONDS_PER_DAY - 1;

/// A point of a 24-hour day, from `00:00:00` to `23:59:59`.
///
/// The hour is between 0 and 23 and the minute and second between 0 and 59.
/// Out of range values given to [`TimeOfDay::new`] are clamped to the nearest bound, each field independently:
/// `TimeOfDay::new(0, 90, 0)` is `00:59:00`, not `01:30:00`.
/// Only the arithmetic operations carry overflows from a field to the next one.
///
/// Each value also holds the AM and PM symbols used by its [12-hour clock representation](TimeOfDay::display_12_hour).
/// They are not part of the value identity: equality, ordering and hashing only look at the hour, minute and second.
///
/// ```
/// use oxdaytime::TimeOfDay;
///
/// let time = TimeOfDay::new(13, 5, 42);
/// assert_eq!(time.to_string(), "13:05:42");
/// assert_eq!(time.display_12_hour().to_string(), "01:05:42PM");
/// assert_eq!(TimeOfDay::new(24, 60, -1), TimeOfDay::new(23, 59, 0));
/// ```
#[derive(Debug, Clone)]
pub struct TimeOfDay {
    hour: Clamped<u8>,
    minute: Clamped<u8>,
    second: Clamped<u8>,
    am_symbol: Cow<'static, str>,
    pm_symbol: Cow<'static, str>,
}

impl TimeOfDay {
    #[inline]
    pub fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour: clamped_field(hour, 23),
            minute: clamped_field(minute, 59),
            second: clamped_field(second, 59),
            am_symbol: Cow::Borrowed("AM"),
            pm_symbol: Cow::Borrowed("PM"),
        }
    }

    /// Reads the hour, minute and second of a wall clock.
    ///
    /// If `discard_seconds` is `true` the second is set to 0.
    ///
    /// ```
    /// use oxdaytime::{ClockComponents, TimeOfDay};
    ///
    /// let reading = ClockComponents::new(8, 15, 30);
    /// assert_eq!(TimeOfDay::from_wall_clock(&reading, false)?, TimeOfDay::new(8, 15, 30));
    /// assert_eq!(TimeOfDay::from_wall_clock(&reading, true)?, TimeOfDay::new(8, 15, 0));
    /// # Result::<_, oxdaytime::InvalidWallClockComponents>::Ok(())
    /// ```
    pub fn from_wall_clock(
        source: &(impl WallClock + ?Sized),
        discard_seconds: bool,
    ) -> Result<Self, InvalidWallClockComponents> {
        let (hour, minute, second) = source.clock_components().complete()?;
        Ok(Self::new(
            hour,
            minute,
            if discard_seconds { 0 } else { second },
        ))
    }

    /// The current UTC time of day according to the system clock.
    #[inline]
    pub fn now() -> Self {
        Self::from_seconds_of_day(seconds_of_day(&SystemTime::now()))
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour.get()
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute.get()
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.second.get()
    }

    /// The hour on a 12-hour clock and if it is before noon.
    ///
    /// ```
    /// use oxdaytime::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(0, 0, 0).hour12(), (12, true));
    /// assert_eq!(TimeOfDay::new(12, 0, 0).hour12(), (12, false));
    /// assert_eq!(TimeOfDay::new(23, 0, 0).hour12(), (11, false));
    /// ```
    #[must_use]
    pub fn hour12(&self) -> (u8, bool) {
        match self.hour() {
            0 => (12, true),
            hour @ 1..=11 => (hour, true),
            12 => (12, false),
            hour => (hour - 12, false),
        }
    }

    /// The number of seconds elapsed since `00:00:00`.
    #[inline]
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hour()) * 3600 + i64::from(self.minute()) * 60 + i64::from(self.second())
    }

    #[inline]
    #[must_use]
    pub fn am_symbol(&self) -> &str {
        &self.am_symbol
    }

    #[inline]
    #[must_use]
    pub fn pm_symbol(&self) -> &str {
        &self.pm_symbol
    }

    #[inline]
    pub fn set_am_symbol(&mut self, symbol: impl Into<Cow<'static, str>>) {
        self.am_symbol = symbol.into();
    }

    #[inline]
    pub fn set_pm_symbol(&mut self, symbol: impl Into<Cow<'static, str>>) {
        self.pm_symbol = symbol.into();
    }

    /// The AM symbol if `is_am` is `true` and the PM symbol otherwise.
    #[inline]
    #[must_use]
    pub fn symbol(&self, is_am: bool) -> &str {
        if is_am {
            self.am_symbol()
        } else {
            self.pm_symbol()
        }
    }

    /// Rounds to the nearest multiple of `minutes` minutes since midnight, half-way values being rounded up.
    ///
    /// The result has no seconds and wraps to `00:00:00` when rounding up to the end of the day.
    /// A step of 0 minutes is handled as a step of 1 minute.
    ///
    /// ```
    /// use oxdaytime::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(12, 52, 30).round_to_nearest(15), TimeOfDay::new(13, 0, 0));
    /// assert_eq!(TimeOfDay::new(23, 59, 59).round_to_nearest(15), TimeOfDay::new(0, 0, 0));
    /// ```
    #[must_use]
    pub fn round_to_nearest(&self, minutes: u32) -> Self {
        let step = i64::from(minutes.max(1)) * 60;
        // step is even so half-way values are exact
        let rounded = (self.total_seconds() + step / 2) / step * step;
        self.derived(rounded / 3600 % 24, rounded / 60 % 60, 0)
    }

    /// The duration elapsed since `earlier`.
    ///
    /// If `earlier` is after `self` in the day, it is considered to be a time of the previous day:
    /// there are 22 hours from 10:00 to 08:00 the day after.
    ///
    /// ```
    /// use oxdaytime::{Duration, TimeOfDay};
    ///
    /// let now = TimeOfDay::new(8, 0, 0);
    /// assert_eq!(now.duration_since_earlier(&TimeOfDay::new(6, 30, 0)), Duration::new(1, 30, 0));
    /// assert_eq!(now.duration_since_earlier(&TimeOfDay::new(10, 0, 0)), Duration::new(22, 0, 0));
    /// ```
    #[must_use]
    pub fn duration_since_earlier(&self, earlier: &Self) -> Duration {
        wrapped_difference(self, earlier)
    }

    /// The duration until `later`.
    ///
    /// If `later` is before `self` in the day, it is considered to be a time of the next day:
    /// there are 22 hours from 10:00 until 08:00 the day after.
    ///
    /// ```
    /// use oxdaytime::{Duration, TimeOfDay};
    ///
    /// let now = TimeOfDay::new(10, 0, 0);
    /// assert_eq!(now.duration_till_later(&TimeOfDay::new(12, 0, 1)), Duration::new(2, 0, 1));
    /// assert_eq!(now.duration_till_later(&TimeOfDay::new(8, 0, 0)), Duration::new(22, 0, 0));
    /// ```
    #[must_use]
    pub fn duration_till_later(&self, later: &Self) -> Duration {
        wrapped_difference(later, self)
    }

    /// Adds `seconds` seconds.
    ///
    /// If `rolls_over` is `true` the result wraps around midnight.
    /// Otherwise it saturates at `23:59:59` (and at `00:00:00` if `seconds` is negative).
    ///
    /// ```
    /// use oxdaytime::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(23, 59, 59);
    /// assert_eq!(time.adding(1, true), TimeOfDay::new(0, 0, 0));
    /// assert_eq!(time.adding(1, false), TimeOfDay::new(23, 59, 59));
    /// ```
    #[must_use]
    pub fn adding(&self, seconds: i64, rolls_over: bool) -> Self {
        let total = self.total_seconds().saturating_add(seconds);
        self.derived_from_seconds(if rolls_over {
            total.rem_euclid(SECONDS_PER_DAY)
        } else {
            clamp(total, 0, LAST_SECOND_OF_DAY)
        })
    }

    /// Subtracts `seconds` seconds.
    ///
    /// If `rolls_over` is `true` the result wraps around midnight to the previous day.
    /// Otherwise it saturates at `00:00:00` (and at `23:59:59` if `seconds` is negative).
    ///
    /// ```
    /// use oxdaytime::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(1, 1, 1);
    /// assert_eq!(time.subtracting(3662, true), TimeOfDay::new(23, 59, 59));
    /// assert_eq!(time.subtracting(3662, false), TimeOfDay::new(0, 0, 0));
    /// ```
    #[must_use]
    pub fn subtracting(&self, seconds: i64, rolls_over: bool) -> Self {
        let total = self.total_seconds().saturating_sub(seconds);
        if rolls_over {
            let (hour, minute, second) = normalize(total / 3600, total / 60 % 60, total % 60, true);
            self.derived(hour, minute.into(), second.into())
        } else {
            self.derived_from_seconds(clamp(total, 0, LAST_SECOND_OF_DAY))
        }
    }

    /// [`adding`](Self::adding) the number of seconds of `duration`.
    #[inline]
    #[must_use]
    pub fn adding_duration(&self, duration: Duration, rolls_over: bool) -> Self {
        self.adding(duration.as_seconds(), rolls_over)
    }

    /// [`subtracting`](Self::subtracting) the number of seconds of `duration`.
    #[inline]
    #[must_use]
    pub fn subtracting_duration(&self, duration: Duration, rolls_over: bool) -> Self {
        self.subtracting(duration.as_seconds(), rolls_over)
    }

    /// This time of day on the given date.
    #[cfg(feature = "time")]
    #[must_use]
    pub fn on_date(&self, date: time::Date) -> time::PrimitiveDateTime {
        date.with_time(time::Time::MIDNIGHT + time::Duration::seconds(self.total_seconds()))
    }

    /// Formats the time of day on a 12-hour clock followed by its AM or PM symbol, like `01:23:04AM`.
    #[inline]
    #[must_use]
    pub fn display_12_hour(&self) -> TwelveHourTime<'_> {
        TwelveHourTime(self)
    }

    fn from_seconds_of_day(seconds: i64) -> Self {
        Self::new(seconds / 3600, seconds / 60 % 60, seconds % 60)
    }

    fn derived_from_seconds(&self, seconds: i64) -> Self {
        self.derived(seconds / 3600, seconds / 60 % 60, seconds % 60)
    }

    /// A new value with the same symbols
    fn derived(&self, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            am_symbol: self.am_symbol.clone(),
            pm_symbol: self.pm_symbol.clone(),
            ..Self::new(hour, minute, second)
        }
    }

    fn key(&self) -> (u8, u8, u8) {
        (self.hour(), self.minute(), self.second())
    }
}

fn clamped_field(value: i64, upper: u8) -> Clamped<u8> {
    let value = clamp(value, 0, i64::from(upper));
    Clamped::new(u8::try_from(value).unwrap_or(upper), 0..=upper)
}

fn seconds_of_day(source: &impl WallClock) -> i64 {
    let components = source.clock_components();
    components.hour.unwrap_or_default() * 3600
        + components.minute.unwrap_or_default() * 60
        + components.second.unwrap_or_default()
}

fn wrapped_difference(to: &TimeOfDay, from: &TimeOfDay) -> Duration {
    let (hours, minutes, seconds) = normalize(
        i64::from(to.hour()) - i64::from(from.hour()),
        i64::from(to.minute()) - i64::from(from.minute()),
        i64::from(to.second()) - i64::from(from.second()),
        true,
    );
    Duration::new(hours, minutes.into(), seconds.into())
}

impl Default for TimeOfDay {
    /// Midnight
    #[inline]
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl PartialEq for TimeOfDay {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TimeOfDay {}

impl PartialOrd for TimeOfDay {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for TimeOfDay {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_time_of_day(input)
    }
}

impl fmt::Display for TimeOfDay {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// A [`TimeOfDay`] formatted on a 12-hour clock.
///
/// Built by [`TimeOfDay::display_12_hour`].
#[derive(Debug, Clone, Copy)]
pub struct TwelveHourTime<'a>(&'a TimeOfDay);

impl fmt::Display for TwelveHourTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, is_am) = self.0.hour12();
        write!(
            f,
            "{hour:02}:{:02}:{:02}{}",
            self.0.minute(),
            self.0.second(),
            self.0.symbol(is_am)
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename = "TimeOfDay")]
        struct Value {
            hour: u8,
            minute: u8,
            second: u8,
        }
        Value {
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "TimeOfDay")]
        struct Value {
            hour: i64,
            minute: i64,
            second: i64,
        }
        let value = Value::deserialize(deserializer)?;
        Ok(Self::new(value.hour, value.minute, value.second))
    }
}
