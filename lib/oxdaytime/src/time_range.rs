use crate::duration::Duration;
use crate::parser::{ParseTimeError, parse_time_range};
use crate::time_of_day::{TimeOfDay, TwelveHourTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A half-open range of times of day from `start` (included) to `end` (excluded).
///
/// There is no constraint on the order of the bounds:
/// if `start` is after `end` the range crosses midnight and `end` is a time of the next day.
/// A range with equal bounds is empty: its duration is zero but, as it goes through midnight, it contains every time of day.
///
/// ```
/// use oxdaytime::{Duration, TimeOfDay, TimeRange};
///
/// let night = TimeRange::new(TimeOfDay::new(21, 0, 0), TimeOfDay::new(6, 30, 0));
/// assert!(night.contains(&TimeOfDay::new(23, 59, 0)));
/// assert!(night.contains(&TimeOfDay::new(0, 1, 0)));
/// assert!(!night.contains(&TimeOfDay::new(7, 0, 0)));
/// assert_eq!(night.duration(), Duration::new(9, 30, 0));
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    #[inline]
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &TimeOfDay {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> &TimeOfDay {
        &self.end
    }

    /// The duration from `start` to `end`, between 0 and 23:59:59.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.start.duration_till_later(&self.end)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// If `start` is after `end`, i.e. the range ends on the next day.
    #[inline]
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Checks if `time` is in the range.
    ///
    /// The range is half-open: it contains its start but not its end.
    /// A range whose end is not after its start goes through midnight,
    /// so an empty range contains every time of day.
    #[must_use]
    pub fn contains(&self, time: &TimeOfDay) -> bool {
        if self.start < self.end {
            *time >= self.start && *time < self.end
        } else {
            *time >= self.start || *time < self.end
        }
    }

    /// Checks if one of the bounds of a range is contained in the other range.
    ///
    /// Ranges sharing only a bound are considered as overlapping:
    /// `09:00 - 12:00` overlaps `12:00 - 15:00` because the second one contains `12:00`.
    ///
    /// ```
    /// use oxdaytime::{TimeOfDay, TimeRange};
    ///
    /// let day = TimeRange::new(TimeOfDay::new(9, 0, 0), TimeOfDay::new(17, 30, 0));
    /// let lunch = TimeRange::new(TimeOfDay::new(12, 0, 0), TimeOfDay::new(13, 0, 0));
    /// let breakfast = TimeRange::new(TimeOfDay::new(6, 0, 0), TimeOfDay::new(7, 0, 0));
    /// assert!(day.overlaps(&lunch));
    /// assert!(!day.overlaps(&breakfast));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.contains(&other.start)
            || self.contains(&other.end)
            || other.contains(&self.start)
            || other.contains(&self.end)
    }

    /// Splits the range into consecutive ranges of `minutes` minutes.
    ///
    /// The last range ends at `end` and hence might be shorter.
    /// Ranges crossing midnight are split across it.
    /// An empty range or a step of 0 minutes returns the range itself.
    ///
    /// ```
    /// use oxdaytime::{TimeOfDay, TimeRange};
    ///
    /// let range = TimeRange::new(TimeOfDay::new(9, 0, 0), TimeOfDay::new(10, 40, 0));
    /// let parts: Vec<_> = range.split(30).iter().map(ToString::to_string).collect();
    /// assert_eq!(
    ///     parts,
    ///     [
    ///         "09:00:00 - 09:30:00",
    ///         "09:30:00 - 10:00:00",
    ///         "10:00:00 - 10:30:00",
    ///         "10:30:00 - 10:40:00"
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn split(&self, minutes: u32) -> Vec<Self> {
        let step = i64::from(minutes) * 60;
        let length = self.duration().as_seconds();
        if step == 0 || length == 0 {
            return vec![self.clone()];
        }
        let mut ranges = Vec::new();
        let mut offset = 0;
        while offset + step < length {
            ranges.push(Self::new(
                self.start.adding(offset, true),
                self.start.adding(offset + step, true),
            ));
            offset += step;
        }
        ranges.push(Self::new(self.start.adding(offset, true), self.end.clone()));
        ranges
    }

    /// Formats the range bounds on a 12-hour clock, like `01:23:04AM - 11:00:40PM`.
    #[inline]
    #[must_use]
    pub fn display_12_hour(&self) -> TwelveHourRange<'_> {
        TwelveHourRange {
            start: self.start.display_12_hour(),
            end: self.end.display_12_hour(),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ParseTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_time_range(input)
    }
}

impl fmt::Display for TimeRange {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// A [`TimeRange`] formatted on a 12-hour clock.
///
/// Built by [`TimeRange::display_12_hour`].
#[derive(Debug, Clone, Copy)]
pub struct TwelveHourRange<'a> {
    start: TwelveHourTime<'a>,
    end: TwelveHourTime<'a>,
}

impl fmt::Display for TwelveHourRange<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
