use std::fmt;
use std::time::SystemTime;

const SECONDS_PER_DAY: u64 = 86_400;

/// A source of wall clock readings, like a calendar date with a time.
///
/// Only the hour, minute and second of the reading are used to build a [`TimeOfDay`](crate::TimeOfDay).
/// Sources that are not able to provide one of them leave it unset
/// and [`TimeOfDay::from_wall_clock`](crate::TimeOfDay::from_wall_clock) fails with [`InvalidWallClockComponents`].
pub trait WallClock {
    fn clock_components(&self) -> ClockComponents;
}

/// The hour, minute and second read from a [`WallClock`].
///
/// Values are not validated: they are clamped when building a [`TimeOfDay`](crate::TimeOfDay).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
pub struct ClockComponents {
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
}

impl ClockComponents {
    #[inline]
    pub fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    fn from_seconds_of_day(seconds: u64) -> Self {
        Self {
            hour: i64::try_from(seconds / 3600).ok(),
            minute: i64::try_from(seconds / 60 % 60).ok(),
            second: i64::try_from(seconds % 60).ok(),
        }
    }

    /// Returns the `(hour, minute, second)` triple if all components are set.
    pub fn complete(self) -> Result<(i64, i64, i64), InvalidWallClockComponents> {
        let missing = |component| InvalidWallClockComponents { component };
        Ok((
            self.hour.ok_or(missing(ClockComponent::Hour))?,
            self.minute.ok_or(missing(ClockComponent::Minute))?,
            self.second.ok_or(missing(ClockComponent::Second))?,
        ))
    }
}

impl WallClock for ClockComponents {
    #[inline]
    fn clock_components(&self) -> ClockComponents {
        *self
    }
}

/// Reads the UTC time of day.
impl WallClock for SystemTime {
    fn clock_components(&self) -> ClockComponents {
        let seconds_of_day = match self.duration_since(Self::UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_secs() % SECONDS_PER_DAY,
            Err(e) => {
                // The second containing the instant starts before it
                let before_epoch = e.duration();
                let seconds = before_epoch.as_secs() + u64::from(before_epoch.subsec_nanos() > 0);
                (SECONDS_PER_DAY - seconds % SECONDS_PER_DAY) % SECONDS_PER_DAY
            }
        };
        ClockComponents::from_seconds_of_day(seconds_of_day)
    }
}

#[cfg(feature = "time")]
impl WallClock for time::Time {
    #[inline]
    fn clock_components(&self) -> ClockComponents {
        ClockComponents::new(
            self.hour().into(),
            self.minute().into(),
            self.second().into(),
        )
    }
}

#[cfg(feature = "time")]
impl WallClock for time::PrimitiveDateTime {
    #[inline]
    fn clock_components(&self) -> ClockComponents {
        self.time().clock_components()
    }
}

/// Reads the time of day in the offset of the value.
#[cfg(feature = "time")]
impl WallClock for time::OffsetDateTime {
    #[inline]
    fn clock_components(&self) -> ClockComponents {
        self.time().clock_components()
    }
}

/// One of the components of a wall clock reading.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ClockComponent {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for ClockComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        })
    }
}

/// The [`WallClock`] did not provide all of the hour, minute and second components.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("unable to build a time of day: the wall clock did not provide the {component}")]
pub struct InvalidWallClockComponents {
    component: ClockComponent,
}

impl InvalidWallClockComponents {
    /// The first missing component.
    #[inline]
    pub fn component(&self) -> ClockComponent {
        self.component
    }
}
