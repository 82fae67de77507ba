#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod clamp;
mod duration;
mod normalizer;
mod parser;
mod time_of_day;
mod time_range;
mod wall_clock;

pub use self::clamp::{Clamped, clamp};
pub use self::duration::Duration;
pub use self::normalizer::normalize;
pub use self::parser::ParseTimeError;
pub use self::time_of_day::{TimeOfDay, TwelveHourTime};
pub use self::time_range::{TimeRange, TwelveHourRange};
pub use self::wall_clock::{ClockComponent, ClockComponents, InvalidWallClockComponents, WallClock};
