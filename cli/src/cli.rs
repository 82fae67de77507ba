use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(about, version, name = "oxdaytime")]
/// Oxdaytime command line toolkit for times of day, durations and time ranges on a 24-hour clock
pub struct Args {
    /// Symbol written after a 12-hour clock time before noon
    #[arg(long, global = true, default_value = "AM", env = "OXDAYTIME_AM_SYMBOL")]
    pub am_symbol: String,
    /// Symbol written after a 12-hour clock time from noon
    #[arg(long, global = true, default_value = "PM", env = "OXDAYTIME_PM_SYMBOL")]
    pub pm_symbol: String,
    /// Writes times of day on a 12-hour clock
    #[arg(long, global = true)]
    pub twelve_hour: bool,
    /// Writes the results as JSON
    #[arg(long, global = true, conflicts_with = "twelve_hour")]
    pub json: bool,
    /// Format of the log records written to the standard error
    ///
    /// The verbosity is set with the `RUST_LOG` environment variable, by default only warnings are written.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Carries the overflows of an hours, minutes and seconds triple
    ///
    /// The minutes and seconds of the result are between 0 and 59.
    Normalize {
        #[arg(allow_negative_numbers = true)]
        hours: i64,
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
        /// Wraps the hours in a single day
        #[arg(long)]
        wrap: bool,
    },
    /// Reads a time of day written HH:MM or HH:MM:SS
    Time {
        /// The time of day
        time: String,
    },
    /// Moves a time of day forward by a number of seconds
    Add {
        /// The time of day, HH:MM or HH:MM:SS
        time: String,
        /// The number of seconds to add
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
        /// Stops at 23:59:59 and 00:00:00 instead of wrapping around midnight
        #[arg(long)]
        no_roll_over: bool,
    },
    /// Moves a time of day backward by a number of seconds
    Sub {
        /// The time of day, HH:MM or HH:MM:SS
        time: String,
        /// The number of seconds to subtract
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
        /// Stops at 23:59:59 and 00:00:00 instead of wrapping around midnight
        #[arg(long)]
        no_roll_over: bool,
    },
    /// Rounds a time of day to the nearest multiple of a number of minutes
    Round {
        /// The time of day, HH:MM or HH:MM:SS
        time: String,
        /// The rounding step in minutes
        ///
        /// 0 is handled as a 1 minute step.
        minutes: u32,
    },
    /// Time elapsed since an earlier time of day, going back across midnight if needed
    Since {
        /// The time of day, HH:MM or HH:MM:SS
        time: String,
        /// The earlier time of day
        earlier: String,
    },
    /// Time left until a later time of day, going forward across midnight if needed
    Till {
        /// The time of day, HH:MM or HH:MM:SS
        time: String,
        /// The later time of day
        later: String,
    },
    /// Adds two durations written [-]H:MM:SS
    DurationAdd {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Subtracts a duration written [-]H:MM:SS from another one
    DurationSub {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Describes the range of times of day going forward from a start to an end
    ///
    /// The start is included and the end excluded. A range whose end is before its start crosses midnight.
    Range {
        /// The first time of day of the range
        start: String,
        /// The time of day ending the range
        end: String,
        /// Writes if the range contains this time of day
        #[arg(long, conflicts_with_all = ["overlaps", "split"])]
        contains: Option<String>,
        /// Writes if the range overlaps this other range, written "HH:MM:SS - HH:MM:SS"
        #[arg(long, conflicts_with = "split")]
        overlaps: Option<String>,
        /// Splits the range in consecutive ranges of this number of minutes
        #[arg(long)]
        split: Option<u32>,
    },
    /// Reads the current time of day from the system clock
    Now {
        /// Sets the seconds to 0
        #[arg(long)]
        discard_seconds: bool,
        /// Uses the local timezone instead of UTC
        #[arg(long)]
        local: bool,
    },
}

/// Format of the log records
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// One human readable line per record
    Text,
    /// One JSON object per record
    Json,
}
