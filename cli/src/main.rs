use crate::cli::{Args, Command, LogFormat};
use anyhow::{Context, bail};
use clap::Parser;
use oxdaytime::{Duration, TimeOfDay, TimeRange, normalize};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write, stdout};
use std::str::FromStr;
use std::time::SystemTime;
use time::OffsetDateTime;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_tracing(args.log_format);
    let output = Output {
        am_symbol: args.am_symbol,
        pm_symbol: args.pm_symbol,
        twelve_hour: args.twelve_hour,
        json: args.json,
    };
    run(args.command, &output).inspect_err(|e| warn!(error = %e, "command failed"))
}

fn initialize_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

fn run(command: Command, output: &Output) -> anyhow::Result<()> {
    match command {
        Command::Normalize {
            hours,
            minutes,
            seconds,
            wrap,
        } => {
            let (hours, minutes, seconds) = normalize(hours, minutes, seconds, wrap);
            debug!(hours, minutes, seconds, wrap, "normalized");
            output.write_triple(hours, minutes, seconds)
        }
        Command::Time { time } => {
            let time = parse_time_of_day(&time)?;
            debug!(%time, "parsed time of day");
            output.write_time(&time)
        }
        Command::Add {
            time,
            seconds,
            no_roll_over,
        } => {
            let time = parse_time_of_day(&time)?;
            let result = time.adding(seconds, !no_roll_over);
            debug!(%time, seconds, %result, "added seconds");
            output.write_time(&result)
        }
        Command::Sub {
            time,
            seconds,
            no_roll_over,
        } => {
            let time = parse_time_of_day(&time)?;
            let result = time.subtracting(seconds, !no_roll_over);
            debug!(%time, seconds, %result, "subtracted seconds");
            output.write_time(&result)
        }
        Command::Round { time, minutes } => {
            let time = parse_time_of_day(&time)?;
            let result = time.round_to_nearest(minutes);
            debug!(%time, minutes, %result, "rounded");
            output.write_time(&result)
        }
        Command::Since { time, earlier } => {
            let duration = parse_time_of_day(&time)?
                .duration_since_earlier(&parse_time_of_day(&earlier)?);
            debug!(%duration, "computed the elapsed time");
            output.write_duration(duration)
        }
        Command::Till { time, later } => {
            let duration =
                parse_time_of_day(&time)?.duration_till_later(&parse_time_of_day(&later)?);
            debug!(%duration, "computed the remaining time");
            output.write_duration(duration)
        }
        Command::DurationAdd { left, right } => {
            let duration = parse_duration(&left)? + parse_duration(&right)?;
            debug!(%duration, "added durations");
            output.write_duration(duration)
        }
        Command::DurationSub { left, right } => {
            let duration = parse_duration(&left)? - parse_duration(&right)?;
            debug!(%duration, "subtracted durations");
            output.write_duration(duration)
        }
        Command::Range {
            start,
            end,
            contains,
            overlaps,
            split,
        } => {
            let range = TimeRange::new(parse_time_of_day(&start)?, parse_time_of_day(&end)?);
            debug!(%range, "built range");
            if let Some(time) = contains {
                let contained = range.contains(&parse_time_of_day(&time)?);
                debug!(%time, contained, "checked containment");
                output.write_boolean(contained)
            } else if let Some(other) = overlaps {
                let other = TimeRange::from_str(&other)
                    .with_context(|| format!("Invalid time range '{other}'"))?;
                let overlapping = range.overlaps(&other);
                debug!(%other, overlapping, "checked overlap");
                output.write_boolean(overlapping)
            } else if let Some(minutes) = split {
                if minutes == 0 {
                    bail!("The split step must be at least one minute");
                }
                let parts = range.split(minutes);
                debug!(minutes, count = parts.len(), "split range");
                output.write_ranges(&parts)
            } else {
                output.write_range(&range)
            }
        }
        Command::Now {
            discard_seconds,
            local,
        } => {
            let time = if local {
                TimeOfDay::from_wall_clock(
                    &OffsetDateTime::now_local()
                        .context("The local timezone offset is not available")?,
                    discard_seconds,
                )?
            } else {
                TimeOfDay::from_wall_clock(&SystemTime::now(), discard_seconds)?
            };
            debug!(%time, local, "read the system clock");
            output.write_time(&time)
        }
    }
}

fn parse_time_of_day(value: &str) -> anyhow::Result<TimeOfDay> {
    value
        .parse()
        .with_context(|| format!("Invalid time of day '{value}'"))
}

fn parse_duration(value: &str) -> anyhow::Result<Duration> {
    value
        .parse()
        .with_context(|| format!("Invalid duration '{value}'"))
}

/// Writes the command results to the standard output
struct Output {
    am_symbol: String,
    pm_symbol: String,
    twelve_hour: bool,
    json: bool,
}

impl Output {
    fn write_triple(&self, hours: i64, minutes: u8, seconds: u8) -> anyhow::Result<()> {
        #[derive(Serialize)]
        struct Triple {
            hours: i64,
            minutes: u8,
            seconds: u8,
        }

        if self.json {
            return write_json(&Triple {
                hours,
                minutes,
                seconds,
            });
        }
        write_line(format_args!("{hours:02}:{minutes:02}:{seconds:02}"))
    }

    fn write_time(&self, time: &TimeOfDay) -> anyhow::Result<()> {
        if self.json {
            return write_json(time);
        }
        let time = self.with_symbols(time);
        if self.twelve_hour {
            write_line(format_args!("{}", time.display_12_hour()))
        } else {
            write_line(format_args!("{time}"))
        }
    }

    fn write_duration(&self, duration: Duration) -> anyhow::Result<()> {
        if self.json {
            return write_json(&duration);
        }
        write_line(format_args!("{duration}"))
    }

    fn write_boolean(&self, value: bool) -> anyhow::Result<()> {
        if self.json {
            return write_json(&value);
        }
        write_line(format_args!("{value}"))
    }

    fn write_range(&self, range: &TimeRange) -> anyhow::Result<()> {
        #[derive(Serialize)]
        struct Summary<'a> {
            #[serde(flatten)]
            range: &'a TimeRange,
            duration: Duration,
            crosses_midnight: bool,
        }

        if self.json {
            return write_json(&Summary {
                range,
                duration: range.duration(),
                crosses_midnight: range.crosses_midnight(),
            });
        }
        let localized = self.range_with_symbols(range);
        if self.twelve_hour {
            write_line(format_args!(
                "{} ({})",
                localized.display_12_hour(),
                range.duration()
            ))
        } else {
            write_line(format_args!("{localized} ({})", range.duration()))
        }
    }

    fn write_ranges(&self, ranges: &[TimeRange]) -> anyhow::Result<()> {
        if self.json {
            return write_json(&ranges);
        }
        for range in ranges {
            let range = self.range_with_symbols(range);
            if self.twelve_hour {
                write_line(format_args!("{}", range.display_12_hour()))?;
            } else {
                write_line(format_args!("{range}"))?;
            }
        }
        Ok(())
    }

    fn with_symbols(&self, time: &TimeOfDay) -> TimeOfDay {
        let mut time = time.clone();
        time.set_am_symbol(self.am_symbol.clone());
        time.set_pm_symbol(self.pm_symbol.clone());
        time
    }

    fn range_with_symbols(&self, range: &TimeRange) -> TimeRange {
        TimeRange::new(self.with_symbols(range.start()), self.with_symbols(range.end()))
    }
}

fn write_json(value: &impl Serialize) -> anyhow::Result<()> {
    let mut stdout = stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn write_line(line: fmt::Arguments<'_>) -> anyhow::Result<()> {
    writeln!(stdout().lock(), "{line}")?;
    Ok(())
}
