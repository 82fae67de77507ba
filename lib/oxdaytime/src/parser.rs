use crate::duration::Duration;
use crate::time_of_day::TimeOfDay;
use crate::time_range::TimeRange;
use std::str::FromStr;

/// An error raised while parsing a [`TimeOfDay`], a [`Duration`] or a [`TimeRange`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ParseTimeError(#[from] ParseTimeErrorKind);

#[derive(Debug, Clone, thiserror::Error)]
enum ParseTimeErrorKind {
    #[error("{field} must be between 00 and {max}, found {value}")]
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
    #[error("{0}")]
    Message(&'static str),
}

impl ParseTimeError {
    const fn msg(message: &'static str) -> Self {
        Self(ParseTimeErrorKind::Message(message))
    }
}

// time ::= hour ':' minute (':' second)?
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay, ParseTimeError> {
    ensure_complete(input, time_of_day_rep)
}

// duration ::= '-'? digit+ ':' minute ':' second
pub fn parse_duration(input: &str) -> Result<Duration, ParseTimeError> {
    ensure_complete(input, duration_rep)
}

// range ::= time S? '-' S? time
pub fn parse_time_range(input: &str) -> Result<TimeRange, ParseTimeError> {
    ensure_complete(input, |input| {
        let (start, input) = time_of_day_rep(input)?;
        let input = expect_char(
            input.trim_start(),
            '-',
            "The range start and end must be separated by '-'",
        )?;
        let (end, input) = time_of_day_rep(input.trim_start())?;
        Ok((TimeRange::new(start, end), input))
    })
}

fn time_of_day_rep(input: &str) -> Result<(TimeOfDay, &str), ParseTimeError> {
    let (hour, input) = two_digits_frag(input, "Hours", 23)?;
    let input = expect_char(input, ':', "The hours and minutes must be separated by ':'")?;
    let (minute, input) = two_digits_frag(input, "Minutes", 59)?;
    let (second, input) = if let Some(input) = input.strip_prefix(':') {
        two_digits_frag(input, "Seconds", 59)?
    } else {
        (0, input)
    };
    Ok((
        TimeOfDay::new(hour.into(), minute.into(), second.into()),
        input,
    ))
}

fn duration_rep(input: &str) -> Result<(Duration, &str), ParseTimeError> {
    let (negative, input) = if let Some(input) = input.strip_prefix('-') {
        (true, input)
    } else {
        (false, input)
    };
    let (hours_str, input) = integer_prefix(input);
    if hours_str.is_empty() {
        return Err(ParseTimeError::msg("The duration must start with its hours"));
    }
    let hours = i64::from_str(hours_str)
        .map_err(|_| ParseTimeError::msg("The duration hours are too large"))?;
    let input = expect_char(input, ':', "The hours and minutes must be separated by ':'")?;
    let (minutes, input) = two_digits_frag(input, "Minutes", 59)?;
    let input = expect_char(
        input,
        ':',
        "The minutes and seconds must be separated by ':'",
    )?;
    let (seconds, input) = two_digits_frag(input, "Seconds", 59)?;
    // The sign only applies to the hours, like in the display form
    Ok((
        Duration::new(
            if negative { -hours } else { hours },
            minutes.into(),
            seconds.into(),
        ),
        input,
    ))
}

fn two_digits_frag<'a>(
    input: &'a str,
    field: &'static str,
    max: u8,
) -> Result<(u8, &'a str), ParseTimeError> {
    let (number_str, input) = integer_prefix(input);
    if number_str.len() != 2 {
        return Err(ParseTimeError::msg(
            "Hours, minutes and seconds must be encoded with two digits",
        ));
    }
    let value = u8::from_str(number_str)
        .map_err(|_| ParseTimeError::msg("Invalid two digits number"))?;
    if value > max {
        return Err(ParseTimeErrorKind::OutOfRange { field, value, max }.into());
    }
    Ok((value, input))
}

fn ensure_complete<T>(
    input: &str,
    parse: impl FnOnce(&str) -> Result<(T, &str), ParseTimeError>,
) -> Result<T, ParseTimeError> {
    let (result, left) = parse(input)?;
    if !left.is_empty() {
        return Err(ParseTimeError::msg("Unrecognized value suffix"));
    }
    Ok(result)
}

fn expect_char<'a>(
    input: &'a str,
    constant: char,
    error_message: &'static str,
) -> Result<&'a str, ParseTimeError> {
    if let Some(left) = input.strip_prefix(constant) {
        Ok(left)
    } else {
        Err(ParseTimeError::msg(error_message))
    }
}

fn integer_prefix(input: &str) -> (&str, &str) {
    let mut end = input.len();
    for (i, c) in input.char_indices() {
        if !c.is_ascii_digit() {
            end = i;
            break;
        }
    }
    input.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day() {
        assert_eq!(
            parse_time_of_day("09:30").unwrap(),
            TimeOfDay::new(9, 30, 0)
        );
        assert_eq!(
            parse_time_of_day("23:59:59").unwrap(),
            TimeOfDay::new(23, 59, 59)
        );
        assert_eq!(
            parse_time_of_day("00:00:00").unwrap(),
            TimeOfDay::new(0, 0, 0)
        );
    }

    #[test]
    fn time_of_day_errors() {
        assert_eq!(
            parse_time_of_day("24:00").unwrap_err().to_string(),
            "Hours must be between 00 and 23, found 24"
        );
        assert_eq!(
            parse_time_of_day("12:60").unwrap_err().to_string(),
            "Minutes must be between 00 and 59, found 60"
        );
        assert_eq!(
            parse_time_of_day("9:30").unwrap_err().to_string(),
            "Hours, minutes and seconds must be encoded with two digits"
        );
        assert_eq!(
            parse_time_of_day("09-30").unwrap_err().to_string(),
            "The hours and minutes must be separated by ':'"
        );
        assert_eq!(
            parse_time_of_day("09:30:00Z").unwrap_err().to_string(),
            "Unrecognized value suffix"
        );
        parse_time_of_day("").unwrap_err();
        parse_time_of_day("09:30:").unwrap_err();
    }

    #[test]
    fn time_range() {
        assert_eq!(
            parse_time_range("09:00 - 17:30").unwrap(),
            TimeRange::new(TimeOfDay::new(9, 0, 0), TimeOfDay::new(17, 30, 0))
        );
        assert_eq!(
            parse_time_range("21:00:00-06:30:00").unwrap(),
            TimeRange::new(TimeOfDay::new(21, 0, 0), TimeOfDay::new(6, 30, 0))
        );
        parse_time_range("09:00").unwrap_err();
        parse_time_range("09:00 -").unwrap_err();
        parse_time_range("09:00 + 10:00").unwrap_err();
    }

    #[test]
    fn duration() {
        assert_eq!(parse_duration("-1:59:59").unwrap(), Duration::new(-1, 59, 59));
        assert_eq!(
            parse_duration("1000:00:01").unwrap(),
            Duration::new(1000, 0, 1)
        );
        parse_duration("10:00:60").unwrap_err();
        parse_duration("--1:00:00").unwrap_err();
    }
}
