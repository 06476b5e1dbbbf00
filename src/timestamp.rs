//! Decoder for the RFC 5424 TIMESTAMP production, a restricted RFC 3339
//! `full-date "T" full-time`.
//!
//! The decoded value is a `DateTime<FixedOffset>`: the instant is held as
//! integer nanoseconds and the offset written in the source is kept, so
//! `-07:00` stays `-07:00`. Two values compare equal when they denote the
//! same instant.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use crate::error::{MatchResult, Mismatch};
use crate::ParseError;

// RFC 5424 allows at most 6 digits of TIME-SECFRAC
const MAX_FRACTION_DIGITS: usize = 6;

// get a character from the bytes as a decimal
macro_rules! get_digit {
    ($buf:ident, $index:expr, $production:expr) => {
        match $buf.get($index) {
            Some(c) if c.is_ascii_digit() => (c - b'0') as u32,
            _ => return Err(Mismatch::new($production, $index)),
        }
    };
}

#[inline]
fn two_digits(buf: &[u8], pos: usize, production: &'static str) -> MatchResult<u32> {
    Ok(get_digit!(buf, pos, production) * 10 + get_digit!(buf, pos + 1, production))
}

#[inline]
fn expect(buf: &[u8], pos: usize, ch: u8, production: &'static str) -> MatchResult<()> {
    match buf.get(pos) {
        Some(c) if *c == ch => Ok(()),
        _ => Err(Mismatch::new(production, pos)),
    }
}

/// Decode a TIMESTAMP starting at `offset`. On success `offset` is moved
/// past the last byte of the token.
pub(crate) fn timestamp(buf: &[u8], offset: &mut usize) -> MatchResult<DateTime<FixedOffset>> {
    let start = *offset;

    let (year, month, day) = full_date(buf, start)?;
    expect(buf, start + 10, b'T', "TIMESTAMP")?;
    let (hour, minute, second, nanos, pos) = partial_time(buf, start + 11)?;
    let (tz, pos) = time_offset(buf, pos)?;

    let datetime = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanos))
        .ok_or(Mismatch::new("FULL_DATE", start))?;
    let tz = FixedOffset::east_opt(tz).ok_or(Mismatch::new("TIME_OFFSET", pos))?;
    let ts = tz
        .from_local_datetime(&datetime)
        .single()
        .ok_or(Mismatch::new("TIMESTAMP", start))?;

    *offset = pos;
    Ok(ts)
}

/// Parse `YYYY-MM-DD` at `pos`, checking the day against the calendar.
fn full_date(buf: &[u8], pos: usize) -> MatchResult<(i32, u32, u32)> {
    let year = two_digits(buf, pos, "DATE_FULLYEAR")? * 100
        + two_digits(buf, pos + 2, "DATE_FULLYEAR")?;
    expect(buf, pos + 4, b'-', "FULL_DATE")?;
    let month = two_digits(buf, pos + 5, "DATE_MONTH")?;
    expect(buf, pos + 7, b'-', "FULL_DATE")?;
    let day = two_digits(buf, pos + 8, "DATE_MDAY")?;

    let year = year as i32;
    // calculate the maximum number of days in the month, accounting for leap years in the
    // gregorian calendar
    let max_days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => return Err(Mismatch::new("DATE_MONTH", pos + 5)),
    };

    if day < 1 || day > max_days {
        return Err(Mismatch::new("DATE_MDAY", pos + 8));
    }

    Ok((year, month, day))
}

/// Parse `HH:MM:SS(.fraction)?` at `pos`.
///
/// Returns hour, minute, second, nanoseconds and the position after the
/// last consumed byte.
fn partial_time(buf: &[u8], pos: usize) -> MatchResult<(u32, u32, u32, u32, usize)> {
    let hour = two_digits(buf, pos, "TIME_HOUR")?;
    if hour > 23 {
        return Err(Mismatch::new("TIME_HOUR", pos));
    }
    expect(buf, pos + 2, b':', "PARTIAL_TIME")?;

    let minute = two_digits(buf, pos + 3, "TIME_MINUTE")?;
    if minute > 59 {
        return Err(Mismatch::new("TIME_MINUTE", pos + 3));
    }
    expect(buf, pos + 5, b':', "PARTIAL_TIME")?;

    let second = two_digits(buf, pos + 6, "TIME_SECOND")?;
    if second > 59 {
        return Err(Mismatch::new("TIME_SECOND", pos + 6));
    }

    let mut pos = pos + 8;
    if buf.get(pos) != Some(&b'.') {
        return Ok((hour, minute, second, 0, pos));
    }
    pos += 1;

    let digits = buf[pos..]
        .iter()
        .take_while(|ch| ch.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(Mismatch::new("TIME_SECFRAC", pos));
    }
    if digits > MAX_FRACTION_DIGITS {
        return Err(Mismatch::new("TIME_SECFRAC", pos + MAX_FRACTION_DIGITS));
    }

    let fraction = buf[pos..pos + digits]
        .iter()
        .fold(0u32, |acc, ch| acc * 10 + (ch - b'0') as u32);
    let nanos = fraction * 10u32.pow(9 - digits as u32);

    Ok((hour, minute, second, nanos, pos + digits))
}

/// Parse `Z` or `(+|-)HH:MM` at `pos`, returning the offset in seconds east
/// of UTC and the position after it.
fn time_offset(buf: &[u8], pos: usize) -> MatchResult<(i32, usize)> {
    let sign = match buf.get(pos) {
        Some(b'Z') => return Ok((0, pos + 1)),
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(Mismatch::new("TIME_OFFSET", pos)),
    };

    let hours = two_digits(buf, pos + 1, "TIME_NUMOFFSET")?;
    if hours > 23 {
        return Err(Mismatch::new("TIME_NUMOFFSET", pos + 1));
    }
    expect(buf, pos + 3, b':', "TIME_NUMOFFSET")?;
    let minutes = two_digits(buf, pos + 4, "TIME_NUMOFFSET")?;
    if minutes > 59 {
        return Err(Mismatch::new("TIME_NUMOFFSET", pos + 4));
    }

    Ok((sign * (hours * 3600 + minutes * 60) as i32, pos + 6))
}

/// Decode a standalone TIMESTAMP token such as `2003-08-24T05:14:15.000003-07:00`.
///
/// The whole input must be consumed.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let buf = text.as_bytes();
    let mut offset = 0;

    let result = timestamp(buf, &mut offset).and_then(|ts| {
        if offset == buf.len() {
            Ok(ts)
        } else {
            Err(Mismatch::new("TIMESTAMP", offset))
        }
    });

    result.map_err(|mismatch| {
        ParseError::at(text, Mismatch::new("TIMESTAMP", 0))
            .caused_by(ParseError::at(text, mismatch))
    })
}
