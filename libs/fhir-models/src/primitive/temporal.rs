//! FHIR date and time primitives
//!
//! FHIR temporal values carry their own precision: `2015`, `2015-02` and
//! `2015-02-07` are three different `date` values, and `13:28:17.239` keeps
//! its three fractional digits. These types parse into `chrono` values while
//! remembering enough of the lexical form to print it back unchanged.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Timelike, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} `{input}`")]
pub struct ParseTemporalError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseTemporalError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

/// A FHIR `date`: year, year-month or full calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Date {
    Year(i32),
    YearMonth(i32, u32),
    Full(NaiveDate),
}

impl Date {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date::Full)
    }

    pub fn year(&self) -> i32 {
        match self {
            Date::Year(y) | Date::YearMonth(y, _) => *y,
            Date::Full(d) => d.year(),
        }
    }

    /// The calendar date when the value is day precise.
    pub fn as_naive(&self) -> Option<NaiveDate> {
        match self {
            Date::Full(d) => Some(*d),
            _ => None,
        }
    }
}

impl FromStr for Date {
    type Err = ParseTemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s).ok_or_else(|| ParseTemporalError::new("date", s))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Date::Year(y) => write!(f, "{:04}", y),
            Date::YearMonth(y, m) => write!(f, "{:04}-{:02}", y, m),
            Date::Full(d) => write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day()),
        }
    }
}

/// A FHIR `time` (`hh:mm:ss` with optional fraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    time: NaiveTime,
    fraction_digits: u8,
}

impl Time {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(|time| Self {
            time,
            fraction_digits: 0,
        })
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.time
    }

    /// Number of fractional second digits written in the source.
    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }
}

impl FromStr for Time {
    type Err = ParseTemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s).ok_or_else(|| ParseTemporalError::new("time", s))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // chrono keeps a leap second as second 59 with nanos past one second
        let (second, nanos) = match self.time.nanosecond() {
            n if n >= NANOS_PER_SECOND => (60, n - NANOS_PER_SECOND),
            n => (self.time.second(), n),
        };
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.time.hour(),
            self.time.minute(),
            second
        )?;
        if self.fraction_digits > 0 {
            let nanos = format!("{:09}", nanos);
            write!(f, ".{}", &nanos[..self.fraction_digits as usize])?;
        }
        Ok(())
    }
}

/// Timezone designator. `Z`, `+00:00` and `-00:00` are kept apart so they
/// print back as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timezone {
    Utc,
    /// `-00:00`: UTC, with the local offset unknown
    NegativeZero,
    Offset(FixedOffset),
}

impl Timezone {
    pub fn offset(&self) -> FixedOffset {
        match self {
            Timezone::Utc | Timezone::NegativeZero => Utc.fix(),
            Timezone::Offset(o) => *o,
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timezone::Utc => f.write_str("Z"),
            Timezone::NegativeZero => f.write_str("-00:00"),
            Timezone::Offset(o) => {
                let secs = o.local_minus_utc();
                let sign = if secs < 0 { '-' } else { '+' };
                let secs = secs.abs();
                write!(f, "{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
            }
        }
    }
}

/// A full date with time of day and (usually) a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: NaiveDate,
    pub time: Time,
    pub timezone: Option<Timezone>,
}

impl Timestamp {
    /// Convert to a zoned chrono value; `None` when no timezone was given.
    pub fn to_chrono(&self) -> Option<chrono::DateTime<FixedOffset>> {
        let tz = self.timezone?.offset();
        self.date
            .and_time(self.time.as_naive())
            .and_local_timezone(tz)
            .single()
    }
}

impl FromStr for Timestamp {
    type Err = ParseTemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s).ok_or_else(|| ParseTemporalError::new("dateTime", s))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", Date::Full(self.date), self.time)?;
        if let Some(tz) = &self.timezone {
            write!(f, "{}", tz)?;
        }
        Ok(())
    }
}

/// A FHIR `dateTime`: a partial date or a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTime {
    Date(Date),
    Timestamp(Timestamp),
}

impl DateTime {
    pub fn date(&self) -> Date {
        match self {
            DateTime::Date(d) => *d,
            DateTime::Timestamp(ts) => Date::Full(ts.date),
        }
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime::Date(date)
    }
}

impl FromStr for DateTime {
    type Err = ParseTemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('T') {
            parse_timestamp(s).map(DateTime::Timestamp)
        } else {
            parse_date(s).map(DateTime::Date)
        }
        .ok_or_else(|| ParseTemporalError::new("dateTime", s))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTime::Date(d) => d.fmt(f),
            DateTime::Timestamp(ts) => ts.fmt(f),
        }
    }
}

/// A FHIR `instant`: a timestamp that always has seconds and a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant(Timestamp);

impl Instant {
    pub fn timestamp(&self) -> &Timestamp {
        &self.0
    }

    pub fn to_chrono(&self) -> Option<chrono::DateTime<FixedOffset>> {
        self.0.to_chrono()
    }
}

impl FromStr for Instant {
    type Err = ParseTemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_timestamp(s) {
            Some(ts) if ts.timezone.is_some() => Ok(Instant(ts)),
            _ => Err(ParseTemporalError::new("instant", s)),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const NANOS_PER_SECOND: u32 = 1_000_000_000;

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 {
        return None;
    }
    let year = digits(s)?;
    (1..=9999).contains(&year).then_some(year as i32)
}

fn parse_month(s: &str) -> Option<u32> {
    if s.len() != 2 {
        return None;
    }
    digits(s).filter(|m| (1..=12).contains(m))
}

fn parse_date(s: &str) -> Option<Date> {
    if !s.is_ascii() {
        return None;
    }
    let bytes = s.as_bytes();
    match bytes.len() {
        4 => parse_year(s).map(Date::Year),
        7 if bytes[4] == b'-' => Some(Date::YearMonth(
            parse_year(&s[..4])?,
            parse_month(&s[5..7])?,
        )),
        10 if bytes[4] == b'-' && bytes[7] == b'-' => {
            let day = &s[8..10];
            if day.len() != 2 {
                return None;
            }
            NaiveDate::from_ymd_opt(parse_year(&s[..4])?, parse_month(&s[5..7])?, digits(day)?)
                .map(Date::Full)
        }
        _ => None,
    }
}

fn parse_time(s: &str) -> Option<Time> {
    if !s.is_ascii() || s.len() < 8 {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let (hour, minute, second) = (digits(&s[0..2])?, digits(&s[3..5])?, digits(&s[6..8])?);
    if hour > 23 || minute > 59 || second > 60 {
        return None;
    }
    let (nanos, fraction_digits) = match &s[8..] {
        "" => (0, 0),
        rest => {
            let fraction = rest.strip_prefix('.')?;
            if fraction.is_empty() || fraction.len() > 9 {
                return None;
            }
            let padded = format!("{:0<9}", fraction);
            (digits(&padded)?, fraction.len() as u8)
        }
    };
    let (second, nanos) = if second == 60 {
        (59, nanos + NANOS_PER_SECOND)
    } else {
        (second, nanos)
    };
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).map(|time| Time {
        time,
        fraction_digits,
    })
}

fn parse_timezone(s: &str) -> Option<Timezone> {
    if s == "Z" {
        return Some(Timezone::Utc);
    }
    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = (digits(&s[1..3])?, digits(&s[4..6])?);
    if hours > 14 || minutes > 59 || (hours == 14 && minutes != 0) {
        return None;
    }
    if sign < 0 && hours == 0 && minutes == 0 {
        return Some(Timezone::NegativeZero);
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32).map(Timezone::Offset)
}

fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if !s.is_ascii() {
        return None;
    }
    let (date, rest) = s.split_once('T')?;
    let date = match parse_date(date)? {
        Date::Full(d) => d,
        _ => return None,
    };
    // The timezone starts at the first `Z`, `+` or `-` after the seconds.
    let tz_start = rest
        .char_indices()
        .skip(8)
        .find(|(_, c)| matches!(c, 'Z' | '+' | '-'))
        .map(|(idx, _)| idx);
    let (time, timezone) = match tz_start {
        Some(idx) => (parse_time(&rest[..idx])?, Some(parse_timezone(&rest[idx..])?)),
        None => (parse_time(rest)?, None),
    };
    Some(Timestamp {
        date,
        time,
        timezone,
    })
}
