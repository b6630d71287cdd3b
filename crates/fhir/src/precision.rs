//! Precision-preserving value types for FHIR decimals, dates and times.
//!
//! FHIR requires the lexical form of these primitives to survive a round trip:
//! `1.50` stays `1.50`, and `1970-03` stays a month. Each type keeps what it
//! parsed alongside the chrono / rust_decimal value.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A decimal that remembers its original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreciseDecimal {
    value: Option<Decimal>,
    original: String,
}

impl PreciseDecimal {
    /// Builds a decimal from an already parsed value and its lexical form.
    pub fn from_parts(value: Option<Decimal>, original: String) -> Self {
        Self { value, original }
    }

    /// Parses a FHIR decimal (JSON number grammar, exponent allowed).
    ///
    /// The numeric value is `None` when the text is a valid number but out of
    /// range for `rust_decimal`; the text is still kept.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !is_json_number(text) {
            return None;
        }
        let value = Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok();
        Some(Self::from_parts(value, text.to_string()))
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self::from_parts(Some(value), value.to_string())
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    let int_len = digits(&mut i);
    if int_len == 0 || (int_len > 1 && bytes[int_start] == b'0') {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if digits(&mut i) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

/// Precision levels of a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// YYYY
    Year,
    /// YYYY-MM
    Month,
    /// YYYY-MM-DD
    Day,
}

/// A FHIR `date`: year, year-month or full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    date: NaiveDate,
    precision: DatePrecision,
}

impl PrecisionDate {
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split('-').collect();
        let number = |part: &str, len: usize| -> Option<u32> {
            if part.len() == len && part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };

        let (year, month, day, precision) = match *parts.as_slice() {
            [y] => (number(y, 4)?, 1, 1, DatePrecision::Year),
            [y, m] => (number(y, 4)?, number(m, 2)?, 1, DatePrecision::Month),
            [y, m, d] => (number(y, 4)?, number(m, 2)?, number(d, 2)?, DatePrecision::Day),
            _ => return None,
        };
        let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
        Some(Self { date, precision })
    }

    /// First day covered by this date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }
}

impl From<NaiveDate> for PrecisionDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            date,
            precision: DatePrecision::Day,
        }
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            DatePrecision::Year => write!(f, "{:04}", self.date.year()),
            DatePrecision::Month => write!(f, "{:04}-{:02}", self.date.year(), self.date.month()),
            DatePrecision::Day => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}

/// A FHIR `dateTime`: a partial date, or a full timestamp with offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrecisionDateTime {
    Date(PrecisionDate),
    Full {
        value: DateTime<FixedOffset>,
        original: String,
    },
}

impl PrecisionDateTime {
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains('T') {
            let value = DateTime::parse_from_rfc3339(text).ok()?;
            Some(Self::Full {
                value,
                original: text.to_string(),
            })
        } else {
            PrecisionDate::parse(text).map(Self::Date)
        }
    }

    /// The timestamp, when the value has time precision.
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Full { value, .. } => Some(*value),
            Self::Date(_) => None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Full { value, .. } => value.date_naive(),
            Self::Date(date) => date.date(),
        }
    }
}

impl From<DateTime<FixedOffset>> for PrecisionDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Full {
            value,
            original: value.to_rfc3339(),
        }
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => fmt::Display::fmt(date, f),
            Self::Full { original, .. } => f.write_str(original),
        }
    }
}

/// A FHIR `instant`: always a full timestamp with offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    value: DateTime<FixedOffset>,
    original: String,
}

impl PrecisionInstant {
    pub fn parse(text: &str) -> Option<Self> {
        let value = DateTime::parse_from_rfc3339(text).ok()?;
        Some(Self {
            value,
            original: text.to_string(),
        })
    }

    pub fn value(&self) -> DateTime<FixedOffset> {
        self.value
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// A FHIR `time` of day (`hh:mm:ss` with optional fraction).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    time: NaiveTime,
    original: String,
}

impl PrecisionTime {
    pub fn parse(text: &str) -> Option<Self> {
        let time = NaiveTime::parse_from_str(text, "%H:%M:%S%.f").ok()?;
        Some(Self {
            time,
            original: text.to_string(),
        })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
