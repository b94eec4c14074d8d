//! Typed form of the World Bank `date` parameter.

use std::fmt;
use std::str::FromStr;

/// One period in the API's date syntax: `2020`, `2012M01`, or `2013Q1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePoint {
    Year(i32),
    Month { year: i32, month: u8 },
    Quarter { year: i32, quarter: u8 },
}

/// A single period or an inclusive range of periods (`2000:2010`,
/// `2012M01:2012M08`). Both ends of a range share one frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateSpec {
    Point(DatePoint),
    Range { start: DatePoint, end: DatePoint },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseDateSpecError {
    #[error("invalid date '{0}': expected a year (2020), month (2012M01), or quarter (2013Q1)")]
    InvalidPeriod(String),
    #[error("invalid range '{0}': both ends must be years, months, or quarters alike")]
    MixedFrequency(String),
    #[error("invalid range '{0}': start is after end")]
    ReversedRange(String),
}

impl DatePoint {
    fn year(&self) -> i32 {
        match self {
            DatePoint::Year(year) => *year,
            DatePoint::Month { year, .. } | DatePoint::Quarter { year, .. } => *year,
        }
    }

    /// Sub-year ordinal, 0 for plain years.
    fn ordinal(&self) -> u8 {
        match self {
            DatePoint::Year(_) => 0,
            DatePoint::Month { month, .. } => *month,
            DatePoint::Quarter { quarter, .. } => *quarter,
        }
    }

    fn same_frequency(&self, other: &DatePoint) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl DateSpec {
    pub fn year(year: i32) -> Self {
        DateSpec::Point(DatePoint::Year(year))
    }

    pub fn years(start: i32, end: i32) -> Self {
        DateSpec::Range {
            start: DatePoint::Year(start),
            end: DatePoint::Year(end),
        }
    }
}

impl fmt::Display for DatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePoint::Year(year) => write!(f, "{}", year),
            DatePoint::Month { year, month } => write!(f, "{}M{:02}", year, month),
            DatePoint::Quarter { year, quarter } => write!(f, "{}Q{}", year, quarter),
        }
    }
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpec::Point(point) => write!(f, "{}", point),
            DateSpec::Range { start, end } => write!(f, "{}:{}", start, end),
        }
    }
}

impl FromStr for DatePoint {
    type Err = ParseDateSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParseDateSpecError::InvalidPeriod(s.to_string());

        let year = parse_digits(s.get(..4).ok_or_else(invalid)?).ok_or_else(invalid)?;
        let rest = &s[4..];
        if rest.is_empty() {
            return Ok(DatePoint::Year(year));
        }

        let mut chars = rest.chars();
        let tag = chars.next();
        let digits = chars.as_str();
        let sub = parse_digits(digits).ok_or_else(invalid)?;
        match tag {
            Some('M' | 'm') if digits.len() == 2 && (1..=12).contains(&sub) => Ok(DatePoint::Month {
                year,
                month: sub as u8,
            }),
            Some('Q' | 'q') if digits.len() == 1 && (1..=4).contains(&sub) => Ok(DatePoint::Quarter {
                year,
                quarter: sub as u8,
            }),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for DateSpec {
    type Err = ParseDateSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some((start, end)) => {
                let start: DatePoint = start.parse()?;
                let end: DatePoint = end.parse()?;
                if !start.same_frequency(&end) {
                    return Err(ParseDateSpecError::MixedFrequency(s.to_string()));
                }
                if (start.year(), start.ordinal()) > (end.year(), end.ordinal()) {
                    return Err(ParseDateSpecError::ReversedRange(s.to_string()));
                }
                Ok(DateSpec::Range { start, end })
            }
            None => Ok(DateSpec::Point(s.parse()?)),
        }
    }
}

fn parse_digits(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
