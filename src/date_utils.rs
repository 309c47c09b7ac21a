use std::fmt;

use jiff::civil::Date;
use thiserror::Error;

/// Separator between the day, month and year fields of a registration date.
const FIELD_SEPARATOR: char = '/';

/// Offset added to the year band for registrations in the September batch.
const SECOND_HALF_OFFSET: u32 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("date '{date}' is missing the {field} field")]
    MissingField { date: String, field: &'static str },

    #[error("invalid {field} '{value}' in date")]
    InvalidNumber { field: &'static str, value: String },

    #[error("date '{date}' is not a calendar date: {reason}")]
    NotACalendarDate { date: String, reason: String },
}

/// How much checking is applied to the numeric fields of a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateCheck {
    /// Numeric parsing only, so `31/02/2020` is accepted.
    #[default]
    Lenient,
    /// The fields must also form a real calendar date.
    Strict,
}

/// A registration date as written in `dd/mm/yyyy` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl RegistrationDate {
    pub fn parse(date: &str) -> Result<Self, DateError> {
        Self::parse_with(date, DateCheck::Lenient)
    }

    /// Reads the first three fields; anything after the year is ignored.
    pub fn parse_with(date: &str, check: DateCheck) -> Result<Self, DateError> {
        let parsed = Self {
            day: field(date, 0, "day")?,
            month: field(date, 1, "month")?,
            year: parse_year(date)?,
        };

        if check == DateCheck::Strict {
            parsed.to_civil_date().map_err(|reason| DateError::NotACalendarDate {
                date: date.to_string(),
                reason,
            })?;
        }

        Ok(parsed)
    }

    /// The age identifier for this date, or `None` when it falls outside every
    /// registration window.
    pub fn age_identifier(&self) -> Option<AgeIdentifier> {
        AgeIdentifier::new(age_identifier_for(self.day, self.month, self.year))
    }

    fn to_civil_date(self) -> Result<Date, String> {
        let year = i16::try_from(self.year).map_err(|_| "year out of range".to_string())?;
        let month = i8::try_from(self.month).map_err(|_| "month out of range".to_string())?;
        let day = i8::try_from(self.day).map_err(|_| "day out of range".to_string())?;
        Date::new(year, month, day).map_err(|e| e.to_string())
    }
}

impl fmt::Display for RegistrationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Two-digit numeral encoding the half-year window a vehicle was registered in.
///
/// Always in `1..=149`: `0` is never a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeIdentifier(u8);

impl AgeIdentifier {
    pub const MAX: u8 = 99 + SECOND_HALF_OFFSET as u8;

    pub fn new(value: u32) -> Option<Self> {
        match u8::try_from(value) {
            Ok(value @ 1..=Self::MAX) => Some(Self(value)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AgeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts the year from a `dd/mm/yyyy` date string.
pub fn parse_year(date: &str) -> Result<u32, DateError> {
    field(date, 2, "year")
}

/// Computes the age identifier for `year` using the day and month of `date`.
///
/// The windows are checked in order and the first match wins:
///
/// - March to August: `year % 100`
/// - February up to the 27th: `year % 100 + 50`
/// - September, January (and a zero month): `year % 100 + 50`
///
/// Anything else returns `0`, meaning no plate can be issued for the date.
pub fn compute_age_identifier(year: u32, date: &str) -> Result<u32, DateError> {
    let month = field(date, 1, "month")?;
    let day = field(date, 0, "day")?;
    Ok(age_identifier_for(day, month, year))
}

fn age_identifier_for(day: u32, month: u32, year: u32) -> u32 {
    let band = year % 100;
    match (month, day) {
        (3..=8, _) => band,
        (2, ..=27) => band + SECOND_HALF_OFFSET,
        (9 | 0..=1, _) => band + SECOND_HALF_OFFSET,
        _ => 0,
    }
}

fn field(date: &str, index: usize, name: &'static str) -> Result<u32, DateError> {
    let value = date
        .split(FIELD_SEPARATOR)
        .nth(index)
        .ok_or_else(|| DateError::MissingField {
            date: date.to_string(),
            field: name,
        })?;

    // An optional `+` sign, never `-`
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidNumber {
            field: name,
            value: value.to_string(),
        });
    }

    digits.parse().map_err(|_| DateError::InvalidNumber {
        field: name,
        value: value.to_string(),
    })
}
