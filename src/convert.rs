//! Semantic converters from field tokens to record values.
//!
//! Each converter is a pure function of a token and the destination it
//! writes to. Destinations are borrowed through [`Slot`], which names the
//! shape of the field being written; a converter handed a shape it cannot
//! produce fails with [`ConvertError::Unsupported`].

use std::{
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
};

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use thiserror::Error;

/// An error converting a single token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The destination cannot hold values produced by this converter.
    #[error("Converter does not support this field type.")]
    Unsupported,
    /// Malformed or out of range integer.
    #[error("{0}")]
    Int(#[from] ParseIntError),
    /// Malformed floating point number.
    #[error("{0}")]
    Float(#[from] ParseFloatError),
    /// A date not in `DDMMYY` form, or not on the calendar.
    #[error("Invalid date {0:?}.")]
    Date(String),
    /// A time not in `HHMMSS[.fff]` form.
    #[error("{0}")]
    Time(#[from] chrono::ParseError),
    /// A time whose seconds field is 60.
    #[error("Leap second in time {0:?}.")]
    LeapSecond(String),
}

/// Receive converted values for a record field.
pub trait AsSlot {
    /// Borrow this field as a converter destination.
    fn as_slot(&mut self) -> Slot<'_>;
}

macro_rules! slots {
    ($($variant:ident($t:ty), $(#[$attr:meta])*;)*) => {
        /// A mutable borrow of a record field, tagged with its shape.
        #[derive(Debug)]
        pub enum Slot<'a> {
            $($(#[$attr])* $variant(&'a mut $t),)*
        }

        $(
            impl AsSlot for $t {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

slots! {
    I8(i8), /** `i8` */;
    I16(i16), /** `i16` */;
    I32(i32), /** `i32` */;
    I64(i64), /** `i64` */;
    U8(u8), /** `u8` */;
    U16(u16), /** `u16` */;
    U32(u32), /** `u32` */;
    U64(u64), /** `u64` */;
    F32(f32), /** `f32` */;
    F64(f64), /** `f64` */;
    Text(String), /** Text, copied verbatim. */;
    Bytes(Vec<u8>), /** Raw token bytes. */;
    Timestamp(Option<DateTime<Utc>>), /** A UTC date or time of day, absent when empty. */;
}

/// Parse a token, treating an empty one as zero.
fn parse<T: FromStr + Default>(token: &str) -> Result<T, T::Err> {
    if token.is_empty() {
        Ok(T::default())
    } else {
        token.parse()
    }
}

/// Set an integer or floating point field.
pub fn number(token: &str, slot: Slot<'_>) -> Result<(), ConvertError> {
    match slot {
        Slot::I8(v) => *v = parse(token)?,
        Slot::I16(v) => *v = parse(token)?,
        Slot::I32(v) => *v = parse(token)?,
        Slot::I64(v) => *v = parse(token)?,
        Slot::U8(v) => *v = parse(token)?,
        Slot::U16(v) => *v = parse(token)?,
        Slot::U32(v) => *v = parse(token)?,
        Slot::U64(v) => *v = parse(token)?,
        Slot::F32(v) => *v = parse(token)?,
        Slot::F64(v) => *v = parse(token)?,
        _ => Err(ConvertError::Unsupported)?,
    }

    Ok(())
}

/// Set a text or byte field to the token.
pub fn text(token: &str, slot: Slot<'_>) -> Result<(), ConvertError> {
    match slot {
        Slot::Text(v) => {
            v.clear();
            v.push_str(token);
        }
        Slot::Bytes(v) => {
            v.clear();
            v.extend_from_slice(token.as_bytes());
        }
        _ => Err(ConvertError::Unsupported)?,
    }

    Ok(())
}

/// Set a floating point field to decimal degrees, from a token in the form
/// `DDDMM.MMMM`.
pub fn latlon(token: &str, slot: Slot<'_>) -> Result<(), ConvertError> {
    let degrees = |token: &str| -> Result<f64, ConvertError> {
        let v: f64 = parse(token)?;
        let (deg, min) = ((v / 100.0).trunc(), (v / 100.0).fract());
        Ok(deg + min * 100.0 / 60.0)
    };

    match slot {
        Slot::F32(v) => *v = degrees(token)? as f32,
        Slot::F64(v) => *v = degrees(token)?,
        _ => Err(ConvertError::Unsupported)?,
    }

    Ok(())
}

/// Set a timestamp field to midnight UTC on a date in the form `DDMMYY`.
///
/// The two-digit year is taken literally: `98` is the year 98, not 1998.
/// Callers knowing the epoch of their data should adjust the century.
pub fn date(token: &str, slot: Slot<'_>) -> Result<(), ConvertError> {
    let Slot::Timestamp(v) = slot else {
        Err(ConvertError::Unsupported)?
    };

    if token.is_empty() {
        *v = None;
        return Ok(());
    }

    let invalid = || ConvertError::Date(token.to_string());

    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        Err(invalid())?;
    }

    let pair = |i: usize| -> u32 { token[i..i + 2].parse().unwrap_or_default() };
    let (day, month, year) = (pair(0), pair(2), pair(4));

    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)?;
    *v = Some(date.and_time(NaiveTime::MIN).and_utc());

    Ok(())
}

/// Set a timestamp field to a time of day in the form `HHMMSS[.fff]`.
///
/// The result is anchored to the placeholder date 0000-01-01 UTC. Leap
/// seconds are rejected.
pub fn time(token: &str, slot: Slot<'_>) -> Result<(), ConvertError> {
    let Slot::Timestamp(v) = slot else {
        Err(ConvertError::Unsupported)?
    };

    if token.is_empty() {
        *v = None;
        return Ok(());
    }

    let time = NaiveTime::parse_from_str(token, "%H%M%S%.f")?;

    // chrono folds a seconds field of 60 into the nanoseconds.
    if time.nanosecond() >= 1_000_000_000 {
        Err(ConvertError::LeapSecond(token.to_string()))?;
    }

    *v = Some(placeholder_date().and_time(time).and_utc());

    Ok(())
}

/// Set an integer field to a checksum value, truncating to its width.
pub fn checksum(value: u8, slot: Slot<'_>) -> Result<(), ConvertError> {
    match slot {
        Slot::I8(v) => *v = value as i8,
        Slot::I16(v) => *v = value as i16,
        Slot::I32(v) => *v = value as i32,
        Slot::I64(v) => *v = value as i64,
        Slot::U8(v) => *v = value,
        Slot::U16(v) => *v = value as u16,
        Slot::U32(v) => *v = value as u32,
        Slot::U64(v) => *v = value as u64,
        _ => Err(ConvertError::Unsupported)?,
    }

    Ok(())
}

/// The date that [`time`] anchors times of day to.
pub fn placeholder_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).unwrap()
}
