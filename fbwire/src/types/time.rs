//! Calendar and time of day codec.
//!
//! Dates travel as modified julian day numbers, where `1858-11-17` is day
//! zero. Time of day travels as ten thousandths of a second since midnight.
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcDateTime,
    format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{Encode, Value};

/// Julian day number of `1858-11-17`, the modified julian day epoch.
const MJD_EPOCH: i32 = 2_400_001;

/// Fractions of a second per time unit on the wire.
const TIME_UNITS: i32 = 10_000;

/// Convert date to modified julian day number.
pub fn date_to_julian(date: Date) -> i32 {
    let i = u8::from(date.month()) as i32 + 9;
    let mut jy = date.year() + i / 12 - 1;
    let jm = i % 12;
    let c = jy / 100;
    jy -= 100 * c;
    (146_097 * c) / 4 + (1_461 * jy) / 4 + (153 * jm + 2) / 5 + date.day() as i32 - 678_882
}

/// Convert time of day to ten thousandths of a second.
pub fn time_to_fixed(time: Time) -> i32 {
    let (h, m, s, ns) = time.as_hms_nano();
    (h as i32 * 3600 + m as i32 * 60 + s as i32) * TIME_UNITS + ns as i32 / 100_000
}

/// Convert modified julian day number back to date.
///
/// Returns [`None`] when the day is outside [`Date`] range.
pub fn julian_to_date(day: i32) -> Option<Date> {
    Date::from_julian_day(day.checked_add(MJD_EPOCH)?).ok()
}

/// Convert ten thousandths of a second back to time of day.
///
/// Returns [`None`] when the value is negative or exceeds one day.
pub fn fixed_to_time(value: i32) -> Option<Time> {
    if value < 0 {
        return None;
    }
    let secs = value / TIME_UNITS;
    let nano = (value % TIME_UNITS) as u32 * 100_000;
    Time::from_hms_nano(
        (secs / 3600).try_into().ok()?,
        (secs / 60 % 60) as u8,
        (secs % 60) as u8,
        nano,
    )
    .ok()
}

impl Encode<'static> for Date {
    fn encode(self) -> Value<'static> {
        Value::Date(self)
    }
}

impl Encode<'static> for Time {
    fn encode(self) -> Value<'static> {
        Value::Time(self)
    }
}

impl Encode<'static> for PrimitiveDateTime {
    fn encode(self) -> Value<'static> {
        Value::Timestamp(self)
    }
}

/// Encoded with its local date and time, the offset is not sent.
impl Encode<'static> for OffsetDateTime {
    fn encode(self) -> Value<'static> {
        Value::Timestamp(PrimitiveDateTime::new(self.date(), self.time()))
    }
}

impl Encode<'static> for UtcDateTime {
    fn encode(self) -> Value<'static> {
        Value::Timestamp(PrimitiveDateTime::new(self.date(), self.time()))
    }
}

/// Timestamp literal format, `YYYY-MM-DD HH:MM:SS.f`.
pub(crate) const DESCRIPTION: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
