//! Day rounding and timezone relabeling for [`chrono::DateTime`].
//!
//! Every function keeps the calendar fields it is not asked to change and
//! rebuilds the date time from its wall-clock representation. Because of
//! that the result has to be resolved against the timezone again: an
//! ambiguous wall-clock time resolves to its earliest instant, and a
//! wall-clock time that falls into a gap resolves to the first instant
//! after the gap.

pub mod error;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone};

pub use error::{Error, Result};

const LAST_NANOSECOND: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(time) => time,
    None => panic!("23:59:59.999999999 is a valid time"),
};

const TWO_DAYS_NANOS: i64 = 2 * 24 * 60 * 60 * 1_000_000_000;

/// The same day in the same timezone, at `00:00:00`.
///
/// In a zone that skips midnight this is the first instant of the day.
pub fn start_of_day<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let local = date_time.date_naive().and_time(NaiveTime::MIN);
    resolve(&date_time.timezone(), local)
}

/// The same day in the same timezone, at `23:59:59.999999999`.
pub fn end_of_day<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let local = date_time.date_naive().and_time(LAST_NANOSECOND);
    resolve(&date_time.timezone(), local)
}

/// Keep the wall-clock fields of `date_time` but move it to `timezone`.
///
/// 07:00 in Berlin becomes 07:00 in New York, which is a different instant.
pub fn set_timezone<Tz: TimeZone, Tz2: TimeZone>(
    date_time: &DateTime<Tz>,
    timezone: &Tz2,
) -> Result<DateTime<Tz2>> {
    resolve(timezone, date_time.naive_local())
}

fn resolve<Tz: TimeZone>(timezone: &Tz, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    match timezone.from_local_datetime(&local) {
        LocalResult::Single(date_time) => Ok(date_time),
        LocalResult::Ambiguous(earliest, _) => {
            tracing::debug!(%local, "ambiguous local time, using the earliest instant");
            Ok(earliest)
        }
        LocalResult::None => {
            let date_time = first_instant_after_gap(timezone, local)?;
            tracing::debug!(%local, resolved = %date_time.naive_local(), "local time falls into a gap");
            Ok(date_time)
        }
    }
}

// Offsets stay within a day of UTC, so the instant whose wall clock first
// reaches `local` lies within a day either side of `local` read as UTC.
fn first_instant_after_gap<Tz: TimeZone>(
    timezone: &Tz,
    local: NaiveDateTime,
) -> Result<DateTime<Tz>> {
    let window_start = local
        .checked_sub_signed(Duration::days(1))
        .ok_or(Error::OutOfRange(local))?;
    local
        .checked_add_signed(Duration::days(1))
        .ok_or(Error::OutOfRange(local))?;

    let (mut low, mut high) = (0, TWO_DAYS_NANOS);
    while low < high {
        let mid = low + (high - low) / 2;
        let utc = window_start + Duration::nanoseconds(mid);
        if timezone.from_utc_datetime(&utc).naive_local() >= local {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    Ok(timezone.from_utc_datetime(&(window_start + Duration::nanoseconds(low))))
}
