//! Display formatting for dates, time windows and dollar amounts.
//!
//! Dates follow en-US conventions (`Wed, 5/1/19`), times use the shorter
//! 24-hour en-GB style (`08:30`). Callers convert timestamps into wall-clock
//! time of the display zone before formatting (see `zone::DisplayZone`).

use time::{
    format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime, UtcOffset,
};

const SHORT_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [month padding:none]/[day padding:none]/[year repr:last_two]"
);
const CLOCK: &[BorrowedFormatItem<'static>] = format_description!("[hour repr:24]:[minute]");

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

pub fn format_short_date(date: OffsetDateTime) -> String {
    date.format(SHORT_DATE).unwrap_or_default()
}

/// `HH:MM - HH:MM TZ`, or `HH:MM TZ` when both ends land on the same minute.
pub fn format_time_range(start: OffsetDateTime, end: OffsetDateTime, zone: &str) -> String {
    let from = start.format(CLOCK).unwrap_or_default();
    let to = end.format(CLOCK).unwrap_or_default();

    if from != to {
        format!("{from} - {to} {zone}")
    } else {
        format!("{from} {zone}")
    }
}

/// Zone name built from a bare offset: `UTC`, `GMT-5`, `GMT+5:30`.
pub fn zone_label(offset: UtcOffset) -> String {
    if offset.is_utc() {
        return "UTC".to_string();
    }

    let (hours, minutes, _) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    let hours = hours.unsigned_abs();
    let minutes = minutes.unsigned_abs();
    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

/// `$` + amount with two decimals and thousands separators.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("${sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole days from `from` to `to`, rounded up. Negative when `to` is earlier.
///
/// Rounding is always towards positive infinity, so swapping the arguments
/// only negates the result when the gap is an exact number of days.
pub fn days_between(from: OffsetDateTime, to: OffsetDateTime) -> i64 {
    let millis = (to - from).whole_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}
