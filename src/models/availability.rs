use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 18;
pub const SATURDAY_CLOSING_HOUR: u32 = 13;
pub const SLOT_MINUTES: u32 = 30;

/// Slots of one day split into free and taken. Together they are exactly the
/// day's computed slots, with no slot in both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAvailability {
    #[serde(rename = "availableSlots")]
    pub available: Vec<String>,
    #[serde(rename = "bookedSlots")]
    pub booked: Vec<String>,
}

/// Closing hour for the date, `None` when the salon is closed all day.
fn closing_hour(date: NaiveDate) -> Option<u32> {
    match date.weekday().num_days_from_sunday() {
        0 => None,
        6 => Some(SATURDAY_CLOSING_HOUR),
        _ => Some(CLOSING_HOUR),
    }
}

/// Hour taken from the leading digits before the first `:`.
fn leading_hour(time: &str) -> Option<u32> {
    let head = time.split(':').next()?.trim_start();
    let digits: String = head.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

pub fn is_business_open(date: NaiveDate, time: &str) -> bool {
    let Some(hour) = leading_hour(time) else {
        return false;
    };
    match closing_hour(date) {
        None => false,
        Some(close) => hour >= OPENING_HOUR && hour < close,
    }
}

pub fn available_slots(date: NaiveDate) -> Vec<String> {
    let Some(close) = closing_hour(date) else {
        return Vec::new();
    };

    (OPENING_HOUR..close)
        .flat_map(|hour| {
            (0..60)
                .step_by(SLOT_MINUTES as usize)
                .map(move |minute| format!("{hour:02}:{minute:02}"))
        })
        .collect()
}

pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date: {s}"))
}

/// Parses `H:MM` or `HH:MM` on a slot boundary and returns the zero padded form.
pub fn normalize_slot_time(s: &str) -> anyhow::Result<String> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if parts.len() != 2
        || parts[0].len() > 2
        || parts[1].len() != 2
        || !parts.iter().copied().all(digits)
    {
        return Err(anyhow::anyhow!("invalid time format: {s}"));
    }
    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour in: {s}"))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid minute in: {s}"))?;
    if hour > 23 || minute > 59 {
        return Err(anyhow::anyhow!("time out of range: {s}"));
    }
    if minute % SLOT_MINUTES != 0 {
        return Err(anyhow::anyhow!("time not on a slot boundary: {s}"));
    }
    Ok(format!("{hour:02}:{minute:02}"))
}
