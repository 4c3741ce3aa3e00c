use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::availability::{self, SlotAvailability};
use crate::models::BookingRecord;

#[derive(Debug, PartialEq)]
pub enum SchedulingError {
    OutsideBusinessHours,
    Conflict,
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::OutsideBusinessHours => {
                write!(f, "Selected time is outside business hours")
            }
            SchedulingError::Conflict => write!(f, "This time slot is already booked"),
        }
    }
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::OutsideBusinessHours => AppError::Validation(err.to_string()),
            SchedulingError::Conflict => AppError::Conflict(err.to_string()),
        }
    }
}

pub fn validate_booking_time(
    bookings: &[BookingRecord],
    date: NaiveDate,
    time: &str,
) -> Result<(), SchedulingError> {
    if !availability::is_business_open(date, time) {
        return Err(SchedulingError::OutsideBusinessHours);
    }

    if bookings.iter().any(|b| b.occupies(date, time)) {
        return Err(SchedulingError::Conflict);
    }

    Ok(())
}

pub fn partition_slots(bookings: &[BookingRecord], date: NaiveDate) -> SlotAvailability {
    let (booked, available): (Vec<String>, Vec<String>) = availability::available_slots(date)
        .into_iter()
        .partition(|slot| bookings.iter().any(|b| b.occupies(date, slot)));

    SlotAvailability { available, booked }
}
