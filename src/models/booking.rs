use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::availability;

pub const DEFAULT_SERVICE: &str = "General";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub service: String,
    #[serde(default)]
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// True when this booking holds the slot, i.e. it is not cancelled.
    pub fn occupies(&self, date: NaiveDate, time: &str) -> bool {
        self.status != BookingStatus::Cancelled && self.date == date && self.time == time
    }
}

/// Lifecycle of a booking. Writes through the API are limited to the three
/// named states; values written by other tools are kept verbatim and, not
/// being cancelled, still hold their slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Approved,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    /// Parses a status requested by an admin. Only the named states are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "approved" => Some(BookingStatus::Approved),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => BookingStatus::Pending,
            "approved" => BookingStatus::Approved,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Other(raw) => raw,
            named => named.as_str().to_string(),
        }
    }
}

/// Booking request as submitted by a customer. Every field is optional on the
/// wire so missing values surface as validation errors instead of body
/// rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A booking request whose fields have been checked and normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub service: String,
    pub message: String,
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl NewBooking {
    pub fn validate(&self) -> Result<ValidBooking, AppError> {
        let (Some(name), Some(email), Some(phone), Some(date), Some(time)) = (
            required(&self.name),
            required(&self.email),
            required(&self.phone),
            required(&self.date),
            required(&self.time),
        ) else {
            return Err(AppError::validation("All required fields must be filled"));
        };

        let date = availability::parse_date(&date).map_err(|_| AppError::validation("Invalid date"))?;
        let time = availability::normalize_slot_time(&time)
            .map_err(|_| AppError::validation("Invalid time"))?;

        Ok(ValidBooking {
            name,
            email,
            phone,
            date,
            time,
            service: required(&self.service).unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
            message: self.message.clone().unwrap_or_default(),
        })
    }
}
