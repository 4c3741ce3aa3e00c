use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    /// New booking request, sent to the salon admin.
    #[serde(rename = "whatsapp")]
    NewBooking,
    /// Booking approved, sent to the customer.
    #[serde(rename = "whatsapp_confirmation")]
    Confirmation,
}

/// A formatted message ready to hand to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub destination: String,
    pub text: String,
    pub booking_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub phone: String,
    pub message: String,
    pub link: String,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
    pub booking_id: String,
}
