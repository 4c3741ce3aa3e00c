pub mod availability;
pub mod booking;
pub mod notification;

pub use availability::SlotAvailability;
pub use booking::{BookingRecord, BookingStatus, NewBooking, ValidBooking};
pub use notification::{DeliveryStatus, Notification, NotificationKind, NotificationRecord};
