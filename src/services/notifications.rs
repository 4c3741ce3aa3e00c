use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;

use crate::models::{
    BookingRecord, DeliveryStatus, Notification, NotificationKind, NotificationRecord,
};
use crate::services::messaging::NotificationSink;

pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<digits>?text=<message>` deep link that opens a chat with
/// the message pre-filled.
pub fn whatsapp_link(destination: &str, text: &str) -> String {
    let base = format!("https://wa.me/{}", digits_only(destination));
    match reqwest::Url::parse_with_params(&base, &[("text", text)]) {
        Ok(url) => url.to_string(),
        Err(_) => base,
    }
}

pub fn format_admin_notification(
    booking: &BookingRecord,
    business_name: &str,
    admin_phone: &str,
    base_url: &str,
) -> Notification {
    let text = format!(
        "New Nail Appointment Request 💅\n\n\
         {business_name}\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Date: {}\n\
         Time: {}\n\
         Service: {}\n\
         Special Requests: {}\n\n\
         To confirm: {base_url}/admin",
        booking.name,
        booking.email,
        booking.phone,
        booking.date.format("%Y-%m-%d"),
        booking.time,
        booking.service,
        booking.message,
    );

    Notification {
        kind: NotificationKind::NewBooking,
        destination: digits_only(admin_phone),
        text,
        booking_id: booking.id.clone(),
    }
}

pub fn format_customer_confirmation(booking: &BookingRecord, business_name: &str) -> Notification {
    let text = format!(
        "🎉 {business_name} - Booking Confirmed!\n\n\
         Hi {},\n\n\
         Your nail appointment has been confirmed!\n\n\
         📅 Date: {}\n\
         ⏰ Time: {}\n\
         💅 Service: {}\n\n\
         We look forward to seeing you!\n\n\
         For any changes, please contact us.\n\n\
         Best regards,\n\
         {business_name} Team",
        booking.name,
        booking.date.format("%Y-%m-%d"),
        booking.time,
        booking.service,
    );

    Notification {
        kind: NotificationKind::Confirmation,
        destination: digits_only(&booking.phone),
        text,
        booking_id: booking.id.clone(),
    }
}

/// Every dispatched notification, oldest first, with a live feed for
/// subscribers.
pub struct NotificationLog {
    records: Mutex<Vec<NotificationRecord>>,
    next_id: AtomicU64,
    tx: broadcast::Sender<NotificationRecord>,
}

impl Default for NotificationLog {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            tx,
        }
    }
}

impl NotificationLog {
    pub fn record(&self, notification: &Notification, status: DeliveryStatus) -> NotificationRecord {
        let record = NotificationRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            kind: notification.kind,
            phone: notification.destination.clone(),
            message: notification.text.clone(),
            link: whatsapp_link(&notification.destination, &notification.text),
            timestamp: Utc::now(),
            status,
            booking_id: notification.booking_id.clone(),
        };

        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        // Nobody may be listening
        let _ = self.tx.send(record.clone());

        record
    }

    pub fn all(&self) -> Vec<NotificationRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn since(&self, last_id: u64) -> Vec<NotificationRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|r| r.id > last_id)
            .cloned()
            .collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationRecord> {
        self.tx.subscribe()
    }
}

/// Formats notifications with the salon's details and delivers them through
/// the configured sink. Delivery is best effort: failures are logged and
/// recorded, never returned.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    log: NotificationLog,
    business_name: String,
    admin_phone: String,
    base_url: String,
    timeout: Duration,
}

impl Notifier {
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        business_name: String,
        admin_phone: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            sink,
            log: NotificationLog::default(),
            business_name,
            admin_phone,
            base_url,
            timeout,
        }
    }

    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    pub fn admin_notification(&self, booking: &BookingRecord) -> Notification {
        format_admin_notification(booking, &self.business_name, &self.admin_phone, &self.base_url)
    }

    pub fn customer_confirmation(&self, booking: &BookingRecord) -> Notification {
        format_customer_confirmation(booking, &self.business_name)
    }

    pub async fn dispatch(&self, notification: &Notification) -> NotificationRecord {
        let delivery = tokio::time::timeout(
            self.timeout,
            self.sink.send(&notification.destination, &notification.text),
        )
        .await;

        let status = match delivery {
            Ok(Ok(())) => {
                tracing::info!(
                    kind = ?notification.kind,
                    destination = %notification.destination,
                    booking_id = %notification.booking_id,
                    "notification delivered"
                );
                DeliveryStatus::Sent
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    error = %e,
                    kind = ?notification.kind,
                    booking_id = %notification.booking_id,
                    "notification delivery failed"
                );
                DeliveryStatus::Failed
            }
            Err(_) => {
                tracing::warn!(
                    kind = ?notification.kind,
                    booking_id = %notification.booking_id,
                    timeout_secs = self.timeout.as_secs(),
                    "notification delivery timed out"
                );
                DeliveryStatus::Failed
            }
        };

        self.log.record(notification, status)
    }
}
