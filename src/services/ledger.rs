use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::AppError;
use crate::models::{
    BookingRecord, BookingStatus, NewBooking, Notification, SlotAvailability,
};
use crate::services::notifications::Notifier;
use crate::services::scheduling::{self, SchedulingError};
use crate::store::BookingStore;

/// Owns every booking. Each operation runs its whole load-modify-save cycle
/// under one lock so concurrent requests cannot both claim a slot.
pub struct Ledger {
    store: Mutex<Box<dyn BookingStore>>,
    notifier: Arc<Notifier>,
}

impl Ledger {
    pub fn new(store: Box<dyn BookingStore>, notifier: Arc<Notifier>) -> Self {
        Self {
            store: Mutex::new(store),
            notifier,
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, Box<dyn BookingStore>> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// An unreadable store counts as empty for reads.
    fn load(store: &dyn BookingStore) -> Vec<BookingRecord> {
        match store.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load bookings, treating ledger as empty");
                Vec::new()
            }
        }
    }

    /// Writes start from this strict load so an unreadable store is never
    /// overwritten with a partial collection.
    fn load_for_write(store: &dyn BookingStore) -> Result<Vec<BookingRecord>, AppError> {
        store.load().map_err(|e| {
            tracing::error!(error = %e, "failed to load bookings, refusing to write");
            AppError::Storage(e)
        })
    }

    /// Delivery runs on its own task so a slow sink never holds up the caller.
    fn spawn_dispatch(&self, notification: Notification) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            notifier.dispatch(&notification).await;
        });
    }

    pub fn list_all(&self) -> Vec<BookingRecord> {
        let store = self.lock_store();
        Self::load(&**store)
    }

    pub fn available_slots_for(&self, date: NaiveDate) -> SlotAvailability {
        let bookings = self.list_all();
        scheduling::partition_slots(&bookings, date)
    }

    pub async fn create(
        &self,
        request: NewBooking,
    ) -> Result<(BookingRecord, Notification), AppError> {
        let fields = request.validate()?;

        let booking = {
            let mut store = self.lock_store();
            let mut bookings = Self::load_for_write(&**store)?;

            scheduling::validate_booking_time(&bookings, fields.date, &fields.time)?;

            let now = Utc::now();
            let booking = BookingRecord {
                id: next_id(&bookings, now),
                name: fields.name,
                email: fields.email,
                phone: fields.phone,
                date: fields.date,
                time: fields.time,
                service: fields.service,
                message: fields.message,
                status: BookingStatus::Pending,
                created_at: now,
            };

            bookings.push(booking.clone());
            store.save(&bookings)?;
            booking
        };

        tracing::info!(
            booking_id = %booking.id,
            date = %booking.date,
            time = %booking.time,
            "booking created"
        );

        let notification = self.notifier.admin_notification(&booking);
        self.spawn_dispatch(notification.clone());

        Ok((booking, notification))
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<(BookingRecord, Option<Notification>), AppError> {
        let status = BookingStatus::parse(status)
            .ok_or_else(|| AppError::validation("Invalid status"))?;

        let booking = {
            let mut store = self.lock_store();
            let mut bookings = Self::load_for_write(&**store)?;

            let index = bookings
                .iter()
                .position(|b| b.id == id)
                .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

            // Reviving a cancelled booking must not double-book its slot
            let target = &bookings[index];
            if status != BookingStatus::Cancelled
                && target.status == BookingStatus::Cancelled
                && bookings
                    .iter()
                    .any(|b| b.id != id && b.occupies(target.date, &target.time))
            {
                return Err(SchedulingError::Conflict.into());
            }

            bookings[index].status = status.clone();
            store.save(&bookings)?;
            bookings[index].clone()
        };

        tracing::info!(booking_id = %booking.id, status = status.as_str(), "booking status updated");

        if status != BookingStatus::Approved {
            return Ok((booking, None));
        }

        let notification = self.notifier.customer_confirmation(&booking);
        self.spawn_dispatch(notification.clone());

        Ok((booking, Some(notification)))
    }
}

/// Millisecond timestamp, bumped past the newest existing id so ids stay
/// unique and increasing even within one millisecond.
fn next_id(bookings: &[BookingRecord], now: DateTime<Utc>) -> String {
    let newest = bookings
        .iter()
        .filter_map(|b| b.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0);
    now.timestamp_millis().max(newest + 1).to_string()
}
