//! Persistence for the booking ledger.
//!
//! A [`BookingStore`] only knows how to read and overwrite the whole
//! collection. Consistency (conflict checks, id assignment) lives in
//! [`crate::services::ledger::Ledger`], which serializes every
//! load-modify-save cycle behind one lock.
//!
//! Implementations:
//! - [`json_file::JsonFileStore`]: a pretty-printed JSON array on disk.
//! - [`sqlite::SqliteStore`]: a `bookings` table replaced transactionally.
//! - [`memory::InMemoryStore`]: for tests.

pub mod json_file;
pub mod memory;
pub mod sqlite;

use crate::models::BookingRecord;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

pub trait BookingStore: Send {
    fn load(&self) -> anyhow::Result<Vec<BookingRecord>>;

    /// Replaces the stored collection with `records`.
    fn save(&mut self, records: &[BookingRecord]) -> anyhow::Result<()>;
}
