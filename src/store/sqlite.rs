use anyhow::Context;
use rusqlite::Connection;

use super::BookingStore;
use crate::db;
use crate::db::queries;
use crate::models::BookingRecord;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = db::init_db(path)?;
        Ok(Self { conn })
    }
}

impl BookingStore for SqliteStore {
    fn load(&self) -> anyhow::Result<Vec<BookingRecord>> {
        queries::get_all_bookings(&self.conn).context("failed to load bookings")
    }

    fn save(&mut self, records: &[BookingRecord]) -> anyhow::Result<()> {
        queries::replace_all_bookings(&mut self.conn, records).context("failed to save bookings")
    }
}
