use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::models::{BookingRecord, BookingStatus};

// ── Bookings ──

pub fn get_all_bookings(conn: &Connection) -> anyhow::Result<Vec<BookingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, date, time, service, message, status, created_at
         FROM bookings ORDER BY position",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, String>(8)?,
            row.get::<_, String>(9)?,
        ))
    })?;

    let mut bookings = Vec::new();
    for row in rows {
        let (id, name, email, phone, date, time, service, message, status, created_at) = row?;
        let status = BookingStatus::from(status);
        bookings.push(BookingRecord {
            date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
            id,
            name,
            email,
            phone,
            time,
            service,
            message,
            status,
        });
    }

    Ok(bookings)
}

/// Replaces every stored booking inside one transaction.
pub fn replace_all_bookings(conn: &mut Connection, bookings: &[BookingRecord]) -> anyhow::Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM bookings", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO bookings
                (position, id, name, email, phone, date, time, service, message, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        for (position, b) in bookings.iter().enumerate() {
            stmt.execute(params![
                position as i64,
                b.id,
                b.name,
                b.email,
                b.phone,
                b.date.format("%Y-%m-%d").to_string(),
                b.time,
                b.service,
                b.message,
                b.status.as_str(),
                b.created_at.to_rfc3339(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}
