use rusqlite::Connection;

use crate::error::Result;
use crate::models::{BookingRecord, ImportRun};

/// Storage port for the import pipeline. The importer only ever needs
/// insert-or-overwrite by natural key, so that is the whole contract;
/// everything else on the SQLite side stays out of the pipeline's view.
pub trait BookingStore {
    fn upsert(&self, record: &BookingRecord) -> Result<()>;
}

impl BookingStore for Connection {
    fn upsert(&self, record: &BookingRecord) -> Result<()> {
        self.execute(
            "INSERT INTO bookings
                 (lead_id, lead_date, lead_checkin, lead_checkout,
                  revenue, commission, hotel_id, hotel_country, hotel_city)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(lead_id) DO UPDATE SET
                 lead_date = excluded.lead_date,
                 lead_checkin = excluded.lead_checkin,
                 lead_checkout = excluded.lead_checkout,
                 revenue = excluded.revenue,
                 commission = excluded.commission,
                 hotel_id = excluded.hotel_id,
                 hotel_country = excluded.hotel_country,
                 hotel_city = excluded.hotel_city,
                 updated_at = datetime('now')",
            rusqlite::params![
                record.lead_id,
                record.lead_date,
                record.lead_checkin,
                record.lead_checkout,
                record.revenue,
                record.commission,
                record.hotel_id,
                record.hotel_country,
                record.hotel_city,
            ],
        )?;
        Ok(())
    }
}

/// All bookings ordered by lead date, then lead id for a stable order.
pub fn fetch_all(conn: &Connection) -> Result<Vec<BookingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT lead_id, lead_date, lead_checkin, lead_checkout,
                revenue, commission, hotel_id, hotel_country, hotel_city
         FROM bookings ORDER BY lead_date, lead_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(BookingRecord {
            lead_id: row.get(0)?,
            lead_date: row.get(1)?,
            lead_checkin: row.get(2)?,
            lead_checkout: row.get(3)?,
            revenue: row.get(4)?,
            commission: row.get(5)?,
            hotel_id: row.get(6)?,
            hotel_country: row.get(7)?,
            hotel_city: row.get(8)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Append an audit row for one import run. Deliberately records nothing
/// that could gate a re-import: the same file imported twice runs every
/// upsert again.
pub fn record_import_run(
    conn: &Connection,
    filename: &str,
    success_count: usize,
    error_count: usize,
) -> Result<()> {
    conn.execute(
        "INSERT INTO imports (filename, success_count, error_count) VALUES (?1, ?2, ?3)",
        rusqlite::params![filename, success_count as i64, error_count as i64],
    )?;
    Ok(())
}

pub fn last_import_run(conn: &Connection) -> Result<Option<ImportRun>> {
    let mut stmt = conn.prepare(
        "SELECT id, filename, success_count, error_count, imported_at
         FROM imports ORDER BY id DESC LIMIT 1",
    )?;
    let mut rows = stmt.query_map([], |row| {
        Ok(ImportRun {
            id: row.get(0)?,
            filename: row.get(1)?,
            success_count: row.get(2)?,
            error_count: row.get(3)?,
            imported_at: row.get(4)?,
        })
    })?;
    Ok(rows.next().transpose()?)
}
