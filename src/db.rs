use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS bookings (
    id INTEGER PRIMARY KEY,
    lead_id TEXT NOT NULL UNIQUE,
    lead_date TEXT NOT NULL,
    lead_checkin TEXT NOT NULL,
    lead_checkout TEXT NOT NULL,
    revenue REAL NOT NULL DEFAULT 0,
    commission REAL NOT NULL DEFAULT 0,
    hotel_id INTEGER,
    hotel_country TEXT,
    hotel_city TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS imports (
    id INTEGER PRIMARY KEY,
    filename TEXT NOT NULL,
    success_count INTEGER NOT NULL,
    error_count INTEGER NOT NULL,
    imported_at TEXT DEFAULT (datetime('now'))
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
