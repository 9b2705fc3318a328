pub mod export;
pub mod import;
pub mod init;
pub mod process;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::get_data_dir;

/// Open the database in the configured data dir, creating the directory
/// and schema if needed so every command works on a fresh setup.
pub(crate) fn open_db() -> Result<Connection> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let conn = get_connection(&data_dir.join("leadbook.db"))?;
    init_db(&conn)?;
    Ok(conn)
}

#[derive(Parser)]
#[command(name = "leadbook", about = "Import, aggregate and re-export hotel-booking lead reports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up leadbook: choose a data directory and initialize the database.
    Init {
        /// Path for leadbook data (default: ~/Documents/leadbook)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a lead report CSV into the bookings table.
    Import {
        /// Path to the CSV file to import
        file: String,
    },
    /// Export all bookings as CSV.
    Export {
        /// Output file path (default: <data_dir>/exports/bookings-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Revenue aggregations.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Copy a report file, marking every row as processed.
    Process {
        /// Path to the CSV file to copy
        input: String,
        /// Output file path (default: <input stem>-processed.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total revenue per month of the lead date.
    Monthly {
        /// Emit chart data as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Total revenue per hotel country, small shares grouped as "Others".
    Countries {
        /// Emit chart data as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
