use std::fs::File;
use std::path::PathBuf;

use crate::cli::open_db;
use crate::error::Result;
use crate::export::write_bookings_csv;
use crate::settings::get_data_dir;
use crate::store::fetch_all;

fn default_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    get_data_dir().join("exports").join(format!("bookings-{date}.csv"))
}

pub fn run(output: Option<String>) -> Result<()> {
    let conn = open_db()?;
    let bookings = fetch_all(&conn)?;

    let path = output.map(PathBuf::from).unwrap_or_else(default_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    write_bookings_csv(file, &bookings)?;

    println!("Wrote {} bookings to {}", bookings.len(), path.display());
    Ok(())
}
