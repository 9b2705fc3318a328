use std::fs::File;
use std::path::Path;

use colored::Colorize;

use crate::cli::open_db;
use crate::error::{LeadbookError, Result};
use crate::importer::import_csv;
use crate::store::record_import_run;

pub fn run(file: &str) -> Result<()> {
    let path = Path::new(file);
    let conn = open_db()?;

    let input = File::open(path)?;
    let report = import_csv(&conn, input);

    if let Some(error) = report.error {
        return Err(LeadbookError::Other(format!("Error importing CSV: {error}")));
    }

    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or(file);
    record_import_run(&conn, filename, report.success_count, report.error_count)?;

    if report.success_count > 0 {
        println!(
            "{}",
            format!("Successfully imported {} records.", report.success_count).green()
        );
    }
    if report.error_count > 0 {
        println!(
            "{}",
            format!("{} records failed to import.", report.error_count).yellow()
        );
    }
    Ok(())
}
