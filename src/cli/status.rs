use crate::db::get_connection;
use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::last_import_run;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let db_path = data_dir.join("leadbook.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let conn = get_connection(&db_path)?;
        let bookings: i64 = conn.query_row("SELECT count(*) FROM bookings", [], |r| r.get(0))?;
        let runs: i64 = conn.query_row("SELECT count(*) FROM imports", [], |r| r.get(0))?;

        println!();
        println!("Bookings:      {bookings}");
        println!("Import runs:   {runs}");
        if let Some(last) = last_import_run(&conn)? {
            println!(
                "Last import:   {} ({} ok, {} failed) at {}",
                last.filename, last.success_count, last.error_count, last.imported_at
            );
        }
    } else {
        println!();
        println!("Database not found. Run `leadbook init` to set up.");
    }

    Ok(())
}
