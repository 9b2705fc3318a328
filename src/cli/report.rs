use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::open_db;
use crate::error::{LeadbookError, Result};
use crate::reports;

pub fn monthly(json: bool) -> Result<()> {
    let conn = open_db()?;
    let months = reports::monthly_revenue(&conn)?;

    if json {
        let payload = serde_json::to_string(&months)
            .map_err(|e| LeadbookError::Other(e.to_string()))?;
        println!("{payload}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Month", "Revenue"]);
    for item in &months {
        table.add_row(vec![
            Cell::new(&item.month),
            Cell::new(format!("{:.2}", item.total)),
        ]);
    }
    let total: f64 = months.iter().map(|m| m.total).sum();
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        Cell::new(format!("{total:.2}")),
    ]);

    println!("Monthly Revenue\n{table}");
    Ok(())
}

pub fn countries(json: bool) -> Result<()> {
    let conn = open_db()?;
    let rows = reports::revenue_by_country(&conn)?;
    let bucketed = reports::bucket_small_shares(rows, reports::OTHERS_SHARE_CUTOFF);

    if json {
        let labels: Vec<&str> = bucketed.iter().map(|r| r.country.as_str()).collect();
        let values: Vec<f64> = bucketed.iter().map(|r| r.total).collect();
        let payload = serde_json::json!({ "labels": labels, "values": values });
        println!("{payload}");
        return Ok(());
    }

    let total: f64 = bucketed.iter().map(|r| r.total).sum();
    let mut table = Table::new();
    table.set_header(vec!["Country", "Revenue", "Share"]);
    for item in &bucketed {
        let share = if total != 0.0 { item.total / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&item.country),
            Cell::new(format!("{:.2}", item.total)),
            Cell::new(format!("{share:.1}%")),
        ]);
    }

    println!("Revenue by Hotel Country\n{table}");
    Ok(())
}
