use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;

/// Countries holding less than this share of total revenue are folded
/// into a single "Others" slice.
pub const OTHERS_SHARE_CUTOFF: f64 = 0.06;

// ---------------------------------------------------------------------------
// Monthly revenue (line chart data)
// ---------------------------------------------------------------------------

/// One month's revenue total, serialized as an { x, y } chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    #[serde(rename = "x")]
    pub month: String,
    #[serde(rename = "y")]
    pub total: f64,
}

pub fn monthly_revenue(conn: &Connection) -> Result<Vec<MonthlyRevenue>> {
    let mut stmt = conn.prepare(
        "SELECT strftime('%Y-%m', lead_date) AS month, SUM(revenue) AS total
         FROM bookings GROUP BY month ORDER BY month",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(MonthlyRevenue {
            month: row.get(0)?,
            total: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// ---------------------------------------------------------------------------
// Revenue by hotel country (pie chart data)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRevenue {
    pub country: String,
    pub total: f64,
}

/// Per-country totals, largest first. Bookings without a country land in
/// "Unknown".
pub fn revenue_by_country(conn: &Connection) -> Result<Vec<CountryRevenue>> {
    let mut stmt = conn.prepare(
        "SELECT COALESCE(hotel_country, 'Unknown') AS country, SUM(revenue) AS total
         FROM bookings GROUP BY country ORDER BY total DESC, country",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CountryRevenue {
            country: row.get(0)?,
            total: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Fold countries below `cutoff` share of the grand total into a trailing
/// "Others" entry. With zero total revenue every share is zero, so
/// nothing survives the cutoff and the result is empty.
pub fn bucket_small_shares(rows: Vec<CountryRevenue>, cutoff: f64) -> Vec<CountryRevenue> {
    let grand_total: f64 = rows.iter().map(|r| r.total).sum();

    let mut kept = Vec::new();
    let mut others_total = 0.0;
    for row in rows {
        let share = if grand_total != 0.0 {
            row.total / grand_total
        } else {
            0.0
        };
        if share < cutoff {
            others_total += row.total;
        } else {
            kept.push(row);
        }
    }
    if others_total > 0.0 {
        kept.push(CountryRevenue {
            country: "Others".to_string(),
            total: others_total,
        });
    }
    kept
}
