use chrono::NaiveDateTime;
use csv::StringRecord;
use thiserror::Error;

use crate::error::{LeadbookError, Result};
use crate::models::BookingRecord;

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Accepted datetime formats, tried in order. Day-first deliberately comes
/// before month-first — the upstream report mixes locales and the first
/// matching format wins, so do not reorder.
pub const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M",
];

/// Stand-in for a missing hotel id, before the negativity check maps it
/// to absent.
pub const HOTEL_ID_SENTINEL: i64 = -100;

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Money fields never fail a row: absent or unparseable values become 0.0.
pub fn parse_money(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// A missing or non-numeric hotel id falls back to the sentinel; anything
/// negative (sentinel included) is absent. Zero and positive ids are kept.
pub fn parse_hotel_id(raw: Option<&str>) -> Option<i64> {
    let id = raw
        .map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(HOTEL_ID_SENTINEL);
    if id < 0 {
        None
    } else {
        Some(id)
    }
}

/// Trim a free-text place name; empty and the "Not Applicable" sentinel
/// both normalize to absent.
pub fn normalize_place(raw: Option<&str>) -> Option<String> {
    let s = raw?.trim();
    if s.is_empty() || s == "Not Applicable" {
        return None;
    }
    Some(s.to_string())
}

// ---------------------------------------------------------------------------
// Row schema — column positions resolved once per file
// ---------------------------------------------------------------------------

/// A single row's failure. Never aborts the run; the importer counts it,
/// logs the raw row, and moves on.
#[derive(Error, Debug, PartialEq)]
pub enum RowError {
    #[error("LeadId is empty")]
    MissingLeadId,

    #[error("{field} '{value}' does not match any expected formats")]
    InvalidDate { field: &'static str, value: String },
}

/// Column positions for one file, resolved from the header row. Required
/// columns are validated here, once, instead of on every field access.
#[derive(Debug, Clone)]
pub struct RowSchema {
    lead_id: usize,
    lead_date: usize,
    lead_checkin: usize,
    lead_checkout: usize,
    revenue: Option<usize>,
    commission: Option<usize>,
    hotel_id: Option<usize>,
    hotel_country: Option<usize>,
    hotel_city: Option<usize>,
}

impl RowSchema {
    /// Header names are exact, case-sensitive matches. A header missing any
    /// of the identity/date columns is malformed and fails the whole run;
    /// money columns default to 0.0 per row and hotel columns to absent.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &'static str| {
            position(name).ok_or(LeadbookError::MissingColumn(name))
        };
        Ok(Self {
            lead_id: required("LeadId")?,
            lead_date: required("LeadDate")?,
            lead_checkin: required("LeadCheckin")?,
            lead_checkout: required("LeadCheckout")?,
            revenue: position("Revenue"),
            commission: position("Commission"),
            hotel_id: position("HotelID"),
            hotel_country: position("HotelCountry"),
            hotel_city: position("HotelCity"),
        })
    }

    fn date_field(
        &self,
        record: &StringRecord,
        idx: usize,
        field: &'static str,
    ) -> std::result::Result<NaiveDateTime, RowError> {
        let raw = record.get(idx).unwrap_or("");
        parse_datetime(raw).ok_or_else(|| RowError::InvalidDate {
            field,
            value: raw.trim().to_string(),
        })
    }

    fn optional<'a>(&self, record: &'a StringRecord, idx: Option<usize>) -> Option<&'a str> {
        idx.and_then(|i| record.get(i))
    }

    /// Parse and normalize one data row into a record ready for upsert.
    pub fn parse_row(
        &self,
        record: &StringRecord,
    ) -> std::result::Result<BookingRecord, RowError> {
        let lead_id = record.get(self.lead_id).unwrap_or("").trim();
        if lead_id.is_empty() {
            return Err(RowError::MissingLeadId);
        }

        Ok(BookingRecord {
            lead_id: lead_id.to_string(),
            lead_date: self.date_field(record, self.lead_date, "LeadDate")?,
            lead_checkin: self.date_field(record, self.lead_checkin, "LeadCheckin")?,
            lead_checkout: self.date_field(record, self.lead_checkout, "LeadCheckout")?,
            revenue: parse_money(self.optional(record, self.revenue)),
            commission: parse_money(self.optional(record, self.commission)),
            hotel_id: parse_hotel_id(self.optional(record, self.hotel_id)),
            hotel_country: normalize_place(self.optional(record, self.hotel_country)),
            hotel_city: normalize_place(self.optional(record, self.hotel_city)),
        })
    }
}
