use chrono::NaiveDateTime;

/// One booking lead, keyed by `lead_id`. Created or overwritten by the
/// importer, never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub lead_id: String,
    pub lead_date: NaiveDateTime,
    pub lead_checkin: NaiveDateTime,
    pub lead_checkout: NaiveDateTime,
    pub revenue: f64,
    pub commission: f64,
    pub hotel_id: Option<i64>,
    pub hotel_country: Option<String>,
    pub hotel_city: Option<String>,
}

impl BookingRecord {
    /// Display string for the hotel location, computed on read and never
    /// stored. The literal "None" when any contributing field is absent.
    pub fn location_status(&self) -> String {
        match (&self.hotel_city, &self.hotel_country, self.hotel_id) {
            (Some(city), Some(country), Some(id)) => {
                format!("{city}, {country} (ID: {id})")
            }
            _ => "None".to_string(),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ImportRun {
    pub id: Option<i64>,
    pub filename: String,
    pub success_count: i64,
    pub error_count: i64,
    pub imported_at: String,
}
