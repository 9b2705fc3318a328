use std::io::{Read, Write};

use crate::error::Result;
use crate::models::BookingRecord;

pub const EXPORT_HEADER: [&str; 7] = [
    "LeadId",
    "LeadDate",
    "LeadCheckin",
    "LeadCheckout",
    "Revenue",
    "Commission",
    "Hotel Location",
];

const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write bookings as delimited data in the order given, with the derived
/// location string in the last column.
pub fn write_bookings_csv<W: Write>(writer: W, bookings: &[BookingRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;
    for booking in bookings {
        let lead_date = booking.lead_date.format(EXPORT_DATE_FORMAT).to_string();
        let lead_checkin = booking.lead_checkin.format(EXPORT_DATE_FORMAT).to_string();
        let lead_checkout = booking.lead_checkout.format(EXPORT_DATE_FORMAT).to_string();
        let revenue = format!("{:.2}", booking.revenue);
        let commission = format!("{:.2}", booking.commission);
        let location = booking.location_status();
        wtr.write_record([
            booking.lead_id.as_str(),
            lead_date.as_str(),
            lead_checkin.as_str(),
            lead_checkout.as_str(),
            revenue.as_str(),
            commission.as_str(),
            location.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Copy a delimited report verbatim, appending a `Processed` column set on
/// every row. Returns the number of data rows copied.
pub fn copy_with_processed_flag<R: Read, W: Write>(input: R, output: W) -> Result<usize> {
    let mut rdr = csv::Reader::from_reader(input);
    let mut wtr = csv::Writer::from_writer(output);

    let mut headers = rdr.headers()?.clone();
    headers.push_field("Processed");
    wtr.write_record(&headers)?;

    let mut copied = 0;
    for result in rdr.records() {
        let mut record = result?;
        record.push_field("true");
        wtr.write_record(&record)?;
        copied += 1;
    }
    wtr.flush()?;
    Ok(copied)
}
