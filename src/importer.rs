use std::io::Read;

use tracing::warn;

use crate::parser::RowSchema;
use crate::store::BookingStore;

/// Run-level outcome of one import. Per-row failure detail goes to the
/// log sink only; callers get aggregate counts and, for a run that never
/// got past the header, a terminal message.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub success_count: usize,
    pub error_count: usize,
    pub error: Option<String>,
}

impl ImportReport {
    fn failed(message: String) -> Self {
        Self {
            success_count: 0,
            error_count: 1,
            error: Some(message),
        }
    }
}

/// Import delimited booking data from `input` into `store`, one row at a
/// time in file order.
///
/// Only an unreadable stream or a malformed header aborts the run. A bad
/// row is counted, logged with its raw content, and skipped; rows already
/// upserted stay committed regardless of what later rows do.
pub fn import_csv<R: Read, S: BookingStore>(store: &S, input: R) -> ImportReport {
    let mut rdr = csv::Reader::from_reader(input);

    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return ImportReport::failed(e.to_string()),
    };
    let schema = match RowSchema::from_headers(&headers) {
        Ok(schema) => schema,
        Err(e) => return ImportReport::failed(e.to_string()),
    };

    let mut report = ImportReport::default();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping unreadable record");
                report.error_count += 1;
                continue;
            }
        };
        match schema.parse_row(&record) {
            Ok(booking) => match store.upsert(&booking) {
                Ok(()) => report.success_count += 1,
                Err(e) => {
                    warn!(row = ?record, error = %e, "failed to persist row");
                    report.error_count += 1;
                }
            },
            Err(e) => {
                warn!(row = ?record, error = %e, "failed to parse row");
                report.error_count += 1;
            }
        }
    }
    report
}
