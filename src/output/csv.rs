//! CSV dump of the business table

use crate::storage::BusinessRecord;
use std::io::Write;

/// Header row of the CSV dump
pub const CSV_HEADER: [&str; 6] = [
    "Name",
    "Address",
    "Phone Number",
    "Website",
    "Email",
    "Site Type",
];

/// Writes records as CSV, one row per business after the header
///
/// Fields are quoted only when they hold a separator, quote or line break.
pub fn write_csv<W: Write>(writer: W, records: &[BusinessRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for record in records {
        csv_writer.write_record([
            &record.name,
            &record.address,
            &record.phone_number,
            &record.website,
            &record.email,
            &record.site_type,
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
