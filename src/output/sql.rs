//! SQL dump of the business table

use crate::storage::BusinessRecord;
use std::io::{self, Write};

/// Writes one `INSERT` statement per record
///
/// Values are inlined as single-quoted literals with embedded quotes
/// doubled, so the dump can be replayed safely.
pub fn write_sql<W: Write>(writer: &mut W, records: &[BusinessRecord]) -> io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "INSERT INTO businesses (name, address, phone_number, website, email, site_type) \
             VALUES ('{}', '{}', '{}', '{}', '{}', '{}');",
            escape_sql_literal(&record.name),
            escape_sql_literal(&record.address),
            escape_sql_literal(&record.phone_number),
            escape_sql_literal(&record.website),
            escape_sql_literal(&record.email),
            escape_sql_literal(&record.site_type),
        )?;
    }
    Ok(())
}

/// Escapes a value for use inside a single-quoted SQL literal
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}
