//! JSON line output for fetched records.

use std::io::Write;

use issuewatch::FetchError;
use serde::Serialize;

/// Writes each record as one compact JSON document per line.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when serialisation or writing fails.
pub fn write_json_lines<W, T>(writer: &mut W, records: &[T]) -> Result<(), FetchError>
where
    W: Write,
    T: Serialize,
{
    for record in records {
        serde_json::to_writer(&mut *writer, record).map_err(|error| io_error(&error))?;
        writeln!(writer).map_err(|error| io_error(&error))?;
    }
    writer.flush().map_err(|error| io_error(&error))
}

fn io_error(error: &impl ToString) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
