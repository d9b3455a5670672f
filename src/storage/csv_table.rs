//! CSV table export and import.
//!
//! The table has one row per contact and three columns: `name`, `birthday`
//! (empty when absent), and `phones`, which holds the whole phone list
//! rendered as `[1234567890, 0987654321]` in a single cell.

use crate::domain::{Birthday, Clock, PersonName, PhoneNumber, ValidationError};
use crate::error::BookResult;
use crate::models::ContactRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Column names, in order.
pub const CSV_HEADERS: [&str; 3] = ["name", "birthday", "phones"];

/// One data row of the table as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub name: String,
    pub birthday: String,
    pub phones: String,
}

impl From<&ContactRecord> for CsvRow {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: record.name().to_string(),
            birthday: record
                .birthday()
                .map(ToString::to_string)
                .unwrap_or_default(),
            phones: render_phones(record.phones()),
        }
    }
}

impl CsvRow {
    /// Rebuild a validated record from the row's text.
    pub fn to_record(&self, clock: &dyn Clock) -> Result<ContactRecord, ValidationError> {
        let name = PersonName::new(self.name.as_str())?;
        let birthday = match self.birthday.trim() {
            "" => None,
            raw => Some(Birthday::parse(raw, clock)?),
        };
        let phones = parse_phones(&self.phones)?;
        Ok(ContactRecord::new(name, phones, birthday))
    }
}

/// Result of turning a CSV table back into records.
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Records rebuilt from valid rows, in file order.
    pub records: Vec<ContactRecord>,
    /// Number of rows dropped because a field failed validation.
    pub skipped: usize,
}

/// Render a phone list the way it appears in the `phones` column.
pub fn render_phones(phones: &[PhoneNumber]) -> String {
    let joined = phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Parse the `phones` column back into validated phone numbers.
pub fn parse_phones(cell: &str) -> Result<Vec<PhoneNumber>, ValidationError> {
    let inner = cell.trim();
    let inner = inner
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(inner);

    inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PhoneNumber::new)
        .collect()
}

/// Write the table for `records`, replacing any existing file at `path`.
pub fn export<'a, I>(path: &Path, records: I) -> BookResult<()>
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADERS)?;

    let mut rows = 0usize;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
        rows += 1;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows, "CSV exported");
    Ok(())
}

/// Read the table back as raw rows keyed by column name.
pub fn import_rows(path: &Path) -> BookResult<Vec<HashMap<String, String>>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize::<HashMap<String, String>>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Read the table back into validated records, skipping rows that fail
/// validation.
pub fn import_records(path: &Path, clock: &dyn Clock) -> BookResult<CsvImport> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut import = CsvImport::default();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        match row.to_record(clock) {
            Ok(record) => import.records.push(record),
            Err(e) => {
                tracing::warn!(row = index + 1, name = %row.name, error = %e, "Skipping CSV row");
                import.skipped += 1;
            }
        }
    }

    Ok(import)
}
