//! File persistence for address book contents.
//!
//! - **snapshot**: length-prefixed binary frames appended on every save
//! - **csv_table**: a human-readable three-column table

pub mod csv_table;
pub mod snapshot;

pub use csv_table::{CsvImport, CsvRow, CSV_HEADERS};
