//! Contact Book - demo driver
//!
//! Builds a small address book, saves a snapshot, runs the searches, and
//! exports a CSV table. Paths and batch size come from the environment.

use anyhow::{Context, Result};
use contact_book::{AddressBook, Birthday, Config, ContactRecord, PersonName, PhoneNumber};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout stays clean for results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(batch_size = config.batch_size.get(), "Configuration loaded");

    let mut book = AddressBook::new(config.batch_size);
    for (name, phone) in [
        ("Bill", "1234567890"),
        ("Billq", "1234567891"),
        ("Billw", "1234567892"),
        ("Bille", "1234567893"),
        ("Billr", "1234567894"),
    ] {
        let record = ContactRecord::new(PersonName::new(name)?, vec![PhoneNumber::new(phone)?], None);
        book.add_record(record);
    }

    match Birthday::new("12.08.1998") {
        Ok(bday) => book.get_mut("bill")?.set_birthday(Some(bday)),
        Err(e) => error!("Rejected birthday: {}", e),
    }

    book.save_snapshot(&config.snapshot_path)
        .with_context(|| format!("saving snapshot to {}", config.snapshot_path.display()))?;

    let by_number: Vec<&str> = book
        .search_by_number("34")
        .iter()
        .map(|r| r.name().as_str())
        .collect();
    println!("Phone contains \"34\": {:?}", by_number);

    let by_name: Vec<&str> = book
        .search_by_name("iLl")
        .iter()
        .map(|r| r.name().as_str())
        .collect();
    println!("Name contains \"iLl\": {:?}", by_name);

    let bill = book.get("Bill")?;
    assert_eq!(bill.phones()[0].as_str(), "1234567890");
    if let Some(days) = bill.days_to_birthday() {
        println!("Days until Bill's birthday: {}", days);
    }

    for (index, batch) in book.batches().enumerate() {
        let names: Vec<&str> = batch.iter().map(|(name, _)| *name).collect();
        println!("Batch {}: {:?}", index + 1, names);
    }

    book.export_csv(&config.csv_path)
        .with_context(|| format!("exporting CSV to {}", config.csv_path.display()))?;
    let rows = AddressBook::import_csv_rows(&config.csv_path)?;
    println!("CSV rows written: {}", rows.len());

    info!("Demo complete");
    Ok(())
}
