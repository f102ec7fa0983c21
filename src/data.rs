use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use csv::StringRecord;
use log::{error, warn};

use crate::billing::import::Import;
use crate::billing::record::{ImportPayload, RawBill};
use crate::billing::RowError;

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Category,
    DueDate,
    Amount,
    Recurrence,
    Notes,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::DueDate => "due date",
            Field::Amount => "amount",
            Field::Recurrence => "recurrence",
            Field::Notes => "notes",
        }
    }

    fn default(self) -> &'static str {
        match self {
            Field::Category => "Other",
            Field::Amount => "0",
            Field::Recurrence => "Monthly",
            Field::Name | Field::DueDate | Field::Notes => "",
        }
    }
}

/// Maps normalized header names (trimmed, lower-cased) to column indices so
/// field lookup is insensitive to case and surrounding whitespace in the
/// source file.
struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    fn new(headers: &StringRecord) -> HeaderIndex {
        let columns = headers
            .iter()
            .enumerate()
            // The first header may still carry the UTF-8 BOM.
            .map(|(column, header)| {
                (
                    header.trim_start_matches('\u{feff}').trim().to_lowercase(),
                    column,
                )
            })
            .collect();

        HeaderIndex { columns }
    }

    /// Resolves one logical field from a row. A missing column, a row too
    /// short to reach it, and an empty cell all yield the field's default.
    fn field(&self, record: &StringRecord, field: Field) -> String {
        self.columns
            .get(field.key())
            .and_then(|&column| record.get(column))
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .unwrap_or(field.default())
            .to_string()
    }

    fn raw_bill(&self, record: &StringRecord) -> RawBill {
        RawBill {
            name: self.field(record, Field::Name),
            category: self.field(record, Field::Category),
            due_date: self.field(record, Field::DueDate),
            amount: self.field(record, Field::Amount),
            recurrence: self.field(record, Field::Recurrence),
            notes: self.field(record, Field::Notes),
        }
    }
}

pub fn process_csv(file_path: &str) -> Result<Import> {
    let file = File::open(file_path).with_context(|| format!("cannot open '{}'", file_path))?;
    process_reader(file)
}

pub fn process_reader<R: Read>(reader: R) -> Result<Import> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("cannot read CSV header")?
        .clone();
    let headers = HeaderIndex::new(&headers);

    let mut import = Import::new();
    for (i, record) in csv_reader.records().enumerate() {
        let row = i + 1;
        match record {
            Ok(record) => match import.accept(row, headers.raw_bill(&record)) {
                Ok(()) => {}
                Err(err @ RowError::MissingRequired) => warn!("Skipping row {}: {}", row, err),
                Err(err) => error!("Error processing row {}: {}", row, err),
            },
            Err(err) => error!("Error processing row {}: {}", row, err),
        }
    }

    Ok(import)
}

pub fn export_json(file_path: &str, import: &Import) -> Result<()> {
    let payload = ImportPayload::from(import);
    let file = File::create(file_path).with_context(|| format!("cannot write '{}'", file_path))?;
    serde_json::to_writer_pretty(file, &payload)?;

    Ok(())
}
