use std::collections::BTreeSet;

use chrono::Local;
use serde::Serialize;

use super::import::Import;

/// Payload format version understood by the bill-tracking app.
pub const FORMAT_VERSION: &str = "1.0";

/// The six logical fields of one CSV row, trimmed and defaulted but not yet
/// validated or normalized.
#[derive(Debug, Default)]
pub struct RawBill {
    pub name: String,
    pub category: String,
    pub due_date: String,
    pub amount: String,
    pub recurrence: String,
    pub notes: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub name: String,
    pub category: String,
    pub due_date: String,
    pub amount_due: f64,
    pub recurrence: String,
    pub notes: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload<'a> {
    pub export_date: String,
    pub version: &'static str,
    pub bills: &'a [BillRecord],
    pub custom_categories: &'a BTreeSet<String>,
}

impl<'a> From<&'a Import> for ImportPayload<'a> {
    fn from(import: &'a Import) -> ImportPayload<'a> {
        ImportPayload {
            export_date: export_timestamp(),
            version: FORMAT_VERSION,
            bills: import.bills(),
            custom_categories: import.categories(),
        }
    }
}

/// Local-clock ISO-8601 timestamp with a literal `Z` suffix. The suffix is
/// what the bill app expects; no UTC conversion takes place.
pub fn export_timestamp() -> String {
    let mut stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    stamp.push('Z');
    stamp
}
