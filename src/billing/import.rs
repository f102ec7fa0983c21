use std::collections::BTreeSet;

use getset::Getters;
use log::warn;

use super::normalize::{normalize_due_date, parse_amount};
use super::record::{BillRecord, RawBill};
use super::RowError;

/// Accumulates the outcome of one conversion run: accepted bills in input
/// order plus the distinct categories seen along the way.
#[derive(Default, Getters)]
pub struct Import {
    #[getset(get = "pub")]
    bills: Vec<BillRecord>,
    #[getset(get = "pub")]
    categories: BTreeSet<String>,
}

impl Import {
    pub fn new() -> Import {
        Import {
            bills: Vec::new(),
            categories: BTreeSet::new(),
        }
    }

    /// Validates and normalizes one extracted row. `row` is the 1-indexed
    /// row number, used for diagnostics only.
    ///
    /// The category is recorded before the amount is validated, so a row
    /// later rejected for its amount still contributes its category to the
    /// set. Compatibility behavior, kept on purpose.
    pub fn accept(&mut self, row: usize, raw: RawBill) -> Result<(), RowError> {
        if raw.name.is_empty() || raw.due_date.is_empty() {
            return Err(RowError::MissingRequired);
        }

        if !raw.category.is_empty() {
            self.categories.insert(raw.category.clone());
        }

        let due_date = match normalize_due_date(&raw.due_date) {
            Some(date) => date,
            None => {
                warn!(
                    "Warning row {}: could not parse date {:?}, using as is",
                    row, raw.due_date
                );
                raw.due_date
            }
        };

        let amount_due = parse_amount(&raw.amount)?;

        self.bills.push(BillRecord {
            name: raw.name,
            category: raw.category,
            due_date,
            amount_due,
            recurrence: raw.recurrence,
            notes: raw.notes,
        });

        Ok(())
    }
}
