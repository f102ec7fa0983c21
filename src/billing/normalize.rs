use chrono::NaiveDate;

use super::RowError;

/// Best-effort normalization of a due date into `YYYY-MM-DD`.
///
/// The separator selects the pattern family and the year token width selects
/// the year form: `YY-MM-DD` vs `YYYY-MM-DD`, `MM/DD/YY` vs `MM/DD/YYYY`,
/// compact `YYYYMMDD` when no separator is present. Two-digit years expand
/// with chrono's pivot: 00-68 become 20xx, 69-99 become 19xx.
///
/// Returns `None` when the string fails the selected pattern; callers keep
/// the raw value verbatim in that case.
pub fn normalize_due_date(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return Some(String::new());
    }

    let format = if raw.contains('-') {
        let year = raw.split('-').next().unwrap_or_default();
        if year.len() == 2 {
            "%y-%m-%d"
        } else {
            "%Y-%m-%d"
        }
    } else if raw.contains('/') {
        let year = raw.rsplit('/').next().unwrap_or_default();
        if year.len() == 2 {
            "%m/%d/%y"
        } else {
            "%m/%d/%Y"
        }
    } else {
        "%Y%m%d"
    };

    NaiveDate::parse_from_str(raw, format)
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Parses a money amount after stripping `$` and thousands separators.
pub fn parse_amount(raw: &str) -> Result<f64, RowError> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();

    cleaned.parse().map_err(|source| RowError::InvalidAmount {
        raw: raw.to_string(),
        source,
    })
}
