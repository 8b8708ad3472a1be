use crate::domain::TradeRecord;
use std::collections::HashMap;
use tracing::debug;

/// A parsed dataset row: column name to raw cell text.
pub type RawRow = HashMap<String, String>;

const YEAR_COLUMNS: &[&str] = &["year", "Year"];
const EXPORTER_COLUMNS: &[&str] = &["exporter", "Exporter"];
const IMPORTER_COLUMNS: &[&str] = &["importer", "Importer"];
const VALUE_COLUMNS: &[&str] = &[
    "value",
    "Value (1000USD)",
    "Export value, where quarantined",
    "Import value, where quarantined",
];
const WEIGHT_COLUMNS: &[&str] = &[
    "weight",
    "Weight (1000kg)",
    "Export weight, where quarantined",
    "Import weight, where quarantined",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub kept: usize,
    pub dropped: usize,
}

pub fn normalize_rows(rows: &[RawRow]) -> Vec<TradeRecord> {
    normalize_rows_with_report(rows).0
}

pub fn normalize_rows_with_report(rows: &[RawRow]) -> (Vec<TradeRecord>, NormalizeReport) {
    let records: Vec<TradeRecord> = rows.iter().filter_map(normalize_row).collect();
    let report = NormalizeReport {
        kept: records.len(),
        dropped: rows.len() - records.len(),
    };

    debug!(
        kept = report.kept,
        dropped = report.dropped,
        "normalized trade rows"
    );

    (records, report)
}

/// Returns `None` for rows that carry no trade: missing parties or a
/// non-positive value.
pub fn normalize_row(row: &RawRow) -> Option<TradeRecord> {
    let exporter = text_field(row, EXPORTER_COLUMNS)?;
    let importer = text_field(row, IMPORTER_COLUMNS)?;

    let value = first_non_zero(row, VALUE_COLUMNS);
    if value <= 0.0 {
        return None;
    }

    let year = first_non_zero(row, YEAR_COLUMNS).trunc() as i32;
    let weight = first_non_zero(row, WEIGHT_COLUMNS).max(0.0);

    Some(TradeRecord {
        year,
        exporter,
        importer,
        value,
        weight,
    })
}

/// Parses a cell as a number, ignoring thousands separators. Anything
/// unparseable or non-finite is 0.
pub fn tolerant_cast(raw: &str) -> f64 {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn text_field(row: &RawRow, columns: &[&str]) -> Option<String> {
    columns
        .iter()
        .filter_map(|column| row.get(*column))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn first_non_zero(row: &RawRow, columns: &[&str]) -> f64 {
    columns
        .iter()
        .filter_map(|column| row.get(*column))
        .map(|value| tolerant_cast(value))
        .find(|value| *value != 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn canonical_columns_are_read() {
        let record = normalize_row(&row(&[
            ("year", "2020"),
            ("exporter", "Brazil"),
            ("importer", "Germany"),
            ("value", "100"),
        ]));

        assert_eq!(
            record,
            Some(TradeRecord {
                year: 2020,
                exporter: "Brazil".to_string(),
                importer: "Germany".to_string(),
                value: 100.0,
                weight: 0.0,
            })
        );
    }

    #[test]
    fn resource_trade_columns_fall_back_in_order() {
        let record = normalize_row(&row(&[
            ("Year", "2017"),
            ("Exporter", " Colombia "),
            ("Importer", "Japan"),
            ("Value (1000USD)", ""),
            ("Export value, where quarantined", "0"),
            ("Import value, where quarantined", "42.5"),
            ("Weight (1000kg)", "7"),
        ]));

        let record = record.expect("row has an import value");
        assert_eq!(record.year, 2017);
        assert_eq!(record.exporter, "Colombia");
        assert!((record.value - 42.5).abs() < f64::EPSILON);
        assert!((record.weight - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rows_without_trade_are_dropped() {
        let rows = vec![
            row(&[("exporter", "Brazil"), ("importer", "USA"), ("value", "0")]),
            row(&[("exporter", "Brazil"), ("importer", "USA"), ("value", "-5")]),
            row(&[("exporter", "Brazil"), ("importer", "USA"), ("value", "n/a")]),
            row(&[("exporter", ""), ("importer", "USA"), ("value", "5")]),
            row(&[("exporter", "Brazil"), ("value", "5")]),
            row(&[("exporter", "Brazil"), ("importer", "USA"), ("value", "5")]),
        ];

        let (records, report) = normalize_rows_with_report(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(report, NormalizeReport { kept: 1, dropped: 5 });
    }

    #[test]
    fn tolerant_cast_defaults_to_zero() {
        assert!((tolerant_cast(" 12.5 ") - 12.5).abs() < f64::EPSILON);
        assert!((tolerant_cast("1,234.5") - 1234.5).abs() < f64::EPSILON);
        assert!(tolerant_cast("abc").abs() < f64::EPSILON);
        assert!(tolerant_cast("").abs() < f64::EPSILON);
        assert!(tolerant_cast("NaN").abs() < f64::EPSILON);
        assert!(tolerant_cast("inf").abs() < f64::EPSILON);
    }
}
