use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One parsed row of a sales file: column name mapped to the raw string
/// value as it appeared in the file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    fields: HashMap<String, String>,
}

impl SalesRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        SalesRecord { fields }
    }

    /// Raw value for a column, `None` when the row did not carry it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for SalesRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        SalesRecord {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Why a row was left out of an aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The row did not carry a required column.
    MissingField { field: String },
    /// The amount column was present but not a parseable number.
    MalformedAmount { field: String, value: String },
}

/// A skipped row: 1-based position among the data rows (header excluded)
/// plus the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    pub row: usize,
    pub reason: SkipReason,
}

/// Result of one aggregation pass: accumulated totals per group key,
/// alongside the rows that could not contribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub totals: HashMap<String, f64>,
    pub skipped: Vec<RowDiagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> SalesRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_returns_raw_value_by_column_name() {
        let r = record(&[("PROVINCIA", "Guayas"), ("TOTAL_VENTAS", "100.5")]);
        assert_eq!(r.get("PROVINCIA"), Some("Guayas"));
        assert_eq!(r.get("TOTAL_VENTAS"), Some("100.5"));
        assert_eq!(r.get("CANTON"), None);
    }

    #[test]
    fn empty_record_reports_empty() {
        let r = SalesRecord::default();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn columns_lists_every_field() {
        let r = record(&[("PROVINCIA", "Guayas"), ("TOTAL_VENTAS", "100.5")]);
        let mut columns: Vec<&str> = r.columns().collect();
        columns.sort_unstable();
        assert_eq!(columns, vec!["PROVINCIA", "TOTAL_VENTAS"]);
    }

    #[test]
    fn skip_reasons_compare_by_content() {
        let a = SkipReason::MissingField {
            field: "TOTAL_VENTAS".to_string(),
        };
        let b = SkipReason::MissingField {
            field: "TOTAL_VENTAS".to_string(),
        };
        assert_eq!(a, b);
    }
}
