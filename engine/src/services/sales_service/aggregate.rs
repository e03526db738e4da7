// Aggregation pass: group totals plus skipped-row diagnostics
use std::collections::HashMap;

use shared::models::{RowDiagnostic, SalesSummary, SkipReason};

use super::helpers::parse_amount;
use crate::config::EngineSettings;
use crate::data::dataset::SalesDataset;

/// Walks every record once and accumulates the amount column into a total
/// per group value. Rows missing a required column or carrying an
/// unparseable amount are skipped, logged, and reported in the summary;
/// they never create a group key of their own.
///
/// Recomputed from scratch on every call. The dataset is not touched.
pub fn totals_with_diagnostics(dataset: &SalesDataset, settings: &EngineSettings) -> SalesSummary {
    let mut totals: HashMap<String, f64> = HashMap::new();
    let mut skipped: Vec<RowDiagnostic> = Vec::new();

    for (idx, record) in dataset.records().iter().enumerate() {
        let row = idx + 1; // 1-based over data rows, header excluded

        let group = match record.get(&settings.group_column) {
            Some(g) => g,
            None => {
                tracing::warn!(row, field = %settings.group_column, "Skipping row with missing column");
                skipped.push(RowDiagnostic {
                    row,
                    reason: SkipReason::MissingField {
                        field: settings.group_column.clone(),
                    },
                });
                continue;
            }
        };

        let raw_amount = match record.get(&settings.amount_column) {
            Some(v) => v,
            None => {
                tracing::warn!(row, field = %settings.amount_column, "Skipping row with missing column");
                skipped.push(RowDiagnostic {
                    row,
                    reason: SkipReason::MissingField {
                        field: settings.amount_column.clone(),
                    },
                });
                continue;
            }
        };

        let amount = match parse_amount(raw_amount) {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(row, field = %settings.amount_column, value = %raw_amount, error = %e, "Skipping row with malformed amount");
                skipped.push(RowDiagnostic {
                    row,
                    reason: SkipReason::MalformedAmount {
                        field: settings.amount_column.clone(),
                        value: raw_amount.to_string(),
                    },
                });
                continue;
            }
        };

        *totals.entry(group.to_string()).or_insert(0.0) += amount;
    }

    SalesSummary { totals, skipped }
}
