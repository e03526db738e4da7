// Sales analytics service: owns the loaded dataset and answers
// totals-by-province queries over it.
use std::collections::HashMap;
use std::path::Path;

use shared::models::{SalesRecord, SalesSummary};

use crate::config::EngineSettings;
use crate::data::dataset::SalesDataset;
use crate::data::sales_file::SalesFileParser;

pub mod aggregate;
pub mod helpers;

pub struct SalesAnalyzer {
    dataset: SalesDataset,
    settings: EngineSettings,
}

impl SalesAnalyzer {
    /// Loads the file once with the default settings (`|`-delimited,
    /// grouped by `PROVINCIA`, summing `TOTAL_VENTAS`).
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::from_file_with_settings(path, EngineSettings::default())
    }

    /// Loads the file once. A missing or unreadable file is not an error:
    /// the analyzer starts with an empty dataset and the failure is
    /// logged, so every query simply answers over zero records.
    pub fn from_file_with_settings(path: impl AsRef<Path>, settings: EngineSettings) -> Self {
        let path = path.as_ref();
        let dataset = match SalesFileParser::load_records(path, settings.delimiter_byte()) {
            Ok(records) => {
                tracing::info!(path = %path.display(), rows = records.len(), "Loaded sales records");
                SalesDataset::from_records(records)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read sales file; continuing with an empty dataset");
                SalesDataset::new()
            }
        };
        SalesAnalyzer { dataset, settings }
    }

    /// Builds an analyzer over records already in memory.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        SalesAnalyzer {
            dataset: SalesDataset::from_records(records),
            settings: EngineSettings::default(),
        }
    }

    /// Totals per group together with the rows that were skipped and why.
    pub fn summary(&self) -> SalesSummary {
        aggregate::totals_with_diagnostics(&self.dataset, &self.settings)
    }

    /// Mapping from group key to accumulated total over the well-formed
    /// records.
    pub fn totals_by_group(&self) -> HashMap<String, f64> {
        self.summary().totals
    }

    /// Total for one group; 0.0 when the group never appears, which is
    /// indistinguishable from a group with no recorded sales.
    pub fn total_for_group(&self, name: &str) -> f64 {
        self.totals_by_group().get(name).copied().unwrap_or(0.0)
    }

    pub fn dataset(&self) -> &SalesDataset {
        &self.dataset
    }
}
