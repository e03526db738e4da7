// In-memory store for the records of one loaded sales file
use shared::models::SalesRecord;

/// Loaded once, never mutated afterwards. Queries over it recompute from
/// these records on every call.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn new() -> Self {
        SalesDataset {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        SalesDataset { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
