use csv::ReaderBuilder;
use shared::models::SalesRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::EngineError;

pub struct SalesFileParser;

impl SalesFileParser {
    // File layout: first line is the header naming the columns, e.g.
    //   PROVINCIA|CANTON|TOTAL_VENTAS
    //   Guayas|Guayaquil|100.50
    /// Reads a delimited file into one `SalesRecord` per data row,
    /// preserving row order. Values stay raw strings; nothing is parsed
    /// or validated here beyond the record structure itself.
    ///
    /// Rows shorter than the header produce records carrying only the
    /// columns that were present; surplus fields are dropped.
    pub fn load_records(file_path: &Path, delimiter: u8) -> Result<Vec<SalesRecord>, EngineError> {
        let file = File::open(file_path)?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let record: SalesRecord = headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            records.push(record);
        }
        tracing::debug!(path = %file_path.display(), rows = records.len(), "Parsed sales file");
        Ok(records)
    }
}
