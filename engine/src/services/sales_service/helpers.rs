// Helper functions for the sales service
use anyhow::{anyhow, Result};
use std::str::FromStr;

// Parses amounts like "100.5" or " 250.25 " into f64. Plain `.` decimal
// separator, no thousands separators.
pub fn parse_amount(s: &str) -> Result<f64> {
    f64::from_str(s.trim()).map_err(|e| anyhow!("Failed to parse amount '{}': {}", s, e))
}
