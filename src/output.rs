use serde::Serialize;
use std::path::PathBuf;

/// JSON output mode for machine-readable comparison results
/// Uses NDJSON format (newline-delimited JSON)
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompareEvent {
    Report {
        file1: PathBuf,
        file2: PathBuf,
        offset: u64,
        /// Compared length in bytes; `null` means unbounded
        size: Option<u64>,
        blocks: Vec<BlockRow>,
    },
    Warning {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BlockRow {
    pub block_size: u64,
    pub mismatched: u64,
    pub matched: u64,
    pub total: u64,
    pub percent_matched: f64,
}

impl CompareEvent {
    /// Emit this event as JSON to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }
}
