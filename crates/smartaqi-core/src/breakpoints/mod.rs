pub mod builtin;
pub mod schema;

use crate::error::AqiError;
use rust_decimal::Decimal;
use schema::{BreakpointTable, TableFile};
use std::path::Path;

/// Highest index value a band may map to.
pub const MAX_INDEX: u16 = 500;

/// Load a breakpoint table from a JSON file.
pub fn load_table(path: &Path) -> Result<BreakpointTable, AqiError> {
    let content = std::fs::read_to_string(path).map_err(|e| AqiError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table = parse_table(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        name = %table.name,
        pollutants = table.pollutants.len(),
        "loaded breakpoint table"
    );
    Ok(table)
}

/// Parse a breakpoint table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<BreakpointTable, AqiError> {
    let file: TableFile = serde_json::from_str(json).map_err(|e| AqiError::TableLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    BreakpointTable::try_from(file)
}

/// Parse a breakpoint table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<BreakpointTable, AqiError> {
    let file: TableFile = serde_json::from_str(json)?;
    BreakpointTable::try_from(file)
}

/// Validate that a table is well-formed.
///
/// Per pollutant the bands must start at concentration 0, ascend strictly in
/// both concentration and index, never overlap, and stay within 0..=500.
pub fn validate_table(table: &BreakpointTable) -> Result<(), AqiError> {
    if table.pollutants.is_empty() {
        return Err(AqiError::TableInvalid(
            "pollutants must not be empty".into(),
        ));
    }

    for (pollutant, bands) in &table.pollutants {
        let bands = &bands.breakpoints;
        let Some(first) = bands.first() else {
            return Err(AqiError::TableInvalid(format!(
                "{} has no breakpoints",
                pollutant
            )));
        };

        if first.low != Decimal::ZERO {
            return Err(AqiError::TableInvalid(format!(
                "{}: first band must start at 0, starts at {}",
                pollutant, first.low
            )));
        }

        for (i, band) in bands.iter().enumerate() {
            if band.low >= band.high {
                return Err(AqiError::TableInvalid(format!(
                    "{} band {}: low {} must be below high {}",
                    pollutant,
                    i + 1,
                    band.low,
                    band.high
                )));
            }
            if band.index_low > band.index_high {
                return Err(AqiError::TableInvalid(format!(
                    "{} band {}: index_low {} exceeds index_high {}",
                    pollutant,
                    i + 1,
                    band.index_low,
                    band.index_high
                )));
            }
            if band.index_high > MAX_INDEX {
                return Err(AqiError::TableInvalid(format!(
                    "{} band {}: index_high {} exceeds {}",
                    pollutant,
                    i + 1,
                    band.index_high,
                    MAX_INDEX
                )));
            }
        }

        for (i, pair) in bands.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.low <= prev.high {
                return Err(AqiError::TableInvalid(format!(
                    "{} band {} starts at {}, overlapping the previous band ending at {}",
                    pollutant,
                    i + 2,
                    next.low,
                    prev.high
                )));
            }
            if next.index_low <= prev.index_high {
                return Err(AqiError::TableInvalid(format!(
                    "{} band {}: index_low {} must be above the previous index_high {}",
                    pollutant,
                    i + 2,
                    next.index_low,
                    prev.index_high
                )));
            }
        }
    }

    Ok(())
}
