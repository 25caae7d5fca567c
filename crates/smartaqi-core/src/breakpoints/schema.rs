use crate::breakpoints::validate_table;
use crate::error::AqiError;
use crate::model::Pollutant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A breakpoint table: per-pollutant concentration bands mapped to index bands.
///
/// Deserializing runs [`validate_table`], so a table read from JSON is always
/// well-formed. Tables built field by field should be checked the same way;
/// computing against an unchecked table fails with an error rather than
/// panicking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TableFile")]
pub struct BreakpointTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Bands per pollutant. Pollutants missing here are unsupported by the table.
    pub pollutants: BTreeMap<Pollutant, PollutantBands>,
}

impl BreakpointTable {
    /// Bands for a pollutant in ascending order, if the table covers it.
    pub fn bands(&self, pollutant: Pollutant) -> Option<&[Breakpoint]> {
        self.pollutants
            .get(&pollutant)
            .map(|b| b.breakpoints.as_slice())
            .filter(|b| !b.is_empty())
    }

    pub fn supports(&self, pollutant: Pollutant) -> bool {
        self.bands(pollutant).is_some()
    }

    /// Display unit for a pollutant (defaults to µg/m³).
    pub fn unit(&self, pollutant: Pollutant) -> &str {
        self.pollutants
            .get(&pollutant)
            .and_then(|b| b.unit.as_deref())
            .unwrap_or(DEFAULT_UNIT)
    }
}

/// On-disk shape of a table, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct TableFile {
    name: String,
    #[serde(default)]
    description: Option<String>,
    version: String,
    pollutants: BTreeMap<Pollutant, PollutantBands>,
}

impl TryFrom<TableFile> for BreakpointTable {
    type Error = AqiError;

    fn try_from(file: TableFile) -> Result<Self, Self::Error> {
        let table = BreakpointTable {
            name: file.name,
            description: file.description,
            version: file.version,
            pollutants: file.pollutants,
        };
        validate_table(&table)?;
        Ok(table)
    }
}

pub const DEFAULT_UNIT: &str = "µg/m³";

/// Ordered bands for one pollutant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutantBands {
    #[serde(default)]
    pub unit: Option<String>,
    pub breakpoints: Vec<Breakpoint>,
    #[serde(default)]
    pub note: Option<String>,
}

/// One concentration range and the index range it maps onto.
///
/// Concentrations are decimals (quoted strings in JSON) so cut points such
/// as 35.4 are represented exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub low: Decimal,
    pub high: Decimal,
    pub index_low: u16,
    pub index_high: u16,
}

impl Breakpoint {
    pub fn contains(&self, concentration: Decimal) -> bool {
        self.low <= concentration && concentration <= self.high
    }
}
