use crate::model::Pollutant;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AqiError {
    #[error("unknown pollutant '{0}'. Expected one of: PM2.5, PM10, SO2, NO2, O3, CO, NH3")]
    UnknownPollutant(String),

    #[error("invalid concentration for {pollutant}: {value} (must be a finite number >= 0)")]
    InvalidConcentration { pollutant: Pollutant, value: f64 },

    #[error("{0} has no breakpoints in the active table")]
    UnsupportedPollutant(Pollutant),

    #[error("no valid pollutant values provided for AQI calculation")]
    NoValidData,

    #[error("{pollutant} concentration {concentration} exceeds the highest breakpoint ({max})")]
    OutOfRange {
        pollutant: Pollutant,
        concentration: f64,
        max: Decimal,
    },

    #[error("cannot interpolate {pollutant} = {concentration} in band {low}-{high}")]
    Interpolation {
        pollutant: Pollutant,
        concentration: f64,
        low: Decimal,
        high: Decimal,
    },

    #[error("failed to load breakpoint table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid breakpoint table: {0}")]
    TableInvalid(String),

    #[error("failed to parse input: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
