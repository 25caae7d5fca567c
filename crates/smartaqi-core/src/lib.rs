pub mod advisory;
pub mod breakpoints;
pub mod calculate;
pub mod category;
pub mod error;
pub mod forecast;
pub mod model;
pub mod scale;

use advisory::HealthTip;
use breakpoints::builtin;
use calculate::{AggregateOptions, AqiAssessment, AqiSummary};
use category::Category;
use error::AqiError;
use model::{Pollutant, PollutantReading};

/// Sub-index of one pollutant against the built-in table.
///
/// `Ok(None)` means the concentration is above the table's top band.
pub fn compute_sub_index(
    pollutant: Pollutant,
    concentration: f64,
) -> Result<Option<u16>, AqiError> {
    builtin::cpcb().sub_index(pollutant, concentration)
}

/// Overall AQI and dominant pollutant for a reading, against the built-in
/// table, skipping out-of-range values.
pub fn aggregate(reading: &PollutantReading) -> Result<AqiSummary, AqiError> {
    builtin::cpcb().aggregate(reading, &AggregateOptions::default())
}

/// Category (label and color) for an overall AQI.
pub fn classify(aqi: u16) -> Category {
    category::classify(aqi)
}

/// The three health tips for an overall AQI.
pub fn health_tips(aqi: u16) -> &'static [HealthTip; 3] {
    advisory::health_tips(aqi)
}

/// Main API entry point: everything the UI shows for one reading.
pub fn assess(reading: &PollutantReading) -> Result<AqiAssessment, AqiError> {
    builtin::cpcb().assess(reading, &AggregateOptions::default())
}

/// Category of one raw concentration, without computing a sub-index.
pub fn pollutant_category(
    pollutant: Pollutant,
    concentration: f64,
) -> Result<Category, AqiError> {
    scale::pollutant_category(pollutant, concentration)
}
