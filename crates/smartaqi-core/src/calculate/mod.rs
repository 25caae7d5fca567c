pub mod aggregate;
pub mod index;
pub mod outcome;

pub use aggregate::{AggregateOptions, OutOfRangePolicy};
pub use outcome::{AqiAssessment, AqiSummary, BandMatch, SubIndexResult};

use crate::breakpoints::schema::BreakpointTable;
use crate::error::AqiError;
use crate::model::PollutantReading;

impl BreakpointTable {
    /// Aggregate a reading, then attach its category, color and health tips.
    pub fn assess(
        &self,
        reading: &PollutantReading,
        options: &AggregateOptions,
    ) -> Result<AqiAssessment, AqiError> {
        let summary = self.aggregate(reading, options)?;
        Ok(AqiAssessment::from_summary(summary))
    }
}
