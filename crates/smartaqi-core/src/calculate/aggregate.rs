use crate::breakpoints::schema::BreakpointTable;
use crate::breakpoints::MAX_INDEX;
use crate::calculate::index::validate_concentration;
use crate::calculate::outcome::{AqiSummary, BandMatch};
use crate::error::AqiError;
use crate::model::{Pollutant, PollutantReading};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What to do with a concentration above the table's top band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Leave the pollutant out and list it in `out_of_range`.
    #[default]
    Skip,
    /// Use the top band's index (500) and list the pollutant in `clamped`.
    Clamp,
    /// Fail the whole computation with [`AqiError::OutOfRange`].
    Reject,
}

impl fmt::Display for OutOfRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangePolicy::Skip => write!(f, "skip"),
            OutOfRangePolicy::Clamp => write!(f, "clamp"),
            OutOfRangePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for OutOfRangePolicy {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(OutOfRangePolicy::Skip),
            "clamp" => Ok(OutOfRangePolicy::Clamp),
            "reject" => Ok(OutOfRangePolicy::Reject),
            _ => Err(AqiError::ParseError(format!(
                "unknown out-of-range policy '{}'. Expected skip, clamp or reject",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
    pub out_of_range: OutOfRangePolicy,
}

impl BreakpointTable {
    /// Combine all computable sub-indices of a reading into one AQI.
    ///
    /// The overall AQI is the highest sub-index; ties go to the pollutant
    /// declared first (PM2.5 before PM10 before SO2 ...). Fails with
    /// [`AqiError::NoValidData`] when nothing could be computed.
    pub fn aggregate(
        &self,
        reading: &PollutantReading,
        options: &AggregateOptions,
    ) -> Result<AqiSummary, AqiError> {
        let mut individual_aqis = BTreeMap::new();
        let mut details = Vec::new();
        let mut unsupported = Vec::new();
        let mut unbanded = Vec::new();
        let mut out_of_range = Vec::new();
        let mut clamped = Vec::new();

        for (pollutant, concentration) in reading.iter() {
            validate_concentration(pollutant, concentration)?;

            if !self.supports(pollutant) {
                tracing::debug!(%pollutant, table = %self.name, "no breakpoints, skipping");
                unsupported.push(pollutant);
                continue;
            }

            let mut result = self.evaluate(pollutant, concentration)?;
            match (result.sub_index, result.matched) {
                (Some(index), _) => {
                    individual_aqis.insert(pollutant, index);
                }
                (None, BandMatch::AboveRange) => match options.out_of_range {
                    OutOfRangePolicy::Skip => {
                        tracing::debug!(%pollutant, concentration, "above top band, skipping");
                        out_of_range.push(pollutant);
                    }
                    OutOfRangePolicy::Clamp => {
                        let top = self.max_index(pollutant).unwrap_or(MAX_INDEX);
                        tracing::debug!(%pollutant, concentration, top, "above top band, clamping");
                        result.sub_index = Some(top);
                        result.reason = format!("{} -> clamped to {}", result.reason, top);
                        individual_aqis.insert(pollutant, top);
                        clamped.push(pollutant);
                    }
                    OutOfRangePolicy::Reject => {
                        return Err(AqiError::OutOfRange {
                            pollutant,
                            concentration,
                            max: self.max_concentration(pollutant).unwrap_or_default(),
                        });
                    }
                },
                (None, _) => {
                    tracing::debug!(%pollutant, concentration, "between bands, skipping");
                    unbanded.push(pollutant);
                }
            }
            details.push(result);
        }

        let (dominant_pollutant, overall_aqi) =
            dominant(&individual_aqis).ok_or(AqiError::NoValidData)?;

        Ok(AqiSummary {
            individual_aqis,
            overall_aqi,
            dominant_pollutant,
            unsupported,
            unbanded,
            out_of_range,
            clamped,
            details,
        })
    }
}

/// Highest sub-index, keeping the first pollutant on ties.
fn dominant(individual: &BTreeMap<Pollutant, u16>) -> Option<(Pollutant, u16)> {
    let mut best: Option<(Pollutant, u16)> = None;
    for (&pollutant, &index) in individual {
        match best {
            Some((_, current)) if index <= current => {}
            _ => best = Some((pollutant, index)),
        }
    }
    best
}
