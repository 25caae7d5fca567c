//! Multi-day pollutant predictions and daily AQI series.

use crate::breakpoints::schema::BreakpointTable;
use crate::calculate::aggregate::AggregateOptions;
use crate::calculate::outcome::AqiAssessment;
use crate::category::{self, Category};
use crate::error::AqiError;
use crate::model::{Pollutant, PollutantReading};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prediction response: one series of daily concentrations per pollutant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(rename = "PM25_pred", default)]
    pub pm25: Option<Vec<f64>>,
    #[serde(rename = "PM10_pred", default)]
    pub pm10: Option<Vec<f64>>,
    #[serde(rename = "NO2_pred", default)]
    pub no2: Option<Vec<f64>>,
    #[serde(rename = "SO2_pred", default)]
    pub so2: Option<Vec<f64>>,
    #[serde(rename = "O3_pred", default)]
    pub o3: Option<Vec<f64>>,
}

impl ForecastPayload {
    fn series(&self) -> Vec<(Pollutant, &[f64])> {
        [
            (Pollutant::Pm25, &self.pm25),
            (Pollutant::Pm10, &self.pm10),
            (Pollutant::So2, &self.so2),
            (Pollutant::No2, &self.no2),
            (Pollutant::O3, &self.o3),
        ]
        .into_iter()
        .filter_map(|(p, s)| s.as_deref().map(|s| (p, s)))
        .collect()
    }

    /// Number of forecast days. All present series must agree.
    pub fn days(&self) -> Result<usize, AqiError> {
        let series = self.series();
        let Some((_, first)) = series.first() else {
            return Ok(0);
        };
        let days = first.len();
        for (pollutant, values) in &series {
            if values.len() != days {
                return Err(AqiError::ParseError(format!(
                    "forecast series length mismatch: {} has {} values, expected {}",
                    pollutant,
                    values.len(),
                    days
                )));
            }
        }
        Ok(days)
    }

    /// One reading per forecast day, in day order.
    pub fn readings(&self) -> Result<Vec<PollutantReading>, AqiError> {
        let days = self.days()?;
        let series = self.series();
        Ok((0..days)
            .map(|day| series.iter().map(|(p, values)| (*p, values[day])).collect())
            .collect())
    }
}

/// Outcome for one forecast day.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    /// 1 for tomorrow, 2 for the day after, ...
    pub day: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AqiAssessment>,
    /// Why no assessment could be made for this day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl BreakpointTable {
    /// Assess every day of a forecast.
    ///
    /// A day without computable data is reported as unavailable. Invalid
    /// concentrations and rejected out-of-range values fail the whole call.
    pub fn forecast(
        &self,
        payload: &ForecastPayload,
        options: &AggregateOptions,
    ) -> Result<Vec<ForecastDay>, AqiError> {
        let readings = payload.readings()?;
        let mut days = Vec::with_capacity(readings.len());

        for (i, reading) in readings.iter().enumerate() {
            let day = i + 1;
            match self.assess(reading, options) {
                Ok(assessment) => days.push(ForecastDay {
                    day,
                    assessment: Some(assessment),
                    unavailable: None,
                }),
                Err(AqiError::NoValidData) => {
                    tracing::debug!(day, "no valid data for forecast day");
                    days.push(ForecastDay {
                        day,
                        assessment: None,
                        unavailable: Some(AqiError::NoValidData.to_string()),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(days)
    }
}

/// Overview of a daily AQI series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub days: usize,
    /// Mean AQI, rounded half-up.
    pub average: u16,
    pub min: u16,
    pub max: u16,
    /// Number of days per category; categories without days are omitted.
    pub distribution: BTreeMap<Category, usize>,
}

/// Summarise a daily AQI series. `None` for an empty series.
pub fn summarize(series: &[u16]) -> Option<SeriesSummary> {
    let min = *series.iter().min()?;
    let max = *series.iter().max()?;

    let total: u64 = series.iter().map(|&v| u64::from(v)).sum();
    let average = (Decimal::from(total) / Decimal::from(series.len()))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u16()
        .unwrap_or(max);

    let mut distribution = BTreeMap::new();
    for &aqi in series {
        *distribution.entry(category::classify(aqi)).or_insert(0) += 1;
    }

    Some(SeriesSummary {
        days: series.len(),
        average,
        min,
        max,
        distribution,
    })
}

/// Daily overall AQI values of a forecast, skipping unavailable days.
pub fn overall_series(days: &[ForecastDay]) -> Vec<u16> {
    days.iter()
        .filter_map(|d| d.assessment.as_ref().map(|a| a.overall_aqi()))
        .collect()
}
