//! Raw concentration scale.
//!
//! Puts a single pollutant's concentration straight into a [`Category`]
//! without going through a sub-index, and gives the position of the value
//! on a gauge. Unlike the breakpoint table this scale covers CO.

use crate::calculate::index::validate_concentration;
use crate::category::Category;
use crate::error::AqiError;
use crate::model::Pollutant;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const SCALE_JSON: &str = include_str!("../../../tables/concentration_scale.json");

static SCALE: LazyLock<ConcentrationScale> = LazyLock::new(|| {
    serde_json::from_str(SCALE_JSON).expect("embedded concentration_scale.json is valid")
});

/// The gauge runs to the Severe bound plus this share.
const GAUGE_HEADROOM: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentrationScale {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub pollutants: BTreeMap<Pollutant, PollutantScale>,
}

/// Inclusive upper bounds of Good, Moderate, Poor, Unhealthy and Severe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutantScale {
    pub unit: String,
    pub thresholds: [Decimal; 5],
}

/// Category and gauge position of one concentration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantLevel {
    pub pollutant: Pollutant,
    pub concentration: f64,
    pub unit: String,
    pub category: Category,
    pub label: &'static str,
    pub color_hex: &'static str,
    /// Share of the gauge filled, 0.0 to 1.0.
    pub gauge: f64,
}

impl ConcentrationScale {
    pub fn thresholds(&self, pollutant: Pollutant) -> Option<&[Decimal; 5]> {
        self.pollutants.get(&pollutant).map(|s| &s.thresholds)
    }

    /// Full length of the gauge: the Severe bound plus 20%.
    pub fn gauge_max(&self, pollutant: Pollutant) -> Option<Decimal> {
        self.thresholds(pollutant).map(|t| t[4] * GAUGE_HEADROOM)
    }

    pub fn level(
        &self,
        pollutant: Pollutant,
        concentration: f64,
    ) -> Result<PollutantLevel, AqiError> {
        validate_concentration(pollutant, concentration)?;
        let scale = self
            .pollutants
            .get(&pollutant)
            .ok_or(AqiError::UnsupportedPollutant(pollutant))?;

        // Past the decimal range is past every bound.
        let (category, gauge) = match Decimal::from_f64(concentration) {
            Some(value) => {
                let category = scale
                    .thresholds
                    .iter()
                    .position(|bound| value <= *bound)
                    .map_or(Category::Hazardous, |i| Category::ALL[i]);
                let max = scale.thresholds[4] * GAUGE_HEADROOM;
                let gauge = value
                    .checked_div(max)
                    .map_or(1.0, |share| share.min(Decimal::ONE).to_f64().unwrap_or(1.0));
                (category, gauge)
            }
            None => (Category::Hazardous, 1.0),
        };

        Ok(PollutantLevel {
            pollutant,
            concentration,
            unit: scale.unit.clone(),
            category,
            label: category.label(),
            color_hex: category.color_hex(),
            gauge,
        })
    }
}

/// The built-in scale (PM2.5, PM10, SO2, NO2, O3, CO).
pub fn builtin() -> &'static ConcentrationScale {
    &SCALE
}

/// Category of a raw concentration on the built-in scale.
pub fn pollutant_category(
    pollutant: Pollutant,
    concentration: f64,
) -> Result<Category, AqiError> {
    Ok(builtin().level(pollutant, concentration)?.category)
}

/// Gauge fill for a raw concentration on the built-in scale, capped at 1.0.
pub fn gauge_fraction(pollutant: Pollutant, concentration: f64) -> Result<f64, AqiError> {
    Ok(builtin().level(pollutant, concentration)?.gauge)
}
