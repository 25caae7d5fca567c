use crate::advisory::{self, HealthTip};
use crate::breakpoints::schema::Breakpoint;
use crate::category::{self, Category};
use crate::model::Pollutant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a concentration landed relative to a pollutant's bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandMatch {
    /// Inside a band (`low <= c <= high`).
    InBand,
    /// Between one band's `high` and the next band's `low`.
    BetweenBands,
    /// Above the top band's `high`.
    AboveRange,
}

/// Sub-index evaluation for one pollutant, with the band that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubIndexResult {
    pub pollutant: Pollutant,
    /// Concentration as supplied by the caller.
    pub concentration: f64,
    /// Unit string for display.
    pub unit: String,
    /// Computed sub-index, or `None` when no band contains the concentration.
    pub sub_index: Option<u16>,
    pub matched: BandMatch,
    /// The band the concentration was matched to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Breakpoint>,
    /// Human-readable explanation of the computation.
    pub reason: String,
}

/// Aggregate of all sub-indices computed for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiSummary {
    /// Sub-index per pollutant that produced one.
    pub individual_aqis: BTreeMap<Pollutant, u16>,
    /// Maximum of `individual_aqis`.
    pub overall_aqi: u16,
    /// First pollutant, in declaration order, reaching `overall_aqi`.
    pub dominant_pollutant: Pollutant,
    /// Pollutants in the reading that the table has no bands for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsupported: Vec<Pollutant>,
    /// Pollutants whose concentration fell between two bands.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unbanded: Vec<Pollutant>,
    /// Pollutants above the top band that were left out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub out_of_range: Vec<Pollutant>,
    /// Pollutants above the top band that were clamped to its index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clamped: Vec<Pollutant>,
    /// Per-pollutant evaluations in declaration order.
    pub details: Vec<SubIndexResult>,
}

/// Everything the presentation layer shows for one reading.
#[derive(Debug, Clone, Serialize)]
pub struct AqiAssessment {
    #[serde(flatten)]
    pub summary: AqiSummary,
    pub category: Category,
    pub label: &'static str,
    pub color_hex: &'static str,
    pub health_tips: &'static [HealthTip; 3],
}

impl AqiAssessment {
    pub fn from_summary(summary: AqiSummary) -> Self {
        let category = category::classify(summary.overall_aqi);
        AqiAssessment {
            category,
            label: category.label(),
            color_hex: category.color_hex(),
            health_tips: advisory::health_tips(summary.overall_aqi),
            summary,
        }
    }

    pub fn overall_aqi(&self) -> u16 {
        self.summary.overall_aqi
    }
}
