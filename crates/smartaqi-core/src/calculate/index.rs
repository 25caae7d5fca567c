use crate::breakpoints::schema::{Breakpoint, BreakpointTable};
use crate::calculate::outcome::{BandMatch, SubIndexResult};
use crate::error::AqiError;
use crate::model::Pollutant;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

impl BreakpointTable {
    /// Sub-index for one pollutant concentration.
    ///
    /// Returns `Ok(None)` when no band contains the concentration: above the
    /// top band, or between one band's `high` and the next band's `low`.
    pub fn sub_index(
        &self,
        pollutant: Pollutant,
        concentration: f64,
    ) -> Result<Option<u16>, AqiError> {
        Ok(self.evaluate(pollutant, concentration)?.sub_index)
    }

    /// Like [`BreakpointTable::sub_index`], keeping the matched band and a reason.
    pub fn evaluate(
        &self,
        pollutant: Pollutant,
        concentration: f64,
    ) -> Result<SubIndexResult, AqiError> {
        validate_concentration(pollutant, concentration)?;
        let bands = self
            .bands(pollutant)
            .ok_or(AqiError::UnsupportedPollutant(pollutant))?;
        let unit = self.unit(pollutant);
        let max = bands.last().map(|b| b.high).unwrap_or_default();

        // Beyond the decimal range means beyond every band as well.
        let value = Decimal::from_f64(concentration).filter(|v| *v <= max);
        let Some(value) = value else {
            return Ok(SubIndexResult {
                pollutant,
                concentration,
                unit: unit.to_string(),
                sub_index: None,
                matched: BandMatch::AboveRange,
                band: None,
                reason: format!(
                    "{}: {} {} > highest breakpoint {} -> no sub-index",
                    pollutant, concentration, unit, max
                ),
            });
        };

        let Some(band) = find_band(bands, value) else {
            return Ok(SubIndexResult {
                pollutant,
                concentration,
                unit: unit.to_string(),
                sub_index: None,
                matched: BandMatch::BetweenBands,
                band: None,
                reason: format!(
                    "{}: {} {} falls between two bands -> no sub-index",
                    pollutant, concentration, unit
                ),
            });
        };

        let index = interpolate(band, value).ok_or(AqiError::Interpolation {
            pollutant,
            concentration,
            low: band.low,
            high: band.high,
        })?;

        Ok(SubIndexResult {
            pollutant,
            concentration,
            unit: unit.to_string(),
            sub_index: Some(index),
            matched: BandMatch::InBand,
            band: Some(*band),
            reason: format!(
                "{}: {} {} in band {}-{} (index {}-{}) -> {}",
                pollutant,
                concentration,
                unit,
                band.low,
                band.high,
                band.index_low,
                band.index_high,
                index
            ),
        })
    }

    /// Upper concentration bound of the top band.
    pub fn max_concentration(&self, pollutant: Pollutant) -> Option<Decimal> {
        self.bands(pollutant).and_then(|b| b.last()).map(|b| b.high)
    }

    /// Index of the top band, used when clamping out-of-range values.
    pub fn max_index(&self, pollutant: Pollutant) -> Option<u16> {
        self.bands(pollutant)
            .and_then(|b| b.last())
            .map(|b| b.index_high)
    }
}

/// Reject negative, NaN and infinite concentrations.
pub(crate) fn validate_concentration(
    pollutant: Pollutant,
    concentration: f64,
) -> Result<(), AqiError> {
    if concentration.is_finite() && concentration >= 0.0 {
        Ok(())
    } else {
        Err(AqiError::InvalidConcentration {
            pollutant,
            value: concentration,
        })
    }
}

/// First band with `low <= c <= high`. A shared cut point belongs to the
/// lower band.
fn find_band(bands: &[Breakpoint], concentration: Decimal) -> Option<&Breakpoint> {
    bands.iter().find(|band| band.contains(concentration))
}

/// Linear interpolation inside a band, rounded half-up.
///
/// `None` when the arithmetic overflows or the band is malformed
/// (`low == high`, descending index range).
fn interpolate(band: &Breakpoint, concentration: Decimal) -> Option<u16> {
    let index_span = Decimal::from(band.index_high.checked_sub(band.index_low)?);
    let offset = concentration.checked_sub(band.low)?;
    let width = band.high.checked_sub(band.low)?;
    // Multiply before dividing so exact results stay exact.
    let raw = index_span
        .checked_mul(offset)?
        .checked_div(width)?
        .checked_add(Decimal::from(band.index_low))?;

    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u16()
}
