use crate::error::AqiError;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Pollutants known to the engine.
///
/// Variant order is significant: it is the iteration order of a
/// [`PollutantReading`] and therefore the tie-break order when two
/// pollutants share the highest sub-index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    So2,
    No2,
    O3,
    Co,
    Nh3,
}

impl Pollutant {
    pub const ALL: [Pollutant; 7] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::Co,
        Pollutant::Nh3,
    ];

    /// Canonical label, also used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::Co => "CO",
            Pollutant::Nh3 => "NH3",
        }
    }

    /// Parse an identifier as it shows up in API payloads and user input.
    ///
    /// Case-insensitive; `.`, `_`, `-` and spaces are ignored, so "PM2.5",
    /// "pm25" and "PM_2.5" all resolve to [`Pollutant::Pm25`]. "OZONE" is
    /// accepted for O3.
    pub fn from_str_loose(s: &str) -> Option<Pollutant> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '.' | '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "pm25" => Some(Pollutant::Pm25),
            "pm10" => Some(Pollutant::Pm10),
            "so2" => Some(Pollutant::So2),
            "no2" => Some(Pollutant::No2),
            "o3" | "ozone" => Some(Pollutant::O3),
            "co" => Some(Pollutant::Co),
            "nh3" => Some(Pollutant::Nh3),
            _ => None,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pollutant {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::from_str_loose(s).ok_or_else(|| AqiError::UnknownPollutant(s.to_string()))
    }
}

impl Serialize for Pollutant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Pollutant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Raw concentrations for one location and point in time.
///
/// Units follow the breakpoint table in use (µg/m³ for the built-in table).
/// Deserializing rejects a pollutant named twice, e.g. `"PM2.5"` and `"pm25"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PollutantReading {
    concentrations: BTreeMap<Pollutant, f64>,
}

impl PollutantReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a concentration, replacing any earlier value for the pollutant.
    pub fn insert(&mut self, pollutant: Pollutant, concentration: f64) -> Option<f64> {
        self.concentrations.insert(pollutant, concentration)
    }

    pub fn with(mut self, pollutant: Pollutant, concentration: f64) -> Self {
        self.insert(pollutant, concentration);
        self
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        self.concentrations.get(&pollutant).copied()
    }

    /// Concentrations in declaration order of [`Pollutant`].
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.concentrations.iter().map(|(p, c)| (*p, *c))
    }

    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }

    /// Parse a `POLLUTANT=VALUE` pair, e.g. "PM2.5=42".
    pub fn parse_pair(s: &str) -> Result<(Pollutant, f64), AqiError> {
        let (name, value) = s.split_once('=').ok_or_else(|| {
            AqiError::ParseError(format!("expected POLLUTANT=VALUE, got '{}'", s))
        })?;
        let pollutant: Pollutant = name.parse()?;
        let concentration = parse_concentration(value)?;
        Ok((pollutant, concentration))
    }
}

impl FromIterator<(Pollutant, f64)> for PollutantReading {
    fn from_iter<I: IntoIterator<Item = (Pollutant, f64)>>(iter: I) -> Self {
        PollutantReading {
            concentrations: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for PollutantReading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReadingVisitor)
    }
}

struct ReadingVisitor;

impl<'de> Visitor<'de> for ReadingVisitor {
    type Value = PollutantReading;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of pollutant -> concentration")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut concentrations = BTreeMap::new();
        while let Some((pollutant, concentration)) = map.next_entry::<Pollutant, f64>()? {
            if concentrations.insert(pollutant, concentration).is_some() {
                return Err(de::Error::custom(format!(
                    "pollutant {} given more than once",
                    pollutant
                )));
            }
        }
        Ok(PollutantReading { concentrations })
    }
}

/// Parse a concentration typed by a user, accepting a decimal comma.
pub fn parse_concentration(s: &str) -> Result<f64, AqiError> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|e| AqiError::ParseError(format!("invalid number '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_names() {
        assert_eq!(Pollutant::from_str_loose("PM2.5"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_str_loose("pm25"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_str_loose("PM_2.5"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_str_loose(" pm10 "), Some(Pollutant::Pm10));
        assert_eq!(Pollutant::from_str_loose("OZONE"), Some(Pollutant::O3));
        assert_eq!(Pollutant::from_str_loose("nh3"), Some(Pollutant::Nh3));
        assert_eq!(Pollutant::from_str_loose("benzene"), None);
    }

    #[test]
    fn test_unknown_pollutant_error() {
        let err = "PM1".parse::<Pollutant>().unwrap_err();
        assert!(matches!(err, AqiError::UnknownPollutant(ref s) if s == "PM1"));
    }

    #[test]
    fn test_declaration_order() {
        let mut sorted = Pollutant::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Pollutant::ALL.to_vec());
        assert!(Pollutant::Pm25 < Pollutant::Pm10);
    }

    #[test]
    fn test_reading_from_json_with_loose_keys() {
        let reading: PollutantReading =
            serde_json::from_str(r#"{"pm10": 50, "PM2.5": 30.5, "OZONE": 12}"#).unwrap();
        let order: Vec<Pollutant> = reading.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Pollutant::Pm25, Pollutant::Pm10, Pollutant::O3]);
        assert_eq!(reading.get(Pollutant::Pm25), Some(30.5));
    }

    #[test]
    fn test_reading_rejects_unknown_key() {
        let result: Result<PollutantReading, _> = serde_json::from_str(r#"{"PM1": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reading_rejects_repeated_pollutant() {
        let result: Result<PollutantReading, _> =
            serde_json::from_str(r#"{"PM2.5": 10, "pm25": 400}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("PM2.5 given more than once"));

        let result: Result<PollutantReading, _> = serde_json::from_str(r#"{"O3": 1, "ozone": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reading_serializes_canonical_labels() {
        let reading = PollutantReading::new().with(Pollutant::O3, 20.0);
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"O3":20.0}"#);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            PollutantReading::parse_pair("pm25=42").unwrap(),
            (Pollutant::Pm25, 42.0)
        );
        assert_eq!(
            PollutantReading::parse_pair("NO2=12,5").unwrap(),
            (Pollutant::No2, 12.5)
        );
        assert!(PollutantReading::parse_pair("PM2.5").is_err());
        assert!(PollutantReading::parse_pair("PM2.5=abc").is_err());
    }
}
