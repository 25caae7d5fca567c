//! AQI categories.
//!
//! Bands follow the breakpoint table's index bands: inclusive upper bounds
//! of 50, 100, 200, 300 and 400, and an open top band.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Moderate,
    Poor,
    Unhealthy,
    Severe,
    Hazardous,
}

impl Category {
    /// All categories, cleanest first.
    pub const ALL: [Category; 6] = [
        Category::Good,
        Category::Moderate,
        Category::Poor,
        Category::Unhealthy,
        Category::Severe,
        Category::Hazardous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::Unhealthy => "Unhealthy",
            Category::Severe => "Severe",
            Category::Hazardous => "Hazardous",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            Category::Good => "#4ade80",
            Category::Moderate => "#15803d",
            Category::Poor => "#facc15",
            Category::Unhealthy => "#f97316",
            Category::Severe => "#ef4444",
            Category::Hazardous => "#b91c1c",
        }
    }

    /// Inclusive upper AQI bound, `None` for the open top band.
    pub fn upper_bound(self) -> Option<u16> {
        match self {
            Category::Good => Some(50),
            Category::Moderate => Some(100),
            Category::Poor => Some(200),
            Category::Unhealthy => Some(300),
            Category::Severe => Some(400),
            Category::Hazardous => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category for an overall AQI value. Anything above 400 is Hazardous.
pub fn classify(aqi: u16) -> Category {
    Category::ALL
        .into_iter()
        .find(|c| c.upper_bound().map_or(true, |bound| aqi <= bound))
        .unwrap_or(Category::Hazardous)
}
