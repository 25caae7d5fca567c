use crate::category::{self, Category};
use serde::Serialize;

/// A health tip. `id` is stable and meant as a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthTip {
    pub id: &'static str,
    pub text: &'static str,
}

const fn tip(id: &'static str, text: &'static str) -> HealthTip {
    HealthTip { id, text }
}

const GOOD: [HealthTip; 3] = [
    tip("good.outdoor", "Perfect air quality! Great time for outdoor activities."),
    tip("good.ventilate", "Consider keeping windows open for fresh air circulation."),
    tip("good.exercise", "Ideal conditions for morning jogs and outdoor exercise."),
];

const MODERATE: [HealthTip; 3] = [
    tip("moderate.acceptable", "Air quality is acceptable for most people."),
    tip(
        "moderate.sensitive",
        "Sensitive individuals should limit prolonged outdoor exertion.",
    ),
    tip(
        "moderate.precautions",
        "Good time for outdoor activities with minor precautions.",
    ),
];

const POOR: [HealthTip; 3] = [
    tip("poor.sensitive", "Sensitive groups should reduce outdoor activities."),
    tip(
        "poor.mask",
        "Consider wearing a mask if you have respiratory conditions.",
    ),
    tip("poor.indoors", "Keep windows closed and use air purifiers indoors."),
];

const UNHEALTHY: [HealthTip; 3] = [
    tip("unhealthy.limit", "Everyone should limit outdoor activities."),
    tip("unhealthy.n95", "Wear N95 masks when going outside."),
    tip("unhealthy.hepa", "Keep windows closed and use HEPA air purifiers."),
];

const SEVERE: [HealthTip; 3] = [
    tip("severe.avoid", "Avoid all outdoor activities."),
    tip("severe.purifiers", "Stay indoors with air purifiers running."),
    tip(
        "severe.medical",
        "Emergency health alert - seek medical advice if experiencing symptoms.",
    ),
];

const HAZARDOUS: [HealthTip; 3] = [
    tip(
        "hazardous.stay_in",
        "Stay indoors and keep all doors and windows sealed.",
    ),
    tip(
        "hazardous.vulnerable",
        "Children, the elderly and people with heart or lung disease must avoid any exposure.",
    ),
    tip(
        "hazardous.emergency",
        "Health emergency - seek medical help immediately if you have trouble breathing.",
    ),
];

/// Tips for a category.
pub fn tips_for(category: Category) -> &'static [HealthTip; 3] {
    match category {
        Category::Good => &GOOD,
        Category::Moderate => &MODERATE,
        Category::Poor => &POOR,
        Category::Unhealthy => &UNHEALTHY,
        Category::Severe => &SEVERE,
        Category::Hazardous => &HAZARDOUS,
    }
}

/// Exactly three tips for an overall AQI, banded like [`category::classify`].
pub fn health_tips(aqi: u16) -> &'static [HealthTip; 3] {
    tips_for(category::classify(aqi))
}
