//! Integration tests for the public AQI API.
//!
//! Exercise the built-in table end to end (sub-index -> aggregate ->
//! category -> tips) and a custom table loaded from disk.

use smartaqi_core::breakpoints::builtin::cpcb;
use smartaqi_core::breakpoints::load_table;
use smartaqi_core::calculate::{AggregateOptions, OutOfRangePolicy};
use smartaqi_core::category::Category;
use smartaqi_core::error::AqiError;
use smartaqi_core::forecast::{self, ForecastPayload};
use smartaqi_core::model::{Pollutant, PollutantReading};
use smartaqi_core::scale;
use smartaqi_core::{
    aggregate, assess, classify, compute_sub_index, health_tips, pollutant_category,
};

const SUPPORTED: [Pollutant; 5] = [
    Pollutant::Pm25,
    Pollutant::Pm10,
    Pollutant::So2,
    Pollutant::No2,
    Pollutant::O3,
];

fn f(d: rust_decimal::Decimal) -> f64 {
    d.to_string().parse().unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Every band endpoint maps exactly onto its index endpoint
// ---------------------------------------------------------------------------
#[test]
fn band_endpoints_map_exactly() {
    for p in SUPPORTED {
        for band in cpcb().bands(p).unwrap() {
            assert_eq!(
                compute_sub_index(p, f(band.low)).unwrap(),
                Some(band.index_low),
                "{p} low {}",
                band.low
            );
            assert_eq!(
                compute_sub_index(p, f(band.high)).unwrap(),
                Some(band.index_high),
                "{p} high {}",
                band.high
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Test 2: Sub-indices never decrease as the concentration rises
// ---------------------------------------------------------------------------
#[test]
fn sub_index_is_monotonic() {
    for p in SUPPORTED {
        let max = f(cpcb().max_concentration(p).unwrap());
        let mut prev = 0;
        let mut c = 0.0;
        while c <= max {
            // Values between two integer cut points have no sub-index.
            if let Some(idx) = compute_sub_index(p, c).unwrap() {
                assert!(idx >= prev, "{p}: {c} gave {idx} after {prev}");
                prev = idx;
            }
            c += 0.25;
        }
        assert_eq!(prev, 500, "{p}");
    }
}

// ---------------------------------------------------------------------------
// Test 3: An empty reading is an error, not an AQI of 0
// ---------------------------------------------------------------------------
#[test]
fn empty_reading_is_no_valid_data() {
    let result = aggregate(&PollutantReading::new());
    assert!(matches!(result, Err(AqiError::NoValidData)));
    assert!(matches!(
        assess(&PollutantReading::new()),
        Err(AqiError::NoValidData)
    ));
}

// ---------------------------------------------------------------------------
// Test 4: Ties resolve to the pollutant declared first
// ---------------------------------------------------------------------------
#[test]
fn dominant_pollutant_tie_break() {
    let reading: PollutantReading =
        serde_json::from_str(r#"{"PM10": 50, "PM2.5": 30}"#).unwrap();
    let summary = aggregate(&reading).unwrap();
    assert_eq!(summary.overall_aqi, 50);
    assert_eq!(summary.dominant_pollutant, Pollutant::Pm25);
}

// ---------------------------------------------------------------------------
// Test 5: Good is 0..=50; the top band is open-ended
// ---------------------------------------------------------------------------
#[test]
fn classification_bands() {
    for aqi in 0..=50 {
        assert_eq!(classify(aqi).label(), "Good");
        assert_eq!(classify(aqi).color_hex(), "#4ade80");
    }
    for aqi in [501, 750, 10_000] {
        assert_eq!(classify(aqi), Category::Hazardous);
    }
}

// ---------------------------------------------------------------------------
// Test 6: Exactly three non-empty tips for any AQI
// ---------------------------------------------------------------------------
#[test]
fn three_tips_for_any_aqi() {
    for aqi in (0..=u16::MAX).step_by(7) {
        let tips = health_tips(aqi);
        assert_eq!(tips.len(), 3);
        assert!(tips.iter().all(|t| !t.text.is_empty()));
    }
}

// ---------------------------------------------------------------------------
// Test 7: Boundary concentrations pick the first band, stably
// ---------------------------------------------------------------------------
#[test]
fn boundary_concentration_is_stable() {
    let first = compute_sub_index(Pollutant::Pm25, 60.0).unwrap();
    assert_eq!(first, Some(100));
    for _ in 0..10 {
        assert_eq!(compute_sub_index(Pollutant::Pm25, 60.0).unwrap(), first);
    }
    // Between 60 and 61 no band applies; 61 opens the next one.
    assert_eq!(compute_sub_index(Pollutant::Pm25, 60.2).unwrap(), None);
    assert_eq!(compute_sub_index(Pollutant::Pm25, 61.0).unwrap(), Some(101));
    let reading = PollutantReading::new().with(Pollutant::Pm25, 60.2);
    assert!(matches!(aggregate(&reading), Err(AqiError::NoValidData)));
}

// ---------------------------------------------------------------------------
// Test 8: Out-of-range policies
// ---------------------------------------------------------------------------
#[test]
fn out_of_range_policies() {
    assert_eq!(compute_sub_index(Pollutant::Pm25, 600.0).unwrap(), None);

    let reading = PollutantReading::new()
        .with(Pollutant::Pm25, 600.0)
        .with(Pollutant::O3, 60.0);

    let skipped = aggregate(&reading).unwrap();
    assert_eq!(skipped.out_of_range, vec![Pollutant::Pm25]);
    assert_eq!(skipped.dominant_pollutant, Pollutant::O3);

    let clamp = AggregateOptions {
        out_of_range: OutOfRangePolicy::Clamp,
    };
    let clamped = cpcb().aggregate(&reading, &clamp).unwrap();
    assert_eq!(clamped.overall_aqi, 500);
    assert_eq!(clamped.dominant_pollutant, Pollutant::Pm25);

    let reject = AggregateOptions {
        out_of_range: OutOfRangePolicy::Reject,
    };
    assert!(matches!(
        cpcb().aggregate(&reading, &reject),
        Err(AqiError::OutOfRange {
            pollutant: Pollutant::Pm25,
            ..
        })
    ));
}

// ---------------------------------------------------------------------------
// Test 9: CO and NH3 are reported as unsupported by the built-in table
// ---------------------------------------------------------------------------
#[test]
fn co_and_nh3_reported_unsupported() {
    let reading: PollutantReading =
        serde_json::from_str(r#"{"PM2.5": 45, "CO": 1.5, "NH3": 40}"#).unwrap();
    let assessment = assess(&reading).unwrap();
    assert_eq!(
        assessment.summary.unsupported,
        vec![Pollutant::Co, Pollutant::Nh3]
    );
    assert_eq!(assessment.overall_aqi(), 75);
    assert_eq!(assessment.category, Category::Moderate);
    assert_eq!(assessment.color_hex, "#15803d");
    assert_eq!(assessment.health_tips[0].id, "moderate.acceptable");
}

// ---------------------------------------------------------------------------
// Test 10: Custom table from disk adds CO support
// ---------------------------------------------------------------------------
#[test]
fn custom_table_supports_co() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("with-co.json");
    std::fs::write(
        &path,
        r#"{
            "name": "With CO",
            "version": "1",
            "pollutants": {
                "PM2.5": { "breakpoints": [
                    { "low": "0", "high": "30", "index_low": 0, "index_high": 50 },
                    { "low": "31", "high": "60", "index_low": 51, "index_high": 100 }
                ] },
                "CO": { "unit": "mg/m³", "breakpoints": [
                    { "low": "0", "high": "1.0", "index_low": 0, "index_high": 50 },
                    { "low": "1.1", "high": "2.0", "index_low": 51, "index_high": 100 },
                    { "low": "2.1", "high": "10", "index_low": 101, "index_high": 200 }
                ] }
            }
        }"#,
    )
    .unwrap();

    let table = load_table(&path).unwrap();
    let reading = PollutantReading::new()
        .with(Pollutant::Pm25, 20.0)
        .with(Pollutant::Co, 6.05);
    let assessment = table
        .assess(&reading, &AggregateOptions::default())
        .unwrap();
    // 99 * 3.95 / 7.9 + 101 = 150.5 -> 151
    assert_eq!(assessment.summary.individual_aqis[&Pollutant::Co], 151);
    assert_eq!(assessment.summary.dominant_pollutant, Pollutant::Co);
    assert_eq!(assessment.category, Category::Poor);
    assert!(assessment.summary.unsupported.is_empty());
}

// ---------------------------------------------------------------------------
// Test 11: Invalid tables are rejected when loaded
// ---------------------------------------------------------------------------
#[test]
fn invalid_table_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gap.json");
    std::fs::write(
        &path,
        r#"{ "name": "Index gap", "version": "1", "pollutants": { "SO2": { "breakpoints": [
            { "low": "0", "high": "40", "index_low": 0, "index_high": 50 },
            { "low": "41", "high": "80", "index_low": 40, "index_high": 100 }
        ] } } }"#,
    )
    .unwrap();
    assert!(matches!(load_table(&path), Err(AqiError::TableInvalid(_))));
}

// ---------------------------------------------------------------------------
// Test 12: Forecast payload to daily AQI series and summary
// ---------------------------------------------------------------------------
#[test]
fn forecast_to_summary() {
    let payload: ForecastPayload = serde_json::from_str(
        r#"{
            "PM25_pred": [32, 61, 91],
            "PM10_pred": [86, 90, 100],
            "NO2_pred": [13, 13, 13],
            "SO2_pred": [12, 12, 12],
            "O3_pred": [20, 20, 20]
        }"#,
    )
    .unwrap();

    let days = cpcb()
        .forecast(&payload, &AggregateOptions::default())
        .unwrap();
    let series = forecast::overall_series(&days);
    // PM2.5 32 -> 49 * 1 / 29 + 51 = 52.7 -> 53, PM10 86 -> 86 => 86
    // PM2.5 61 -> 101, PM2.5 91 -> 201
    assert_eq!(series, vec![86, 101, 201]);

    let summary = forecast::summarize(&series).unwrap();
    assert_eq!(summary.max, 201);
    assert_eq!(summary.distribution[&Category::Unhealthy], 1);
}

// ---------------------------------------------------------------------------
// Test 13: Assessment serializes with flattened summary fields
// ---------------------------------------------------------------------------
#[test]
fn assessment_json_shape() {
    let reading = PollutantReading::new().with(Pollutant::No2, 200.0);
    let assessment = assess(&reading).unwrap();
    let json: serde_json::Value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["overall_aqi"], 220);
    assert_eq!(json["dominant_pollutant"], "NO2");
    assert_eq!(json["label"], "Unhealthy");
    assert_eq!(json["health_tips"].as_array().unwrap().len(), 3);
    assert!(json.get("unsupported").is_none());
}

// ---------------------------------------------------------------------------
// Test 14: Values between two cut points are reported, not guessed
// ---------------------------------------------------------------------------
#[test]
fn between_cut_points_reported_as_unbanded() {
    assert_eq!(compute_sub_index(Pollutant::Pm25, 30.5).unwrap(), None);

    let reading: PollutantReading =
        serde_json::from_str(r#"{"PM2.5": 30.5, "NO2": 20}"#).unwrap();
    let assessment = assess(&reading).unwrap();
    assert_eq!(assessment.summary.unbanded, vec![Pollutant::Pm25]);
    assert_eq!(assessment.summary.dominant_pollutant, Pollutant::No2);

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["unbanded"][0], "PM2.5");
}

// ---------------------------------------------------------------------------
// Test 15: A pollutant named twice in one reading is an error
// ---------------------------------------------------------------------------
#[test]
fn repeated_pollutant_in_reading_rejected() {
    let result: Result<PollutantReading, _> =
        serde_json::from_str(r#"{"PM2.5": 10, "pm25": 400}"#);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Test 16: Raw concentration scale covers CO
// ---------------------------------------------------------------------------
#[test]
fn concentration_scale_levels() {
    assert_eq!(pollutant_category(Pollutant::Co, 3.0).unwrap(), Category::Good);
    assert_eq!(
        pollutant_category(Pollutant::Co, 40.0).unwrap(),
        Category::Hazardous
    );
    assert_eq!(
        pollutant_category(Pollutant::Pm10, 200.0).unwrap(),
        Category::Poor
    );

    let level = scale::builtin().level(Pollutant::Co, 100.0).unwrap();
    assert_eq!(level.gauge, 1.0);
    assert_eq!(level.label, "Hazardous");
}
