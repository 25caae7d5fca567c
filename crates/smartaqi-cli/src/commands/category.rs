use crate::output;
use serde::Serialize;
use smartaqi_core::advisory::HealthTip;
use smartaqi_core::category::Category;

#[derive(Serialize)]
struct CategoryReport {
    aqi: u16,
    category: Category,
    label: &'static str,
    color_hex: &'static str,
    health_tips: &'static [HealthTip; 3],
}

pub fn run(aqi: u16, output_format: &str) -> Result<(), smartaqi_core::error::AqiError> {
    let category = smartaqi_core::classify(aqi);
    let report = CategoryReport {
        aqi,
        category,
        label: category.label(),
        color_hex: category.color_hex(),
        health_tips: smartaqi_core::health_tips(aqi),
    };

    match output_format {
        "json" => output::json::print(&report)?,
        _ => {
            println!("AQI {}: {} ({})\n", aqi, report.label, report.color_hex);
            output::table::print_tips(report.health_tips);
        }
    }

    Ok(())
}
