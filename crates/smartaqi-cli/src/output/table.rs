use smartaqi_core::advisory::HealthTip;
use smartaqi_core::calculate::AqiAssessment;
use smartaqi_core::category::Category;
use smartaqi_core::forecast::{ForecastDay, SeriesSummary};
use smartaqi_core::model::Pollutant;
use smartaqi_core::scale::PollutantLevel;

pub fn print_assessment(assessment: &AqiAssessment, verbose: bool) {
    let summary = &assessment.summary;

    println!(
        "  AQI: {} {} ({})",
        summary.overall_aqi, assessment.label, assessment.color_hex
    );
    println!("  Dominant pollutant: {}\n", summary.dominant_pollutant);

    // Per-pollutant sub-indices
    if !summary.details.is_empty() {
        let max_name = summary
            .details
            .iter()
            .map(|d| d.pollutant.label().len())
            .max()
            .unwrap_or(5);

        for detail in &summary.details {
            let marker = if detail.pollutant == summary.dominant_pollutant {
                " *"
            } else {
                ""
            };
            let index = detail
                .sub_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-".into());
            println!(
                "  {:<width$}  {:>8} {:<6} -> {:>3}{}",
                detail.pollutant.label(),
                detail.concentration,
                detail.unit,
                index,
                marker,
                width = max_name
            );
            if verbose {
                println!("    {}", detail.reason);
            }
        }
        println!();
    }

    print_skipped("Unsupported by this table", &summary.unsupported);
    print_skipped("Between two bands (skipped)", &summary.unbanded);
    print_skipped("Above the highest breakpoint (skipped)", &summary.out_of_range);
    print_skipped("Above the highest breakpoint (clamped)", &summary.clamped);

    print_tips(assessment.health_tips);
}

fn print_skipped(heading: &str, pollutants: &[Pollutant]) {
    if pollutants.is_empty() {
        return;
    }
    let names: Vec<&str> = pollutants.iter().map(|p| p.label()).collect();
    println!("  {}: {}\n", heading, names.join(", "));
}

pub fn print_tips(tips: &[HealthTip]) {
    println!("  Health tips:");
    for tip in tips {
        println!("    - {}", tip.text);
    }
    println!();
}

pub fn print_forecast(days: &[ForecastDay], summary: Option<&SeriesSummary>) {
    if days.is_empty() {
        println!("  No forecast days in input.\n");
        return;
    }

    println!("  {:<6} {:>4}  {:<10} Dominant", "Day", "AQI", "Category");
    println!("  {}", "-".repeat(36));
    for day in days {
        match &day.assessment {
            Some(a) => println!(
                "  +{:<5} {:>4}  {:<10} {}",
                day.day,
                a.overall_aqi(),
                a.label,
                a.summary.dominant_pollutant
            ),
            None => println!(
                "  +{:<5} {:>4}  {}",
                day.day,
                "-",
                day.unavailable.as_deref().unwrap_or("unavailable")
            ),
        }
    }
    println!();

    if let Some(s) = summary {
        println!(
            "  {} day(s): average {}, min {}, max {}",
            s.days, s.average, s.min, s.max
        );
        for cat in Category::ALL {
            if let Some(count) = s.distribution.get(&cat) {
                println!("    {:<10} {}", cat.label(), count);
            }
        }
        println!();
    }
}

pub fn print_level(level: &PollutantLevel) {
    const WIDTH: usize = 30;
    let filled = ((level.gauge * WIDTH as f64).round() as usize).min(WIDTH);
    println!(
        "{} {} {}: {} ({})",
        level.pollutant, level.concentration, level.unit, level.label, level.color_hex
    );
    println!(
        "  [{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        level.gauge * 100.0
    );
}
