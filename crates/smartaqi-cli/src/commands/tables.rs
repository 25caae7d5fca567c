use smartaqi_core::breakpoints::builtin;
use smartaqi_core::category::Category;
use std::path::Path;

pub fn list() -> Result<(), smartaqi_core::error::AqiError> {
    println!("Available predefined tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<8} {} (v{}){}",
            name, table.name, table.version, default_marker
        );
        if let Some(ref desc) = table.description {
            println!("           {}", desc);
        }
        let covered: Vec<&str> = table.pollutants.keys().map(|p| p.label()).collect();
        println!("           Pollutants: {}", covered.join(", "));
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), smartaqi_core::error::AqiError> {
    let table = builtin::load_preset(preset)?;

    println!("{} (version {})\n", table.name, table.version);

    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("Each pollutant concentration is converted to a sub-index by linear");
    println!("interpolation inside its band. The overall AQI is the highest");
    println!("sub-index; the pollutant that reaches it is the dominant pollutant.\n");

    println!("Categories:\n");
    let mut lower = 0;
    for cat in Category::ALL {
        let range = match cat.upper_bound() {
            Some(upper) => format!("{}-{}", lower, upper),
            None => format!("{}+", lower),
        };
        println!("  {:<10} {:<8} {}", cat.label(), range, cat.color_hex());
        lower = cat.upper_bound().map_or(lower, |u| u + 1);
    }
    println!();

    println!("Breakpoints:\n");
    for (pollutant, bands) in &table.pollutants {
        println!("  {} ({})", pollutant, table.unit(*pollutant));
        for band in &bands.breakpoints {
            println!(
                "    {:>8} - {:<8} -> {:>3} - {:<3}",
                band.low, band.high, band.index_low, band.index_high
            );
        }
        if let Some(ref note) = bands.note {
            println!("    {}", note);
        }
        println!();
    }

    println!("Concentrations above the top band have no sub-index. Use");
    println!("--out-of-range clamp to count them as 500, or reject to fail.\n");

    Ok(())
}

pub fn schema() -> Result<(), smartaqi_core::error::AqiError> {
    print!(
        r#"JSON Breakpoint Table Schema
============================

A table file maps pollutant concentrations to index values. When you run
`smartaqi assess --table FILE`, each pollutant in the reading is converted
using the bands below; pollutants missing from the table are reported as
unsupported.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  pollutants    (object, required)  Map of pollutant -> bands (see below).
                                    Keys: PM2.5, PM10, SO2, NO2, O3, CO, NH3

Each pollutant entry:
  unit          (string, optional)  Unit for display. Default: "µg/m³"
  breakpoints   (array, required)   Bands in ascending order
  note          (string, optional)  Regulatory reference or explanation

Each band in "breakpoints":
  low           (string, required)  Lowest concentration of the band
  high          (string, required)  Highest concentration of the band
  index_low     (integer, required) Index at "low"
  index_high    (integer, required) Index at "high" (at most 500)

Rules:
  - the first band starts at "0"
  - each band's "low" is above the previous band's "high"; a value
    between the two has no sub-index and is reported as unbanded
  - each band's "index_low" is above the previous band's "index_high"

Example:
{{
  "name": "Site table",
  "version": "1.0",
  "pollutants": {{
    "CO": {{
      "unit": "mg/m³",
      "breakpoints": [
        {{ "low": "0", "high": "1.0", "index_low": 0, "index_high": 50 }},
        {{ "low": "1.1", "high": "2.0", "index_low": 51, "index_high": 100 }},
        {{ "low": "2.1", "high": "10", "index_low": 101, "index_high": 200 }}
      ]
    }}
  }}
}}

Note: concentrations must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "35.4" not 35.4).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), smartaqi_core::error::AqiError> {
    let table = smartaqi_core::breakpoints::load_table(file)?;

    println!("Table '{}' (v{}) is valid.", table.name, table.version);
    let covered: Vec<&str> = table.pollutants.keys().map(|p| p.label()).collect();
    println!("  Pollutants: {}", covered.join(", "));

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (pollutant, bands) in &table.pollutants {
        if let Some(top) = bands.breakpoints.last() {
            if top.index_high < smartaqi_core::breakpoints::MAX_INDEX {
                warnings.push(format!(
                    "{} tops out at index {}, values above {} get no sub-index",
                    pollutant, top.index_high, top.high
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
