use crate::commands::{aggregate_options, load_table};
use crate::output;
use crate::TableArgs;
use serde::Serialize;
use smartaqi_core::forecast::{self, ForecastDay, ForecastPayload, SeriesSummary};
use std::path::PathBuf;

#[derive(Serialize)]
struct ForecastReport {
    days: Vec<ForecastDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SeriesSummary>,
}

pub fn run(
    input_file: PathBuf,
    table_args: &TableArgs,
    output_format: &str,
) -> Result<(), smartaqi_core::error::AqiError> {
    let table = load_table(table_args)?;
    let options = aggregate_options(table_args)?;

    let json_bytes = std::fs::read(&input_file)?;
    let payload: ForecastPayload = serde_json::from_slice(&json_bytes)?;

    let days = table.forecast(&payload, &options)?;
    let summary = forecast::summarize(&forecast::overall_series(&days));

    match output_format {
        "json" => output::json::print(&ForecastReport { days, summary })?,
        _ => output::table::print_forecast(&days, summary.as_ref()),
    }

    Ok(())
}
