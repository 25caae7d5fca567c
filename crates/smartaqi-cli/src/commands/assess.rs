use crate::commands::{aggregate_options, load_table};
use crate::output;
use crate::TableArgs;
use smartaqi_core::error::AqiError;
use smartaqi_core::model::PollutantReading;
use std::path::PathBuf;

pub fn run(
    input_file: Option<PathBuf>,
    pairs: Vec<String>,
    table_args: &TableArgs,
    output_format: &str,
    verbose: bool,
) -> Result<(), AqiError> {
    let table = load_table(table_args)?;
    let options = aggregate_options(table_args)?;

    // File first, inline pairs on top
    let mut reading = match &input_file {
        Some(path) => {
            let json_bytes = std::fs::read(path)?;
            serde_json::from_slice::<PollutantReading>(&json_bytes)?
        }
        None => PollutantReading::new(),
    };
    let mut inline = PollutantReading::new();
    for pair in &pairs {
        let (pollutant, concentration) = PollutantReading::parse_pair(pair)?;
        if inline.insert(pollutant, concentration).is_some() {
            return Err(AqiError::ParseError(format!(
                "{} given more than once with -r",
                pollutant
            )));
        }
    }
    for (pollutant, concentration) in inline.iter() {
        reading.insert(pollutant, concentration);
    }

    tracing::debug!(
        pollutants = reading.len(),
        table = %table.name,
        policy = %options.out_of_range,
        "assessing reading"
    );
    let assessment = table.assess(&reading, &options)?;

    match output_format {
        "json" => output::json::print(&assessment)?,
        _ => output::table::print_assessment(&assessment, verbose),
    }

    Ok(())
}
