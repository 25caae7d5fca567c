use crate::output;
use smartaqi_core::model::{parse_concentration, Pollutant};
use smartaqi_core::scale;

pub fn run(
    pollutant: &str,
    concentration: &str,
    output_format: &str,
) -> Result<(), smartaqi_core::error::AqiError> {
    let pollutant: Pollutant = pollutant.parse()?;
    let concentration = parse_concentration(concentration)?;
    let level = scale::builtin().level(pollutant, concentration)?;

    match output_format {
        "json" => output::json::print(&level)?,
        _ => output::table::print_level(&level),
    }

    Ok(())
}
