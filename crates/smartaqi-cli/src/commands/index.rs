use crate::commands::load_table;
use crate::output;
use crate::TableArgs;
use smartaqi_core::model::{parse_concentration, Pollutant};

pub fn run(
    pollutant: &str,
    concentration: &str,
    table_args: &TableArgs,
    output_format: &str,
) -> Result<(), smartaqi_core::error::AqiError> {
    let table = load_table(table_args)?;
    let pollutant: Pollutant = pollutant.parse()?;
    let concentration = parse_concentration(concentration)?;

    let result = table.evaluate(pollutant, concentration)?;
    if output_format == "json" {
        return output::json::print(&result);
    }

    match result.sub_index {
        Some(index) => println!("{} sub-index: {}", pollutant, index),
        None => println!("{} sub-index: undefined", pollutant),
    }
    println!("  {}", result.reason);

    Ok(())
}
