pub mod assess;
pub mod category;
pub mod forecast;
pub mod index;
pub mod level;
pub mod tables;

use crate::TableArgs;
use smartaqi_core::breakpoints::builtin;
use smartaqi_core::breakpoints::schema::BreakpointTable;
use smartaqi_core::calculate::AggregateOptions;
use smartaqi_core::error::AqiError;

/// Resolve the breakpoint table: a custom file wins over the preset.
pub fn load_table(args: &TableArgs) -> Result<BreakpointTable, AqiError> {
    match &args.table {
        Some(path) => smartaqi_core::breakpoints::load_table(path),
        None => Ok(builtin::load_preset(&args.preset)?.clone()),
    }
}

pub fn aggregate_options(args: &TableArgs) -> Result<AggregateOptions, AqiError> {
    Ok(AggregateOptions {
        out_of_range: args.out_of_range.parse()?,
    })
}
