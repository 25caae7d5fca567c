use serde::Serialize;
use smartaqi_core::error::AqiError;

pub fn print<T: Serialize>(value: &T) -> Result<(), AqiError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
