use crate::breakpoints::schema::BreakpointTable;
use crate::error::AqiError;
use std::sync::LazyLock;

const CPCB_JSON: &str = include_str!("../../../../tables/cpcb.json");

static CPCB_TABLE: LazyLock<BreakpointTable> =
    LazyLock::new(|| serde_json::from_str(CPCB_JSON).expect("embedded cpcb.json is valid"));

/// Available predefined tables.
pub const PRESETS: &[&str] = &["cpcb"];

/// Name of the table used when the caller does not pick one.
pub const DEFAULT_PRESET: &str = "cpcb";

/// The built-in CPCB-style table (PM2.5, PM10, SO2, NO2, O3).
pub fn cpcb() -> &'static BreakpointTable {
    &CPCB_TABLE
}

/// Load a predefined table by name.
pub fn load_preset(name: &str) -> Result<&'static BreakpointTable, AqiError> {
    match name.trim().to_lowercase().as_str() {
        "cpcb" => Ok(cpcb()),
        _ => Err(AqiError::TableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
