mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "smartaqi",
    version,
    about = "Air quality index calculator: sub-indices, categories and health tips"
)]
struct Cli {
    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Breakpoint table selection shared by the computing commands.
#[derive(Args)]
pub struct TableArgs {
    /// Custom JSON breakpoint table (overrides --preset)
    #[arg(short, long = "table", value_name = "FILE", env = "SMARTAQI_TABLE")]
    pub table: Option<PathBuf>,

    /// Predefined breakpoint table
    #[arg(short, long = "preset", value_name = "NAME", default_value = "cpcb")]
    pub preset: String,

    /// Concentrations above the top band: skip, clamp or reject
    #[arg(long = "out-of-range", value_name = "POLICY", default_value = "skip")]
    pub out_of_range: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the sub-index of a single pollutant concentration
    Index {
        /// Pollutant (PM2.5, PM10, SO2, NO2, O3, CO, NH3)
        pollutant: String,

        /// Concentration in the table's unit (µg/m³ for the built-in table)
        concentration: String,

        #[command(flatten)]
        table: TableArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Category and gauge position of a raw concentration (covers CO)
    Level {
        /// Pollutant (PM2.5, PM10, SO2, NO2, O3, CO)
        pollutant: String,

        /// Concentration (µg/m³ for PM, ppb for gases, ppm for CO)
        concentration: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Assess a reading: overall AQI, dominant pollutant, category and tips
    Assess {
        /// JSON file with an object of pollutant -> concentration
        input_file: Option<PathBuf>,

        /// Inline reading, e.g. -r PM2.5=42 (repeatable, overrides the file)
        #[arg(short, long = "reading", value_name = "POLLUTANT=VALUE")]
        reading: Vec<String>,

        #[command(flatten)]
        table: TableArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-pollutant reasoning
        #[arg(long)]
        verbose: bool,
    },
    /// Compute daily AQI for a multi-day pollutant forecast
    Forecast {
        /// JSON file with PM25_pred, PM10_pred, NO2_pred, SO2_pred, O3_pred series
        input_file: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the category, color and health tips for an AQI value
    Category {
        /// Overall AQI
        aqi: u16,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate breakpoint tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// List predefined tables
    List,
    /// Print a table's bands in plain language
    Explain {
        /// Preset name (default: cpcb)
        #[arg(default_value = "cpcb")]
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom table file
    Validate {
        /// Path to JSON table file
        file: PathBuf,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Index {
            pollutant,
            concentration,
            table,
            output,
        } => commands::index::run(&pollutant, &concentration, &table, &output),
        Commands::Level {
            pollutant,
            concentration,
            output,
        } => commands::level::run(&pollutant, &concentration, &output),
        Commands::Assess {
            input_file,
            reading,
            table,
            output,
            verbose,
        } => commands::assess::run(input_file, reading, &table, &output, verbose),
        Commands::Forecast {
            input_file,
            table,
            output,
        } => commands::forecast::run(input_file, &table, &output),
        Commands::Category { aqi, output } => commands::category::run(aqi, &output),
        Commands::Tables { action } => match action {
            TablesAction::List => commands::tables::list(),
            TablesAction::Explain { preset } => commands::tables::explain(&preset),
            TablesAction::Schema => commands::tables::schema(),
            TablesAction::Validate { file } => commands::tables::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
