use clap::Parser;
use std::path::PathBuf;

/// Geocode place names with OpenStreetMap Nominatim and save them as CSV
#[derive(Parser, Debug)]
#[command(name = "geoloader")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Geocodes place names and writes latitude/longitude to a CSV file", long_about = None)]
pub struct Args {
    /// Place names to geocode (defaults to a built-in list of five)
    #[arg(value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// CSV file to write
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = geoloader_core::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Label sent to Nominatim as the User-Agent
    #[arg(long = "user-agent", default_value = geoloader_core::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
