use anyhow::Result;
use geoloader_core::{GeoLoader, LoaderConfig};

mod cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let mut config = LoaderConfig {
        user_agent: args.user_agent,
        output_path: args.output,
        ..LoaderConfig::default()
    };
    if !args.locations.is_empty() {
        config.locations = args.locations;
    }

    let loader = GeoLoader::new(config);
    let batch = loader.run()?;

    log::info!(
        "Done: {} of {} locations resolved",
        batch.resolved_count(),
        batch.len()
    );

    Ok(())
}
