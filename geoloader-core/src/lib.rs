use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

mod batch;
mod geocoding;
mod output;
mod record;
mod resolver;

#[cfg(test)]
mod test_support;

// Re-export public types
pub use batch::{build_geo_batch, build_geo_dataframe, DEFAULT_REQUEST_DELAY};
pub use geocoding::{
    get_default_geolocator, get_geolocator, parse_search_response, Coordinates, Geocoder,
    NominatimClient, DEFAULT_USER_AGENT, NOMINATIM_SEARCH_URL,
};
pub use output::{save_csv, write_csv, CSV_HEADER, DEFAULT_OUTPUT_PATH};
pub use record::{LocationBatch, LocationRecord};
pub use resolver::fetch_location_data;

/// Locations geocoded when none are given
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Museum of Modern Art",
    "iuyt8765(*&)",
    "Alaska",
    "Franklin's Barbecue",
    "Burj Khalifa",
];

/// Configuration for a geocoding run
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Label sent to Nominatim as the User-Agent
    pub user_agent: String,
    /// CSV file written at the end of the run
    pub output_path: PathBuf,
    /// Fixed pause after each lookup
    pub delay: Duration,
    /// Place names to geocode, in output order
    pub locations: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delay: DEFAULT_REQUEST_DELAY,
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Runs the geocode-then-save pipeline for one configuration
pub struct GeoLoader {
    config: LoaderConfig,
}

impl GeoLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Geocode every configured location against Nominatim and write the CSV
    pub fn run(&self) -> Result<LocationBatch> {
        let geolocator = get_geolocator(&self.config.user_agent)?;
        self.run_with(&geolocator)
    }

    /// Same as [`GeoLoader::run`] but with any geocoder.
    /// The file is written only once the whole batch succeeded.
    pub fn run_with<G: Geocoder + ?Sized>(&self, geocoder: &G) -> Result<LocationBatch> {
        log::info!(
            "Geocoding {} locations as '{}'",
            self.config.locations.len(),
            self.config.user_agent
        );

        let batch = build_geo_batch(geocoder, &self.config.locations, self.config.delay)?;
        save_csv(&batch, &self.config.output_path)?;
        Ok(batch)
    }
}
