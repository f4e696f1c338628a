use crate::geocoding::Geocoder;
use crate::record::{LocationBatch, LocationRecord};
use crate::resolver::fetch_location_data;
use anyhow::Result;
use std::time::Duration;

/// Pause after every lookup, keeping us at one request per second for Nominatim
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Geocode `locations` in order, sleeping `delay` after each lookup.
///
/// The sleep also follows the last lookup. The first failed lookup aborts the
/// whole batch and the records gathered so far are dropped.
pub fn build_geo_batch<G, S>(geocoder: &G, locations: &[S], delay: Duration) -> Result<LocationBatch>
where
    G: Geocoder + ?Sized,
    S: AsRef<str>,
{
    let mut records: Vec<LocationRecord> = Vec::with_capacity(locations.len());

    for (i, location) in locations.iter().enumerate() {
        let location = location.as_ref();
        log::debug!("[{}/{}] {}", i + 1, locations.len(), location);

        records.push(fetch_location_data(geocoder, location)?);
        std::thread::sleep(delay);
    }

    let batch = LocationBatch::new(records);
    log::info!(
        "Geocoded {} locations ({} without a match)",
        batch.len(),
        batch.unresolved_count()
    );
    Ok(batch)
}

/// [`build_geo_batch`] with the default one second pause
pub fn build_geo_dataframe<G, S>(geocoder: &G, locations: &[S]) -> Result<LocationBatch>
where
    G: Geocoder + ?Sized,
    S: AsRef<str>,
{
    build_geo_batch(geocoder, locations, DEFAULT_REQUEST_DELAY)
}
