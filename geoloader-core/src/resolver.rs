use crate::geocoding::Geocoder;
use crate::record::LocationRecord;
use anyhow::{Context, Result};

/// Look up a single location and normalize the answer into a record.
///
/// Sends exactly one query. A miss becomes a record with no coordinates;
/// transport and service errors are returned as-is, with no retry.
pub fn fetch_location_data<G: Geocoder + ?Sized>(
    geocoder: &G,
    location: &str,
) -> Result<LocationRecord> {
    if location.is_empty() {
        anyhow::bail!("Location must not be empty");
    }

    let found = geocoder
        .geocode(location)
        .with_context(|| format!("Failed to geocode '{}'", location))?;

    match found {
        Some(coordinates) => {
            log::debug!(
                "Resolved '{}' to {},{}",
                location,
                coordinates.latitude,
                coordinates.longitude
            );
            Ok(LocationRecord::found(location, coordinates))
        }
        None => {
            log::info!("No match for '{}'", location);
            Ok(LocationRecord::not_found(location))
        }
    }
}
