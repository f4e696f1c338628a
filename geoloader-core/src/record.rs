use crate::geocoding::Coordinates;

/// One output row: an input location and what the geocoder made of it
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// The input string, untouched
    pub location: String,
    /// Latitude and longitude are set together or not at all
    coordinates: Option<Coordinates>,
    /// Nominatim gives us no category we use, so this stays empty
    place_type: Option<String>,
}

impl LocationRecord {
    /// Record for a location the service matched
    pub fn found(location: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            location: location.into(),
            coordinates: Some(coordinates),
            place_type: None,
        }
    }

    /// Record for a location the service could not match
    pub fn not_found(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            coordinates: None,
            place_type: None,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude)
    }

    pub fn place_type(&self) -> Option<&str> {
        self.place_type.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Records for one run, in the same order as the input locations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationBatch {
    records: Vec<LocationRecord>,
}

impl LocationBatch {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with coordinates
    pub fn resolved_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_resolved()).count()
    }

    /// Number of records the service could not match
    pub fn unresolved_count(&self) -> usize {
        self.len() - self.resolved_count()
    }
}
