use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Public OpenStreetMap Nominatim search endpoint
pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Client label sent as User-Agent when none is given
pub const DEFAULT_USER_AGENT: &str = "h501-student";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A single geocoding match, exactly as reported by the service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Forward geocoding: free text in, at most one match out.
///
/// `Ok(None)` means the service answered but found nothing. Any `Err` is a
/// transport or service failure and is left for the caller to deal with.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>>;
}

/// Nominatim search API response entry
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Blocking client for the Nominatim search API
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    user_agent: String,
}

impl NominatimClient {
    /// Build a client that identifies itself with `user_agent`.
    /// Nothing is sent over the network here.
    pub fn new(user_agent: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: NOMINATIM_SEARCH_URL.to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Point the client at another Nominatim-compatible search endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>> {
        log::debug!("Geocoding '{}' via {}", query, self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .context("Failed to send geocoding request")?;

        if !response.status().is_success() {
            anyhow::bail!("Geocoding API returned status: {}", response.status());
        }

        let body = response
            .text()
            .context("Failed to read geocoding response")?;

        parse_search_response(&body)
    }
}

/// Create a Nominatim client labelled with `agent`
pub fn get_geolocator(agent: &str) -> Result<NominatimClient> {
    NominatimClient::new(agent)
}

/// Create a Nominatim client with the default label
pub fn get_default_geolocator() -> Result<NominatimClient> {
    get_geolocator(DEFAULT_USER_AGENT)
}

/// Turn a Nominatim `format=json` search body into the first match, if any
pub fn parse_search_response(body: &str) -> Result<Option<Coordinates>> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).context("Failed to parse geocoding response")?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid latitude in geocoding response: {:?}", place.lat))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid longitude in geocoding response: {:?}", place.lon))?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}
