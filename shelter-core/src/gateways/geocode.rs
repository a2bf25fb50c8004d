use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("No location found for '{address}'")]
    NoResults { address: String },
    #[error("The geocoding service returned an invalid coordinate: {lat},{lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("The geocoding service responded with status {status}")]
    Status { status: u16 },
    #[error("Geocoding request failed: {0}")]
    Request(#[source] anyhow::Error),
}

pub trait GeoCodingGateway {
    /// All candidate positions for the address as
    /// `(lat, lng)` degrees, best match first.
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Vec<(f64, f64)>, GeocodeError>;
}
