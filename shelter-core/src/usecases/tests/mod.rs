use crate::gateways::geocode::{GeoCodingGateway, GeocodeError};
use std::cell::RefCell;

/// Geocoding gateway that answers every request with
/// the same candidates and records the addresses.
#[derive(Default)]
pub struct MockGeoCoder {
    results: Option<Vec<(f64, f64)>>,
    requested: RefCell<Vec<String>>,
}

impl MockGeoCoder {
    pub fn with_results(results: Vec<(f64, f64)>) -> Self {
        Self {
            results: Some(results),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requested_addresses(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoCoder {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
        self.requested.borrow_mut().push(address.to_string());
        self.results
            .clone()
            .ok_or_else(|| GeocodeError::Request(anyhow::anyhow!("connection refused")))
    }
}
