use anyhow::anyhow;
use serde::Deserialize;
use shelter_core::gateways::geocode::{GeoCodingGateway, GeocodeError};
use reqwest::StatusCode;
use std::{iter, time::Duration};

/// Forward geocoding over HTTP.
///
/// Sends `GET {base_url}/geocode?query=<address>&key=<api_key>`
/// and reads the positions from `results[*].geometry`.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpGeocoder {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/geocode", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn parse_http_response(status: StatusCode, body: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
    if !status.is_success() {
        return Err(GeocodeError::Status {
            status: status.as_u16(),
        });
    }
    parse_response(body)
}

// Only the best match has to be well-formed, incomplete
// alternatives are skipped.
fn parse_response(body: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|err| GeocodeError::Request(err.into()))?;
    let mut results = response
        .results
        .into_iter()
        .map(serde_json::from_value::<GeocodeResult>);
    let Some(best) = results.next() else {
        return Ok(vec![]);
    };
    let best = best.map_err(|err| GeocodeError::Request(err.into()))?;
    Ok(iter::once(best)
        .chain(results.filter_map(Result::ok))
        .map(|r| (r.geometry.lat, r.geometry.lng))
        .collect())
}

impl GeoCodingGateway for HttpGeocoder {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
        let url = self.endpoint_url();
        log::debug!("Requesting location of '{address}' from {url}");
        let response = self
            .client
            .get(&url)
            .query(&[("query", address), ("key", self.api_key.as_str())])
            .send()
            .map_err(|err| GeocodeError::Request(err.into()));
        let res = response.and_then(|response| {
            let status = response.status();
            let body = response
                .text()
                .map_err(|err| GeocodeError::Request(err.into()))?;
            parse_http_response(status, &body)
        });
        res.inspect_err(|err| {
            log::warn!("Failed to resolve address location '{address}': {err}");
        })
    }
}

/// Placeholder if no geocoding service has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

impl GeoCodingGateway for DisabledGeocoder {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
        log::debug!("Cannot resolve '{address}' because no geocoding gateway was configured");
        Err(GeocodeError::Request(anyhow!(
            "No geocoding gateway configured"
        )))
    }
}
