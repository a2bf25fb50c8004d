use crate::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodeError},
};

/// Resolve an address into the position of the best match.
///
/// Only the first candidate returned by the gateway is considered.
/// Blank addresses are rejected without asking the gateway.
pub fn geocode_address<G>(gateway: &G, address: &str) -> Result<MapPoint, GeocodeError>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(GeocodeError::EmptyAddress);
    }
    let candidates = gateway.resolve_address_lat_lng(address)?;
    let Some(&(lat, lng)) = candidates.first() else {
        return Err(GeocodeError::NoResults {
            address: address.to_string(),
        });
    };
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or(GeocodeError::InvalidCoordinate { lat, lng })?;
    log::debug!("Resolved address '{address}': {pos}");
    Ok(pos)
}
