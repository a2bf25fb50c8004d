use super::{geocode_address, prelude::*};
use crate::gateways::geocode::GeoCodingGateway;

pub fn add_shelter<R>(repo: &mut R, pos: MapPoint, name: &str, source: ShelterSource) -> Shelter
where
    R: ShelterRepo,
{
    let shelter = repo.add_shelter(pos, name, source);
    log::info!(
        "Added shelter {} '{}' at {}",
        shelter.id,
        shelter.name,
        shelter.pos
    );
    shelter
}

/// Geocode the address and add a shelter at the resulting position.
///
/// The repository is left untouched if the address cannot be resolved.
pub fn add_shelter_by_address<R, G>(
    repo: &mut R,
    gateway: &G,
    address: &str,
    name: &str,
) -> Result<Shelter>
where
    R: ShelterRepo,
    G: GeoCodingGateway + ?Sized,
{
    let pos = geocode_address(gateway, address)?;
    Ok(add_shelter(repo, pos, name, ShelterSource::Address))
}
