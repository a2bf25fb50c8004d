use crate::{
    entities::ShelterId,
    gateways::{geocode::GeocodeError, location::LocationError},
    repositories,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("The current location is unavailable")]
    LocationUnavailable,
    #[error("Shelter {0} cannot be deleted")]
    NotDeletable(ShelterId),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
