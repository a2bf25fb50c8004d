use shelter_core::{
    gateways::{geocode::GeocodeError, location::LocationError},
    repositories::Error as RepoError,
    usecases::Error as BError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<GeocodeError> for AppError {
    fn from(err: GeocodeError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> AppError {
        AppError::Business(err.into())
    }
}

impl AppError {
    pub fn is_location_unavailable(&self) -> bool {
        matches!(self, Self::Business(BError::LocationUnavailable))
    }
}
