use crate::entities::MapPoint;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Permission to access the location was denied")]
    PermissionDenied,
    #[error("The current location is not available: {0}")]
    Unavailable(String),
}

/// Source of the device position.
pub trait LocationProvider {
    fn request_permission(&self) -> Permission;
    fn current_position(&self) -> Result<MapPoint, LocationError>;
}
