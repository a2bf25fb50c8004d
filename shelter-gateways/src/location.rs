use shelter_core::gateways::location::{LocationError, LocationProvider, Permission};
use shelter_entities::geo::MapPoint;

/// Location provider with a fixed, preconfigured position.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationProvider {
    pos: Option<MapPoint>,
    permission: Permission,
}

impl StaticLocationProvider {
    pub fn new(pos: Option<MapPoint>) -> Self {
        Self {
            pos,
            permission: Permission::Granted,
        }
    }

    pub fn denied() -> Self {
        Self {
            pos: None,
            permission: Permission::Denied,
        }
    }
}

impl LocationProvider for StaticLocationProvider {
    fn request_permission(&self) -> Permission {
        self.permission
    }

    fn current_position(&self) -> Result<MapPoint, LocationError> {
        if self.permission == Permission::Denied {
            return Err(LocationError::PermissionDenied);
        }
        self.pos.ok_or_else(|| {
            LocationError::Unavailable("No location has been configured".to_string())
        })
    }
}
