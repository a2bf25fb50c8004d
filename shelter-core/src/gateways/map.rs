use crate::entities::MapPoint;

/// Hands a position over to an external map application.
pub trait MapLauncher {
    fn open_map(&self, pos: MapPoint, label: &str);
}
