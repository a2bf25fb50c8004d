pub mod geocoding;
pub mod location;
pub mod map;
