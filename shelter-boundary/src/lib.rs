use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ShelterOrigin {
    Predefined,
    UserAdded,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Shelter {
    pub id       : u64,
    pub name     : String,
    pub lat      : f64,
    pub lng      : f64,
    pub origin   : ShelterOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles : Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    Uninitialized,
    Located,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_location: Option<Coordinate>,
    pub displayed_shelters: Vec<Shelter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_delete_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Error {
    pub message: String,
}
