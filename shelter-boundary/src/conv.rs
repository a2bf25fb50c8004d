use super::*;
use shelter_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = Error;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| Error {
            message: format!("Invalid coordinate: {lat},{lng}"),
        })
    }
}

impl From<e::shelter::ShelterOrigin> for ShelterOrigin {
    fn from(from: e::shelter::ShelterOrigin) -> Self {
        use e::shelter::ShelterOrigin as O;
        match from {
            O::Predefined => Self::Predefined,
            O::UserAdded => Self::UserAdded,
        }
    }
}

impl From<e::shelter::Shelter> for Shelter {
    fn from(from: e::shelter::Shelter) -> Self {
        let e::shelter::Shelter {
            id,
            name,
            pos,
            origin,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            name,
            lat,
            lng,
            origin: origin.into(),
            distance_miles: None,
        }
    }
}
