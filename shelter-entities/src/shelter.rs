use crate::{geo::*, id::*};

use strum::{Display, EnumString};

/// Where a shelter entry comes from.
///
/// Only user-added shelters can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ShelterOrigin {
    Predefined,
    UserAdded,
}

impl ShelterOrigin {
    pub const fn is_deletable(self) -> bool {
        matches!(self, Self::UserAdded)
    }
}

/// How the position of a new user-added shelter was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelterSource {
    Address,
    CurrentLocation,
}

impl ShelterSource {
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Address => "New Shelter",
            Self::CurrentLocation => "My Current Location",
        }
    }

    /// Blank names are replaced by the default name of the source.
    pub fn resolve_name(self, name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.default_name().to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shelter {
    pub id: ShelterId,
    pub name: String,
    pub pos: MapPoint,
    pub origin: ShelterOrigin,
}

impl Shelter {
    pub fn is_user_added(&self) -> bool {
        self.origin == ShelterOrigin::UserAdded
    }

    pub fn is_predefined(&self) -> bool {
        self.origin == ShelterOrigin::Predefined
    }

    pub fn is_deletable(&self) -> bool {
        self.origin.is_deletable()
    }

    pub fn distance_from(&self, pos: MapPoint) -> Distance {
        MapPoint::distance(pos, self.pos)
    }
}
