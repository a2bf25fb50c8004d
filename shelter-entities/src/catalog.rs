//! The fixed catalog of predefined shelters.

use crate::{geo::*, id::*, shelter::*};

#[rustfmt::skip]
const PREDEFINED_SHELTERS: &[(u64, &str, f64, f64)] = &[
    ( 1, "Lamar Dixon"                                        , 30.2173, -90.9402),
    ( 2, "St. Joseph Catholic Church"                         , 30.4515, -91.1871),
    ( 3, "Hilton Inn"                                         , 30.4418, -91.1882),
    ( 4, "Raising Cane's River Center"                        , 30.4466, -91.1893),
    ( 5, "LSU Pete Maravich Assembly Center"                  , 30.4136, -91.1856),
    ( 6, "Southern University Seymour Gym"                    , 30.5233, -91.1918),
    ( 7, "Denham Springs High School"                         , 30.4749, -90.9576),
    ( 8, "Zachary High School"                                , 30.6488, -91.1562),
    ( 9, "Plaquemine Community Center"                        , 30.2891, -91.2343),
    (10, "Southeastern Louisiana University Pennington Center", 30.5153, -90.4679),
    (11, "Cajundome"                                          , 30.2113, -92.0416),
];

/// All predefined shelters in catalog order.
pub fn predefined_shelters() -> Vec<Shelter> {
    PREDEFINED_SHELTERS
        .iter()
        .map(|&(id, name, lat, lng)| Shelter {
            id: ShelterId::new(id),
            name: name.to_string(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            origin: ShelterOrigin::Predefined,
        })
        .collect()
}

/// The largest id that is occupied by a predefined shelter.
pub fn max_predefined_id() -> ShelterId {
    PREDEFINED_SHELTERS
        .iter()
        .map(|(id, ..)| ShelterId::new(*id))
        .max()
        .unwrap_or(ShelterId::new(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn predefined_ids_are_unique() {
        let shelters = predefined_shelters();
        let ids: HashSet<_> = shelters.iter().map(|s| s.id).collect();
        assert_eq!(shelters.len(), ids.len());
        assert_eq!(ShelterId::new(11), max_predefined_id());
    }

    #[test]
    fn predefined_shelters_are_valid() {
        for s in predefined_shelters() {
            assert!(s.pos.is_valid());
            assert!(s.is_predefined());
            assert!(!s.name.trim().is_empty());
        }
    }

    #[test]
    fn first_catalog_rows() {
        let shelters = predefined_shelters();
        assert_eq!("Lamar Dixon", shelters[0].name);
        assert_eq!((30.2173, -90.9402), shelters[0].pos.to_lat_lng_deg());
        assert_eq!("St. Joseph Catholic Church", shelters[1].name);
        assert_eq!((30.4515, -91.1871), shelters[1].pos.to_lat_lng_deg());
        assert_eq!("Hilton Inn", shelters[2].name);
        assert_eq!((30.4418, -91.1882), shelters[2].pos.to_lat_lng_deg());
    }
}
