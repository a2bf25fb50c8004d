pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::shelter_builder::*;

pub mod shelter_builder {

    use super::*;
    use crate::{geo::*, id::*, shelter::*};

    #[derive(Debug)]
    pub struct ShelterBuild {
        shelter: Shelter,
    }

    impl ShelterBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.shelter.id = ShelterId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.shelter.name = name.into();
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.shelter.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn user_added(mut self) -> Self {
            self.shelter.origin = ShelterOrigin::UserAdded;
            self
        }
        pub fn predefined(mut self) -> Self {
            self.shelter.origin = ShelterOrigin::Predefined;
            self
        }
        pub fn finish(self) -> Shelter {
            self.shelter
        }
    }

    impl Builder for Shelter {
        type Build = ShelterBuild;
        fn build() -> ShelterBuild {
            ShelterBuild {
                shelter: Shelter {
                    id: ShelterId::new(0),
                    name: "A shelter".into(),
                    pos: MapPoint::from_lat_lng_deg(0, 0),
                    origin: ShelterOrigin::UserAdded,
                },
            }
        }
    }
}
