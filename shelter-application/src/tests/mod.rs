pub mod prelude {

    use std::{cell::RefCell, rc::Rc};

    pub use shelter_core::gateways::geocode::GeocodeError;
    use shelter_core::gateways::{
        geocode::GeoCodingGateway,
        location::{LocationError, LocationProvider, Permission},
        map::MapLauncher,
    };

    use crate::{prelude::*, MapPoint};

    pub fn baton_rouge() -> MapPoint {
        MapPoint::from_lat_lng_deg(30.45, -91.18)
    }

    pub fn houston() -> MapPoint {
        MapPoint::from_lat_lng_deg(29.7604, -95.3698)
    }

    pub struct MockGeoCoder {
        result: Option<MapPoint>,
    }

    impl MockGeoCoder {
        pub fn houston() -> Self {
            Self {
                result: Some(houston()),
            }
        }

        pub fn failing() -> Self {
            Self { result: None }
        }
    }

    impl GeoCodingGateway for MockGeoCoder {
        fn resolve_address_lat_lng(
            &self,
            _: &str,
        ) -> std::result::Result<Vec<(f64, f64)>, GeocodeError> {
            self.result
                .map(|pos| vec![pos.to_lat_lng_deg()])
                .ok_or_else(|| GeocodeError::Request(anyhow::anyhow!("timeout")))
        }
    }

    /// Location provider whose position can be changed
    /// while it is owned by a session.
    #[derive(Clone)]
    pub struct MockLocationProvider {
        pos: Rc<RefCell<Option<MapPoint>>>,
        permission: Permission,
    }

    impl MockLocationProvider {
        pub fn at(pos: MapPoint) -> Self {
            Self {
                pos: Rc::new(RefCell::new(Some(pos))),
                permission: Permission::Granted,
            }
        }

        pub fn without_fix() -> Self {
            Self {
                pos: Rc::new(RefCell::new(None)),
                permission: Permission::Granted,
            }
        }

        pub fn denied() -> Self {
            Self {
                pos: Rc::new(RefCell::new(Some(baton_rouge()))),
                permission: Permission::Denied,
            }
        }

        pub fn move_to(&self, pos: Option<MapPoint>) {
            *self.pos.borrow_mut() = pos;
        }
    }

    impl LocationProvider for MockLocationProvider {
        fn request_permission(&self) -> Permission {
            self.permission
        }

        fn current_position(&self) -> std::result::Result<MapPoint, LocationError> {
            self.pos
                .borrow()
                .ok_or_else(|| LocationError::Unavailable("timeout".into()))
        }
    }

    #[derive(Clone, Default)]
    pub struct MockMapLauncher {
        opened: Rc<RefCell<Vec<(MapPoint, String)>>>,
    }

    impl MockMapLauncher {
        pub fn opened(&self) -> Vec<(MapPoint, String)> {
            self.opened.borrow().clone()
        }
    }

    impl MapLauncher for MockMapLauncher {
        fn open_map(&self, pos: MapPoint, label: &str) {
            self.opened.borrow_mut().push((pos, label.to_string()));
        }
    }

    pub fn located_at_baton_rouge() -> MockLocationProvider {
        MockLocationProvider::at(baton_rouge())
    }

    pub fn new_session(
        location: MockLocationProvider,
    ) -> Session<MockGeoCoder, MockLocationProvider, MockMapLauncher> {
        let _ = env_logger::builder().is_test(true).try_init();
        Session::new(
            MockGeoCoder::houston(),
            location,
            MockMapLauncher::default(),
            SessionConfig::default(),
        )
    }
}
