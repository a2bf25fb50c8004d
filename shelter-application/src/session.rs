use crate::{error::AppError, *};
use shelter_core::gateways::{
    geocode::GeoCodingGateway,
    location::{LocationError, LocationProvider, Permission},
    map::MapLauncher,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub nearby_radius: Distance,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            nearby_radius: usecases::DEFAULT_NEARBY_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The reference location is still unknown.
    Uninitialized,
    Located,
}

/// A shelter locator session.
///
/// The session exclusively owns the shelter registry and all
/// state that is presented to the user. Every action takes
/// `&mut self`, so only a single action can be in flight at
/// any time and overlapping add/delete requests are impossible.
///
/// Failed actions never leave the session in an unusable state:
/// either the action succeeds or no state is modified.
#[derive(Debug)]
pub struct Session<G, L, M> {
    registry: ShelterRegistry,
    geocoder: G,
    location_provider: L,
    map_launcher: M,
    config: SessionConfig,
    reference_location: Option<MapPoint>,
    displayed_shelters: Vec<Shelter>,
    pending_delete_id: Option<ShelterId>,
}

impl<G, L, M> Session<G, L, M>
where
    G: GeoCodingGateway,
    L: LocationProvider,
    M: MapLauncher,
{
    pub fn new(geocoder: G, location_provider: L, map_launcher: M, config: SessionConfig) -> Self {
        Self::with_registry(
            ShelterRegistry::new(),
            geocoder,
            location_provider,
            map_launcher,
            config,
        )
    }

    pub fn with_registry(
        registry: ShelterRegistry,
        geocoder: G,
        location_provider: L,
        map_launcher: M,
        config: SessionConfig,
    ) -> Self {
        Self {
            registry,
            geocoder,
            location_provider,
            map_launcher,
            config,
            reference_location: None,
            displayed_shelters: vec![],
            pending_delete_id: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.reference_location.is_some() {
            SessionState::Located
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn reference_location(&self) -> Option<MapPoint> {
        self.reference_location
    }

    pub fn displayed_shelters(&self) -> &[Shelter] {
        &self.displayed_shelters
    }

    pub fn pending_delete_id(&self) -> Option<ShelterId> {
        self.pending_delete_id
    }

    pub fn registry(&self) -> &ShelterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Distance between the reference location and the shelter.
    pub fn distance_to(&self, shelter: &Shelter) -> Option<Distance> {
        self.reference_location
            .map(|reference| shelter.distance_from(reference))
    }

    /// Request a fresh location fix and use it as the reference location.
    ///
    /// On failure the previous reference location is kept.
    pub fn locate(&mut self) -> Result<MapPoint> {
        debug!("Requesting location fix");
        let pos = self.request_location_fix().inspect_err(|err| {
            warn!("Failed to locate: {err}");
        })?;
        self.reference_location = Some(pos);
        info!("Located at {pos}");
        Ok(pos)
    }

    fn request_location_fix(&self) -> std::result::Result<MapPoint, LocationError> {
        if self.location_provider.request_permission() == Permission::Denied {
            return Err(LocationError::PermissionDenied);
        }
        self.location_provider.current_position()
    }

    /// Replace the displayed shelters by all user-added shelters and
    /// the predefined shelters within the nearby radius.
    ///
    /// Returns the number of displayed shelters.
    pub fn find_nearby(&mut self) -> Result<usize> {
        debug!("Searching nearby shelters");
        let reference = self.located()?;
        self.displayed_shelters =
            usecases::find_nearby_shelters(&self.registry, reference, self.config.nearby_radius);
        info!(
            "Displaying {} shelters near {reference}",
            self.displayed_shelters.len()
        );
        Ok(self.displayed_shelters.len())
    }

    pub fn add_by_address(&mut self, address: &str, name: &str) -> Result<Shelter> {
        debug!("Adding shelter by address '{address}'");
        let shelter =
            usecases::add_shelter_by_address(&mut self.registry, &self.geocoder, address, name)
                .inspect_err(|err| {
                    warn!("Failed to add shelter by address: {err}");
                })?;
        self.refresh_displayed_shelters();
        Ok(shelter)
    }

    pub fn add_current_location(&mut self, name: &str) -> Result<Shelter> {
        debug!("Adding shelter at the current location");
        let pos = self.located()?;
        let shelter = usecases::add_shelter(
            &mut self.registry,
            pos,
            name,
            ShelterSource::CurrentLocation,
        );
        self.refresh_displayed_shelters();
        Ok(shelter)
    }

    /// Mark a user-added shelter for deletion.
    ///
    /// Requests for predefined or unknown shelters are ignored
    /// and `false` is returned.
    pub fn request_delete(&mut self, id: ShelterId) -> bool {
        match usecases::deletable_shelter(&self.registry, id) {
            Ok(shelter) => {
                debug!("Awaiting confirmation to delete shelter {id} '{}'", shelter.name);
                self.pending_delete_id = Some(id);
                true
            }
            Err(err) => {
                debug!("Ignoring delete request: {err}");
                false
            }
        }
    }

    /// Delete the shelter that awaits confirmation.
    ///
    /// Returns the id of the deleted shelter, if any.
    pub fn confirm_delete(&mut self) -> Option<ShelterId> {
        let Some(id) = self.pending_delete_id.take() else {
            debug!("No pending delete request to confirm");
            return None;
        };
        let deleted = usecases::delete_shelter(&mut self.registry, id);
        self.refresh_displayed_shelters();
        debug_assert!(self.displayed_shelters.iter().all(|s| s.id != id));
        deleted.then_some(id)
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete_id.take() {
            debug!("Cancelled deletion of shelter {id}");
        }
    }

    pub fn open_in_map(&self, id: ShelterId) -> Result<()> {
        let shelter = self.registry.get_shelter(id)?;
        self.map_launcher.open_map(shelter.pos, &shelter.name);
        Ok(())
    }

    fn located(&self) -> Result<MapPoint> {
        self.reference_location
            .ok_or(AppError::Business(usecases::Error::LocationUnavailable))
    }

    // User-added shelters first, followed by the other shelters
    // that are currently displayed and still exist.
    fn refresh_displayed_shelters(&mut self) {
        let registry = &self.registry;
        let others = self
            .displayed_shelters
            .drain(..)
            .filter(|s| !s.is_user_added())
            .filter(|s| registry.get_shelter(s.id).is_ok())
            .collect();
        self.displayed_shelters =
            usecases::merge_displayed_shelters(registry.user_added_shelters(), others);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::prelude::*;

    #[test]
    fn new_session_is_uninitialized() {
        let session = new_session(located_at_baton_rouge());
        assert_eq!(SessionState::Uninitialized, session.state());
        assert!(session.reference_location().is_none());
        assert!(session.displayed_shelters().is_empty());
        assert!(session.pending_delete_id().is_none());
    }

    #[test]
    fn find_nearby_before_locate() {
        let mut session = new_session(located_at_baton_rouge());
        let err = session.find_nearby().unwrap_err();
        assert!(err.is_location_unavailable());
        assert!(session.displayed_shelters().is_empty());
        assert_eq!(SessionState::Uninitialized, session.state());
    }

    #[test]
    fn locate_and_find_all_predefined_shelters() {
        let mut session = new_session(located_at_baton_rouge());
        let pos = session.locate().unwrap();
        assert_eq!(baton_rouge(), pos);
        assert_eq!(SessionState::Located, session.state());
        assert_eq!(Some(baton_rouge()), session.reference_location());

        assert_eq!(11, session.find_nearby().unwrap());
        assert_eq!(predefined_shelters(), session.displayed_shelters());
        assert!(session
            .displayed_shelters()
            .iter()
            .all(Shelter::is_predefined));
    }

    #[test]
    fn locate_with_denied_permission() {
        let mut session = new_session(MockLocationProvider::denied());
        let err = session.locate().unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::Location(
                LocationError::PermissionDenied
            ))
        ));
        assert_eq!(SessionState::Uninitialized, session.state());
    }

    #[test]
    fn locate_without_fix() {
        let mut session = new_session(MockLocationProvider::without_fix());
        assert!(session.locate().is_err());
        assert_eq!(SessionState::Uninitialized, session.state());
        // the session is still usable
        assert!(session.find_nearby().unwrap_err().is_location_unavailable());
    }

    #[test]
    fn relocate_refreshes_reference_location() {
        let location = located_at_baton_rouge();
        let mut session = new_session(location.clone());
        session.locate().unwrap();
        location.move_to(Some(houston()));
        assert_eq!(houston(), session.locate().unwrap());
        assert_eq!(Some(houston()), session.reference_location());
        assert_eq!(0, session.find_nearby().unwrap());
    }

    #[test]
    fn failed_relocate_keeps_previous_reference_location() {
        let location = located_at_baton_rouge();
        let mut session = new_session(location.clone());
        session.locate().unwrap();
        location.move_to(None);
        assert!(session.locate().is_err());
        assert_eq!(SessionState::Located, session.state());
        assert_eq!(Some(baton_rouge()), session.reference_location());
    }

    #[test]
    fn add_by_empty_address() {
        let mut session = new_session(located_at_baton_rouge());
        let before = session.registry().all_shelters();
        let err = session.add_by_address("", "X").unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::Geocode(GeocodeError::EmptyAddress))
        ));
        assert_eq!(before, session.registry().all_shelters());
        assert!(session.displayed_shelters().is_empty());
    }

    #[test]
    fn add_by_address_with_failing_lookup() {
        let mut session = Session::new(
            MockGeoCoder::failing(),
            located_at_baton_rouge(),
            MockMapLauncher::default(),
            SessionConfig::default(),
        );
        session.locate().unwrap();
        session.find_nearby().unwrap();
        let displayed = session.displayed_shelters().to_vec();
        assert!(session.add_by_address("1 Main St", "").is_err());
        assert_eq!(displayed, session.displayed_shelters());
        assert_eq!(11, session.registry().len());
    }

    #[test]
    fn add_by_address_is_displayed_first() {
        let mut session = new_session(located_at_baton_rouge());
        session.locate().unwrap();
        session.find_nearby().unwrap();

        let shelter = session
            .add_by_address("Houston, TX", "Cousin Joe")
            .unwrap();

        assert_eq!("Cousin Joe", shelter.name);
        assert_eq!(houston(), shelter.pos);
        assert!(shelter.is_user_added());
        assert_eq!(12, session.displayed_shelters().len());
        assert_eq!(&shelter, &session.displayed_shelters()[0]);

        // user-added shelters are never filtered by distance
        assert_eq!(12, session.find_nearby().unwrap());
        assert_eq!(&shelter, &session.displayed_shelters()[0]);
    }

    #[test]
    fn add_by_address_before_locate() {
        let mut session = new_session(located_at_baton_rouge());
        let shelter = session.add_by_address("Houston, TX", "").unwrap();
        assert_eq!("New Shelter", shelter.name);
        assert_eq!(vec![shelter], session.displayed_shelters());
    }

    #[test]
    fn add_current_location_requires_location() {
        let mut session = new_session(located_at_baton_rouge());
        let err = session.add_current_location("Home").unwrap_err();
        assert!(err.is_location_unavailable());
        assert_eq!(11, session.registry().len());

        session.locate().unwrap();
        let shelter = session.add_current_location("").unwrap();
        assert_eq!("My Current Location", shelter.name);
        assert_eq!(baton_rouge(), shelter.pos);
        assert_eq!(vec![shelter], session.displayed_shelters());
        assert_eq!(12, session.registry().len());
    }

    #[test]
    fn request_and_cancel_delete() {
        let mut session = new_session(located_at_baton_rouge());
        session.locate().unwrap();
        let shelter = session.add_current_location("Home").unwrap();
        session.find_nearby().unwrap();
        let registry = session.registry().all_shelters();
        let displayed = session.displayed_shelters().to_vec();

        assert!(session.request_delete(shelter.id));
        assert_eq!(Some(shelter.id), session.pending_delete_id());
        session.cancel_delete();

        assert!(session.pending_delete_id().is_none());
        assert_eq!(registry, session.registry().all_shelters());
        assert_eq!(displayed, session.displayed_shelters());
    }

    #[test]
    fn request_and_confirm_delete() {
        let mut session = new_session(located_at_baton_rouge());
        session.locate().unwrap();
        let home = session.add_current_location("Home").unwrap();
        let cousin = session.add_by_address("Houston, TX", "Cousin").unwrap();
        session.find_nearby().unwrap();
        assert_eq!(13, session.displayed_shelters().len());

        assert!(session.request_delete(home.id));
        assert_eq!(Some(home.id), session.confirm_delete());

        assert!(session.pending_delete_id().is_none());
        assert_eq!(vec![cousin.clone()], session.registry().user_added_shelters());
        assert_eq!(12, session.registry().len());
        assert_eq!(12, session.displayed_shelters().len());
        assert_eq!(&cousin, &session.displayed_shelters()[0]);
        assert!(session.displayed_shelters().iter().all(|s| s.id != home.id));
    }

    #[test]
    fn request_delete_of_predefined_shelter_is_ignored() {
        let mut session = new_session(located_at_baton_rouge());
        session.locate().unwrap();
        session.find_nearby().unwrap();
        assert!(!session.request_delete(ShelterId::new(1)));
        assert!(session.pending_delete_id().is_none());
        assert!(session.confirm_delete().is_none());
        assert_eq!(11, session.registry().len());
        assert_eq!(11, session.displayed_shelters().len());
    }

    #[test]
    fn request_delete_of_unknown_shelter_is_ignored() {
        let mut session = new_session(located_at_baton_rouge());
        assert!(!session.request_delete(ShelterId::new(12345)));
        assert!(session.pending_delete_id().is_none());
    }

    #[test]
    fn confirm_without_pending_delete() {
        let mut session = new_session(located_at_baton_rouge());
        session.locate().unwrap();
        session.find_nearby().unwrap();
        assert!(session.confirm_delete().is_none());
        assert_eq!(11, session.displayed_shelters().len());
        session.cancel_delete();
        assert!(session.pending_delete_id().is_none());
    }

    #[test]
    fn open_shelter_in_map() {
        let launcher = MockMapLauncher::default();
        let mut session = Session::new(
            MockGeoCoder::houston(),
            located_at_baton_rouge(),
            launcher.clone(),
            SessionConfig::default(),
        );
        session.open_in_map(ShelterId::new(3)).unwrap();
        assert_eq!(
            vec![(
                MapPoint::from_lat_lng_deg(30.4418, -91.1882),
                "Hilton Inn".to_string()
            )],
            launcher.opened()
        );
        assert!(session.open_in_map(ShelterId::new(999)).is_err());
        let added = session.add_by_address("Houston", "").unwrap();
        session.open_in_map(added.id).unwrap();
        assert_eq!(2, launcher.opened().len());
    }

    #[test]
    fn distance_to_displayed_shelters() {
        let mut session = new_session(located_at_baton_rouge());
        let hilton = session.registry().get_shelter(ShelterId::new(3)).unwrap();
        assert!(session.distance_to(&hilton).is_none());
        session.locate().unwrap();
        let distance = session.distance_to(&hilton).unwrap();
        assert!(distance < Distance::from_miles(1.0));
    }

    #[test]
    fn custom_nearby_radius() {
        let mut session = Session::new(
            MockGeoCoder::houston(),
            located_at_baton_rouge(),
            MockMapLauncher::default(),
            SessionConfig {
                nearby_radius: Distance::from_miles(1.0),
            },
        );
        session.locate().unwrap();
        // St. Joseph Catholic Church, Hilton Inn and Raising Cane's River Center
        assert_eq!(3, session.find_nearby().unwrap());
    }
}
