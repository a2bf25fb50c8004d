use crate::{
    entities::*,
    repositories::{Error as RepoError, ShelterRepo},
};

/// In-memory catalog of predefined and user-added shelters.
///
/// Seeded with the predefined catalog on construction. Ids of
/// user-added shelters are minted from a counter that starts
/// above the largest predefined id and never goes backwards,
/// so ids are never reused within a session.
#[derive(Debug, Clone)]
pub struct ShelterRegistry {
    shelters: Vec<Shelter>,
    next_id: u64,
}

impl ShelterRegistry {
    pub fn new() -> Self {
        Self::with_predefined(predefined_shelters())
    }

    pub fn with_predefined(predefined: Vec<Shelter>) -> Self {
        debug_assert!(predefined.iter().all(Shelter::is_predefined));
        let next_id = predefined
            .iter()
            .map(|s| s.id.to_raw())
            .max()
            .unwrap_or_default()
            + 1;
        let registry = Self {
            shelters: predefined,
            next_id,
        };
        debug_assert!(registry.has_unique_ids());
        registry
    }

    pub fn len(&self) -> usize {
        self.shelters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelters.is_empty()
    }

    pub fn predefined_shelters(&self) -> Vec<Shelter> {
        self.shelters
            .iter()
            .filter(|s| s.is_predefined())
            .cloned()
            .collect()
    }

    fn mint_id(&mut self) -> ShelterId {
        let id = ShelterId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn has_unique_ids(&self) -> bool {
        let mut ids: Vec<_> = self.shelters.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|w| w[0] != w[1])
    }
}

impl Default for ShelterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelterRepo for ShelterRegistry {
    fn add_shelter(&mut self, pos: MapPoint, name: &str, source: ShelterSource) -> Shelter {
        let shelter = Shelter {
            id: self.mint_id(),
            name: source.resolve_name(name),
            pos,
            origin: ShelterOrigin::UserAdded,
        };
        self.shelters.push(shelter.clone());
        debug_assert!(self.has_unique_ids());
        shelter
    }

    fn remove_shelter(&mut self, id: ShelterId) -> bool {
        match self
            .shelters
            .iter()
            .position(|s| s.id == id && s.is_deletable())
        {
            Some(index) => {
                self.shelters.remove(index);
                true
            }
            None => false,
        }
    }

    fn get_shelter(&self, id: ShelterId) -> Result<Shelter, RepoError> {
        self.shelters
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_shelters(&self) -> Vec<Shelter> {
        self.shelters.clone()
    }
}
