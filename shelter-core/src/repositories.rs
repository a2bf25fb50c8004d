// Storage access traits.
// The repository owns all shelters of a session and is
// the only place where shelters are created or removed.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
}

type Result<T> = std::result::Result<T, Error>;

pub trait ShelterRepo {
    /// Creates a new user-added shelter with a fresh id.
    ///
    /// A blank `name` is replaced by the default name of the `source`.
    fn add_shelter(&mut self, pos: MapPoint, name: &str, source: ShelterSource) -> Shelter;

    /// Only user-added shelters are removed. Returns `false`
    /// for predefined or unknown ids.
    fn remove_shelter(&mut self, id: ShelterId) -> bool;

    fn get_shelter(&self, id: ShelterId) -> Result<Shelter>;

    // Insertion order
    fn all_shelters(&self) -> Vec<Shelter>;

    fn user_added_shelters(&self) -> Vec<Shelter> {
        self.all_shelters()
            .into_iter()
            .filter(Shelter::is_user_added)
            .collect()
    }
}
