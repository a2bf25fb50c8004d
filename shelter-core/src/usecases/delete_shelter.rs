use super::prelude::*;

/// Check that the shelter exists and may be deleted.
pub fn deletable_shelter<R>(repo: &R, id: ShelterId) -> Result<Shelter>
where
    R: ShelterRepo,
{
    let shelter = repo.get_shelter(id)?;
    if !shelter.is_deletable() {
        return Err(Error::NotDeletable(id));
    }
    Ok(shelter)
}

/// Remove a user-added shelter. Predefined and unknown ids are ignored.
pub fn delete_shelter<R>(repo: &mut R, id: ShelterId) -> bool
where
    R: ShelterRepo,
{
    let deleted = repo.remove_shelter(id);
    if deleted {
        log::info!("Deleted shelter {id}");
    } else {
        log::debug!("Shelter {id} has not been deleted");
    }
    deleted
}
