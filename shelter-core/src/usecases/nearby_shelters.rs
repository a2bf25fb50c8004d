use super::prelude::*;

pub const DEFAULT_NEARBY_RADIUS: Distance = Distance::from_miles(100.0);

/// All shelters within `radius` of `reference`.
///
/// The order of `catalog` is preserved. A negative or
/// NaN radius matches nothing.
pub fn nearby_shelters(reference: MapPoint, radius: Distance, catalog: &[Shelter]) -> Vec<Shelter> {
    catalog
        .iter()
        .filter(|s| s.distance_from(reference) <= radius)
        .cloned()
        .collect()
}

/// Merge the shelters that are displayed to the user.
///
/// User-added shelters always come first and are never filtered,
/// followed by all other shelters in the given order. Shelters that
/// already appear in `user_added` are skipped.
pub fn merge_displayed_shelters(user_added: Vec<Shelter>, others: Vec<Shelter>) -> Vec<Shelter> {
    debug_assert!(user_added.iter().all(Shelter::is_user_added));
    let mut merged = user_added;
    let user_added_count = merged.len();
    for shelter in others {
        if !merged[..user_added_count].iter().any(|s| s.id == shelter.id) {
            merged.push(shelter);
        }
    }
    merged
}

/// Shelters to display around `reference`: every user-added shelter
/// followed by the predefined shelters within `radius`.
pub fn find_nearby_shelters<R>(repo: &R, reference: MapPoint, radius: Distance) -> Vec<Shelter>
where
    R: ShelterRepo,
{
    let nearby = nearby_shelters(reference, radius, &repo.all_shelters());
    let displayed = merge_displayed_shelters(repo.user_added_shelters(), nearby);
    log::debug!(
        "Found {} shelters within {radius} of {reference}",
        displayed.len()
    );
    displayed
}
