use crate::model::venue::Venue;
use crate::utils::constants::MAX_RESULTS;

/// Venues within `radius_km` of the origin, closest first, paired with their distance.
/// Venues without coordinates are skipped.
pub fn nearby(
    venues: &[Venue],
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Vec<(&Venue, f64)> {
    let mut closest: Vec<(&Venue, f64)> = venues
        .iter()
        .filter_map(|venue| {
            venue
                .distance_to(latitude, longitude)
                .map(|distance| (venue, distance))
        })
        .filter(|(_, distance)| *distance <= radius_km)
        .collect();

    // Stable, so equal distances keep collection order.
    closest.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    closest.truncate(MAX_RESULTS);
    closest
}

/// Case-insensitive substring match against the address or any translation of the name.
pub fn by_area<'a>(venues: &'a [Venue], area: &str) -> Vec<&'a Venue> {
    let needle = area.to_lowercase();
    venues
        .iter()
        .filter(|venue| {
            venue.address.to_lowercase().contains(&needle)
                || venue
                    .name
                    .variants()
                    .any(|name| name.to_lowercase().contains(&needle))
        })
        .take(MAX_RESULTS)
        .collect()
}

/// Case-insensitive substring match against the vibe in `lang`. A venue with no vibe in
/// that language is compared as an empty string.
pub fn by_vibe<'a>(venues: &'a [Venue], vibe: &str, lang: &str) -> Vec<&'a Venue> {
    let needle = vibe.to_lowercase();
    venues
        .iter()
        .filter(|venue| {
            venue
                .vibe
                .get(lang)
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .take(MAX_RESULTS)
        .collect()
}

/// Every venue whose happy hour window contains `now_hh_mm`. Not truncated.
pub fn currently_open<'a>(venues: &'a [Venue], now_hh_mm: &str) -> Vec<&'a Venue> {
    venues
        .iter()
        .filter(|venue| {
            venue
                .happy_hour
                .as_ref()
                .is_some_and(|window| window.contains(now_hh_mm))
        })
        .collect()
}

pub fn popular(venues: &[Venue]) -> Vec<&Venue> {
    venues
        .iter()
        .filter(|venue| venue.popular)
        .take(MAX_RESULTS)
        .collect()
}
