use crate::utils::constants::EARTH_RADIUS_KM;

/// Great-circle distance in kilometres between two points given in decimal degrees.
pub fn calculate_distance(lat_1: f64, lon_1: f64, lat_2: f64, lon_2: f64) -> f64 {
    let lat_1_rad = lat_1.to_radians();
    let lat_2_rad = lat_2.to_radians();
    let lon_1_rad = lon_1.to_radians();
    let lon_2_rad = lon_2.to_radians();

    let half_d_lat = ((lat_2_rad - lat_1_rad) / 2f64).sin();
    let half_d_lon = ((lon_2_rad - lon_1_rad) / 2f64).sin();

    // Rounding near antipodes or latitudes beyond +-90 can leave [0, 1].
    let a = (half_d_lat * half_d_lat
        + lat_1_rad.cos() * lat_2_rad.cos() * half_d_lon * half_d_lon)
        .clamp(0f64, 1f64);

    2f64 * a.sqrt().asin() * EARTH_RADIUS_KM
}
