pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_RESULTS: usize = 5;
pub const SEARCH_RADII_KM: [u8; 3] = [1, 2, 5];
pub const TIME_FORMAT: &str = "%H:%M";
pub const MAPS_URL: &str = "https://www.google.com/maps";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_VENUES_PATH: &str = "data/venues.json";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const MESSAGE_LIMIT: usize = 4096;
