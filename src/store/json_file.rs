use super::{LoadError, VenueStore};
use crate::model::venue::Venue;
use futures::future::BoxFuture;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads a JSON array of venues from disk on every load.
pub struct JsonFileVenueStore {
    path: PathBuf,
}

impl JsonFileVenueStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileVenueStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VenueStore for JsonFileVenueStore {
    fn load(&self) -> BoxFuture<'_, Result<Vec<Venue>, LoadError>> {
        Box::pin(async move {
            let raw = match tokio::fs::read_to_string(&self.path).await {
                Ok(raw) => raw,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(LoadError::NotFound(self.path.clone()))
                }
                Err(err) => return Err(LoadError::Unknown(err)),
            };
            let venues = Venue::list_from_json(&raw)?;
            log::debug!("Loaded {} venues from {}", venues.len(), self.path.display());
            Ok(venues)
        })
    }
}
