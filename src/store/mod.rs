pub mod cached;
pub mod in_memory;
pub mod json_file;

use crate::model::venue::Venue;
use futures::future::BoxFuture;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use cached::CachedVenueStore;
pub use in_memory::InMemoryVenueStore;
pub use json_file::JsonFileVenueStore;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("venue source {0} not found")]
    NotFound(PathBuf),

    #[error("venue source is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to load venues: {0}")]
    Unknown(#[from] io::Error),
}

/// Source of the venue collection. Every call yields a fresh snapshot owned by the caller.
pub trait VenueStore: Send + Sync {
    fn load(&self) -> BoxFuture<'_, Result<Vec<Venue>, LoadError>>;
}
