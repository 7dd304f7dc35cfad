use super::{LoadError, VenueStore};
use crate::model::venue::Venue;
use futures::future::BoxFuture;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Serves the last successful load of the inner store until `ttl` passes.
/// Failed loads are returned as-is and never cached.
pub struct CachedVenueStore<S> {
    inner: S,
    ttl: Duration,
    cache: Mutex<Option<(Instant, Vec<Venue>)>>,
}

impl<S: VenueStore> CachedVenueStore<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        CachedVenueStore {
            inner,
            ttl,
            cache: Mutex::new(None),
        }
    }
}

impl<S: VenueStore> VenueStore for CachedVenueStore<S> {
    fn load(&self) -> BoxFuture<'_, Result<Vec<Venue>, LoadError>> {
        Box::pin(async move {
            // Held across the inner load so concurrent misses read the source once.
            let mut cache = self.cache.lock().await;
            if let Some((loaded_at, venues)) = cache.as_ref() {
                if loaded_at.elapsed() < self.ttl {
                    return Ok(venues.clone());
                }
            }

            let venues = self.inner.load().await?;
            *cache = Some((Instant::now(), venues.clone()));
            Ok(venues)
        })
    }
}
