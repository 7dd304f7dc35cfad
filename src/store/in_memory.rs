use super::{LoadError, VenueStore};
use crate::model::venue::Venue;
use futures::future::BoxFuture;

pub struct InMemoryVenueStore {
    venues: Vec<Venue>,
}

impl InMemoryVenueStore {
    pub fn new(venues: Vec<Venue>) -> Self {
        InMemoryVenueStore { venues }
    }
}

impl VenueStore for InMemoryVenueStore {
    fn load(&self) -> BoxFuture<'_, Result<Vec<Venue>, LoadError>> {
        Box::pin(async move { Ok(self.venues.clone()) })
    }
}
