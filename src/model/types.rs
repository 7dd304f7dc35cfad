use crate::model::state::State;
use crate::store::VenueStore;
use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};

pub(crate) type MyDialogue = Dialogue<State, InMemStorage<State>>;
pub(crate) type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
pub(crate) type SharedStore = Arc<dyn VenueStore>;
