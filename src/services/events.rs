//! Events service
//!
//! Whole-collection read-modify-write over the events key. Collections are
//! small (tens of entries), so rewriting everything per mutation is the
//! accepted cost of keeping the store dependency-free.

use crate::bus::ChangeBus;
use crate::config::EVENTS_KEY;
use crate::error::{AppError, Result};
use crate::models::Event;
use crate::seed;
use crate::storage::Store;

/// Service for managing events
#[derive(Clone)]
pub struct EventsService {
    store: Store,
    bus: ChangeBus,
}

impl EventsService {
    pub fn new(store: Store, bus: ChangeBus) -> Self {
        Self { store, bus }
    }

    /// All events in display order.
    ///
    /// Seeds the default snapshot when the collection is absent and heals
    /// it when the stored text no longer parses. The fallback lives here,
    /// at the call site, by contract — never inside the store.
    pub fn list(&self) -> Vec<Event> {
        match self.store.read::<Vec<Event>>(EVENTS_KEY) {
            Ok(Some(events)) => events,
            Ok(None) => self.reseed(),
            Err(err) => {
                tracing::warn!("Events collection unreadable ({}), reseeding", err);
                self.reseed()
            }
        }
    }

    fn reseed(&self) -> Vec<Event> {
        let events = seed::default_events();
        if let Err(err) = self.store.write(EVENTS_KEY, &events) {
            tracing::warn!("Failed to persist events seed: {}", err);
        }
        events
    }

    /// A single event by id
    pub fn get(&self, id: &str) -> Result<Event> {
        self.list()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Event", id.to_string()))
    }

    /// Insert or update one event, keyed by id, then broadcast
    pub fn save(&self, event: Event) -> Result<()> {
        tracing::info!("Saving event: {}", event.id);

        let mut events = self.list();
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => events.push(event),
        }

        self.store.write(EVENTS_KEY, &events)?;
        self.bus.broadcast();

        Ok(())
    }

    /// Remove the matching event and re-persist the reduced collection
    pub fn delete(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting event: {}", id);

        let mut events = self.list();
        events.retain(|e| e.id != id);

        self.store.write(EVENTS_KEY, &events)?;
        self.bus.broadcast();

        Ok(())
    }
}
