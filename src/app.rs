//! Application wiring
//!
//! Builds the shared store, change bus, and the service handles the
//! editors and views are constructed from. Services are cheap clones
//! around the same store and bus, so callers take them by value.

use std::path::PathBuf;
use std::sync::Arc;

use crate::bus::ChangeBus;
use crate::error::Result;
use crate::notify::Notifier;
use crate::services::{AuthService, ContentService, EventsService, LeadersService};
use crate::storage::Store;

/// Shared handles for one running application
pub struct AppState {
    pub store: Store,
    pub bus: ChangeBus,
    pub events: EventsService,
    pub leaders: LeadersService,
    pub content: ContentService,
    pub auth: AuthService,
}

impl AppState {
    /// File-backed state rooted at `data_dir`
    pub fn open(data_dir: PathBuf, notifier: Arc<dyn Notifier>) -> Result<Self> {
        tracing::info!("Opening data directory at {:?}", data_dir);
        let store = Store::file_backed(data_dir)?;
        Ok(Self::with_store(store, notifier))
    }

    /// In-memory state, used by tests and demos
    pub fn in_memory(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_store(Store::in_memory(), notifier)
    }

    pub fn with_store(store: Store, notifier: Arc<dyn Notifier>) -> Self {
        let bus = ChangeBus::new();
        Self {
            events: EventsService::new(store.clone(), bus.clone()),
            leaders: LeadersService::new(store.clone(), bus.clone()),
            content: ContentService::new(store.clone(), bus.clone()),
            auth: AuthService::new(store.clone(), notifier),
            store,
            bus,
        }
    }

    /// Touch every collection so first-run defaults are written out
    pub fn seed(&self) {
        let events = self.events.list();
        let leaders = self.leaders.list();
        let users = self.auth.users();
        self.content.text();
        self.content.images();
        tracing::info!(
            "Collections ready: {} events, {} leaders, {} users",
            events.len(),
            leaders.len(),
            users.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn services_share_one_store() {
        let state = AppState::in_memory(Arc::new(RecordingNotifier::new()));
        state.seed();

        let event = state.events.list()[0].clone();
        state.events.delete(&event.id).unwrap();

        // The same deletion is visible through a fresh service handle.
        let other = EventsService::new(state.store.clone(), state.bus.clone());
        assert!(other.get(&event.id).is_err());
    }

    #[test]
    fn seed_writes_every_collection() {
        let state = AppState::in_memory(Arc::new(RecordingNotifier::new()));
        state.seed();

        for key in [
            crate::config::EVENTS_KEY,
            crate::config::LEADERS_KEY,
            crate::config::USERS_KEY,
            crate::config::CONTENT_KEY,
            crate::config::IMAGES_KEY,
        ] {
            let raw: Option<serde_json::Value> = state.store.read(key).unwrap();
            assert!(raw.is_some(), "{} was not seeded", key);
        }
    }
}
